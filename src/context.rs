//! Card context for the greeting card view.
//!
//! Provides the card controller and the per-session context to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let card = use_card();
//! let view = render(&card.session().read(), &use_session_context());
//! ```

use dioxus::prelude::*;
use greetcard_core::{wait_out, CardError, CardSession, Choice, SessionContext};

/// State container for the card view.
///
/// Owns the session and the single outstanding confetti auto-hide task.
/// Every transition that supersedes the auto-hide cancels that task; the
/// session additionally ignores a ticket it no longer holds.
#[derive(Clone, Copy)]
pub struct CardController {
    session: Signal<CardSession>,
    confetti_task: Signal<Option<Task>>,
}

impl CardController {
    pub fn new(session: Signal<CardSession>, confetti_task: Signal<Option<Task>>) -> Self {
        Self {
            session,
            confetti_task,
        }
    }

    pub fn session(&self) -> Signal<CardSession> {
        self.session
    }

    /// Card clicked.
    pub fn activate(mut self) {
        let ticket = self.session.write().activate();
        let Some(ticket) = ticket else {
            return;
        };

        let mut session = self.session;
        let task = spawn(async move {
            let ticket = wait_out(ticket).await;
            session.write().confetti_elapsed(ticket);
        });

        // A finished task may still be stored from the previous opening
        if let Some(previous) = self.confetti_task.replace(Some(task)) {
            previous.cancel();
        }
    }

    /// Close button pressed.
    pub fn close(mut self) {
        let result = self.session.write().close();
        match result {
            Ok(()) => self.cancel_confetti_timer(),
            Err(e) => log_rejected(e),
        }
    }

    pub fn choose(mut self, choice: Choice) {
        let result = match choice {
            Choice::Yes => self.session.write().choose_yes(),
            Choice::No => self.session.write().choose_no(),
        };
        if let Err(e) = result {
            log_rejected(e);
        }
    }

    /// Response dialog dismissed.
    pub fn dismiss_dialog(mut self) {
        let result = self.session.write().dismiss_dialog();
        match result {
            Ok(Choice::Yes) => self.cancel_confetti_timer(),
            Ok(Choice::No) => {}
            Err(e) => log_rejected(e),
        }
    }

    fn cancel_confetti_timer(&mut self) {
        if let Some(task) = self.confetti_task.take() {
            task.cancel();
            tracing::debug!("confetti auto-hide task canceled");
        }
    }
}

fn log_rejected(e: CardError) {
    tracing::warn!("Card action rejected: {}", e);
}

/// Hook to access the card controller from context.
pub fn use_card() -> CardController {
    use_context::<CardController>()
}

/// Hook to access the context fixed for this session (content, viewport,
/// device class, ornament layout).
pub fn use_session_context() -> SessionContext {
    use_context::<SessionContext>()
}
