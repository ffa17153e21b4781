//! Card session state machine.
//!
//! ```text
//!            activate                close / dismiss(Yes)
//!  Closed ─────────────▶ Open ─────────────────────────▶ Closed
//!                          │
//!                          ├─ NoDialog ──Yes/No──▶ DialogShown(choice)
//!                          └─ DialogShown ──dismiss──▶ NoDialog
//! ```
//!
//! Confetti is only visible while the card is open and the dialog is only
//! reachable from the open card. The session owns at most one outstanding
//! [`TimerTicket`]; every transition that supersedes the auto-hide clears it.

use std::fmt;

use crate::error::{CardError, CardResult};
use crate::revision::{Revision, RevisionPolicy};
use crate::timer::TimerTicket;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Closed,
    Open,
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardState::Closed => f.write_str("closed"),
            CardState::Open => f.write_str("open"),
        }
    }
}

/// Which response control was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Hidden,
    Shown(Choice),
}

impl DialogState {
    pub fn is_shown(&self) -> bool {
        matches!(self, DialogState::Shown(_))
    }
}

/// Ephemeral state of one card view.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSession {
    revision: Revision,
    policy: RevisionPolicy,
    state: CardState,
    confetti_visible: bool,
    dialog: DialogState,
    pending_timer: Option<TimerTicket>,
    next_timer_id: u64,
}

impl CardSession {
    /// A closed card for the given revision.
    pub fn new(revision: Revision) -> Self {
        Self {
            revision,
            policy: revision.policy(),
            state: CardState::Closed,
            confetti_visible: false,
            dialog: DialogState::Hidden,
            pending_timer: None,
            next_timer_id: 0,
        }
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn policy(&self) -> &RevisionPolicy {
        &self.policy
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == CardState::Open
    }

    pub fn confetti_visible(&self) -> bool {
        self.confetti_visible
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    /// The auto-hide timer currently allowed to fire, if any.
    pub fn pending_timer(&self) -> Option<TimerTicket> {
        self.pending_timer
    }

    /// Open the card and start the confetti.
    ///
    /// Returns the ticket the host must schedule, or `None` when the card
    /// was already open (the running timer is left alone).
    pub fn activate(&mut self) -> Option<TimerTicket> {
        if self.is_open() {
            tracing::debug!("activate ignored, card already open");
            return None;
        }

        self.next_timer_id += 1;
        let ticket = TimerTicket::new(self.next_timer_id, self.policy.confetti_duration);

        self.state = CardState::Open;
        self.confetti_visible = true;
        self.pending_timer = Some(ticket);

        tracing::debug!(
            timer = ticket.id(),
            delay_ms = ticket.delay().as_millis() as u64,
            "card opened, confetti started"
        );
        Some(ticket)
    }

    /// Close the open card from its close button.
    pub fn close(&mut self) -> CardResult<()> {
        if !self.policy.close_button {
            return Err(CardError::FeatureUnavailable {
                operation: "close",
                revision: self.revision,
            });
        }
        if !self.is_open() {
            return Err(CardError::InvalidTransition {
                operation: "close",
                state: self.state,
            });
        }

        self.collapse();
        tracing::debug!("card closed from close button");
        Ok(())
    }

    pub fn choose_yes(&mut self) -> CardResult<()> {
        self.choose(Choice::Yes)
    }

    pub fn choose_no(&mut self) -> CardResult<()> {
        self.choose(Choice::No)
    }

    fn choose(&mut self, choice: Choice) -> CardResult<()> {
        if !self.policy.response_dialog {
            return Err(CardError::FeatureUnavailable {
                operation: "choose a response",
                revision: self.revision,
            });
        }
        if !self.is_open() {
            return Err(CardError::InvalidTransition {
                operation: "choose a response",
                state: self.state,
            });
        }
        if self.dialog.is_shown() {
            return Err(CardError::DialogAlreadyShown);
        }

        self.dialog = DialogState::Shown(choice);
        tracing::debug!(?choice, "response dialog shown");
        Ok(())
    }

    /// Hide the response dialog. Accepting (Yes) also folds the card back
    /// down. Returns the choice that was dismissed.
    pub fn dismiss_dialog(&mut self) -> CardResult<Choice> {
        let DialogState::Shown(choice) = self.dialog else {
            return Err(CardError::NoDialog);
        };

        self.dialog = DialogState::Hidden;
        if choice == Choice::Yes {
            self.collapse();
            tracing::debug!("accepted, card folded back down");
        } else {
            tracing::debug!("declined dialog dismissed, card stays open");
        }
        Ok(choice)
    }

    /// Timer callback. Hides the confetti only if `ticket` is still the
    /// outstanding timer; returns whether it did.
    pub fn confetti_elapsed(&mut self, ticket: TimerTicket) -> bool {
        if self.pending_timer != Some(ticket) {
            tracing::debug!(timer = ticket.id(), "stale confetti timer ignored");
            return false;
        }

        self.pending_timer = None;
        self.confetti_visible = false;
        tracing::debug!(timer = ticket.id(), "confetti finished");
        true
    }

    /// Both invariants hold: confetti and dialog imply an open card.
    pub fn invariants_hold(&self) -> bool {
        let open = self.is_open();
        (!self.confetti_visible || open)
            && (!self.dialog.is_shown() || open)
            && (self.pending_timer.is_none() || open)
    }

    // Shared by `close` and the Yes branch of `dismiss_dialog`.
    fn collapse(&mut self) {
        if let Some(ticket) = self.pending_timer.take() {
            tracing::debug!(timer = ticket.id(), "confetti timer canceled");
        }
        self.state = CardState::Closed;
        self.confetti_visible = false;
        self.dialog = DialogState::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(revision: Revision) -> (CardSession, TimerTicket) {
        let mut session = CardSession::new(revision);
        let ticket = session.activate().unwrap();
        (session, ticket)
    }

    #[test]
    fn starts_closed() {
        let session = CardSession::new(Revision::Dialog);
        assert_eq!(session.state(), CardState::Closed);
        assert!(!session.confetti_visible());
        assert_eq!(session.dialog(), DialogState::Hidden);
        assert!(session.pending_timer().is_none());
    }

    #[test]
    fn activate_opens_with_confetti() {
        let (session, ticket) = open(Revision::Classic);
        assert!(session.is_open());
        assert!(session.confetti_visible());
        assert_eq!(session.pending_timer(), Some(ticket));
        assert_eq!(ticket.delay().as_millis(), 5_000);
    }

    #[test]
    fn second_activate_is_noop() {
        let (mut session, ticket) = open(Revision::Dialog);
        assert!(session.activate().is_none());
        assert!(session.is_open());
        assert_eq!(session.pending_timer(), Some(ticket));
    }

    #[test]
    fn close_clears_confetti_and_timer() {
        let (mut session, ticket) = open(Revision::Responsive);
        session.close().unwrap();
        assert_eq!(session.state(), CardState::Closed);
        assert!(!session.confetti_visible());
        assert!(session.pending_timer().is_none());

        // Late callback is ignored
        assert!(!session.confetti_elapsed(ticket));
        assert!(!session.confetti_visible());
    }

    #[test]
    fn close_when_closed_is_rejected() {
        let mut session = CardSession::new(Revision::Dialog);
        assert!(matches!(
            session.close(),
            Err(CardError::InvalidTransition { operation: "close", state: CardState::Closed })
        ));
    }

    #[test]
    fn classic_has_no_close() {
        let (mut session, _) = open(Revision::Classic);
        assert!(matches!(
            session.close(),
            Err(CardError::FeatureUnavailable { .. })
        ));
        assert!(session.is_open());
    }

    #[test]
    fn reopen_issues_fresh_ticket() {
        let (mut session, first) = open(Revision::Dialog);
        session.close().unwrap();
        let second = session.activate().unwrap();
        assert_ne!(first, second);

        // The first timer firing now must not hide the new burst
        assert!(!session.confetti_elapsed(first));
        assert!(session.confetti_visible());
        assert!(session.confetti_elapsed(second));
        assert!(!session.confetti_visible());
        assert!(session.is_open());
    }

    #[test]
    fn yes_then_dismiss_collapses_card() {
        let (mut session, ticket) = open(Revision::Dialog);
        session.choose_yes().unwrap();
        assert_eq!(session.dialog(), DialogState::Shown(Choice::Yes));

        assert_eq!(session.dismiss_dialog().unwrap(), Choice::Yes);
        assert_eq!(session.state(), CardState::Closed);
        assert_eq!(session.dialog(), DialogState::Hidden);
        assert!(!session.confetti_visible());
        assert!(!session.confetti_elapsed(ticket));
    }

    #[test]
    fn no_then_dismiss_keeps_card_open() {
        let (mut session, _) = open(Revision::Dialog);
        session.choose_no().unwrap();
        assert_eq!(session.dialog(), DialogState::Shown(Choice::No));

        assert_eq!(session.dismiss_dialog().unwrap(), Choice::No);
        assert!(session.is_open());
        assert_eq!(session.dialog(), DialogState::Hidden);
        assert!(session.confetti_visible());
    }

    #[test]
    fn choice_requires_open_card_without_dialog() {
        let mut session = CardSession::new(Revision::Dialog);
        assert!(matches!(
            session.choose_yes(),
            Err(CardError::InvalidTransition { .. })
        ));

        session.activate();
        session.choose_no().unwrap();
        assert!(matches!(session.choose_yes(), Err(CardError::DialogAlreadyShown)));
        assert_eq!(session.dialog(), DialogState::Shown(Choice::No));
    }

    #[test]
    fn dismiss_without_dialog_is_rejected() {
        let (mut session, _) = open(Revision::Dialog);
        assert!(matches!(session.dismiss_dialog(), Err(CardError::NoDialog)));
        assert!(session.is_open());
    }

    #[test]
    fn responses_unavailable_before_final_revision() {
        let (mut session, _) = open(Revision::Responsive);
        assert!(matches!(
            session.choose_yes(),
            Err(CardError::FeatureUnavailable { .. })
        ));
    }

    #[test]
    fn close_hides_open_dialog() {
        let (mut session, _) = open(Revision::Dialog);
        session.choose_no().unwrap();
        session.close().unwrap();
        assert_eq!(session.dialog(), DialogState::Hidden);
        assert!(session.invariants_hold());
    }
}
