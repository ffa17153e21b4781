use dioxus::prelude::*;
use greetcard_core::{CardSession, SessionContext};

use crate::components::GreetingCard;
use crate::context::CardController;
use crate::get_card_config;
use crate::theme::{motion_styles, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles, the session context and the card controller.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_card_config);

    // Classified and laid out once per session
    let session_context = use_hook(|| SessionContext::new(&config, std::env::consts::OS));
    let session = use_signal(|| CardSession::new(config.revision));
    let confetti_task: Signal<Option<Task>> = use_signal(|| None);

    use_context_provider(|| session_context);
    use_context_provider(|| CardController::new(session, confetti_task));

    let motion_css = use_hook(motion_styles);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {motion_css} }
        GreetingCard {}
    }
}
