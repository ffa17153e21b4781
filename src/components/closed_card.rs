//! Closed card cover.

use dioxus::prelude::*;
use greetcard_core::motion;

#[component]
pub fn ClosedCard(title: String, hint: String) -> Element {
    let heartbeat = use_hook(|| motion::cover_heartbeat().style());

    rsx! {
        div { class: "card-closed",
            div { class: "card-sheen" }

            div { class: "card-cover",
                div { class: "cover-heart", style: "{heartbeat}", "💕" }
                h2 { class: "cover-title", "{title}" }
                p { class: "cover-hint", "{hint}" }
            }

            div { class: "corner corner-tl", "🌹" }
            div { class: "corner corner-br", "🌹" }
            div { class: "corner corner-tr", "❤️" }
            div { class: "corner corner-bl", "❤️" }
        }
    }
}
