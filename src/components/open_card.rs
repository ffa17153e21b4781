//! Open card with the message.
//!
//! Flips in when mounted, then the heart, headline and message fade in one
//! after another. The close button and response controls only appear in
//! revisions that have them.

use dioxus::prelude::*;
use greetcard_core::{motion, Choice};
use greetcard_ui::{Button, ButtonVariant, CloseButton};

#[derive(Props, Clone, PartialEq)]
pub struct OpenCardProps {
    pub salutation: String,
    pub headline: String,
    pub body: String,
    pub closing: String,
    pub sender: String,
    pub show_close: bool,
    pub show_responses: bool,
    pub on_close: EventHandler<()>,
    pub on_choose: EventHandler<Choice>,
}

#[component]
pub fn OpenCard(props: OpenCardProps) -> Element {
    let styles = use_hook(|| {
        (
            motion::card_flip().style(),
            motion::heart_pop().style(),
            motion::headline_rise().style(),
            motion::body_fade().style(),
        )
    });
    let (flip, pop, rise, fade) = styles;

    rsx! {
        div { class: "card-open", style: "{flip}",
            if props.show_close {
                CloseButton { onclick: move |_| props.on_close.call(()) }
            }

            div { class: "open-heart", style: "{pop}", "💖" }

            h1 { class: "headline", style: "{rise}", "{props.headline}" }

            div { class: "message", style: "{fade}",
                p { class: "salutation", "{props.salutation}" }
                p { class: "message-body", "{props.body}" }

                div { class: "flourish",
                    span { "🌹" }
                    span { "💕" }
                    span { "🌹" }
                }

                p { class: "closing", "{props.closing}" }
                p { class: "signature", "{props.sender}" }

                if props.show_responses {
                    div { class: "responses",
                        Button {
                            variant: ButtonVariant::Accept,
                            onclick: move |_| props.on_choose.call(Choice::Yes),
                            "Yes"
                        }
                        Button {
                            variant: ButtonVariant::Decline,
                            onclick: move |_| props.on_choose.call(Choice::No),
                            "No"
                        }
                    }
                }
            }
        }
    }
}
