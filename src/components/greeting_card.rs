//! Greeting Card View - the whole page.
//!
//! Renders the [`CardView`](greetcard_core::CardView) produced from the
//! current session. Nothing here mutates what is on screen directly; every
//! interaction goes through the card controller and the view is recomputed.

use dioxus::prelude::*;
use dioxus::desktop::LogicalSize;
use greetcard_core::{motion, render_at, CardFace, Choice, Viewport};

use super::{ClosedCard, Confetti, OpenCard, OrnamentField, ResponseDialog};
use crate::context::{use_card, use_session_context};

#[component]
pub fn GreetingCard() -> Element {
    let card = use_card();
    let ctx = use_session_context();
    let entrance = use_hook(|| motion::card_entrance().style());

    let view = render_at(&card.session().read(), &ctx, live_viewport(ctx.viewport));

    let face = match view.face {
        CardFace::Closed { title, hint } => rsx! {
            ClosedCard { title, hint }
        },
        CardFace::Open {
            salutation,
            headline,
            body,
            closing,
            sender,
            show_close,
            show_responses,
        } => rsx! {
            OpenCard {
                salutation,
                headline,
                body,
                closing,
                sender,
                show_close,
                show_responses,
                on_close: move |_| card.close(),
                on_choose: move |choice: Choice| card.choose(choice),
            }
        },
    };

    rsx! {
        div { class: if view.responsive { "page responsive" } else { "page" },
            OrnamentField { layer: view.ornaments }

            if let Some(burst) = view.confetti {
                Confetti { burst, seed: ctx.seed }
            }

            div { class: "card-stage",
                div {
                    class: "card-hit-area",
                    style: "{entrance}",
                    onclick: move |_| card.activate(),
                    {face}
                }
            }

            if let Some(dialog) = view.dialog {
                ResponseDialog {
                    dialog,
                    on_dismiss: move |_| card.dismiss_dialog(),
                }
            }
        }
    }
}

/// Current inner size of the window in logical pixels.
fn live_viewport(fallback: Viewport) -> Viewport {
    let desktop = dioxus::desktop::window();
    let scale = desktop.window.scale_factor();
    let size: LogicalSize<f64> = desktop.window.inner_size().to_logical(scale);
    if size.width < 1.0 || size.height < 1.0 {
        return fallback;
    }
    Viewport::new(size.width.round() as u32, size.height.round() as u32)
}
