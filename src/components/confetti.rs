//! One-shot confetti burst.
//!
//! Mounted while the session shows confetti. Pieces are laid out once on
//! mount and each falls a single time; unmounting removes them at once.

use dioxus::prelude::*;
use greetcard_core::ConfettiBurst;

#[component]
pub fn Confetti(burst: ConfettiBurst, seed: u64) -> Element {
    let pieces = use_hook(|| {
        tracing::debug!(pieces = burst.pieces, "confetti burst mounted");
        burst.layout(seed)
    });

    rsx! {
        div {
            class: "confetti-layer",
            style: "width: {burst.width}px; height: {burst.height}px;",
            "aria-hidden": "true",
            for (i, piece) in pieces.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "confetti-piece",
                    style: piece.style(),
                }
            }
        }
    }
}
