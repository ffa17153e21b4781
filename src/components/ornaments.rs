//! Background ornaments.

use dioxus::prelude::*;
use greetcard_core::{OrnamentLayer, OrnamentMode};

#[component]
pub fn OrnamentField(layer: OrnamentLayer) -> Element {
    if !layer.visible {
        return rsx! {};
    }

    let mode = match layer.mode {
        OrnamentMode::Drifting => "drifting",
        OrnamentMode::Static => "static",
    };

    rsx! {
        div { class: "ornament-field", "aria-hidden": "true",
            for ornament in layer.items.iter() {
                div {
                    key: "{ornament.id}",
                    class: format!("ornament {} {}", ornament.size.class(), mode),
                    style: ornament.style(),
                    "{ornament.glyph}"
                }
            }
        }
    }
}
