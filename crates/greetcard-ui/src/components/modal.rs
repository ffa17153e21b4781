//! Modal overlay
//!
//! Dims the page and centers its children. Clicking the backdrop dismisses;
//! clicks inside the panel stay inside.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    /// Called when the backdrop is clicked
    pub on_dismiss: EventHandler<()>,
    /// Inline style for the panel, e.g. an entrance animation
    #[props(default)]
    pub panel_style: String,
    pub children: Element,
}

#[component]
pub fn Modal(props: ModalProps) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            role: "dialog",
            "aria-modal": "true",
            onclick: move |_| {
                tracing::debug!("modal backdrop clicked");
                props.on_dismiss.call(());
            },

            div {
                class: "modal-panel",
                style: "{props.panel_style}",
                onclick: move |e| e.stop_propagation(),
                {props.children}
            }
        }
    }
}
