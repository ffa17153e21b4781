//! Response Dialog
//!
//! Modal shown after pressing Yes or No. Dismissing it hands control back
//! to the card controller, which decides whether the card folds up.

use dioxus::prelude::*;
use greetcard_core::{motion, DialogView};
use greetcard_ui::{Button, ButtonVariant, Modal};

#[component]
pub fn ResponseDialog(dialog: DialogView, on_dismiss: EventHandler<()>) -> Element {
    let pop = use_hook(|| motion::dialog_pop().style());
    let content = &dialog.content;

    rsx! {
        Modal {
            on_dismiss: move |_| on_dismiss.call(()),
            panel_style: pop,

            div { class: "dialog-glyph", "{content.glyph}" }
            h2 { class: "dialog-title", "{content.title}" }
            p { class: "dialog-message", "{content.message}" }

            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| on_dismiss.call(()),
                "{content.dismiss_label}"
            }
        }
    }
}
