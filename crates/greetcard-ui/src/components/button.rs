//! Button Components
//!
//! - Accept: filled rose button for the "Yes" response
//! - Decline: outlined button for the "No" response
//! - Ghost: quiet action, e.g. dismissing a dialog

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled, used for accepting
    #[default]
    Accept,
    /// Outlined, used for declining
    Decline,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Accept => "btn-accept",
            ButtonVariant::Decline => "btn-decline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button.
///
/// Clicks do not propagate, so a button placed on the card never counts as
/// clicking the card itself.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Accept,
///         onclick: move |_| answer_yes(),
///         "Yes"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = with_extra_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |e| {
                e.stop_propagation();
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with X icon, pinned to a corner of its container
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "close-btn",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |e| {
                e.stop_propagation();
                onclick.call(());
            },
            "\u{00D7}"
        }
    }
}

fn with_extra_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Accept.class(), "btn-accept");
        assert_eq!(ButtonVariant::Decline.class(), "btn-decline");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Accept);
    }

    #[test]
    fn extra_classes_appended() {
        assert_eq!(with_extra_class("btn-accept", None), "btn-accept");
        assert_eq!(with_extra_class("btn-accept", Some("")), "btn-accept");
        assert_eq!(with_extra_class("btn-accept", Some("wide")), "btn-accept wide");
    }
}
