//! Greeting Card UI Primitives
//!
//! Small Dioxus building blocks shared by the card views: buttons and a
//! modal overlay. Styling lives in the app's global stylesheet; these
//! components only attach class names.

pub mod components;

pub use components::*;
