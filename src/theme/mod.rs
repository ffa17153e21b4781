//! Theme for the greeting card.

mod styles;

pub use styles::{motion_styles, GLOBAL_STYLES};
