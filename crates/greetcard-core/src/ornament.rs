//! Background ornaments.
//!
//! The set is generated once per session from a seeded RNG and then only
//! read, so re-renders never move anything.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::revision::OrnamentMode;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 0x14_02;

pub const HEART: &str = "❤️";
pub const ROSE: &str = "🌹";

/// Font size class; roses are drawn one step larger than hearts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrnamentSize {
    Medium,
    Large,
}

impl OrnamentSize {
    pub fn class(&self) -> &'static str {
        match self {
            OrnamentSize::Medium => "ornament-md",
            OrnamentSize::Large => "ornament-lg",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ornament {
    pub id: usize,
    pub glyph: &'static str,
    /// Horizontal position, percent of viewport width
    pub x: f64,
    /// Vertical position for static ornaments, percent of viewport height
    pub y: Option<f64>,
    /// Seconds before the drift starts
    pub delay: f64,
    /// Seconds for one top-to-bottom pass
    pub duration: f64,
    pub size: OrnamentSize,
    pub opacity: f64,
}

impl Ornament {
    /// Sideways sway in pixels over one pass.
    pub fn sway(&self) -> f64 {
        (self.id as f64).sin() * 50.0
    }

    /// Inline CSS placing the ornament.
    pub fn style(&self) -> String {
        match self.y {
            Some(y) => format!(
                "left: {:.2}%; top: {:.2}%; opacity: {:.2};",
                self.x, y, self.opacity
            ),
            None => format!(
                "left: {:.2}%; top: -10%; opacity: {:.2}; --sway: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
                self.x,
                self.opacity,
                self.sway(),
                self.duration,
                self.delay
            ),
        }
    }
}

/// Precompute `count` ornaments for the given mode.
pub fn generate(count: usize, mode: OrnamentMode, seed: u64) -> Vec<Ornament> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|id| {
            let heart = rng.random_bool(0.5);
            let x = rng.random_range(0.0..100.0);
            let delay = rng.random_range(0.0..5.0);
            let duration = 5.0 + rng.random_range(0.0..5.0);
            let (y, opacity) = match mode {
                OrnamentMode::Drifting => (None, rng.random_range(0.2..0.5)),
                OrnamentMode::Static => (
                    Some(rng.random_range(0.0..100.0)),
                    rng.random_range(0.1..0.4),
                ),
            };

            Ornament {
                id,
                glyph: if heart { HEART } else { ROSE },
                x,
                y,
                delay,
                duration,
                size: if heart {
                    OrnamentSize::Medium
                } else {
                    OrnamentSize::Large
                },
                opacity,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        let a = generate(20, OrnamentMode::Drifting, DEFAULT_SEED);
        let b = generate(20, OrnamentMode::Drifting, DEFAULT_SEED);
        assert_eq!(a, b);
    }

    #[test]
    fn values_in_range() {
        for o in generate(30, OrnamentMode::Static, 99) {
            assert!((0.0..100.0).contains(&o.x));
            assert!(matches!(o.y, Some(y) if (0.0..100.0).contains(&y)));
            assert!((0.1..0.4).contains(&o.opacity));
            assert!((5.0..10.0).contains(&o.duration));
            assert!((0.0..5.0).contains(&o.delay));
        }
    }

    #[test]
    fn drifting_has_no_vertical_position() {
        let items = generate(15, OrnamentMode::Drifting, 1);
        assert_eq!(items.len(), 15);
        assert!(items.iter().all(|o| o.y.is_none()));
        assert!(items[0].style().contains("top: -10%"));
    }

    #[test]
    fn roses_are_larger() {
        for o in generate(20, OrnamentMode::Drifting, 5) {
            let expected = if o.glyph == ROSE {
                OrnamentSize::Large
            } else {
                OrnamentSize::Medium
            };
            assert_eq!(o.size, expected);
        }
    }
}
