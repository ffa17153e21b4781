//! Confetti burst description.
//!
//! A burst is a one-shot shower of falling pieces sized to the viewport.
//! Pieces are derived deterministically from a seed so the burst does not
//! reshuffle when the view re-renders.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::device::{DeviceClass, Viewport};
use crate::revision::RevisionPolicy;

pub const PALETTE: [&str; 5] = ["#ff0000", "#ff69b4", "#ff1493", "#ffc0cb", "#ffffff"];

/// Pieces used when the revision ignores the device class.
pub const FULL_BURST: u32 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiBurst {
    pub width: u32,
    pub height: u32,
    pub pieces: u32,
    pub palette: &'static [&'static str],
    /// Pieces fall once and are not recycled
    pub recycle: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Horizontal start, px
    pub x: f64,
    /// Seconds before the piece starts falling
    pub delay: f64,
    /// Seconds to cross the viewport
    pub fall: f64,
    pub drift: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

impl ConfettiBurst {
    pub fn new(viewport: Viewport, policy: &RevisionPolicy, device: DeviceClass) -> Self {
        let pieces = if policy.adaptive_confetti {
            device.confetti_pieces()
        } else {
            FULL_BURST
        };
        Self {
            width: viewport.width,
            height: viewport.height,
            pieces,
            palette: &PALETTE,
            recycle: false,
        }
    }

    /// Lay out every piece of the burst.
    pub fn layout(&self, seed: u64) -> Vec<ConfettiPiece> {
        let mut rng = StdRng::seed_from_u64(seed);
        let width = self.width.max(1) as f64;

        (0..self.pieces)
            .map(|_| ConfettiPiece {
                x: rng.random_range(0.0..width),
                delay: rng.random_range(0.0..1.5),
                fall: rng.random_range(2.5..5.0),
                drift: rng.random_range(-80.0..80.0),
                width: rng.random_range(5.0..10.0),
                height: rng.random_range(8.0..16.0),
                color: self.palette[rng.random_range(0..self.palette.len())],
            })
            .collect()
    }
}

impl ConfettiPiece {
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}px; width: {:.1}px; height: {:.1}px; background: {}; --drift: {:.0}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x, self.width, self.height, self.color, self.drift, self.fall, self.delay
        )
    }
}
