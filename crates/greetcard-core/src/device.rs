//! Coarse device classification.
//!
//! Decides how heavy the confetti burst may be. Classified once per session
//! from the viewport width and a platform string, never per frame.

/// Widths below this are treated as small screens.
pub const COMPACT_MAX_WIDTH: u32 = 768;

/// Platform substrings that indicate a touch device.
const TOUCH_PATTERNS: [&str; 5] = ["android", "ios", "iphone", "ipad", "mobile"];

/// Viewport size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    /// Small or touch-classified screen
    Compact,
    Regular,
}

impl DeviceClass {
    /// Classify from viewport width and a platform/capability string
    /// (e.g. `std::env::consts::OS`).
    pub fn classify(viewport_width: u32, platform: &str) -> Self {
        let platform = platform.to_ascii_lowercase();
        let touch = TOUCH_PATTERNS.iter().any(|p| platform.contains(p));
        if viewport_width < COMPACT_MAX_WIDTH || touch {
            DeviceClass::Compact
        } else {
            DeviceClass::Regular
        }
    }

    /// Confetti pieces for this class.
    pub fn confetti_pieces(&self) -> u32 {
        match self {
            DeviceClass::Compact => 200,
            DeviceClass::Regular => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewport_is_compact() {
        assert_eq!(DeviceClass::classify(767, "linux"), DeviceClass::Compact);
        assert_eq!(DeviceClass::classify(768, "linux"), DeviceClass::Regular);
    }

    #[test]
    fn touch_platform_is_compact_at_any_width() {
        assert_eq!(DeviceClass::classify(1920, "android"), DeviceClass::Compact);
        assert_eq!(DeviceClass::classify(1920, "iOS"), DeviceClass::Compact);
        assert_eq!(DeviceClass::classify(1920, "macos"), DeviceClass::Regular);
    }

    #[test]
    fn compact_gets_fewer_pieces() {
        assert!(DeviceClass::Compact.confetti_pieces() < DeviceClass::Regular.confetti_pieces());
    }
}
