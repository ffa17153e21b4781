//! Card revisions and the constants each one fixes.
//!
//! The page went through three revisions. Each one changes the confetti
//! duration, how ornaments behave, and which controls the open card offers.
//! Everything revision-specific is read from [`RevisionPolicy`] so the state
//! machine and view function never match on [`Revision`] directly.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Which revision of the card to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Revision {
    /// Fixed-width card, drifting ornaments, no controls once open
    Classic,
    /// Responsive layout with a close button; ornaments hide while open
    Responsive,
    /// Static ornaments plus the Yes/No response dialog
    #[default]
    Dialog,
}

/// How background ornaments are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrnamentMode {
    /// Fall from the top of the viewport on an infinite loop
    Drifting,
    /// Placed once, never move
    Static,
}

/// When the ornament layer is shown relative to the card state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrnamentVisibility {
    Always,
    WhileClosed,
}

/// Per-revision constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionPolicy {
    pub confetti_duration: Duration,
    pub ornament_count: usize,
    pub ornament_mode: OrnamentMode,
    pub ornament_visibility: OrnamentVisibility,
    /// Close button on the open card
    pub close_button: bool,
    /// Yes/No controls and the response dialog
    pub response_dialog: bool,
    /// Card width follows the viewport instead of a fixed size
    pub responsive: bool,
    /// Confetti piece count follows the device class
    pub adaptive_confetti: bool,
}

impl Revision {
    pub const ALL: [Revision; 3] = [Revision::Classic, Revision::Responsive, Revision::Dialog];

    pub fn as_str(&self) -> &'static str {
        match self {
            Revision::Classic => "classic",
            Revision::Responsive => "responsive",
            Revision::Dialog => "dialog",
        }
    }

    pub fn policy(&self) -> RevisionPolicy {
        match self {
            Revision::Classic => RevisionPolicy {
                confetti_duration: Duration::from_millis(5_000),
                ornament_count: 20,
                ornament_mode: OrnamentMode::Drifting,
                ornament_visibility: OrnamentVisibility::Always,
                close_button: false,
                response_dialog: false,
                responsive: false,
                adaptive_confetti: false,
            },
            Revision::Responsive => RevisionPolicy {
                confetti_duration: Duration::from_millis(10_000),
                ornament_count: 15,
                ornament_mode: OrnamentMode::Drifting,
                ornament_visibility: OrnamentVisibility::WhileClosed,
                close_button: true,
                response_dialog: false,
                responsive: true,
                adaptive_confetti: true,
            },
            Revision::Dialog => RevisionPolicy {
                confetti_duration: Duration::from_millis(10_000),
                ornament_count: 30,
                ornament_mode: OrnamentMode::Static,
                ornament_visibility: OrnamentVisibility::Always,
                close_button: true,
                response_dialog: true,
                responsive: true,
                adaptive_confetti: true,
            },
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Revision {
    type Err = CardError;

    /// Accepts the revision name or its number (`1`, `2`, `3`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" | "1" => Ok(Revision::Classic),
            "responsive" | "2" => Ok(Revision::Responsive),
            "dialog" | "3" => Ok(Revision::Dialog),
            other => Err(CardError::UnknownRevision(other.to_string())),
        }
    }
}
