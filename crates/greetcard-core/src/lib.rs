//! Greeting Card Core Library
//!
//! Framework-free model of an animated greeting card: a closed card that
//! opens on click, a one-shot confetti burst, background ornaments and an
//! optional Yes/No response dialog.
//!
//! ## Quick Start
//!
//! ```ignore
//! use greetcard_core::{render, CardConfig, CardSession, SessionContext};
//!
//! let config = CardConfig::default();
//! let ctx = SessionContext::new(&config, std::env::consts::OS);
//! let mut session = CardSession::new(config.revision);
//!
//! if let Some(ticket) = session.activate() {
//!     // schedule `wait_out(ticket)` and hand the ticket back afterwards
//!     session.confetti_elapsed(ticket);
//! }
//! let view = render(&session, &ctx);
//! ```

pub mod config;
pub mod confetti;
pub mod content;
pub mod device;
pub mod error;
pub mod motion;
pub mod ornament;
pub mod revision;
pub mod session;
pub mod timer;
pub mod view;

// Re-exports
pub use config::CardConfig;
pub use confetti::{ConfettiBurst, ConfettiPiece};
pub use content::{CardContent, DialogContent};
pub use device::{DeviceClass, Viewport};
pub use error::{CardError, CardResult};
pub use motion::Motion;
pub use ornament::{Ornament, OrnamentSize};
pub use revision::{OrnamentMode, OrnamentVisibility, Revision, RevisionPolicy};
pub use session::{CardSession, CardState, Choice, DialogState};
pub use timer::{wait_out, TimerTicket};
pub use view::{render, render_at, CardFace, CardView, DialogView, OrnamentLayer, SessionContext};
