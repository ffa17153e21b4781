//! Pure view function.
//!
//! [`render`] maps the session plus the per-session context to a
//! [`CardView`]. Components draw only what the view describes and the
//! function is re-run after every state change.

use std::sync::Arc;

use crate::config::CardConfig;
use crate::confetti::ConfettiBurst;
use crate::content::{CardContent, DialogContent};
use crate::device::{DeviceClass, Viewport};
use crate::ornament::{self, Ornament};
use crate::revision::{OrnamentMode, OrnamentVisibility};
use crate::session::{CardSession, Choice, DialogState};

/// Everything fixed for the lifetime of one card view.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub content: CardContent,
    /// Configured window size; also the fallback when the live size is unknown
    pub viewport: Viewport,
    pub device: DeviceClass,
    pub seed: u64,
    ornaments: Arc<[Ornament]>,
}

impl SessionContext {
    /// Classify the device and lay out ornaments once.
    pub fn new(config: &CardConfig, platform: &str) -> Self {
        let policy = config.revision.policy();
        let viewport = config.viewport();
        let device = DeviceClass::classify(viewport.width, platform);
        let ornaments = ornament::generate(
            policy.ornament_count,
            policy.ornament_mode,
            config.ornament_seed,
        );

        tracing::info!(
            revision = %config.revision,
            ?device,
            ornaments = ornaments.len(),
            "card session prepared"
        );

        Self {
            content: config.content(),
            viewport,
            device,
            seed: config.ornament_seed,
            ornaments: ornaments.into(),
        }
    }

    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardFace {
    Closed {
        title: String,
        hint: String,
    },
    Open {
        salutation: String,
        headline: String,
        body: String,
        closing: String,
        sender: String,
        show_close: bool,
        show_responses: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogView {
    pub choice: Choice,
    pub content: DialogContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrnamentLayer {
    pub visible: bool,
    pub mode: OrnamentMode,
    pub items: Arc<[Ornament]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub face: CardFace,
    pub confetti: Option<ConfettiBurst>,
    pub dialog: Option<DialogView>,
    pub ornaments: OrnamentLayer,
    /// Card width follows the viewport
    pub responsive: bool,
}

/// Render against the configured viewport.
pub fn render(session: &CardSession, ctx: &SessionContext) -> CardView {
    render_at(session, ctx, ctx.viewport)
}

/// Render with the confetti sized to `viewport`, the window's current size.
/// The device class stays the one fixed for the session.
pub fn render_at(session: &CardSession, ctx: &SessionContext, viewport: Viewport) -> CardView {
    let policy = session.policy();
    let content = &ctx.content;

    let face = if session.is_open() {
        CardFace::Open {
            salutation: content.salutation(),
            headline: content.headline.clone(),
            body: content.body.clone(),
            closing: content.closing.clone(),
            sender: content.sender.clone(),
            show_close: policy.close_button,
            show_responses: policy.response_dialog && !session.dialog().is_shown(),
        }
    } else {
        CardFace::Closed {
            title: content.cover_title.clone(),
            hint: content.cover_hint.clone(),
        }
    };

    let confetti = session
        .confetti_visible()
        .then(|| ConfettiBurst::new(viewport, policy, ctx.device));

    let dialog = match session.dialog() {
        DialogState::Hidden => None,
        DialogState::Shown(choice) => Some(DialogView {
            choice,
            content: DialogContent::for_choice(choice, content),
        }),
    };

    let ornaments = OrnamentLayer {
        visible: match policy.ornament_visibility {
            OrnamentVisibility::Always => true,
            OrnamentVisibility::WhileClosed => !session.is_open(),
        },
        mode: policy.ornament_mode,
        items: Arc::clone(&ctx.ornaments),
    };

    CardView {
        face,
        confetti,
        dialog,
        ornaments,
        responsive: policy.responsive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revision::Revision;

    fn setup(revision: Revision) -> (CardSession, SessionContext) {
        let config = CardConfig {
            revision,
            ..CardConfig::default()
        };
        (CardSession::new(revision), SessionContext::new(&config, "linux"))
    }

    #[test]
    fn closed_card_shows_cover() {
        let (session, ctx) = setup(Revision::Dialog);
        let view = render(&session, &ctx);
        assert!(matches!(view.face, CardFace::Closed { ref hint, .. } if hint == "Click to open"));
        assert!(view.confetti.is_none());
        assert!(view.dialog.is_none());
        assert!(view.ornaments.visible);
    }

    #[test]
    fn open_card_shows_message_and_confetti() {
        let (mut session, ctx) = setup(Revision::Dialog);
        session.activate();
        let view = render(&session, &ctx);
        match view.face {
            CardFace::Open {
                salutation,
                show_close,
                show_responses,
                ..
            } => {
                assert_eq!(salutation, "Dear Catherine,");
                assert!(show_close);
                assert!(show_responses);
            }
            other => panic!("expected open face, got {other:?}"),
        }
        let burst = view.confetti.unwrap();
        assert_eq!(burst.pieces, ctx.device.confetti_pieces());
    }

    #[test]
    fn classic_open_card_has_no_controls() {
        let (mut session, ctx) = setup(Revision::Classic);
        session.activate();
        let view = render(&session, &ctx);
        assert!(matches!(
            view.face,
            CardFace::Open { show_close: false, show_responses: false, .. }
        ));
        assert!(!view.responsive);
    }

    #[test]
    fn responsive_hides_ornaments_while_open() {
        let (mut session, ctx) = setup(Revision::Responsive);
        assert!(render(&session, &ctx).ornaments.visible);
        session.activate();
        assert!(!render(&session, &ctx).ornaments.visible);
        session.close().unwrap();
        assert!(render(&session, &ctx).ornaments.visible);
    }

    #[test]
    fn dialog_hides_response_controls() {
        let (mut session, ctx) = setup(Revision::Dialog);
        session.activate();
        session.choose_no().unwrap();
        let view = render(&session, &ctx);
        assert!(matches!(view.face, CardFace::Open { show_responses: false, .. }));
        assert_eq!(view.dialog.unwrap().choice, Choice::No);
    }

    #[test]
    fn burst_follows_live_viewport() {
        let (mut session, ctx) = setup(Revision::Dialog);
        session.activate();
        assert_eq!(ctx.viewport, Viewport::new(700, 900));

        let burst = render_at(&session, &ctx, Viewport::new(1920, 1080))
            .confetti
            .unwrap();
        assert_eq!((burst.width, burst.height), (1920, 1080));
        assert!(burst.layout(ctx.seed).iter().any(|p| p.x >= 700.0));

        // Device class was fixed at startup and does not follow the resize
        assert_eq!(burst.pieces, ctx.device.confetti_pieces());
        assert_eq!(render(&session, &ctx).confetti.unwrap().width, 700);
    }

    #[test]
    fn ornaments_stable_across_renders() {
        let (mut session, ctx) = setup(Revision::Dialog);
        let before = render(&session, &ctx).ornaments;
        session.activate();
        let _ = render(&session, &ctx);
        let after = render(&session, &ctx).ornaments;
        assert_eq!(before.items.len(), 30);
        assert_eq!(before.items, after.items);
    }
}
