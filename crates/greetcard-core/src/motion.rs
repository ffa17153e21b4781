//! Declarative motion descriptors.
//!
//! A [`Motion`] names a start state, an end state (optionally with
//! intermediate frames) and a timing curve. The webview does the
//! interpolation; this module only turns descriptors into CSS `@keyframes`
//! blocks and `animation` shorthands.

use std::fmt::Write;

/// An offset along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    Px(f64),
    Vh(f64),
    /// A CSS custom property set per element, e.g. `--sway`
    Var(&'static str),
}

impl Offset {
    fn css(&self) -> String {
        match self {
            Offset::Px(v) => format!("{}px", v),
            Offset::Vh(v) => format!("{}vh", v),
            Offset::Var(name) => format!("var({})", name),
        }
    }
}

/// Visual properties at one keyframe. Unset properties are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualState {
    pub scale: Option<f64>,
    /// Degrees around the z axis
    pub rotate: Option<f64>,
    /// Degrees around the y axis (card flip)
    pub rotate_y: Option<f64>,
    pub x: Option<Offset>,
    pub y: Option<Offset>,
    pub opacity: Option<f64>,
}

impl VisualState {
    pub fn scale(mut self, v: f64) -> Self {
        self.scale = Some(v);
        self
    }

    pub fn rotate(mut self, deg: f64) -> Self {
        self.rotate = Some(deg);
        self
    }

    pub fn rotate_y(mut self, deg: f64) -> Self {
        self.rotate_y = Some(deg);
        self
    }

    pub fn x(mut self, offset: Offset) -> Self {
        self.x = Some(offset);
        self
    }

    pub fn y(mut self, offset: Offset) -> Self {
        self.y = Some(offset);
        self
    }

    pub fn opacity(mut self, v: f64) -> Self {
        self.opacity = Some(v);
        self
    }

    fn declarations(&self) -> String {
        let mut transform = Vec::new();
        if let Some(x) = self.x {
            transform.push(format!("translateX({})", x.css()));
        }
        if let Some(y) = self.y {
            transform.push(format!("translateY({})", y.css()));
        }
        if let Some(s) = self.scale {
            transform.push(format!("scale({})", s));
        }
        if let Some(r) = self.rotate {
            transform.push(format!("rotate({}deg)", r));
        }
        if let Some(r) = self.rotate_y {
            transform.push(format!("rotateY({}deg)", r));
        }

        let mut out = String::new();
        if !transform.is_empty() {
            let _ = write!(out, "transform: {};", transform.join(" "));
        }
        if let Some(o) = self.opacity {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "opacity: {};", o);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// Overshooting curve approximating a stiff spring
    Spring,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Seconds
    pub duration: f64,
    /// Seconds
    pub delay: f64,
    pub easing: Easing,
    pub infinite: bool,
}

impl Timing {
    pub fn new(duration: f64, easing: Easing) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing,
            infinite: false,
        }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn infinite(mut self) -> Self {
        self.infinite = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    pub name: &'static str,
    pub frames: Vec<VisualState>,
    pub timing: Timing,
}

impl Motion {
    pub fn between(name: &'static str, from: VisualState, to: VisualState, timing: Timing) -> Self {
        Self {
            name,
            frames: vec![from, to],
            timing,
        }
    }

    /// Evenly spaced keyframes; needs at least two.
    pub fn through(name: &'static str, frames: Vec<VisualState>, timing: Timing) -> Self {
        debug_assert!(frames.len() >= 2);
        Self {
            name,
            frames,
            timing,
        }
    }

    pub fn keyframes_css(&self) -> String {
        let mut out = format!("@keyframes {} {{\n", self.name);
        let last = self.frames.len().saturating_sub(1).max(1) as f64;
        for (i, frame) in self.frames.iter().enumerate() {
            let pct = (i as f64 * 100.0 / last).round();
            let _ = writeln!(out, "  {}% {{ {} }}", pct, frame.declarations());
        }
        out.push_str("}\n");
        out
    }

    /// `animation` shorthand referencing [`Self::keyframes_css`].
    pub fn animation(&self) -> String {
        let t = &self.timing;
        format!(
            "{} {}s {} {}s {} both",
            self.name,
            t.duration,
            t.easing.css(),
            t.delay,
            if t.infinite { "infinite" } else { "1" }
        )
    }

    /// Inline style applying this motion.
    pub fn style(&self) -> String {
        format!("animation: {};", self.animation())
    }
}

pub fn card_entrance() -> Motion {
    Motion::between(
        "card-entrance",
        VisualState::default().scale(0.8).opacity(0.0),
        VisualState::default().scale(1.0).opacity(1.0),
        Timing::new(0.5, Easing::EaseOut),
    )
}

pub fn card_flip() -> Motion {
    Motion::between(
        "card-flip",
        VisualState::default().rotate_y(0.0),
        VisualState::default().rotate_y(360.0),
        Timing::new(0.8, Easing::EaseInOut),
    )
}

pub fn cover_heartbeat() -> Motion {
    Motion::through(
        "cover-heartbeat",
        vec![
            VisualState::default().scale(1.0),
            VisualState::default().scale(1.2),
            VisualState::default().scale(1.0),
        ],
        Timing::new(2.0, Easing::EaseInOut).infinite(),
    )
}

pub fn heart_pop() -> Motion {
    Motion::through(
        "heart-pop",
        vec![
            VisualState::default().scale(0.0).rotate(0.0),
            VisualState::default().scale(1.0).rotate(10.0),
            VisualState::default().scale(1.0).rotate(-10.0),
            VisualState::default().scale(1.0).rotate(10.0),
            VisualState::default().scale(1.0).rotate(0.0),
        ],
        Timing::new(0.5, Easing::EaseOut).delay(0.8),
    )
}

pub fn headline_rise() -> Motion {
    Motion::between(
        "headline-rise",
        VisualState::default().opacity(0.0).y(Offset::Px(20.0)),
        VisualState::default().opacity(1.0).y(Offset::Px(0.0)),
        Timing::new(0.5, Easing::EaseOut).delay(1.0),
    )
}

pub fn body_fade() -> Motion {
    Motion::between(
        "body-fade",
        VisualState::default().opacity(0.0),
        VisualState::default().opacity(1.0),
        Timing::new(0.5, Easing::EaseOut).delay(1.3),
    )
}

pub fn dialog_pop() -> Motion {
    Motion::between(
        "dialog-pop",
        VisualState::default().scale(0.5).opacity(0.0),
        VisualState::default().scale(1.0).opacity(1.0),
        Timing::new(0.3, Easing::Spring),
    )
}

/// Ornament fall. Duration and delay are overridden per ornament.
pub fn ornament_drift() -> Motion {
    Motion::between(
        "ornament-drift",
        VisualState::default()
            .x(Offset::Px(0.0))
            .y(Offset::Vh(0.0))
            .rotate(0.0),
        VisualState::default()
            .x(Offset::Var("--sway"))
            .y(Offset::Vh(110.0))
            .rotate(360.0),
        Timing::new(7.5, Easing::Linear).infinite(),
    )
}

/// One confetti piece falling. Duration and delay are set per piece.
pub fn confetti_fall() -> Motion {
    Motion::between(
        "confetti-fall",
        VisualState::default()
            .x(Offset::Px(0.0))
            .y(Offset::Vh(-5.0))
            .rotate(0.0),
        VisualState::default()
            .x(Offset::Var("--drift"))
            .y(Offset::Vh(110.0))
            .rotate(720.0),
        Timing::new(4.0, Easing::Linear),
    )
}

pub fn presets() -> Vec<Motion> {
    vec![
        card_entrance(),
        card_flip(),
        cover_heartbeat(),
        heart_pop(),
        headline_rise(),
        body_fade(),
        dialog_pop(),
        ornament_drift(),
        confetti_fall(),
    ]
}

/// All preset keyframes as one stylesheet.
pub fn keyframes_stylesheet() -> String {
    presets().iter().map(Motion::keyframes_css).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_keyframes() {
        let css = card_entrance().keyframes_css();
        assert!(css.starts_with("@keyframes card-entrance {"));
        assert!(css.contains("0% { transform: scale(0.8); opacity: 0; }"));
        assert!(css.contains("100% { transform: scale(1); opacity: 1; }"));
    }

    #[test]
    fn heartbeat_has_midpoint_and_loops() {
        let motion = cover_heartbeat();
        assert!(motion.keyframes_css().contains("50% { transform: scale(1.2); }"));
        assert!(motion.animation().contains("infinite"));
    }

    #[test]
    fn delayed_animation_shorthand() {
        assert_eq!(
            headline_rise().animation(),
            "headline-rise 0.5s ease-out 1s 1 both"
        );
    }

    #[test]
    fn drift_uses_sway_variable() {
        let css = ornament_drift().keyframes_css();
        assert!(css.contains("translateX(var(--sway)) translateY(110vh)"));
    }

    #[test]
    fn preset_names_unique() {
        let mut names: Vec<_> = presets().iter().map(|m| m.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), presets().len());
    }
}
