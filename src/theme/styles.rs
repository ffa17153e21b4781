//! Global CSS styles for the greeting card.
//!
//! Static layout lives in [`GLOBAL_STYLES`]. Keyframes and the class rules
//! that attach them are generated from the motion presets by
//! [`motion_styles`].

use greetcard_core::motion;

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --page-bg: #ffffff;
  --cover-red: #ef4444;
  --cover-pink: #ec4899;
  --cover-shade: rgba(220, 38, 38, 0.5);
  --card-border: #f87171;
  --headline-red: #dc2626;
  --text-strong: #374151;
  --text-body: #4b5563;
  --text-on-cover: #ffffff;
  --backdrop: rgba(0, 0, 0, 0.5);

  --font-display: 'Georgia', 'Times New Roman', serif;
  --font-body: system-ui, -apple-system, 'Segoe UI', sans-serif;

  --radius: 1rem;
  --shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--page-bg);
  min-height: 100vh;
  overflow: hidden;
}

/* === Page === */
.page {
  position: relative;
  min-height: 100vh;
  overflow: hidden;
}

.card-stage {
  position: relative;
  z-index: 10;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
}

.card-hit-area {
  position: relative;
  cursor: pointer;
  perspective: 1200px;
}

/* === Closed card === */
.card-closed {
  position: relative;
  width: 20rem;
  height: 24rem;
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  background: linear-gradient(to bottom right, var(--cover-red), var(--cover-pink));
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
}

.card-closed:hover {
  transform: scale(1.05);
}

.card-sheen {
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom right, var(--cover-shade), transparent);
}

.card-cover {
  position: relative;
  z-index: 1;
  text-align: center;
}

.cover-heart {
  font-size: 6rem;
  margin-bottom: 1rem;
}

.cover-title {
  color: var(--text-on-cover);
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.cover-hint {
  color: rgba(255, 255, 255, 0.9);
  font-size: 0.875rem;
}

.corner {
  position: absolute;
  opacity: 0.5;
  font-size: 2.25rem;
}
.corner-tl { top: 1rem; left: 1rem; }
.corner-tr { top: 1rem; right: 1rem; font-size: 1.875rem; }
.corner-bl { bottom: 1rem; left: 1rem; font-size: 1.875rem; }
.corner-br { bottom: 1rem; right: 1rem; }

/* === Open card === */
.card-open {
  position: relative;
  width: 24rem;
  background: #ffffff;
  border: 4px solid var(--card-border);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  padding: 2rem;
  text-align: center;
  cursor: default;
}

.open-heart {
  font-size: 3.75rem;
  margin-bottom: 1.5rem;
}

.headline {
  font-family: var(--font-display);
  font-size: 2.25rem;
  font-weight: 700;
  color: var(--headline-red);
  margin-bottom: 1rem;
  line-height: 1.2;
}

.message > * + * {
  margin-top: 1rem;
}

.salutation {
  color: var(--text-strong);
  font-size: 1.125rem;
  font-style: italic;
}

.message-body {
  color: var(--text-body);
  line-height: 1.6;
}

.flourish {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  font-size: 1.875rem;
}

.closing {
  color: var(--text-strong);
  font-size: 1.125rem;
  font-weight: 600;
}

.signature {
  color: var(--headline-red);
  font-size: 1.5rem;
  font-weight: 700;
}

.responses {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-top: 1.5rem;
}

/* === Responsive revisions === */
.page.responsive .card-closed {
  width: min(20rem, 85vw);
  height: min(24rem, 100vw);
}

.page.responsive .card-open {
  width: min(24rem, 92vw);
  max-height: 92vh;
  overflow-y: auto;
  padding: clamp(1rem, 5vw, 2rem);
}

.page.responsive .headline {
  font-size: clamp(1.5rem, 7vw, 2.25rem);
}

@media (max-width: 480px) {
  .page.responsive .cover-heart { font-size: 4rem; }
  .page.responsive .open-heart { font-size: 3rem; }
}

/* === Buttons === */
.btn-accept, .btn-decline, .btn-ghost {
  font-family: var(--font-body);
  font-size: 1rem;
  font-weight: 600;
  padding: 0.6rem 1.75rem;
  border-radius: 9999px;
  cursor: pointer;
  transition: transform 0.15s ease, box-shadow 0.15s ease;
}

.btn-accept {
  background: linear-gradient(to right, var(--cover-red), var(--cover-pink));
  color: #ffffff;
  border: none;
}

.btn-decline {
  background: transparent;
  color: var(--headline-red);
  border: 2px solid var(--card-border);
}

.btn-ghost {
  background: transparent;
  color: var(--text-body);
  border: 1px solid #e5e7eb;
}

.btn-accept:hover, .btn-decline:hover, .btn-ghost:hover {
  transform: translateY(-1px) scale(1.05);
  box-shadow: 0 4px 12px rgba(236, 72, 153, 0.3);
}

.close-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.75rem;
  background: transparent;
  border: none;
  font-size: 1.75rem;
  line-height: 1;
  color: var(--text-body);
  cursor: pointer;
}

.close-btn:hover {
  color: var(--headline-red);
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--backdrop);
  padding: 1rem;
}

.modal-panel {
  background: #ffffff;
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  padding: 2rem;
  width: min(22rem, 92vw);
  text-align: center;
}

.dialog-glyph {
  font-size: 3.5rem;
  margin-bottom: 0.75rem;
}

.dialog-title {
  font-family: var(--font-display);
  color: var(--headline-red);
  font-size: 1.75rem;
  margin-bottom: 0.5rem;
}

.dialog-message {
  color: var(--text-body);
  margin-bottom: 1.5rem;
}

/* === Ornaments === */
.ornament-field {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
}

.ornament {
  position: absolute;
  user-select: none;
}
.ornament-md { font-size: 1.5rem; }
.ornament-lg { font-size: 1.875rem; }

/* === Confetti === */
.confetti-layer {
  position: fixed;
  top: 0;
  left: 0;
  z-index: 40;
  pointer-events: none;
  overflow: hidden;
}

.confetti-piece {
  position: absolute;
  top: 0;
  border-radius: 1px;
}
"#;

/// Keyframes for every motion preset plus the class rules that use them.
pub fn motion_styles() -> String {
    let mut css = motion::keyframes_stylesheet();
    css.push_str(&format!(
        ".ornament.drifting {{ animation: {}; }}\n",
        motion::ornament_drift().animation()
    ));
    css.push_str(&format!(
        ".confetti-piece {{ animation: {}; }}\n",
        motion::confetti_fall().animation()
    ));
    css
}
