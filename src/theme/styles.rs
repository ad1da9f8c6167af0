//! Global CSS styles for Hapil.
//!
//! Quiet paper-and-ink reading theme with a plum accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Text) */
  --ink: #4A4A4A;
  --graphite: #7A7A7A;

  /* PAPER (Backgrounds) */
  --paper: #F8F8F8;
  --card: #FFFFFF;

  /* PLUM (Accent) */
  --plum: #6B4E71;
  --plum-deep: #5D4361;
  --plum-shadow: rgba(107, 78, 113, 0.1);

  /* Typography */
  --font-serif: 'Noto Serif KR', 'Nanum Myeongjo', serif;

  /* Transitions */
  --transition-normal: 300ms ease;
  --spring: 450ms cubic-bezier(0.22, 1.2, 0.36, 1);
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
  font-family: var(--font-serif);
  background: var(--paper);
  color: var(--ink);
  min-height: 100vh;
  overflow-x: hidden;
}

/* === Wordmark === */
.wordmark {
  font-size: 4rem;
  font-weight: 700;
  color: var(--plum);
  letter-spacing: 0.2em;
  text-align: center;
  cursor: pointer;
  user-select: none;
}

.wordmark.small {
  font-size: 1.75rem;
  cursor: default;
  margin-bottom: 1rem;
}

/* === Landing === */
.landing {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 20px;
}

.stagger-item {
  opacity: 0;
  animation: rise-in 600ms ease forwards;
}

.stagger-item:nth-child(1) { animation-delay: 0ms; }
.stagger-item:nth-child(2) { animation-delay: 300ms; }
.stagger-item:nth-child(3) { animation-delay: 600ms; }

@keyframes rise-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

.landing-description {
  color: var(--graphite);
  text-align: center;
  font-size: 1.1rem;
  line-height: 1.8;
  margin-top: 2rem;
  max-width: 500px;
}

.landing-action {
  text-align: center;
}

/* === Buttons === */
.btn-start,
.btn-refresh {
  background: var(--plum);
  color: white;
  border: none;
  border-radius: 30px;
  cursor: pointer;
  font-family: inherit;
  box-shadow: 0 4px 12px var(--plum-shadow);
  transition: all var(--transition-normal);
}

.btn-start {
  padding: 1rem 2.5rem;
  font-size: 1.1rem;
  margin-top: 3rem;
}

.btn-refresh {
  padding: 1rem 2rem;
  font-size: 1rem;
  margin-top: 2rem;
}

.btn-refresh:hover {
  background: var(--plum-deep);
}

.btn-start:hover,
.btn-refresh:hover {
  transform: translateY(-2px);
  box-shadow: 0 6px 16px var(--plum-shadow);
}

.btn-start:active,
.btn-refresh:active {
  transform: translateY(0);
}

/* === Reader === */
.reader {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 40px 20px 80px;
  outline: none;
}

.reader-header {
  text-align: center;
  margin-bottom: 2rem;
}

.reader-title {
  font-size: 1.8rem;
  font-weight: 500;
  color: var(--ink);
}

.quote-stage {
  position: relative;
  width: 100%;
  max-width: 600px;
  margin: 2rem auto;
  display: flex;
  align-items: center;
  justify-content: center;
  touch-action: pan-y;
}

/* === Quote Card === */
.quote-card {
  background: var(--card);
  padding: 2.5rem;
  border-radius: 20px;
  box-shadow: 0 8px 20px var(--plum-shadow);
  width: 90%;
  max-width: 600px;
  cursor: grab;
  user-select: none;
  transition: transform var(--spring), box-shadow var(--transition-normal);
}

.quote-card:hover {
  box-shadow: 0 12px 24px var(--plum-shadow);
}

.quote-card.dragging {
  cursor: grabbing;
  transition: none;
}

.quote-card.enter-from-right { animation: enter-right var(--spring) both; }
.quote-card.enter-from-left { animation: enter-left var(--spring) both; }
.quote-card.enter-fade { animation: enter-fade 200ms ease both; }

@keyframes enter-right {
  from { opacity: 0; translate: 1000px 0; }
  to { opacity: 1; translate: 0 0; }
}

@keyframes enter-left {
  from { opacity: 0; translate: -1000px 0; }
  to { opacity: 1; translate: 0 0; }
}

@keyframes enter-fade {
  from { opacity: 0; }
  to { opacity: 1; }
}

.quote-text {
  font-size: 1.2rem;
  line-height: 1.8;
  color: var(--ink);
  white-space: pre-line;
  margin-bottom: 2rem;
  letter-spacing: 0.02em;
}

.quote-source {
  font-size: 0.95rem;
  color: var(--graphite);
  text-align: right;
  font-weight: 500;
}

/* === Arrows === */
.nav-arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  z-index: 2;
  background: none;
  border: none;
  cursor: pointer;
  padding: 1rem;
  color: var(--plum);
  opacity: 0.6;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: all var(--transition-normal);
}

.nav-arrow:hover {
  opacity: 1;
  transform: translateY(-50%) scale(1.1);
}

.nav-arrow:active {
  transform: translateY(-50%) scale(0.95);
}

.nav-arrow.left { left: -20px; }
.nav-arrow.right { right: -20px; }

.arrow-icon {
  width: 24px;
  height: 24px;
  fill: currentColor;
}

/* === Footer === */
.reader-footer {
  position: fixed;
  bottom: 0;
  left: 0;
  right: 0;
  padding: 1rem;
  background: var(--card);
  text-align: center;
  font-size: 0.9rem;
  color: var(--graphite);
  box-shadow: 0 -4px 12px var(--plum-shadow);
  border-top: 1px solid rgba(107, 78, 113, 0.05);
}

/* === Responsive === */
@media (max-width: 768px) {
  .wordmark { font-size: 3rem; }
  .landing-description { font-size: 1rem; padding: 0 20px; }
  .nav-arrow.left { left: -10px; }
  .nav-arrow.right { right: -10px; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::colors;
    use hapil_ui::ButtonVariant;

    #[test]
    fn palette_matches_stylesheet() {
        for color in [
            colors::INK,
            colors::GRAPHITE,
            colors::PAPER,
            colors::CARD,
            colors::PLUM,
            colors::PLUM_DEEP,
            colors::PLUM_SHADOW,
        ] {
            assert!(GLOBAL_STYLES.contains(color), "missing {color}");
        }
    }

    #[test]
    fn stylesheet_defines_component_classes() {
        for class in [
            ".quote-card.enter-from-right",
            ".quote-card.enter-from-left",
            ".quote-card.enter-fade",
            ".nav-arrow.left",
            ".nav-arrow.right",
            ".btn-start",
            ".btn-refresh",
            ".reader-footer",
        ] {
            assert!(GLOBAL_STYLES.contains(class), "missing {class}");
        }
    }

    #[test]
    fn stylesheet_covers_button_variants() {
        for variant in [ButtonVariant::Start, ButtonVariant::Refresh] {
            let selector = format!(".{}", variant.class());
            assert!(GLOBAL_STYLES.contains(&selector), "missing {selector}");
        }
        assert!(!GLOBAL_STYLES.contains(".btn-ghost"));
    }
}
