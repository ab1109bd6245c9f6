//! Global CSS styles for the cardkit desktop host.
//!
//! Covers the shell, the gallery and the card BEM blocks.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --void-black: #0a0a0a;
  --void-lighter: #121416;
  --void-border: #1f2326;

  --cyan: #00d4aa;
  --gold: #d4af37;
  --moss-glow: #7cb87c;

  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Navigation === */
.nav-header {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  padding: 1rem 2rem;
  border-bottom: 1px solid var(--void-border);
}

.nav-header__title {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  color: var(--gold);
  margin-right: auto;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--cyan);
}

/* === Application Shell === */
.app__wrapper {
  text-align: center;
}

.app__header {
  min-height: 80vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
}

.app__logo {
  height: 40vmin;
  pointer-events: none;
}

.app__link {
  color: var(--cyan);
}

/* === Gallery === */
.gallery {
  padding: 2rem;
}

.gallery__title {
  font-family: var(--font-serif);
  color: var(--gold);
  font-weight: 400;
}

.gallery__subtitle {
  color: var(--text-muted);
  font-size: 0.875rem;
}

.gallery__grid {
  display: flex;
  flex-wrap: wrap;
  gap: 2rem;
  margin-top: 2rem;
}

.story {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.story__name {
  color: var(--cyan);
  font-size: 0.875rem;
  text-decoration: none;
}

.story__args {
  font-size: 0.75rem;
  color: var(--text-muted);
  white-space: pre-wrap;
  max-width: 40rem;
}

.empty-state {
  padding: 4rem 2rem;
  text-align: center;
  color: var(--text-muted);
}

/* === Card === */
.card__box {
  position: relative;
  overflow: hidden;
  border-radius: 6px;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.card__box > a {
  display: block;
  color: inherit;
  text-decoration: none;
}

.card__box--link:hover {
  transform: translateY(-4px);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.6);
}

.card__box .demo--header-photo {
  display: block;
  width: 100%;
  height: 140px;
  object-fit: cover;
}

.card__box__background,
.card__box__info__background {
  position: absolute;
  inset: 0;
  background-size: cover;
  background-position: center;
}

.card__box__info__background {
  filter: blur(12px) brightness(0.5);
}

.card__box__info {
  position: relative;
  padding: 1rem;
}

.card__box--overlay .card__box__info {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  overflow: hidden;
}

.card__box__info > div {
  position: relative;
}

.card__box__info__metadata {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--moss-glow);
}

.card__box__info__title {
  font-family: var(--font-serif);
  font-size: 1.25rem;
  font-weight: 400;
  color: var(--gold);
}

.card__box__info__subtitle {
  font-size: 0.875rem;
  color: var(--text-secondary);
}
"#;
