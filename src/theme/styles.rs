//! Global CSS styles for Cerveau.
//!
//! Mobile card layout with a fixed bottom navigation bar.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --background: #f1f5f9;
  --card: #ffffff;
  --border: #e2e8f0;

  /* ACCENTS */
  --teal: #14b8a6;
  --teal-dark: #0f766e;
  --emerald: #10b981;
  --orange: #f97316;

  /* MOODS */
  --mood-excellent: #22c55e;
  --mood-good: #14b8a6;
  --mood-neutral: #eab308;
  --mood-tired: #a855f7;

  /* TEXT */
  --text-primary: #0f172a;
  --text-secondary: #475569;
  --text-muted: #94a3b8;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;

  /* Shape */
  --radius-card: 1.25rem;
  --radius-control: 0.75rem;
  --nav-height: 4.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 250ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--background);
  color: var(--text-primary);
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

button {
  font: inherit;
  cursor: pointer;
  border: none;
  background: none;
}

/* === App Shell === */
.app-container {
  min-height: 100vh;
  max-width: 480px;
  margin: 0 auto;
  position: relative;
}

.main-content {
  padding: 1.5rem 1rem calc(var(--nav-height) + 1.5rem);
}

/* === Page Layouts === */
.page-content {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.page-header h1,
.page-title {
  font-size: 1.75rem;
  font-weight: 700;
}

.subtitle {
  margin-top: 0.25rem;
  color: var(--text-secondary);
}

/* === Widget === */
.widget {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius-card);
  padding: 1.25rem;
  box-shadow: 0 1px 3px rgba(15, 23, 42, 0.06);
}

.widget-header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.widget-header h3 {
  font-size: 1.05rem;
  font-weight: 600;
}

.widget-icon {
  font-size: 1.25rem;
}

/* === Mood Grid === */
.mood-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.75rem;
}

.mood-btn {
  padding: 0.9rem 0.5rem;
  border-radius: var(--radius-control);
  border: 2px solid var(--border);
  background: var(--background);
  transition: transform var(--transition-fast), border-color var(--transition-fast);
}

.mood-btn:hover {
  transform: translateY(-1px);
}

.mood-emoji {
  font-size: 1.75rem;
}

.mood-label {
  margin-top: 0.25rem;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.mood-excellent.active { border-color: var(--mood-excellent); background: rgba(34, 197, 94, 0.1); }
.mood-good.active { border-color: var(--mood-good); background: rgba(20, 184, 166, 0.1); }
.mood-neutral.active { border-color: var(--mood-neutral); background: rgba(234, 179, 8, 0.1); }
.mood-tired.active { border-color: var(--mood-tired); background: rgba(168, 85, 247, 0.1); }

.mood-btn.active .mood-label {
  color: var(--text-primary);
  font-weight: 600;
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.65rem 1.25rem;
  border-radius: var(--radius-control);
  font-weight: 600;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-primary {
  background: var(--teal);
  color: #ffffff;
}

.btn-primary:hover {
  background: var(--teal-dark);
}

.btn-secondary {
  border: 2px solid var(--teal);
  color: var(--teal-dark);
}

.btn-secondary:hover {
  background: rgba(20, 184, 166, 0.1);
}

/* === Daily Challenge === */
.challenge-card {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.challenge-text {
  color: var(--text-secondary);
  line-height: 1.5;
}

/* === Stats === */
.stats-list {
  display: flex;
  flex-direction: column;
  gap: 0.9rem;
}

.stat-header {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.35rem;
  font-size: 0.9rem;
}

.stat-value {
  font-weight: 600;
}

.progress-bar {
  height: 0.5rem;
  border-radius: 999px;
  background: var(--border);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  border-radius: 999px;
  transition: width var(--transition-normal);
}

.stat-teal { background: var(--teal); }
.stat-emerald { background: var(--emerald); }
.stat-orange { background: var(--orange); }

/* === Focus Mode === */
.focus-mode {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.focus-title {
  font-weight: 600;
}

.focus-subtitle {
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Empty State === */
.empty-state {
  text-align: center;
  padding: 2rem 1rem;
  color: var(--text-muted);
}

.empty-icon {
  font-size: 2.5rem;
  margin-bottom: 0.5rem;
}

/* === Journal === */
.journal-textarea {
  width: 100%;
  padding: 0.75rem;
  margin-bottom: 1rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-control);
  font: inherit;
  resize: vertical;
}

.journal-textarea:focus {
  outline: 2px solid var(--teal);
  border-color: transparent;
}

/* === Challenges === */
.challenges-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.challenge-item {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem;
  border-radius: var(--radius-control);
  background: var(--background);
}

.challenge-info p {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.difficulty-badge {
  padding: 0.25rem 0.6rem;
  border-radius: 999px;
  font-size: 0.75rem;
  font-weight: 600;
}

.difficulty-easy { background: rgba(34, 197, 94, 0.15); color: #15803d; }
.difficulty-medium { background: rgba(234, 179, 8, 0.15); color: #a16207; }
.difficulty-hard { background: rgba(239, 68, 68, 0.15); color: #b91c1c; }

/* === Settings === */
.settings-list {
  display: flex;
  flex-direction: column;
}

.setting-item {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 0;
  border-bottom: 1px solid var(--border);
  cursor: pointer;
}

.setting-item:last-child {
  border-bottom: none;
}

.setting-item input {
  width: 1.1rem;
  height: 1.1rem;
  accent-color: var(--teal);
}

/* === Bottom Navigation === */
.bottom-nav {
  position: fixed;
  bottom: 0;
  left: 0;
  right: 0;
  height: var(--nav-height);
  background: var(--card);
  border-top: 1px solid var(--border);
}

.nav-container {
  max-width: 480px;
  height: 100%;
  margin: 0 auto;
  display: flex;
  justify-content: space-around;
  align-items: center;
}

.nav-item {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.15rem;
  padding: 0.4rem 0.6rem;
  border-radius: var(--radius-control);
  color: var(--text-muted);
  transition: color var(--transition-fast);
}

.nav-item.active {
  color: var(--teal-dark);
  background: rgba(20, 184, 166, 0.1);
}

.nav-icon {
  font-size: 1.35rem;
}

.nav-label {
  font-size: 0.7rem;
  font-weight: 600;
}

/* === Accessibility === */
@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    transition: none !important;
  }
}
"#;
