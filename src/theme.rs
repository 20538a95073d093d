use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition { css: LIGHT_THEME },
        ThemeMode::Dark => ThemeDefinition { css: DARK_THEME },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #f8fafc;
    --color-bg-secondary: #ffffff;
    --color-bg-overlay: rgba(0, 0, 0, 0.5);
    --color-text-primary: #111827;
    --color-text-secondary: #374151;
    --color-text-muted: #6b7280;
    --color-border: #e5e7eb;
    --color-surface-muted: #f3f4f6;
    --color-input-border: #d1d5db;
    --color-input-bg: #ffffff;
    --color-accent: #0a7d36;
    --color-accent-strong: #06602a;
    --color-accent-soft: rgba(10, 125, 54, 0.1);
    --color-highlight: #ffd100;
    --color-highlight-soft: rgba(255, 209, 0, 0.2);
    --color-chat-user-bg: #ffffff;
    --color-chat-user-text: #111827;
    --color-chat-assistant-bg: #0a7d36;
    --color-chat-assistant-text: #ffffff;
    --color-danger: #dc2626;
    --color-danger-soft: #fef2f2;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-secondary); border-bottom: 1px solid var(--color-border); }
.btn-primary { background: var(--color-accent); color: #ffffff; }
.btn-primary:hover { background: var(--color-accent-strong); }
.composer textarea, .composer input { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus, .composer input:focus { border-color: var(--color-accent); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0b1411;
    --color-bg-secondary: #101d18;
    --color-bg-overlay: rgba(0, 0, 0, 0.7);
    --color-text-primary: #f3f4f6;
    --color-text-secondary: #d1d5db;
    --color-text-muted: #9ca3af;
    --color-border: #1f2e27;
    --color-surface-muted: #16251e;
    --color-input-border: #2b3f35;
    --color-input-bg: #101d18;
    --color-accent: #18a14c;
    --color-accent-strong: #0f8038;
    --color-accent-soft: rgba(24, 161, 76, 0.15);
    --color-highlight: #ffd100;
    --color-highlight-soft: rgba(255, 209, 0, 0.12);
    --color-chat-user-bg: #16251e;
    --color-chat-user-text: #f3f4f6;
    --color-chat-assistant-bg: #18a14c;
    --color-chat-assistant-text: #06180d;
    --color-danger: #f87171;
    --color-danger-soft: rgba(248, 113, 113, 0.12);
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-secondary); border-bottom: 1px solid var(--color-border); }
.btn-primary { background: var(--color-accent); color: #06180d; }
.btn-primary:hover { background: var(--color-accent-strong); }
.composer textarea, .composer input { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus, .composer input:focus { border-color: var(--color-accent); }
"#;
