//! Organization theme applied to the running console
//!
//! Whatever renders the console reads the current personalization from a
//! shared [`ThemeStore`]. Writers go through [`ThemeApplier`] so the settings
//! flow can be tested with a recording substitute.

use std::sync::Arc;

use parking_lot::RwLock;
use petcare_model::Personalization;

/// Synchronously pushes personalization values into presentation state.
pub trait ThemeApplier: Send + Sync + std::fmt::Debug {
    fn apply(&self, personalization: &Personalization);
}

/// Process-wide theme state shared between the settings flow and renderers.
#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    current: Arc<RwLock<Option<Personalization>>>,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last applied personalization, if any
    pub fn current(&self) -> Option<Personalization> {
        self.current.read().clone()
    }

    /// CSS custom property declarations for a web surface.
    ///
    /// Empty when nothing has been applied yet.
    pub fn css_variables(&self) -> String {
        let guard = self.current.read();
        let Some(p) = guard.as_ref() else {
            return String::new();
        };
        format!(
            ":root {{\n  --primary-color: {};\n  --logo-url: url(\"{}\");\n  --logo-alt-text: \"{}\";\n  --favicon-url: url(\"{}\");\n}}\n",
            css_color(&p.primary_color),
            css_escape(&p.logo_url),
            css_escape(&p.logo_alt_text),
            css_escape(&p.favicon_url),
        )
    }
}

impl ThemeApplier for ThemeStore {
    fn apply(&self, personalization: &Personalization) {
        log::debug!(
            "[Theme] Applying personalization for org {}",
            personalization.org
        );
        *self.current.write() = Some(personalization.clone());
    }
}

/// Pass a color through only if it cannot leave its declaration.
///
/// Anything else renders as `initial`, which leaves the property unset.
fn css_color(raw: &str) -> &str {
    let raw = raw.trim();
    let safe = !raw.is_empty()
        && raw.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-')
        });
    if safe {
        raw
    } else {
        log::warn!("[Theme] Refusing unsafe primary color {:?}", raw);
        "initial"
    }
}

fn css_escape(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Personalization {
        Personalization {
            org: "org-1".into(),
            logo_url: "https://cdn.example.com/logo.png".into(),
            logo_alt_text: "Paws \"Clinic\"".into(),
            favicon_url: "https://cdn.example.com/f.ico".into(),
            primary_color: "#ff7300".into(),
        }
    }

    #[test]
    fn starts_empty() {
        let store = ThemeStore::new();
        assert!(store.current().is_none());
        assert!(store.css_variables().is_empty());
    }

    #[test]
    fn apply_is_visible_to_every_clone() {
        let store = ThemeStore::new();
        let reader = store.clone();
        store.apply(&record());
        assert_eq!(reader.current(), Some(record()));

        let css = reader.css_variables();
        assert!(css.contains("--primary-color: #ff7300;"));
        assert!(css.contains("--logo-alt-text: \"Paws \\\"Clinic\\\"\";"));
        assert!(css.contains("--favicon-url: url(\"https://cdn.example.com/f.ico\");"));
    }

    #[test]
    fn color_cannot_break_out_of_root_block() {
        let store = ThemeStore::new();
        store.apply(&Personalization {
            primary_color: "#fff; } body { display:none".into(),
            ..record()
        });

        let css = store.css_variables();
        assert!(css.contains("--primary-color: initial;"));
        assert!(!css.contains("display:none"));
        assert_eq!(css.matches('}').count(), 1);
    }

    #[test]
    fn functional_color_notation_is_kept() {
        let store = ThemeStore::new();
        store.apply(&Personalization {
            primary_color: "rgb(255, 115, 0)".into(),
            ..record()
        });
        assert!(store.css_variables().contains("--primary-color: rgb(255, 115, 0);"));
    }
}
