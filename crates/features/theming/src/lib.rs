//! # Theme Resolution
//!
//! Resolves a tenant's (possibly absent or partial) theme preference into a
//! fully-populated [`Theme`], field by field, with the default theme as the
//! guaranteed floor. A tenant that sets only a brand color keeps the default
//! typography; a tenant that sets nothing gets the default verbatim.
//!
//! Resolution is infallible by design: a cosmetic fallback to defaults is
//! always safe, so unlike entitlement resolution there is no error taxonomy
//! here. Color/format validation belongs to the presentation layer.

use thub_domain::theme::{Theme, ThemePreference};

/// Resolves tenant theme preferences against an injected default theme.
///
/// The default is supplied at construction (config-loaded or
/// `Theme::default()`); there is no ambient global to consult, which keeps
/// resolution pure and testable in isolation.
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    default: Theme,
}

impl ThemeResolver {
    #[must_use]
    pub const fn new(default: Theme) -> Self {
        Self { default }
    }

    /// The floor every resolution falls back to.
    #[must_use]
    pub const fn default_theme(&self) -> &Theme {
        &self.default
    }

    /// Resolves a preference into a complete theme.
    ///
    /// Returns a fresh value per call; callers own their copy and may mutate
    /// it without touching the resolver's default. A field counts as supplied
    /// only when present and non-blank after trimming.
    #[must_use]
    pub fn resolve(&self, preference: Option<&ThemePreference>) -> Theme {
        let Some(preference) = preference else {
            return self.default.clone();
        };

        let theme = Theme {
            primary_color: pick(&preference.primary_color, &self.default.primary_color),
            accent_color: pick(&preference.accent_color, &self.default.accent_color),
            background: pick(&preference.background, &self.default.background),
            font_family: pick(&preference.font_family, &self.default.font_family),
            logo_url: pick(&preference.logo_url, &self.default.logo_url),
        };
        tracing::debug!(customized = !preference.is_empty(), "Theme resolved");
        theme
    }
}

/// Field-level merge rule: a blank or absent override never shadows the
/// default.
fn pick(supplied: &Option<String>, default: &str) -> String {
    match supplied {
        Some(value) if !value.trim().is_empty() => value.clone(),
        _ => default.to_owned(),
    }
}

// --- Default ---

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
