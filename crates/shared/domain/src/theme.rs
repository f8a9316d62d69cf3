use serde::{Deserialize, Serialize};

/// A tenant's stored theme preference. Any subset of fields may be absent;
/// absent or blank fields fall back to the default theme during resolution.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemePreference {
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
    pub background: Option<String>,
    pub font_family: Option<String>,
    pub logo_url: Option<String>,
}

impl ThemePreference {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.primary_color.is_none()
            && self.accent_color.is_none()
            && self.background.is_none()
            && self.font_family.is_none()
            && self.logo_url.is_none()
    }
}

/// A fully-populated presentation configuration. No field is ever missing;
/// `Theme::default()` is the process-wide baseline every resolution starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub primary_color: String,
    pub accent_color: String,
    pub background: String,
    pub font_family: String,
    pub logo_url: String,
}

// --- Default ---

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#1f6feb".to_owned(),
            accent_color: "#2da44e".to_owned(),
            background: "#ffffff".to_owned(),
            font_family: "Inter, sans-serif".to_owned(),
            logo_url: "/assets/logo.svg".to_owned(),
        }
    }
}
