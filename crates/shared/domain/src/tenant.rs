use crate::limits::Limit;
use crate::theme::ThemePreference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-tenant exceptions to plan defaults.
///
/// Keys arrive from the tenant store as raw strings and are validated against
/// the closed key sets during resolution; a typo is an error there, never a
/// silent no-op.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantOverrides {
    pub features: BTreeMap<String, bool>,
    pub limits: BTreeMap<String, Limit>,
}

impl TenantOverrides {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty() && self.limits.is_empty()
    }
}

/// The slice of a tenant record the resolvers consume.
///
/// Supplied by the external tenant store; the core never queries a store
/// itself. `plan` is the raw tier name and is validated during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRecord {
    pub plan: String,
    #[serde(default)]
    pub overrides: Option<TenantOverrides>,
    #[serde(default)]
    pub theme: Option<ThemePreference>,
}
