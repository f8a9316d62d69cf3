use crate::limits::Limit;
use crate::theme::Theme;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level resolver configuration, loaded once at start-up and passed
/// explicitly to the resolver constructors.
///
/// With no file present every field falls back to the built-in defaults, so an
/// empty config is always valid.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Plan table override; `None` keeps the built-in catalog.
    pub plans: Option<BTreeMap<String, PlanEntryConfig>>,
    /// Default theme used as the floor for per-tenant merging.
    pub theme: Theme,
}

/// One plan-table row as written in configuration.
///
/// `features` lists the enabled feature names; anything not listed is
/// explicitly disabled. `limits` must name every known limit key — a missing
/// key is rejected at catalog construction, not defaulted.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlanEntryConfig {
    pub features: Vec<String>,
    pub limits: BTreeMap<String, Limit>,
}
