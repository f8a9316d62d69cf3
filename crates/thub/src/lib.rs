//! Facade crate for `TenantHub` resolvers and shared modules.
//! Re-exports domain/kernel primitives and composes the two resolvers behind
//! one entry point. Keep this crate thin: it should compose other crates, not
//! implement business logic.
//!
//! ## Usage
//! - Build a [`TenantResolver`] once at start-up (built-in defaults or loaded
//!   config), then call [`TenantResolver::resolve`] whenever the current
//!   tenant record changes.
//! - The rendering layer reads the returned [`ResolvedTenant`] until the next
//!   change; it never patches it in place.

pub use thub_domain as domain;
pub use thub_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    pub use thub_entitlements as entitlements;
    pub use thub_theming as theming;

    /// Enabled feature slices.
    pub const ENABLED: &[&str] = &["entitlements", "theming"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

use thub_domain::config::ResolverConfig;
use thub_domain::tenant::TenantRecord;
use thub_domain::theme::Theme;
use thub_entitlements::{
    CatalogError, EntitlementError, FeatureGate, PlanCatalog, ResolvedFeatureSet,
};
use thub_theming::ThemeResolver;

/// Both resolved configuration objects for one tenant, produced together so
/// the rendering layer gets a single coherent handover per tenant change.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTenant {
    pub entitlements: ResolvedFeatureSet,
    pub theme: Theme,
}

/// Composes the plan entitlement and theme resolvers over one loaded
/// configuration.
///
/// Construct once, share by reference; every resolution is a pure function of
/// the tenant record passed in.
#[derive(Debug, Clone)]
pub struct TenantResolver {
    catalog: PlanCatalog,
    themes: ThemeResolver,
}

impl TenantResolver {
    /// Resolver over the built-in plan table and default theme.
    #[must_use]
    pub fn builtin() -> Self {
        Self { catalog: PlanCatalog::builtin(), themes: ThemeResolver::default() }
    }

    /// Resolver over explicitly loaded configuration.
    ///
    /// # Errors
    /// Returns [`CatalogError`] if the configured plan table is not total.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, CatalogError> {
        let catalog = PlanCatalog::from_config(config)?;
        let themes = ThemeResolver::new(config.theme.clone());
        tracing::info!("Tenant resolver initialized");
        Ok(Self { catalog, themes })
    }

    #[must_use]
    pub const fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn themes(&self) -> &ThemeResolver {
        &self.themes
    }

    /// Resolves a tenant record into its entitlements and theme.
    ///
    /// # Errors
    /// Propagates every [`EntitlementError`] from plan resolution; theme
    /// resolution cannot fail.
    pub fn resolve(&self, record: &TenantRecord) -> Result<ResolvedTenant, EntitlementError> {
        let entitlements = self.catalog.resolve(&record.plan, record.overrides.as_ref())?;
        let theme = self.themes.resolve(record.theme.as_ref());
        Ok(ResolvedTenant { entitlements, theme })
    }

    /// Resolves a tenant record straight into a [`FeatureGate`] for callers
    /// that only gate behavior and never read the theme.
    pub fn gate(&self, record: &TenantRecord) -> Result<FeatureGate, EntitlementError> {
        let entitlements = self.catalog.resolve(&record.plan, record.overrides.as_ref())?;
        Ok(FeatureGate::new(entitlements))
    }
}

// --- Default ---

impl Default for TenantResolver {
    fn default() -> Self {
        Self::builtin()
    }
}
