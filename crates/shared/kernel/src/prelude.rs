//! Convenience re-exports for downstream crates.

pub use crate::config::{ConfigError, load_config};
pub use thub_domain::config::{PlanEntryConfig, ResolverConfig};
pub use thub_domain::features::{FeatureKey, FeatureSet};
pub use thub_domain::limits::{Limit, LimitKey, Limits};
pub use thub_domain::tenant::{TenantOverrides, TenantRecord};
pub use thub_domain::theme::{Theme, ThemePreference};
pub use thub_domain::tiers::PlanTier;
