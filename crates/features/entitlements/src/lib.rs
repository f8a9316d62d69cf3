//! # Plan Entitlements
//!
//! This crate resolves a tenant's subscription tier plus optional per-tenant
//! overrides into a fully-populated, immutable set of feature flags and usage
//! limits. It is the single decision point for "may this tenant do X" and
//! "how much of Y does this tenant get".
//!
//! ## Architecture
//!
//! 1. **Catalog ([`PlanCatalog`]):** the static plan table, one row per
//!    [`PlanTier`]. Built in ([`PlanCatalog::builtin`]) or loaded from
//!    configuration ([`PlanCatalog::from_config`]) with totality validated at
//!    construction.
//! 2. **Resolution ([`PlanCatalog::resolve`]):** pure merge of a tier row with
//!    tenant overrides, producing a fresh [`ResolvedFeatureSet`] per call.
//! 3. **Gating ([`FeatureGate`]):** a thin query facade over the currently
//!    resolved set, swapped wholesale whenever the tenant record changes.
//!
//! Overrides may enable or disable any feature, but may only *raise* a limit
//! above the plan default (or lift it to unbounded). A lowering override is
//! rejected with [`EntitlementError::InvalidLimitOverride`] rather than
//! guessed at.

mod error;
mod gate;
mod resolved;

pub use crate::error::{CatalogError, EntitlementError};
pub use crate::gate::FeatureGate;
pub use crate::resolved::ResolvedFeatureSet;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thub_domain::config::{PlanEntryConfig, ResolverConfig};
use thub_domain::features::{FeatureKey, FeatureSet};
use thub_domain::limits::{Limit, LimitKey, Limits};
use thub_domain::tenant::TenantOverrides;
use thub_domain::tiers::PlanTier;

/// One plan-table row: the feature set and limits a tier grants by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntitlements {
    pub features: FeatureSet,
    pub limits: Limits,
}

/// The static plan table: a validated, immutable mapping from every
/// [`PlanTier`] to its default entitlements.
///
/// Construct once at start-up and share by reference; resolution never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    entries: BTreeMap<PlanTier, PlanEntitlements>,
}

impl PlanCatalog {
    /// The built-in plan table used when configuration supplies none.
    #[must_use]
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();

        entries.insert(
            PlanTier::Free,
            PlanEntitlements {
                features: FeatureSet::empty(),
                limits: Limits {
                    seats: Limit::Bounded(1),
                    projects: Limit::Bounded(3),
                    storage_mb: Limit::Bounded(512),
                    api_requests_per_day: Limit::Bounded(100),
                },
            },
        );

        entries.insert(
            PlanTier::Pro,
            PlanEntitlements {
                features: FeatureSet::EXPORT | FeatureSet::AUDIT_LOG | FeatureSet::API_ACCESS,
                limits: Limits {
                    seats: Limit::Bounded(10),
                    projects: Limit::Bounded(25),
                    storage_mb: Limit::Bounded(10_240),
                    api_requests_per_day: Limit::Bounded(10_000),
                },
            },
        );

        entries.insert(
            PlanTier::Enterprise,
            PlanEntitlements {
                features: FeatureSet::ALL,
                limits: Limits {
                    seats: Limit::Unbounded,
                    projects: Limit::Unbounded,
                    storage_mb: Limit::Bounded(102_400),
                    api_requests_per_day: Limit::Unbounded,
                },
            },
        );

        // Total by construction: one insert per PlanTier::ALL entry above.
        Self { entries }
    }

    /// Builds a catalog from explicit entries, validating totality: every
    /// known tier must be present.
    ///
    /// Feature and limit totality within a row is structural ([`FeatureSet`]
    /// and [`Limits`] cannot omit a key), so only tier coverage is checked.
    pub fn new(entries: BTreeMap<PlanTier, PlanEntitlements>) -> Result<Self, CatalogError> {
        for tier in PlanTier::ALL {
            if !entries.contains_key(&tier) {
                return Err(CatalogError::MissingTier { tier: tier.as_str().to_owned() });
            }
        }
        Ok(Self { entries })
    }

    /// Builds a catalog from loaded configuration.
    ///
    /// A config without a plan table keeps the built-in catalog. A configured
    /// table is validated strictly: unknown tier/feature/limit names and
    /// missing limit keys are construction errors, not runtime surprises.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, CatalogError> {
        let Some(plans) = &config.plans else {
            tracing::info!("Plan catalog initialized from builtin table");
            return Ok(Self::builtin());
        };

        let mut entries = BTreeMap::new();
        for (name, entry) in plans {
            let tier = PlanTier::parse(name)
                .ok_or_else(|| CatalogError::UnknownTier { tier: name.clone() })?;
            entries.insert(tier, Self::entry_from_config(tier, entry)?);
        }

        let catalog = Self::new(entries)?;
        tracing::info!(tiers = plans.len(), "Plan catalog initialized from config");
        Ok(catalog)
    }

    fn entry_from_config(
        tier: PlanTier,
        entry: &PlanEntryConfig,
    ) -> Result<PlanEntitlements, CatalogError> {
        let mut features = FeatureSet::empty();
        for name in &entry.features {
            let key = FeatureKey::parse(name).ok_or_else(|| CatalogError::UnknownFeature {
                tier: tier.as_str().to_owned(),
                key: name.clone(),
            })?;
            features |= key.into();
        }

        for name in entry.limits.keys() {
            if LimitKey::parse(name).is_none() {
                return Err(CatalogError::UnknownLimit {
                    tier: tier.as_str().to_owned(),
                    key: name.clone(),
                });
            }
        }

        let limit = |key: LimitKey| {
            entry.limits.get(key.as_str()).copied().ok_or_else(|| CatalogError::MissingLimit {
                tier: tier.as_str().to_owned(),
                key: key.as_str().to_owned(),
            })
        };

        Ok(PlanEntitlements {
            features,
            limits: Limits {
                seats: limit(LimitKey::Seats)?,
                projects: limit(LimitKey::Projects)?,
                storage_mb: limit(LimitKey::StorageMb)?,
                api_requests_per_day: limit(LimitKey::ApiRequestsPerDay)?,
            },
        })
    }

    /// The default entitlements for a tier, before any overrides.
    pub fn entitlements(&self, tier: PlanTier) -> Result<&PlanEntitlements, EntitlementError> {
        self.entries
            .get(&tier)
            .ok_or_else(|| EntitlementError::UnknownPlanTier { tier: tier.as_str().to_owned() })
    }

    /// Resolves a raw tier name plus optional overrides into a fresh
    /// [`ResolvedFeatureSet`].
    ///
    /// # Errors
    /// * [`EntitlementError::UnknownPlanTier`] if `tier` is not a known name.
    /// * Everything [`PlanCatalog::resolve_tier`] can return.
    pub fn resolve(
        &self,
        tier: &str,
        overrides: Option<&TenantOverrides>,
    ) -> Result<ResolvedFeatureSet, EntitlementError> {
        let tier = PlanTier::parse(tier)
            .ok_or_else(|| EntitlementError::UnknownPlanTier { tier: tier.to_owned() })?;
        self.resolve_tier(tier, overrides)
    }

    /// Resolves a typed tier plus optional overrides into a fresh
    /// [`ResolvedFeatureSet`].
    ///
    /// Pure function of its inputs: no I/O, no shared mutable state, identical
    /// inputs yield value-equal outputs.
    ///
    /// # Errors
    /// * [`EntitlementError::UnknownFeatureKey`] / [`EntitlementError::UnknownLimitKey`]
    ///   if an override names a key outside the closed sets.
    /// * [`EntitlementError::InvalidLimitOverride`] if an override would lower
    ///   a limit below the plan default.
    pub fn resolve_tier(
        &self,
        tier: PlanTier,
        overrides: Option<&TenantOverrides>,
    ) -> Result<ResolvedFeatureSet, EntitlementError> {
        let base = self.entitlements(tier)?;
        let mut features = base.features;
        let mut limits = base.limits;

        if let Some(overrides) = overrides {
            for (name, enabled) in &overrides.features {
                let key = FeatureKey::parse(name)
                    .ok_or_else(|| EntitlementError::UnknownFeatureKey { key: name.clone() })?;
                features.set_enabled(key, *enabled);
            }

            for (name, requested) in &overrides.limits {
                let key = LimitKey::parse(name)
                    .ok_or_else(|| EntitlementError::UnknownLimitKey { key: name.clone() })?;
                let plan = limits.get(key);
                if *requested < plan {
                    return Err(EntitlementError::InvalidLimitOverride {
                        key: name.clone(),
                        plan,
                        requested: *requested,
                    });
                }
                limits.set(key, *requested);
            }
        }

        tracing::debug!(tier = tier.as_str(), "Entitlements resolved");
        Ok(ResolvedFeatureSet::new(tier, features, limits))
    }
}

// --- Default ---

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
