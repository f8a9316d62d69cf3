use crate::error::EntitlementError;
use serde::Serialize;
use thub_domain::features::{FeatureKey, FeatureSet};
use thub_domain::limits::{Limit, LimitKey, Limits};
use thub_domain::tiers::PlanTier;

/// The output of a resolution: a total, immutable answer for every feature
/// and limit key.
///
/// Carries no back-reference to the tenant. When the tenant record or its
/// overrides change, re-resolve; never patch an existing set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFeatureSet {
    tier: PlanTier,
    features: FeatureSet,
    limits: Limits,
}

impl ResolvedFeatureSet {
    pub(crate) const fn new(tier: PlanTier, features: FeatureSet, limits: Limits) -> Self {
        Self { tier, features, limits }
    }

    /// The tier this set was resolved from.
    #[must_use]
    pub const fn tier(&self) -> PlanTier {
        self.tier
    }

    /// Typed feature lookup. Total: a [`FeatureKey`] always has an answer.
    #[must_use]
    pub fn enabled(&self, key: FeatureKey) -> bool {
        self.features.enabled(key)
    }

    /// String-keyed feature lookup for callers holding raw identifiers.
    ///
    /// # Errors
    /// [`EntitlementError::UnknownFeatureKey`] if `key` is outside the closed
    /// set — never a default guess.
    pub fn feature(&self, key: &str) -> Result<bool, EntitlementError> {
        let key = FeatureKey::parse(key)
            .ok_or_else(|| EntitlementError::UnknownFeatureKey { key: key.to_owned() })?;
        Ok(self.enabled(key))
    }

    /// Typed limit lookup. Total: a [`LimitKey`] always has a value.
    #[must_use]
    pub const fn limit(&self, key: LimitKey) -> Limit {
        self.limits.get(key)
    }

    /// String-keyed limit lookup, same contract shape as [`Self::feature`].
    ///
    /// # Errors
    /// [`EntitlementError::UnknownLimitKey`] if `key` is outside the closed set.
    pub fn limit_named(&self, key: &str) -> Result<Limit, EntitlementError> {
        let key = LimitKey::parse(key)
            .ok_or_else(|| EntitlementError::UnknownLimitKey { key: key.to_owned() })?;
        Ok(self.limit(key))
    }

    /// The raw feature bitset.
    #[must_use]
    pub const fn features(&self) -> FeatureSet {
        self.features
    }

    /// All limits, one value per key.
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }
}
