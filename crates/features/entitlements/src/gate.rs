use crate::error::EntitlementError;
use crate::resolved::ResolvedFeatureSet;
use std::sync::Arc;
use thub_domain::features::FeatureKey;
use thub_domain::limits::{Limit, LimitKey};

/// Ergonomic query facade over the currently resolved entitlements.
///
/// Holds nothing but an `Arc` to the current [`ResolvedFeatureSet`]. On
/// tenant change the set is swapped wholesale; it is never mutated in place,
/// so snapshots handed out earlier stay coherent.
#[derive(Debug, Clone)]
pub struct FeatureGate {
    current: Arc<ResolvedFeatureSet>,
}

impl FeatureGate {
    #[must_use]
    pub fn new(set: ResolvedFeatureSet) -> Self {
        Self { current: Arc::new(set) }
    }

    /// Replaces the resolved set after a tenant change.
    pub fn swap(&mut self, set: ResolvedFeatureSet) {
        tracing::debug!(tier = set.tier().as_str(), "Feature gate swapped");
        self.current = Arc::new(set);
    }

    /// A shareable snapshot of the current set for the rendering layer.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ResolvedFeatureSet> {
        Arc::clone(&self.current)
    }

    /// Is this feature enabled for the current tenant?
    #[must_use]
    pub fn enabled(&self, key: FeatureKey) -> bool {
        self.current.enabled(key)
    }

    /// String-keyed variant of [`Self::enabled`].
    pub fn feature(&self, key: &str) -> Result<bool, EntitlementError> {
        self.current.feature(key)
    }

    /// The current ceiling for a limit.
    #[must_use]
    pub fn limit(&self, key: LimitKey) -> Limit {
        self.current.limit(key)
    }

    /// String-keyed variant of [`Self::limit`].
    pub fn limit_named(&self, key: &str) -> Result<Limit, EntitlementError> {
        self.current.limit_named(key)
    }

    /// Whether `usage` units fit under the current ceiling for `key`.
    #[must_use]
    pub fn within_limit(&self, key: LimitKey, usage: u64) -> bool {
        self.limit(key).allows(usage)
    }
}
