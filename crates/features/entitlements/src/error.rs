use thub_domain::limits::Limit;

/// Entitlement resolution error type.
///
/// Every variant is a deterministic input-validation failure: surface it to
/// the caller, never retry, never substitute a default. Feature gating feeds
/// access and billing decisions, so a visible failure beats a silent guess.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntitlementError {
    #[error("unknown plan tier: {tier}")]
    UnknownPlanTier { tier: String },

    #[error("unknown feature key: {key}")]
    UnknownFeatureKey { key: String },

    #[error("unknown limit key: {key}")]
    UnknownLimitKey { key: String },

    /// An override tried to lower a limit below the plan default. Lowering
    /// requires an explicit restriction path, not an override.
    #[error("limit override for '{key}' would lower the plan default ({requested} < {plan})")]
    InvalidLimitOverride { key: String, plan: Limit, requested: Limit },
}

/// Plan catalog construction error type.
///
/// Raised when a configured plan table violates the totality invariant:
/// every tier present, every limit key explicitly valued in every tier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("plan table is missing tier: {tier}")]
    MissingTier { tier: String },

    #[error("plan table entry '{tier}' is missing limit: {key}")]
    MissingLimit { tier: String, key: String },

    #[error("plan table names an unknown tier: {tier}")]
    UnknownTier { tier: String },

    #[error("plan table entry '{tier}' names an unknown feature: {key}")]
    UnknownFeature { tier: String, key: String },

    #[error("plan table entry '{tier}' names an unknown limit: {key}")]
    UnknownLimit { tier: String, key: String },
}
