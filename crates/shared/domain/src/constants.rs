//! Canonical string identifiers shared across the workspace.
//!
//! Every tier, feature, and limit name that crosses a boundary (tenant store,
//! config files, overrides) uses exactly one of these strings.

// Plan tiers
pub const FREE: &str = "free";
pub const PRO: &str = "pro";
pub const ENTERPRISE: &str = "enterprise";

// Feature keys
pub const EXPORT: &str = "export";
pub const CUSTOM_BRANDING: &str = "custom_branding";
pub const AUDIT_LOG: &str = "audit_log";
pub const SSO: &str = "sso";
pub const API_ACCESS: &str = "api_access";

// Limit keys
pub const SEATS: &str = "seats";
pub const PROJECTS: &str = "projects";
pub const STORAGE_MB: &str = "storage_mb";
pub const API_REQUESTS_PER_DAY: &str = "api_requests_per_day";

// Wire form of a limit without a ceiling
pub const UNBOUNDED: &str = "unbounded";
