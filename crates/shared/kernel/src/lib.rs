//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for config
//! loading and the common domain prelude.
//!
//! ## Config loading
//! ```rust,ignore
//! use thub_kernel::config::load_config;
//! use thub_domain::config::ResolverConfig;
//!
//! let cfg: ResolverConfig = load_config(Some("config/resolver")).unwrap_or_default();
//! ```

pub mod config;
pub mod prelude;

pub use thub_domain as domain;
