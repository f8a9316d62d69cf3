use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with
/// environment overrides.
///
/// Layered strategy:
/// 1. **Base File**: settings from a file (e.g., `resolver.toml`). With no
///    path given it defaults to `"resolver"` in the working directory.
/// 2. **Environment Overrides**: values from variables prefixed with `THUB__`,
///    using double underscores for nesting (e.g., `THUB__THEME__PRIMARY_COLOR`
///    maps to `theme.primary_color`).
///
/// # Errors
/// Returns [`ConfigError`] if the file cannot be found, the environment
/// variables are malformed, or deserialization into `T` fails.
///
/// # Example
/// ```rust
/// use thub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with(path, default_environment())
}

/// Variant of [`load_config`] accepting a pre-built environment source, for
/// callers that supply the override map themselves instead of reading the
/// process environment.
pub fn load_config_with<T>(
    path: Option<impl AsRef<Path>>,
    env: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from("resolver"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(env);

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}

/// The standard `THUB__`-prefixed environment source used by [`load_config`].
#[must_use]
pub fn default_environment() -> Environment {
    Environment::with_prefix("THUB").separator("__").convert_case(config::Case::Snake)
}
