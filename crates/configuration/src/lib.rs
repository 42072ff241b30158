use crate::error::ConfigError;
use core_types::Instrument;
use serde::Deserialize;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    Config, LatencyParams, LogFormat, LoggingSettings, MetricsParams, ServerSettings, WeightingParams,
};

/// Prefix for environment overrides, e.g. `ALLOCATOR__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "ALLOCATOR";

/// Loads the application configuration from `config.toml` in the working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("config.toml"))
}

/// Loads the application configuration from the given file, layered under
/// `ALLOCATOR__*` environment variables.
///
/// The file is optional: every section has defaults. The result is validated
/// before it is returned.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "Configuration loaded.");
    Ok(config)
}

#[derive(Debug, Deserialize)]
struct UniverseFile {
    instruments: Vec<Instrument>,
}

/// Reads an instrument table from a TOML file of `[[instruments]]` entries.
pub fn load_universe(path: &Path) -> Result<Vec<Instrument>, ConfigError> {
    let file = config::Config::builder()
        .add_source(config::File::from(path).required(true))
        .build()?
        .try_deserialize::<UniverseFile>()?;

    if file.instruments.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "universe file {} lists no instruments",
            path.display()
        )));
    }
    Ok(file.instruments)
}
