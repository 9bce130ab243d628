//! Configuration loading
//!
//! Layers, lowest priority first:
//! - Per-environment defaults (`AppConfig::for_environment`)
//! - Optional `config.<environment>.toml` file
//! - `MULTIOTP_*` environment variables, `__` separating nested keys
//!   (e.g. `MULTIOTP_VALIDATOR__TIMEOUT_SECS=10`). List keys take
//!   space-separated values (`MULTIOTP_VALIDATOR__CHECK_FLAGS="-cp -display-log"`)

use config::{Config, Environment as EnvironmentSource, File};
use motp_shared::config::{AppConfig, Environment};

use crate::InfrastructureError;

/// Prefix of environment variables overriding configuration keys
pub const ENV_PREFIX: &str = "MULTIOTP";

/// Keys whose environment values are split on spaces
const LIST_KEYS: [&str; 2] = ["validator.base_args", "validator.check_flags"];

/// Load configuration for the environment named by `ENVIRONMENT`
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    let environment = Environment::from_env();

    // Load .env files if present
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok();

    load_config_for(environment, environment.config_file())
}

/// Load configuration for `environment` using `file` as the optional file layer
pub fn load_config_for(
    environment: Environment,
    file: &str,
) -> Result<AppConfig, InfrastructureError> {
    let defaults = AppConfig::for_environment(environment);

    let env_source = LIST_KEYS.iter().fold(
        EnvironmentSource::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(" ")
            .try_parsing(true),
        |source, key| source.with_list_parse_key(key),
    );

    let settings = Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(File::with_name(file).required(false))
        .add_source(env_source)
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;

    tracing::debug!(
        environment = %config.environment,
        executable = %config.validator.executable.display(),
        timeout_secs = config.validator.timeout_secs,
        "Configuration loaded"
    );

    Ok(config)
}
