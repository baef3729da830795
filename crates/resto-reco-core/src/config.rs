use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; a variable that is set must not be blank, and
/// file names must be bare names rather than paths.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(raw) if raw.trim().is_empty() => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "value is blank".to_string(),
            }),
            Ok(raw) => Ok(raw.trim().to_string()),
            Err(_) => Ok(default.to_string()),
        }
    };

    let file_name = |var: &str, default: &str| -> Result<String, ConfigError> {
        let name = or_default(var, default)?;
        if name.contains('/') || name.contains('\\') {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("'{name}' must be a file name, not a path"),
            });
        }
        Ok(name)
    };

    let data_dir = PathBuf::from(or_default("RESTO_RECO_DATA_DIR", "./data")?);
    let resto_file = file_name("RESTO_RECO_RESTO_FILE", "resto.dat")?;
    let gusto_file = file_name("RESTO_RECO_GUSTO_FILE", "gusto.dat")?;
    let log_level = or_default("RESTO_RECO_LOG_LEVEL", "warn")?;
    let reference_point = or_default("RESTO_RECO_REFERENCE_POINT", "UPLB Gate")?;

    if resto_file == gusto_file {
        return Err(ConfigError::InvalidEnvVar {
            var: "RESTO_RECO_GUSTO_FILE".to_string(),
            reason: "must differ from RESTO_RECO_RESTO_FILE".to_string(),
        });
    }

    Ok(AppConfig {
        data_dir,
        resto_file,
        gusto_file,
        log_level,
        reference_point,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
