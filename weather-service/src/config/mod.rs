use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the geocoding search API.
    pub geocoding_url: String,
    /// Base URL of the forecast API.
    pub forecast_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl WeatherConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(WeatherConfig {
            common: common_config,
            provider: ProviderConfig {
                geocoding_url: get_env(
                    "GEOCODING_URL",
                    Some("https://geocoding-api.open-meteo.com/v1/search"),
                    is_prod,
                )?,
                forecast_url: get_env(
                    "FORECAST_URL",
                    Some("https://api.open-meteo.com/v1/forecast"),
                    is_prod,
                )?,
                user_agent: get_env(
                    "PROVIDER_USER_AGENT",
                    Some(concat!("weather-service/", env!("CARGO_PKG_VERSION"))),
                    is_prod,
                )?,
                timeout_secs: get_env("PROVIDER_TIMEOUT_SECS", Some("10"), is_prod)?
                    .parse()
                    .unwrap_or(10),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
