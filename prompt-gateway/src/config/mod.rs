use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Port the gateway listens on unless `APP__PORT` says otherwise.
pub const DEFAULT_PORT: u16 = 5000;

/// Public Gemini REST endpoint.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model for free-form generation and summaries (e.g., gemini-1.5-flash)
    pub text_model: String,
    /// Model for MCQ generation and answer evaluation (e.g., gemini-1.5-pro)
    pub reasoning_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
    pub api_base: String,
}

impl GatewayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load(DEFAULT_PORT)?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let api_key = match env::var("GEMINI_API_KEY") {
            Ok(key) => key,
            Err(_) => get_env("GOOGLE_API_KEY", None, is_prod).map_err(|_| {
                AppError::ConfigError(anyhow::anyhow!(
                    "GEMINI_API_KEY is required but not set"
                ))
            })?,
        };

        Ok(GatewayConfig {
            common: common_config,
            models: ModelConfig {
                text_model: get_env("GATEWAY_TEXT_MODEL", Some("gemini-1.5-flash"), is_prod)?,
                reasoning_model: get_env(
                    "GATEWAY_REASONING_MODEL",
                    Some("gemini-1.5-pro"),
                    is_prod,
                )?,
            },
            google: GoogleConfig {
                api_key,
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE), is_prod)?,
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
