use crate::prelude::AppError;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Document opened at startup, relative to the working directory.
pub const DEFAULT_DOCUMENT: &str = "phone_dict.json";

/// Logging profiles
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EnvType {
    Dev,
    Prod,
}

impl EnvType {
    pub fn is_which(&self) -> &str {
        match self {
            EnvType::Dev => "dev",
            EnvType::Prod => "prod",
        }
    }

    pub fn parse(str: &str) -> Result<Self, AppError> {
        match str.trim().to_ascii_lowercase().as_str() {
            "dev" => Ok(EnvType::Dev),
            "prod" => Ok(EnvType::Prod),
            _ => Err(AppError::Validation(format!(
                "ENV_TYPE must be 'dev' or 'prod', got '{}'",
                str
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub document: PathBuf,
    pub env_type: EnvType,
}

impl Config {
    /// Reads `.env`, then `ENV_TYPE` (default `dev`).
    pub fn load() -> Result<Self, AppError> {
        dotenv().ok();

        let choice = env::var("ENV_TYPE").unwrap_or("dev".to_string());
        Ok(Self {
            document: PathBuf::from(DEFAULT_DOCUMENT),
            env_type: EnvType::parse(&choice)?,
        })
    }
}
