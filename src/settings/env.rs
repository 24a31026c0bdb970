use crate::settings::model::{ApiVariant, Settings};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_MODEL_PATH: &str = "assets/model.json";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_JSON_LIMIT: usize = 64 * 1024;

impl Settings {
    /// Настройки из переменных окружения (после `dotenv()`)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let model_path = lookup("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));

        let variant = parse_or(&lookup, "API_VARIANT", ApiVariant::V1)?;
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let json_limit = parse_or(&lookup, "JSON_LIMIT", DEFAULT_JSON_LIMIT)?;

        Ok(Settings {
            model_path,
            variant,
            host,
            port,
            json_limit,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("invalid value '{raw}' for {key}")),
    }
}
