use anyhow::{Error, bail};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Вариант API: `v1` отдает только метку, `v2` еще и вероятности по классам
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVariant {
    V1,
    V2,
}

impl ApiVariant {
    pub fn tag(&self) -> &'static str {
        match self {
            ApiVariant::V1 => "v1",
            ApiVariant::V2 => "v2",
        }
    }
}

impl FromStr for ApiVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" => Ok(ApiVariant::V1),
            "v2" => Ok(ApiVariant::V2),
            other => bail!("unknown API variant '{other}', expected 'v1' or 'v2'"),
        }
    }
}

impl fmt::Display for ApiVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub model_path: PathBuf,
    pub variant: ApiVariant,
    pub host: String,
    pub port: u16,
    pub json_limit: usize,
}
