use std::{env, fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Result};
use tracing::info;

pub const ADDR_VAR: &str = "MOCK_API_ADDR";
pub const ALLOWED_ORIGIN_VAR: &str = "MOCK_API_ALLOWED_ORIGIN";
pub const DIST_DIR_VAR: &str = "MOCK_API_DIST_DIR";

/// Runtime settings, read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    /// Origin the front end is served from during `trunk serve`
    pub allowed_origin: String,
    /// Built front end, served for every non-API path
    pub dist_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            allowed_origin: "http://localhost:8080".to_string(),
            dist_dir: PathBuf::from("../frontend/dist"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            addr: parse_or(&lookup, ADDR_VAR, defaults.addr)?,
            allowed_origin: lookup(ALLOWED_ORIGIN_VAR).unwrap_or(defaults.allowed_origin),
            dist_dir: lookup(DIST_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.dist_dir),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid {key} value '{raw}': {e}")),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
