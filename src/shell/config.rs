// Runtime configuration, read from the environment.
//
// Variables
// - REGISTRATION_ADDR: socket address to listen on. Defaults to 0.0.0.0:8080.
// - REGISTRATION_SEED_FILE: optional JSON seed file. The built-in catalog is used when unset.

use crate::modules::registration::seed::{SeedData, SeedError};
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const ADDR_VAR: &str = "REGISTRATION_ADDR";
pub const SEED_FILE_VAR: &str = "REGISTRATION_SEED_FILE";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address ({value}): {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = lookup(ADDR_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: value.clone(),
                source,
            })?;
        let seed_file = lookup(SEED_FILE_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self { addr, seed_file })
    }

    pub fn load_seed(&self) -> Result<SeedData, SeedError> {
        match &self.seed_file {
            Some(path) => SeedData::from_path(path),
            None => Ok(SeedData::default()),
        }
    }
}
