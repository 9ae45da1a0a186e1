//! Configuration loaded from the environment.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3004;
/// Default number of central nodes listed in a report.
pub const DEFAULT_CENTRAL_NODES: usize = 5;
/// Default cap on relationships accepted per request.
pub const DEFAULT_MAX_RELATIONSHIPS: usize = 100_000;
/// Default cap on HTTP request body size (64 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Top-level RelGraph configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelGraphConfig {
    /// HTTP server port.
    pub port: u16,
    /// How many nodes the "most central" block lists when a request does not say.
    pub central_nodes: usize,
    /// Largest relationship list a single request may carry.
    pub max_relationships: usize,
    /// Largest HTTP request body accepted, in bytes.
    ///
    /// Must leave room for `max_relationships` triples, or oversized lists are
    /// cut off by the body limit before the relationship cap is checked.
    pub max_body_bytes: usize,
    /// Whether node descriptions are rendered when a request does not say.
    pub include_descriptions: bool,
}

impl Default for RelGraphConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            central_nodes: DEFAULT_CENTRAL_NODES,
            max_relationships: DEFAULT_MAX_RELATIONSHIPS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            include_descriptions: true,
        }
    }
}

impl RelGraphConfig {
    /// Create configuration from environment variables and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; set but unparseable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            central_nodes: parse_var(&lookup, "RELGRAPH_CENTRAL_NODES")?
                .unwrap_or(defaults.central_nodes),
            max_relationships: parse_var(&lookup, "RELGRAPH_MAX_RELATIONSHIPS")?
                .unwrap_or(defaults.max_relationships),
            max_body_bytes: parse_var(&lookup, "RELGRAPH_MAX_BODY_BYTES")?
                .unwrap_or(defaults.max_body_bytes),
            include_descriptions: parse_bool(&lookup, "RELGRAPH_INCLUDE_DESCRIPTIONS")?
                .unwrap_or(defaults.include_descriptions),
        };

        debug!(?config, "Loaded configuration");
        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} has invalid value {:?}", key, raw))),
    }
}

fn parse_bool<F>(lookup: &F, key: &str) -> Result<Option<bool>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::Config(format!("{} has invalid value {:?}", key, raw))),
        },
    }
}
