//! Agent configuration and environment overrides.
//!
//! | Variable       | Effect                                         |
//! |----------------|------------------------------------------------|
//! | `LARDER_MODEL` | model identifier handed to the agent runtime   |
//! | `LARDER_HOST`  | `runtime` (default) or `stub`                  |
//!
//! ```rust
//! use lagent::{AgentConfig, HostKind};
//!
//! let config = AgentConfig::from_lookup(|key| match key {
//!     "LARDER_HOST" => Some("stub".to_string()),
//!     _ => None,
//! })
//! .expect("config should load");
//!
//! assert_eq!(config.host, HostKind::Stub);
//! ```

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::AgentError;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const MODEL_ENV: &str = "LARDER_MODEL";
pub const HOST_ENV: &str = "LARDER_HOST";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    #[default]
    Runtime,
    Stub,
}

impl Display for HostKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Runtime => "runtime",
            Self::Stub => "stub",
        })
    }
}

pub fn parse_host_kind(value: &str) -> Option<HostKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "runtime" | "real" | "adk" => Some(HostKind::Runtime),
        "stub" | "demo" | "test" => Some(HostKind::Stub),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub model: String,
    pub host: HostKind,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            host: HostKind::default(),
        }
    }
}

impl AgentConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_host(mut self, host: HostKind) -> Self {
        self.host = host;
        self
    }

    pub fn from_env() -> Result<Self, AgentError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup` on top of the defaults. Blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AgentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(model) = non_blank(MODEL_ENV) {
            config.model = model.trim().to_string();
        }

        if let Some(host) = non_blank(HOST_ENV) {
            config.host = parse_host_kind(&host).ok_or_else(|| {
                AgentError::configuration(format!(
                    "unknown {HOST_ENV} value '{host}', expected 'runtime' or 'stub'"
                ))
            })?;
        }

        Ok(config)
    }
}
