//! Configuration for the engine and the caller-facing boundary.

use serde::{Deserialize, Serialize};

use crate::{RpsError, Result, constants};

/// Match engine rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Longest accepted player name, in characters.
    pub max_name_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_name_len: constants::DEFAULT_MAX_NAME_LEN,
        }
    }
}

/// Boundary checks applied before a request reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngressConfig {
    /// Password values treated as an unfilled form and rejected.
    pub placeholder_passwords: Vec<String>,
}

impl Default for IngressConfig {
    fn default() -> Self {
        Self {
            placeholder_passwords: vec![constants::PLACEHOLDER_PASSWORD.to_string()],
        }
    }
}

impl IngressConfig {
    #[must_use]
    pub fn is_placeholder(&self, password: &str) -> bool {
        self.placeholder_passwords.iter().any(|p| p == password)
    }
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpsConfig {
    pub engine: EngineConfig,
    pub ingress: IngressConfig,
}

impl RpsConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let cfg: Self =
            serde_json::from_str(raw).map_err(|e| RpsError::Configuration(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.engine.max_name_len == 0 {
            return Err(RpsError::Configuration(
                "engine.max_name_len must be > 0".into(),
            ));
        }
        Ok(())
    }
}
