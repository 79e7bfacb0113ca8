// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Bridge settings, loadable from TOML.
//!
//! ```toml
//! der_digest = "sha256"   # sha256 | sha256d | keccak256
//! strict_low_s = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::hash_algorithm::HashAlgorithm;

/// Environment variable the CLI consults for a config path.
pub const CONFIG_ENV: &str = "SECP_BRIDGE_CONFIG";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Digest applied to messages on the DER path.
    pub der_digest: HashAlgorithm,

    /// Reject high-S signatures outright instead of retrying with `s`
    /// normalized.
    pub strict_low_s: bool,
}

impl BridgeConfig {
    pub const DEFAULT: Self = Self {
        der_digest: HashAlgorithm::Sha256,
        strict_low_s: false,
    };

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded bridge config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

impl Default for BridgeConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config: cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
