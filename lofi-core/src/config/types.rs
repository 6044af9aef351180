//! Configuration type definitions
//!
//! With the `toml` feature a configuration can be read from text:
//!
//! ```toml
//! [apps]
//! face-app = true
//! control = false
//! ```

use lofi_protocol::{Dialect, DialectSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid TOML syntax or value type
    Parse,
    /// No app is enabled
    NoAppSelected,
}

/// Apps section of the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct AppsConfig {
    /// Decode Face-App lines
    #[cfg_attr(feature = "serde", serde(rename = "face-app"))]
    pub face_app: bool,
    /// Decode Control lines
    pub control: bool,
}

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    pub apps: AppsConfig,
}

impl SessionConfig {
    /// Configuration enabling a single app
    pub fn single(dialect: Dialect) -> Self {
        Self::from(DialectSet::from(dialect))
    }

    /// Enabled dialects
    pub fn dialects(&self) -> DialectSet {
        DialectSet {
            face_app: self.apps.face_app,
            control: self.apps.control,
        }
    }

    /// Check that at least one app is enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dialects().is_empty() {
            return Err(ConfigError::NoAppSelected);
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration
    ///
    /// Missing keys default to `false`.
    #[cfg(feature = "toml")]
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(input).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}

impl From<DialectSet> for SessionConfig {
    fn from(dialects: DialectSet) -> Self {
        Self {
            apps: AppsConfig {
                face_app: dialects.face_app,
                control: dialects.control,
            },
        }
    }
}
