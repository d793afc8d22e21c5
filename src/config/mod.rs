//! Generator configuration.
//!
//! Hosts either build an [`OgConfig`] in code, deserialize it from their own
//! config tree, or point [`OgConfig::load`] at a TOML file:
//!
//! ```toml
//! enable = true
//! excerpt-length = 55
//! debug = false
//! ```

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Default word limit for derived descriptions.
pub const DEFAULT_EXCERPT_LENGTH: usize = 55;

/// Tag generator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OgConfig {
    /// Emit OpenGraph tags at all. Disabled generators render nothing and
    /// injection becomes a no-op.
    pub enable: bool,

    /// Word limit for derived descriptions.
    pub excerpt_length: usize,

    /// Wrap emitted blocks in diagnostic comment markers.
    pub debug: bool,
}

impl Default for OgConfig {
    fn default() -> Self {
        Self {
            enable: true,
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            debug: false,
        }
    }
}

impl OgConfig {
    /// Load and validate a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.excerpt_length == 0 {
            return Err(ConfigError::Validation(
                "excerpt-length must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
