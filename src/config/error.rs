//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_display() {
        let err = ConfigError::Io(
            PathBuf::from("opengraph.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("opengraph.toml"));

        let err = ConfigError::Validation("excerpt-length must be at least 1".into());
        assert!(format!("{err}").contains("excerpt-length"));
    }
}
