//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Failures of the configuration store itself.
///
/// A section or key that is simply missing is not an error: lookups return
/// `Ok(None)` for that case.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file `{0}` not found")]
    NotFound(PathBuf),

    #[error("syntax error in `{path}` at line {line}: {message}")]
    Syntax {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("cannot interpolate `{section}.{key}`: {message}")]
    Interpolation {
        section: String,
        key: String,
        message: String,
    },

    #[error("`{section}.{key}` must be a scalar value, found {found}")]
    Type {
        section: String,
        key: String,
        found: &'static str,
    },

    #[error("config validation error: {0}")]
    Validation(String),
}

impl ConfigError {
    pub(crate) fn syntax(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    pub(crate) fn interpolation(section: &str, key: &str, message: impl Into<String>) -> Self {
        Self::Interpolation {
            section: section.to_string(),
            key: key.to_string(),
            message: message.into(),
        }
    }
}
