//! Packaging error types.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ConfigError;
use crate::minify::MinifyError;

/// Errors that abort the packaging step.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot {action} `{path}`")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot minify `{path}`")]
    Minify {
        path: PathBuf,
        #[source]
        source: MinifyError,
    },
}

impl PackageError {
    /// Build a `map_err` adapter for an IO failure on `path`.
    pub(crate) fn io(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| Self::Io {
            action,
            path,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::ErrorKind;

    #[test]
    fn test_io_display_and_source() {
        let err = PackageError::io("read", Path::new("html/a.htm"))(io::Error::new(
            ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.to_string(), "cannot read `html/a.htm`");
        assert_eq!(err.source().map(|s| s.to_string()), Some("denied".to_string()));
    }

    #[test]
    fn test_config_is_transparent() {
        let err: PackageError = ConfigError::Validation("bad scale".into()).into();
        assert_eq!(err.to_string(), "config validation error: bad scale");
    }
}
