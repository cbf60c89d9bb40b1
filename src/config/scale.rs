//! The `scale_count` value selecting which variant's HTML is packaged.

use std::fmt;
use std::path::{Component, Path};

use super::{ConfigError, ConfigSource};

/// Section holding shared environment data in `platformio.ini`.
pub const SECTION: &str = "common_env_data";
/// Key naming the scale variant.
pub const KEY: &str = "scale_count";

/// A non-empty scale identifier that names a single directory under `html/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleCount(String);

impl ScaleCount {
    /// Validate a raw configuration value.
    ///
    /// Returns `Ok(None)` for empty or whitespace-only values.
    pub fn parse(raw: &str) -> Result<Option<Self>, ConfigError> {
        let value = raw.trim();
        if value.is_empty() {
            return Ok(None);
        }

        let mut components = Path::new(value).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !value.contains(['/', '\\']) => {
                Ok(Some(Self(value.to_string())))
            }
            _ => Err(ConfigError::Validation(format!(
                "scale count `{value}` must name a single directory"
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScaleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read and validate `section.key` from `source`.
///
/// Absent and empty values both yield `Ok(None)`; only store failures and
/// invalid values are errors.
pub fn lookup_scale_count(
    source: &dyn ConfigSource,
    section: &str,
    key: &str,
) -> Result<Option<ScaleCount>, ConfigError> {
    match source.get(section, key)? {
        Some(raw) => ScaleCount::parse(&raw),
        None => Ok(None),
    }
}
