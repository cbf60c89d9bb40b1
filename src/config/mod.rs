//! Project configuration lookup.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error        # ConfigError
//! ├── ini          # IniStore (platformio.ini)
//! ├── interpolate  # ${section.key} expansion
//! ├── scale        # ScaleCount and its lookup
//! ├── table        # TomlStore
//! ├── util         # config file discovery
//! └── mod.rs       # ConfigSource, Layered (this file)
//! ```
//!
//! The packaging step only needs a `get(section, key)` capability. The
//! binary builds one from the project's config file and layers command-line
//! overrides on top.

mod error;
mod ini;
mod interpolate;
mod scale;
mod table;
mod util;

pub use error::ConfigError;
pub use ini::IniStore;
pub use scale::{KEY, SECTION, ScaleCount, lookup_scale_count};
pub use table::TomlStore;
pub use util::find_config_file;

use std::collections::HashMap;
use std::path::Path;

use crate::debug;

// ============================================================================
// ConfigSource
// ============================================================================

/// A configuration store exposing `get(section, key)`.
///
/// Implementations return `Ok(None)` when the section or key is absent and
/// reserve `Err` for failures of the store itself.
pub trait ConfigSource {
    fn get(&self, section: &str, key: &str) -> Result<Option<String>, ConfigError>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn get(&self, section: &str, key: &str) -> Result<Option<String>, ConfigError> {
        (**self).get(section, key)
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Box<T> {
    fn get(&self, section: &str, key: &str) -> Result<Option<String>, ConfigError> {
        (**self).get(section, key)
    }
}

/// Open a config file, choosing the format by extension.
///
/// `.toml` files are read with [`TomlStore`], everything else as INI.
pub fn open(path: &Path) -> Result<Box<dyn ConfigSource>, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let is_toml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

    debug!("config"; "reading {} as {}", path.display(), if is_toml { "toml" } else { "ini" });

    if is_toml {
        Ok(Box::new(TomlStore::from_path(path)?))
    } else {
        Ok(Box::new(IniStore::from_path(path)?))
    }
}

// ============================================================================
// Layered
// ============================================================================

/// Command-line overrides on top of an optional file store.
///
/// An override always wins, even when it is empty, so `--scale-count ""`
/// turns the step into a no-op regardless of the file.
#[derive(Default)]
pub struct Layered {
    overrides: HashMap<(String, String), String>,
    base: Option<Box<dyn ConfigSource>>,
}

impl Layered {
    pub fn new(base: Option<Box<dyn ConfigSource>>) -> Self {
        Self {
            overrides: HashMap::new(),
            base,
        }
    }

    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) -> &mut Self {
        self.overrides
            .insert((section.to_string(), key.to_string()), value.into());
        self
    }
}

impl ConfigSource for Layered {
    fn get(&self, section: &str, key: &str) -> Result<Option<String>, ConfigError> {
        if let Some(value) = self
            .overrides
            .get(&(section.to_string(), key.to_string()))
        {
            return Ok(Some(value.clone()));
        }
        match &self.base {
            Some(base) => base.get(section, key),
            None => Ok(None),
        }
    }
}

// ============================================================================
// tests
// ============================================================================
