//! INI configuration store in the `platformio.ini` dialect.
//!
//! Supported syntax:
//! - `[section]` headers (`[env:esp32]` style names are taken verbatim)
//! - `key = value` and `key: value`
//! - full-line comments starting with `;` or `#`
//! - inline comments introduced by whitespace followed by `;` or `#`,
//!   on values and section headers alike
//! - indented continuation lines, joined to the previous value with `\n`
//! - `${section.key}` / `${sysenv.NAME}` references (see [`super::interpolate`])

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{ConfigError, ConfigSource, interpolate};

/// Parsed INI file. Values are stored raw and expanded on lookup.
#[derive(Debug, Clone, Default)]
pub struct IniStore {
    sections: HashMap<String, HashMap<String, String>>,
}

impl IniStore {
    /// Read and parse an INI file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::parse(path, &content)
    }

    /// Parse INI text. `path` is only used in error messages.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, ConfigError> {
        let path = path.into();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current: Option<String> = None;
        // Key that indented lines continue
        let mut open_key: Option<String> = None;

        for (idx, raw_line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim_end_matches('\r');
            let trimmed = line.trim();

            if trimmed.is_empty() {
                open_key = None;
                continue;
            }
            if trimmed.starts_with(';') || trimmed.starts_with('#') {
                continue;
            }
            let stripped = strip_inline_comment(trimmed).trim();

            let indented = line.starts_with([' ', '\t']);
            if indented
                && let (Some(section), Some(key)) = (&current, &open_key)
            {
                if let Some(value) = sections
                    .get_mut(section)
                    .and_then(|entries| entries.get_mut(key))
                    && !stripped.is_empty()
                {
                    if !value.is_empty() {
                        value.push('\n');
                    }
                    value.push_str(stripped);
                }
                continue;
            }

            if let Some(header) = stripped.strip_prefix('[') {
                let name = header
                    .strip_suffix(']')
                    .ok_or_else(|| ConfigError::syntax(&path, line_no, "unterminated section header"))?
                    .trim();
                if name.is_empty() {
                    return Err(ConfigError::syntax(&path, line_no, "empty section name"));
                }
                sections.entry(name.to_string()).or_default();
                current = Some(name.to_string());
                open_key = None;
                continue;
            }

            let Some(split) = stripped.find(['=', ':']) else {
                return Err(ConfigError::syntax(
                    &path,
                    line_no,
                    format!("expected `key = value`, found `{stripped}`"),
                ));
            };
            let Some(section) = &current else {
                return Err(ConfigError::syntax(&path, line_no, "key outside of any section"));
            };
            let key = stripped[..split].trim();
            if key.is_empty() {
                return Err(ConfigError::syntax(&path, line_no, "empty key"));
            }
            let value = stripped[split + 1..].trim();

            sections
                .entry(section.clone())
                .or_default()
                .insert(key.to_string(), value.to_string());
            open_key = Some(key.to_string());
        }

        Ok(Self { sections })
    }

    /// Raw value before interpolation.
    pub fn raw(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }
}

impl ConfigSource for IniStore {
    fn get(&self, section: &str, key: &str) -> Result<Option<String>, ConfigError> {
        let Some(raw) = self.raw(section, key) else {
            return Ok(None);
        };
        let lookup = |s: &str, k: &str| self.raw(s, k);
        interpolate::expand(section, key, raw, &lookup).map(Some)
    }
}

/// Cut a `;` or `#` comment that follows whitespace.
fn strip_inline_comment(value: &str) -> &str {
    let bytes = value.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if matches!(b, b';' | b'#') && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return &value[..i];
        }
    }
    value
}

// ============================================================================
// tests
// ============================================================================
