//! TOML configuration store.
//!
//! ```toml
//! [common_env_data]
//! scale_count = 4
//! ```
//!
//! Scalars are returned in their textual form so TOML and INI files are
//! interchangeable behind [`ConfigSource`].

use std::fs;
use std::path::Path;

use toml::{Table, Value};

use super::{ConfigError, ConfigSource};

/// Parsed TOML file.
#[derive(Debug, Clone, Default)]
pub struct TomlStore {
    table: Table,
}

impl TomlStore {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let table: Table = content.parse()?;
        Ok(Self { table })
    }
}

impl ConfigSource for TomlStore {
    fn get(&self, section: &str, key: &str) -> Result<Option<String>, ConfigError> {
        let entries = match self.table.get(section) {
            None => return Ok(None),
            Some(Value::Table(entries)) => entries,
            Some(_) => {
                return Err(ConfigError::Validation(format!(
                    "`{section}` must be a table"
                )));
            }
        };

        let text = match entries.get(key) {
            None => return Ok(None),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Integer(i)) => i.to_string(),
            Some(Value::Float(f)) => f.to_string(),
            Some(Value::Boolean(b)) => b.to_string(),
            Some(Value::Datetime(d)) => d.to_string(),
            Some(other) => {
                return Err(ConfigError::Type {
                    section: section.to_string(),
                    key: key.to_string(),
                    found: other.type_str(),
                });
            }
        };
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> TomlStore {
        TomlStore::parse(content).unwrap()
    }

    #[test]
    fn test_scalars_stringified() {
        let store = parse(
            r#"
[common_env_data]
scale_count = 4
name = "kegerator"
enabled = true
"#,
        );
        let get = |k| store.get("common_env_data", k).unwrap();
        assert_eq!(get("scale_count"), Some("4".to_string()));
        assert_eq!(get("name"), Some("kegerator".to_string()));
        assert_eq!(get("enabled"), Some("true".to_string()));
        assert_eq!(get("missing"), None);
        assert_eq!(store.get("other", "scale_count").unwrap(), None);
    }

    #[test]
    fn test_non_scalar_rejected() {
        let store = parse("[common_env_data]\nscale_count = [1, 2]\n");
        let err = store.get("common_env_data", "scale_count").unwrap_err();
        assert!(matches!(err, ConfigError::Type { found: "array", .. }));
    }

    #[test]
    fn test_section_not_a_table() {
        let store = parse("common_env_data = 3\n");
        let err = store.get("common_env_data", "scale_count").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlStore::parse("[common_env_data\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("htmlpack.toml");
        std::fs::write(&file, "[common_env_data]\nscale_count = \"2\"\n").unwrap();
        let store = TomlStore::from_path(&file).unwrap();
        assert_eq!(
            store.get("common_env_data", "scale_count").unwrap(),
            Some("2".to_string())
        );
    }
}
