use crate::error::{Result, StockError};
use crate::store::StorageFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`StockroomConfig::get`] and [`StockroomConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["format", "autosave", "data-file"];

/// Configuration for a scope, stored in `<scope dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct StockroomConfig {
    /// On-disk format of the inventory file
    #[serde(default)]
    pub format: StorageFormat,

    /// Persist after every successful mutation
    #[serde(default = "default_autosave")]
    pub autosave: bool,

    /// File name inside the scope dir; defaults to the format's file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,
}

fn default_autosave() -> bool {
    true
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            format: StorageFormat::default(),
            autosave: default_autosave(),
            data_file: None,
        }
    }
}

impl StockroomConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockroomConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    pub fn data_file_name(&self) -> &str {
        self.data_file
            .as_deref()
            .unwrap_or_else(|| self.format.default_file_name())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "format" => Some(self.format.to_string()),
            "autosave" => Some(self.autosave.to_string()),
            "data-file" => Some(self.data_file_name().to_string()),
            _ => None,
        }
    }

    /// Change one key. The config is untouched when the key or value is rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "format" => self.format = value.parse()?,
            "autosave" => self.autosave = parse_switch(value)?,
            "data-file" => {
                let name = value.trim();
                if name.is_empty() || name.contains(|c: char| c == '/' || c == '\\') {
                    return Err(StockError::Api(format!("Invalid data file name: {}", value)));
                }
                self.data_file = Some(name.to_string());
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

pub(crate) fn unknown_key(key: &str) -> StockError {
    StockError::Api(format!(
        "Unknown config key: {} (expected one of {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(StockError::Api(format!("Invalid value for autosave: {}", value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StockroomConfig::default();
        assert_eq!(config.format, StorageFormat::Json);
        assert!(config.autosave);
        assert_eq!(config.data_file_name(), "inventory.json");
    }

    #[test]
    fn test_data_file_follows_format_until_set() {
        let mut config = StockroomConfig::default();
        config.set("format", "lines").unwrap();
        assert_eq!(config.data_file_name(), "inventory.txt");

        config.set("data-file", "stock.txt").unwrap();
        assert_eq!(config.data_file_name(), "stock.txt");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = StockroomConfig::default();
        assert!(config.set("format", "xml").is_err());
        assert!(config.set("autosave", "maybe").is_err());
        assert!(config.set("data-file", "../escape.json").is_err());
        assert!(matches!(
            config.set("colour", "blue"),
            Err(StockError::Api(msg)) if msg.contains("Unknown config key")
        ));
        assert_eq!(config, StockroomConfig::default());
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = StockroomConfig::default();
        assert_eq!(config.get("autosave").as_deref(), Some("true"));
        assert_eq!(config.get("format").as_deref(), Some("json"));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = StockroomConfig::load(temp.path().join("missing")).unwrap();
        assert_eq!(config, StockroomConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("scope");

        let mut config = StockroomConfig::default();
        config.set("autosave", "off").unwrap();
        config.set("format", "lines").unwrap();
        config.save(&dir).unwrap();

        let loaded = StockroomConfig::load(&dir).unwrap();
        assert!(!loaded.autosave);
        assert_eq!(loaded.format, StorageFormat::Lines);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: StockroomConfig = serde_json::from_str(r#"{"format": "lines"}"#).unwrap();
        assert!(config.autosave);
        assert_eq!(config.format, StorageFormat::Lines);
    }
}
