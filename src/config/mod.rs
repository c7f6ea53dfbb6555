use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use toml_edit;
use tracing::warn;

/// User-adjustable settings: which pipeline stages run, and where the
/// optional enhancement endpoint lives.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub config_path: PathBuf,
    /// Opaque prompt-enhancement endpoint, consumed as a black box.
    pub endpoint: String,
    pub model: String,
    pub lexical: bool,
    pub grammar: bool,
    pub tone: bool,
    pub structure: bool,
}

impl Default for Config {
    fn default() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        Self {
            config_path: PathBuf::from(&home).join(".config/prompt-polish/config.toml"),
            endpoint: "http://localhost:11434/api/generate".to_string(),
            model: "llama3".to_string(),
            lexical: true,
            grammar: true,
            tone: true,
            structure: true,
        }
    }
}

impl Config {
    /// Load from the default path, falling back to defaults on any problem.
    /// Writes the file on first run so the user has something to edit.
    pub fn load() -> Self {
        let config = Config::default();

        if let Some(parent) = config.config_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        if !config.config_path.exists() {
            if let Err(e) = config.save() {
                warn!("Could not write initial config: {}", e);
            }
            return config;
        }

        Self::load_from(&config.config_path)
    }

    /// Load from an explicit path, keeping defaults for missing keys.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();
        config.config_path = path.to_path_buf();

        if let Ok(contents) = fs::read_to_string(path) {
            if let Ok(parsed) = contents.parse::<toml_edit::DocumentMut>() {
                if let Some(endpoint) = parsed.get("endpoint").and_then(|v| v.as_str()) {
                    config.endpoint = endpoint.to_string();
                }
                if let Some(model) = parsed.get("model").and_then(|v| v.as_str()) {
                    config.model = model.to_string();
                }
                if let Some(lexical) = parsed.get("lexical").and_then(|v| v.as_bool()) {
                    config.lexical = lexical;
                }
                if let Some(grammar) = parsed.get("grammar").and_then(|v| v.as_bool()) {
                    config.grammar = grammar;
                }
                if let Some(tone) = parsed.get("tone").and_then(|v| v.as_bool()) {
                    config.tone = tone;
                }
                if let Some(structure) = parsed.get("structure").and_then(|v| v.as_bool()) {
                    config.structure = structure;
                }
            } else {
                warn!("Config file is not valid TOML, using defaults");
            }
        }

        config
    }

    pub fn save(&self) -> Result<()> {
        let mut doc = toml_edit::DocumentMut::new();
        doc["endpoint"] = toml_edit::value(self.endpoint.clone());
        doc["model"] = toml_edit::value(self.model.clone());
        doc["lexical"] = toml_edit::value(self.lexical);
        doc["grammar"] = toml_edit::value(self.grammar);
        doc["tone"] = toml_edit::value(self.tone);
        doc["structure"] = toml_edit::value(self.structure);

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.config_path, doc.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.config_path.to_string_lossy().contains("config.toml"));
        assert!(config.endpoint.starts_with("http"));
        assert!(config.lexical && config.grammar && config.tone && config.structure);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.config_path = config_path.clone();
        config.model = "mistral".to_string();
        config.tone = false;

        config.save().unwrap();
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path);
        assert_eq!(loaded.model, "mistral");
        assert!(!loaded.tone);
        assert!(loaded.grammar);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let loaded = Config::load_from(Path::new("/non/existent/config.toml"));
        assert_eq!(loaded.model, Config::default().model);
    }

    #[test]
    fn test_load_from_invalid_toml_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "not [ valid toml").unwrap();

        let loaded = Config::load_from(&config_path);
        assert_eq!(loaded.endpoint, Config::default().endpoint);
    }
}
