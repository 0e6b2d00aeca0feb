use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "RUNO_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Template used when `runo` is given only an input document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_template: Option<PathBuf>,

    /// Only open an inline span when its marker is followed by a
    /// non-whitespace character.
    #[serde(default = "default_open_lookahead")]
    pub open_lookahead: bool,
}

fn default_open_lookahead() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_template: None,
            open_lookahead: default_open_lookahead(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the template path
        config.default_template = config
            .default_template
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// `$RUNO_CONFIG` when set, otherwise `~/.config/runo/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        let config_dir = shellexpand::tilde("~/.config/runo");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.open_lookahead);
        assert!(config.default_template.is_none());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            default_template: Some(PathBuf::from("/tmp/page.html")),
            open_lookahead: false,
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/templates/page.html");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("templates/page.html"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("RUNO_TEST_TEMPLATES", "/test/env/templates");
        }

        let expanded = Config::expand_path(Path::new("$RUNO_TEST_TEMPLATES/page.html")).unwrap();
        assert_eq!(expanded, PathBuf::from("/test/env/templates/page.html"));

        unsafe {
            env::remove_var("RUNO_TEST_TEMPLATES");
        }
    }

    #[test]
    fn test_expand_path_with_unknown_var_fails() {
        assert!(Config::expand_path(Path::new("$RUNO_SURELY_UNSET_VAR/x")).is_none());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "open_lookahead = \"sometimes\"").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = Config {
            default_template: Some(PathBuf::from("/srv/site/page.html")),
            open_lookahead: false,
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_template_with_tilde_in_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "default_template = \"~/site/page.html\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        let template = config.default_template.unwrap();

        assert!(!template.to_string_lossy().starts_with('~'));
        assert!(template.to_string_lossy().ends_with("site/page.html"));
        assert!(config.open_lookahead);
    }
}
