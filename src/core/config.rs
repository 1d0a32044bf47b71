//! Configuration module for the campus advisor CLI

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// LLM assistant configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Gemini API key; empty means the assistant runs offline
    #[serde(default)]
    pub api_key: String,
    /// Preferred model name
    #[serde(default)]
    pub model: String,
    /// Base URL of the Gemini REST API
    #[serde(default)]
    pub endpoint: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Course catalog TOML; empty means the embedded catalog
    #[serde(default)]
    pub catalog_file: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Assistant settings
    #[serde(default)]
    pub assistant: AssistantConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override the assistant API key
    pub api_key: Option<String>,
    /// Override the assistant model
    pub model: Option<String>,
    /// Override the assistant endpoint
    pub endpoint: Option<String>,
    /// Override the catalog file path
    pub catalog_file: Option<String>,
}

impl Config {
    /// Get the `$ADVISOR` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/advisor`
    /// - macOS: `~/Library/Application Support/advisor`
    /// - Windows: `%APPDATA%\advisor`
    #[must_use]
    pub fn get_advisor_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("advisor")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading configuration so that newly added fields are
    /// populated with their default values. Only fields that are empty in
    /// the current config and non-empty in defaults are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.assistant.api_key.is_empty() && !defaults.assistant.api_key.is_empty() {
            self.assistant.api_key.clone_from(&defaults.assistant.api_key);
            changed = true;
        }
        if self.assistant.model.is_empty() && !defaults.assistant.model.is_empty() {
            self.assistant.model.clone_from(&defaults.assistant.model);
            changed = true;
        }
        if self.assistant.endpoint.is_empty() && !defaults.assistant.endpoint.is_empty() {
            self.assistant
                .endpoint
                .clone_from(&defaults.assistant.endpoint);
            changed = true;
        }

        if self.paths.catalog_file.is_empty() && !defaults.paths.catalog_file.is_empty() {
            self.paths
                .catalog_file
                .clone_from(&defaults.paths.catalog_file);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Allows command-line arguments to override configuration file values
    /// without modifying the persistent configuration file. Only non-`None`
    /// values in the overrides struct replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(api_key) = &overrides.api_key {
            self.assistant.api_key.clone_from(api_key);
        }
        if let Some(model) = &overrides.model {
            self.assistant.model.clone_from(model);
        }
        if let Some(endpoint) = &overrides.endpoint {
            self.assistant.endpoint.clone_from(endpoint);
        }

        if let Some(catalog_file) = &overrides.catalog_file {
            self.paths.catalog_file.clone_from(catalog_file);
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    ///
    /// The file is located in the directory returned by [`get_advisor_dir`].
    ///
    /// [`get_advisor_dir`]: Self::get_advisor_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_advisor_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$ADVISOR` in a string to the actual config directory path,
    /// so configuration values can reference it dynamically.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$ADVISOR") {
            let advisor_dir = Self::get_advisor_dir();
            value.replace("$ADVISOR", advisor_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$ADVISOR`
    /// variables in the values. Missing fields use their serde defaults
    /// (typically empty strings or false).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in config values
        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.catalog_file = Self::expand_variables(&config.paths.catalog_file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Loads the compiled-in default configuration bundled with the binary.
    /// The defaults differ between debug and release builds:
    /// - Debug: Uses `DefaultCLIConfigDebug.toml`
    /// - Release: Uses `DefaultCLIConfigRelease.toml`
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    /// This should never happen in practice since the defaults are compiled
    /// into the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// This is the primary way to load configuration:
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults, and saves the updated config
    /// - If it doesn't exist (first run): creates the config directory and
    ///   writes the defaults to file
    ///
    /// Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    // Merge any missing fields from defaults
                    if config.merge_defaults(&defaults) {
                        // Save the updated config with new fields
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            // First run: create directory and config file from defaults
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// Serializes the current configuration to TOML and writes it to the
    /// platform-specific config file. The config directory is created if it
    /// doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config cannot be serialized to TOML (shouldn't happen)
    /// - The config directory cannot be created
    /// - The file cannot be written (permissions, disk full, etc.)
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`: Logging level ("debug", "info", "warn", "error")
    /// - `file`: Log file path
    /// - `verbose`: Verbose logging boolean
    /// - `api_key`: Gemini API key
    /// - `model`: Assistant model name
    /// - `endpoint`: Assistant API endpoint
    /// - `catalog_file`: Course catalog TOML path
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "api_key" | "api-key" => Some(self.assistant.api_key.clone()),
            "model" => Some(self.assistant.model.clone()),
            "endpoint" => Some(self.assistant.endpoint.clone()),
            "catalog_file" | "catalog-file" => Some(self.paths.catalog_file.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Note: This updates the in-memory config. Call
    /// [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The key is not recognized
    /// - The value cannot be parsed (e.g., "maybe" for the verbose boolean)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "api_key" | "api-key" => self.assistant.api_key = value.to_string(),
            "model" => self.assistant.model = value.to_string(),
            "endpoint" => self.assistant.endpoint = value.to_string(),
            "catalog_file" | "catalog-file" => self.paths.catalog_file = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// The default value is taken from the provided defaults config
    /// (typically from [`from_defaults()`](Config::from_defaults)).
    ///
    /// Note: This updates the in-memory config. Call
    /// [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "api_key" | "api-key" => self
                .assistant
                .api_key
                .clone_from(&defaults.assistant.api_key),
            "model" => self.assistant.model.clone_from(&defaults.assistant.model),
            "endpoint" => self
                .assistant
                .endpoint
                .clone_from(&defaults.assistant.endpoint),
            "catalog_file" | "catalog-file" => self
                .paths
                .catalog_file
                .clone_from(&defaults.paths.catalog_file),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file, causing the next
    /// [`load()`](Config::load) call to recreate it from defaults. This is a
    /// destructive operation that removes all user customizations; the CLI
    /// requires confirmation before calling it.
    ///
    /// If the config file doesn't exist, this succeeds without doing
    /// anything.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    /// (permissions, file locked, etc.)
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[assistant]")?;
        let key_display = if self.assistant.api_key.is_empty() {
            "(not set)"
        } else {
            "(set)"
        };
        writeln!(f, "  api_key = {key_display}")?;
        writeln!(f, "  model = \"{}\"", self.assistant.model)?;
        writeln!(f, "  endpoint = \"{}\"", self.assistant.endpoint)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  catalog_file = \"{}\"", self.paths.catalog_file)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_defaults_parses() {
        let config = Config::from_defaults();
        assert!(!config.logging.level.is_empty());
        assert!(!config.assistant.endpoint.is_empty());
    }

    #[test]
    fn test_get_and_set_round_trip() {
        let mut config = Config::from_defaults();
        config.set("model", "gemini-1.5-pro").expect("known key");
        assert_eq!(config.get("model"), Some("gemini-1.5-pro".to_string()));

        config.set("verbose", "true").expect("known key");
        assert_eq!(config.get("verbose"), Some("true".to_string()));
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = Config::from_defaults();
        assert!(config.set("nonsense", "x").is_err());
    }

    #[test]
    fn test_set_rejects_bad_boolean() {
        let mut config = Config::from_defaults();
        assert!(config.set("verbose", "maybe").is_err());
    }

    #[test]
    fn test_unset_restores_default() {
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();

        config.set("level", "error").expect("known key");
        config.unset("level", &defaults).expect("known key");
        assert_eq!(config.logging.level, defaults.logging.level);
    }

    #[test]
    fn test_merge_defaults_fills_empty_fields() {
        let defaults = Config::from_defaults();
        let mut config = Config::default();

        assert!(config.merge_defaults(&defaults));
        assert_eq!(config.logging.level, defaults.logging.level);
        assert_eq!(config.assistant.endpoint, defaults.assistant.endpoint);
    }

    #[test]
    fn test_display_never_prints_api_key() {
        let mut config = Config::from_defaults();
        config.assistant.api_key = "super-secret".to_string();
        let rendered = config.to_string();
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("api_key = (set)"));
    }

    #[test]
    fn test_expand_variables_in_from_toml() {
        let config = Config::from_toml(
            r#"
[logging]
level = "info"
file = "$ADVISOR/logs/advisor.log"
"#,
        )
        .expect("valid TOML");
        assert!(!config.logging.file.contains("$ADVISOR"));
        assert!(config.logging.file.ends_with("logs/advisor.log"));
    }
}
