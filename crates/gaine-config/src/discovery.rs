//! File-based config discovery.
//!
//! Handles finding and loading Gaine configuration files from the
//! filesystem. Library users with in-memory config should use
//! `GaineConfig::from_value()` directly.

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Format as _, Serialized, Toml},
};
use serde_json::Value;
use tracing::debug;

use crate::config::GaineConfig;
use crate::error::{ConfigError, Result};

/// Name of the dedicated config file.
const CONFIG_FILE: &str = "gaine.toml";

/// `package.json` member holding inline configuration.
const PACKAGE_JSON_FIELD: &str = "gaine";

/// File-based configuration discovery
///
/// Searches for configuration files in conventional locations and loads
/// them on top of the built-in defaults.
///
/// # Example
///
/// ```no_run
/// use gaine_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: gaine.toml
    /// 2. package.json (gaine field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get(PACKAGE_JSON_FIELD).is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<GaineConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        debug!(path = %path.display(), "loading configuration");
        self.load_from(&path)
    }

    /// Load config with profile merging
    pub fn load_with_profile(&self, profile: &str) -> Result<GaineConfig> {
        let config = self.load()?;
        config.materialize_profile(Some(profile))
    }

    /// Load config from a specific file path
    fn load_from(&self, path: &Path) -> Result<GaineConfig> {
        // Handle package.json specially
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        // Defaults first, the file on top
        let config: GaineConfig = Figment::new()
            .merge(Serialized::defaults(GaineConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| ConfigError::InvalidValue {
                field: "configuration".to_string(),
                hint: Some(e.to_string()),
            })?;

        // Promote any top-level plugins into build.plugins
        config.materialize_profile(None)
    }

    fn load_from_package_json(&self, path: &Path) -> Result<GaineConfig> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {}", e)),
            })?;

        let gaine_value =
            parsed
                .get(PACKAGE_JSON_FIELD)
                .ok_or_else(|| ConfigError::InvalidValue {
                    field: PACKAGE_JSON_FIELD.to_string(),
                    hint: Some("Add a 'gaine' field to your package.json".to_string()),
                })?;

        if gaine_value.is_null() {
            return Err(ConfigError::InvalidValue {
                field: PACKAGE_JSON_FIELD.to_string(),
                hint: Some("The 'gaine' field cannot be null".to_string()),
            });
        }

        GaineConfig::from_value(gaine_value.clone())
    }
}

/// Discover and load config from current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use gaine_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<GaineConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover and load config with profile (convenience function)
///
/// # Example
///
/// ```no_run
/// use gaine_config::discover_with_profile;
///
/// let config = discover_with_profile("production").unwrap();
/// ```
pub fn discover_with_profile(profile: &str) -> Result<GaineConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_with_profile(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
    }

    #[test]
    fn find_discovers_toml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("gaine.toml");
        fs::write(
            &config_path,
            r#"
[build]
base_path = "/"
"#,
        )
        .unwrap();

        let discovery = ConfigDiscovery::new(dir.path());
        assert_eq!(discovery.find().unwrap(), config_path);
    }

    #[test]
    fn load_returns_not_found_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        let result = discovery.load();
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound));
    }

    #[test]
    fn load_parses_toml_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("gaine.toml"),
            r#"
[build]
base_path = "/Gaine_Africa_app/"
minify = true
"#,
        )
        .unwrap();

        let discovery = ConfigDiscovery::new(dir.path());
        let config = discovery.load().unwrap();
        assert_eq!(config.build.base_path, "/Gaine_Africa_app/");
        assert!(config.build.minify);
        // Unset fields keep their defaults
        assert_eq!(config.build.output_dir, std::path::PathBuf::from("dist"));
    }

    #[test]
    fn load_from_package_json() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{
                "name": "gaine-africa-frontend",
                "gaine": {
                    "build": {
                        "base_path": "/Gaine_Africa_app/"
                    }
                }
            }"#,
        )
        .unwrap();

        let discovery = ConfigDiscovery::new(dir.path());
        let config = discovery.load().unwrap();
        assert_eq!(config.build.base_path, "/Gaine_Africa_app/");
    }

    #[test]
    fn package_json_without_gaine_field_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "gaine-africa-frontend" }"#,
        )
        .unwrap();

        let discovery = ConfigDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
    }
}
