//! High-level file configuration structure.
//!
//! This module provides the `GaineConfig` struct and profile merging logic.
//! For file discovery, see the `discovery` module.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::build::{BuildOptions, PluginHandle};
use crate::error::{ConfigError, Result as ConfigResult};
use crate::settings::GlobalSettings;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GaineConfig {
    #[serde(default)]
    pub build: BuildOptions,

    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,

    #[serde(default)]
    pub settings: GlobalSettings,

    #[serde(default)]
    #[serde(rename = "plugins")]
    #[serde(skip_serializing)]
    extra_plugins: Vec<PluginHandle>,
}

/// Named set of overrides applied on top of the base config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub build: Value,

    #[serde(default)]
    pub settings: Value,
}

impl GaineConfig {
    /// Create from `serde_json::Value` (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use gaine_config::GaineConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "build": {
    ///         "base_path": "/app/",
    ///         "minify": true
    ///     }
    /// });
    ///
    /// let config = GaineConfig::from_value(value).unwrap();
    /// assert_eq!(config.build.base_path, "/app/");
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        let mut config: GaineConfig =
            serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
                field: "config".to_string(),
                hint: Some(e.to_string()),
            })?;
        config.promote_top_level_plugins();
        Ok(config)
    }

    /// Convert to `serde_json::Value`
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Apply the named profile's overrides to the base config.
    ///
    /// Objects merge recursively; arrays and scalars replace. Unknown
    /// profile names leave the config unchanged.
    pub fn materialize_profile(mut self, profile: Option<&str>) -> ConfigResult<Self> {
        self.promote_top_level_plugins();

        let Some(name) = profile else {
            return Ok(self);
        };

        let Some(profile_cfg) = self.profiles.get(name).cloned() else {
            return Ok(self);
        };

        if !profile_cfg.build.is_null() {
            self.build = merge_section(&self.build, &profile_cfg.build)?;
        }

        if !profile_cfg.settings.is_null() {
            self.settings = merge_section(&self.settings, &profile_cfg.settings)?;
        }

        Ok(self)
    }

    fn promote_top_level_plugins(&mut self) {
        if self.extra_plugins.is_empty() {
            return;
        }

        self.build.plugins.append(&mut self.extra_plugins);
    }
}

/// Merge profile overrides into a serializable config section.
fn merge_section<T>(base: &T, overrides: &Value) -> ConfigResult<T>
where
    T: Serialize + serde::de::DeserializeOwned,
{
    let mut merged =
        serde_json::to_value(base).map_err(|err| ConfigError::InvalidProfileOverride {
            message: err.to_string(),
        })?;
    merge_values(&mut merged, overrides);
    serde_json::from_value(merged).map_err(|err| ConfigError::InvalidProfileOverride {
        message: err.to_string(),
    })
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn from_value_creates_config() {
        let value = json!({
            "build": {
                "base_path": "/Gaine_Africa_app/",
                "output_dir": "dist"
            }
        });

        let config = GaineConfig::from_value(value).unwrap();
        assert_eq!(config.build.base_path, "/Gaine_Africa_app/");
        assert_eq!(config.build.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn to_value_serializes_config() {
        let mut config = GaineConfig::default();
        config.build.minify = true;

        let value = config.to_value().unwrap();
        assert_eq!(value["build"]["minify"], json!(true));
    }

    #[test]
    fn profile_merging_works() {
        let value = json!({
            "build": {
                "base_path": "/",
                "minify": false
            },
            "profiles": {
                "production": {
                    "build": {
                        "base_path": "/Gaine_Africa_app/",
                        "minify": true
                    }
                }
            }
        });

        let config = GaineConfig::from_value(value)
            .unwrap()
            .materialize_profile(Some("production"))
            .unwrap();

        assert_eq!(config.build.base_path, "/Gaine_Africa_app/");
        assert!(config.build.minify);
    }

    #[test]
    fn unknown_profile_leaves_config_unchanged() {
        let value = json!({
            "build": { "minify": false }
        });

        let config = GaineConfig::from_value(value)
            .unwrap()
            .materialize_profile(Some("staging"))
            .unwrap();

        assert!(!config.build.minify);
        assert_eq!(config.build.base_path, "/");
    }

    #[test]
    fn top_level_plugins_are_promoted() {
        let value = json!({
            "build": {
                "plugins": [{ "name": "react" }]
            },
            "plugins": [{ "name": "tailwind" }]
        });

        let config = GaineConfig::from_value(value).unwrap();
        let names: Vec<_> = config.build.plugins.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["react", "tailwind"]);
    }

    #[test]
    fn invalid_profile_override_is_rejected() {
        let value = json!({
            "build": { "minify": false },
            "profiles": {
                "broken": {
                    "build": { "output_dir": 42 }
                }
            }
        });

        let result = GaineConfig::from_value(value)
            .unwrap()
            .materialize_profile(Some("broken"));

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidProfileOverride { .. }
        ));
    }
}
