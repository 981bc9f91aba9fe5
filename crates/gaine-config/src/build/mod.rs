//! Core build configuration types.

mod helpers;
mod plugin;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

pub use plugin::{FRAMEWORK_PLUGIN, PluginHandle, PluginRegistry};

use helpers::{default_base_path, default_output_dir};

/// Build configuration handed to the external build runtime.
///
/// The same struct is the schema of the `[build]` table in `gaine.toml` and
/// the value produced by [`crate::resolver::resolve`]. Once resolved it is
/// immutable by convention: the crate exposes no mutating operations and the
/// runtime consumes it by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// URL path prefix under which built assets are served
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Output directory for the build
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Enable minification
    #[serde(default)]
    pub minify: bool,

    /// Configured plugin integrations
    #[serde(default)]
    pub plugins: Vec<PluginHandle>,
}

impl BuildOptions {
    /// Create from `serde_json::Value` (for programmatic config)
    pub fn from_value(value: Value) -> Result<Self, crate::error::ConfigError> {
        serde_json::from_value(value).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "build".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to `serde_json::Value`
    pub fn to_value(&self) -> Result<Value, crate::error::ConfigError> {
        serde_json::to_value(self).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "build".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            output_dir: default_output_dir(),
            minify: false,
            plugins: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_creates_options() {
        let value = json!({
            "base_path": "/app/",
            "minify": true
        });

        let options = BuildOptions::from_value(value).unwrap();
        assert_eq!(options.base_path, "/app/");
        assert!(options.minify);
        assert_eq!(options.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn to_value_serializes_options() {
        let mut options = BuildOptions::default();
        options.minify = true;

        let value = options.to_value().unwrap();
        assert_eq!(value["minify"], json!(true));
        assert_eq!(value["base_path"], json!("/"));
    }

    #[test]
    fn from_value_rejects_wrong_types() {
        let value = json!({ "output_dir": 42 });
        let result = BuildOptions::from_value(value);
        assert!(result.is_err());
    }
}
