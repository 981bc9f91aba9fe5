use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::build::helpers::default_true;
use crate::error::{ConfigError, Result};

/// Name of the framework integration every frontend build registers.
pub const FRAMEWORK_PLUGIN: &str = "react";

/// Handle to an externally-executed build-time integration.
///
/// The handle only identifies the integration and carries its forwarded
/// configuration; execution happens inside the build runtime and is outside
/// this crate's scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginHandle {
    /// Integration name, resolved by the build runtime
    pub name: String,

    /// Plugin-specific configuration forwarded at load time
    #[serde(default)]
    pub config: Value,

    /// Execution order (lower values run earlier)
    #[serde(default)]
    pub order: i32,

    /// Whether the plugin should be loaded
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl PluginHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: Value::Null,
            order: 0,
            enabled: true,
        }
    }
}

type PluginFactory = fn() -> Result<PluginHandle>;

/// Registry of known plugin integrations.
///
/// Registration order is preserved and becomes the relative execution order
/// when several integrations share the same `order` value.
#[derive(Debug, Clone)]
pub struct PluginRegistry {
    factories: IndexMap<String, PluginFactory>,
}

impl PluginRegistry {
    /// Create an empty registry with no built-in integrations.
    pub fn empty() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Register a named integration factory, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, factory: PluginFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Construct a handle for a named integration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PluginNotFound`] for unregistered names.
    /// Factory failures are surfaced unmodified.
    pub fn create(&self, name: &str) -> Result<PluginHandle> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| ConfigError::PluginNotFound {
                name: name.to_string(),
            })?;
        factory()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl Default for PluginRegistry {
    /// Registry with the built-in framework integration registered.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(FRAMEWORK_PLUGIN, react);
        registry
    }
}

/// Factory for the React framework integration handle.
fn react() -> Result<PluginHandle> {
    Ok(PluginHandle {
        name: FRAMEWORK_PLUGIN.to_string(),
        config: json!({ "jsx_runtime": "automatic" }),
        order: 0,
        enabled: true,
    })
}
