//! Pluggable config validation strategies.

use crate::build::BuildOptions;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate build options
    fn validate(&self, options: &BuildOptions) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use gaine_config::{BuildOptions, ConfigValidator, SchemaValidator};
///
/// let options = BuildOptions::default();
/// SchemaValidator.validate(&options).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, options: &BuildOptions) -> Result<()> {
        // Base path validation: served assets need a well-formed URL prefix
        if options.base_path.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "base_path cannot be empty".to_string(),
                hint: Some("Use \"/\" to serve from the site root".to_string()),
            });
        }

        if !options.base_path.starts_with('/') || !options.base_path.ends_with('/') {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "base_path {:?} must start and end with '/'",
                    options.base_path
                ),
                hint: Some("Example: \"/Gaine_Africa_app/\"".to_string()),
            });
        }

        // Output directory validation
        if options.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "output_dir cannot be empty".to_string(),
                hint: Some("The default output directory is \"dist\"".to_string()),
            });
        }

        if options.output_dir.is_absolute() {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "output_dir {:?} must be relative to the project root",
                    options.output_dir
                ),
                hint: Some("Use a relative path such as \"dist\"".to_string()),
            });
        }

        // Plugin handle validation
        for plugin in &options.plugins {
            if plugin.name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "plugin names cannot be empty".to_string(),
                    hint: Some("Give each plugin entry a name".to_string()),
                });
            }

            if plugin.order < -1000 || plugin.order > 1000 {
                return Err(ConfigError::SchemaValidation {
                    message: format!(
                        "plugin order {} is out of reasonable range (-1000 to 1000)",
                        plugin.order
                    ),
                    hint: Some("Use an order value between -1000 and 1000".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema validation
///
/// # Example
///
/// ```
/// use gaine_config::{BuildOptions, validate_schema};
///
/// let options = BuildOptions::default();
/// validate_schema(&options).unwrap();
/// ```
pub fn validate_schema(options: &BuildOptions) -> Result<()> {
    SchemaValidator.validate(options)
}
