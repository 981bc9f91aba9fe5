pub mod build;
pub mod config;
pub mod discovery;
pub mod error;
pub mod mode;
pub mod resolver;
pub mod settings;
pub mod validation;

// Re-export main types
pub use build::*;
pub use config::*;
pub use error::*;
pub use mode::{MODE_ENV_VAR, Mode};
pub use resolver::{OUTPUT_DIR, PRODUCTION_BASE_PATH, ROOT_BASE_PATH, resolve, resolve_with_registry};
pub use settings::*;

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, discover, discover_with_profile};
pub use validation::{ConfigValidator, SchemaValidator, validate_schema};
