//! Build configuration resolution.
//!
//! Derives the final [`BuildOptions`] from the execution environment: the
//! deployment base path follows the execution mode, the framework plugin is
//! registered, and the output directory is fixed. This runs exactly once per
//! build invocation, before any build work begins.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use crate::build::{BuildOptions, FRAMEWORK_PLUGIN, PluginRegistry};
use crate::error::Result;
use crate::mode::Mode;

/// Base path used when deploying to production.
pub const PRODUCTION_BASE_PATH: &str = "/Gaine_Africa_app/";

/// Base path for every non-production build.
pub const ROOT_BASE_PATH: &str = "/";

/// Output directory for generated assets.
pub const OUTPUT_DIR: &str = "dist";

/// Resolve the build configuration from an injected environment map.
///
/// The environment is the only input: `NODE_ENV == "production"` selects the
/// production base path, anything else (including absence) selects the root
/// path. The result always has the `dist` output directory and exactly one
/// plugin handle, the framework integration.
///
/// # Errors
///
/// Fails only if constructing the framework plugin handle fails; that error
/// is surfaced unmodified.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use gaine_config::resolve;
///
/// let env = HashMap::new();
/// let options = resolve(&env).unwrap();
/// assert_eq!(options.base_path, "/");
/// ```
pub fn resolve(env: &HashMap<String, String>) -> Result<BuildOptions> {
    resolve_with_registry(env, &PluginRegistry::default())
}

/// Resolve with a caller-supplied plugin registry.
pub fn resolve_with_registry(
    env: &HashMap<String, String>,
    registry: &PluginRegistry,
) -> Result<BuildOptions> {
    let mode = Mode::from_env(env);

    let base_path = if mode.is_production() {
        PRODUCTION_BASE_PATH
    } else {
        ROOT_BASE_PATH
    };

    let plugins = vec![registry.create(FRAMEWORK_PLUGIN)?];

    let options = BuildOptions {
        base_path: base_path.to_string(),
        output_dir: PathBuf::from(OUTPUT_DIR),
        minify: mode.is_production(),
        plugins,
    };

    debug!(
        mode = %mode,
        base_path = %options.base_path,
        output_dir = %options.output_dir.display(),
        "resolved build configuration"
    );

    Ok(options)
}
