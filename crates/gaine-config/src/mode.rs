//! Execution-mode signal handling.
//!
//! The toolchain distinguishes production deployments from every other
//! context via the conventional `NODE_ENV` variable. The environment is
//! always injected as a plain map rather than read from ambient process
//! state, which keeps mode derivation pure and testable.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment variable carrying the execution-mode signal.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// Execution mode for a build invocation.
///
/// Only the literal signal `"production"` selects [`Mode::Production`];
/// any other value, or an absent signal, is treated as development. An
/// unexpected value such as `"staging"` therefore behaves exactly like
/// development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
}

impl Mode {
    /// Derive the mode from an optional execution-mode signal.
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    /// Derive the mode from an injected environment map.
    ///
    /// Reads the `NODE_ENV` key; absence is a valid input and maps to
    /// [`Mode::Development`].
    pub fn from_env(env: &HashMap<String, String>) -> Self {
        Self::from_signal(env.get(MODE_ENV_VAR).map(String::as_str))
    }

    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
