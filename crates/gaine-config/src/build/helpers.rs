use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_base_path() -> String {
    "/".to_string()
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}
