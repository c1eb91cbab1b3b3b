use std::ffi::OsString;
use std::path::PathBuf;

use crate::SinkError;

/// Names the fixture file the backend reads.
pub const TARGET_ENV_VAR: &str = "OPENHMD_FILEDEV_HMD";

pub fn target_path_from_env() -> Result<PathBuf, SinkError> {
    target_path_from(std::env::var_os(TARGET_ENV_VAR))
}

/// Resolves an already-read variable value. Unset and empty are both errors.
pub fn target_path_from(value: Option<OsString>) -> Result<PathBuf, SinkError> {
    match value {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(SinkError::MissingTarget {
            var: TARGET_ENV_VAR,
        }),
    }
}
