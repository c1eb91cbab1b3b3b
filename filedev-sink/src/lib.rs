//! Writes a record to the start of a file-device fixture.

mod error;
mod sink;
mod target;

pub use error::SinkError;
pub use sink::{write_at_start, FileSink, OpenPolicy};
pub use target::{target_path_from, target_path_from_env, TARGET_ENV_VAR};
