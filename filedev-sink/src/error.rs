use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("environment variable {var} is unset or empty")]
    MissingTarget { var: &'static str },

    #[error("unable to create or open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to write {len} bytes to {path:?}: {source}")]
    Write {
        path: PathBuf,
        len: usize,
        #[source]
        source: io::Error,
    },
}
