use thiserror::Error;

#[derive(Debug, Error)]
pub enum FmtError {
    #[error("device name is {len} bytes, at most {max} fit before the null terminator")]
    NameTooLong { len: usize, max: usize },

    #[error("device name contains a NUL byte at offset {offset}")]
    NameContainsNul { offset: usize },

    #[error("{count} controls given, a record holds at most {max}")]
    TooManyControls { count: usize, max: usize },

    #[error("unknown device class {0:?}, expected hmd, controller or generic-tracker")]
    UnknownDeviceClass(String),
}
