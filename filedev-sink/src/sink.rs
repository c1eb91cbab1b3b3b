use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::SinkError;

/// Which step of the open sequence produced the handle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpenPolicy {
    /// The file did not exist and was created.
    Created,
    /// Creation failed and an existing file was opened for update.
    Reopened,
}

/// An open handle on a fixture file. Dropping it closes the file.
pub struct FileSink {
    file: File,
    path: PathBuf,
    policy: OpenPolicy,
}

impl FileSink {
    /// Tries an exclusive create first, then falls back to opening the file
    /// for update. The file is never truncated.
    pub fn open(path: &Path) -> Result<Self, SinkError> {
        let (file, policy) = match OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(path)
        {
            Ok(file) => (file, OpenPolicy::Created),
            Err(create_err) => {
                debug!("exclusive create of {:?} failed: {}", path, create_err);
                let file = OpenOptions::new()
                    .read(true)
                    .write(true)
                    .open(path)
                    .map_err(|source| SinkError::Open {
                        path: path.to_path_buf(),
                        source,
                    })?;
                (file, OpenPolicy::Reopened)
            }
        };
        debug!("opened {:?} ({:?})", path, policy);

        Ok(Self {
            file,
            path: path.to_path_buf(),
            policy,
        })
    }

    pub fn policy(&self) -> OpenPolicy {
        self.policy
    }

    /// Writes `data` at offset 0 in one call. Bytes past `data.len()` keep
    /// their previous contents.
    pub fn write_record(&mut self, data: &[u8]) -> Result<(), SinkError> {
        let path = &self.path;
        let map_err = |source: io::Error| SinkError::Write {
            path: path.clone(),
            len: data.len(),
            source,
        };

        self.file.seek(SeekFrom::Start(0)).map_err(map_err)?;
        self.file.write_all(data).map_err(map_err)?;
        self.file.flush().map_err(map_err)?;
        debug!("wrote {} bytes to {:?}", data.len(), path);
        Ok(())
    }
}

/// Opens `path`, writes `data` at its start and closes it again.
pub fn write_at_start(path: &Path, data: &[u8]) -> Result<OpenPolicy, SinkError> {
    let mut sink = FileSink::open(path)?;
    sink.write_record(data)?;
    Ok(sink.policy())
}
