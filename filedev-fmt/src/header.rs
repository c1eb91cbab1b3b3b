use std::io::{self, Write};

use crate::{Layout, WriteRecord};

/// Leading word of a [`FiledevRecord`](crate::FiledevRecord).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FileHeader {
    pub version: u32,
}

impl FileHeader {
    /// The only structure version the backend reads.
    pub const LATEST: FileHeader = FileHeader { version: 0 };
}

impl Default for FileHeader {
    fn default() -> Self {
        Self::LATEST
    }
}

impl Layout for FileHeader {
    const SIZE: u32 = u32::SIZE;
}

impl WriteRecord for FileHeader {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.version.write_to(out)
    }
}
