use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

/// Byte order of every multi-byte field in a record.
pub type FileEndian = LittleEndian;

/// Types that encode to a value of statically known size.
pub trait Layout {
    const SIZE: u32;
}

/// Types that can be written into a file-device record.
///
/// Implementations must write exactly [`Layout::SIZE`] bytes.
pub trait WriteRecord: Layout {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()>;

    /// Encodes into a freshly allocated buffer of exactly `SIZE` bytes.
    fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(Self::SIZE as usize);
        self.write_to(&mut data).expect("Vec writes are infallible");
        debug_assert_eq!(data.len(), Self::SIZE as usize);
        data
    }
}

impl Layout for u8 {
    const SIZE: u32 = 1;
}

impl Layout for u32 {
    const SIZE: u32 = 4;
}

impl Layout for f32 {
    const SIZE: u32 = 4;
}

impl<T: Layout, const N: usize> Layout for [T; N] {
    const SIZE: u32 = T::SIZE * N as u32;
}

impl WriteRecord for u8 {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_u8(*self)
    }
}

impl WriteRecord for u32 {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_u32::<FileEndian>(*self)
    }
}

impl WriteRecord for f32 {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_f32::<FileEndian>(*self)
    }
}

impl<T: WriteRecord, const N: usize> WriteRecord for [T; N] {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for item in self {
            item.write_to(out)?;
        }
        Ok(())
    }
}
