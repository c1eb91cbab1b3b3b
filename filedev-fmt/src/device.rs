use std::fmt::{self, Debug, Formatter};
use std::io::{self, Write};
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use crate::{FmtError, Layout, WriteRecord};

/// Size of the null-padded device name field.
pub const NAME_SIZE: usize = 256;

/// What kind of device the backend should advertise.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DeviceClass {
    Hmd = 0,
    Controller = 1,
    GenericTracker = 2,
}

impl Default for DeviceClass {
    fn default() -> Self {
        DeviceClass::Hmd
    }
}

impl FromStr for DeviceClass {
    type Err = FmtError;

    fn from_str(s: &str) -> Result<Self, FmtError> {
        match s {
            "hmd" => Ok(DeviceClass::Hmd),
            "controller" => Ok(DeviceClass::Controller),
            "generic-tracker" => Ok(DeviceClass::GenericTracker),
            _ => Err(FmtError::UnknownDeviceClass(s.to_string())),
        }
    }
}

impl Layout for DeviceClass {
    const SIZE: u32 = u32::SIZE;
}

impl WriteRecord for DeviceClass {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        (*self as u32).write_to(out)
    }
}

/// Capability bits advertised alongside the [`DeviceClass`].
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct DeviceFlags(pub u32);

impl DeviceFlags {
    pub const NULL_DEVICE: DeviceFlags = DeviceFlags(1);
    pub const POSITIONAL_TRACKING: DeviceFlags = DeviceFlags(2);
    pub const ROTATIONAL_TRACKING: DeviceFlags = DeviceFlags(4);
    pub const LEFT_CONTROLLER: DeviceFlags = DeviceFlags(8);
    pub const RIGHT_CONTROLLER: DeviceFlags = DeviceFlags(16);

    pub fn contains(self, other: DeviceFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Debug for DeviceFlags {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "DeviceFlags(0x{:02x})", self.0)
    }
}

impl BitOr for DeviceFlags {
    type Output = DeviceFlags;

    fn bitor(self, rhs: DeviceFlags) -> DeviceFlags {
        DeviceFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for DeviceFlags {
    fn bitor_assign(&mut self, rhs: DeviceFlags) {
        self.0 |= rhs.0;
    }
}

impl Layout for DeviceFlags {
    const SIZE: u32 = u32::SIZE;
}

impl WriteRecord for DeviceFlags {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.0.write_to(out)
    }
}

/// An ASCII device name, null-padded to [`NAME_SIZE`] bytes.
///
/// The final byte is always a terminator, so at most `NAME_SIZE - 1` bytes of
/// name fit.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct DeviceName([u8; NAME_SIZE]);

impl DeviceName {
    pub fn new(name: &str) -> Result<Self, FmtError> {
        let bytes = name.as_bytes();
        if bytes.len() >= NAME_SIZE {
            return Err(FmtError::NameTooLong {
                len: bytes.len(),
                max: NAME_SIZE - 1,
            });
        }
        if let Some(offset) = bytes.iter().position(|&b| b == 0) {
            return Err(FmtError::NameContainsNul { offset });
        }

        let mut data = [0u8; NAME_SIZE];
        data[..bytes.len()].copy_from_slice(bytes);
        Ok(Self(data))
    }

    /// The name without its null padding.
    pub fn as_bytes(&self) -> &[u8] {
        let len = self.0.iter().position(|&b| b == 0).unwrap_or(NAME_SIZE);
        &self.0[..len]
    }
}

impl Debug for DeviceName {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "DeviceName({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl FromStr for DeviceName {
    type Err = FmtError;

    fn from_str(s: &str) -> Result<Self, FmtError> {
        DeviceName::new(s)
    }
}

impl Layout for DeviceName {
    const SIZE: u32 = <[u8; NAME_SIZE]>::SIZE;
}

impl WriteRecord for DeviceName {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.0)
    }
}
