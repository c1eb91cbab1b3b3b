//! Binary layout of an OpenHMD file-device fixture.
//!
//! A file device is an ordinary file that a backend polls in place of real
//! hardware. This crate builds the bytes of that file from a [`Pose`] in one of
//! two fixed layouts: the full [`FiledevRecord`] and the older [`CompactRecord`].

mod controls;
mod device;
mod error;
mod header;
mod hmd_info;
mod layout;
mod record;
mod rotation;

pub use controls::{Control, Controls, MAX_CONTROLS};
pub use device::{DeviceClass, DeviceFlags, DeviceName, NAME_SIZE};
pub use error::FmtError;
pub use header::FileHeader;
pub use hmd_info::{Distortion, HmdInfo};
pub use layout::{FileEndian, Layout, WriteRecord};
pub use record::{CompactRecord, FiledevRecord, Pose};
pub use rotation::{EulerAngles, Position, Rotation};
