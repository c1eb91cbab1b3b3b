use std::io::{self, Write};

use crate::{
    Controls, DeviceClass, DeviceFlags, DeviceName, Distortion, EulerAngles, FileHeader, HmdInfo,
    Layout, Position, Rotation, WriteRecord,
};

/// A pose as given on the command line: rotation in degrees about x, y and z,
/// then a linear offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub rotation_degrees: [f64; 3],
    pub position: [f64; 3],
}

impl Pose {
    pub fn euler(&self) -> EulerAngles {
        let [x, y, z] = self.rotation_degrees;
        EulerAngles::from_degrees(x, y, z)
    }

    pub fn position(&self) -> Position {
        let [x, y, z] = self.position;
        Position([x as f32, y as f32, z as f32])
    }
}

/// Full file-device record, version 0.
///
/// | offset | size | field          |
/// |-------:|-----:|----------------|
/// |      0 |    4 | header         |
/// |      4 |    4 | device class   |
/// |      8 |    4 | device flags   |
/// |     12 |  256 | name           |
/// |    268 |   20 | rotation       |
/// |    288 |   12 | position       |
/// |    300 |   32 | HMD info       |
/// |    332 |   24 | distortion     |
/// |    356 |  772 | controls       |
/// |   1128 |      | end            |
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FiledevRecord {
    pub header: FileHeader,
    pub device_class: DeviceClass,
    pub device_flags: DeviceFlags,
    pub name: DeviceName,
    pub rotation: Rotation,
    pub position: Position,
    pub hmd_info: HmdInfo,
    pub distortion: Distortion,
    pub controls: Controls,
}

impl FiledevRecord {
    pub const HEADER_OFFSET: u32 = 0;
    pub const DEVICE_CLASS_OFFSET: u32 = Self::HEADER_OFFSET + FileHeader::SIZE;
    pub const DEVICE_FLAGS_OFFSET: u32 = Self::DEVICE_CLASS_OFFSET + DeviceClass::SIZE;
    pub const NAME_OFFSET: u32 = Self::DEVICE_FLAGS_OFFSET + DeviceFlags::SIZE;
    pub const ROTATION_OFFSET: u32 = Self::NAME_OFFSET + DeviceName::SIZE;
    pub const POSITION_OFFSET: u32 = Self::ROTATION_OFFSET + Rotation::SIZE;
    pub const HMD_INFO_OFFSET: u32 = Self::POSITION_OFFSET + Position::SIZE;
    pub const DISTORTION_OFFSET: u32 = Self::HMD_INFO_OFFSET + HmdInfo::SIZE;
    pub const CONTROLS_OFFSET: u32 = Self::DISTORTION_OFFSET + Distortion::SIZE;

    /// An HMD with positional and rotational tracking, posed at `pose`, with
    /// default optics and no controls.
    pub fn from_pose(name: DeviceName, pose: &Pose) -> Self {
        Self {
            header: FileHeader::LATEST,
            device_class: DeviceClass::Hmd,
            device_flags: DeviceFlags::POSITIONAL_TRACKING | DeviceFlags::ROTATIONAL_TRACKING,
            name,
            rotation: Rotation::Euler(pose.euler()),
            position: pose.position(),
            hmd_info: HmdInfo::default(),
            distortion: Distortion::default(),
            controls: Controls::empty(),
        }
    }

    pub fn with_device_class(mut self, device_class: DeviceClass) -> Self {
        self.device_class = device_class;
        self
    }
}

impl Layout for FiledevRecord {
    const SIZE: u32 = Self::CONTROLS_OFFSET + Controls::SIZE;
}

impl WriteRecord for FiledevRecord {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.header.write_to(out)?;
        self.device_class.write_to(out)?;
        self.device_flags.write_to(out)?;
        self.name.write_to(out)?;
        self.rotation.write_to(out)?;
        self.position.write_to(out)?;
        self.hmd_info.write_to(out)?;
        self.distortion.write_to(out)?;
        self.controls.write_to(out)
    }
}

/// Newer compact record: HMD info followed by the pose.
///
/// | offset | size | field          |
/// |-------:|-----:|----------------|
/// |      0 |   32 | HMD info       |
/// |     32 |   12 | rotation (rad) |
/// |     44 |   12 | position       |
/// |     56 |      | end            |
///
/// Carries no version marker, so a reader cannot tell it apart from the
/// leading bytes of a [`FiledevRecord`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompactRecord {
    pub hmd_info: HmdInfo,
    pub rotation: EulerAngles,
    pub position: Position,
}

impl CompactRecord {
    pub const HMD_INFO_OFFSET: u32 = 0;
    pub const ROTATION_OFFSET: u32 = Self::HMD_INFO_OFFSET + HmdInfo::SIZE;
    pub const POSITION_OFFSET: u32 = Self::ROTATION_OFFSET + EulerAngles::SIZE;

    pub fn from_pose(pose: &Pose) -> Self {
        Self {
            hmd_info: HmdInfo::default(),
            rotation: pose.euler(),
            position: pose.position(),
        }
    }
}

impl Layout for CompactRecord {
    const SIZE: u32 = Self::POSITION_OFFSET + Position::SIZE;
}

impl WriteRecord for CompactRecord {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.hmd_info.write_to(out)?;
        self.rotation.write_to(out)?;
        self.position.write_to(out)
    }
}
