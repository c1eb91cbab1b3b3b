//! Command-line front ends that pose a file-device fixture.
//!
//! `filedev-set` writes the full record and `filedev-set-compact` the compact
//! one. Both take the same six positional numbers and write to the file named
//! by [`TARGET_ENV_VAR`](filedev_sink::TARGET_ENV_VAR).

use clap::{Args, Parser};
use filedev_fmt::{CompactRecord, DeviceClass, DeviceName, FiledevRecord, Pose, WriteRecord};
use filedev_sink::{write_at_start, OpenPolicy, SinkError};
use log::info;
use std::path::Path;

/// Name embedded in full records when none is given.
pub const DEFAULT_NAME: &str = "set.py";

#[derive(Args, Clone, Debug)]
pub struct PoseArgs {
    /// Rotation about the x axis, in degrees
    #[arg(value_name = "ROT_X_DEG", allow_hyphen_values = true)]
    pub rot_x: f64,

    /// Rotation about the y axis, in degrees
    #[arg(value_name = "ROT_Y_DEG", allow_hyphen_values = true)]
    pub rot_y: f64,

    /// Rotation about the z axis, in degrees
    #[arg(value_name = "ROT_Z_DEG", allow_hyphen_values = true)]
    pub rot_z: f64,

    #[arg(value_name = "POS_X", allow_hyphen_values = true)]
    pub pos_x: f64,

    #[arg(value_name = "POS_Y", allow_hyphen_values = true)]
    pub pos_y: f64,

    #[arg(value_name = "POS_Z", allow_hyphen_values = true)]
    pub pos_z: f64,
}

impl PoseArgs {
    pub fn pose(&self) -> Pose {
        Pose {
            rotation_degrees: [self.rot_x, self.rot_y, self.rot_z],
            position: [self.pos_x, self.pos_y, self.pos_z],
        }
    }
}

#[derive(Parser, Clone, Debug)]
#[command(name = "filedev-set")]
#[command(about = "Write a full OpenHMD file-device record at the start of $OPENHMD_FILEDEV_HMD", long_about = None)]
pub struct SetArgs {
    #[command(flatten)]
    pub pose: PoseArgs,

    /// Device name advertised by the backend (at most 255 bytes)
    #[arg(long, default_value = DEFAULT_NAME)]
    pub name: DeviceName,

    /// Device class: hmd, controller or generic-tracker
    #[arg(long, default_value = "hmd")]
    pub device_class: DeviceClass,
}

impl SetArgs {
    pub fn record(&self) -> FiledevRecord {
        FiledevRecord::from_pose(self.name, &self.pose.pose()).with_device_class(self.device_class)
    }
}

#[derive(Parser, Clone, Debug)]
#[command(name = "filedev-set-compact")]
#[command(about = "Write a compact OpenHMD file-device record at the start of $OPENHMD_FILEDEV_HMD", long_about = None)]
pub struct CompactArgs {
    #[command(flatten)]
    pub pose: PoseArgs,
}

impl CompactArgs {
    pub fn record(&self) -> CompactRecord {
        CompactRecord::from_pose(&self.pose.pose())
    }
}

/// Encodes `record` and writes it over the start of `path`.
pub fn write_record<R: WriteRecord>(record: &R, path: &Path) -> Result<OpenPolicy, SinkError> {
    let data = record.to_bytes();
    let policy = write_at_start(path, &data)?;
    info!(
        "wrote {}-byte record to {} ({:?})",
        data.len(),
        path.display(),
        policy
    );
    Ok(policy)
}
