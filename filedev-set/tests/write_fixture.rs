use approx::assert_relative_eq;
use byteorder::{ReadBytesExt, LE};
use clap::Parser;
use filedev_fmt::{CompactRecord, FiledevRecord, Layout};
use filedev_set::{write_record, CompactArgs, SetArgs};
use filedev_sink::OpenPolicy;
use std::f32::consts::PI;
use std::fs;

fn set_args(values: &[&str]) -> SetArgs {
    SetArgs::try_parse_from(std::iter::once("filedev-set").chain(values.iter().copied())).unwrap()
}

fn compact_args(values: &[&str]) -> CompactArgs {
    CompactArgs::try_parse_from(
        std::iter::once("filedev-set-compact").chain(values.iter().copied()),
    )
    .unwrap()
}

#[test]
fn zero_pose_on_fresh_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hmd.bin");

    let policy = write_record(&set_args(&["0", "0", "0", "0", "0", "0"]).record(), &path).unwrap();
    assert_eq!(policy, OpenPolicy::Created);

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), FiledevRecord::SIZE as usize);

    let mut rotation = &bytes[FiledevRecord::ROTATION_OFFSET as usize..];
    assert_eq!(rotation.read_u32::<LE>().unwrap(), 0);
    for _ in 0..4 {
        assert_eq!(rotation.read_f32::<LE>().unwrap(), 0.0);
    }
    for _ in 0..3 {
        assert_eq!(rotation.read_f32::<LE>().unwrap(), 0.0);
    }
}

#[test]
fn zero_pose_on_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hmd.bin");
    fs::write(&path, b"").unwrap();

    let policy = write_record(&set_args(&["0", "0", "0", "0", "0", "0"]).record(), &path).unwrap();
    assert_eq!(policy, OpenPolicy::Reopened);

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), FiledevRecord::SIZE as usize);
    assert_eq!(bytes.len(), 1128);
    let rotation_at = FiledevRecord::ROTATION_OFFSET as usize;
    let position_end = (FiledevRecord::POSITION_OFFSET + 12) as usize;
    assert!(bytes[rotation_at..position_end].iter().all(|&b| b == 0));
}

#[test]
fn default_name_is_set_py() {
    let args = set_args(&["0", "0", "0", "0", "0", "0"]);
    let bytes = filedev_fmt::WriteRecord::to_bytes(&args.record());

    assert_eq!(&bytes[12..18], b"set.py");
    assert!(bytes[18..268].iter().all(|&b| b == 0));
}

#[test]
fn hyphen_prefixed_decimals() {
    let args = set_args(&["-.5", "0", "0", "-.5", "-inf", "-1e2"]);
    assert_eq!(args.pose.rot_x, -0.5);
    assert_eq!(args.pose.pos_x, -0.5);
    assert_eq!(args.pose.pos_y, f64::NEG_INFINITY);
    assert_eq!(args.pose.pos_z, -100.0);

    let compact = compact_args(&["0", "-.25", "0", "0", "0", "-.5"]);
    assert_eq!(compact.pose.rot_y, -0.25);
    assert_eq!(compact.pose.pos_z, -0.5);
}

#[test]
fn negative_and_fractional_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hmd.bin");

    write_record(
        &set_args(&["-180", "90.5", "0", "-1.25", "0", "2"]).record(),
        &path,
    )
    .unwrap();

    let bytes = fs::read(&path).unwrap();
    let mut data = &bytes[FiledevRecord::ROTATION_OFFSET as usize + 4..];
    assert_relative_eq!(data.read_f32::<LE>().unwrap(), -PI);
    assert_relative_eq!(data.read_f32::<LE>().unwrap(), 90.5f32.to_radians());
    assert_eq!(data.read_f32::<LE>().unwrap(), 0.0);
    assert_eq!(data.read_f32::<LE>().unwrap(), 0.0);
    assert_eq!(data.read_f32::<LE>().unwrap(), -1.25);
    assert_eq!(data.read_f32::<LE>().unwrap(), 0.0);
    assert_eq!(data.read_f32::<LE>().unwrap(), 2.0);
}

#[test]
fn same_arguments_same_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hmd.bin");
    let args = set_args(&["10", "20", "30", "1", "2", "3"]);

    write_record(&args.record(), &path).unwrap();
    let first = fs::read(&path).unwrap();
    assert_eq!(
        write_record(&args.record(), &path).unwrap(),
        OpenPolicy::Reopened
    );
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn same_arguments_same_bytes_compact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hmd.bin");
    let args = compact_args(&["10", "20", "30", "1", "2", "3"]);

    assert_eq!(
        write_record(&args.record(), &path).unwrap(),
        OpenPolicy::Created
    );
    let first = fs::read(&path).unwrap();
    assert_eq!(first.len(), CompactRecord::SIZE as usize);
    assert_eq!(
        write_record(&args.record(), &path).unwrap(),
        OpenPolicy::Reopened
    );
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn compact_over_full_keeps_tail() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hmd.bin");

    write_record(&set_args(&["1", "2", "3", "4", "5", "6"]).record(), &path).unwrap();
    let full = fs::read(&path).unwrap();

    write_record(
        &compact_args(&["7", "8", "9", "10", "11", "12"]).record(),
        &path,
    )
    .unwrap();
    let mixed = fs::read(&path).unwrap();

    let compact_len = CompactRecord::SIZE as usize;
    assert_eq!(mixed.len(), full.len());
    assert_eq!(&mixed[compact_len..], &full[compact_len..]);
    assert_ne!(&mixed[..compact_len], &full[..compact_len]);

    let mut position = &mixed[CompactRecord::POSITION_OFFSET as usize..];
    assert_eq!(position.read_f32::<LE>().unwrap(), 10.0);
    assert_eq!(position.read_f32::<LE>().unwrap(), 11.0);
    assert_eq!(position.read_f32::<LE>().unwrap(), 12.0);
}

#[test]
fn name_and_class_options() {
    let args = set_args(&[
        "0",
        "0",
        "0",
        "0",
        "0",
        "0",
        "--name",
        "rig",
        "--device-class",
        "controller",
    ]);
    let bytes = filedev_fmt::WriteRecord::to_bytes(&args.record());

    assert_eq!(&bytes[4..8], &[1, 0, 0, 0]);
    let name_at = FiledevRecord::NAME_OFFSET as usize;
    assert_eq!(&bytes[name_at..name_at + 4], b"rig\0");
}

#[test]
fn rejects_malformed_arguments() {
    let parse = |values: &[&str]| {
        SetArgs::try_parse_from(std::iter::once("filedev-set").chain(values.iter().copied()))
    };

    assert!(parse(&["0", "0", "0", "0", "0"]).is_err());
    assert!(parse(&["0", "0", "zero", "0", "0", "0"]).is_err());
    assert!(parse(&["0", "0", "0", "0", "0", "0", "0"]).is_err());
    assert!(parse(&["0", "0", "0", "0", "0", "0", "--device-class", "glove"]).is_err());
    assert!(CompactArgs::try_parse_from(&["filedev-set-compact", "1", "2"]).is_err());
}
