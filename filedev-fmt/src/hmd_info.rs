use std::io::{self, Write};

use crate::{Layout, WriteRecord};

/// Screen and optics description the backend derives projections from.
///
/// The backend ignores this block when `hres` is zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HmdInfo {
    pub hres: u32,
    pub vres: u32,
    /// Physical screen width in meters.
    pub hsize: f32,
    /// Physical screen height in meters.
    pub vsize: f32,
    pub lens_sep: f32,
    pub lens_vpos: f32,
    /// Field of view in radians.
    pub fov: f32,
    pub ratio: f32,
}

impl Default for HmdInfo {
    /// A 1280x800 panel with a 125.5144 degree field of view.
    fn default() -> Self {
        Self {
            hres: 1280,
            vres: 800,
            hsize: 0.149760f64 as f32,
            vsize: 0.093600f64 as f32,
            lens_sep: 0.063500f64 as f32,
            lens_vpos: 0.046800f64 as f32,
            fov: 125.5144f64.to_radians() as f32,
            ratio: ((1280.0f64 / 800.0) / 2.0) as f32,
        }
    }
}

impl Layout for HmdInfo {
    const SIZE: u32 = 2 * u32::SIZE + 6 * f32::SIZE;
}

impl WriteRecord for HmdInfo {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        [self.hres, self.vres].write_to(out)?;
        [
            self.hsize,
            self.vsize,
            self.lens_sep,
            self.lens_vpos,
            self.fov,
            self.ratio,
        ]
        .write_to(out)
    }
}

/// Lens distortion coefficients. Zero means no correction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Distortion(pub [f32; 6]);

impl Layout for Distortion {
    const SIZE: u32 = <[f32; 6]>::SIZE;
}

impl WriteRecord for Distortion {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.0.write_to(out)
    }
}
