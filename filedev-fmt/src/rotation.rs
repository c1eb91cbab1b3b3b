use std::io::{self, Write};

use crate::{Layout, WriteRecord};

/// Euler angles in radians about the x, y and z axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerAngles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl EulerAngles {
    /// Converts in double precision and narrows once, so the stored value is
    /// the nearest `f32` to the exact radian value.
    pub fn from_degrees(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: x.to_radians() as f32,
            y: y.to_radians() as f32,
            z: z.to_radians() as f32,
        }
    }
}

impl Layout for EulerAngles {
    const SIZE: u32 = <[f32; 3]>::SIZE;
}

impl WriteRecord for EulerAngles {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        [self.x, self.y, self.z].write_to(out)
    }
}

/// Rotation block of a [`FiledevRecord`](crate::FiledevRecord).
///
/// Encoded as an `is_quaternion` word followed by four floats. Euler angles
/// leave the fourth float at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rotation {
    Euler(EulerAngles),
    /// Components in x, y, z, w order.
    Quaternion([f32; 4]),
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::Euler(EulerAngles::default())
    }
}

impl Layout for Rotation {
    const SIZE: u32 = u32::SIZE + <[f32; 4]>::SIZE;
}

impl WriteRecord for Rotation {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let (is_quaternion, data) = match *self {
            Rotation::Euler(EulerAngles { x, y, z }) => (0u32, [x, y, z, 0.0]),
            Rotation::Quaternion(q) => (1u32, q),
        };
        is_quaternion.write_to(out)?;
        data.write_to(out)
    }
}

/// Linear offset, passed through unconverted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position(pub [f32; 3]);

impl Layout for Position {
    const SIZE: u32 = <[f32; 3]>::SIZE;
}

impl WriteRecord for Position {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.0.write_to(out)
    }
}
