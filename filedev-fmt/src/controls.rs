use std::io::{self, Write};

use crate::{FmtError, Layout, WriteRecord};

/// Number of control slots a record always carries.
pub const MAX_CONTROLS: usize = 64;

/// One control slot: hint and type are backend enum values, `state` the
/// current reading.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Control {
    pub hint: u32,
    pub control_type: u32,
    pub state: f32,
}

impl Layout for Control {
    const SIZE: u32 = 2 * u32::SIZE + f32::SIZE;
}

impl WriteRecord for Control {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.hint.write_to(out)?;
        self.control_type.write_to(out)?;
        self.state.write_to(out)
    }
}

/// A control count followed by [`MAX_CONTROLS`] slots, unused slots zeroed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Controls {
    count: u32,
    slots: [Control; MAX_CONTROLS],
}

impl Controls {
    pub fn empty() -> Self {
        Self {
            count: 0,
            slots: [Control::default(); MAX_CONTROLS],
        }
    }

    pub fn new(controls: &[Control]) -> Result<Self, FmtError> {
        if controls.len() > MAX_CONTROLS {
            return Err(FmtError::TooManyControls {
                count: controls.len(),
                max: MAX_CONTROLS,
            });
        }
        let mut result = Self::empty();
        result.slots[..controls.len()].copy_from_slice(controls);
        result.count = controls.len() as u32;
        Ok(result)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        self.slots[..self.count as usize].iter()
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::empty()
    }
}

impl Layout for Controls {
    const SIZE: u32 = u32::SIZE + <[Control; MAX_CONTROLS]>::SIZE;
}

impl WriteRecord for Controls {
    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.count.write_to(out)?;
        self.slots.write_to(out)
    }
}
