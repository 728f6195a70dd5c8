//! A single named color family.

use crate::ramp::ShadeRamp;

/// A named shade ramp. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteFamily {
    name: String,
    ramp: ShadeRamp,
}

impl PaletteFamily {
    pub(crate) fn new(name: String, ramp: ShadeRamp) -> Self {
        Self { name, ramp }
    }

    /// Family name, e.g. `teal`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The family's shades.
    pub fn ramp(&self) -> &ShadeRamp {
        &self.ramp
    }
}
