//! Device-dependent effect selection.

use crate::core::constants::{DENSITY_POINTER, DENSITY_TOUCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Device {
    Touch,
    Pointer,
}

impl Device {
    pub fn from_touch_support(touch: bool) -> Self {
        if touch {
            Device::Touch
        } else {
            Device::Pointer
        }
    }

    pub fn is_touch(self) -> bool {
        matches!(self, Device::Touch)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectsConfig {
    pub device: Device,
    /// Probability that a background grid slot holds a cell.
    pub density: f64,
    pub pointer_trail: bool,
    pub touch_ripples: bool,
}

impl EffectsConfig {
    pub fn for_device(device: Device) -> Self {
        match device {
            Device::Touch => Self {
                device,
                density: DENSITY_TOUCH,
                pointer_trail: false,
                touch_ripples: true,
            },
            Device::Pointer => Self {
                device,
                density: DENSITY_POINTER,
                pointer_trail: true,
                touch_ripples: false,
            },
        }
    }
}
