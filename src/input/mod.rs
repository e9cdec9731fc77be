//! Controller input, as seen by menu code.
//!
//! Debouncing and edge detection belong to the input driver; menu routines
//! only ask an [`InputSource`] which buttons went down this tick.

pub mod buttons;
pub mod peripheral;

pub use buttons::Buttons;
pub use peripheral::{Peripheral, PeripheralTable};

/// Read-only view of the buttons pressed this tick.
pub trait InputSource {
    /// Buttons that went down this tick.
    fn pressed(&self) -> Buttons;
}

impl InputSource for Buttons {
    fn pressed(&self) -> Buttons {
        *self
    }
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn pressed(&self) -> Buttons {
        (**self).pressed()
    }
}
