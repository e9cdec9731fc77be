//! Per-port controller snapshots.
//!
//! The input driver refreshes one [`Peripheral`] per port every tick. Menu
//! code only reads the `press` edges of [`MENU_PORT`].

use super::{Buttons, InputSource};
use crate::config::{MENU_PORT, PERIPHERAL_PORTS};
use crate::error::{Error, Result};

/// One controller's state for the current tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Peripheral {
    /// Buttons currently held.
    pub on: Buttons,
    /// Buttons that went down this tick.
    pub press: Buttons,
    /// Buttons that went up this tick.
    pub release: Buttons,
    /// Left analog trigger.
    pub l: i16,
    /// Right analog trigger.
    pub r: i16,
    /// Analog stick X, centred on 0.
    pub x1: i16,
    /// Analog stick Y, centred on 0.
    pub y1: i16,
}

impl Peripheral {
    /// Snapshot with only press edges set.
    pub fn with_press(press: Buttons) -> Self {
        Self {
            on: press,
            press,
            ..Self::default()
        }
    }

    /// Derive press/release edges from last tick's held mask and this tick's.
    pub fn from_levels(previous_on: Buttons, current_on: Buttons) -> Self {
        Self {
            on: current_on,
            press: current_on.difference(previous_on),
            release: previous_on.difference(current_on),
            ..Self::default()
        }
    }
}

impl InputSource for Peripheral {
    fn pressed(&self) -> Buttons {
        self.press
    }
}

/// Fixed table of controller ports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeripheralTable<const N: usize = PERIPHERAL_PORTS> {
    ports: [Peripheral; N],
}

impl<const N: usize> PeripheralTable<N> {
    /// All ports idle.
    pub fn new() -> Self {
        Self {
            ports: [Peripheral::default(); N],
        }
    }

    /// Number of ports.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Snapshot of one port.
    pub fn port(&self, port: usize) -> Result<&Peripheral> {
        self.ports.get(port).ok_or(Error::NoSuchPort(port))
    }

    /// Replace one port's snapshot.
    pub fn set_port(&mut self, port: usize, snapshot: Peripheral) -> Result<()> {
        let slot = self.ports.get_mut(port).ok_or(Error::NoSuchPort(port))?;
        *slot = snapshot;
        Ok(())
    }

    /// Advance one port to a new held mask, deriving this tick's edges
    /// from the mask it held last tick.
    pub fn update_levels(&mut self, port: usize, current_on: Buttons) -> Result<()> {
        let slot = self.ports.get_mut(port).ok_or(Error::NoSuchPort(port))?;
        let analog = *slot;
        *slot = Peripheral {
            l: analog.l,
            r: analog.r,
            x1: analog.x1,
            y1: analog.y1,
            ..Peripheral::from_levels(analog.on, current_on)
        };
        Ok(())
    }
}

impl<const N: usize> Default for PeripheralTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> InputSource for PeripheralTable<N> {
    fn pressed(&self) -> Buttons {
        self.ports
            .get(MENU_PORT)
            .map_or(Buttons::empty(), |p| p.press)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_from_levels() {
        let p = Peripheral::from_levels(Buttons::LEFT | Buttons::A, Buttons::A | Buttons::RIGHT);
        assert_eq!(p.on, Buttons::A | Buttons::RIGHT);
        assert_eq!(p.press, Buttons::RIGHT);
        assert_eq!(p.release, Buttons::LEFT);
    }

    #[test]
    fn held_button_is_not_pressed_again() {
        let p = Peripheral::from_levels(Buttons::RIGHT, Buttons::RIGHT);
        assert!(p.press.is_empty());
        assert!(p.release.is_empty());
        assert_eq!(p.on, Buttons::RIGHT);
    }

    #[test]
    fn table_reads_menu_port_only() {
        let mut table: PeripheralTable = PeripheralTable::new();
        table
            .set_port(1, Peripheral::with_press(Buttons::RIGHT))
            .unwrap();
        assert!(table.pressed().is_empty());

        table.set_port(0, Peripheral::with_press(Buttons::LEFT)).unwrap();
        assert_eq!(table.pressed(), Buttons::LEFT);
    }

    #[test]
    fn table_rejects_unknown_port() {
        let mut table: PeripheralTable = PeripheralTable::new();
        assert_eq!(table.len(), 2);
        assert_eq!(table.port(2), Err(Error::NoSuchPort(2)));
        assert_eq!(
            table.set_port(5, Peripheral::default()),
            Err(Error::NoSuchPort(5))
        );
        assert_eq!(table.update_levels(3, Buttons::A), Err(Error::NoSuchPort(3)));
    }

    #[test]
    fn update_levels_tracks_edges_across_ticks() {
        let mut table: PeripheralTable = PeripheralTable::new();
        table.update_levels(0, Buttons::RIGHT).unwrap();
        assert_eq!(table.pressed(), Buttons::RIGHT);

        table.update_levels(0, Buttons::RIGHT).unwrap();
        assert!(table.pressed().is_empty());

        table.update_levels(0, Buttons::empty()).unwrap();
        assert_eq!(table.port(0).unwrap().release, Buttons::RIGHT);
    }

    #[test]
    fn update_levels_keeps_analog_values() {
        let mut table: PeripheralTable = PeripheralTable::new();
        let snapshot = Peripheral {
            l: 200,
            x1: -64,
            ..Peripheral::default()
        };
        table.set_port(0, snapshot).unwrap();
        table.update_levels(0, Buttons::A).unwrap();

        let port = table.port(0).unwrap();
        assert_eq!(port.l, 200);
        assert_eq!(port.x1, -64);
        assert_eq!(port.press, Buttons::A);
    }

    #[test]
    fn empty_table_reads_no_presses() {
        let table: PeripheralTable<0> = PeripheralTable::new();
        assert!(table.is_empty());
        assert!(table.pressed().is_empty());
    }
}
