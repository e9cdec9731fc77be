//! Controller button bitmask.
//!
//! Layout (digital buttons, one bit each):
//! ```text
//! Bit 0 = C,      Bit 1 = B,      Bit 2 = A,      Bit 3 = Start,
//! Bit 4 = Up,     Bit 5 = Down,   Bit 6 = Left,   Bit 7 = Right,
//! Bit 8 = Z,      Bit 9 = Y,      Bit 10 = X,     Bit 11 = D,
//! Bit 16 = L trigger, Bit 17 = R trigger (analog threshold crossed)
//! ```

bitflags::bitflags! {
    /// Set of controller buttons, bit-compatible with the input driver.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u32 {
        const C = 1 << 0;
        const B = 1 << 1;
        const A = 1 << 2;
        const START = 1 << 3;
        const UP = 1 << 4;
        const DOWN = 1 << 5;
        const LEFT = 1 << 6;
        const RIGHT = 1 << 7;
        const Z = 1 << 8;
        const Y = 1 << 9;
        const X = 1 << 10;
        const D = 1 << 11;
        const L_TRIGGER = 1 << 16;
        const R_TRIGGER = 1 << 17;
    }
}

impl Buttons {
    /// Menu confirm button.
    pub const CONFIRM: Self = Self::A;

    /// Menu cancel button.
    pub const CANCEL: Self = Self::B;

    /// Wrap a raw driver mask, keeping bits this type has no name for.
    pub const fn from_raw(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }

    /// Raw mask as the driver reports it.
    pub const fn raw(self) -> u32 {
        self.bits()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Buttons {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Buttons({=u32:#x})", self.bits());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_positions_match_driver_layout() {
        assert_eq!(Buttons::C.raw(), 0x0001);
        assert_eq!(Buttons::B.raw(), 0x0002);
        assert_eq!(Buttons::A.raw(), 0x0004);
        assert_eq!(Buttons::START.raw(), 0x0008);
        assert_eq!(Buttons::UP.raw(), 0x0010);
        assert_eq!(Buttons::DOWN.raw(), 0x0020);
        assert_eq!(Buttons::LEFT.raw(), 0x0040);
        assert_eq!(Buttons::RIGHT.raw(), 0x0080);
        assert_eq!(Buttons::Z.raw(), 0x0100);
        assert_eq!(Buttons::Y.raw(), 0x0200);
        assert_eq!(Buttons::X.raw(), 0x0400);
        assert_eq!(Buttons::D.raw(), 0x0800);
        assert_eq!(Buttons::L_TRIGGER.raw(), 0x1_0000);
        assert_eq!(Buttons::R_TRIGGER.raw(), 0x2_0000);
    }

    #[test]
    fn menu_aliases() {
        assert_eq!(Buttons::CONFIRM, Buttons::A);
        assert_eq!(Buttons::CANCEL, Buttons::B);
    }

    #[test]
    fn raw_mask_keeps_unknown_bits() {
        let mask = Buttons::from_raw(0x8000_0040);
        assert!(mask.contains(Buttons::LEFT));
        assert_eq!(mask.raw(), 0x8000_0040);
    }

    #[test]
    fn default_is_empty() {
        assert!(Buttons::default().is_empty());
    }
}
