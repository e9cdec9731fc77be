//! Unified error type for menu-input.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.
//!
//! The per-tick routines in [`crate::ui::input_logic`] never fail; these
//! errors come from the checked constructors and table lookups around them.

use core::fmt;

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Menu state
    /// An option list must contain at least one entry.
    EmptyOptionList,

    /// A cursor index does not fall inside its option list.
    OptionOutOfRange { index: usize, count: usize },

    /// A raw toggle value other than 0 or 1.
    InvalidToggle(i32),

    // Peripherals
    /// No controller port with this number.
    NoSuchPort(usize),

    // Sound
    /// No sound handle in this table slot.
    NoSuchSoundSlot(usize),

    /// The sound queue is full until the next drain.
    SoundQueueFull,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyOptionList => f.write_str("option list is empty"),
            Error::OptionOutOfRange { index, count } => {
                write!(f, "option {} out of range for {} options", index, count)
            }
            Error::InvalidToggle(raw) => write!(f, "invalid toggle value {}", raw),
            Error::NoSuchPort(port) => write!(f, "no peripheral on port {}", port),
            Error::NoSuchSoundSlot(slot) => write!(f, "no sound handle in slot {}", slot),
            Error::SoundQueueFull => f.write_str("sound queue is full"),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        assert_eq!(
            Error::OptionOutOfRange { index: 4, count: 3 }.to_string(),
            "option 4 out of range for 3 options"
        );
        assert_eq!(Error::InvalidToggle(7).to_string(), "invalid toggle value 7");
        assert_eq!(Error::NoSuchPort(2).to_string(), "no peripheral on port 2");
        assert_eq!(Error::NoSuchSoundSlot(9).to_string(), "no sound handle in slot 9");
    }

    #[test]
    fn unit_variants_have_fixed_messages() {
        assert_eq!(Error::EmptyOptionList.to_string(), "option list is empty");
        assert_eq!(Error::SoundQueueFull.to_string(), "sound queue is full");
    }
}
