//! Menu input layer - option cursors and yes/no toggles.
//!
//! The menu loop calls into this module once per tick. Everything here is
//! synchronous and allocation-free; state lives in caller-owned values.
//!
//! ## Components
//!
//! - **input_logic**: the per-tick routines and wrap arithmetic
//! - **OptionCursor**: checked wrapper around a cursor and its option count
//! - **Toggle** / **ConfirmCode**: the yes/no flag and the decision codes

pub mod input_logic;


use crate::audio::SoundPlayer;
use crate::error::{Error, Result};
use crate::input::InputSource;

/// Binary menu flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i32)]
pub enum Toggle {
    #[default]
    Off = 0,
    On = 1,
}

impl Toggle {
    pub const fn is_on(self) -> bool {
        matches!(self, Toggle::On)
    }
}

impl TryFrom<i32> for Toggle {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self> {
        match raw {
            0 => Ok(Toggle::Off),
            1 => Ok(Toggle::On),
            other => Err(Error::InvalidToggle(other)),
        }
    }
}

impl From<Toggle> for i32 {
    fn from(toggle: Toggle) -> Self {
        toggle as i32
    }
}

impl From<bool> for Toggle {
    fn from(on: bool) -> Self {
        if on {
            Toggle::On
        } else {
            Toggle::Off
        }
    }
}

/// Result of [`input_logic::toggle_and_confirm`].
///
/// The numeric codes are the contract with the calling menu; only the
/// sound differs between a confirm-while-on and a cancel, both are `On`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i32)]
pub enum ConfirmCode {
    /// Neither Confirm nor Cancel this tick.
    None = 0,
    /// Confirm while the toggle is off.
    Off = 1,
    /// Confirm while the toggle is on, or Cancel.
    On = 2,
}

impl ConfirmCode {
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Whether the menu should leave this screen.
    pub const fn is_decided(self) -> bool {
        !matches!(self, ConfirmCode::None)
    }
}

impl From<ConfirmCode> for i32 {
    fn from(code: ConfirmCode) -> Self {
        code.code()
    }
}

/// Cursor over a non-empty list of options.
///
/// Construction checks the invariants the raw routine assumes, so `cycle`
/// can never see an empty list or an out-of-range index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OptionCursor {
    index: usize,
    count: usize,
}

impl OptionCursor {
    /// Cursor on the first of `count` options.
    pub fn new(count: usize) -> Result<Self> {
        Self::with_index(0, count)
    }

    pub fn with_index(index: usize, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::EmptyOptionList);
        }
        if index >= count {
            return Err(Error::OptionOutOfRange { index, count });
        }
        Ok(Self { index, count })
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    /// Run one tick of [`input_logic::cycle_option`] on this cursor.
    pub fn cycle<I, S>(&mut self, input: &I, sounds: &mut S) -> bool
    where
        I: InputSource + ?Sized,
        S: SoundPlayer + ?Sized,
    {
        input_logic::cycle_option(input, sounds, &mut self.index, self.count)
    }
}
