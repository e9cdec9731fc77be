//! Menu input handling for a controller-driven game menu.
//!
//! Two per-tick routines sit between the controller driver and the sound
//! driver:
//!
//! - [`ui::input_logic::cycle_option`] moves a wrapped option cursor with
//!   Left/Right and plays a cursor sound on every move.
//! - [`ui::input_logic::toggle_and_confirm`] flips a yes/no flag with
//!   Right/Left, then resolves Confirm (A) or Cancel (B) into a
//!   [`ui::ConfirmCode`], playing a distinct sound for each outcome.
//!
//! Both read buttons through an injected [`input::InputSource`] and emit
//! sounds through an injected [`audio::SoundPlayer`], so they run the same
//! on target and in host tests.
//!
//! Usage: `cargo test` runs everything on the host. Enable the `defmt`
//! feature on target for logging and `defmt::Format` derives.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod log;

pub mod audio;
pub mod config;
pub mod error;
pub mod input;
pub mod ui;

pub use audio::{SoundCue, SoundPlayer, SoundQueue, SoundSlot};
pub use error::{Error, Result};
pub use input::{Buttons, InputSource, Peripheral, PeripheralTable};
pub use ui::input_logic::{cycle_option, toggle_and_confirm};
pub use ui::{ConfirmCode, OptionCursor, Toggle};
