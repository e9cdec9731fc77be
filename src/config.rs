//! Platform constants and compile-time configuration.
//!
//! Port numbers, sound-table layout and cue identifiers live here so they
//! can be tuned in one place.

// Peripherals

/// Number of controller ports the input driver refreshes each tick.
pub const PERIPHERAL_PORTS: usize = 2;

/// Port whose press mask drives every menu routine.
pub const MENU_PORT: usize = 0;

// Sound

/// Number of preloaded sound-bank handles in the handle table.
pub const SOUND_HANDLE_COUNT: usize = 7;

/// Handle-table slot used for all menu feedback sounds.
pub const MENU_SOUND_SLOT: usize = 0;

/// Bank holding the system (menu) sounds.
pub const SYSTEM_SOUND_BANK: i32 = 1;

/// Cursor moved / toggle flipped.
pub const CUE_CURSOR: i32 = 3;

/// Confirm pressed while the toggle is off.
pub const CUE_CONFIRM_OFF: i32 = 0;

/// Confirm pressed while the toggle is on, and cancel.
pub const CUE_CONFIRM_ON: i32 = 1;

/// Playback flags passed with every menu cue.
pub const CUE_FLAGS: i32 = 0;

/// Cues buffered between two audio drains.
///
/// One tick of both menu routines emits at most two cues, so this holds
/// several ticks worth.
pub const SOUND_QUEUE_DEPTH: usize = 8;
