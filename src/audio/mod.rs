//! Menu sound feedback.
//!
//! Menu routines never own audio. They hand a [`SoundCue`] and the
//! handle-table [`SoundSlot`] to whatever [`SoundPlayer`] the caller
//! injects: a [`SoundQueue`] drained by the audio task, or a [`Midi`]
//! adapter that calls straight into the sound driver.

pub mod midi;
pub mod queue;

pub use midi::{HandleTable, Midi, MidiDriver};
pub use queue::SoundQueue;

use crate::config::{
    CUE_CONFIRM_OFF, CUE_CONFIRM_ON, CUE_CURSOR, CUE_FLAGS, MENU_SOUND_SLOT, SYSTEM_SOUND_BANK,
};

/// Parameters of one fire-and-forget sound trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SoundCue {
    /// Bank inside the sound handle.
    pub bank: i32,
    /// Sound id within the bank.
    pub id: i32,
    /// Playback flags.
    pub flags: i32,
}

impl SoundCue {
    /// Cursor moved or toggle flipped.
    pub const CURSOR: Self = Self::new(SYSTEM_SOUND_BANK, CUE_CURSOR, CUE_FLAGS);

    /// Confirm while the toggle is off.
    pub const CONFIRM_OFF: Self = Self::new(SYSTEM_SOUND_BANK, CUE_CONFIRM_OFF, CUE_FLAGS);

    /// Confirm while the toggle is on.
    pub const CONFIRM_ON: Self = Self::new(SYSTEM_SOUND_BANK, CUE_CONFIRM_ON, CUE_FLAGS);

    /// Cancel. Shares its sound with [`SoundCue::CONFIRM_ON`].
    pub const CANCEL: Self = Self::CONFIRM_ON;

    pub const fn new(bank: i32, id: i32, flags: i32) -> Self {
        Self { bank, id, flags }
    }
}

/// Index into the sound-handle table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SoundSlot(pub usize);

impl SoundSlot {
    /// Slot holding the menu sound bank.
    pub const MENU: Self = Self(MENU_SOUND_SLOT);
}

/// Invoke-only access to sound playback.
///
/// `play` must not block: menu routines call it from the tick loop.
pub trait SoundPlayer {
    fn play(&mut self, slot: SoundSlot, cue: SoundCue);
}

impl<P: SoundPlayer + ?Sized> SoundPlayer for &mut P {
    fn play(&mut self, slot: SoundSlot, cue: SoundCue) {
        (**self).play(slot, cue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_cues_use_system_bank() {
        assert_eq!(SoundCue::CURSOR, SoundCue::new(1, 3, 0));
        assert_eq!(SoundCue::CONFIRM_OFF, SoundCue::new(1, 0, 0));
        assert_eq!(SoundCue::CONFIRM_ON, SoundCue::new(1, 1, 0));
        assert_eq!(SoundCue::CANCEL, SoundCue::CONFIRM_ON);
    }

    #[test]
    fn menu_slot_is_first_handle() {
        assert_eq!(SoundSlot::MENU, SoundSlot(0));
    }

    fn click<P: SoundPlayer>(mut player: P) {
        player.play(SoundSlot::MENU, SoundCue::CURSOR);
    }

    #[test]
    fn mutable_reference_forwards_play() {
        let mut queue: SoundQueue = SoundQueue::new();
        click(&mut queue);
        click(&mut queue);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.as_slice()[0], (SoundSlot::MENU, SoundCue::CURSOR));
    }
}
