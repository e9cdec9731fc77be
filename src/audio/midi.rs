//! Direct playback through the sound driver.
//!
//! The driver addresses sounds by an opaque per-bank handle plus
//! `(bank, id, flags)`. Handles are loaded elsewhere; this module only looks
//! them up by [`SoundSlot`] and forwards the cue.

use super::{SoundCue, SoundPlayer, SoundSlot};
use crate::config::SOUND_HANDLE_COUNT;
use crate::error::{Error, Result};

/// The sound driver's play entry point.
pub trait MidiDriver {
    /// Opaque handle of a preloaded sound bank.
    type Handle;

    /// Start a sound. Must return without waiting for playback.
    fn midi_play(&mut self, handle: &Self::Handle, bank: i32, id: i32, flags: i32);
}

/// Fixed table of preloaded sound handles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandleTable<H, const N: usize = SOUND_HANDLE_COUNT> {
    handles: [H; N],
}

impl<H, const N: usize> HandleTable<H, N> {
    pub const fn new(handles: [H; N]) -> Self {
        Self { handles }
    }

    /// Handle in `slot`.
    pub fn get(&self, slot: SoundSlot) -> Result<&H> {
        self.handles.get(slot.0).ok_or(Error::NoSuchSoundSlot(slot.0))
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

/// [`SoundPlayer`] that calls the driver immediately.
pub struct Midi<D: MidiDriver, const N: usize = SOUND_HANDLE_COUNT> {
    driver: D,
    handles: HandleTable<D::Handle, N>,
}

impl<D: MidiDriver, const N: usize> Midi<D, N> {
    pub fn new(driver: D, handles: HandleTable<D::Handle, N>) -> Self {
        Self { driver, handles }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn handles(&self) -> &HandleTable<D::Handle, N> {
        &self.handles
    }

    /// Give back the driver and handle table.
    pub fn into_parts(self) -> (D, HandleTable<D::Handle, N>) {
        (self.driver, self.handles)
    }
}

impl<D: MidiDriver, const N: usize> SoundPlayer for Midi<D, N> {
    /// An empty slot is a loading bug elsewhere; the cue is skipped.
    fn play(&mut self, slot: SoundSlot, cue: SoundCue) {
        match self.handles.get(slot) {
            Ok(handle) => self.driver.midi_play(handle, cue.bank, cue.id, cue.flags),
            Err(e) => warn!("Sound: {} for cue {}", e, cue),
        }
    }
}
