//! Bounded queue of sound cues.
//!
//! Menu code runs in the tick loop; the audio task drains the queue once
//! per frame and forwards each cue to the driver. No `alloc`: the queue is
//! a `heapless::Vec` sized at compile time.

use super::{SoundCue, SoundPlayer, SoundSlot};
use crate::config::SOUND_QUEUE_DEPTH;
use crate::error::{Error, Result};
use heapless::Vec;

/// Sound cues waiting for the next drain, in trigger order.
#[derive(Clone, Debug, Default)]
pub struct SoundQueue<const N: usize = SOUND_QUEUE_DEPTH> {
    pending: Vec<(SoundSlot, SoundCue), N>,
}

impl<const N: usize> SoundQueue<N> {
    pub const fn new() -> Self {
        Self { pending: Vec::new() }
    }

    /// Queue a cue, reporting overflow instead of dropping silently.
    pub fn try_play(&mut self, slot: SoundSlot, cue: SoundCue) -> Result<()> {
        self.pending
            .push((slot, cue))
            .map_err(|_| Error::SoundQueueFull)
    }

    /// Hand every pending cue to `sink` in trigger order, then empty the queue.
    pub fn drain(&mut self, mut sink: impl FnMut(SoundSlot, SoundCue)) {
        for &(slot, cue) in self.pending.iter() {
            sink(slot, cue);
        }
        self.pending.clear();
    }

    /// Forward every pending cue to another player.
    pub fn drain_into<P: SoundPlayer + ?Sized>(&mut self, player: &mut P) {
        self.drain(|slot, cue| player.play(slot, cue));
    }

    /// Pending cues, oldest first.
    pub fn as_slice(&self) -> &[(SoundSlot, SoundCue)] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Discard pending cues without playing them.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<const N: usize> SoundPlayer for SoundQueue<N> {
    /// Fire-and-forget: a cue that does not fit is dropped with a warning.
    fn play(&mut self, slot: SoundSlot, cue: SoundCue) {
        if self.try_play(slot, cue).is_err() {
            warn!("Sound: queue full, dropping cue {}", cue);
        }
    }
}
