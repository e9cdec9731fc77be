//! Per-tick menu input handling.
//!
//! Both routines read the press mask once, mutate caller-owned state in
//! place and trigger their feedback sound through the injected player.
//! Preconditions (non-zero option count, index in range) belong to the
//! caller and are not re-checked here.

use super::{ConfirmCode, Toggle};
use crate::audio::{SoundCue, SoundPlayer, SoundSlot};
use crate::input::{Buttons, InputSource};

/// Index before `index`, wrapping to the last of `count` options.
pub fn wrap_prev(index: usize, count: usize) -> usize {
    (index + count - 1) % count
}

/// Index after `index`, wrapping to the first of `count` options.
pub fn wrap_next(index: usize, count: usize) -> usize {
    (index + 1) % count
}

/// Move the option cursor with Left/Right.
///
/// Left wins when both are pressed. Returns `true` and plays the cursor
/// sound when the cursor moved; otherwise leaves `current` alone and plays
/// nothing.
pub fn cycle_option<I, S>(input: &I, sounds: &mut S, current: &mut usize, count: usize) -> bool
where
    I: InputSource + ?Sized,
    S: SoundPlayer + ?Sized,
{
    let press = input.pressed();

    let next = if press.contains(Buttons::LEFT) {
        wrap_prev(*current, count)
    } else if press.contains(Buttons::RIGHT) {
        wrap_next(*current, count)
    } else {
        return false;
    };

    sounds.play(SoundSlot::MENU, SoundCue::CURSOR);
    trace!("Menu: option {} -> {} of {}", *current, next, count);
    *current = next;
    true
}

/// Flip a yes/no toggle with Right/Left, then resolve Confirm/Cancel.
///
/// The flag is updated first, so Confirm in the same tick as a flip is
/// judged against the new value.
pub fn toggle_and_confirm<I, S>(input: &I, sounds: &mut S, flag: &mut Toggle) -> ConfirmCode
where
    I: InputSource + ?Sized,
    S: SoundPlayer + ?Sized,
{
    let press = input.pressed();

    match *flag {
        Toggle::Off if press.contains(Buttons::RIGHT) => {
            *flag = Toggle::On;
            sounds.play(SoundSlot::MENU, SoundCue::CURSOR);
            debug!("Menu: toggle on");
        }
        Toggle::On if press.contains(Buttons::LEFT) => {
            *flag = Toggle::Off;
            sounds.play(SoundSlot::MENU, SoundCue::CURSOR);
            debug!("Menu: toggle off");
        }
        _ => {}
    }

    let code = if press.contains(Buttons::CONFIRM) {
        match *flag {
            Toggle::Off => {
                sounds.play(SoundSlot::MENU, SoundCue::CONFIRM_OFF);
                ConfirmCode::Off
            }
            Toggle::On => {
                sounds.play(SoundSlot::MENU, SoundCue::CONFIRM_ON);
                ConfirmCode::On
            }
        }
    } else if press.contains(Buttons::CANCEL) {
        sounds.play(SoundSlot::MENU, SoundCue::CANCEL);
        ConfirmCode::On
    } else {
        return ConfirmCode::None;
    };

    debug!("Menu: decided {} with toggle {}", code, *flag);
    code
}
