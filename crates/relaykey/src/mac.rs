//! CoreGraphics poster: builds keyboard CGEvents and posts them at the HID tap.
use std::collections::HashSet;

use core_graphics::{
    event as cge,
    event_source::{CGEventSource, CGEventSourceStateID},
};
use mac_keycode::{Chord, Key, Modifier, modifiers_to_cg_flags};
use tracing::{trace, warn};

use crate::{Error, PULSE_TAG, Poster, Result};

/// Posts events for real through the HID event tap.
pub(crate) struct MacPoster;

impl MacPoster {
    /// Map a permission failure onto the error we report, logging the cause.
    fn creation_error(what: &'static str, fallback: Error) -> Error {
        if permissions::accessibility_ok() {
            fallback
        } else {
            warn!(what, "accessibility_permission_missing");
            Error::PermissionDenied("Accessibility")
        }
    }

    fn build_event(&self, key: Key, flags: u64, down: bool) -> Result<cge::CGEvent> {
        let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState)
            .map_err(|_| Self::creation_error("event_source", Error::EventSource))?;
        let e = cge::CGEvent::new_keyboard_event(source, cge::CGKeyCode::from(key as u16), down)
            .map_err(|_| Self::creation_error("event_create", Error::EventCreate))?;
        e.set_flags(cge::CGEventFlags::from_bits_retain(flags));
        e.set_integer_value_field(cge::EventField::EVENT_SOURCE_USER_DATA, PULSE_TAG);
        Ok(e)
    }

    fn post(&self, key: Key, flags: u64, down: bool) -> Result<()> {
        let e = self.build_event(key, flags, down)?;
        e.post(cge::CGEventTapLocation::HID);
        Ok(())
    }
}

impl Poster for MacPoster {
    fn post_down(&self, chord: &Chord) -> Result<()> {
        trace!(code = ?chord.key, mods = ?chord.modifiers, "post_down");
        self.post(chord.key, modifiers_to_cg_flags(&chord.modifiers), true)
    }

    fn post_up(&self, chord: &Chord) -> Result<()> {
        trace!(code = ?chord.key, mods = ?chord.modifiers, "post_up");
        self.post(chord.key, modifiers_to_cg_flags(&chord.modifiers), false)
    }

    fn post_modifiers(&self, mods: &[Modifier], down: bool) -> Result<()> {
        // Flags accumulate while pressing and drain while releasing, so the
        // modifier events themselves agree with the chord's flags.
        let mut held: HashSet<Modifier> = if down {
            HashSet::new()
        } else {
            mods.iter().copied().collect()
        };
        for m in mods {
            if down {
                held.insert(*m);
            } else {
                held.remove(m);
            }
            self.post(Key::from(*m), modifiers_to_cg_flags(&held), down)?;
        }
        Ok(())
    }
}
