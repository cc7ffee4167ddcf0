//! Recording poster for tests: remembers what would have been posted.
use std::sync::atomic::{AtomicBool, Ordering};

use mac_keycode::{Chord, Key, Modifier};
use parking_lot::Mutex;

use crate::{Error, Poster, Result};

/// One recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Posted {
    /// Key-down of a non-modifier key.
    Down(Key),
    /// Key-up of a non-modifier key.
    Up(Key),
    /// A modifier pressed.
    ModDown(Modifier),
    /// A modifier released.
    ModUp(Modifier),
}

/// Poster that records events instead of posting them.
#[derive(Default)]
pub struct RecordingPoster {
    events: Mutex<Vec<Posted>>,
    fail_keys: AtomicBool,
}

impl RecordingPoster {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make key down/up posts fail with `Error::EventCreate`; modifiers still succeed.
    pub fn fail_keys(&self, on: bool) {
        self.fail_keys.store(on, Ordering::SeqCst);
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<Posted> {
        self.events.lock().clone()
    }

    fn key(&self, ev: Posted) -> Result<()> {
        if self.fail_keys.load(Ordering::SeqCst) {
            return Err(Error::EventCreate);
        }
        self.events.lock().push(ev);
        Ok(())
    }
}

impl Poster for RecordingPoster {
    fn post_down(&self, chord: &Chord) -> Result<()> {
        self.key(Posted::Down(chord.key))
    }

    fn post_up(&self, chord: &Chord) -> Result<()> {
        self.key(Posted::Up(chord.key))
    }

    fn post_modifiers(&self, mods: &[Modifier], down: bool) -> Result<()> {
        let mut events = self.events.lock();
        events.extend(mods.iter().map(|m| {
            if down {
                Posted::ModDown(*m)
            } else {
                Posted::ModUp(*m)
            }
        }));
        Ok(())
    }
}
