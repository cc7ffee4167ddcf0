//! Posts synthetic key events to whichever macOS app currently has focus.
//!
//! A `RelayKey` taps single chords (`cmd+s`) and types plain text one
//! character at a time, pressing and releasing the chord's modifiers around
//! each key. Events are tagged with [`PULSE_TAG`] in the event source user
//! data field so they can be told apart from real input.
//!
//! The pulse loop talks to the relay through the [`KeySink`] trait so it can
//! be driven without touching the OS in tests.
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]
use std::sync::Arc;

use mac_keycode::{Chord, Modifier};
use tracing::{debug, trace};

mod error;
#[cfg(target_os = "macos")]
mod mac;
#[cfg(any(test, feature = "test-utils"))]
mod recording;

pub use error::{Error, Result};
#[cfg(any(test, feature = "test-utils"))]
pub use recording::{Posted, RecordingPoster};

/// 'cpul' in ASCII bytes: 0x63 0x70 0x75 0x6c -> 1668314476
pub const PULSE_TAG: i64 = 1_668_314_476;

/// Low-level event posting seam. One call per CGEvent.
pub trait Poster: Send + Sync {
    /// Post a key-down for the chord's key with the chord's modifier flags.
    fn post_down(&self, chord: &Chord) -> Result<()>;
    /// Post a key-up for the chord's key with the chord's modifier flags.
    fn post_up(&self, chord: &Chord) -> Result<()>;
    /// Press (or release) the modifier keys themselves, in the given order.
    fn post_modifiers(&self, mods: &[Modifier], down: bool) -> Result<()>;
}

/// Poster for platforms without a key injection backend.
#[cfg(not(target_os = "macos"))]
struct UnsupportedPoster;

#[cfg(not(target_os = "macos"))]
impl Poster for UnsupportedPoster {
    fn post_down(&self, _chord: &Chord) -> Result<()> {
        Err(Error::Unsupported)
    }
    fn post_up(&self, _chord: &Chord) -> Result<()> {
        Err(Error::Unsupported)
    }
    fn post_modifiers(&self, _mods: &[Modifier], _down: bool) -> Result<()> {
        Err(Error::Unsupported)
    }
}

/// Keyboard output used by the pulse loop.
pub trait KeySink {
    /// Press and release a single chord.
    fn tap(&self, chord: &Chord) -> Result<()>;
    /// Type `text` character by character.
    fn type_text(&self, text: &str) -> Result<()>;
}

/// Relays chords and text to the focused application.
#[derive(Clone)]
pub struct RelayKey {
    poster: Arc<dyn Poster>,
}

impl Default for RelayKey {
    fn default() -> Self {
        Self::new()
    }
}

impl RelayKey {
    /// Create a relay that posts through the platform backend.
    pub fn new() -> Self {
        #[cfg(target_os = "macos")]
        let poster: Arc<dyn Poster> = Arc::new(mac::MacPoster);
        #[cfg(not(target_os = "macos"))]
        let poster: Arc<dyn Poster> = Arc::new(UnsupportedPoster);
        Self { poster }
    }

    /// Create a relay over a custom poster.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_poster(poster: Arc<dyn Poster>) -> Self {
        Self { poster }
    }

    /// Press and release `chord`: modifiers down, key down, key up, modifiers up.
    ///
    /// Modifiers are released even when posting the key fails.
    pub fn tap(&self, chord: &Chord) -> Result<()> {
        trace!(chord = %chord, "tap");
        let mut mods = chord.ordered_modifiers();
        self.poster.post_modifiers(&mods, true)?;
        let key = self
            .poster
            .post_down(chord)
            .and_then(|()| self.poster.post_up(chord));
        mods.reverse();
        let release = self.poster.post_modifiers(&mods, false);
        key.and(release)
    }

    /// Type `text` one chord per character.
    ///
    /// Every character is mapped before anything is posted, so an unmappable
    /// character leaves the target untouched.
    pub fn type_text(&self, text: &str) -> Result<()> {
        let chords = text
            .chars()
            .map(|c| Chord::for_char(c).ok_or(Error::Unmappable(c)))
            .collect::<Result<Vec<_>>>()?;
        debug!(len = chords.len(), "type_text");
        chords.iter().try_for_each(|c| self.tap(c))
    }
}

impl KeySink for RelayKey {
    fn tap(&self, chord: &Chord) -> Result<()> {
        Self::tap(self, chord)
    }

    fn type_text(&self, text: &str) -> Result<()> {
        Self::type_text(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mac_keycode::Key;

    fn relay() -> (RelayKey, Arc<RecordingPoster>) {
        let poster = Arc::new(RecordingPoster::new());
        (RelayKey::with_poster(poster.clone()), poster)
    }

    #[test]
    fn tap_plain_key() {
        let (rk, poster) = relay();
        rk.tap(&Chord::from(Key::Delete)).unwrap();
        assert_eq!(
            poster.events(),
            vec![Posted::Down(Key::Delete), Posted::Up(Key::Delete)]
        );
    }

    #[test]
    fn tap_wraps_key_in_modifiers() {
        let (rk, poster) = relay();
        let save = Chord::parse("cmd+shift+s").unwrap();
        rk.tap(&save).unwrap();
        assert_eq!(
            poster.events(),
            vec![
                Posted::ModDown(Modifier::Command),
                Posted::ModDown(Modifier::Shift),
                Posted::Down(Key::S),
                Posted::Up(Key::S),
                Posted::ModUp(Modifier::Shift),
                Posted::ModUp(Modifier::Command),
            ]
        );
    }

    #[test]
    fn type_text_maps_each_char() {
        let (rk, poster) = relay();
        rk.type_text("Hi").unwrap();
        assert_eq!(
            poster.events(),
            vec![
                Posted::ModDown(Modifier::Shift),
                Posted::Down(Key::H),
                Posted::Up(Key::H),
                Posted::ModUp(Modifier::Shift),
                Posted::Down(Key::I),
                Posted::Up(Key::I),
            ]
        );
    }

    #[test]
    fn unmappable_text_posts_nothing() {
        let (rk, poster) = relay();
        assert_eq!(rk.type_text("ok\u{e9}"), Err(Error::Unmappable('\u{e9}')));
        assert!(poster.events().is_empty());
    }

    #[test]
    fn failed_key_still_releases_modifiers() {
        let (rk, poster) = relay();
        poster.fail_keys(true);
        let err = rk.tap(&Chord::parse("cmd+s").unwrap()).unwrap_err();
        assert_eq!(err, Error::EventCreate);
        assert_eq!(
            poster.events(),
            vec![
                Posted::ModDown(Modifier::Command),
                Posted::ModUp(Modifier::Command),
            ]
        );
    }
}
