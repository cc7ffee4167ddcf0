//! Compiled-in pulse settings.

use std::time::Duration;

use mac_keycode::{Chord, Key, Modifier};

/// Substring of the title of the window to pulse.
pub const TARGET_TITLE: &str = "Visual Studio Code";

/// Text typed into the target and then deleted again.
pub const PLACEHOLDER_TEXT: &str = "pulse";

/// Wait after activating the target before typing.
pub const SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Wait after saving before handing focus back.
pub const AFTER_SAVE_DELAY: Duration = Duration::from_millis(500);

/// Wait between cycles.
pub const CYCLE_INTERVAL: Duration = Duration::from_secs(120);

/// Settings for one [`crate::Pulse`] loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PulseConfig {
    /// Substring matched against window titles.
    pub title: String,
    /// Text typed and deleted each cycle.
    pub placeholder: String,
    /// Chord that saves in the target application.
    pub save: Chord,
    /// Wait after activating the target.
    pub settle: Duration,
    /// Wait after saving.
    pub after_save: Duration,
    /// Wait between cycles.
    pub interval: Duration,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            title: TARGET_TITLE.to_string(),
            placeholder: PLACEHOLDER_TEXT.to_string(),
            save: Chord::new(Key::S, [Modifier::Command]),
            settle: SETTLE_DELAY,
            after_save: AFTER_SAVE_DELAY,
            interval: CYCLE_INTERVAL,
        }
    }
}

impl PulseConfig {
    /// The same settings with every delay set to zero.
    pub fn without_delays(self) -> Self {
        Self {
            settle: Duration::ZERO,
            after_save: Duration::ZERO,
            interval: Duration::ZERO,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_saves_with_cmd_s() {
        let cfg = PulseConfig::default();
        assert_eq!(cfg.save.to_string(), "cmd+s");
        assert_eq!(cfg.title, TARGET_TITLE);
        assert!(cfg.interval > cfg.settle + cfg.after_save);
    }

    #[test]
    fn placeholder_is_typeable() {
        assert!(PLACEHOLDER_TEXT.chars().all(|c| Chord::for_char(c).is_some()));
    }

    #[test]
    fn default_cadence() {
        let cfg = PulseConfig::default();
        assert_eq!(cfg.settle, Duration::from_secs(1));
        assert_eq!(cfg.after_save, Duration::from_millis(500));
        assert_eq!(cfg.interval, Duration::from_secs(120));
    }

    #[test]
    fn without_delays_keeps_the_rest() {
        let cfg = PulseConfig::default().without_delays();
        assert_eq!(cfg.interval, Duration::ZERO);
        assert_eq!(cfg.title, TARGET_TITLE);
    }
}
