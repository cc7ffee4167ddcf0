//! Whole pulse cycles over mock windows and a recording key poster.

use std::sync::Arc;

use codepulse::{CycleOutcome, Pulse, PulseConfig, RunSummary};
use mac_keycode::{Key, Modifier};
use mac_winops::{MockWinOps, WindowInfo};
use relaykey::{Posted, RecordingPoster, RelayKey};

fn win(app: &str, title: &str, id: u32) -> WindowInfo {
    WindowInfo {
        app: app.into(),
        title: title.into(),
        pid: 500 + id as i32,
        id,
    }
}

fn relay() -> (RelayKey, Arc<RecordingPoster>) {
    let poster = Arc::new(RecordingPoster::new());
    (RelayKey::with_poster(poster.clone()), poster)
}

#[test]
fn full_cycle_posts_text_deletes_and_save() {
    let ops = MockWinOps::with_windows(vec![
        win("Safari", "Docs", 1),
        win("Code", "lib.rs - Visual Studio Code", 2),
    ]);
    let (keys, poster) = relay();
    let config = PulseConfig {
        placeholder: "Ok".into(),
        ..PulseConfig::default().without_delays()
    };
    let pulse = Pulse::new(config, ops.clone(), keys);

    assert_eq!(pulse.cycle().unwrap(), CycleOutcome::Pulsed { restored: true });
    assert_eq!(ops.activated(), vec![2, 1]);
    assert_eq!(
        poster.events(),
        vec![
            Posted::ModDown(Modifier::Shift),
            Posted::Down(Key::O),
            Posted::Up(Key::O),
            Posted::ModUp(Modifier::Shift),
            Posted::Down(Key::K),
            Posted::Up(Key::K),
            Posted::Down(Key::Delete),
            Posted::Up(Key::Delete),
            Posted::Down(Key::Delete),
            Posted::Up(Key::Delete),
            Posted::ModDown(Modifier::Command),
            Posted::Down(Key::S),
            Posted::Up(Key::S),
            Posted::ModUp(Modifier::Command),
        ]
    );
}

#[test]
fn loop_survives_every_lookup_outcome() {
    let ops = MockWinOps::new();
    let (keys, poster) = relay();
    let pulse = Pulse::new(PulseConfig::default().without_delays(), ops.clone(), keys);

    // Nothing on screen.
    assert_eq!(
        pulse.run_cycles(2),
        RunSummary {
            pulsed: 0,
            missing: 2,
            failed: 0
        }
    );
    assert!(poster.events().is_empty());

    // Target appears, but cannot be activated.
    ops.set_windows(vec![win("Code", "a.rs - Visual Studio Code", 7)]);
    ops.fail_activate(7);
    assert_eq!(
        pulse.run_cycles(2),
        RunSummary {
            pulsed: 0,
            missing: 0,
            failed: 2
        }
    );
    assert!(poster.events().is_empty());

    // Key posting breaks mid-cycle.
    let ops = MockWinOps::with_windows(vec![win("Code", "a.rs - Visual Studio Code", 7)]);
    let (keys, poster) = relay();
    poster.fail_keys(true);
    let pulse = Pulse::new(PulseConfig::default().without_delays(), ops.clone(), keys);
    assert_eq!(pulse.run_cycles(1).failed, 1);

    // And recovers on the next cycle.
    poster.fail_keys(false);
    assert_eq!(pulse.run_cycles(1).pulsed, 1);
}

#[test]
fn unmappable_placeholder_fails_before_typing() {
    let ops = MockWinOps::with_windows(vec![
        win("Terminal", "zsh", 1),
        win("Code", "a.rs - Visual Studio Code", 2),
    ]);
    let (keys, poster) = relay();
    let config = PulseConfig {
        placeholder: "caf\u{e9}".into(),
        ..PulseConfig::default().without_delays()
    };
    let pulse = Pulse::new(config, ops.clone(), keys);

    assert!(matches!(
        pulse.cycle(),
        Err(codepulse::Error::Relay(relaykey::Error::Unmappable('\u{e9}')))
    ));
    assert!(poster.events().is_empty());
    // Target was activated, restore was skipped.
    assert_eq!(ops.activated(), vec![2]);
}
