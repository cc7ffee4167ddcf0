//! The activity-simulation loop.

use std::thread;

use mac_keycode::{Chord, Key};
use mac_winops::{WindowInfo, WindowOps};
use relaykey::KeySink;
use tracing::{debug, info, warn};

use crate::{config::PulseConfig, error::Result};

/// What one cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// No window matched the title; nothing was touched.
    TargetMissing,
    /// The target was typed into and saved.
    Pulsed {
        /// Focus was handed back to a different, previously frontmost window.
        restored: bool,
    },
}

/// Tally of a bounded run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cycles that pulsed the target.
    pub pulsed: usize,
    /// Cycles that found no target.
    pub missing: usize,
    /// Cycles that stopped on an error.
    pub failed: usize,
}

/// Periodically types, deletes and saves in the target window.
pub struct Pulse<W, K> {
    /// Compiled-in settings.
    config: PulseConfig,
    /// Window lookup and activation.
    winops: W,
    /// Keyboard output.
    keys: K,
}

impl<W: WindowOps, K: KeySink> Pulse<W, K> {
    /// Build a loop over the given window and key backends.
    pub fn new(config: PulseConfig, winops: W, keys: K) -> Self {
        Self {
            config,
            winops,
            keys,
        }
    }

    /// Run one cycle.
    ///
    /// Focus returns to the previously frontmost window only when there was
    /// one and it was not the target itself. An error stops the cycle where
    /// it happened: a failed activation sends no keys, and failed keys skip
    /// the restore.
    pub fn cycle(&self) -> Result<CycleOutcome> {
        let previous = self.winops.frontmost_window();
        let Some(target) = self.winops.find_window_by_title(&self.config.title) else {
            debug!(title = %self.config.title, "target_missing");
            return Ok(CycleOutcome::TargetMissing);
        };
        debug!(
            target = %target.title,
            previous = ?previous.as_ref().map(|w| &w.title),
            "pulse_begin"
        );

        self.winops.activate(&target)?;
        thread::sleep(self.config.settle);
        self.type_and_save()?;
        thread::sleep(self.config.after_save);

        let restored = match previous {
            Some(prev) if prev.id != target.id => {
                self.restore(&prev)?;
                true
            }
            _ => false,
        };
        Ok(CycleOutcome::Pulsed { restored })
    }

    /// Type the placeholder, delete it character by character, then save.
    fn type_and_save(&self) -> Result<()> {
        self.keys.type_text(&self.config.placeholder)?;
        let delete = Chord::from(Key::Delete);
        for _ in self.config.placeholder.chars() {
            self.keys.tap(&delete)?;
        }
        self.keys.tap(&self.config.save)?;
        Ok(())
    }

    fn restore(&self, prev: &WindowInfo) -> Result<()> {
        debug!(pid = prev.pid, id = prev.id, title = %prev.title, "restore_focus");
        self.winops.activate(prev)?;
        Ok(())
    }

    /// Run one cycle and log how it went; `None` means it failed.
    pub fn step(&self) -> Option<CycleOutcome> {
        match self.cycle() {
            Ok(CycleOutcome::TargetMissing) => {
                info!(title = %self.config.title, "no matching window; skipping cycle");
                Some(CycleOutcome::TargetMissing)
            }
            Ok(outcome @ CycleOutcome::Pulsed { restored }) => {
                info!(title = %self.config.title, restored, "pulsed");
                Some(outcome)
            }
            Err(e) => {
                warn!(error = %e, "pulse_cycle_failed");
                None
            }
        }
    }

    /// Run `n` cycles, sleeping the configured interval after each one.
    pub fn run_cycles(&self, n: usize) -> RunSummary {
        let mut summary = RunSummary::default();
        for _ in 0..n {
            match self.step() {
                Some(CycleOutcome::Pulsed { .. }) => summary.pulsed += 1,
                Some(CycleOutcome::TargetMissing) => summary.missing += 1,
                None => summary.failed += 1,
            }
            thread::sleep(self.config.interval);
        }
        summary
    }

    /// Cycle forever.
    pub fn run(&self) -> ! {
        loop {
            // Outcome is already logged by step.
            let _ignored = self.step();
            thread::sleep(self.config.interval);
        }
    }
}
