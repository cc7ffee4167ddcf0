#![warn(missing_docs)]

//! codepulse: keep an editor's activity tracker fed.
//!
//! Every [`config::CYCLE_INTERVAL`] the [`Pulse`] loop brings the window whose
//! title contains [`config::TARGET_TITLE`] to the front, types a placeholder,
//! deletes it again, saves, and hands focus back to whichever window had it.
//! Failures are logged and the loop carries on.

pub mod config;
mod error;
mod pulse;

pub use config::PulseConfig;
pub use error::{Error, Result};
pub use pulse::{CycleOutcome, Pulse, RunSummary};
