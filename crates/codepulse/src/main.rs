//! Entry point for the `codepulse` binary.

use clap::Parser;
use codepulse::{Pulse, PulseConfig};
use mac_winops::RealWinOps;
use relaykey::RelayKey;
use tracing::{info, warn};

/// Command-line interface for the `codepulse` binary.
#[derive(Parser, Debug)]
#[command(
    name = "codepulse",
    about = "Keep an editor's activity tracker fed with periodic type-and-save pulses",
    version
)]
struct Cli {
    /// Logging controls
    #[command(flatten)]
    log: logging::LogArgs,
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log);

    if !permissions::accessibility_ok() {
        warn!("Accessibility permission missing; window activation and key events will fail");
    }
    if !permissions::screen_recording_ok() {
        warn!("Screen Recording permission missing; window titles will read as empty");
    }

    let config = PulseConfig::default();
    info!(
        title = %config.title,
        interval = %humantime::format_duration(config.interval),
        save = %config.save,
        "codepulse started"
    );
    Pulse::new(config, RealWinOps, RelayKey::new()).run()
}
