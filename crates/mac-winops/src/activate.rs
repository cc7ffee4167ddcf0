use objc2_app_kit::{NSApplicationActivationOptions, NSRunningApplication};
use objc2_foundation::MainThreadMarker;
use tracing::{debug, info, warn};

use crate::{
    WindowInfo,
    ax::{ax_check, ax_raise_window_titled},
    error::{Error, Result},
};

/// Bring `window` to the foreground.
///
/// Activates the owning application first, then raises the specific window by
/// title so the right one ends up key when the app has several open. A window
/// that cannot be raised individually is left to app activation.
pub fn activate_window(window: &WindowInfo) -> Result<()> {
    ax_check()?;
    let _mtm = MainThreadMarker::new().ok_or(Error::MainThread)?;
    let pid = window.pid;

    let app = unsafe {
        NSRunningApplication::runningApplicationWithProcessIdentifier(pid as libc::pid_t)
    }
    .ok_or(Error::AppNotFound(pid))?;
    let ok = unsafe { app.activateWithOptions(NSApplicationActivationOptions::ActivateAllWindows) };
    if !ok {
        warn!(pid, app = %window.app, "activate_window: activateWithOptions returned false");
        return Err(Error::ActivationFailed(pid));
    }
    debug!(pid, app = %window.app, "activate_window: app activated");

    if window.title.is_empty() {
        return Ok(());
    }
    match ax_raise_window_titled(pid, &window.title) {
        Ok(raised) => {
            info!(pid, id = window.id, title = %window.title, raised, "window_activated");
            Ok(())
        }
        Err(e) => {
            warn!(pid, id = window.id, error = %e, "activate_window: AX raise failed");
            Err(e)
        }
    }
}
