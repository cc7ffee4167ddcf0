use tracing::trace;

use crate::{Error, Result, WindowInfo};

/// No window list is available off macOS.
pub fn list_windows() -> Vec<WindowInfo> {
    trace!("list_windows: unsupported platform");
    Vec::new()
}

/// Activation is not available off macOS.
pub fn activate_window(_window: &WindowInfo) -> Result<()> {
    Err(Error::Unsupported)
}
