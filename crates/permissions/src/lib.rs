//! macOS permission checks for codepulse.
//!
//! Posting synthetic key events and raising other applications' windows both
//! require the process to be trusted for Accessibility. Reading other
//! applications' window titles needs Screen Recording. This crate answers
//! those two questions; it never prompts. On targets other than macOS there
//! are no such permissions and the checks always fail, which the callers
//! surface as an unsupported platform.

#[cfg(target_os = "macos")]
#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn AXIsProcessTrusted() -> bool;
    fn CGPreflightScreenCaptureAccess() -> bool;
}

/// Return `true` if the process is trusted for Accessibility.
#[cfg(target_os = "macos")]
pub fn accessibility_ok() -> bool {
    unsafe { AXIsProcessTrusted() }
}

/// Return `true` if the process is trusted for Accessibility.
#[cfg(not(target_os = "macos"))]
pub fn accessibility_ok() -> bool {
    false
}

/// Check if the process has the "Screen Recording" permission.
///
/// Without it `CGWindowListCopyWindowInfo` omits `kCGWindowName` for other
/// applications' windows, so every title reads as empty.
#[cfg(target_os = "macos")]
pub fn screen_recording_ok() -> bool {
    unsafe { CGPreflightScreenCaptureAccess() }
}

/// Check if the process has the "Screen Recording" permission.
#[cfg(not(target_os = "macos"))]
pub fn screen_recording_ok() -> bool {
    false
}

#[cfg(all(test, not(target_os = "macos")))]
mod tests {
    use super::*;

    #[test]
    fn never_trusted_off_macos() {
        assert!(!accessibility_ok());
        assert!(!screen_recording_ok());
    }
}
