//! mac-winops: macOS window operations for codepulse.
//!
//! Lists on-screen windows through CoreGraphics, picks out the frontmost one
//! and the first one whose title contains a needle, and activates a window by
//! bringing its application forward and raising the window through the
//! Accessibility API.
//!
//! Activation requires Accessibility permission. Reading other applications'
//! window titles requires Screen Recording permission; without it titles come
//! back empty and title lookups find nothing.
//!
//! On other platforms the crate compiles, lists no windows and refuses to
//! activate anything with [`Error::Unsupported`].

mod error;
pub mod ops;

#[cfg(target_os = "macos")]
mod activate;
#[cfg(target_os = "macos")]
mod ax;
#[cfg(target_os = "macos")]
mod cfutil;
#[cfg(target_os = "macos")]
mod window;

#[cfg(not(target_os = "macos"))]
mod unsupported;

pub use error::{Error, Result};
#[cfg(any(test, feature = "test-utils"))]
pub use ops::MockWinOps;
pub use ops::{RealWinOps, WindowOps};

#[cfg(target_os = "macos")]
pub use activate::activate_window;
#[cfg(target_os = "macos")]
pub use window::list_windows;

#[cfg(not(target_os = "macos"))]
pub use unsupported::{activate_window, list_windows};

/// Applications to skip when determining the frontmost window.
/// These are system or overlay processes that shouldn't count as focus owners.
pub const FOCUS_SKIP_APPS: &[&str] = &[
    "WindowManager",
    "Dock",
    "Control Center",
    "Spotlight",
    "Window Server",
    "Notification Center",
];

/// Alias for CoreGraphics CGWindowID (kCGWindowNumber).
pub type WindowId = u32;

/// Snapshot of one on-screen window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    /// Owning application name.
    pub app: String,
    /// Window title; empty when the title is unreadable.
    pub title: String,
    /// Owning process id.
    pub pid: i32,
    /// CoreGraphics window number.
    pub id: WindowId,
}

/// First window in `windows` (front-to-back order) not owned by a skipped app.
pub fn pick_frontmost(windows: Vec<WindowInfo>) -> Option<WindowInfo> {
    windows
        .into_iter()
        .find(|w| !FOCUS_SKIP_APPS.contains(&w.app.as_str()))
}

/// First window in `windows` whose title contains `needle`, ignoring case.
///
/// An empty needle matches nothing, and neither do untitled windows.
pub fn pick_by_title(windows: Vec<WindowInfo>, needle: &str) -> Option<WindowInfo> {
    if needle.is_empty() {
        return None;
    }
    let needle = needle.to_lowercase();
    windows
        .into_iter()
        .find(|w| !w.title.is_empty() && w.title.to_lowercase().contains(&needle))
}

/// The frontmost on-screen window, if any.
pub fn frontmost_window() -> Option<WindowInfo> {
    pick_frontmost(list_windows())
}

/// The frontmost on-screen window whose title contains `needle` in any case, if any.
pub fn find_window_by_title(needle: &str) -> Option<WindowInfo> {
    pick_by_title(list_windows(), needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(app: &str, title: &str, id: WindowId) -> WindowInfo {
        WindowInfo {
            app: app.into(),
            title: title.into(),
            pid: id as i32 + 100,
            id,
        }
    }

    #[test]
    fn frontmost_skips_system_apps() {
        let ws = vec![
            win("Dock", "", 1),
            win("Spotlight", "", 2),
            win("Terminal", "zsh", 3),
            win("Code", "main.rs", 4),
        ];
        assert_eq!(pick_frontmost(ws).map(|w| w.id), Some(3));
        assert_eq!(pick_frontmost(vec![win("Dock", "", 1)]), None);
        assert_eq!(pick_frontmost(Vec::new()), None);
    }

    #[test]
    fn title_lookup_is_substring_and_first_wins() {
        let ws = vec![
            win("Safari", "Docs", 1),
            win("Code", "lib.rs - Visual Studio Code", 2),
            win("Code", "main.rs - Visual Studio Code", 3),
        ];
        assert_eq!(
            pick_by_title(ws.clone(), "Visual Studio Code").map(|w| w.id),
            Some(2)
        );
        assert_eq!(pick_by_title(ws.clone(), "main.rs").map(|w| w.id), Some(3));
        assert_eq!(
            pick_by_title(ws, "visual studio code").map(|w| w.id),
            Some(2)
        );
    }

    #[test]
    fn title_lookup_ignores_case() {
        let ws = vec![
            win("Terminal", "zsh", 1),
            win("Code", "main.rs - visual studio code", 2),
        ];
        assert_eq!(
            pick_by_title(ws.clone(), "Visual Studio Code").map(|w| w.id),
            Some(2)
        );
        assert_eq!(pick_by_title(ws, "ZSH").map(|w| w.id), Some(1));
    }

    #[test]
    fn title_lookup_ignores_empty_needle_and_untitled() {
        let ws = vec![win("Code", "", 1), win("Code", "x", 2)];
        assert_eq!(pick_by_title(ws.clone(), ""), None);
        assert_eq!(pick_by_title(ws, "x").map(|w| w.id), Some(2));
    }
}
