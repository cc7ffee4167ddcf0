use crate::{Result, WindowInfo, activate_window, find_window_by_title, frontmost_window};

/// Trait abstraction over window operations to improve testability.
pub trait WindowOps {
    /// The frontmost on-screen window, if any.
    fn frontmost_window(&self) -> Option<WindowInfo>;
    /// The frontmost window whose title contains `needle`, if any.
    fn find_window_by_title(&self, needle: &str) -> Option<WindowInfo>;
    /// Bring `window` to the foreground.
    fn activate(&self, window: &WindowInfo) -> Result<()>;
}

/// Production implementation of WindowOps delegating to crate functions.
pub struct RealWinOps;

impl WindowOps for RealWinOps {
    fn frontmost_window(&self) -> Option<WindowInfo> {
        frontmost_window()
    }
    fn find_window_by_title(&self, needle: &str) -> Option<WindowInfo> {
        find_window_by_title(needle)
    }
    fn activate(&self, window: &WindowInfo) -> Result<()> {
        activate_window(window)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockWinOps;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::{collections::HashSet, sync::Arc};

    use parking_lot::Mutex;

    use super::WindowOps;
    use crate::{Error, Result, WindowId, WindowInfo, pick_by_title, pick_frontmost};

    /// Simple mock implementation for tests (enabled with `test-utils` feature).
    ///
    /// Holds a front-to-back window list; activating a window moves it to the
    /// front, so a later `frontmost_window` sees the effect.
    #[derive(Clone, Default)]
    pub struct MockWinOps {
        calls: Arc<Mutex<Vec<String>>>,
        windows: Arc<Mutex<Vec<WindowInfo>>>,
        fail_activate: Arc<Mutex<HashSet<WindowId>>>,
    }

    impl MockWinOps {
        /// Empty desktop.
        pub fn new() -> Self {
            Self::default()
        }

        /// Mock primed with `windows`, frontmost first.
        pub fn with_windows(windows: Vec<WindowInfo>) -> Self {
            let m = Self::new();
            *m.windows.lock() = windows;
            m
        }

        /// Make activating window `id` fail with `Error::ActivationFailed`.
        pub fn fail_activate(&self, id: WindowId) {
            self.fail_activate.lock().insert(id);
        }

        /// Replace the window list.
        pub fn set_windows(&self, windows: Vec<WindowInfo>) {
            *self.windows.lock() = windows;
        }

        /// Recorded calls, e.g. `frontmost`, `find:Code`, `activate:7`.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }

        /// Ids of successfully activated windows, in order.
        pub fn activated(&self) -> Vec<WindowId> {
            self.calls
                .lock()
                .iter()
                .filter_map(|c| c.strip_prefix("activate:"))
                .filter_map(|id| id.parse().ok())
                .collect()
        }

        fn note(&self, call: String) {
            self.calls.lock().push(call);
        }
    }

    impl WindowOps for MockWinOps {
        fn frontmost_window(&self) -> Option<WindowInfo> {
            self.note("frontmost".into());
            pick_frontmost(self.windows.lock().clone())
        }

        fn find_window_by_title(&self, needle: &str) -> Option<WindowInfo> {
            self.note(format!("find:{needle}"));
            pick_by_title(self.windows.lock().clone(), needle)
        }

        fn activate(&self, window: &WindowInfo) -> Result<()> {
            if self.fail_activate.lock().contains(&window.id) {
                self.note(format!("activate_failed:{}", window.id));
                return Err(Error::ActivationFailed(window.pid));
            }
            let mut ws = self.windows.lock();
            if let Some(pos) = ws.iter().position(|w| w.id == window.id) {
                let w = ws.remove(pos);
                ws.insert(0, w);
            }
            drop(ws);
            self.note(format!("activate:{}", window.id));
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn win(app: &str, title: &str, id: WindowId) -> WindowInfo {
            WindowInfo {
                app: app.into(),
                title: title.into(),
                pid: 1,
                id,
            }
        }

        #[test]
        fn activate_moves_window_to_front() {
            let m = MockWinOps::with_windows(vec![win("Term", "zsh", 1), win("Code", "a.rs", 2)]);
            let code = m.find_window_by_title("a.rs").unwrap();
            m.activate(&code).unwrap();
            assert_eq!(m.frontmost_window().map(|w| w.id), Some(2));
            assert_eq!(m.activated(), vec![2]);
        }

        #[test]
        fn failing_activation_is_recorded() {
            let m = MockWinOps::with_windows(vec![win("Code", "a.rs", 2)]);
            m.fail_activate(2);
            let code = m.find_window_by_title("a.rs").unwrap();
            assert_eq!(m.activate(&code), Err(Error::ActivationFailed(1)));
            assert!(m.activated().is_empty());
            assert_eq!(m.calls(), vec!["find:a.rs", "activate_failed:2"]);
        }
    }
}
