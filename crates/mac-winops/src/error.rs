use thiserror::Error;

/// Errors that can occur during window operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Accessibility permission is required but not granted.
    #[error("Accessibility permission missing")]
    Permission,

    /// Failed to create an Accessibility API application element.
    #[error("Failed to create AX application element")]
    AppElement,

    /// An Accessibility API operation failed with the given error code.
    #[error("AX operation failed: code {0}")]
    AxCode(i32),

    /// Operation must be executed on the main thread.
    #[error("Operation requires main thread")]
    MainThread,

    /// No running application owns the given pid anymore.
    #[error("No running application for pid {0}")]
    AppNotFound(i32),

    /// The application refused to activate.
    #[error("Activation failed for pid {0}")]
    ActivationFailed(i32),

    /// Window operations are not implemented for this platform.
    #[error("Window operations are unsupported on this platform")]
    Unsupported,
}

/// Crate-local `Result` alias.
pub type Result<T> = std::result::Result<T, Error>;
