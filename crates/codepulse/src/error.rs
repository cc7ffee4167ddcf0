//! Error handling for the codepulse crate.

use std::result;

use thiserror::Error;

/// Convenient result type for codepulse operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can end a pulse cycle early.
#[derive(Debug, Error)]
pub enum Error {
    /// Looking up or activating a window failed.
    #[error("Window error: {0}")]
    Window(#[from] mac_winops::Error),
    /// Posting synthetic keys failed.
    #[error("Key relay error: {0}")]
    Relay(#[from] relaykey::Error),
}
