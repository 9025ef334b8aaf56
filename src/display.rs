use thiserror::Error;

use crate::types::DisplayMode;

/// Error type for the display module
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Error when calling the Windows API: {0}")]
    WinAPI(String),
    #[error("Invalid orientation: {0}")]
    InvalidOrientation(String),
    #[error("Failed to commit the changes; Returned flags: {0}")]
    FailedToCommit(String),
}

type Result<T = ()> = std::result::Result<T, DisplayError>;

/// The display whose mode follows the sensor
pub trait DisplayBackend {
    /// Reads the current mode. Nothing is cached between calls.
    fn current_mode(&self) -> Result<DisplayMode>;

    /// Applies `mode` globally and saves it so it survives a restart
    fn commit(&self, mode: &DisplayMode) -> Result;
}
