//! Applies a target orientation to the display, honoring the auto-rotation settings.

use core::fmt;

use thiserror::Error;

use crate::display::{DisplayBackend, DisplayError};
use crate::settings::{Access, ENABLE_VALUE, MOBILE_BEHAVIOR_VALUE, SettingsStore, flag};
use crate::types::{DisplayMode, Orientation};

/// Error type for the applier module
#[derive(Error, Debug)]
pub enum ApplyError {
    #[error("Failed to query the current display mode")]
    Query(#[source] DisplayError),
    #[error("Failed to commit display mode {mode}")]
    Commit {
        mode: DisplayMode,
        #[source]
        source: DisplayError,
    },
}

/// Why the display was left alone
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The settings key could not be opened
    SettingsUnavailable,
    /// Mobile behavior forbids portrait (flipped)
    MobileBehavior,
    /// Auto-rotation is switched off
    RotationDisabled,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::SettingsUnavailable => write!(f, "auto-rotation settings unavailable"),
            SkipReason::MobileBehavior => write!(f, "mobile behavior forbids this orientation"),
            SkipReason::RotationDisabled => write!(f, "auto-rotation is disabled"),
        }
    }
}

/// Result of a successful [`Applier::apply`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied { from: DisplayMode, to: DisplayMode },
    Skipped(SkipReason),
}

impl Outcome {
    /// Whether width and height were exchanged
    pub fn swapped(&self) -> bool {
        match self {
            Outcome::Applied { from, to } => from.orientation.crosses_axis(to.orientation),
            Outcome::Skipped(_) => false,
        }
    }
}

/// Turns the display, one self-contained read-decide-write per call
#[derive(Debug)]
pub struct Applier<S, D> {
    settings: S,
    display: D,
}

impl<S: SettingsStore, D: DisplayBackend> Applier<S, D> {
    pub fn new(settings: S, display: D) -> Self {
        Self { settings, display }
    }

    /// Rotates the display to `target` unless the settings forbid it
    pub fn apply(&self, target: Orientation) -> Result<Outcome, ApplyError> {
        let key = match self.settings.open(Access::Read) {
            Ok(key) => key,
            Err(err) => {
                log::debug!("Not rotating to {}: {}", target, err);
                return Ok(Outcome::Skipped(SkipReason::SettingsUnavailable));
            }
        };

        if target == Orientation::PortraitFlipped && flag(&key, MOBILE_BEHAVIOR_VALUE) {
            return Ok(Outcome::Skipped(SkipReason::MobileBehavior));
        }

        if !flag(&key, ENABLE_VALUE) {
            return Ok(Outcome::Skipped(SkipReason::RotationDisabled));
        }
        drop(key);

        let current = self.display.current_mode().map_err(ApplyError::Query)?;
        let next = current.rotated_to(target);
        log::debug!("Rotating display from {} to {}", current, next);

        self.display
            .commit(&next)
            .map_err(|source| ApplyError::Commit { mode: next, source })?;

        Ok(Outcome::Applied {
            from: current,
            to: next,
        })
    }
}
