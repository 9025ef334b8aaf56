use core::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Contains the resolution of a display
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the resolution with width and height exchanged
    pub fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Display orientation, in the 90 degree steps the display driver understands.
///
/// The discriminant is the driver's orientation index (`DMDO_*`).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Landscape = 0,
    PortraitFlipped = 1,
    LandscapeFlipped = 2,
    Portrait = 3,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Landscape,
        Orientation::PortraitFlipped,
        Orientation::LandscapeFlipped,
        Orientation::Portrait,
    ];

    /// Convert to a driver orientation index
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn degrees(self) -> u32 {
        self.index() * 90
    }

    /// Whether rotating from `self` to `target` crosses the portrait/landscape boundary
    pub fn crosses_axis(self, target: Orientation) -> bool {
        (self.index() + target.index()) % 2 == 1
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Landscape => write!(f, "landscape"),
            Orientation::PortraitFlipped => write!(f, "portrait_flipped"),
            Orientation::LandscapeFlipped => write!(f, "landscape_flipped"),
            Orientation::Portrait => write!(f, "portrait"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ParseOrientationError {
    #[error(
        "Unknown orientation: {0}. Allowed values: `landscape`, `portrait_flipped`, `landscape_flipped`, `portrait`, `0`, `90`, `180`, `270`"
    )]
    UnknownOrientation(String),
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "landscape" | "default" | "0" => Ok(Orientation::Landscape),
            "portrait_flipped" | "portraitflipped" | "90" => Ok(Orientation::PortraitFlipped),
            "landscape_flipped" | "landscapeflipped" | "upsidedown" | "180" => {
                Ok(Orientation::LandscapeFlipped)
            }
            "portrait" | "270" => Ok(Orientation::Portrait),
            _ => Err(ParseOrientationError::UnknownOrientation(s.to_string())),
        }
    }
}

/// The part of a display mode that auto-rotation reads and writes
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DisplayMode {
    pub resolution: Resolution,
    pub orientation: Orientation,
}

impl DisplayMode {
    pub fn new(resolution: Resolution, orientation: Orientation) -> Self {
        Self {
            resolution,
            orientation,
        }
    }

    /// Returns this mode turned to `target`.
    ///
    /// Drivers report pixel dimensions per orientation, so a quarter turn
    /// transposes the resolution.
    pub fn rotated_to(self, target: Orientation) -> Self {
        let resolution = if self.orientation.crosses_axis(target) {
            self.resolution.transposed()
        } else {
            self.resolution
        };

        Self::new(resolution, target)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} ({}°)",
            self.resolution,
            self.orientation,
            self.orientation.degrees()
        )
    }
}
