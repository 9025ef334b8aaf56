//! Orientation sensor abstraction and the sensor-to-display orientation table.

use core::fmt;

use thiserror::Error;

use crate::listener::EventSender;
use crate::types::Orientation;

/// Error type for the sensor module
#[derive(Error, Debug)]
pub enum SensorError {
    #[error("Failed to initialize the runtime: {0}")]
    Runtime(String),
    #[error("Error when calling the sensor API: {0}")]
    WinRT(String),
}

type Result<T = ()> = std::result::Result<T, SensorError>;

/// Orientation as reported by a simple orientation sensor
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SensorOrientation {
    NotRotated,
    Rotated90DegreesCounterclockwise,
    Rotated180DegreesCounterclockwise,
    Rotated270DegreesCounterclockwise,
    FaceUp,
    FaceDown,
}

impl SensorOrientation {
    /// The display orientation matching this sensor reading, `None` when the
    /// reading says nothing about rotation.
    pub fn display_target(self) -> Option<Orientation> {
        match self {
            SensorOrientation::NotRotated => Some(Orientation::Portrait),
            SensorOrientation::Rotated180DegreesCounterclockwise => {
                Some(Orientation::PortraitFlipped)
            }
            SensorOrientation::Rotated90DegreesCounterclockwise => {
                Some(Orientation::LandscapeFlipped)
            }
            SensorOrientation::Rotated270DegreesCounterclockwise => Some(Orientation::Landscape),
            SensorOrientation::FaceUp | SensorOrientation::FaceDown => None,
        }
    }
}

impl fmt::Display for SensorOrientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SensorOrientation::NotRotated => write!(f, "not rotated"),
            SensorOrientation::Rotated90DegreesCounterclockwise => write!(f, "rotated 90° ccw"),
            SensorOrientation::Rotated180DegreesCounterclockwise => write!(f, "rotated 180° ccw"),
            SensorOrientation::Rotated270DegreesCounterclockwise => write!(f, "rotated 270° ccw"),
            SensorOrientation::FaceUp => write!(f, "face up"),
            SensorOrientation::FaceDown => write!(f, "face down"),
        }
    }
}

/// Finds the default orientation sensor of the system
pub trait SensorProvider {
    type Sensor: OrientationSensor;

    /// Returns `None` if the system has no orientation sensor
    fn default_sensor(&self) -> Result<Option<Self::Sensor>>;
}

/// A sensor that reports orientation changes
pub trait OrientationSensor {
    /// Keeps the registration alive; dropping it stops the notifications
    type Subscription;

    /// Forwards every orientation change into `events`
    fn subscribe(&self, events: EventSender) -> Result<Self::Subscription>;
}
