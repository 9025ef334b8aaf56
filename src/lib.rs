//! A library that rotates the display to follow the orientation sensor.
//!
//! Sensor readings are mapped to display orientations and applied while
//! honoring the auto-rotation settings (rotation lock and mobile behavior).
//! The platform-neutral core talks to the system through the traits in
//! [`settings`], [`display`] and [`sensor`]; the Windows bindings live in
//! `platforms::windows`.

pub mod applier;
pub mod display;
pub mod listener;
pub mod platforms;
pub mod sensor;
pub mod service;
pub mod settings;
mod types;

pub use applier::{Applier, ApplyError, Outcome, SkipReason};
pub use display::{DisplayBackend, DisplayError};
pub use listener::{Event, EventSender, Listener, ListenerStats};
pub use sensor::{OrientationSensor, SensorError, SensorOrientation, SensorProvider};
pub use service::{EXIT_NO_SENSOR, EXIT_SENSOR_ERROR, StartupError};
pub use settings::{AutoRotationSettings, SettingsError, SettingsKey, SettingsStore};
pub use types::*;
