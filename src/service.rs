//! Startup sequence of the rotation service.

use thiserror::Error;

use crate::applier::Applier;
use crate::display::DisplayBackend;
use crate::listener::{Listener, ListenerStats};
use crate::sensor::{OrientationSensor, SensorError, SensorProvider};
use crate::settings::{SettingsStore, announce_sensor_presence};

/// Exit status when the system has no orientation sensor
pub const EXIT_NO_SENSOR: i32 = 1;
/// Exit status when the sensor runtime or API fails
pub const EXIT_SENSOR_ERROR: i32 = 2;

/// Errors that stop the service before it starts listening
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("No orientation sensor present")]
    NoSensor,
    #[error("Error in the orientation sensor")]
    Sensor(#[from] SensorError),
}

impl StartupError {
    pub fn exit_code(&self) -> i32 {
        match self {
            StartupError::NoSensor => EXIT_NO_SENSOR,
            StartupError::Sensor(_) => EXIT_SENSOR_ERROR,
        }
    }
}

/// Acquires the sensor, announces it and applies orientation changes until
/// `listener` is shut down.
///
/// Nothing is written to the settings if no sensor is found.
pub fn start<P, S, D>(
    provider: &P,
    settings: S,
    display: D,
    listener: Listener,
) -> Result<ListenerStats, StartupError>
where
    P: SensorProvider,
    S: SettingsStore,
    D: DisplayBackend,
{
    let sensor = provider.default_sensor()?.ok_or(StartupError::NoSensor)?;

    if let Err(err) = announce_sensor_presence(&settings) {
        log::debug!("Could not announce sensor presence: {}", err);
    }

    let _subscription = sensor.subscribe(listener.sender())?;
    log::info!("Listening for orientation changes");

    let applier = Applier::new(settings, display);
    Ok(listener.run(&applier))
}
