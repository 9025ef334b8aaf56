use windows::Devices::Sensors::{
    SimpleOrientation, SimpleOrientationSensor, SimpleOrientationSensorOrientationChangedEventArgs,
};
use windows::Foundation::{EventRegistrationToken, TypedEventHandler};
use windows::Win32::System::WinRT::{RO_INIT_MULTITHREADED, RoInitialize};

use crate::listener::EventSender;
use crate::sensor::{OrientationSensor, SensorError, SensorOrientation, SensorProvider};

type Result<T = ()> = std::result::Result<T, SensorError>;

/// Finds the default simple orientation sensor through WinRT
#[derive(Debug, Default)]
pub struct WinRtSensorProvider;

impl SensorProvider for WinRtSensorProvider {
    type Sensor = WinRtSensor;

    fn default_sensor(&self) -> Result<Option<WinRtSensor>> {
        unsafe { RoInitialize(RO_INIT_MULTITHREADED) }
            .map_err(|e| SensorError::Runtime(format!("RoInitialize failed: {:?}", e)))?;

        match SimpleOrientationSensor::GetDefault() {
            Ok(sensor) => Ok(Some(WinRtSensor { sensor })),
            // a null sensor surfaces as an error carrying S_OK
            Err(err) if err.code().is_ok() => Ok(None),
            Err(err) => Err(SensorError::WinRT(format!(
                "SimpleOrientationSensor::GetDefault failed: {:?}",
                err
            ))),
        }
    }
}

pub struct WinRtSensor {
    sensor: SimpleOrientationSensor,
}

impl OrientationSensor for WinRtSensor {
    type Subscription = WinRtSubscription;

    fn subscribe(&self, events: EventSender) -> Result<WinRtSubscription> {
        let handler = TypedEventHandler::<
            SimpleOrientationSensor,
            SimpleOrientationSensorOrientationChangedEventArgs,
        >::new(move |_, args| {
            if let Some(args) = args.as_ref() {
                match sensor_orientation(args.Orientation()?) {
                    Some(orientation) => {
                        events.orientation_changed(orientation);
                    }
                    None => log::trace!("Unknown sensor orientation"),
                }
            }
            Ok(())
        });

        let token = self
            .sensor
            .OrientationChanged(&handler)
            .map_err(|e| SensorError::WinRT(format!("OrientationChanged failed: {:?}", e)))?;

        Ok(WinRtSubscription {
            sensor: self.sensor.clone(),
            token,
        })
    }
}

/// Unregisters the orientation handler on drop
pub struct WinRtSubscription {
    sensor: SimpleOrientationSensor,
    token: EventRegistrationToken,
}

impl Drop for WinRtSubscription {
    fn drop(&mut self) {
        if let Err(err) = self.sensor.RemoveOrientationChanged(self.token) {
            log::debug!("Failed to unregister orientation handler: {:?}", err);
        }
    }
}

fn sensor_orientation(value: SimpleOrientation) -> Option<SensorOrientation> {
    match value {
        SimpleOrientation::NotRotated => Some(SensorOrientation::NotRotated),
        SimpleOrientation::Rotated90DegreesCounterclockwise => {
            Some(SensorOrientation::Rotated90DegreesCounterclockwise)
        }
        SimpleOrientation::Rotated180DegreesCounterclockwise => {
            Some(SensorOrientation::Rotated180DegreesCounterclockwise)
        }
        SimpleOrientation::Rotated270DegreesCounterclockwise => {
            Some(SensorOrientation::Rotated270DegreesCounterclockwise)
        }
        SimpleOrientation::Faceup => Some(SensorOrientation::FaceUp),
        SimpleOrientation::Facedown => Some(SensorOrientation::FaceDown),
        _ => None,
    }
}
