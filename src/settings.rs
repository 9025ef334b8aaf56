//! Access to the persisted auto-rotation settings.
//!
//! On Windows these live in the registry; the core only sees the
//! [`SettingsStore`] and [`SettingsKey`] traits.

use core::fmt;

use thiserror::Error;

/// Registry key (below `HKEY_LOCAL_MACHINE`) holding the auto-rotation settings
pub const AUTO_ROTATION_KEY: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\AutoRotation";

/// Master auto-rotation toggle
pub const ENABLE_VALUE: &str = "Enable";
/// Forbids auto-rotating into portrait (flipped)
pub const MOBILE_BEHAVIOR_VALUE: &str = "MobileBehavior";
/// Tells the shell that rotation hardware exists, so it shows the rotation lock toggle
pub const SENSOR_PRESENT_VALUE: &str = "SensorPresent";

/// Error type for the settings module
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to open settings key {path}; error code {code}")]
    Open { path: String, code: u32 },
    #[error("Failed to read value {name}; error code {code}")]
    Read { name: String, code: u32 },
    #[error("Failed to write value {name}; error code {code}")]
    Write { name: String, code: u32 },
    #[error("Value {0} is not a DWORD")]
    UnexpectedType(String),
}

type Result<T = ()> = std::result::Result<T, SettingsError>;

/// How a settings key is opened
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// A store the settings key can be opened from. Every open is independent
/// and may fail.
pub trait SettingsStore {
    type Key: SettingsKey;

    fn open(&self, access: Access) -> Result<Self::Key>;
}

/// An opened settings key
pub trait SettingsKey {
    /// Reads a DWORD value, `None` if the value does not exist
    fn get_dword(&self, name: &str) -> Result<Option<u32>>;

    fn set_dword(&self, name: &str, value: u32) -> Result;
}

/// Reads a boolean flag. Anything but an existing `1` is treated as unset.
pub fn flag<K: SettingsKey>(key: &K, name: &str) -> bool {
    match key.get_dword(name) {
        Ok(value) => value == Some(1),
        Err(err) => {
            log::debug!("Treating {} as unset: {}", name, err);
            false
        }
    }
}

/// Marks rotation hardware as present
pub fn announce_sensor_presence<S: SettingsStore>(store: &S) -> Result {
    let key = store.open(Access::Write)?;
    key.set_dword(SENSOR_PRESENT_VALUE, 1)
}

/// Snapshot of all auto-rotation settings
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct AutoRotationSettings {
    pub enabled: bool,
    pub mobile_behavior: bool,
    pub sensor_present: bool,
}

impl AutoRotationSettings {
    pub fn read<S: SettingsStore>(store: &S) -> Result<Self> {
        let key = store.open(Access::Read)?;
        Ok(Self {
            enabled: flag(&key, ENABLE_VALUE),
            mobile_behavior: flag(&key, MOBILE_BEHAVIOR_VALUE),
            sensor_present: flag(&key, SENSOR_PRESENT_VALUE),
        })
    }
}

impl fmt::Display for AutoRotationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, {}: {}, {}: {}",
            ENABLE_VALUE,
            self.enabled,
            MOBILE_BEHAVIOR_VALUE,
            self.mobile_behavior,
            SENSOR_PRESENT_VALUE,
            self.sensor_present
        )
    }
}
