#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use rotatez::settings::Access;
use rotatez::{
    DisplayBackend, DisplayError, DisplayMode, EventSender, OrientationSensor, SensorError,
    SensorOrientation, SensorProvider, SettingsError, SettingsKey, SettingsStore,
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Settings kept in memory; clones share the same values
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, u32>>>,
    writes: Rc<RefCell<Vec<(String, u32)>>>,
    unreadable: Rc<RefCell<HashSet<String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn with_flags(enable: bool, mobile_behavior: bool) -> Self {
        let store = Self::default();
        store.set("Enable", enable as u32);
        store.set("MobileBehavior", mobile_behavior as u32);
        store
    }

    /// A store whose key can never be opened
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.unavailable.set(true);
        store
    }

    pub fn set(&self, name: &str, value: u32) {
        self.values.borrow_mut().insert(name.to_string(), value);
    }

    /// Makes every read of `name` fail
    pub fn fail_read(&self, name: &str) {
        self.unreadable.borrow_mut().insert(name.to_string());
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.values.borrow().get(name).copied()
    }

    pub fn writes(&self) -> Vec<(String, u32)> {
        self.writes.borrow().clone()
    }
}

impl SettingsStore for MemoryStore {
    type Key = MemoryStore;

    fn open(&self, _access: Access) -> Result<MemoryStore, SettingsError> {
        if self.unavailable.get() {
            return Err(SettingsError::Open {
                path: "memory".to_string(),
                code: 2,
            });
        }
        Ok(self.clone())
    }
}

impl SettingsKey for MemoryStore {
    fn get_dword(&self, name: &str) -> Result<Option<u32>, SettingsError> {
        if self.unreadable.borrow().contains(name) {
            return Err(SettingsError::Read {
                name: name.to_string(),
                code: 5,
            });
        }
        Ok(self.get(name))
    }

    fn set_dword(&self, name: &str, value: u32) -> Result<(), SettingsError> {
        self.set(name, value);
        self.writes.borrow_mut().push((name.to_string(), value));
        Ok(())
    }
}

/// A display that remembers its mode and every commit
#[derive(Debug, Clone)]
pub struct FakeDisplay {
    mode: Rc<Cell<DisplayMode>>,
    commits: Rc<RefCell<Vec<DisplayMode>>>,
    fail_query: Rc<Cell<bool>>,
    fail_commit: Rc<Cell<bool>>,
}

impl FakeDisplay {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode: Rc::new(Cell::new(mode)),
            commits: Rc::default(),
            fail_query: Rc::default(),
            fail_commit: Rc::default(),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode.get()
    }

    pub fn commits(&self) -> Vec<DisplayMode> {
        self.commits.borrow().clone()
    }

    pub fn fail_query(&self) {
        self.fail_query.set(true);
    }

    pub fn fail_commit(&self) {
        self.fail_commit.set(true);
    }
}

impl DisplayBackend for FakeDisplay {
    fn current_mode(&self) -> Result<DisplayMode, DisplayError> {
        if self.fail_query.get() {
            return Err(DisplayError::WinAPI("query refused".to_string()));
        }
        Ok(self.mode.get())
    }

    fn commit(&self, mode: &DisplayMode) -> Result<(), DisplayError> {
        if self.fail_commit.get() {
            return Err(DisplayError::FailedToCommit("BADMODE".to_string()));
        }
        self.commits.borrow_mut().push(*mode);
        self.mode.set(*mode);
        Ok(())
    }
}

/// A sensor replaying scripted readings, then asking the listener to stop
#[derive(Debug, Clone)]
pub struct ScriptedSensor {
    readings: Vec<SensorOrientation>,
}

impl OrientationSensor for ScriptedSensor {
    type Subscription = ();

    fn subscribe(&self, events: EventSender) -> Result<(), SensorError> {
        for reading in &self.readings {
            events.orientation_changed(*reading);
        }
        events.shutdown();
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    sensor: Option<ScriptedSensor>,
    broken: bool,
}

impl ScriptedProvider {
    pub fn with_readings(readings: &[SensorOrientation]) -> Self {
        Self {
            sensor: Some(ScriptedSensor {
                readings: readings.to_vec(),
            }),
            broken: false,
        }
    }

    pub fn without_sensor() -> Self {
        Self::default()
    }

    /// A provider whose sensor runtime cannot start
    pub fn broken() -> Self {
        Self {
            sensor: None,
            broken: true,
        }
    }
}

impl SensorProvider for ScriptedProvider {
    type Sensor = ScriptedSensor;

    fn default_sensor(&self) -> Result<Option<ScriptedSensor>, SensorError> {
        if self.broken {
            return Err(SensorError::Runtime("RPC_E_CHANGED_MODE".to_string()));
        }
        Ok(self.sensor.clone())
    }
}
