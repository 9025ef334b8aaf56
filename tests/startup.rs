mod common;

use common::{FakeDisplay, MemoryStore, ScriptedProvider, init_logger};
use rotatez::{
    Applier, AutoRotationSettings, DisplayMode, EXIT_NO_SENSOR, EXIT_SENSOR_ERROR, Listener,
    ListenerStats, Orientation, Resolution, SensorOrientation, StartupError, service,
};

fn landscape() -> DisplayMode {
    DisplayMode::new(Resolution::new(1920, 1080), Orientation::Landscape)
}

#[test]
fn test_missing_sensor_exits_without_writes() {
    init_logger();

    let store = MemoryStore::with_flags(true, false);
    let display = FakeDisplay::new(landscape());

    let result = service::start(
        &ScriptedProvider::without_sensor(),
        store.clone(),
        display.clone(),
        Listener::new(),
    );

    let err = result.unwrap_err();
    assert!(matches!(err, StartupError::NoSensor));
    assert_eq!(err.exit_code(), 1);
    assert!(store.writes().is_empty());
    assert!(display.commits().is_empty());
}

#[test]
fn test_sensor_failure_has_its_own_exit_code() {
    let store = MemoryStore::with_flags(true, false);

    let result = service::start(
        &ScriptedProvider::broken(),
        store.clone(),
        FakeDisplay::new(landscape()),
        Listener::new(),
    );

    let err = result.unwrap_err();
    assert!(matches!(err, StartupError::Sensor(_)));
    assert_eq!(err.exit_code(), EXIT_SENSOR_ERROR);
    assert_ne!(err.exit_code(), EXIT_NO_SENSOR);
    assert!(store.writes().is_empty());
}

#[test]
fn test_startup_announces_sensor_and_applies_readings() {
    init_logger();

    let store = MemoryStore::with_flags(true, false);
    let display = FakeDisplay::new(landscape());
    let provider = ScriptedProvider::with_readings(&[
        SensorOrientation::NotRotated,
        SensorOrientation::FaceUp,
        SensorOrientation::Rotated90DegreesCounterclockwise,
    ]);

    let stats = service::start(&provider, store.clone(), display.clone(), Listener::new()).unwrap();

    assert_eq!(store.writes(), vec![("SensorPresent".to_string(), 1)]);
    assert!(AutoRotationSettings::read(&store).unwrap().sensor_present);
    assert_eq!(
        stats,
        ListenerStats {
            events: 3,
            applied: 2,
            skipped: 0,
            failed: 0,
            ignored: 1,
        }
    );
    assert_eq!(
        display.mode(),
        DisplayMode::new(Resolution::new(1920, 1080), Orientation::LandscapeFlipped)
    );
}

#[test]
fn test_startup_without_settings_still_listens() {
    let store = MemoryStore::unavailable();
    let display = FakeDisplay::new(landscape());
    let provider = ScriptedProvider::with_readings(&[SensorOrientation::NotRotated]);

    let stats = service::start(&provider, store, display.clone(), Listener::new()).unwrap();

    assert_eq!(stats.skipped, 1);
    assert_eq!(display.mode(), landscape());
}

#[test]
fn test_listener_stops_on_shutdown() {
    let display = FakeDisplay::new(landscape());
    let applier = Applier::new(MemoryStore::with_flags(true, true), display.clone());
    let listener = Listener::new();
    let sender = listener.sender();

    sender.orientation_changed(SensorOrientation::Rotated180DegreesCounterclockwise);
    sender.shutdown();
    // Never seen, the listener stops at the shutdown
    sender.orientation_changed(SensorOrientation::NotRotated);

    let stats = listener.run(&applier);

    assert_eq!(stats.events, 1);
    assert_eq!(stats.skipped, 1);
    assert!(display.commits().is_empty());
}

#[test]
fn test_listener_stops_when_senders_are_gone() {
    let display = FakeDisplay::new(landscape());
    let applier = Applier::new(MemoryStore::with_flags(true, false), display.clone());
    let listener = Listener::new();

    {
        let sender = listener.sender();
        sender.orientation_changed(SensorOrientation::NotRotated);
    }

    let stats = listener.run(&applier);

    assert_eq!(stats.applied, 1);
    assert_eq!(
        display.mode(),
        DisplayMode::new(Resolution::new(1080, 1920), Orientation::Portrait)
    );
}

#[test]
fn test_sender_reports_stopped_listener() {
    let listener = Listener::new();
    let sender = listener.sender();
    drop(listener);

    assert!(!sender.orientation_changed(SensorOrientation::NotRotated));
    assert!(!sender.shutdown());
}
