//! Event loop between the sensor callback and the applier.
//!
//! The sensor callback runs on a runtime-owned thread and only forwards
//! readings through an [`EventSender`]. The thread calling [`Listener::run`]
//! applies them one after another until it sees [`Event::Shutdown`] or every
//! sender is gone.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::applier::{Applier, Outcome};
use crate::display::DisplayBackend;
use crate::sensor::SensorOrientation;
use crate::settings::SettingsStore;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Event {
    Orientation(SensorOrientation),
    Shutdown,
}

/// Cloneable handle feeding the listener
#[derive(Debug, Clone)]
pub struct EventSender(Sender<Event>);

impl EventSender {
    /// Returns `false` once the listener has stopped
    pub fn orientation_changed(&self, orientation: SensorOrientation) -> bool {
        self.0.send(Event::Orientation(orientation)).is_ok()
    }

    pub fn shutdown(&self) -> bool {
        self.0.send(Event::Shutdown).is_ok()
    }
}

/// Counters collected while listening
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ListenerStats {
    pub events: usize,
    pub applied: usize,
    pub skipped: usize,
    pub failed: usize,
    pub ignored: usize,
}

#[derive(Debug)]
pub struct Listener {
    sender: Sender<Event>,
    receiver: Receiver<Event>,
}

impl Default for Listener {
    fn default() -> Self {
        Self::new()
    }
}

impl Listener {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    pub fn sender(&self) -> EventSender {
        EventSender(self.sender.clone())
    }

    /// Blocks until shutdown, applying every orientation change
    pub fn run<S: SettingsStore, D: DisplayBackend>(self, applier: &Applier<S, D>) -> ListenerStats {
        let Listener { sender, receiver } = self;
        drop(sender);

        let mut stats = ListenerStats::default();
        for event in receiver {
            match event {
                Event::Orientation(orientation) => {
                    stats.events += 1;
                    handle(applier, orientation, &mut stats);
                }
                Event::Shutdown => {
                    log::info!("Shutdown requested");
                    break;
                }
            }
        }

        stats
    }
}

fn handle<S: SettingsStore, D: DisplayBackend>(
    applier: &Applier<S, D>,
    orientation: SensorOrientation,
    stats: &mut ListenerStats,
) {
    let Some(target) = orientation.display_target() else {
        log::trace!("Ignoring sensor reading: {}", orientation);
        stats.ignored += 1;
        return;
    };

    match applier.apply(target) {
        Ok(Outcome::Applied { to, .. }) => {
            log::info!("Sensor {}: display set to {}", orientation, to);
            stats.applied += 1;
        }
        Ok(Outcome::Skipped(reason)) => {
            log::debug!("Sensor {}: not rotating, {}", orientation, reason);
            stats.skipped += 1;
        }
        Err(err) => {
            log::warn!("Sensor {}: rotating to {} failed: {:?}", orientation, target, err);
            stats.failed += 1;
        }
    }
}
