use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use crate::audio::{PlaybackController, RodioEngine};
use crate::error::Error;
use crate::input::{KeyboardInput, key_help};
use crate::library::FsStorage;
use crate::power::{BatteryMonitor, SimulatedAdc};

mod dispatch;
mod event_loop;
mod settings;
mod startup;

pub fn run() -> Result<(), Error> {
    let (mut settings, problems) = settings::load_settings();
    if let Some(root) = env::args().nth(1) {
        settings.storage.root = PathBuf::from(root);
    }

    startup::init_logging(&settings.logging);
    for problem in &problems {
        warn!("{problem}");
    }

    let storage = FsStorage::new(&settings.storage.root);
    info!(root = %storage.root().display(), "using storage root");
    let engine = RodioEngine::open(&settings.storage.root)?;

    let mut controller = PlaybackController::new(engine, storage, &settings);
    if controller.begin().is_err() {
        warn!("continuing without a playlist");
    }

    let mut battery = BatteryMonitor::new(
        SimulatedAdc::from_voltage(settings.battery.simulated_voltage, &settings.battery),
        settings.battery.clone(),
    );

    let mut input = KeyboardInput::new(Duration::from_millis(settings.input.poll_interval_ms))?;
    info!("{}", key_help());

    event_loop::run(&mut controller, &mut input, &mut battery, &settings)?;
    Ok(())
}

#[cfg(test)]
mod tests;
