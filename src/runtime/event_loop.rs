use tracing::info;

use crate::audio::{Engine, PlaybackController};
use crate::config;
use crate::input::{InputError, InputEvent, InputSource};
use crate::library::Storage;
use crate::power::BatteryStatusSource;

use super::dispatch::dispatch;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One loop iteration: tick the engine (which may finish a stream), then
/// take at most one input event. Each handler runs to completion before the
/// next one starts.
pub fn step<E, S, I, B>(
    controller: &mut PlaybackController<E, S>,
    input: &mut I,
    battery: &mut B,
    settings: &config::Settings,
) -> Result<Flow, InputError>
where
    E: Engine,
    S: Storage,
    I: InputSource,
    B: BatteryStatusSource,
{
    controller.tick();

    match input.poll()? {
        Some(InputEvent::Action(action)) => {
            dispatch(action, controller, battery, &settings.audio);
            Ok(Flow::Continue)
        }
        Some(InputEvent::Rescan) => {
            info!("rescan requested");
            controller.rescan();
            Ok(Flow::Continue)
        }
        Some(InputEvent::Quit) => Ok(Flow::Quit),
        None => Ok(Flow::Continue),
    }
}

/// Run the poll loop until the input source asks to quit.
pub fn run<E, S, I, B>(
    controller: &mut PlaybackController<E, S>,
    input: &mut I,
    battery: &mut B,
    settings: &config::Settings,
) -> Result<(), InputError>
where
    E: Engine,
    S: Storage,
    I: InputSource,
    B: BatteryStatusSource,
{
    loop {
        if step(controller, input, battery, settings)? == Flow::Quit {
            info!("quit requested");
            return Ok(());
        }
    }
}
