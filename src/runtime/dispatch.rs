use tracing::info;

use crate::audio::{Engine, PlayMode, PlaybackController};
use crate::config::AudioSettings;
use crate::input::Action;
use crate::library::Storage;
use crate::power::BatteryStatusSource;

/// Route one button action to the controller.
pub fn dispatch<E, S, B>(
    action: Action,
    controller: &mut PlaybackController<E, S>,
    battery: &mut B,
    audio: &AudioSettings,
) where
    E: Engine,
    S: Storage,
    B: BatteryStatusSource,
{
    info!(%action, "button");
    let step = i32::from(audio.volume_step);
    match action {
        Action::Play => controller.play_pause(),
        Action::Next => controller.next(),
        Action::Prev => controller.prev(),
        Action::VolUp => controller.change_volume(step),
        Action::VolDown => controller.change_volume(-step),
        Action::HackClick => {
            let status = battery.status();
            info!(%status, "battery status");
            controller.play_system_sound(&status.sound_file());
        }
        Action::HackLong => {
            let mode = match controller.get_play_mode() {
                PlayMode::Random => PlayMode::LoopAll,
                PlayMode::LoopAll | PlayMode::SingleLoop => PlayMode::Random,
            };
            controller.set_play_mode(mode);
        }
    }
}
