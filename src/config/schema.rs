use std::path::PathBuf;

use serde::Deserialize;

/// Top-level player settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/hackpod/config.toml` or `~/.config/hackpod/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `HACKPOD__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub audio: AudioSettings,
    pub playback: PlaybackSettings,
    pub battery: BatterySettings,
    pub input: InputSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Host directory standing in for the card root. Logical paths such as
    /// `/music/a.mp3` resolve beneath it.
    pub root: PathBuf,
    /// Logical directory scanned for music.
    pub music_dir: String,
    /// Logical directory holding system prompts (`bv00.wav` ...).
    pub system_dir: String,
    /// File extensions to treat as playable (case-insensitive, without dot).
    pub extensions: Vec<String>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            music_dir: "/music".to_string(),
            system_dir: "/system".to_string(),
            extensions: vec!["mp3".into(), "wav".into()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume applied at startup, `0..=21`.
    pub default_volume: u8,
    /// Amount added or removed by one press of the volume buttons.
    pub volume_step: u8,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            default_volume: 15,
            volume_step: 1,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Play mode in effect when the player starts.
    pub mode: PlayModeSetting,
}

#[derive(Debug, Copy, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayModeSetting {
    #[default]
    #[serde(alias = "loopall", alias = "loop_all", alias = "loop")]
    LoopAll,
    #[serde(alias = "shuffle")]
    Random,
    #[serde(
        alias = "singleloop",
        alias = "single_loop",
        alias = "loop-one",
        alias = "repeat-one"
    )]
    SingleLoop,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BatterySettings {
    /// Voltage reported as 0%.
    pub min_volt: f32,
    /// Voltage reported as 100%.
    pub max_volt: f32,
    /// ADC readings averaged per measurement.
    pub samples: u32,
    /// Top resistor of the battery divider (ohms).
    pub divider_r1: f32,
    /// Bottom resistor of the battery divider (ohms).
    pub divider_r2: f32,
    pub adc_reference_voltage: f32,
    pub adc_max_reading: f32,
    /// Battery voltage fed to the simulated ADC on hosts without one.
    pub simulated_voltage: f32,
}

impl Default for BatterySettings {
    fn default() -> Self {
        Self {
            min_volt: 3.30,
            max_volt: 4.20,
            samples: 50,
            divider_r1: 100_000.0,
            divider_r2: 200_000.0,
            adc_reference_voltage: 3.3,
            adc_max_reading: 4095.0,
            simulated_voltage: 3.9,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// How long one input poll waits for a key before the loop ticks again.
    pub poll_interval_ms: u64,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` overrides it.
    pub filter: String,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}
