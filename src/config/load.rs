use std::{env, path::PathBuf};

use crate::audio::MAX_VOLUME;

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `HACKPOD__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("HACKPOD")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.audio.default_volume > MAX_VOLUME {
            return Err(format!("audio.default_volume must be <= {MAX_VOLUME}"));
        }
        if self.storage.extensions.is_empty() {
            return Err("storage.extensions must not be empty".to_string());
        }
        let battery = &self.battery;
        if battery.max_volt <= battery.min_volt {
            return Err("battery.max_volt must be greater than battery.min_volt".to_string());
        }
        if battery.samples == 0 {
            return Err("battery.samples must be >= 1".to_string());
        }
        if battery.divider_r2 <= 0.0 {
            return Err("battery.divider_r2 must be > 0".to_string());
        }
        if battery.adc_max_reading <= 0.0 {
            return Err("battery.adc_max_reading must be > 0".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `HACKPOD_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("HACKPOD_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/hackpod/config.toml`
/// or `~/.config/hackpod/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("hackpod").join("config.toml"))
}
