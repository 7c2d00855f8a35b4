use crate::config;

/// Load settings, falling back to defaults on any problem. Problems are
/// returned as messages because logging is not up yet.
pub fn load_settings() -> (config::Settings, Vec<String>) {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                (
                    config::Settings::default(),
                    vec![format!("invalid config, using defaults: {msg}")],
                )
            } else {
                (s, Vec::new())
            }
        }
        // Config is optional; failures should not prevent the player from starting.
        Err(e) => (
            config::Settings::default(),
            vec![format!("failed to load config, using defaults: {e}")],
        ),
    }
}
