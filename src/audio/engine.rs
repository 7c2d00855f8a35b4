use thiserror::Error;

use super::types::EngineEvent;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("no audio output device: {0}")]
    Output(String),
}

/// The decoding/streaming engine the controller drives.
///
/// Paths are logical card paths; the engine resolves them against its own
/// view of storage. Starting a stream replaces whatever was playing.
pub trait Engine {
    fn start(&mut self, path: &str) -> Result<(), EngineError>;
    fn pause_resume(&mut self);
    fn is_paused(&self) -> bool;
    /// True while a stream is actively producing audio (not paused, not drained).
    fn is_running(&self) -> bool;
    /// `volume` is in `0..=MAX_VOLUME`.
    fn set_volume(&mut self, volume: u8);
    /// Abandon the current stream. Never raises `EndOfStream`.
    fn stop(&mut self);
    /// Advance the engine's own state machine and report what happened.
    fn poll(&mut self) -> Option<EngineEvent>;
}
