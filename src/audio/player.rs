use std::path::PathBuf;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::debug;

use crate::library::resolve_under;

use super::engine::{Engine, EngineError};
use super::sink::create_sink;
use super::types::{EngineEvent, MAX_VOLUME};

/// `Engine` backed by the default `rodio` output device.
///
/// One `Sink` per stream. A sink that drains while unpaused is reported as
/// end-of-stream exactly once and then dropped.
pub struct RodioEngine {
    stream: OutputStream,
    root: PathBuf,
    sink: Option<Sink>,
    gain: f32,
}

impl RodioEngine {
    /// Open the default output device; logical paths resolve beneath `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| EngineError::Output(e.to_string()))?;
        // rodio logs to stderr when the stream is dropped.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            root: root.into(),
            sink: None,
            gain: 1.0,
        })
    }
}

/// Map a `0..=MAX_VOLUME` step onto rodio's linear gain.
pub(crate) fn volume_to_gain(volume: u8) -> f32 {
    f32::from(volume.min(MAX_VOLUME)) / f32::from(MAX_VOLUME)
}

impl Engine for RodioEngine {
    fn start(&mut self, path: &str) -> Result<(), EngineError> {
        if let Some(old) = self.sink.take() {
            old.stop();
        }

        let sink = create_sink(&self.stream, &resolve_under(&self.root, path), path)?;
        sink.set_volume(self.gain);
        sink.play();
        self.sink = Some(sink);
        debug!(path, "stream started");
        Ok(())
    }

    fn pause_resume(&mut self) {
        if let Some(sink) = &self.sink {
            if sink.is_paused() {
                sink.play();
            } else {
                sink.pause();
            }
        }
    }

    fn is_paused(&self) -> bool {
        self.sink.as_ref().is_some_and(|s| s.is_paused())
    }

    fn is_running(&self) -> bool {
        self.sink
            .as_ref()
            .is_some_and(|s| !s.is_paused() && !s.empty())
    }

    fn set_volume(&mut self, volume: u8) {
        self.gain = volume_to_gain(volume);
        if let Some(sink) = &self.sink {
            sink.set_volume(self.gain);
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn poll(&mut self) -> Option<EngineEvent> {
        let drained = self
            .sink
            .as_ref()
            .is_some_and(|s| !s.is_paused() && s.empty());
        if drained {
            self.sink = None;
            return Some(EngineEvent::EndOfStream);
        }
        None
    }
}
