//! Audio module: the playback controller and the engine it drives.
//!
//! `controller` holds the play-state machine, `engine` the capability it
//! consumes, and `player` + `sink` the `rodio` implementation of that
//! capability.

mod controller;
mod engine;
mod player;
mod sink;
mod types;

pub use controller::PlaybackController;
pub use engine::{Engine, EngineError};
pub use player::RodioEngine;
pub use types::*;
