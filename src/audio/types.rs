//! Audio-related small types.
//!
//! Play modes, the events an engine can raise and the coarse player state
//! the controller moves through.

use crate::config::PlayModeSetting;

/// Highest volume step the output accepts.
pub const MAX_VOLUME: u8 = 21;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlayMode {
    /// Play the canonical playlist in order, wrapping at the end.
    #[default]
    LoopAll,
    /// Play the shuffled view in order, wrapping at the end.
    Random,
    /// Reserved. Plays like `LoopAll`.
    SingleLoop,
}

impl PlayMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::LoopAll => "Loop All",
            Self::Random => "Random",
            Self::SingleLoop => "Single Loop",
        }
    }
}

impl From<PlayModeSetting> for PlayMode {
    fn from(setting: PlayModeSetting) -> Self {
        match setting {
            PlayModeSetting::LoopAll => Self::LoopAll,
            PlayModeSetting::Random => Self::Random,
            PlayModeSetting::SingleLoop => Self::SingleLoop,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The stream that was playing ran to its end.
    EndOfStream,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    PlayingMusic,
    PlayingSystemSound,
}
