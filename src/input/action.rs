use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The button actions the player understands, named as the button layer
/// delivers them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    Play,
    Next,
    Prev,
    VolUp,
    VolDown,
    /// Short press of the hack button: announce the battery level.
    HackClick,
    /// Long press of the hack button: switch play mode.
    HackLong,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Play,
        Action::Next,
        Action::Prev,
        Action::VolUp,
        Action::VolDown,
        Action::HackClick,
        Action::HackLong,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Play => "PLAY",
            Self::Next => "NEXT",
            Self::Prev => "PREV",
            Self::VolUp => "VOLUP",
            Self::VolDown => "VOLDOWN",
            Self::HackClick => "HACK_CLICK",
            Self::HackLong => "HACK_LONG",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Action(Action),
    /// Re-read the music directory (host only).
    Rescan,
    /// Leave the poll loop (host only; the device never quits).
    Quit,
}
