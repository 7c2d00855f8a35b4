//! Test doubles for the player's capabilities: an engine that records the
//! commands it receives, an in-memory card and a scripted button source.

use std::collections::{HashMap, VecDeque};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::audio::{Engine, EngineError, EngineEvent, PlaybackController};
use crate::config::Settings;
use crate::input::{InputError, InputEvent, InputSource};
use crate::library::{DirEntry, PlaylistStore, Storage, StorageError, Track};
use crate::power::{BatteryStatus, BatteryStatusSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Start(String),
    PauseResume,
    SetVolume(u8),
    Stop,
}

#[derive(Debug, Default)]
pub struct FakeEngine {
    pub calls: Vec<EngineCall>,
    pub running: bool,
    pub paused: bool,
    pub volume: u8,
    pub pending: VecDeque<EngineEvent>,
    /// Paths whose `start` fails as if the file could not be decoded.
    pub broken: Vec<String>,
}

impl FakeEngine {
    pub fn started(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                EngineCall::Start(p) => Some(p.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_started(&self) -> Option<&str> {
        self.started().last().copied()
    }

    /// Simulate the current stream draining; the next `poll` reports it.
    pub fn finish_stream(&mut self) {
        self.running = false;
        self.paused = false;
        self.pending.push_back(EngineEvent::EndOfStream);
    }
}

impl Engine for FakeEngine {
    fn start(&mut self, path: &str) -> Result<(), EngineError> {
        self.calls.push(EngineCall::Start(path.to_string()));
        if self.broken.iter().any(|b| b == path) {
            self.running = false;
            return Err(EngineError::Decode {
                path: path.to_string(),
                reason: "broken fixture".to_string(),
            });
        }
        self.running = true;
        self.paused = false;
        Ok(())
    }

    fn pause_resume(&mut self) {
        self.calls.push(EngineCall::PauseResume);
        if self.running || self.paused {
            self.paused = !self.paused;
            self.running = !self.paused;
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn set_volume(&mut self, volume: u8) {
        self.calls.push(EngineCall::SetVolume(volume));
        self.volume = volume;
    }

    fn stop(&mut self) {
        self.calls.push(EngineCall::Stop);
        self.running = false;
        self.paused = false;
    }

    fn poll(&mut self) -> Option<EngineEvent> {
        self.pending.pop_front()
    }
}

/// A card held in memory: directory path -> listing.
#[derive(Debug, Clone)]
pub struct MemStorage {
    pub mountable: bool,
    pub dirs: HashMap<String, Vec<DirEntry>>,
}

impl MemStorage {
    pub fn with_music(names: &[&str]) -> Self {
        let mut dirs = HashMap::new();
        dirs.insert(
            "/music".to_string(),
            names.iter().map(|n| DirEntry::file(*n)).collect(),
        );
        Self {
            mountable: true,
            dirs,
        }
    }

    pub fn unmountable() -> Self {
        Self {
            mountable: false,
            dirs: HashMap::new(),
        }
    }

    pub fn set_music(&mut self, names: &[&str]) {
        self.dirs.insert(
            "/music".to_string(),
            names.iter().map(|n| DirEntry::file(*n)).collect(),
        );
    }
}

impl Storage for MemStorage {
    fn mount(&mut self) -> Result<(), StorageError> {
        if self.mountable {
            Ok(())
        } else {
            Err(StorageError::NotADirectory("/sdcard".into()))
        }
    }

    fn enumerate(&self, dir: &str) -> Vec<DirEntry> {
        self.dirs.get(dir).cloned().unwrap_or_default()
    }
}

/// Replays a fixed sequence of button names, then asks to quit.
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn from_names(names: &[&str]) -> Self {
        let events = names
            .iter()
            .map(|n| InputEvent::Action(n.parse().expect("known action name")))
            .collect();
        Self { events }
    }

    pub fn from_events(events: &[InputEvent]) -> Self {
        Self {
            events: events.iter().copied().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<Option<InputEvent>, InputError> {
        Ok(Some(self.events.pop_front().unwrap_or(InputEvent::Quit)))
    }
}

pub struct FixedBattery(pub BatteryStatus);

impl BatteryStatusSource for FixedBattery {
    fn status(&mut self) -> BatteryStatus {
        self.0
    }
}

pub fn track(name: &str) -> Track {
    Track::new("/music", name)
}

pub fn seeded_store() -> PlaylistStore {
    PlaylistStore::with_rng(StdRng::seed_from_u64(7))
}

/// A controller over an in-memory card holding `names`, not yet started.
pub fn controller(names: &[&str]) -> PlaybackController<FakeEngine, MemStorage> {
    PlaybackController::with_store(
        FakeEngine::default(),
        MemStorage::with_music(names),
        seeded_store(),
        &Settings::default(),
    )
}
