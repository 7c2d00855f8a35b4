//! The playback controller.
//!
//! Owns the play position, the play mode, the volume and the system-sound
//! flag, and is the only place any of them change. Every transport
//! operation completes synchronously; outcomes are reported through the log
//! and never returned to the caller.

use tracing::{debug, error, info, warn};

use crate::config::Settings;
use crate::library::{PlaylistStore, Storage, StorageError, Track};

use super::engine::Engine;
use super::types::{EngineEvent, MAX_VOLUME, PlayMode, PlayerState};

pub struct PlaybackController<E, S> {
    engine: E,
    storage: S,
    store: PlaylistStore,
    music_dir: String,
    system_dir: String,
    extensions: Vec<String>,
    mounted: bool,

    current: Option<usize>,
    mode: PlayMode,
    volume: u8,
    system_sound_active: bool,
    state: PlayerState,
}

impl<E: Engine, S: Storage> PlaybackController<E, S> {
    pub fn new(engine: E, storage: S, settings: &Settings) -> Self {
        Self::with_store(engine, storage, PlaylistStore::new(), settings)
    }

    /// Like [`new`](Self::new) with a caller-provided (e.g. seeded) store.
    pub fn with_store(engine: E, storage: S, store: PlaylistStore, settings: &Settings) -> Self {
        Self {
            engine,
            storage,
            store,
            music_dir: settings.storage.music_dir.clone(),
            system_dir: settings.storage.system_dir.clone(),
            extensions: settings.storage.extensions.clone(),
            mounted: false,
            current: None,
            mode: settings.playback.mode.into(),
            volume: settings.audio.default_volume.min(MAX_VOLUME),
            system_sound_active: false,
            state: PlayerState::Idle,
        }
    }

    /// Mount storage, build the playlist, push the volume and start the
    /// first track. A mount failure ends initialization: nothing is scanned
    /// and nothing plays for the rest of the session.
    pub fn begin(&mut self) -> Result<(), StorageError> {
        if let Err(e) = self.storage.mount() {
            error!("storage mount failed: {e}");
            self.state = PlayerState::Idle;
            return Err(e);
        }
        self.mounted = true;
        info!("storage mounted");

        self.load_playlist();

        self.engine.set_volume(self.volume);
        info!(volume = self.volume, "audio initialized");

        if !self.store.is_empty() {
            self.play_track(0);
        }
        Ok(())
    }

    /// Rebuild the playlist from the music directory. Mode, position and
    /// volume are kept; an idle player with tracks again starts the first one.
    pub fn rescan(&mut self) {
        if !self.mounted {
            warn!("storage is not mounted, rescan skipped");
            return;
        }
        self.load_playlist();

        if self.store.is_empty() {
            if self.state == PlayerState::PlayingMusic {
                self.engine.stop();
                self.state = PlayerState::Idle;
            }
            self.current = None;
            return;
        }
        if self.state == PlayerState::Idle {
            self.play_track(0);
        }
    }

    fn load_playlist(&mut self) {
        self.store
            .scan(&self.storage, &self.music_dir, &self.extensions);
    }

    /// Start the track at `index` of the active list.
    pub fn play_track(&mut self, index: usize) {
        let (len, track) = {
            let list = self.store.active_list(self.mode);
            (list.len(), list.get(index).cloned())
        };

        if len == 0 {
            info!("playlist is empty");
            if !self.system_sound_active {
                self.state = PlayerState::Idle;
            }
            return;
        }
        let Some(track) = track else {
            warn!(index, len, "invalid track index");
            self.current = Some(0);
            return;
        };

        info!(track = %track, index, "playing");
        self.current = Some(index);
        // Music replaces any prompt that was still streaming.
        self.system_sound_active = false;
        match self.engine.start(track.as_str()) {
            Ok(()) => self.state = PlayerState::PlayingMusic,
            Err(e) => {
                error!("failed to start {track}: {e}");
                self.state = PlayerState::Idle;
            }
        }
    }

    /// Move to the following track of the active list, wrapping to the first.
    pub fn advance(&mut self) {
        let len = self.store.active_list(self.mode).len();
        if len == 0 {
            return;
        }
        let next = self.current.map_or(0, |i| (i + 1) % len);
        self.current = Some(next);
        self.play_track(next);
    }

    /// Move to the preceding track of the active list, wrapping to the last.
    pub fn retreat(&mut self) {
        let len = self.store.active_list(self.mode).len();
        if len == 0 {
            return;
        }
        let prev = match self.current {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.current = Some(prev);
        self.play_track(prev);
    }

    pub fn toggle_pause(&mut self) {
        self.engine.pause_resume();
        if self.engine.is_paused() {
            info!("playback paused");
        } else {
            info!("playback resumed");
        }
    }

    /// PLAY button.
    pub fn play_pause(&mut self) {
        self.toggle_pause();
    }

    /// NEXT button.
    pub fn next(&mut self) {
        self.advance();
    }

    /// PREV button.
    pub fn prev(&mut self) {
        self.retreat();
    }

    /// Set the volume, clamped to `0..=MAX_VOLUME`.
    pub fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(0, i32::from(MAX_VOLUME)) as u8;
        self.engine.set_volume(self.volume);
        info!(volume = self.volume, "volume set");
    }

    pub fn change_volume(&mut self, delta: i32) {
        self.set_volume(i32::from(self.volume).saturating_add(delta));
    }

    /// Switch play mode and restart playback from the matching position.
    ///
    /// Entering `Random` reshuffles and starts the new order from the top.
    /// Leaving `Random` re-anchors on the track that was playing, looked up in
    /// the canonical playlist, or the first track when it is gone.
    pub fn set_mode(&mut self, mode: PlayMode) {
        let previous = self.mode;
        self.mode = mode;

        if mode == PlayMode::Random {
            self.store.reshuffle();
            if !self.store.shuffled().is_empty() {
                self.current = Some(0);
                self.play_track(0);
            }
        } else {
            if previous == PlayMode::Random {
                self.current = self.reanchor();
            }
            self.play_track(self.current.unwrap_or(0));
        }

        info!(mode = mode.label(), "play mode set");
    }

    /// `set_mode` under the name the button layer uses.
    pub fn set_play_mode(&mut self, mode: PlayMode) {
        self.set_mode(mode);
    }

    fn reanchor(&self) -> Option<usize> {
        let current = self.current?;
        if self.store.shuffled().is_empty() {
            return Some(current);
        }
        let position = self
            .store
            .shuffled()
            .get(current)
            .and_then(|track| self.store.position_of(track));
        if position.is_none() {
            warn!(index = current, "track not found in playlist, starting from the top");
        }
        Some(position.unwrap_or(0))
    }

    /// Interrupt music with a prompt from the system directory. The music
    /// position is not saved.
    pub fn play_system_sound(&mut self, name: &str) {
        let path = format!("{}/{}", self.system_dir.trim_end_matches('/'), name);

        // Chained prompts replace each other without an extra stop.
        if self.engine.is_running() && !self.system_sound_active {
            self.engine.stop();
        }
        self.system_sound_active = true;
        self.state = PlayerState::PlayingSystemSound;

        info!(path = %path, "playing system sound");
        if let Err(e) = self.engine.start(&path) {
            error!("failed to start system sound: {e}");
            self.system_sound_active = false;
            self.state = PlayerState::Idle;
        }
    }

    /// Route a finished stream: a prompt ends in silence, music moves on.
    pub fn on_end_of_stream(&mut self) {
        debug!("end of stream");
        if self.system_sound_active {
            self.system_sound_active = false;
            self.engine.stop();
            self.state = PlayerState::Idle;
            info!("system sound finished");
        } else {
            self.advance();
        }
    }

    /// Let the engine make progress and handle anything it reports before
    /// returning.
    pub fn tick(&mut self) {
        match self.engine.poll() {
            Some(EngineEvent::EndOfStream) => self.on_end_of_stream(),
            None => {}
        }
    }

    pub fn get_play_mode(&self) -> PlayMode {
        self.mode
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The selected track of the active list, if any.
    pub fn current_track(&self) -> Option<&Track> {
        self.current
            .and_then(|i| self.store.active_list(self.mode).get(i))
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn is_system_sound_active(&self) -> bool {
        self.system_sound_active
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn store(&self) -> &PlaylistStore {
        &self.store
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[cfg(test)]
    pub(crate) fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    #[cfg(test)]
    pub(crate) fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}
