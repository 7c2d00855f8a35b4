//! The playlist store: the canonical track list plus its shuffled view.
//!
//! Both lists are rebuilt together on every scan, so they always hold the same
//! multiset of tracks. Which one is "current" is decided per access by
//! [`PlaylistStore::active_list`].

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::audio::PlayMode;

use super::model::Track;
use super::scan::scan;
use super::storage::Storage;

pub struct PlaylistStore {
    playlist: Vec<Track>,
    shuffled: Vec<Track>,
    rng: StdRng,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Build a store whose shuffles come from `rng` (seed it for repeatable orders).
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            playlist: Vec::new(),
            shuffled: Vec::new(),
            rng,
        }
    }

    /// Replace both lists with the playable files under `dir` and reshuffle.
    /// Returns the number of tracks found.
    pub fn scan<S: Storage + ?Sized>(
        &mut self,
        storage: &S,
        dir: &str,
        extensions: &[String],
    ) -> usize {
        self.playlist.clear();
        self.shuffled.clear();

        self.playlist = scan(storage, dir, extensions);
        info!(count = self.playlist.len(), dir, "loaded tracks");

        self.reshuffle();
        self.playlist.len()
    }

    /// Recompute the shuffled view as a fresh permutation of the playlist.
    pub fn reshuffle(&mut self) {
        self.shuffled = self.playlist.clone();
        if !self.shuffled.is_empty() {
            self.shuffled.shuffle(&mut self.rng);
            debug!("playlist shuffled");
        }
    }

    /// The list `mode` plays from: the shuffled view in `Random` mode (unless
    /// it is empty), the canonical playlist otherwise.
    pub fn active_list(&self, mode: PlayMode) -> &[Track] {
        if mode == PlayMode::Random && !self.shuffled.is_empty() {
            &self.shuffled
        } else {
            &self.playlist
        }
    }

    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    pub fn shuffled(&self) -> &[Track] {
        &self.shuffled
    }

    /// Index of `track` in the canonical playlist.
    pub fn position_of(&self, track: &Track) -> Option<usize> {
        self.playlist.iter().position(|t| t == track)
    }

    pub fn len(&self) -> usize {
        self.playlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(playlist: Vec<Track>, shuffled: Vec<Track>) -> Self {
        Self {
            playlist,
            shuffled,
            rng: StdRng::seed_from_u64(0),
        }
    }
}

impl Default for PlaylistStore {
    fn default() -> Self {
        Self::new()
    }
}
