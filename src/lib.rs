//! Playback-control core of a button-driven portable audio player.
//!
//! The [`audio::PlaybackController`] owns the play position, play mode,
//! volume and system-sound interruption; [`library::PlaylistStore`] owns the
//! track list and its shuffled view. Both run on one cooperative poll loop
//! (see [`runtime`]) fed by an [`audio::Engine`] and an [`input::InputSource`].

pub mod audio;
pub mod config;
pub mod error;
pub mod input;
pub mod library;
pub mod power;
pub mod runtime;

#[cfg(test)]
pub(crate) mod testing;
