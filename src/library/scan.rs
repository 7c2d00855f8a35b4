use tracing::debug;

use super::model::Track;
use super::storage::Storage;

/// Suffix match, so a file named just `.mp3` still counts.
fn is_audio_file(name: &str, extensions: &[String]) -> bool {
    let name = name.to_ascii_lowercase();
    extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.'))
        .filter(|e| !e.is_empty())
        .any(|e| name.ends_with(&format!(".{}", e.to_ascii_lowercase())))
}

/// List the playable files directly under `dir`, in enumeration order.
pub fn scan<S: Storage + ?Sized>(storage: &S, dir: &str, extensions: &[String]) -> Vec<Track> {
    storage
        .enumerate(dir)
        .into_iter()
        .filter(|entry| !entry.is_dir && is_audio_file(&entry.name, extensions))
        .map(|entry| {
            let track = Track::new(dir, &entry.name);
            debug!(track = %track, "found");
            track
        })
        .collect()
}
