//! Library module: turns a directory listing into the playlist the
//! controller plays from.
//!
//! `storage` is the card capability, `scan` filters a listing down to
//! playable tracks and `playlist` keeps the canonical and shuffled lists.

mod model;
mod playlist;
mod scan;
mod storage;

pub use model::Track;
pub use playlist::PlaylistStore;
pub use storage::{DirEntry, FsStorage, Storage, StorageError};
pub(crate) use storage::resolve_under;
