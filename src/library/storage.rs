//! The storage capability the playlist is built from.
//!
//! `Storage` is the card as the player sees it: a mount step and a flat
//! directory listing. `FsStorage` maps it onto a host directory.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage root {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("failed to access storage root {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

pub trait Storage {
    /// Bring the medium up. Failure is fatal for the session.
    fn mount(&mut self) -> Result<(), StorageError>;

    /// List the direct children of `dir`. A missing directory yields an
    /// empty listing.
    fn enumerate(&self, dir: &str) -> Vec<DirEntry>;
}

/// Storage backed by a host directory standing in for the card root.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a logical card path (`/music/a.mp3`) onto the host filesystem.
    pub fn resolve(&self, logical: &str) -> PathBuf {
        resolve_under(&self.root, logical)
    }
}

pub(crate) fn resolve_under(root: &Path, logical: &str) -> PathBuf {
    let relative = logical.trim_start_matches('/');
    if relative.is_empty() {
        root.to_path_buf()
    } else {
        root.join(relative)
    }
}

impl Storage for FsStorage {
    fn mount(&mut self) -> Result<(), StorageError> {
        let meta = fs::metadata(&self.root).map_err(|source| StorageError::Io {
            path: self.root.clone(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(StorageError::NotADirectory(self.root.clone()));
        }
        debug!(root = %self.root.display(), "storage mounted");
        Ok(())
    }

    fn enumerate(&self, dir: &str) -> Vec<DirEntry> {
        let path = self.resolve(dir);
        if !path.is_dir() {
            warn!(dir, "failed to open directory");
            return Vec::new();
        }

        // Sorted so repeated scans of an unchanged card agree.
        WalkDir::new(&path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                Some(DirEntry {
                    name,
                    is_dir: entry.file_type().is_dir(),
                })
            })
            .collect()
    }
}
