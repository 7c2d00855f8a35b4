use std::fmt;

/// A playable file, addressed by its logical path on the card
/// (`directory + "/" + name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Track {
    path: String,
}

impl Track {
    pub fn new(dir: &str, name: &str) -> Self {
        Self {
            path: format!("{}/{}", dir.trim_end_matches('/'), name),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
