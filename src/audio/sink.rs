//! Utilities for creating `rodio` sinks from card files.
//!
//! The helper here encapsulates opening and decoding a file and attaching
//! it to a fresh `Sink` on the output mixer.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

use super::engine::EngineError;

/// Create a playing `Sink` for the file at `file`; `path` is the logical
/// name used in errors.
pub(super) fn create_sink(
    stream: &OutputStream,
    file: &Path,
    path: &str,
) -> Result<Sink, EngineError> {
    let reader = File::open(file).map_err(|source| EngineError::Open {
        path: path.to_string(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(reader)).map_err(|e| EngineError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    Ok(sink)
}
