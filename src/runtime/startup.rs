use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Install the global `tracing` subscriber. `RUST_LOG` wins over the
/// configured filter; a configured file receives the log instead of stderr.
pub fn init_logging(settings: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let Some(path) = settings.file.as_ref() else {
        let _ = builder.with_writer(raw_stderr).try_init();
        return;
    };

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        Err(e) => {
            let _ = builder.with_writer(raw_stderr).try_init();
            warn!(path = %path.display(), "failed to open log file: {e}");
        }
    }
}

fn raw_stderr() -> CrlfWriter<io::Stderr> {
    CrlfWriter(io::stderr())
}

/// Raw mode disables output post-processing, so a bare `\n` no longer
/// returns the cursor to column 0.
pub(crate) struct CrlfWriter<W>(pub(crate) W);

impl<W: Write> Write for CrlfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut start = 0;
        for (i, b) in buf.iter().enumerate() {
            if *b == b'\n' {
                self.0.write_all(&buf[start..i])?;
                self.0.write_all(b"\r\n")?;
                start = i + 1;
            }
        }
        self.0.write_all(&buf[start..])?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
