use std::io::Write;

use camino::Utf8Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::help::HelpText;
use crate::{Error, template};

/// Atomically replace the file at `path` with `data`.
///
/// The data is written to a temporary file in the destination directory and
/// renamed over the destination, so no reader ever observes a partially
/// written document.
pub fn write_atomic<P: AsRef<Utf8Path>>(path: P, data: &str) -> crate::Result<()> {
    let path = path.as_ref();
    // temp file must live in the destination directory so the rename never
    // crosses filesystems
    let dir = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)
        .map_err(|e| Error::Write(format!("failed creating temporary file in {dir}: {e}")))?;
    file.write_all(data.as_bytes())
        .map_err(|e| Error::Write(format!("failed writing {path}: {e}")))?;
    file.persist(path)
        .map_err(|e| Error::Write(format!("failed replacing {path}: {e}")))?;

    debug!("wrote {path}");
    Ok(())
}

/// Capture help output via `command` and overwrite `path` with the rendered
/// README document.
///
/// The document is fully rendered in memory before any write is attempted,
/// so a capture failure leaves the destination untouched.
pub fn generate<I, S, P>(command: I, path: P) -> crate::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: AsRef<Utf8Path>,
{
    let help = HelpText::capture(command)?;
    write_atomic(path, &template::render(&help))
}
