// src/store.rs
//
// Snapshot persistence. One JSON file per source, always holding a complete
// snapshot of the last known state; the file is replaced wholesale, never
// patched.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use serde::{Serialize, de::DeserializeOwned};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::WatchError;

/// Load a snapshot. A missing file is a first run, not an error; a present
/// but undecodable file is a `Format` error.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>, WatchError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no snapshot yet");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    let records = serde_json::from_str(&text).map_err(|source| WatchError::Format {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(records))
}

/// Replace the snapshot. Records are written pretty-printed (UTF-8,
/// non-ASCII literal) to a temp file in the target directory, then renamed
/// over the destination, so a partial write never passes for a snapshot.
pub fn save<T: Serialize>(path: &Path, records: &[T]) -> Result<(), WatchError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(records).map_err(io::Error::other)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.persist(path).map_err(|e| WatchError::Io(e.error))?;

    debug!(path = %path.display(), records = records.len(), "snapshot written");
    Ok(())
}
