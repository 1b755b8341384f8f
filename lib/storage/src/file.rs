use crate::codec::empty_collection;
use atomicwrites::{AtomicFile, OverwriteBehavior};
use graphlite_core::{Error, Result};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Read a JSON file.
///
/// A missing, empty or unparsable file reads as an empty collection, so a
/// fresh install starts with no graphs instead of an error.
pub fn read_json<P: AsRef<Path>>(path: P) -> Value {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "store file not readable, starting empty");
            return empty_collection();
        }
    };

    if content.trim().is_empty() {
        return empty_collection();
    }

    serde_json::from_str(&content).unwrap_or_else(|e| {
        debug!(path = %path.display(), error = %e, "store file is not valid JSON, starting empty");
        empty_collection()
    })
}

/// Write `value` as pretty-printed JSON, replacing any existing file.
///
/// The content goes to a temporary file in the same directory first and is
/// renamed into place, so a crash never leaves a half-written store.
pub fn write_json<P: AsRef<Path>>(path: P, value: &Value) -> Result<()> {
    let path = path.as_ref();
    let data = serde_json::to_vec_pretty(value).map_err(|e| Error::Serialization(e.to_string()))?;

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    AtomicFile::new_with_tmpdir(path, OverwriteBehavior::AllowOverwrite, dir)
        .write(|f| f.write_all(&data))
        .map_err(|e| match e {
            atomicwrites::Error::Internal(e) | atomicwrites::Error::User(e) => Error::Io(e),
        })?;
    Ok(())
}
