//! Reading and writing the JSON data files
//!
//! Every write goes through a temp file followed by a rename, so a crash
//! mid-write can never leave a half-written accounts file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BancoError;

/// Read a JSON file into `T`; a missing file yields `T::default()`
///
/// A first run has no data files yet, so absence is not an error. A file
/// that exists but fails to parse is.
pub fn read_json<T, P>(path: P) -> Result<T, BancoError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| BancoError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| BancoError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Serialize `data` as JSON and replace the file at `path` atomically
///
/// The observable file is either the previous version or the complete new
/// one, never anything in between.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BancoError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BancoError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // The temp file must live next to the target: rename is only atomic
    // within one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| BancoError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| BancoError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| BancoError::Storage(format!("Failed to flush data: {}", e)))?;

    // The content has to hit the disk before the rename makes it visible
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BancoError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BancoError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
