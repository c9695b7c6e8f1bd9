//! Writes a buffered record to its destination on disk.
//!
//! This is the sink end of the pipeline: the manifest produced by the
//! collector is anchored under its `cwd`, and this module materializes it
//! there, creating intermediate directories as needed.

use crate::errors::{io_error_with_path, Error, Result};
use crate::record::{Contents, FileRecord};
use std::fs;

/// Writes `record`'s buffered contents to `record.path`.
///
/// Only buffered records can be written; null or streaming contents here
/// indicate a logic error upstream.
pub fn write_record(record: &FileRecord) -> Result<()> {
    let bytes = match &record.contents {
        Contents::Buffer(bytes) => bytes,
        Contents::Null => return Err(Error::NullFile),
        Contents::Stream(_) => return Err(Error::UnsupportedStream),
    };

    if let Some(parent) = record.path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))?;
    }
    fs::write(&record.path, bytes).map_err(|e| io_error_with_path(e, &record.path))?;

    log::debug!("Wrote {} ({} bytes)", record.path.display(), bytes.len());
    Ok(())
}
