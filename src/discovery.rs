//! Produces the input sequence for the collector.
//!
//! Walks the configured input directory with `ignore`'s walker (so
//! `.gitignore` and friends are honored), keeps regular files that pass
//! the extension filter, and buffers each one into a [`FileRecord`].

use crate::config::Config;
use crate::errors::{io_error_with_path, Result};
use crate::record::{Contents, FileRecord};
use ignore::WalkBuilder;
use log::debug;
use std::fs;
use std::path::Path;

/// Walks `config.input_path` and returns buffered records, sorted by path
/// for deterministic manifests.
///
/// Each record's `base` is the walk root and its `cwd` is the configured
/// destination directory, so the collector anchors the manifest there.
pub fn discover(config: &Config) -> Result<Vec<FileRecord>> {
    let walker = build_walker(config);

    let mut records = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        // Directories, symlinks, and other non-regular entries do not
        // contribute to the index.
        if !entry.file_type().map_or(false, |ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if !matches_extension_filter(path, config.extensions.as_deref()) {
            debug!("Filtered out by extension: {}", path.display());
            continue;
        }

        let contents = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
        records.push(FileRecord {
            path: path.to_path_buf(),
            base: config.input_path.clone(),
            cwd: config.dest.clone(),
            contents: Contents::Buffer(contents),
        });
    }

    records.sort_by(|a, b| a.path.cmp(&b.path));
    debug!("Discovered {} file(s)", records.len());
    Ok(records)
}

/// Configures the `ignore::WalkBuilder` from the run settings.
fn build_walker(config: &Config) -> ignore::Walk {
    let mut builder = WalkBuilder::new(&config.input_path);
    builder.standard_filters(config.use_gitignore);
    // Process .gitignore files even outside a full git repository.
    builder.require_git(false);
    builder.build()
}

/// Whether `path` passes the (lowercase, dotless) extension allow-list.
fn matches_extension_filter(path: &Path, extensions: Option<&[String]>) -> bool {
    let Some(extensions) = extensions else {
        return true;
    };
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|allowed| allowed == &e.to_lowercase()))
        .unwrap_or(false)
}
