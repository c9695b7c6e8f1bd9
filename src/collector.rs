//! The path-collection core: folds a sequence of file records into one
//! generated manifest record.
//!
//! A [`PathCollector`] is created once per run, fed records in arrival
//! order via [`PathCollector::observe`], and consumed exactly once by
//! [`PathCollector::finish`]. Observing a null or streaming record is a
//! terminal failure: the collector refuses everything afterwards,
//! including finalization, so a bad file anywhere in the sequence voids
//! the manifest rather than being silently skipped.

use crate::config::CollectorConfig;
use crate::errors::{Error, Result};
use crate::record::{Contents, FileRecord, IndexEntry};
use std::path::PathBuf;

/// Stateful sequential processor reducing many input records to one
/// manifest record.
///
/// # Examples
///
/// ```
/// use folder_index::collector::PathCollector;
/// use folder_index::config::CollectorConfig;
/// use folder_index::record::{Contents, FileRecord};
/// use std::path::PathBuf;
///
/// let mut collector = PathCollector::new(CollectorConfig::default());
/// collector
///     .observe(&FileRecord {
///         path: PathBuf::from("/docs/guide.yml"),
///         base: PathBuf::from("/docs"),
///         cwd: PathBuf::from("/out"),
///         contents: Contents::Buffer(Vec::new()),
///     })
///     .unwrap();
///
/// let manifest = collector.finish().unwrap();
/// assert_eq!(manifest.path, PathBuf::from("/out/index.json"));
/// assert_eq!(manifest.buffer(), Some(&br#"["guide.json"]"#[..]));
/// ```
#[derive(Debug)]
pub struct PathCollector {
    config: CollectorConfig,
    /// Working directory of the first observed record, whatever its
    /// content classification; anchors the generated manifest.
    first_cwd: Option<PathBuf>,
    index: Vec<IndexEntry>,
    failed: bool,
}

impl PathCollector {
    /// Creates a collector with the given configuration.
    pub fn new(config: CollectorConfig) -> Self {
        PathCollector {
            config,
            first_cwd: None,
            index: Vec::new(),
            failed: false,
        }
    }

    /// Number of entries collected so far.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Processes one record in arrival order.
    ///
    /// Buffered records contribute exactly one entry to the index, in
    /// observation order. Null and streaming records return
    /// [`Error::NullFile`] or [`Error::UnsupportedStream`] and poison the
    /// collector; every later call (including `finish`) returns
    /// [`Error::Terminated`]. The driving loop is expected to stop at the
    /// first error via `?`.
    pub fn observe(&mut self, file: &FileRecord) -> Result<()> {
        if self.failed {
            return Err(Error::Terminated);
        }

        if self.first_cwd.is_none() {
            self.first_cwd = Some(file.cwd.clone());
        }

        match &file.contents {
            Contents::Null => {
                self.failed = true;
                Err(Error::NullFile)
            }
            Contents::Stream(_) => {
                self.failed = true;
                Err(Error::UnsupportedStream)
            }
            Contents::Buffer(_) => {
                let entry = self.transform(file);
                log::debug!("Collected entry: {:?}", entry);
                self.index.push(entry);
                Ok(())
            }
        }
    }

    /// Finalizes the collector, producing the manifest record.
    ///
    /// Must be called exactly once, after the input sequence ends and only
    /// if no terminal failure occurred. Returns [`Error::EmptyIndex`] when
    /// nothing was collected.
    pub fn finish(self) -> Result<FileRecord> {
        if self.failed {
            return Err(Error::Terminated);
        }
        if self.index.is_empty() {
            return Err(Error::EmptyIndex);
        }

        // A non-empty index implies at least one record was observed.
        let cwd = self.first_cwd.ok_or(Error::EmptyIndex)?;
        let body = serde_json::to_vec(&self.index)?;

        log::info!("Generated {}", self.config.filename);

        Ok(FileRecord {
            path: cwd.join(&self.config.filename),
            base: cwd.clone(),
            cwd,
            contents: Contents::Buffer(body),
        })
    }

    /// Applies the path transform to one buffered record.
    ///
    /// Strips the record's base, prepends the configured prefix, swaps the
    /// final extension segment, and optionally pairs the result with its
    /// containing directory.
    fn transform(&self, file: &FileRecord) -> IndexEntry {
        let relative = file.path.strip_prefix(&file.base).unwrap_or(&file.path);

        // Manifest entries always use forward slashes.
        let mut path = relative.to_string_lossy().replace('\\', "/");

        if let Some(prefix) = &self.config.prefix {
            path = format!("{}/{}", prefix, path);
        }

        path = swap_extension(&path, &self.config.extension);

        if self.config.directory {
            let directory = match path.rfind('/') {
                Some(i) => path[..=i].to_string(),
                None => String::new(),
            };
            IndexEntry::Grouped { directory, path }
        } else {
            IndexEntry::Path(path)
        }
    }
}

/// Replaces the last extension of the final path segment with `extension`
/// (which carries its leading dot).
///
/// A segment without an extension gets `extension` appended; a leading dot
/// (dotfiles like `.gitignore`) does not count as an extension.
fn swap_extension(path: &str, extension: &str) -> String {
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);
    let segment = &path[segment_start..];

    match segment.rfind('.').filter(|&i| i > 0) {
        Some(i) => format!("{}{}", &path[..segment_start + i], extension),
        None => format!("{}{}", path, extension),
    }
}
