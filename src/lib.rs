//! `folder-index` is a library and command-line tool that walks a
//! directory tree and generates a single JSON manifest of the discovered
//! file paths.
//!
//! It mirrors the shape of a build-pipeline stage: an upstream producer
//! yields file records, a sequential collector accumulates each record's
//! transformed relative path, and end-of-input triggers the emission of
//! exactly one manifest record, which a sink writes to disk. Static-site
//! pipelines use the result as a navigable index of their content files.
//!
//! As a library, it provides a modular, three-stage pipeline:
//! 1.  **Discover**: Walk the input directory (respecting .gitignore) and
//!     buffer matching files into records.
//! 2.  **Collect**: Fold the records through a [`PathCollector`],
//!     transforming each path and accumulating them in arrival order.
//! 3.  **Write**: Materialize the manifest record at its destination.
//!
//! # Example: Library Usage
//!
//! ```
//! use folder_index::{collect, discover, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a directory with some content files.
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("index.yml"), "title: home").unwrap();
//! fs::create_dir(temp_dir.path().join("guides")).unwrap();
//! fs::write(temp_dir.path().join("guides/faq.yml"), "title: faq").unwrap();
//!
//! // 2. Build a Config programmatically.
//! let config = ConfigBuilder::new()
//!     .input_path(temp_dir.path())
//!     .dest(temp_dir.path())
//!     .build()
//!     .unwrap();
//!
//! // 3. Run the first two stages and inspect the manifest in memory.
//! let records = discover(&config).unwrap();
//! let manifest = collect(records, config.collector.clone()).unwrap();
//!
//! let body = String::from_utf8(manifest.buffer().unwrap().to_vec()).unwrap();
//! assert_eq!(body, r#"["guides/faq.json","index.json"]"#);
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod record;
pub mod writer;

// Re-export key public types for easier use as a library
pub use collector::PathCollector;
pub use config::{CollectorConfig, CollectorConfigBuilder, Config, ConfigBuilder};
pub use errors::{Error, Result};
pub use record::{Contents, FileRecord, IndexEntry};

/// Discovers files based on the provided configuration.
///
/// This is the first stage of the pipeline. It walks the filesystem
/// according to the rules in the `Config` (respecting .gitignore and the
/// extension filter) and returns fully buffered records, sorted by path.
pub fn discover(config: &Config) -> Result<Vec<FileRecord>> {
    discovery::discover(config)
}

/// Folds a sequence of records through a [`PathCollector`].
///
/// This is the second stage of the pipeline. The fold stops at the first
/// terminal error and never finalizes after one; on success it returns
/// the single manifest record.
pub fn collect<I>(records: I, config: CollectorConfig) -> Result<FileRecord>
where
    I: IntoIterator<Item = FileRecord>,
{
    let mut collector = PathCollector::new(config);
    for record in records {
        collector.observe(&record)?;
    }
    collector.finish()
}

/// Executes the complete pipeline: discover, collect, and write.
///
/// This is the primary entry point for running the tool's logic
/// programmatically in a way that mirrors the command-line execution.
///
/// # Returns
/// `Ok(())` on success. Returns [`Error::EmptyIndex`] when nothing was
/// collected; other errors are propagated from the underlying stages.
pub fn run(config: &Config) -> Result<()> {
    let records = discover(config)?;
    let manifest = collect(records, config.collector.clone())?;
    writer::write_record(&manifest)
}
