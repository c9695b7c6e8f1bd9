//! Defines core data structures used throughout the pipeline.
//!
//! `FileRecord` is the unit flowing between the discovery, collection, and
//! writing stages; `IndexEntry` is the shape of one element of the
//! generated manifest.

use serde::Serialize;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;

/// The content classification of a [`FileRecord`].
///
/// Exactly one classification holds at a time; the collector branches on
/// it. `Stream` exists so that producers handing over live readers are
/// representable, even though the collector rejects them on sight.
pub enum Contents {
    /// No content representation at all.
    Null,
    /// Fully buffered, in-memory content.
    Buffer(Vec<u8>),
    /// An open readable stream. Never consumed by this crate.
    Stream(Box<dyn Read + Send>),
}

impl fmt::Debug for Contents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contents::Null => write!(f, "Null"),
            Contents::Buffer(bytes) => write!(f, "Buffer({} bytes)", bytes.len()),
            Contents::Stream(_) => write!(f, "Stream(..)"),
        }
    }
}

/// Represents one file moving through the pipeline.
///
/// Discovery produces these with buffered contents; the collector consumes
/// a sequence of them and emits exactly one more (the manifest) on
/// success.
///
/// # Examples
///
/// ```
/// use folder_index::record::{Contents, FileRecord};
/// use std::path::PathBuf;
///
/// let record = FileRecord {
///     path: PathBuf::from("/project/docs/index.yml"),
///     base: PathBuf::from("/project/docs"),
///     cwd: PathBuf::from("/project"),
///     contents: Contents::Buffer(b"title: home".to_vec()),
/// };
///
/// assert!(record.is_buffer());
/// ```
#[derive(Debug)]
pub struct FileRecord {
    /// Absolute (or pipeline-relative) path of the file.
    pub path: PathBuf,
    /// The base directory `path` is considered relative to.
    pub base: PathBuf,
    /// Working-directory context, used to anchor the generated manifest.
    pub cwd: PathBuf,
    /// The file's content, in one of three classifications.
    pub contents: Contents,
}

impl FileRecord {
    /// Whether this record carries no content.
    pub fn is_null(&self) -> bool {
        matches!(self.contents, Contents::Null)
    }

    /// Whether this record carries fully buffered content.
    pub fn is_buffer(&self) -> bool {
        matches!(self.contents, Contents::Buffer(_))
    }

    /// Whether this record carries an open stream.
    pub fn is_stream(&self) -> bool {
        matches!(self.contents, Contents::Stream(_))
    }

    /// The buffered bytes, if this record is buffered.
    pub fn buffer(&self) -> Option<&[u8]> {
        match &self.contents {
            Contents::Buffer(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// One element of the generated manifest array.
///
/// Serialized untagged: a plain string by default, or a two-key object
/// when directory grouping is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IndexEntry {
    /// The transformed relative path.
    Path(String),
    /// The transformed path paired with its containing directory.
    Grouped {
        /// Containing directory, up to and including the final separator.
        directory: String,
        /// The transformed relative path.
        path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn record_with(contents: Contents) -> FileRecord {
        FileRecord {
            path: PathBuf::from("/base/a.yml"),
            base: PathBuf::from("/base"),
            cwd: PathBuf::from("/"),
            contents,
        }
    }

    #[test]
    fn test_classification_predicates_are_exclusive() {
        let null = record_with(Contents::Null);
        assert!(null.is_null() && !null.is_buffer() && !null.is_stream());

        let buffer = record_with(Contents::Buffer(vec![1, 2, 3]));
        assert!(buffer.is_buffer() && !buffer.is_null() && !buffer.is_stream());
        assert_eq!(buffer.buffer(), Some(&[1u8, 2, 3][..]));

        let stream = record_with(Contents::Stream(Box::new(Cursor::new(vec![0u8]))));
        assert!(stream.is_stream() && !stream.is_null() && !stream.is_buffer());
        assert!(stream.buffer().is_none());
    }

    #[test]
    fn test_entry_serializes_as_plain_string() {
        let entry = IndexEntry::Path("nested/index.json".to_string());
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#""nested/index.json""#
        );
    }

    #[test]
    fn test_grouped_entry_serializes_as_object() {
        let entry = IndexEntry::Grouped {
            directory: "nested/a/".to_string(),
            path: "nested/a/index.json".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"directory":"nested/a/","path":"nested/a/index.json"}"#
        );
    }
}
