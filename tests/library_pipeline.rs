// tests/library_pipeline.rs
//
// Exercises the library API directly, including the record
// classifications a directory walk can never produce (null and stream
// contents come from programmatic producers).

use folder_index::{
    collect, CollectorConfig, CollectorConfigBuilder, Contents, Error, FileRecord, PathCollector,
};
use std::io::Cursor;
use std::path::PathBuf;

fn buffered(path: &str) -> FileRecord {
    FileRecord {
        path: PathBuf::from("/site/content").join(path),
        base: PathBuf::from("/site/content"),
        cwd: PathBuf::from("/site"),
        contents: Contents::Buffer(b"body".to_vec()),
    }
}

#[test]
fn test_collect_produces_manifest_record() {
    let records = vec![buffered("index.yml"), buffered("about/team.yml")];

    let manifest = collect(records, CollectorConfig::default()).unwrap();

    assert_eq!(manifest.path, PathBuf::from("/site/index.json"));
    assert_eq!(manifest.base, PathBuf::from("/site"));
    assert_eq!(manifest.cwd, PathBuf::from("/site"));
    assert_eq!(
        manifest.buffer(),
        Some(&br#"["index.json","about/team.json"]"#[..])
    );
}

#[test]
fn test_collect_empty_sequence_is_empty_index() {
    let result = collect(Vec::new(), CollectorConfig::default());
    assert!(matches!(result, Err(Error::EmptyIndex)));
}

#[test]
fn test_null_record_voids_prior_collection() {
    let mut collector = PathCollector::new(CollectorConfig::default());
    collector.observe(&buffered("index.yml")).unwrap();
    collector.observe(&buffered("faq.yml")).unwrap();
    assert_eq!(collector.len(), 2);

    let null = FileRecord {
        path: PathBuf::from("/site/content/ghost.yml"),
        base: PathBuf::from("/site/content"),
        cwd: PathBuf::from("/site"),
        contents: Contents::Null,
    };
    assert!(matches!(collector.observe(&null), Err(Error::NullFile)));

    // The two valid entries are discarded along with the run.
    assert!(matches!(collector.finish(), Err(Error::Terminated)));
}

#[test]
fn test_stream_record_voids_prior_collection() {
    let mut collector = PathCollector::new(CollectorConfig::default());
    collector.observe(&buffered("index.yml")).unwrap();

    let stream = FileRecord {
        path: PathBuf::from("/site/content/live.yml"),
        base: PathBuf::from("/site/content"),
        cwd: PathBuf::from("/site"),
        contents: Contents::Stream(Box::new(Cursor::new(b"live".to_vec()))),
    };
    assert!(matches!(
        collector.observe(&stream),
        Err(Error::UnsupportedStream)
    ));
    assert!(matches!(collector.finish(), Err(Error::Terminated)));
}

#[test]
fn test_directory_grouped_collection() {
    let config = CollectorConfigBuilder::new()
        .directory(true)
        .build()
        .unwrap();
    let records = vec![buffered("nested/a/index.yml")];

    let manifest = collect(records, config).unwrap();
    assert_eq!(
        manifest.buffer(),
        Some(&br#"[{"directory":"nested/a/","path":"nested/a/index.json"}]"#[..])
    );
}
