// src/constants.rs

/// Default relative path of the generated manifest.
pub const DEFAULT_FILENAME: &str = "index.json";

/// Default replacement extension applied to every collected path.
pub const DEFAULT_EXTENSION: &str = ".json";
