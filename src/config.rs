//! Defines the configuration types for a run.
//!
//! This module consolidates the settings parsed and validated from the
//! CLI (or supplied programmatically through the builders), making them
//! available to the discovery, collection, and writing stages in a
//! structured and type-safe manner.

use crate::cli::Cli;
use crate::constants::{DEFAULT_EXTENSION, DEFAULT_FILENAME};
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Configuration of the collection stage, immutable once built.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Relative path of the generated manifest.
    pub filename: String,
    /// Replacement extension applied to every collected path, with its
    /// leading dot.
    pub extension: String,
    /// Optional prefix prepended (with a separator) to every collected path.
    pub prefix: Option<String>,
    /// When `true`, entries pair each path with its containing directory.
    pub directory: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        CollectorConfig {
            filename: DEFAULT_FILENAME.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            prefix: None,
            directory: false,
        }
    }
}

/// Fluent builder for [`CollectorConfig`].
///
/// # Examples
///
/// ```
/// use folder_index::config::CollectorConfigBuilder;
///
/// let config = CollectorConfigBuilder::new()
///     .filename("sitemap.json")
///     .extension(".html")
///     .prefix("docs")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.filename, "sitemap.json");
/// assert_eq!(config.extension, ".html");
/// ```
#[derive(Debug, Default, Clone)]
pub struct CollectorConfigBuilder {
    filename: Option<String>,
    extension: Option<String>,
    prefix: Option<String>,
    directory: bool,
}

impl CollectorConfigBuilder {
    /// Creates a builder with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the manifest filename.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Sets the replacement extension (leading dot required).
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Sets the path prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Enables or disables directory grouping.
    pub fn directory(mut self, directory: bool) -> Self {
        self.directory = directory;
        self
    }

    /// Validates the settings and builds the config.
    pub fn build(self) -> Result<CollectorConfig> {
        let filename = self.filename.unwrap_or_else(|| DEFAULT_FILENAME.to_string());
        if filename.is_empty() {
            return Err(Error::Config("Manifest filename must not be empty".into()));
        }

        let extension = self
            .extension
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        if !extension.starts_with('.') {
            return Err(Error::Config(format!(
                "Extension '{}' must start with a dot",
                extension
            )));
        }

        // The collector inserts the separator itself.
        let prefix = match self.prefix {
            Some(p) => {
                let trimmed = p.trim_end_matches('/').to_string();
                if trimmed.is_empty() {
                    return Err(Error::Config("Prefix must not be empty".into()));
                }
                Some(trimmed)
            }
            None => None,
        };

        Ok(CollectorConfig {
            filename,
            extension,
            prefix,
            directory: self.directory,
        })
    }
}

/// Configuration for a full run: discovery, collection, and writing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the directory walk.
    pub input_path: PathBuf,
    /// Destination directory the manifest is anchored to and written under.
    pub dest: PathBuf,
    /// File extensions (lowercase, no dot) to include during discovery.
    /// `None` means every regular file is included.
    pub extensions: Option<Vec<String>>,
    /// Whether to respect `.gitignore`, `.ignore`, and other VCS ignore files.
    pub use_gitignore: bool,
    /// Settings of the collection stage.
    pub collector: CollectorConfig,
}

/// Fluent builder for [`Config`].
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    input_path: Option<PathBuf>,
    dest: Option<PathBuf>,
    extensions: Option<Vec<String>>,
    no_gitignore: bool,
    collector: CollectorConfigBuilder,
}

impl ConfigBuilder {
    /// Creates a builder with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the builder from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        let mut collector = CollectorConfigBuilder::new()
            .filename(cli.filename)
            .extension(cli.extension)
            .directory(cli.directory);
        if let Some(prefix) = cli.prefix {
            collector = collector.prefix(prefix);
        }

        let mut builder = ConfigBuilder::new()
            .input_path(cli.input_path)
            .dest(cli.dest)
            .no_gitignore(cli.no_gitignore)
            .collector(collector);
        if let Some(extensions) = cli.extensions {
            builder = builder.extensions(extensions);
        }
        builder
    }

    /// Sets the walk root.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Sets the destination directory.
    pub fn dest(mut self, dest: impl Into<PathBuf>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    /// Sets the discovery extension filter.
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// Disables (or re-enables) VCS ignore handling.
    pub fn no_gitignore(mut self, no_gitignore: bool) -> Self {
        self.no_gitignore = no_gitignore;
        self
    }

    /// Sets the collection-stage settings.
    pub fn collector(mut self, collector: CollectorConfigBuilder) -> Self {
        self.collector = collector;
        self
    }

    /// Validates the settings and builds the config.
    ///
    /// The input path must exist; the extension filter is normalized to
    /// lowercase without leading dots.
    pub fn build(self) -> Result<Config> {
        let input_path = self.input_path.unwrap_or_else(|| PathBuf::from("."));
        if !input_path.exists() {
            return Err(Error::Config(format!(
                "Input path '{}' does not exist",
                input_path.display()
            )));
        }

        Ok(Config {
            input_path,
            dest: self.dest.unwrap_or_else(|| PathBuf::from(".")),
            extensions: self.extensions.map(normalize_extensions),
            use_gitignore: !self.no_gitignore,
            collector: self.collector.build()?,
        })
    }
}

/// Lowercases extensions and strips any leading dot, so `YML`, `.yml`,
/// and `yml` all match the same files.
fn normalize_extensions(extensions: Vec<String>) -> Vec<String> {
    extensions
        .into_iter()
        .map(|e| e.trim_start_matches('.').to_lowercase())
        .collect()
}
