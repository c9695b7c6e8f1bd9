// src/cli.rs

use clap::Parser;

/// Generates a JSON manifest of the file paths found under a directory.
///
/// folder-index recursively walks a directory (respecting .gitignore
/// rules), records each discovered file's relative path with its extension
/// swapped, and writes the collected paths to a single JSON array, the way
/// static-site pipelines publish a navigable index of their content files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the directory to index.
    #[arg(default_value = ".")]
    pub input_path: String,

    /// Relative filename of the generated manifest.
    #[arg(short = 'o', long, value_name = "FILE", default_value = "index.json")]
    pub filename: String,

    /// Replacement extension applied to every collected path (leading dot required).
    #[arg(short = 'E', long, value_name = "EXT", default_value = ".json")]
    pub extension: String,

    /// Prefix prepended, with a separator, to every collected path.
    #[arg(short = 'p', long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Emit {directory, path} objects instead of plain path strings.
    #[arg(short = 'd', long, action = clap::ArgAction::SetTrue)]
    pub directory: bool,

    /// Include only files with these extensions (case-insensitive, repeatable).
    #[arg(short = 'e', long = "ext", value_name = "EXT", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Do not respect .gitignore, .ignore, or other VCS ignore files.
    #[arg(short = 't', long, action = clap::ArgAction::SetTrue)]
    pub no_gitignore: bool,

    /// Directory the manifest is written under.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dest: String,
}
