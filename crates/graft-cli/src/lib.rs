//! Library half of the `graft` command: configuration, a file-backed
//! document source and the end-to-end import pipeline.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod source;

pub use config::{GraftConfig, CONFIG_FILE};
pub use error::{CliError, Result};
pub use pipeline::{ensure_valid, extract_tokens, run, write_files, ImportRequest};
pub use source::{FileSource, LoadedDocument};
