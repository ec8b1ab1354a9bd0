//! Error type shared by lesson loading and indexing.

use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SlovarError {
  #[error("failed to read {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to parse {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },

  /// A row may expand variants on one side only.
  #[error("both slovensko and italiano cannot be variant lists in row {0}")]
  BothVariants(String),

  #[error("no vocabulary entries to quiz on")]
  EmptyVocabulary,
}
