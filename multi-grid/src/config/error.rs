//! Configuration loading errors.

use std::path::PathBuf;

/// Config load error
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// Config file could not be read
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        /// File being loaded
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for [`MultiGridConfig`](super::MultiGridConfig)
    #[error("Failed to parse config {path:?}: {source}")]
    Parse {
        /// File being loaded
        path: PathBuf,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// In-memory YAML document is invalid
    #[error("Invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
