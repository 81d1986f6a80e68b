//! Main MultiGridConfig and loading methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::MultiGrid;

use super::error::ConfigLoadError;
use super::grid::GridSection;

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/multi_grid.yaml";

/// Full MultiGrid configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiGridConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSection,
}

impl MultiGridConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from default config path (configs/multi_grid.yaml)
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Build an empty grid with these settings
    pub fn build<const D: usize, T>(&self) -> Result<MultiGrid<D, T>> {
        MultiGrid::from_config(&self.grid)
    }
}
