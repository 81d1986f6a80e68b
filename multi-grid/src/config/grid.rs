//! Grid configuration section.

use serde::{Deserialize, Serialize};

use crate::core::GridSize;
use crate::error::{GridError, Result};

use super::defaults;

/// Grid configuration section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSection {
    /// Number of cells along each dimension
    #[serde(default = "defaults::grid_size")]
    pub size: Vec<usize>,

    /// Entries to reserve buffers for (performance only)
    #[serde(default = "defaults::capacity_hint")]
    pub capacity_hint: usize,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            size: defaults::grid_size(),
            capacity_hint: defaults::capacity_hint(),
        }
    }
}

impl GridSection {
    /// Convert the configured size to a fixed `D`-dimensional grid size.
    ///
    /// Only the dimensionality is checked here; extents are validated when
    /// the grid is built.
    pub fn grid_size<const D: usize>(&self) -> Result<GridSize<D>> {
        <GridSize<D>>::try_from(self.size.as_slice()).map_err(|_| {
            GridError::InvalidDimension(format!(
                "configured size {:?} has {} dimensions, expected {}",
                self.size,
                self.size.len(),
                D
            ))
        })
    }
}
