//! Error types for MultiGrid

use crate::config::ConfigLoadError;

/// Result type alias
pub type Result<T> = std::result::Result<T, GridError>;

/// MultiGrid error types
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Grid shape rejected at construction (zero extent, no dimensions,
    /// cell count overflow or dimensionality mismatch).
    #[error("Invalid grid dimension: {0}")]
    InvalidDimension(String),

    /// Cell id outside the grid bounds
    #[error("Cell {cell:?} is out of range for grid size {grid_size:?}")]
    OutOfRange {
        /// Offending cell id
        cell: Vec<usize>,
        /// Grid extent along each dimension
        grid_size: Vec<usize>,
    },

    /// Query issued while the compressed layout is stale
    #[error("Grid is not compressed")]
    NotCompressed,

    /// Compression buffers could not be reserved
    #[error("Allocation failed while compressing {entries} entries")]
    AllocationFailed {
        /// Number of buffered entries at the time of the failure
        entries: usize,
    },

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigLoadError),
}
