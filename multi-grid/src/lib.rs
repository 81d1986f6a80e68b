//! # MultiGrid
//!
//! Multi-dimensional spatial bucketing: group any number of payloads by an
//! integer cell address, then enumerate a cell's payloads in O(1).
//!
//! ## Overview
//!
//! A [`MultiGrid`] has a fixed shape chosen at construction. Payloads are
//! appended to an insertion log with [`MultiGrid::add`]. A call to
//! [`MultiGrid::compress`] runs a counting sort that places every cell's
//! payloads into one contiguous run, after which
//! [`MultiGrid::enumerate_data`] returns a cell's payloads as a slice.
//!
//! - Cells are addressed by `[usize; D]`, dimension 0 varying fastest
//! - Payloads of a cell keep their insertion order
//! - Any `add` or `clear` invalidates the compressed layout
//!
//! ## Quick Start
//!
//! ```rust
//! use multi_grid::{GridError, MultiGrid};
//!
//! let mut grid: MultiGrid<3, u32> = MultiGrid::with_capacity([16, 16, 16], 1000)?;
//!
//! grid.add([1, 2, 3], 7)?;
//! grid.add([1, 2, 3], 9)?;
//! assert!(matches!(grid.enumerate_data([1, 2, 3]), Err(GridError::NotCompressed)));
//!
//! grid.compress()?;
//! assert_eq!(grid.enumerate_data([1, 2, 3])?, &[7, 9]);
//! # Ok::<(), GridError>(())
//! ```
//!
//! ## Threading
//!
//! The grid has no internal synchronization. Mutating methods take
//! `&mut self`, so sharing one grid between threads needs an external lock.

#![warn(missing_docs)]

// Grid shape and cell addressing
pub mod core;

// Raw log, compression and cell queries
pub mod grid;

// YAML configuration
pub mod config;

// Error types
pub mod error;

// Re-export commonly used types
pub use crate::core::{CellId, GridLayout, GridSize};

pub use grid::{CompressStats, MultiGrid};

pub use config::{ConfigLoadError, GridSection, MultiGridConfig};

pub use error::{GridError, Result};
