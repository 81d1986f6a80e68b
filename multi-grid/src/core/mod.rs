//! Core types for MultiGrid.
//!
//! - [`GridSize`]: extent of the grid along each dimension
//! - [`CellId`]: integer address of a single cell
//! - [`GridLayout`]: bounds checking and mixed-radix linearization
//!
//! ## Storage Order
//!
//! Cells are linearized with dimension 0 varying fastest:
//!
//! ```text
//! grid_size = [3, 2]
//!
//!   dim 1
//!     1 │ 3  4  5
//!     0 │ 0  1  2
//!       └─────────
//!         0  1  2   dim 0
//! ```

mod layout;

pub use layout::GridLayout;

/// Number of cells along each dimension.
pub type GridSize<const D: usize> = [usize; D];

/// Integer coordinate of a cell, one component per dimension.
pub type CellId<const D: usize> = [usize; D];
