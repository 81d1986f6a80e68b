//! Multi-dimensional grid with any number of payloads per cell.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │          add(cell_id, payload)              │
//! └──────────────────────┬──────────────────────┘
//!                        ▼
//!             ┌─────────────────────┐
//!             │  Raw log            │  insertion order
//!             │  (data + cell ids)  │
//!             └──────────┬──────────┘
//!                        │ compress()
//!                        │   1. count per cell
//!                        │   2. exclusive prefix sum
//!                        │   3. stable scatter
//!                        ▼
//!             ┌─────────────────────┐
//!             │  Compressed layout  │  one run per cell
//!             └──────────┬──────────┘
//!                        ▼
//!             enumerate_data(cell_id) -> &[T]
//! ```
//!
//! Compression costs O(N + C) for N entries and C cells. Queries are O(1).
//!
//! ## Example
//!
//! ```rust
//! use multi_grid::MultiGrid;
//!
//! let mut grid = MultiGrid::new([2, 2])?;
//! grid.add([0, 0], "a")?;
//! grid.add([1, 1], "b")?;
//! grid.add([0, 0], "c")?;
//! grid.compress()?;
//!
//! assert_eq!(grid.enumerate_data([0, 0])?, &["a", "c"]);
//! assert!(grid.enumerate_data([1, 0])?.is_empty());
//! # Ok::<(), multi_grid::GridError>(())
//! ```

mod storage;

pub use storage::{CompressStats, MultiGrid};
