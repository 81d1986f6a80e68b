//! Grid storage implementation for the multi grid.
//!
//! ## Memory Layout
//!
//! ```text
//! Raw log (insertion order):
//!   data:      [a    b    c   ]
//!   cell_ids:  [0,0  1,1  0,0 ]
//!
//! Compressed (grouped by storage id):
//!   counts:    [2 0 0 1]
//!   offsets:   [0 2 2 2]
//!   data:      [a c b]
//! ```
//!
//! ## Key Types
//!
//! - [`MultiGrid`]: raw log, compression and cell queries
//! - [`CompressStats`]: summary of a compressed layout

mod core;
mod types;

pub use self::core::MultiGrid;
pub use types::CompressStats;
