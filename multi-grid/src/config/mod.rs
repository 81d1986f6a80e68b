//! Configuration loading for MultiGrid.
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   size: [128, 128, 32]   # cells along each dimension
//!   capacity_hint: 100000  # entries to pre-allocate for
//! ```
//!
//! ```rust,ignore
//! use multi_grid::config::MultiGridConfig;
//!
//! let config = MultiGridConfig::load_default()?;
//! let grid: MultiGrid<3, u32> = config.build()?;
//! ```

mod defaults;
mod error;
mod grid;
mod multi_grid;

pub use error::ConfigLoadError;
pub use grid::GridSection;
pub use multi_grid::{DEFAULT_CONFIG_PATH, MultiGridConfig};
