//! Grid storage core implementation.
//!
//! Entries are appended to a raw log and grouped per cell on demand with a
//! three-pass counting sort.

use std::ops::Range;
use std::path::Path;

use log::{debug, trace};

use crate::config::{GridSection, MultiGridConfig};
use crate::core::{CellId, GridLayout, GridSize};
use crate::error::{GridError, Result};

use super::types::{CompressStats, CompressedLayout, RawLog};

/// A `D`-dimensional grid holding any number of payloads per cell.
///
/// Payloads are added with [`add`](Self::add) in any order. Before cells can
/// be queried the grid has to be [`compress`](Self::compress)ed, which sorts
/// the payloads into one contiguous run per cell. Within a cell payloads keep
/// their insertion order.
///
/// ## States
///
/// ```text
///              add / clear
///           ┌──────────────┐
///           ▼              │
///   ┌──────────────┐  compress  ┌────────────┐
///   │ Uncompressed │ ─────────► │ Compressed │ ── enumerate_data
///   └──────────────┘            └────────────┘
/// ```
///
/// Slices returned by the query methods borrow the grid, so they cannot
/// outlive the next `add`, `clear` or `compress`.
#[derive(Clone, Debug)]
pub struct MultiGrid<const D: usize, T> {
    pub(super) layout: GridLayout<D>,
    pub(super) compressed: bool,
    pub(super) raw: RawLog<D, T>,
    pub(super) packed: CompressedLayout<T>,
}

impl<const D: usize, T> MultiGrid<D, T> {
    // === Constructors ===

    /// Create an empty grid.
    pub fn new(grid_size: GridSize<D>) -> Result<Self> {
        Self::with_capacity(grid_size, 0)
    }

    /// Create an empty grid with buffers reserved for `capacity_hint` entries.
    ///
    /// The hint only affects allocation; more entries can always be added.
    /// A hint that cannot be allocated is ignored.
    pub fn with_capacity(grid_size: GridSize<D>, capacity_hint: usize) -> Result<Self> {
        let layout = GridLayout::new(grid_size)?;
        debug!(
            "MultiGrid created: size={:?}, cells={}, capacity_hint={}",
            grid_size,
            layout.num_cells(),
            capacity_hint
        );

        let mut grid = Self {
            layout,
            compressed: false,
            raw: RawLog::new(),
            packed: CompressedLayout::new(layout.num_cells()),
        };
        if !(grid.raw.try_reserve(capacity_hint) && grid.packed.reserve(capacity_hint).is_ok()) {
            debug!("MultiGrid capacity hint {} ignored: allocation failed", capacity_hint);
        }
        Ok(grid)
    }

    /// Create an empty grid from a configuration section.
    ///
    /// Fails with [`GridError::InvalidDimension`] if the configured size does
    /// not have exactly `D` extents.
    pub fn from_config(section: &GridSection) -> Result<Self> {
        let grid_size = section.grid_size::<D>()?;
        Self::with_capacity(grid_size, section.capacity_hint)
    }

    /// Create an empty grid from a YAML configuration file.
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let config = MultiGridConfig::load(path)?;
        Self::from_config(&config.grid)
    }

    // === Basic Properties ===

    /// Grid shape.
    #[inline]
    pub fn layout(&self) -> &GridLayout<D> {
        &self.layout
    }

    /// Number of cells along each dimension.
    #[inline]
    pub fn grid_size(&self) -> &GridSize<D> {
        self.layout.size()
    }

    /// Total number of cells.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.layout.num_cells()
    }

    /// Number of entries added since the last clear.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// True if no entries were added since the last clear.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.len() == 0
    }

    /// True if the compressed layout reflects every added entry.
    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    // === Mutation ===

    /// Add a payload to a cell. Makes the grid uncompressed.
    ///
    /// Fails with [`GridError::OutOfRange`] without modifying the grid if any
    /// component of `cell_id` is outside the grid.
    pub fn add(&mut self, cell_id: CellId<D>, data: T) -> Result<()> {
        self.layout.check(&cell_id)?;
        self.compressed = false;
        self.raw.push(cell_id, data);
        Ok(())
    }

    /// Remove all entries. Makes the grid uncompressed.
    pub fn clear(&mut self) {
        trace!("MultiGrid cleared: dropped {} entries", self.raw.len());
        self.compressed = false;
        self.raw.clear();
    }

    // === Queries ===

    /// Payloads of a cell, in insertion order.
    ///
    /// Requires a compressed grid. Empty cells yield an empty slice.
    pub fn enumerate_data(&self, cell_id: CellId<D>) -> Result<&[T]> {
        let bounds = self.data_bounds(cell_id)?;
        Ok(&self.packed.data[bounds])
    }

    /// Begin/end indices of a cell's run within [`compressed_data`](Self::compressed_data).
    pub fn data_bounds(&self, cell_id: CellId<D>) -> Result<Range<usize>> {
        self.ensure_compressed()?;
        self.layout.check(&cell_id)?;
        Ok(self.packed.run(self.layout.linearize(&cell_id)))
    }

    /// Number of payloads in a cell.
    pub fn cell_count(&self, cell_id: CellId<D>) -> Result<usize> {
        self.data_bounds(cell_id).map(|bounds| bounds.len())
    }

    /// All payloads, grouped by cell in storage id order.
    pub fn compressed_data(&self) -> Result<&[T]> {
        self.ensure_compressed()?;
        Ok(&self.packed.data)
    }

    /// Iterate over every cell with its payloads, in storage id order.
    pub fn iter_cells(&self) -> Result<impl Iterator<Item = (CellId<D>, &[T])> + '_> {
        self.ensure_compressed()?;
        Ok((0..self.layout.num_cells()).filter_map(move |storage_id| {
            let cell_id = self.layout.delinearize(storage_id)?;
            Some((cell_id, &self.packed.data[self.packed.run(storage_id)]))
        }))
    }

    #[inline]
    fn ensure_compressed(&self) -> Result<()> {
        if self.compressed {
            Ok(())
        } else {
            Err(GridError::NotCompressed)
        }
    }
}

impl<const D: usize, T: Clone> MultiGrid<D, T> {
    /// Group all entries by cell. No-op if already compressed.
    ///
    /// On allocation failure the grid stays uncompressed and keeps its entries.
    pub fn compress(&mut self) -> Result<()> {
        if self.compressed {
            trace!("MultiGrid compress skipped: layout is up to date");
            return Ok(());
        }
        self.rebuild()
    }

    /// Like [`compress`](Self::compress), but also summarizes the layout.
    pub fn compress_with_stats(&mut self) -> Result<CompressStats> {
        self.compress()?;
        Ok(self.packed.stats())
    }

    /// Three-pass counting sort of the raw log into the compressed layout.
    fn rebuild(&mut self) -> Result<()> {
        let Self {
            layout,
            raw,
            packed,
            ..
        } = self;
        let num_entries = raw.len();

        packed.reserve(num_entries)?;

        // Count entries per cell
        packed.counts.fill(0);
        for cell_id in &raw.cell_ids {
            packed.counts[layout.linearize(cell_id)] += 1;
        }

        // Exclusive prefix sum gives each cell's first slot
        let mut first_slot = 0;
        for (offset, &count) in packed.offsets.iter_mut().zip(&packed.counts) {
            *offset = first_slot;
            first_slot += count;
        }

        // Scatter raw indices in insertion order, keeping runs stable
        packed.cursors.copy_from_slice(&packed.offsets);
        packed.order.resize(num_entries, 0);
        for (raw_index, cell_id) in raw.cell_ids.iter().enumerate() {
            let cursor = &mut packed.cursors[layout.linearize(cell_id)];
            packed.order[*cursor] = raw_index;
            *cursor += 1;
        }
        packed
            .data
            .extend(packed.order.iter().map(|&raw_index| raw.data[raw_index].clone()));

        self.compressed = true;
        debug!(
            "MultiGrid compressed: {} entries into {} cells",
            num_entries,
            self.layout.num_cells()
        );
        Ok(())
    }
}
