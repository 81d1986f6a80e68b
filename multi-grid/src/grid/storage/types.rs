//! Types used by grid storage.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::CellId;
use crate::error::{GridError, Result};

/// Entries in insertion order, as two parallel arrays.
#[derive(Clone, Debug)]
pub(super) struct RawLog<const D: usize, T> {
    /// Payloads buffered before compression.
    pub data: Vec<T>,
    /// Cell ids of the buffered payloads.
    pub cell_ids: Vec<CellId<D>>,
}

impl<const D: usize, T> RawLog<D, T> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            cell_ids: Vec::new(),
        }
    }

    /// Reserve room for `additional` entries. Returns false if either array
    /// could not grow; nothing is reserved past the failing array.
    pub fn try_reserve(&mut self, additional: usize) -> bool {
        self.data.try_reserve(additional).is_ok() && self.cell_ids.try_reserve(additional).is_ok()
    }

    #[inline]
    pub fn push(&mut self, cell_id: CellId<D>, data: T) {
        self.data.push(data);
        self.cell_ids.push(cell_id);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.cell_ids.clear();
    }
}

/// Payloads grouped by cell, one contiguous run per cell.
///
/// ```text
/// counts:   [2 0 1 0]
/// offsets:  [0 2 2 3]
/// data:     [a c|b]
///            └┬┘ └ cell 2
///          cell 0
/// ```
#[derive(Clone, Debug)]
pub(super) struct CompressedLayout<T> {
    /// Flat payload array, grouped by storage id.
    pub data: Vec<T>,
    /// Number of payloads in each cell.
    pub counts: Vec<usize>,
    /// Index of the first payload of each cell in `data`.
    pub offsets: Vec<usize>,
    /// Per-cell write cursors used by the scatter pass.
    pub cursors: Vec<usize>,
    /// Raw log index for every slot of `data`.
    pub order: Vec<usize>,
}

impl<T> CompressedLayout<T> {
    pub fn new(num_cells: usize) -> Self {
        Self {
            data: Vec::new(),
            counts: vec![0; num_cells],
            offsets: vec![0; num_cells],
            cursors: vec![0; num_cells],
            order: Vec::new(),
        }
    }

    /// Drop the stale flat array and reserve room for `entries` slots.
    ///
    /// Per-cell counts and offsets are left untouched on failure.
    pub fn reserve(&mut self, entries: usize) -> Result<()> {
        self.data.clear();
        self.order.clear();
        self.data
            .try_reserve(entries)
            .and_then(|_| self.order.try_reserve(entries))
            .map_err(|_| GridError::AllocationFailed { entries })
    }

    /// Slot range of a cell's run in `data`.
    #[inline]
    pub fn run(&self, storage_id: usize) -> Range<usize> {
        let begin = self.offsets[storage_id];
        begin..begin + self.counts[storage_id]
    }

    /// Summarize the current layout.
    pub fn stats(&self) -> CompressStats {
        let mut stats = CompressStats {
            entries: self.data.len(),
            ..Default::default()
        };
        for &count in &self.counts {
            if count > 0 {
                stats.occupied_cells += 1;
                stats.max_cell_len = stats.max_cell_len.max(count);
            }
        }
        stats
    }
}

/// Summary of a compressed layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressStats {
    /// Payloads in the flat array.
    pub entries: usize,
    /// Cells holding at least one payload.
    pub occupied_cells: usize,
    /// Longest run of any single cell.
    pub max_cell_len: usize,
}

impl CompressStats {
    /// Average payloads per occupied cell (0 when the grid is empty).
    pub fn mean_occupancy(&self) -> f32 {
        if self.occupied_cells == 0 {
            0.0
        } else {
            self.entries as f32 / self.occupied_cells as f32
        }
    }
}
