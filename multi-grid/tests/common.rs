//! Test utilities for MultiGrid.
//!
//! Random workloads and a naive reference bucketing to compare against.

#![allow(dead_code)]

use std::collections::HashMap;

use multi_grid::{CellId, GridSize};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG for reproducible workloads.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random cell inside the grid.
pub fn random_cell<const D: usize>(rng: &mut StdRng, grid_size: &GridSize<D>) -> CellId<D> {
    let mut cell = [0; D];
    for (c, &extent) in cell.iter_mut().zip(grid_size) {
        *c = rng.gen_range(0..extent);
    }
    cell
}

/// Random entries; payloads are their insertion index.
pub fn random_entries<const D: usize>(
    rng: &mut StdRng,
    grid_size: &GridSize<D>,
    n: usize,
) -> Vec<(CellId<D>, usize)> {
    (0..n).map(|i| (random_cell(rng, grid_size), i)).collect()
}

/// Entries clustered into a few hot cells.
pub fn clustered_entries<const D: usize>(
    rng: &mut StdRng,
    grid_size: &GridSize<D>,
    hot_cells: usize,
    n: usize,
) -> Vec<(CellId<D>, usize)> {
    let hot: Vec<CellId<D>> = (0..hot_cells.max(1))
        .map(|_| random_cell(rng, grid_size))
        .collect();
    (0..n)
        .map(|i| (hot[rng.gen_range(0..hot.len())], i))
        .collect()
}

/// Payloads per cell, in insertion order.
pub fn reference_buckets<const D: usize, T: Clone>(
    entries: &[(CellId<D>, T)],
) -> HashMap<CellId<D>, Vec<T>> {
    let mut buckets: HashMap<CellId<D>, Vec<T>> = HashMap::new();
    for (cell, data) in entries {
        buckets.entry(*cell).or_default().push(data.clone());
    }
    buckets
}
