//! Grid shape, bounds checks and cell linearization.

use super::{CellId, GridSize};
use crate::error::{GridError, Result};

/// Shape of a `D`-dimensional grid.
///
/// Maps every valid [`CellId`] to a unique storage id in `[0, num_cells)`
/// using mixed-radix encoding with dimension 0 varying fastest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout<const D: usize> {
    size: GridSize<D>,
    num_cells: usize,
}

impl<const D: usize> GridLayout<D> {
    /// Create a layout, rejecting empty or overflowing shapes.
    pub fn new(size: GridSize<D>) -> Result<Self> {
        if D == 0 {
            return Err(GridError::InvalidDimension(
                "grid must have at least one dimension".to_string(),
            ));
        }

        let mut num_cells: usize = 1;
        for (dim, &extent) in size.iter().enumerate() {
            if extent == 0 {
                return Err(GridError::InvalidDimension(format!(
                    "extent of dimension {} is zero in {:?}",
                    dim, size
                )));
            }
            num_cells = num_cells.checked_mul(extent).ok_or_else(|| {
                GridError::InvalidDimension(format!("cell count of {:?} overflows usize", size))
            })?;
        }

        Ok(Self { size, num_cells })
    }

    /// Extent along each dimension.
    #[inline]
    pub fn size(&self) -> &GridSize<D> {
        &self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    /// Check if every component of the cell id is within bounds.
    #[inline]
    pub fn contains(&self, cell: &CellId<D>) -> bool {
        cell.iter().zip(&self.size).all(|(c, extent)| c < extent)
    }

    /// Like [`contains`](Self::contains), but reports the failing cell.
    #[inline]
    pub fn check(&self, cell: &CellId<D>) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfRange {
                cell: cell.to_vec(),
                grid_size: self.size.to_vec(),
            })
        }
    }

    /// Storage id of a cell. The cell must be within bounds.
    #[inline]
    pub fn linearize(&self, cell: &CellId<D>) -> usize {
        debug_assert!(self.contains(cell));
        let mut storage_id = 0;
        let mut stride = 1;
        for (c, extent) in cell.iter().zip(&self.size) {
            storage_id += c * stride;
            stride *= extent;
        }
        storage_id
    }

    /// Cell id of a storage id, or `None` past the last cell.
    #[inline]
    pub fn delinearize(&self, storage_id: usize) -> Option<CellId<D>> {
        if storage_id >= self.num_cells {
            return None;
        }

        let mut cell = [0; D];
        let mut rest = storage_id;
        for (c, extent) in cell.iter_mut().zip(&self.size) {
            *c = rest % extent;
            rest /= extent;
        }
        Some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_creation() {
        let layout = GridLayout::new([4, 3, 2]).unwrap();
        assert_eq!(layout.num_cells(), 24);
        assert_eq!(layout.size(), &[4, 3, 2]);
    }

    #[test]
    fn test_zero_extent_rejected() {
        assert!(matches!(
            GridLayout::new([0, 5]),
            Err(GridError::InvalidDimension(_))
        ));
        assert!(matches!(
            GridLayout::new([5, 5, 0]),
            Err(GridError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            GridLayout::<0>::new([]),
            Err(GridError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_cell_count_overflow_rejected() {
        assert!(matches!(
            GridLayout::new([usize::MAX, 2]),
            Err(GridError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_dimension_zero_varies_fastest() {
        let layout = GridLayout::new([3, 2]).unwrap();
        assert_eq!(layout.linearize(&[0, 0]), 0);
        assert_eq!(layout.linearize(&[1, 0]), 1);
        assert_eq!(layout.linearize(&[2, 0]), 2);
        assert_eq!(layout.linearize(&[0, 1]), 3);
        assert_eq!(layout.linearize(&[2, 1]), 5);
    }

    #[test]
    fn test_linearize_is_bijective() {
        let layout = GridLayout::new([3, 4, 2]).unwrap();
        let mut seen = vec![false; layout.num_cells()];

        for z in 0..2 {
            for y in 0..4 {
                for x in 0..3 {
                    let cell = [x, y, z];
                    let id = layout.linearize(&cell);
                    assert!(!seen[id]);
                    seen[id] = true;
                    assert_eq!(layout.delinearize(id), Some(cell));
                }
            }
        }

        assert!(seen.iter().all(|&s| s));
        assert_eq!(layout.delinearize(layout.num_cells()), None);
    }

    #[test]
    fn test_bounds_check() {
        let layout = GridLayout::new([5, 5]).unwrap();
        assert!(layout.contains(&[4, 4]));
        assert!(!layout.contains(&[5, 0]));
        assert!(!layout.contains(&[0, 5]));

        match layout.check(&[5, 0]) {
            Err(GridError::OutOfRange { cell, grid_size }) => {
                assert_eq!(cell, vec![5, 0]);
                assert_eq!(grid_size, vec![5, 5]);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }
}
