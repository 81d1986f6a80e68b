//! Default value functions for serde deserialization.

pub fn grid_size() -> Vec<usize> {
    vec![64, 64]
}

pub fn capacity_hint() -> usize {
    1024
}
