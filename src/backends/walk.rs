use crate::path::{ZigZag, rail_lengths};
use alloc::vec;
use alloc::vec::Vec;

pub(crate) const NAME: &str = "walk";

/// Reference encryption: one bucket per rail, filled along the zig-zag path.
///
/// Callers guarantee `rails >= 2` and a non-empty `text`.
pub(crate) fn encrypt<T: Copy>(text: &[T], rails: usize) -> Vec<T> {
    // Rails past the sequence length are never visited.
    let mut fence: Vec<Vec<T>> = rail_lengths(rails, text.len())
        .into_iter()
        .map(Vec::with_capacity)
        .collect();
    for (&item, rail) in text.iter().zip(ZigZag::new(rails, text.len())) {
        fence[rail].push(item);
    }
    fence.into_iter().flatten().collect()
}

/// Reference decryption: mark the path, fill marks row by row, read the path back.
pub(crate) fn decrypt<T: Copy>(text: &[T], rails: usize) -> Vec<T> {
    let width = text.len();
    let rows = rails.min(width);

    // 1. Mark the cell every column occupies on the zig-zag path.
    let mut marked = vec![false; rows * width];
    for (col, rail) in ZigZag::new(rails, width).enumerate() {
        marked[rail * width + col] = true;
    }

    // 2. Fill marked cells in row-major order from the ciphertext.
    let mut fence: Vec<Option<T>> = vec![None; rows * width];
    let mut source = text.iter().copied();
    for (cell, _) in fence.iter_mut().zip(&marked).filter(|(_, m)| **m) {
        *cell = source.next();
    }

    // 3. Read the zig-zag back.
    ZigZag::new(rails, width)
        .enumerate()
        .filter_map(|(col, rail)| fence[rail * width + col])
        .collect()
}
