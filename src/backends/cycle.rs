use crate::path::{rail_lengths, rail_of};
use alloc::vec::Vec;

pub(crate) const NAME: &str = "cycle";

/// Offset of each rail's segment inside the ciphertext.
fn rail_offsets(rails: usize, len: usize) -> Vec<usize> {
    let mut next = 0;
    rail_lengths(rails, len)
        .into_iter()
        .map(|count| {
            let start = next;
            next += count;
            start
        })
        .collect()
}

/// Scatters each position straight to its slot in the ciphertext.
pub(crate) fn encrypt<T: Copy>(text: &[T], rails: usize) -> Vec<T> {
    let mut cursors = rail_offsets(rails, text.len());
    // Every slot is overwritten exactly once; the copy only sizes the buffer.
    let mut out = text.to_vec();
    for (index, &item) in text.iter().enumerate() {
        let cursor = &mut cursors[rail_of(index, rails)];
        out[*cursor] = item;
        *cursor += 1;
    }
    out
}

/// Gathers each position from the head of its rail's segment.
pub(crate) fn decrypt<T: Copy>(text: &[T], rails: usize) -> Vec<T> {
    let mut cursors = rail_offsets(rails, text.len());
    (0..text.len())
        .map(|index| {
            let cursor = &mut cursors[rail_of(index, rails)];
            let item = text[*cursor];
            *cursor += 1;
            item
        })
        .collect()
}
