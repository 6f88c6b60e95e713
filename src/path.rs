//! The bounce walk that assigns every sequence index to a rail.

/// Iterator over the rail index of each position along the zig-zag path.
///
/// Starts on rail 0 moving down. After every step the direction flips when the
/// walk lands on the first or last rail.
#[derive(Clone, Debug)]
pub struct ZigZag {
    rails: usize,
    rail: usize,
    down: bool,
    remaining: usize,
}

impl ZigZag {
    /// Walks `len` positions over `rails` rails.
    ///
    /// # Panics
    ///
    /// Panics if `rails` is less than 2.
    pub fn new(rails: usize, len: usize) -> Self {
        assert!(rails >= 2, "zig-zag walk needs at least two rails");
        Self {
            rails,
            rail: 0,
            down: true,
            remaining: len,
        }
    }
}

impl Iterator for ZigZag {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.rail;
        if self.down {
            self.rail += 1;
        } else {
            self.rail -= 1;
        }
        if self.rail == self.rails - 1 || self.rail == 0 {
            self.down = !self.down;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ZigZag {}

/// Closed-form rail of position `index`; agrees with [`ZigZag`].
///
/// # Panics
///
/// Panics if `rails` is less than 2.
#[inline(always)]
pub fn rail_of(index: usize, rails: usize) -> usize {
    assert!(rails >= 2, "zig-zag walk needs at least two rails");
    // Even half-periods run down the rails, odd ones run back up.
    let half = rails - 1;
    let (lap, offset) = (index / half, index % half);
    if lap % 2 == 0 { offset } else { half - offset }
}

/// Number of positions each rail receives for a sequence of `len` items.
///
/// Only the first `min(rails, len)` rails can ever be visited, so the returned
/// vector is that long.
pub(crate) fn rail_lengths(rails: usize, len: usize) -> alloc::vec::Vec<usize> {
    let mut lengths = alloc::vec![0usize; rails.min(len)];
    for rail in ZigZag::new(rails, len) {
        lengths[rail] += 1;
    }
    lengths
}
