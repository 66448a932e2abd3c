//! Broad phase: enumerate the pairs worth testing.
//!
//! Badge counts stay in the tens, so every pair is a candidate and no spatial
//! partitioning is done.

/// All index pairs `(i, j)` with `i < j`, in lexicographic order.
pub fn candidate_pairs(len: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..len).flat_map(move |i| (i + 1..len).map(move |j| (i, j)))
}
