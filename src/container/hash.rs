/// Sampling Hash
///
/// Containers may be huge and lazily computed, so hashing never walks a
/// container with more than [`SAMPLE_THRESHOLD`] elements. Instead it reads a
/// fixed number of positions picked by a deterministic accumulator, so that
/// the positions visited depend only on the container's dimensions.
///
use tracing::trace;

use crate::indexed::{Index, Value};

/// Containers with at most this many elements are hashed in full.
pub const SAMPLE_THRESHOLD: i64 = 10;

/// Number of positions read when sampling.
pub const SAMPLE_COUNT: usize = 10;

const LARGEST_INT_PRIME: i32 = i32::MAX;

#[inline]
pub fn fold(hash: i32, value_hash: i32) -> i32 {
    hash.wrapping_mul(31).wrapping_add(value_hash)
}

/// The accumulator values driving sample positions.
#[derive(Debug, Clone)]
pub struct Accumulator {
    p: i32,
    remaining: usize,
}

impl Default for Accumulator {
    fn default() -> Self {
        Accumulator {
            p: LARGEST_INT_PRIME,
            remaining: SAMPLE_COUNT,
        }
    }
}

impl Iterator for Accumulator {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let p = self.p;
        self.p = self.p.wrapping_mul(LARGEST_INT_PRIME) & 0x7fff_ffff;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Positions sampled from a vector of length `len`. `len` must be positive.
pub fn sample_indices(len: Index) -> impl Iterator<Item = Index> {
    Accumulator::default().map(move |p| p % len)
}

/// Cells sampled from a `rows x columns` matrix. Both must be positive.
pub fn sample_cells(rows: Index, columns: Index) -> impl Iterator<Item = (Index, Index)> {
    Accumulator::default().map(move |p| (p % rows, (p / rows) % columns))
}

/// Hash a one-dimensional sequence of `len` elements read through `value`.
pub fn hash_1d<T, F>(len: Index, value: F) -> i32
where
    T: Value,
    F: Fn(Index) -> T,
{
    let seed = len;
    if len <= 0 {
        return seed;
    }

    if i64::from(len) <= SAMPLE_THRESHOLD {
        (0..len).fold(seed, |h, i| fold(h, value(i).value_hash()))
    } else {
        trace!(len, "sampling vector hash");
        sample_indices(len).fold(seed, |h, i| fold(h, value(i).value_hash()))
    }
}

/// Hash a `rows x columns` grid read through `value`, row-major.
pub fn hash_2d<T, F>(rows: Index, columns: Index, value: F) -> i32
where
    T: Value,
    F: Fn(Index, Index) -> T,
{
    let seed = fold(rows, columns);
    if rows <= 0 || columns <= 0 {
        return seed;
    }

    if i64::from(rows) * i64::from(columns) <= SAMPLE_THRESHOLD {
        let mut hash = seed;
        for r in 0..rows {
            for c in 0..columns {
                hash = fold(hash, value(r, c).value_hash());
            }
        }
        hash
    } else {
        trace!(rows, columns, "sampling matrix hash");
        sample_cells(rows, columns).fold(seed, |h, (r, c)| fold(h, value(r, c).value_hash()))
    }
}

/// Compare two one-dimensional sequences, stopping at the first mismatch.
pub fn equal_1d<T, A, B>(len_a: Index, a: A, len_b: Index, b: B) -> bool
where
    T: Value,
    A: Fn(Index) -> T,
    B: Fn(Index) -> T,
{
    len_a == len_b && (0..len_a).all(|i| a(i).value_eq(&b(i)))
}

/// Compare two grids of equal shape, stopping at the first mismatch.
pub fn equal_2d<T, A, B>(shape_a: (Index, Index), a: A, shape_b: (Index, Index), b: B) -> bool
where
    T: Value,
    A: Fn(Index, Index) -> T,
    B: Fn(Index, Index) -> T,
{
    let (rows, columns) = shape_a;
    shape_a == shape_b
        && (0..rows).all(|r| (0..columns).all(|c| a(r, c).value_eq(&b(r, c))))
}
