//! Uniform random shuffling primitives for null-distribution generation.
//!
//! The random source is always an explicit caller-supplied [`Rng`]; the engine never seeds
//! or reseeds internally. Two calls sharing one generator draw from the same evolving
//! stream, so reproducible runs must reseed between calls.

use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;
use single_utilities::traits::FloatOpsTS;

/// Permute a slice in place, uniformly at random.
///
/// A single Fisher-Yates pass consuming a deterministic, seed-dependent number of draws,
/// so results are exactly reproducible given a fixed seed and call order. Slices of length
/// 0 or 1 are valid no-ops.
pub fn shuffle<T, R>(values: &mut [T], rng: &mut R)
where
    R: Rng,
{
    values.shuffle(rng);
}

/// Generate a batch of chained random permutations of `values`.
///
/// Returns a matrix of shape `[values.len(), iterations]` where column 0 is a random
/// permutation of the input and column `i > 0` is a random permutation of column `i - 1`,
/// not of the original input. Reshuffling an already-random permutation of a fixed multiset
/// still yields a uniformly random permutation of that multiset, so the columns are jointly
/// distributed as independent uniform permutations; this avoids re-copying the source vector
/// on every iteration. Note that column `i` is *not* independent of column `i - 1`'s
/// realized draw order within one stream, only of the original input's ordering; callers
/// needing independence from a specific reference arrangement should verify their use case.
///
/// Each column is fully materialized before being reused as the next shuffle source.
/// An empty input or zero iterations yields a degenerate but valid matrix.
pub fn chained_shuffle<T, R>(values: &[T], iterations: usize, rng: &mut R) -> Array2<T>
where
    T: FloatOpsTS,
    R: Rng,
{
    let n = values.len();
    let mut output = Array2::zeros((n, iterations));

    let mut current = values.to_vec();
    for column in 0..iterations {
        current.shuffle(rng);
        for (out, &value) in output.column_mut(column).iter_mut().zip(current.iter()) {
            *out = value;
        }
    }

    output
}
