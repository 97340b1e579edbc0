//! Pairwise proportion scoring of marker-gene values.
//!
//! The score of a cell is the fraction of informative marker pairs (pairs whose two values
//! differ) where the first gene's value strictly exceeds the second's. Ties contribute to
//! neither numerator nor denominator. Both entry points return `None` rather than an error
//! when too few informative pairs exist; an undefined score is a legitimate outcome that
//! callers propagate as a missing value.

use single_utilities::traits::FloatOps;

/// Outcome of comparing a proportion score against a threshold without computing it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairVerdict {
    /// The score is strictly below the threshold.
    Below,
    /// The score is at or above the threshold.
    Above,
}

/// Compute the exact proportion of informative marker pairs where the first value wins.
///
/// `marker1` and `marker2` are parallel index arrays into `values`. Returns `None` when
/// fewer than `min_pairs` informative pairs exist (or none at all), otherwise the
/// proportion in `[0, 1]`.
///
/// Marker indices must be in bounds for `values`; the permutation driver validates this
/// once per call rather than per iteration.
pub fn pair_proportion<T>(
    values: &[T],
    marker1: &[usize],
    marker2: &[usize],
    min_pairs: usize,
) -> Option<T>
where
    T: FloatOps,
{
    let mut was_first = 0usize;
    let mut was_total = 0usize;

    for (&m1, &m2) in marker1.iter().zip(marker2.iter()) {
        let first = values[m1];
        let second = values[m2];
        if first != second {
            if first > second {
                was_first += 1;
            }
            was_total += 1;
        }
    }

    if was_total == 0 || was_total < min_pairs {
        return None;
    }
    Some(T::from(was_first).unwrap() / T::from(was_total).unwrap())
}

/// Determine whether the proportion score lands below or above `threshold`, terminating
/// as soon as the answer is certain.
///
/// Every time the running informative-pair count is at least `min_pairs` and a multiple of
/// 100, the best- and worst-case final proportions reachable from the remaining pairs are
/// bounded, with a one-pair margin absorbing floating-point equality at the threshold. If
/// even the best case stays below the threshold the verdict is [`PairVerdict::Below`]; if
/// even the worst case stays above, [`PairVerdict::Above`]. Checking only every hundred
/// informative pairs amortizes the bound computation over long pair lists.
///
/// When the loop completes without early termination, the exact proportion is compared
/// directly (equality resolves to `Above`). Returns `None` under the same `min_pairs` rule
/// as [`pair_proportion`].
pub fn pair_proportion_vs_threshold<T>(
    values: &[T],
    marker1: &[usize],
    marker2: &[usize],
    min_pairs: usize,
    threshold: T,
) -> Option<PairVerdict>
where
    T: FloatOps,
{
    let npairs = marker1.len();
    let mut was_first = 0usize;
    let mut was_total = 0usize;

    for m in 0..npairs {
        let first = values[marker1[m]];
        let second = values[marker2[m]];
        if first != second {
            if first > second {
                was_first += 1;
            }
            was_total += 1;
        }

        if was_total >= min_pairs && was_total % 100 == 0 {
            let leftovers = npairs - m - 1;
            let max_total = T::from(was_total + leftovers).unwrap();

            // One-pair margin against incorrect early termination when the final
            // proportion would land exactly on the threshold. The was_first > 0 guard
            // prevents underflow on the lower bound.
            if T::from(was_first + leftovers + 1).unwrap() / max_total < threshold {
                return Some(PairVerdict::Below);
            } else if was_first > 0
                && T::from(was_first - 1).unwrap() / max_total > threshold
            {
                return Some(PairVerdict::Above);
            }
        }
    }

    if was_total == 0 || was_total < min_pairs {
        return None;
    }

    let score = T::from(was_first).unwrap() / T::from(was_total).unwrap();
    if score < threshold {
        Some(PairVerdict::Below)
    } else {
        Some(PairVerdict::Above)
    }
}
