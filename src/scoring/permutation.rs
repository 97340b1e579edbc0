//! Per-cell permutation driver.
//!
//! For each requested cell the driver extracts the gene values participating in any marker
//! pair, computes the true proportion score, then repeatedly shuffles that subset and
//! rescores it in early-exit mode against the true score. The per-cell statistic is the
//! fraction of resolved permutations scoring strictly below the true score, an empirical
//! one-sided rank among permutations. Shuffling only the participating subset keeps the
//! per-iteration cost proportional to the number of used genes rather than the full row
//! count of the matrix.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use single_utilities::traits::FloatOpsTS;

use crate::scoring::ScoringConfig;
use crate::scoring::matrix::ColumnSource;
use crate::scoring::proportion::{PairVerdict, pair_proportion, pair_proportion_vs_threshold};
use crate::shuffle::shuffle;

/// Score each requested cell against its permutation null distribution.
///
/// `marker1` and `marker2` are parallel arrays of indices *into the used-gene subset*;
/// `used` holds the gene row indices participating in at least one pair; `cells` holds
/// 0-based cell column indices. Returns one value per entry of `cells`, in order, with
/// `NaN` marking cells whose score is undefined: either too few informative pairs for the
/// true score, or fewer than `min_iterations` resolved permutations.
///
/// Cells are processed in parallel; each cell draws from an independent `StdRng` sub-stream
/// seeded from `config.seed` and the cell's position in `cells`, so results are fully
/// deterministic for a fixed configuration regardless of thread scheduling.
///
/// # Errors
///
/// Fails before producing any output when `marker1` and `marker2` differ in length, or when
/// any marker, used-gene or cell index is out of range. One cell's undefined score is not
/// an error and never affects another cell's result.
pub fn score_cells<T, M>(
    matrix: &M,
    cells: &[usize],
    marker1: &[usize],
    marker2: &[usize],
    used: &[usize],
    config: &ScoringConfig,
) -> anyhow::Result<Vec<T>>
where
    T: FloatOpsTS,
    M: ColumnSource<T> + Sync,
{
    validate_indices::<T, M>(matrix, cells, marker1, marker2, used)?;

    let n_genes = matrix.n_genes();

    cells
        .par_iter()
        .enumerate()
        .map_init(
            // Working buffers are reused across the cells handled by one worker.
            || (vec![T::zero(); n_genes], vec![T::zero(); used.len()]),
            |(column, subset), (position, &cell)| -> anyhow::Result<T> {
                matrix.copy_column(cell, column)?;
                for (value, &gene) in subset.iter_mut().zip(used.iter()) {
                    *value = column[gene];
                }

                let Some(observed) =
                    pair_proportion(subset, marker1, marker2, config.min_pairs)
                else {
                    // No iterations are spent on cells without a defined true score.
                    return Ok(<T as num_traits::Float>::nan());
                };

                let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(position as u64));
                let mut below = 0usize;
                let mut resolved = 0usize;
                for _ in 0..config.iterations {
                    shuffle(subset, &mut rng);
                    match pair_proportion_vs_threshold(
                        subset,
                        marker1,
                        marker2,
                        config.min_pairs,
                        observed,
                    ) {
                        Some(PairVerdict::Below) => {
                            below += 1;
                            resolved += 1;
                        }
                        Some(PairVerdict::Above) => {
                            resolved += 1;
                        }
                        // Permutations with too few informative pairs are discarded
                        // rather than counted as ties.
                        None => {}
                    }
                }

                if resolved >= config.min_iterations && resolved > 0 {
                    Ok(T::from(below).unwrap() / T::from(resolved).unwrap())
                } else {
                    Ok(<T as num_traits::Float>::nan())
                }
            },
        )
        .collect()
}

fn validate_indices<T, M>(
    matrix: &M,
    cells: &[usize],
    marker1: &[usize],
    marker2: &[usize],
    used: &[usize],
) -> anyhow::Result<()>
where
    T: FloatOpsTS,
    M: ColumnSource<T>,
{
    if marker1.len() != marker2.len() {
        return Err(anyhow::anyhow!(
            "Marker index vectors must have the same length (got {} and {})",
            marker1.len(),
            marker2.len()
        ));
    }

    let n_used = used.len();
    for (pair, (&m1, &m2)) in marker1.iter().zip(marker2.iter()).enumerate() {
        if m1 >= n_used {
            return Err(anyhow::anyhow!(
                "First marker index {} at pair {} is out of range for {} used genes",
                m1,
                pair,
                n_used
            ));
        }
        if m2 >= n_used {
            return Err(anyhow::anyhow!(
                "Second marker index {} at pair {} is out of range for {} used genes",
                m2,
                pair,
                n_used
            ));
        }
    }

    let n_genes = matrix.n_genes();
    for (position, &gene) in used.iter().enumerate() {
        if gene >= n_genes {
            return Err(anyhow::anyhow!(
                "Used gene index {} at position {} is out of range for {} genes",
                gene,
                position,
                n_genes
            ));
        }
    }

    let n_cells = matrix.n_cells();
    for (position, &cell) in cells.iter().enumerate() {
        if cell >= n_cells {
            return Err(anyhow::anyhow!(
                "Cell index {} at position {} is out of range for {} cells",
                cell,
                position,
                n_cells
            ));
        }
    }

    Ok(())
}
