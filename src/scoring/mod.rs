//! Marker-pair scoring of single cells against permutation null distributions.

use single_utilities::traits::FloatOpsTS;

pub mod matrix;
pub mod permutation;
pub mod proportion;

/// Configuration for permutation scoring.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Number of shuffled rescoring iterations per cell.
    pub iterations: usize,
    /// Minimum number of resolved (below/above) iterations required for a defined score.
    pub min_iterations: usize,
    /// Minimum number of informative pairs required for a defined proportion.
    pub min_pairs: usize,
    /// Random seed; each cell draws from an independent sub-stream derived from it.
    pub seed: u64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            iterations: 1000,
            min_iterations: 100,
            min_pairs: 50,
            seed: 42,
        }
    }
}

impl ScoringConfig {
    /// Create a configuration with explicit iteration and pair thresholds.
    pub fn new(iterations: usize, min_iterations: usize, min_pairs: usize) -> Self {
        ScoringConfig {
            iterations,
            min_iterations,
            min_pairs,
            ..Default::default()
        }
    }

    /// Replace the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Method-call surface for permutation scoring on supported matrix types.
pub trait MatrixPairScoring<T>
where
    T: FloatOpsTS,
{
    /// Score the requested cells against their permutation null distributions.
    ///
    /// See [`permutation::score_cells`] for the full contract.
    fn permutation_scores(
        &self,
        cells: &[usize],
        marker1: &[usize],
        marker2: &[usize],
        used: &[usize],
        config: &ScoringConfig,
    ) -> anyhow::Result<Vec<T>>;
}

impl<T, M> MatrixPairScoring<T> for M
where
    T: FloatOpsTS,
    M: matrix::ColumnSource<T> + Sync,
{
    fn permutation_scores(
        &self,
        cells: &[usize],
        marker1: &[usize],
        marker2: &[usize],
        used: &[usize],
        config: &ScoringConfig,
    ) -> anyhow::Result<Vec<T>> {
        permutation::score_cells(self, cells, marker1, marker2, used, config)
    }
}
