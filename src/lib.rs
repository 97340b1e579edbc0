//! # single-scoring
//!
//! Permutation-based marker-pair scoring for single-cell data, part of the single-rust ecosystem.
//!
//! This crate assigns a per-cell score derived from ordered comparisons of marker-gene pairs
//! and estimates the empirical significance of that score against a randomized null
//! distribution. It is the low-level engine behind marker-pair classifiers: callers supply an
//! expression matrix, a set of participating gene rows and two parallel marker index arrays,
//! and receive one score per requested cell.
//!
//! ## Core Features
//!
//! - **Proportion Scoring**: fraction of informative marker pairs where the first gene's
//!   value strictly exceeds the second's, with a numerically-safe early-exit mode for
//!   threshold comparisons
//! - **Permutation Testing**: per-cell Monte-Carlo null distributions via in-place shuffling
//!   of the participating gene values, parallelized across cells with deterministic seeding
//! - **Chained Shuffling**: a stream of independent uniform random permutations produced by
//!   repeatedly reshuffling the previous output
//! - **Dense and Sparse Input**: column access over `ndarray::Array2` and `CscMatrix` from
//!   nalgebra-sparse
//!
//! ## Quick Start
//!
//! Use the [`scoring::MatrixPairScoring`] trait to score cells directly on a supported
//! matrix type, or call [`scoring::permutation::score_cells`] with any
//! [`scoring::matrix::ColumnSource`] implementation.
//!
//! ## Module Organization
//!
//! - **[`scoring`]**: proportion scorer, permutation driver and matrix column access
//! - **[`shuffle`]**: uniform in-place shuffling and chained permutation batches

pub mod scoring;
pub mod shuffle;
