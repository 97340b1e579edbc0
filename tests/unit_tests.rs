use approx::assert_relative_eq;
use single_scoring::scoring::ScoringConfig;
use single_scoring::scoring::proportion::{
    PairVerdict, pair_proportion, pair_proportion_vs_threshold,
};

#[cfg(test)]
mod quick_test {
    use super::*;

    #[test]
    fn check_proportion_scoring_works() {
        // Three pairs over one cell's values: two wins, one loss, no ties.
        let values = vec![8.0, 2.0, 6.0, 7.0, 5.0, 1.0];
        let marker1 = vec![0, 2, 4];
        let marker2 = vec![1, 3, 5];

        let score: f64 = pair_proportion(&values, &marker1, &marker2, 1).unwrap();
        assert_relative_eq!(score, 2.0 / 3.0, epsilon = 1e-12);

        // The early-exit mode must agree with the exact score on both sides.
        assert_eq!(
            pair_proportion_vs_threshold(&values, &marker1, &marker2, 1, 0.5),
            Some(PairVerdict::Above)
        );
        assert_eq!(
            pair_proportion_vs_threshold(&values, &marker1, &marker2, 1, 0.9),
            Some(PairVerdict::Below)
        );
    }

    #[test]
    fn check_default_config() {
        let config = ScoringConfig::default();
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.min_iterations, 100);
        assert_eq!(config.min_pairs, 50);

        let config = ScoringConfig::new(100, 10, 5).with_seed(3);
        assert_eq!(config.iterations, 100);
        assert_eq!(config.seed, 3);
    }
}
