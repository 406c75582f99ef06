#[cfg(test)]
mod tests {
    use crate::constants::*;
    use crate::error::{MathError, VolOracleError};
    use crate::math::welford::*;
    use crate::unit_test::assert_error;

    // Folds a whole sample series starting from an empty accumulator
    fn fold(samples: &[u128]) -> (u16, u128, u128) {
        samples.iter().fold((0, 0, 0), |(count, mean, m2), &x| {
            update(count, mean, m2, x).unwrap()
        })
    }

    #[test]
    fn test_first_sample_sets_mean() {
        assert_eq!(update(0, 0, 0, 100).unwrap(), (1, 100, 0));
        assert_eq!(update(0, 0, 0, 0).unwrap(), (1, 0, 0));
    }

    #[test]
    fn test_three_sample_walkthrough() {
        let (count, mean, m2) = update(0, 0, 0, 100).unwrap();
        assert_eq!((count, mean, m2), (1, 100, 0));

        // delta = 10, mean moves by 10 / 2
        let (count, mean, m2) = update(count, mean, m2, 110).unwrap();
        assert_eq!((count, mean, m2), (2, 105, 50));

        // delta = -15, mean moves by -15 / 3
        let (count, mean, m2) = update(count, mean, m2, 90).unwrap();
        assert_eq!((count, mean, m2), (3, 100, 200));

        assert_eq!(get_variance(count, m2), 66);
        assert_eq!(get_stdev(count, m2), 8);
    }

    #[test]
    fn test_step_truncates_toward_zero() {
        // +1 / 2 truncates to 0
        assert_eq!(update(1, 0, 0, 1).unwrap(), (2, 0, 1));
        // -1 / 2 truncates to 0, not -1
        assert_eq!(update(1, 1, 0, 0).unwrap(), (2, 1, 1));
    }

    #[test]
    fn test_constant_series_has_zero_spread() {
        let (count, mean, m2) = fold(&[42_000_000; 10]);
        assert_eq!(count, 10);
        assert_eq!(mean, 42_000_000);
        assert_eq!(m2, 0);
        assert_eq!(get_stdev(count, m2), 0);
    }

    #[test]
    fn test_capacity_is_enforced() {
        assert_error(update(u16::MAX, 5, 0, 5), VolOracleError::CapacityExceeded);

        // The last representable sample is still admitted
        let (count, _, _) = update(u16::MAX - 1, 5, 0, 5).unwrap();
        assert_eq!(count, u16::MAX);
    }

    #[test]
    fn test_mean_bound() {
        assert_eq!(update(0, 0, 0, MAX_MEAN).unwrap(), (1, MAX_MEAN, 0));
        assert_error(update(0, 0, 0, MAX_MEAN + 1), MathError::MeanOutOfRange);
    }

    #[test]
    fn test_m2_bound() {
        // delta = 2^57, new mean = 2^56, delta * delta2 = 2^113
        assert_error(update(1, 0, 0, 1u128 << 57), MathError::M2OutOfRange);

        // delta * delta2 = 2^111 fits
        let (_, mean, m2) = update(1, 0, 0, 1u128 << 56).unwrap();
        assert_eq!(mean, 1u128 << 55);
        assert_eq!(m2, 1u128 << 111);
    }

    #[test]
    fn test_m2_accumulation_overflow() {
        assert_error(update(2, 0, MAX_M2, 4), MathError::M2OutOfRange);
    }

    #[test]
    fn test_variance_needs_two_samples() {
        assert_eq!(get_variance(0, 0), 0);
        assert_eq!(get_variance(1, 500), 0);
        assert_eq!(get_variance(2, 500), 250);
        assert_eq!(get_stdev(1, 500), 0);
    }

    #[test]
    fn test_isqrt_small_values() {
        let expected = [(0, 0), (1, 1), (2, 1), (3, 1), (4, 2), (15, 3), (16, 4), (17, 4), (66, 8)];
        for (n, root) in expected {
            assert_eq!(isqrt_u128(n), root, "isqrt({})", n);
        }
    }

    #[test]
    fn test_isqrt_extremes() {
        assert_eq!(isqrt_u128(u128::MAX), u64::MAX as u128);
        assert_eq!(isqrt_u128(1u128 << 126), 1u128 << 63);
        assert_eq!(isqrt_u128((1u128 << 126) - 1), (1u128 << 63) - 1);
    }
}
