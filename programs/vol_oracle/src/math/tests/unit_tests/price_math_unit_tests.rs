#[cfg(test)]
mod tests {
    use crate::constants::*;
    use crate::error::MathError;
    use crate::math::full_math::*;
    use crate::math::price_math::*;
    use crate::math::tick_math::*;
    use crate::unit_test::assert_error;
    use anchor_lang::prelude::*;
    use primitive_types::U256;

    const ONE_E18: u128 = 1_000_000_000_000_000_000;

    fn low_mint() -> Pubkey {
        Pubkey::new_from_array([1u8; 32])
    }

    fn high_mint() -> Pubkey {
        Pubkey::new_from_array([2u8; 32])
    }

    fn dec(s: &str) -> U256 {
        U256::from_dec_str(s).unwrap()
    }

    // --- average tick ---

    #[test]
    fn test_average_tick_floors_negative_values() {
        assert_eq!(time_weighted_average_tick(0, -7, 2).unwrap(), -4);
        assert_eq!(time_weighted_average_tick(0, -8, 2).unwrap(), -4);
        assert_eq!(time_weighted_average_tick(100, 93, 2).unwrap(), -4);
    }

    #[test]
    fn test_average_tick_positive_values_truncate() {
        assert_eq!(time_weighted_average_tick(0, 7, 2).unwrap(), 3);
        assert_eq!(time_weighted_average_tick(-10, 0, 5).unwrap(), 2);
        assert_eq!(time_weighted_average_tick(5, 5, 60).unwrap(), 0);
    }

    #[test]
    fn test_average_tick_errors() {
        assert_error(time_weighted_average_tick(0, 10, 0), MathError::DivisionByZero);
        assert_error(
            time_weighted_average_tick(i64::MIN, 1, 10),
            MathError::Overflow,
        );
        assert_error(
            time_weighted_average_tick(0, (MAX_TICK as i64 + 1) * 10, 10),
            MathError::TickOutOfRange,
        );
        assert_error(
            time_weighted_average_tick(0, (MIN_TICK as i64 - 1) * 10, 10),
            MathError::TickOutOfRange,
        );
    }

    // --- base amount ---

    #[test]
    fn test_base_amount_for_decimals() {
        assert_eq!(base_amount_for_decimals(0).unwrap(), 1);
        assert_eq!(base_amount_for_decimals(6).unwrap(), 1_000_000);
        assert_eq!(base_amount_for_decimals(18).unwrap(), ONE_E18);
        assert_eq!(base_amount_for_decimals(MAX_BASE_DECIMALS).unwrap(), 10u128.pow(38));
        assert_error(base_amount_for_decimals(39), MathError::BaseAmountOverflow);
    }

    // --- sqrt ratio ---

    #[test]
    fn test_sqrt_ratio_at_bounds() {
        assert_eq!(
            get_sqrt_ratio_at_tick(MIN_TICK).unwrap(),
            U256::from(MIN_SQRT_RATIO)
        );
        assert_eq!(get_sqrt_ratio_at_tick(MAX_TICK).unwrap(), MAX_SQRT_RATIO);
        assert_eq!(
            MAX_SQRT_RATIO,
            dec("1461446703485210103287273052203988822378723970342")
        );
    }

    #[test]
    fn test_sqrt_ratio_known_ticks() {
        assert_eq!(get_sqrt_ratio_at_tick(0).unwrap(), U256::one() << 96);
        assert_eq!(
            get_sqrt_ratio_at_tick(1).unwrap(),
            dec("79232123823359799118286999568")
        );
        assert_eq!(
            get_sqrt_ratio_at_tick(-1).unwrap(),
            dec("79224201403219477170569942574")
        );
        assert_eq!(
            get_sqrt_ratio_at_tick(100).unwrap(),
            dec("79625275426524748796330556128")
        );
    }

    #[test]
    fn test_sqrt_ratio_is_monotonic() {
        let ticks = [MIN_TICK, -500_000, -1, 0, 1, 500_000, MAX_TICK];
        for pair in ticks.windows(2) {
            assert!(
                get_sqrt_ratio_at_tick(pair[0]).unwrap() < get_sqrt_ratio_at_tick(pair[1]).unwrap()
            );
        }
    }

    #[test]
    fn test_sqrt_ratio_rejects_out_of_range() {
        assert_error(get_sqrt_ratio_at_tick(MIN_TICK - 1), MathError::TickOutOfRange);
        assert_error(get_sqrt_ratio_at_tick(MAX_TICK + 1), MathError::TickOutOfRange);
    }

    // --- quote ---

    #[test]
    fn test_quote_at_tick_zero_is_identity() {
        let quote = get_quote_at_tick(0, ONE_E18, &low_mint(), &high_mint()).unwrap();
        assert_eq!(quote, U256::from(ONE_E18));
        let inverse = get_quote_at_tick(0, ONE_E18, &high_mint(), &low_mint()).unwrap();
        assert_eq!(inverse, U256::from(ONE_E18));
    }

    #[test]
    fn test_quote_direction_follows_mint_order() {
        assert_eq!(
            get_quote_at_tick(1, ONE_E18, &low_mint(), &high_mint()).unwrap(),
            U256::from(1_000_100_000_000_000_000u128)
        );
        assert_eq!(
            get_quote_at_tick(-1, ONE_E18, &low_mint(), &high_mint()).unwrap(),
            U256::from(999_900_009_999_000_099u128)
        );
        // Base sorts after quote: the ratio is inverted
        assert_eq!(
            get_quote_at_tick(1, ONE_E18, &high_mint(), &low_mint()).unwrap(),
            U256::from(999_900_009_999_000_099u128)
        );
    }

    #[test]
    fn test_quote_at_distant_ticks() {
        assert_eq!(
            get_quote_at_tick(100, 1_000_000, &low_mint(), &high_mint()).unwrap(),
            U256::from(1_010_049u128)
        );
        assert_eq!(
            get_quote_at_tick(-200_000, ONE_E18, &low_mint(), &high_mint()).unwrap(),
            U256::from(2_063_215_669u128)
        );
        assert_eq!(
            get_quote_at_tick(200_000, 1_000_000, &low_mint(), &high_mint()).unwrap(),
            U256::from(484_680_305_025_733u128)
        );
    }

    #[test]
    fn test_quote_above_128_bit_sqrt_ratio() {
        // sqrt ratio at MAX_TICK exceeds 128 bits, exercising the Q128.128 path
        let quote = get_quote_at_tick(MAX_TICK, 1, &low_mint(), &high_mint()).unwrap();
        assert!(quote > U256::from(u128::MAX) >> 2);
        let inverse = get_quote_at_tick(MAX_TICK, ONE_E18, &high_mint(), &low_mint()).unwrap();
        assert!(inverse.is_zero());
    }

    // --- full math ---

    #[test]
    fn test_mul_div() {
        assert_eq!(
            mul_div(U256::from(6u8), U256::from(7u8), U256::from(4u8)).unwrap(),
            U256::from(10u8)
        );
        // 512-bit intermediate
        assert_eq!(mul_div(U256::MAX, U256::MAX, U256::MAX).unwrap(), U256::MAX);
        assert_error(
            mul_div(U256::one(), U256::one(), U256::zero()),
            MathError::DivisionByZero,
        );
        assert_error(
            mul_div(U256::MAX, U256::from(2u8), U256::one()),
            MathError::Overflow,
        );
    }

    #[test]
    fn test_to_u128() {
        assert_eq!(to_u128(U256::from(u128::MAX)).unwrap(), u128::MAX);
        assert_error(to_u128(U256::from(u128::MAX) + 1), MathError::Overflow);
    }
}
