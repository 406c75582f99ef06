use crate::constants::{MAX_TICK, MIN_TICK};
use crate::error::MathError;
use crate::math::full_math::mul_div;
use crate::math::tick_math::get_sqrt_ratio_at_tick;
use anchor_lang::prelude::*;
use primitive_types::U256;

/// Average tick between two tick-cumulative observations, rounded toward
/// negative infinity.
///
/// Plain integer division truncates toward zero, which would bias every
/// negative average one tick upward; a negative, inexact quotient is therefore
/// decremented by one.
///
/// # Arguments
/// * `older_tick_cumulative` - tick accumulator at the start of the window
/// * `newer_tick_cumulative` - tick accumulator at the end of the window
/// * `duration` - seconds elapsed between the two observations
///
/// # Errors
/// * `MathError::DivisionByZero` - if `duration` is zero
/// * `MathError::Overflow` - if the accumulator delta overflows
/// * `MathError::TickOutOfRange` - if the average falls outside the tick domain
pub fn time_weighted_average_tick(
    older_tick_cumulative: i64,
    newer_tick_cumulative: i64,
    duration: u32,
) -> Result<i32> {
    require!(duration > 0, MathError::DivisionByZero);

    let tick_delta = newer_tick_cumulative
        .checked_sub(older_tick_cumulative)
        .ok_or(MathError::Overflow)?;
    let duration = duration as i64;

    let mut average = tick_delta / duration;
    if tick_delta < 0 && tick_delta % duration != 0 {
        average -= 1;
    }

    require!(
        (MIN_TICK as i64..=MAX_TICK as i64).contains(&average),
        MathError::TickOutOfRange
    );
    Ok(average as i32)
}

/// 10^decimals as a u128 base amount.
///
/// # Errors
/// * `MathError::BaseAmountOverflow` - if the power does not fit a u128
pub fn base_amount_for_decimals(decimals: u8) -> Result<u128> {
    10u128
        .checked_pow(decimals as u32)
        .ok_or_else(|| MathError::BaseAmountOverflow.into())
}

/// Amount of `quote` received for `base_amount` of `base` at `tick`.
///
/// Ticks price token0 (the smaller mint) in units of token1, so the ratio is
/// used directly when `base < quote` and inverted otherwise. A sqrt ratio that
/// fits 128 bits is squared exactly into Q64.192; larger ratios are squared
/// into Q128.128 to keep the product within 256 bits.
pub fn get_quote_at_tick(
    tick: i32,
    base_amount: u128,
    base: &Pubkey,
    quote: &Pubkey,
) -> Result<U256> {
    let sqrt_ratio_x96 = get_sqrt_ratio_at_tick(tick)?;
    let base_amount = U256::from(base_amount);

    if sqrt_ratio_x96 <= U256::from(u128::MAX) {
        let ratio_x192 = sqrt_ratio_x96 * sqrt_ratio_x96;
        let q192 = U256::one() << 192;
        if base < quote {
            mul_div(ratio_x192, base_amount, q192)
        } else {
            mul_div(q192, base_amount, ratio_x192)
        }
    } else {
        let ratio_x128 = mul_div(sqrt_ratio_x96, sqrt_ratio_x96, U256::one() << 64)?;
        let q128 = U256::one() << 128;
        if base < quote {
            mul_div(ratio_x128, base_amount, q128)
        } else {
            mul_div(q128, base_amount, ratio_x128)
        }
    }
}
