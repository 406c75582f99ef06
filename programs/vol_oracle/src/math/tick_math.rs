//! # vol_oracle::math::tick_math
//!
//! Tick to sqrt-ratio conversion in Q64.96, bit-for-bit compatible with the
//! Uniswap v3 `TickMath` library so that a tick accumulator recorded by any
//! CLMM using the 1.0001 tick base prices identically here.
//!
//! sqrt(1.0001)^-(2^i) is precomputed in Q128.128 for every bit of the absolute
//! tick; the ratio is the product of the coefficients whose bit is set, inverted
//! for positive ticks and rounded up into Q64.96.

use crate::constants::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};
use crate::error::MathError;
use anchor_lang::prelude::*;
use primitive_types::U256;

// Q128.128 coefficients, bit i -> 1 / sqrt(1.0001)^(2^i).
const POW2_COEFF: [u128; 19] = [
    0xfff97272373d413259a46990580e213a, // bit 1
    0xfff2e50f5f656932ef12357cf3c7fdcc, // bit 2
    0xffe5caca7e10e4e61c3624eaa0941cd0, // bit 3
    0xffcb9843d60f6159c9db58835c926644, // bit 4
    0xff973b41fa98c081472e6896dfb254c0, // bit 5
    0xff2ea16466c96a3843ec78b326b52861, // bit 6
    0xfe5dee046a99a2a811c461f1969c3053, // bit 7
    0xfcbe86c7900a88aedcffc83b479aa3a4, // bit 8
    0xf987a7253ac413176f2b074cf7815e54, // bit 9
    0xf3392b0822b70005940c7a398e4b70f3, // bit 10
    0xe7159475a2c29b7443b29c7fa6e889d9, // bit 11
    0xd097f3bdfd2022b8845ad8f792aa5825, // bit 12
    0xa9f746462d870fdf8a65dc1f90e061e5, // bit 13
    0x70d869a156d2a1b890bb3df62baf32f7, // bit 14
    0x31be135f97d08fd981231505542fcfa6, // bit 15
    0x09aa508b5b7a84e1c677de54f3e99bc9, // bit 16
    0x005d6af8dedb81196699c329225ee604, // bit 17
    0x00002216e584f5fa1ea926041bedfe98, // bit 18
    0x00000000048a170391f7dc42444e8fa2, // bit 19
];

// bit 0 seeds the product instead of multiplying into it
const BIT0_COEFF: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;

/// Returns sqrt(1.0001^tick) * 2^96.
///
/// # Errors
/// * `MathError::TickOutOfRange` - if `tick` is outside `[MIN_TICK, MAX_TICK]`
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U256> {
    require!(
        (MIN_TICK..=MAX_TICK).contains(&tick),
        MathError::TickOutOfRange
    );

    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(BIT0_COEFF)
    } else {
        U256::one() << 128
    };

    for (i, coeff) in POW2_COEFF.iter().enumerate() {
        if abs_tick & (1u32 << (i + 1)) != 0 {
            // ratio < 2^128 and coeff < 2^128, so the product fits 256 bits
            ratio = (ratio * U256::from(*coeff)) >> 128;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so the ratio never undershoots the tick
    let truncated = ratio >> 32;
    let has_remainder = !(ratio & U256::from(u32::MAX)).is_zero();
    let sqrt_ratio_x96 = if has_remainder {
        truncated + U256::one()
    } else {
        truncated
    };

    debug_assert!(
        sqrt_ratio_x96 >= U256::from(MIN_SQRT_RATIO) && sqrt_ratio_x96 <= MAX_SQRT_RATIO
    );
    Ok(sqrt_ratio_x96)
}
