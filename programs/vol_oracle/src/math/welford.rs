//! # vol_oracle::math::welford
//!
//! Welford's online mean/variance recurrence over fixed-point integer samples.
//!
//! ## Representation
//! - `count` is a u16 and never wraps; the 65,536th sample is rejected.
//! - `mean` is kept in 96 bits and `m2` (sum of squared deviations) in 112 bits,
//!   matching the packed accumulator record.
//! - Every step is evaluated in 256-bit arithmetic and range-checked before it
//!   is narrowed, so an out-of-range result fails loudly instead of truncating.
//!
//! ## Rounding
//! `delta / count` truncates toward zero. Because the truncated step never
//! overshoots the new sample, `delta` and `sample - new_mean` always share a sign
//! and `m2` is non-decreasing.
//!
//! ## Accuracy
//! Truncation keeps the running mean within `(n + 1) / 2` of the exact mean.
//! The resulting `m2` stays within `n^2 * (max - min) + n^3` of the exact sum
//! of squared deviations over the same `n` samples.
//!
//! ## Variance
//! Population variance, `m2 / count`; fewer than two samples have zero variance.

use crate::constants::{MAX_M2, MAX_MEAN, MAX_SAMPLE_COUNT};
use crate::error::{MathError, VolOracleError};
use anchor_lang::prelude::*;
use ethnum::U256;

/// Folds `sample` into the running `(count, mean, m2)` triple.
///
/// # Arguments
/// * `count` - samples seen so far
/// * `mean` - running mean of those samples
/// * `m2` - running sum of squared deviations from the mean
/// * `sample` - the new fixed-point sample
///
/// # Returns
/// * `Result<(u16, u128, u128)>` - the updated `(count, mean, m2)`
///
/// # Errors
/// * `VolOracleError::CapacityExceeded` - if `count` is already `u16::MAX`
/// * `MathError::MeanOutOfRange` - if the new mean does not fit 96 bits
/// * `MathError::M2OutOfRange` - if the new m2 does not fit 112 bits
pub fn update(count: u16, mean: u128, m2: u128, sample: u128) -> Result<(u16, u128, u128)> {
    require!(count < MAX_SAMPLE_COUNT, VolOracleError::CapacityExceeded);

    let new_count = count + 1;
    let n = U256::from(new_count as u128);
    let mean_wide = U256::from(mean);
    let sample_wide = U256::from(sample);

    // delta and delta2 carry the same sign, so they are tracked as magnitudes
    // alongside one direction flag.
    let (new_mean, delta, delta2) = if sample_wide >= mean_wide {
        let delta = sample_wide - mean_wide;
        let new_mean = mean_wide + delta / n;
        (new_mean, delta, sample_wide - new_mean)
    } else {
        let delta = mean_wide - sample_wide;
        let new_mean = mean_wide - delta / n;
        (new_mean, delta, new_mean - sample_wide)
    };

    let new_m2 = U256::from(m2)
        .checked_add(delta * delta2)
        .ok_or(MathError::M2OutOfRange)?;

    require!(new_mean <= U256::from(MAX_MEAN), MathError::MeanOutOfRange);
    require!(new_m2 <= U256::from(MAX_M2), MathError::M2OutOfRange);

    Ok((new_count, new_mean.as_u128(), new_m2.as_u128()))
}

/// Population variance, `m2 / count`, or zero with fewer than two samples.
#[inline]
pub fn get_variance(count: u16, m2: u128) -> u128 {
    if count < 2 {
        return 0;
    }
    m2 / count as u128
}

/// Population standard deviation, `floor(sqrt(m2 / count))`.
#[inline]
pub fn get_stdev(count: u16, m2: u128) -> u128 {
    isqrt_u128(get_variance(count, m2))
}

/// floor(sqrt(n)) by Newton's method.
pub fn isqrt_u128(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    // 2^ceil(bits/2) is always >= sqrt(n), so the iteration decreases monotonically
    let bits = 128 - n.leading_zeros();
    let mut x = 1u128 << bits.div_ceil(2);
    loop {
        let y = (x + n / x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}
