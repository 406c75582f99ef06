//! # vol_oracle::math::full_math
//!
//! 512-bit intermediate multiply-divide used by the quote math, where a Q128.128
//! or Q64.192 ratio is multiplied by a u128 base amount and the product can
//! exceed 256 bits before it is scaled back down.

use crate::error::MathError;
use anchor_lang::prelude::*;
use primitive_types::{U256, U512};

/// Narrows a U512 to U256, failing if any of the upper 256 bits are set.
#[inline(always)]
fn narrow(value: U512) -> Result<U256> {
    let mut bytes = [0u8; 64];
    value.to_little_endian(&mut bytes);
    if bytes[32..].iter().any(|b| *b != 0) {
        return Err(MathError::Overflow.into());
    }
    Ok(U256::from_little_endian(&bytes[..32]))
}

/// Computes floor(a * b / denominator) with a full-width 512-bit product.
///
/// # Errors
/// * `MathError::DivisionByZero` - if `denominator` is zero
/// * `MathError::Overflow` - if the quotient does not fit 256 bits
#[inline(always)]
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256> {
    require!(!denominator.is_zero(), MathError::DivisionByZero);
    let product = U512::from(a) * U512::from(b);
    narrow(product / U512::from(denominator))
}

/// Narrows a U256 to u128, failing with `MathError::Overflow` on loss.
#[inline(always)]
pub fn to_u128(value: U256) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(MathError::Overflow.into());
    }
    Ok(value.as_u128())
}
