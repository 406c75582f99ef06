use crate::QueryVolOracle;
use anchor_lang::prelude::*;

/// Returns the oracle's realized volatility, the population standard deviation
/// of its admitted samples. Zero until two samples exist.
pub fn handler(ctx: Context<QueryVolOracle>) -> Result<u128> {
    ctx.accounts.vol_oracle.stdev()
}
