use crate::QueryVolOracle;
use anchor_lang::prelude::*;

/// Returns the current TWAP of the oracle's pair, quoted for one whole base token.
///
/// # Errors
/// * `VolOracleError::ObservationUnavailable` - If the buffer holds fewer than two observations
/// * `VolOracleError::InvalidObservationWindow` - If the retained window has zero duration
pub fn handler(ctx: Context<QueryVolOracle>) -> Result<u128> {
    let buffer = ctx.accounts.observation_buffer.load()?;
    ctx.accounts.vol_oracle.twap(&*buffer)
}
