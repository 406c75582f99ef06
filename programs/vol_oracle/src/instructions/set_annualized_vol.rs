use crate::SetAnnualizedVol;
use anchor_lang::prelude::*;

/// Event emitted when the admin publishes a volatility
#[event]
pub struct AnnualizedVolSet {
    /// The registry the value was published to
    pub oracle: Pubkey,

    /// Pair the value applies to
    pub pair_id: [u8; 32],

    /// Annualized volatility, 1_000_000 = 100%
    pub annualized_vol: u64,

    /// The timestamp of the update
    pub timestamp: i64,
}

/// Publishes an annualized volatility for `pair_id`, creating the entry on first use.
///
/// # Errors
/// * `VolOracleError::Unauthorized` - If the signer is not the registry admin
/// * `VolOracleError::InvalidAnnualizedVol` - If the value is zero or above 2000%
pub fn handler(
    ctx: Context<SetAnnualizedVol>,
    pair_id: [u8; 32],
    annualized_vol: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let oracle = ctx.accounts.manual_vol_oracle.key();
    let cap = ctx
        .accounts
        .manual_vol_oracle
        .authorize(oracle, &ctx.accounts.admin.key())?;

    let entry = &mut ctx.accounts.manual_vol;
    entry.set(&cap, pair_id, annualized_vol, now, ctx.bumps.manual_vol)?;

    emit!(AnnualizedVolSet {
        oracle,
        pair_id,
        annualized_vol,
        timestamp: now,
    });
    Ok(())
}
