/// Initialize Vol Oracle Instruction Module
///
/// Creates the volatility record for one (price pair, period). The base and
/// quote mints must be the two sides of the observation buffer's pair, in
/// either order; the order decides which way the TWAP is quoted.
use crate::error::VolOracleError;
use crate::InitializeVolOracle;
use anchor_lang::prelude::*;

/// Handler function for creating a volatility oracle
///
/// # Parameters
/// * `ctx` - The context containing all accounts involved in the operation
/// * `period` - Seconds between admitted samples
///
/// # Errors
/// * `VolOracleError::InvalidPeriod` - If `period` is zero
/// * `VolOracleError::MintsMustDiffer` - If base and quote are the same mint
/// * `VolOracleError::MintMismatch` - If either mint is not part of the buffer's pair
/// * `MathError::BaseAmountOverflow` - If the base mint has more than 38 decimals
pub fn handler(ctx: Context<InitializeVolOracle>, period: u32) -> Result<()> {
    let observation_buffer = ctx.accounts.observation_buffer.key();
    let base_mint = ctx.accounts.base_mint.key();
    let quote_mint = ctx.accounts.quote_mint.key();

    {
        let buffer = ctx.accounts.observation_buffer.load()?;
        require!(
            buffer.contains_mint(&base_mint) && buffer.contains_mint(&quote_mint),
            VolOracleError::MintMismatch
        );
    }

    let vol_oracle = &mut ctx.accounts.vol_oracle;
    vol_oracle.initialize(
        observation_buffer,
        base_mint,
        quote_mint,
        period,
        ctx.accounts.base_mint.decimals,
        ctx.bumps.vol_oracle,
    )?;

    msg!(
        "Vol oracle initialized: base {} quote {} period {}s",
        base_mint,
        quote_mint,
        period
    );
    Ok(())
}
