/// Initialize Observation Buffer Instruction Module
///
/// Creates the tick-observation ring for a token pair. The ring is the price
/// history every volatility oracle on the pair samples from.
use crate::InitializeObservationBuffer;
use anchor_lang::prelude::*;

/// Handler function for creating an observation buffer
///
/// # Parameters
/// * `ctx` - The context containing all accounts involved in the operation
/// * `cardinality` - Number of ring slots to start with, in `[1, 64]`
///
/// # Errors
/// * `VolOracleError::MintsMustDiffer` - If both mints are the same
/// * `VolOracleError::MintsNotCanonical` - If `mint_a` does not sort before `mint_b`
/// * `VolOracleError::InvalidCardinality` - If `cardinality` is out of range
pub fn handler(ctx: Context<InitializeObservationBuffer>, cardinality: u16) -> Result<()> {
    let mut buffer = ctx.accounts.observation_buffer.load_init()?;
    buffer.initialize(
        ctx.accounts.authority.key(),
        ctx.accounts.mint_a.key(),
        ctx.accounts.mint_b.key(),
        cardinality,
        ctx.bumps.observation_buffer,
    )?;

    msg!(
        "Observation buffer initialized for {} / {} with cardinality {}",
        buffer.mint_a,
        buffer.mint_b,
        cardinality
    );
    Ok(())
}
