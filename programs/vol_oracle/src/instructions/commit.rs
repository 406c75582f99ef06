/// Commit Instruction Module
///
/// Permissionless entry point that admits the current TWAP into a volatility
/// oracle. Anyone may call it; the commit gate decides whether this is the
/// moment for the next sample.
use crate::commit_gate::to_commit_timestamp;
use crate::Commit;
use anchor_lang::prelude::*;

/// Event emitted when a sample is admitted
#[event]
pub struct Committed {
    /// The oracle that admitted the sample
    pub oracle: Pubkey,

    /// Sample count after the commit
    pub count: u16,

    /// Period boundary the sample is anchored to
    pub timestamp: u32,

    /// Running mean after the commit
    pub mean: u128,

    /// Running sum of squared deviations after the commit
    pub m2: u128,

    /// The admitted TWAP price
    pub price: u128,

    /// The account that submitted the commit
    pub committer: Pubkey,
}

/// Handler function for committing one sample
///
/// # Errors
/// * `VolOracleError::NotInCommitPhase` - If the clock is outside the commit window
/// * `VolOracleError::AlreadyCommitted` - If this period already has a sample
/// * `VolOracleError::ObservationUnavailable` - If the buffer holds fewer than two observations
/// * `VolOracleError::CapacityExceeded` - If the oracle already holds 65535 samples
/// * `MathError::*` - If the TWAP or the estimator leave their numeric range
pub fn handler(ctx: Context<Commit>) -> Result<()> {
    let now = to_commit_timestamp(Clock::get()?.unix_timestamp)?;
    let oracle = ctx.accounts.vol_oracle.key();
    let committer = ctx.accounts.committer.key();

    let buffer = ctx.accounts.observation_buffer.load()?;
    let vol_oracle = &mut ctx.accounts.vol_oracle;
    let receipt = vol_oracle.commit(&*buffer, now)?;
    let accumulator = receipt.accumulator;

    emit!(Committed {
        oracle,
        count: accumulator.count(),
        timestamp: accumulator.last_timestamp(),
        mean: accumulator.mean(),
        m2: accumulator.m2(),
        price: receipt.price,
        committer,
    });

    msg!(
        "Committed sample {} at {} (price {})",
        accumulator.count(),
        accumulator.last_timestamp(),
        receipt.price
    );
    Ok(())
}
