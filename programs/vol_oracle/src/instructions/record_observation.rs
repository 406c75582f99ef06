use crate::commit_gate::to_commit_timestamp;
use crate::RecordObservation;
use anchor_lang::prelude::*;

/// Event emitted when a tick observation is written
#[event]
pub struct ObservationRecorded {
    /// The buffer that was written
    pub observation_buffer: Pubkey,

    /// Tick in force from this observation onward
    pub tick: i32,

    /// Tick cumulative stored with the observation
    pub tick_cumulative: i64,

    /// Slot the observation was written to
    pub index: u16,

    /// The timestamp of the observation
    pub timestamp: u32,
}

/// Records the pair's current tick at the cluster clock time.
///
/// # Errors
/// * `MathError::TickOutOfRange` - If `tick` is outside the tick domain
/// * `VolOracleError::ObservationNotIncreasing` - If an observation already exists at or after now
pub fn handler(ctx: Context<RecordObservation>, tick: i32) -> Result<()> {
    let now = to_commit_timestamp(Clock::get()?.unix_timestamp)?;
    let buffer_key = ctx.accounts.observation_buffer.key();
    let mut buffer = ctx.accounts.observation_buffer.load_mut()?;

    let observation = buffer.write(tick, now)?;

    emit!(ObservationRecorded {
        observation_buffer: buffer_key,
        tick,
        tick_cumulative: observation.tick_cumulative,
        index: buffer.observation_index,
        timestamp: now,
    });
    Ok(())
}
