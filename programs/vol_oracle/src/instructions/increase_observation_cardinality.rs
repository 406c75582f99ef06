use crate::IncreaseObservationCardinality;
use anchor_lang::prelude::*;

/// Raises the number of slots the observation ring grows to.
///
/// The new slots come into use once the write index next reaches the end of
/// the current ring.
pub fn handler(ctx: Context<IncreaseObservationCardinality>, cardinality_next: u16) -> Result<()> {
    let mut buffer = ctx.accounts.observation_buffer.load_mut()?;
    let previous = buffer.cardinality_next;
    buffer.grow(cardinality_next)?;

    msg!(
        "Observation cardinality target raised from {} to {}",
        previous,
        cardinality_next
    );
    Ok(())
}
