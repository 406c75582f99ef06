/// Ring buffer of tick-cumulative observations for one token pair.
///
/// The buffer is the price history volatility oracles sample from. Each
/// observation records the running sum of `tick * seconds` at a timestamp, so the
/// time-weighted average tick between any two observations is the difference of
/// their cumulatives divided by the elapsed time.
///
/// Capacity grows lazily: `cardinality_next` can be raised at any time, but the
/// ring only widens once the write index reaches the end of the current
/// cardinality, so retained observations stay in chronological order.
use crate::commit_gate::{ObservationPoint, PriceHistory};
use crate::constants::{MAX_OBSERVATIONS, MAX_TICK, MIN_TICK};
use crate::error::{MathError, VolOracleError};
use anchor_lang::prelude::*;

/// One tick-cumulative reading.
#[zero_copy]
#[derive(Debug, Default)]
pub struct TickObservation {
    /// Sum of `tick * seconds` up to `timestamp`
    pub tick_cumulative: i64, // offset 0
    /// Unix seconds at which the observation was written
    pub timestamp: u32, // offset 8
    /// 1 once the slot holds an observation
    pub initialized: u8, // offset 12
    pub _padding: [u8; 3], // offset 13..16
}

impl TickObservation {
    pub fn is_initialized(&self) -> bool {
        self.initialized != 0
    }

    fn point(&self) -> ObservationPoint {
        ObservationPoint {
            timestamp: self.timestamp,
            tick_cumulative: self.tick_cumulative,
        }
    }
}

/// Observation ring for the pair `(mint_a, mint_b)`, `mint_a < mint_b`.
///
/// Ticks price `mint_a` in units of `mint_b`.
#[account(zero_copy)]
#[repr(C)]
#[derive(Debug)]
pub struct ObservationBuffer {
    /// Only signer allowed to write observations or grow the ring
    pub authority: Pubkey, // offset 0
    pub mint_a: Pubkey, // offset 32
    pub mint_b: Pubkey, // offset 64
    pub observations: [TickObservation; MAX_OBSERVATIONS], // offset 96..1120
    /// Slot holding the newest observation
    pub observation_index: u16, // offset 1120
    /// Slots currently in use by the ring
    pub cardinality: u16, // offset 1122
    /// Slots the ring will grow to on its next wrap
    pub cardinality_next: u16, // offset 1124
    pub bump: u8, // offset 1126
    pub _padding0: u8, // offset 1127
    /// Tick in force since the newest observation
    pub last_tick: i32, // offset 1128
    pub _padding1: [u8; 4], // offset 1132..1136
}

impl ObservationBuffer {
    /// 32 * 3 (keys) + 16 * 64 (observations) + 2 * 3 (indices) + 1 (bump) + 1 + 4 (last_tick) + 4 = 1136 bytes.
    /// Anchor's `#[account(zero_copy)]` handles the 8-byte discriminator separately.
    pub const LEN: usize = 1136;

    /// Sets up an empty ring for the pair.
    ///
    /// # Errors
    /// * `VolOracleError::MintsMustDiffer` - if the two mints are equal
    /// * `VolOracleError::MintsNotCanonical` - if `mint_a > mint_b`
    /// * `VolOracleError::InvalidCardinality` - if `cardinality` is not in `[1, 64]`
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        mint_a: Pubkey,
        mint_b: Pubkey,
        cardinality: u16,
        bump: u8,
    ) -> Result<()> {
        require_keys_neq!(mint_a, mint_b, VolOracleError::MintsMustDiffer);
        require!(mint_a < mint_b, VolOracleError::MintsNotCanonical);
        require!(
            cardinality >= 1 && cardinality as usize <= MAX_OBSERVATIONS,
            VolOracleError::InvalidCardinality
        );

        self.authority = authority;
        self.mint_a = mint_a;
        self.mint_b = mint_b;
        self.observations = [TickObservation::default(); MAX_OBSERVATIONS];
        self.observation_index = 0;
        self.cardinality = cardinality;
        self.cardinality_next = cardinality;
        self.bump = bump;
        self._padding0 = 0;
        self.last_tick = 0;
        self._padding1 = [0; 4];
        Ok(())
    }

    /// Whether `mint` is one side of this buffer's pair.
    pub fn contains_mint(&self, mint: &Pubkey) -> bool {
        self.mint_a == *mint || self.mint_b == *mint
    }

    /// Newest observation, if any has been written.
    pub fn latest(&self) -> Option<&TickObservation> {
        let latest = &self.observations[self.observation_index as usize];
        latest.is_initialized().then_some(latest)
    }

    /// Records that the pair traded at `tick` from `now` onward.
    ///
    /// The cumulative of the new observation credits the previously reported
    /// tick for the seconds since the previous observation.
    ///
    /// # Errors
    /// * `MathError::TickOutOfRange` - if `tick` is outside `[MIN_TICK, MAX_TICK]`
    /// * `VolOracleError::ObservationNotIncreasing` - if `now` is not after the newest observation
    /// * `MathError::Overflow` - if the tick cumulative overflows
    pub fn write(&mut self, tick: i32, now: u32) -> Result<TickObservation> {
        require!(
            (MIN_TICK..=MAX_TICK).contains(&tick),
            MathError::TickOutOfRange
        );

        let Some(last) = self.latest().copied() else {
            let first = TickObservation {
                tick_cumulative: 0,
                timestamp: now,
                initialized: 1,
                _padding: [0; 3],
            };
            self.observations[0] = first;
            self.observation_index = 0;
            self.last_tick = tick;
            return Ok(first);
        };

        require!(
            now > last.timestamp,
            VolOracleError::ObservationNotIncreasing
        );

        let elapsed = (now - last.timestamp) as i64;
        let tick_cumulative = (self.last_tick as i64)
            .checked_mul(elapsed)
            .and_then(|credit| last.tick_cumulative.checked_add(credit))
            .ok_or_else(|| error!(MathError::Overflow))?;

        // Widen only on the last slot so the ring never wraps past unwritten slots
        if self.cardinality_next > self.cardinality
            && self.observation_index == self.cardinality - 1
        {
            self.cardinality = self.cardinality_next;
        }

        let index = (self.observation_index + 1) % self.cardinality;
        let observation = TickObservation {
            tick_cumulative,
            timestamp: now,
            initialized: 1,
            _padding: [0; 3],
        };
        self.observations[index as usize] = observation;
        self.observation_index = index;
        self.last_tick = tick;

        Ok(observation)
    }

    /// Raises the slot count the ring grows to on its next wrap.
    ///
    /// # Errors
    /// * `VolOracleError::InvalidCardinality` - if `cardinality_next` does not
    ///   exceed the current target or exceeds 64
    pub fn grow(&mut self, cardinality_next: u16) -> Result<()> {
        require!(
            cardinality_next > self.cardinality_next
                && cardinality_next as usize <= MAX_OBSERVATIONS,
            VolOracleError::InvalidCardinality
        );
        self.cardinality_next = cardinality_next;
        Ok(())
    }
}

impl PriceHistory for ObservationBuffer {
    fn tick_cumulatives(&self) -> Result<(ObservationPoint, ObservationPoint)> {
        require!(
            self.observation_count() >= 2,
            VolOracleError::ObservationUnavailable
        );

        let newest = &self.observations[self.observation_index as usize];
        let next = (self.observation_index + 1) % self.cardinality;
        let candidate = &self.observations[next as usize];
        // Until the ring has wrapped, the slot after the newest is still empty
        let oldest = if candidate.is_initialized() {
            candidate
        } else {
            &self.observations[0]
        };

        Ok((oldest.point(), newest.point()))
    }

    fn observation_count(&self) -> u16 {
        self.observations[..self.cardinality as usize]
            .iter()
            .filter(|observation| observation.is_initialized())
            .count() as u16
    }
}
