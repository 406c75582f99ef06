/// Per-(pair, period) volatility record.
///
/// A `VolOracle` samples the TWAP of `base_mint` in `quote_mint` from its
/// observation buffer once per period and folds each sample into a packed
/// Welford accumulator. The derived standard deviation is the realized
/// volatility of the pair at that period.
///
/// Accounts of this type are PDAs derived from the observation buffer, the base
/// mint and the period, so exactly one record exists per price pair and period.
use crate::commit_gate::{self, CommitGate, CommitReceipt, PriceHistory, TwapSampler};
use crate::constants::MAX_BASE_DECIMALS;
use crate::error::{MathError, VolOracleError};
use crate::state::accumulator::Accumulator;
use anchor_lang::prelude::*;

#[account]
#[derive(Debug, Default)]
pub struct VolOracle {
    /// Price history samples are drawn from
    pub observation_buffer: Pubkey,
    /// Token being priced
    pub base_mint: Pubkey,
    /// Token prices are denominated in
    pub quote_mint: Pubkey,
    /// Seconds between admitted samples
    pub period: u32,
    /// Decimals of `base_mint`; a sample prices one whole base token
    pub base_decimals: u8,
    pub bump: u8,
    /// Packed `Accumulator`
    pub accumulator: [u8; 32],
}

impl VolOracle {
    /// 8 (discriminator) + 32 * 3 (keys) + 4 (period) + 1 (decimals) + 1 (bump) + 32 (accumulator)
    pub const LEN: usize = 8 + 32 * 3 + 4 + 1 + 1 + Accumulator::PACKED_LEN;

    /// # Errors
    /// * `VolOracleError::InvalidPeriod` - if `period` is zero
    /// * `VolOracleError::MintsMustDiffer` - if base and quote are the same mint
    /// * `MathError::BaseAmountOverflow` - if `base_decimals` exceeds 38
    pub fn initialize(
        &mut self,
        observation_buffer: Pubkey,
        base_mint: Pubkey,
        quote_mint: Pubkey,
        period: u32,
        base_decimals: u8,
        bump: u8,
    ) -> Result<()> {
        CommitGate::new(period)?;
        require_keys_neq!(base_mint, quote_mint, VolOracleError::MintsMustDiffer);
        require!(
            base_decimals <= MAX_BASE_DECIMALS,
            MathError::BaseAmountOverflow
        );

        self.observation_buffer = observation_buffer;
        self.base_mint = base_mint;
        self.quote_mint = quote_mint;
        self.period = period;
        self.base_decimals = base_decimals;
        self.bump = bump;
        self.accumulator = Accumulator::default().pack()?;
        Ok(())
    }

    /// Decodes the stored accumulator.
    pub fn accumulator(&self) -> Result<Accumulator> {
        Accumulator::unpack(&self.accumulator)
    }

    pub fn gate(&self) -> Result<CommitGate> {
        CommitGate::new(self.period)
    }

    /// Admits one TWAP sample drawn from `history` at `now`.
    ///
    /// The stored accumulator is replaced only after the gate, the sampler and
    /// the estimator have all succeeded.
    pub fn commit<H: PriceHistory + ?Sized>(
        &mut self,
        history: &H,
        now: u32,
    ) -> Result<CommitReceipt> {
        let current = self.accumulator()?;
        let sampler = TwapSampler {
            history,
            base_mint: self.base_mint,
            quote_mint: self.quote_mint,
            base_decimals: self.base_decimals,
        };

        let receipt = self.gate()?.commit(&current, now, &sampler)?;
        self.accumulator = receipt.accumulator.pack()?;

        Ok(receipt)
    }

    /// Realized volatility: population standard deviation of admitted samples.
    pub fn stdev(&self) -> Result<u128> {
        Ok(self.accumulator()?.stdev())
    }

    /// Current TWAP of the pair over the window `history` retains.
    pub fn twap<H: PriceHistory + ?Sized>(&self, history: &H) -> Result<u128> {
        commit_gate::twap(
            history,
            &self.base_mint,
            &self.quote_mint,
            self.base_decimals,
        )
    }
}
