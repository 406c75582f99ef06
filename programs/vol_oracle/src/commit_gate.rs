/// Commit Gate Module
///
/// Admission control for the volatility accumulator. A sample may be admitted
/// at most once per period, only while the clock is within
/// `COMMIT_PHASE_DURATION` of the nearest period boundary, and the admitted
/// sample is always the time-weighted average price read from a price history.
///
/// The gate never mutates state: `commit` returns the next accumulator and the
/// caller stores it, so a failed commit leaves the stored record untouched.
use crate::constants::COMMIT_PHASE_DURATION;
use crate::error::{MathError, VolOracleError};
use crate::math::full_math::to_u128;
use crate::math::price_math::{
    base_amount_for_decimals, get_quote_at_tick, time_weighted_average_tick,
};
use crate::state::accumulator::Accumulator;
use anchor_lang::prelude::*;

/// A timestamped tick-accumulator reading.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ObservationPoint {
    pub timestamp: u32,
    pub tick_cumulative: i64,
}

/// Source of tick-cumulative observations for TWAP sampling.
pub trait PriceHistory {
    /// Oldest still-retained and newest observations, in that order.
    ///
    /// Fails with `VolOracleError::ObservationUnavailable` when fewer than two
    /// observations are retained.
    fn tick_cumulatives(&self) -> Result<(ObservationPoint, ObservationPoint)>;

    /// Number of retained observations.
    fn observation_count(&self) -> u16;
}

/// Where the clock sits relative to the commit window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitPhase {
    /// More than `COMMIT_PHASE_DURATION` away from the nearest boundary.
    AwaitingWindow,
    /// Within the window; `boundary` is the nearest period boundary.
    WindowOpen { boundary: u32 },
}

/// Result of a successful admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitReceipt {
    /// Accumulator after the sample was admitted.
    pub accumulator: Accumulator,
    /// The TWAP price that was admitted.
    pub price: u128,
}

/// Rounds `timestamp` to the nearest multiple of `period` (half rounds up).
///
/// The remainder is compared against the exact half period, so odd periods
/// round to the truly nearest boundary.
///
/// # Returns
/// * `(boundary, gap)` - the nearest boundary and the distance to it in seconds
pub fn seconds_from_period(timestamp: u32, period: u32) -> Result<(u32, u32)> {
    require!(period > 0, VolOracleError::InvalidPeriod);

    let rem = timestamp % period;
    if (rem as u64) * 2 < period as u64 {
        return Ok((timestamp - rem, rem));
    }

    let gap = period - rem;
    let boundary = timestamp.checked_add(gap).ok_or(MathError::Overflow)?;
    Ok((boundary, gap))
}

/// Converts a unix timestamp from the cluster clock into the u32 seconds the
/// accumulator stores.
pub fn to_commit_timestamp(unix_timestamp: i64) -> Result<u32> {
    u32::try_from(unix_timestamp).map_err(|_| VolOracleError::TimestampOutOfRange.into())
}

/// Time-weighted average price of `base_mint` in `quote_mint` units over the
/// full window the price history retains, for one whole base token.
///
/// # Errors
/// * `VolOracleError::ObservationUnavailable` - fewer than two observations retained
/// * `VolOracleError::InvalidObservationWindow` - the retained window has zero duration
/// * `MathError::*` - the average tick or the quote is out of range
pub fn twap<H: PriceHistory + ?Sized>(
    history: &H,
    base_mint: &Pubkey,
    quote_mint: &Pubkey,
    base_decimals: u8,
) -> Result<u128> {
    let (oldest, newest) = history.tick_cumulatives()?;

    let duration = newest
        .timestamp
        .checked_sub(oldest.timestamp)
        .ok_or(VolOracleError::InvalidObservationWindow)?;
    require!(duration > 0, VolOracleError::InvalidObservationWindow);

    let average_tick =
        time_weighted_average_tick(oldest.tick_cumulative, newest.tick_cumulative, duration)?;
    let base_amount = base_amount_for_decimals(base_decimals)?;
    let quote = get_quote_at_tick(average_tick, base_amount, base_mint, quote_mint)?;

    to_u128(quote)
}

/// Everything needed to draw one TWAP sample.
pub struct TwapSampler<'a, H: PriceHistory + ?Sized> {
    pub history: &'a H,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub base_decimals: u8,
}

impl<'a, H: PriceHistory + ?Sized> TwapSampler<'a, H> {
    pub fn sample(&self) -> Result<u128> {
        twap(
            self.history,
            &self.base_mint,
            &self.quote_mint,
            self.base_decimals,
        )
    }
}

/// Period-gated admission into an accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitGate {
    period: u32,
}

impl CommitGate {
    /// # Errors
    /// * `VolOracleError::InvalidPeriod` - if `period` is zero
    pub fn new(period: u32) -> Result<Self> {
        require!(period > 0, VolOracleError::InvalidPeriod);
        Ok(Self { period })
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    /// Window state at `now`. The window is inclusive of its edges.
    pub fn phase(&self, now: u32) -> Result<CommitPhase> {
        let (boundary, gap) = seconds_from_period(now, self.period)?;
        if gap <= COMMIT_PHASE_DURATION {
            Ok(CommitPhase::WindowOpen { boundary })
        } else {
            Ok(CommitPhase::AwaitingWindow)
        }
    }

    /// Whether a full period has passed since the last admitted sample.
    /// A virgin accumulator has no prior commit to wait on.
    pub fn period_elapsed(&self, accumulator: &Accumulator, now: u32) -> bool {
        accumulator.is_virgin()
            || now as u64 >= accumulator.last_timestamp() as u64 + self.period as u64
    }

    /// Admits one TWAP sample into `accumulator` at `now`.
    ///
    /// The returned accumulator is anchored to the rounded period boundary,
    /// not to `now`, so later gaps are measured on the period grid.
    ///
    /// # Errors
    /// * `VolOracleError::NotInCommitPhase` - outside the commit window
    /// * `VolOracleError::AlreadyCommitted` - less than one period since the last commit
    /// * any sampling or estimator error
    pub fn commit<H: PriceHistory + ?Sized>(
        &self,
        accumulator: &Accumulator,
        now: u32,
        sampler: &TwapSampler<'_, H>,
    ) -> Result<CommitReceipt> {
        let boundary = match self.phase(now)? {
            CommitPhase::WindowOpen { boundary } => boundary,
            CommitPhase::AwaitingWindow => return Err(VolOracleError::NotInCommitPhase.into()),
        };

        require!(
            self.period_elapsed(accumulator, now),
            VolOracleError::AlreadyCommitted
        );

        let price = sampler.sample()?;
        let next = accumulator.record(price, boundary)?;

        Ok(CommitReceipt {
            accumulator: next,
            price,
        })
    }
}
