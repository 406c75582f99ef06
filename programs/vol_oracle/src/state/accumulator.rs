/// Accumulator Module
///
/// The persistent running-statistics record of a volatility oracle: sample
/// count, the period boundary of the last admitted sample, the running mean and
/// the running sum of squared deviations (Welford's M2).
///
/// The record is stored as a fixed 32-byte little-endian layout whose field
/// widths (16 + 32 + 96 + 112 bits) bound every value the estimator may
/// produce. Packing range-checks each field instead of truncating it.
use crate::constants::{MAX_M2, MAX_MEAN};
use crate::error::VolOracleError;
use crate::math::welford;
use anchor_lang::prelude::*;

/// Running statistics over admitted samples.
///
/// Fields are private so that the only ways to obtain a non-virgin accumulator
/// are `record` (one admitted sample) and `unpack` (a previously stored record).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Accumulator {
    count: u16,
    last_timestamp: u32,
    mean: u128,
    m2: u128,
}

impl Accumulator {
    /// Size of the packed record in bytes.
    pub const PACKED_LEN: usize = 32;

    const COUNT_RANGE: core::ops::Range<usize> = 0..2;
    const TIMESTAMP_RANGE: core::ops::Range<usize> = 2..6;
    const MEAN_RANGE: core::ops::Range<usize> = 6..18;
    const M2_RANGE: core::ops::Range<usize> = 18..32;

    #[cfg(test)]
    pub(crate) fn from_raw_parts(count: u16, last_timestamp: u32, mean: u128, m2: u128) -> Self {
        Self {
            count,
            last_timestamp,
            mean,
            m2,
        }
    }

    /// Number of admitted samples.
    pub fn count(&self) -> u16 {
        self.count
    }

    /// Period boundary the last sample was anchored to.
    pub fn last_timestamp(&self) -> u32 {
        self.last_timestamp
    }

    /// Running mean of admitted samples.
    pub fn mean(&self) -> u128 {
        self.mean
    }

    /// Running sum of squared deviations from the mean.
    pub fn m2(&self) -> u128 {
        self.m2
    }

    /// True until the first sample is admitted.
    pub fn is_virgin(&self) -> bool {
        self.count == 0
    }

    /// Population variance of the admitted samples.
    pub fn variance(&self) -> u128 {
        welford::get_variance(self.count, self.m2)
    }

    /// Population standard deviation of the admitted samples.
    pub fn stdev(&self) -> u128 {
        welford::get_stdev(self.count, self.m2)
    }

    /// Returns the accumulator that results from admitting `sample` at the
    /// period boundary `timestamp`. `self` is left untouched.
    ///
    /// # Errors
    /// * `VolOracleError::TimestampOutOfRange` - if `timestamp` precedes the last sample
    /// * any error from `welford::update`
    pub fn record(&self, sample: u128, timestamp: u32) -> Result<Accumulator> {
        require!(
            timestamp >= self.last_timestamp,
            VolOracleError::TimestampOutOfRange
        );

        let (count, mean, m2) = welford::update(self.count, self.mean, self.m2, sample)?;

        Ok(Accumulator {
            count,
            last_timestamp: timestamp,
            mean,
            m2,
        })
    }

    /// Serializes the accumulator into its 32-byte record.
    ///
    /// # Errors
    /// * `VolOracleError::CorruptAccumulator` - if mean or m2 exceed their field widths
    pub fn pack(&self) -> Result<[u8; Self::PACKED_LEN]> {
        require!(
            self.mean <= MAX_MEAN && self.m2 <= MAX_M2,
            VolOracleError::CorruptAccumulator
        );

        let mut bytes = [0u8; Self::PACKED_LEN];
        bytes[Self::COUNT_RANGE].copy_from_slice(&self.count.to_le_bytes());
        bytes[Self::TIMESTAMP_RANGE].copy_from_slice(&self.last_timestamp.to_le_bytes());
        bytes[Self::MEAN_RANGE].copy_from_slice(&self.mean.to_le_bytes()[..12]);
        bytes[Self::M2_RANGE].copy_from_slice(&self.m2.to_le_bytes()[..14]);
        Ok(bytes)
    }

    /// Deserializes a 32-byte record.
    ///
    /// # Errors
    /// * `VolOracleError::CorruptAccumulator` - if a zero count carries a non-zero mean or m2
    pub fn unpack(bytes: &[u8; Self::PACKED_LEN]) -> Result<Self> {
        let mut count = [0u8; 2];
        count.copy_from_slice(&bytes[Self::COUNT_RANGE]);
        let mut last_timestamp = [0u8; 4];
        last_timestamp.copy_from_slice(&bytes[Self::TIMESTAMP_RANGE]);
        let mut mean = [0u8; 16];
        mean[..12].copy_from_slice(&bytes[Self::MEAN_RANGE]);
        let mut m2 = [0u8; 16];
        m2[..14].copy_from_slice(&bytes[Self::M2_RANGE]);

        let accumulator = Accumulator {
            count: u16::from_le_bytes(count),
            last_timestamp: u32::from_le_bytes(last_timestamp),
            mean: u128::from_le_bytes(mean),
            m2: u128::from_le_bytes(m2),
        };

        if accumulator.count == 0 {
            require!(
                accumulator.mean == 0 && accumulator.m2 == 0,
                VolOracleError::CorruptAccumulator
            );
        }

        Ok(accumulator)
    }
}
