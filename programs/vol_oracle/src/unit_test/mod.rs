// Unit tests for the on-chain state and the commit gate, plus helpers shared
// with the math test suites.

use crate::commit_gate::{ObservationPoint, PriceHistory};
use crate::error::VolOracleError;
use anchor_lang::prelude::*;


/// Create a mock Pubkey for testing
pub(crate) fn mock_pubkey(seed: u8) -> Pubkey {
    let mut bytes = [0u8; 32];
    bytes[0] = seed;
    Pubkey::new_from_array(bytes)
}

/// Asserts that `result` failed with the Anchor error `expected`
pub(crate) fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: impl Into<u32>) {
    let expected = expected.into();
    match result {
        Err(Error::AnchorError(error)) => assert_eq!(
            error.error_code_number, expected,
            "expected error code {} but got {} ({})",
            expected, error.error_code_number, error.error_msg
        ),
        other => panic!("expected error code {} but got {:?}", expected, other),
    }
}

/// Price history with two fixed observations
pub(crate) struct FixedHistory {
    pub oldest: ObservationPoint,
    pub newest: ObservationPoint,
    pub count: u16,
}

impl FixedHistory {
    /// History in which the pair sat at `tick` for `duration` seconds
    pub(crate) fn constant_tick(tick: i32, duration: u32) -> Self {
        Self {
            oldest: ObservationPoint {
                timestamp: 1_000,
                tick_cumulative: 0,
            },
            newest: ObservationPoint {
                timestamp: 1_000 + duration,
                tick_cumulative: tick as i64 * duration as i64,
            },
            count: 2,
        }
    }

    /// History that cannot supply a window
    pub(crate) fn empty() -> Self {
        Self {
            oldest: ObservationPoint::default(),
            newest: ObservationPoint::default(),
            count: 0,
        }
    }
}

impl PriceHistory for FixedHistory {
    fn tick_cumulatives(&self) -> Result<(ObservationPoint, ObservationPoint)> {
        require!(self.count >= 2, VolOracleError::ObservationUnavailable);
        Ok((self.oldest, self.newest))
    }

    fn observation_count(&self) -> u16 {
        self.count
    }
}
