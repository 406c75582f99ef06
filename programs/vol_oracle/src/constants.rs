/// Volatility Oracle Protocol Constants
///
/// Bounds and fixed parameters shared by the estimator, the commit gate and the
/// on-chain accounts. Per-oracle parameters (period, ring cardinality) are set
/// when the accounts are initialized.
use primitive_types::U256;

/// Length of the commit window on either side of every period boundary, in seconds.
pub const COMMIT_PHASE_DURATION: u32 = 1800;

/// Maximum number of samples the accumulator can hold (u16 count field).
pub const MAX_SAMPLE_COUNT: u16 = u16::MAX;

/// Width of the packed running mean.
pub const MEAN_BITS: u32 = 96;

/// Width of the packed sum of squared deviations.
pub const M2_BITS: u32 = 112;

/// Largest running mean that fits the packed record (2^96 - 1).
pub const MAX_MEAN: u128 = (1u128 << MEAN_BITS) - 1;

/// Largest M2 that fits the packed record (2^112 - 1).
pub const MAX_M2: u128 = (1u128 << M2_BITS) - 1;

/// The minimum tick index, log base sqrt(1.0001) of 2^-128.
pub const MIN_TICK: i32 = -887272;

/// The maximum tick index.
pub const MAX_TICK: i32 = 887272;

/// Sqrt ratio (Q64.96) at `MIN_TICK`.
pub const MIN_SQRT_RATIO: u128 = 4295128739;

/// Sqrt ratio (Q64.96) at `MAX_TICK`, 0xfffd8963efd1fc6a506488495d951d5263988d26.
pub const MAX_SQRT_RATIO: U256 = U256([0x5d951d5263988d26, 0xefd1fc6a50648849, 0xfffd8963, 0]);

/// Largest decimal exponent whose power of ten still fits a u128 base amount.
pub const MAX_BASE_DECIMALS: u8 = 38;

/// Capacity of the observation ring buffer.
pub const MAX_OBSERVATIONS: usize = 64;

/// Annualized volatility scale for the manual store (1_000_000 = 100%).
pub const VOL_SCALE: u64 = 1_000_000;

/// Upper bound accepted by the manual store (2000%).
pub const MAX_ANNUALIZED_VOL: u64 = 20 * VOL_SCALE;

/// PDA seeds
pub const VOL_ORACLE_SEED: &[u8] = b"vol_oracle";
pub const OBSERVATION_BUFFER_SEED: &[u8] = b"observations";
pub const MANUAL_VOL_ORACLE_SEED: &[u8] = b"manual_vol_oracle";
pub const MANUAL_VOL_SEED: &[u8] = b"manual_vol";
