use anchor_lang::prelude::*;

#[error_code]
pub enum VolOracleError {
    #[msg("Not commit phase: outside the window around the period boundary")]
    NotInCommitPhase,

    #[msg("Already committed for this period")]
    AlreadyCommitted,

    #[msg("Sample count would exceed 65535")]
    CapacityExceeded,

    #[msg("Price history cannot supply two observations")]
    ObservationUnavailable,

    #[msg("Observation window has zero duration")]
    InvalidObservationWindow,

    #[msg("Period must be greater than zero")]
    InvalidPeriod,

    #[msg("Timestamp does not fit a u32")]
    TimestampOutOfRange,

    #[msg("Stored accumulator violates its invariants")]
    CorruptAccumulator,

    #[msg("Observation timestamp must be strictly increasing")]
    ObservationNotIncreasing,

    #[msg("Observation cardinality must be in [1, 64] and may only grow")]
    InvalidCardinality,

    #[msg("Signer is not the authority for this account")]
    Unauthorized,

    #[msg("Annualized volatility must be in (0, 2000%]")]
    InvalidAnnualizedVol,

    #[msg("Base and quote mints must differ")]
    MintsMustDiffer,

    #[msg("Mints must be passed in canonical order (mint_a < mint_b)")]
    MintsNotCanonical,

    #[msg("Mint does not belong to the observation buffer pair")]
    MintMismatch,

    #[msg("Observation buffer does not belong to this oracle")]
    ObservationBufferMismatch,
}

#[error_code]
pub enum MathError {
    #[msg("Arithmetic overflow detected")]
    Overflow = 9000,

    #[msg("Division by zero attempted")]
    DivisionByZero = 9001,

    #[msg("Tick value outside valid range [-887272, 887272]")]
    TickOutOfRange = 9002,

    #[msg("Running mean does not fit 96 bits")]
    MeanOutOfRange = 9003,

    #[msg("Sum of squared deviations does not fit 112 bits")]
    M2OutOfRange = 9004,

    #[msg("10^decimals does not fit a u128 base amount")]
    BaseAmountOverflow = 9005,
}
