#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use constants::{
    MANUAL_VOL_ORACLE_SEED, MANUAL_VOL_SEED, OBSERVATION_BUFFER_SEED, VOL_ORACLE_SEED,
};
use error::VolOracleError;
use state::manual_vol::{ManualVol, ManualVolOracle};
use state::observation_buffer::ObservationBuffer;
use state::vol_oracle::VolOracle;

// Replace with the deployed program ID.
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

// Estimator, admission control and shared definitions
pub mod commit_gate;
pub mod constants;
pub mod error;
pub mod math;
pub mod state;

// Instruction handlers; their account contexts live below
pub mod instructions;

#[cfg(test)]
pub mod unit_test;

#[program]
pub mod vol_oracle {
    use super::*;

    /// Creates the tick-observation ring for a token pair.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `cardinality` - Initial number of ring slots, in `[1, 64]`.
    pub fn initialize_observation_buffer(
        ctx: Context<InitializeObservationBuffer>,
        cardinality: u16,
    ) -> Result<()> {
        instructions::initialize_observation_buffer::handler(ctx, cardinality)
    }

    /// Writes the pair's current tick into the observation ring.
    pub fn record_observation(ctx: Context<RecordObservation>, tick: i32) -> Result<()> {
        instructions::record_observation::handler(ctx, tick)
    }

    /// Raises the number of slots the observation ring grows to.
    pub fn increase_observation_cardinality(
        ctx: Context<IncreaseObservationCardinality>,
        cardinality_next: u16,
    ) -> Result<()> {
        instructions::increase_observation_cardinality::handler(ctx, cardinality_next)
    }

    /// Creates the volatility record for a (price pair, period).
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `period` - Seconds between admitted samples.
    pub fn initialize_vol_oracle(ctx: Context<InitializeVolOracle>, period: u32) -> Result<()> {
        instructions::initialize_vol_oracle::handler(ctx, period)
    }

    /// Admits the current TWAP as this period's sample.
    pub fn commit(ctx: Context<Commit>) -> Result<()> {
        instructions::commit::handler(ctx)
    }

    /// Realized volatility of the pair at the oracle's period.
    pub fn stdev(ctx: Context<QueryVolOracle>) -> Result<u128> {
        instructions::stdev::handler(ctx)
    }

    /// Current TWAP of the oracle's pair.
    pub fn twap(ctx: Context<QueryVolOracle>) -> Result<u128> {
        instructions::twap::handler(ctx)
    }

    /// Creates a manual volatility registry.
    pub fn initialize_manual_vol_oracle(
        ctx: Context<InitializeManualVolOracle>,
        admin: Pubkey,
    ) -> Result<()> {
        instructions::initialize_manual_vol_oracle::handler(ctx, admin)
    }

    /// Publishes an annualized volatility for a pair id.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `pair_id` - Opaque 32-byte pair identifier.
    /// * `annualized_vol` - Annualized volatility, 1_000_000 = 100%.
    pub fn set_annualized_vol(
        ctx: Context<SetAnnualizedVol>,
        pair_id: [u8; 32],
        annualized_vol: u64,
    ) -> Result<()> {
        instructions::set_annualized_vol::handler(ctx, pair_id, annualized_vol)
    }

    /// Hands a manual volatility registry to a new admin.
    pub fn transfer_manual_vol_admin(
        ctx: Context<TransferManualVolAdmin>,
        new_admin: Pubkey,
    ) -> Result<()> {
        instructions::transfer_manual_vol_admin::handler(ctx, new_admin)
    }
}

#[derive(Accounts)]
pub struct InitializeObservationBuffer<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + ObservationBuffer::LEN,
        seeds = [
            OBSERVATION_BUFFER_SEED,
            mint_a.key().as_ref(),
            mint_b.key().as_ref()
        ],
        bump
    )]
    pub observation_buffer: AccountLoader<'info, ObservationBuffer>,

    pub mint_a: Account<'info, Mint>,
    pub mint_b: Account<'info, Mint>,

    /// Signer allowed to write observations
    pub authority: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct RecordObservation<'info> {
    #[account(mut, has_one = authority @ VolOracleError::Unauthorized)]
    pub observation_buffer: AccountLoader<'info, ObservationBuffer>,

    pub authority: Signer<'info>,
}

#[derive(Accounts)]
pub struct IncreaseObservationCardinality<'info> {
    #[account(mut, has_one = authority @ VolOracleError::Unauthorized)]
    pub observation_buffer: AccountLoader<'info, ObservationBuffer>,

    pub authority: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(period: u32)]
pub struct InitializeVolOracle<'info> {
    #[account(
        init,
        payer = payer,
        space = VolOracle::LEN,
        seeds = [
            VOL_ORACLE_SEED,
            observation_buffer.key().as_ref(),
            base_mint.key().as_ref(),
            period.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub vol_oracle: Account<'info, VolOracle>,

    pub observation_buffer: AccountLoader<'info, ObservationBuffer>,

    pub base_mint: Account<'info, Mint>,
    pub quote_mint: Account<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Commit<'info> {
    #[account(
        mut,
        has_one = observation_buffer @ VolOracleError::ObservationBufferMismatch
    )]
    pub vol_oracle: Account<'info, VolOracle>,

    pub observation_buffer: AccountLoader<'info, ObservationBuffer>,

    pub committer: Signer<'info>,
}

#[derive(Accounts)]
pub struct QueryVolOracle<'info> {
    #[account(has_one = observation_buffer @ VolOracleError::ObservationBufferMismatch)]
    pub vol_oracle: Account<'info, VolOracle>,

    pub observation_buffer: AccountLoader<'info, ObservationBuffer>,
}

#[derive(Accounts)]
pub struct InitializeManualVolOracle<'info> {
    #[account(
        init,
        payer = payer,
        space = ManualVolOracle::LEN,
        seeds = [MANUAL_VOL_ORACLE_SEED, payer.key().as_ref()],
        bump
    )]
    pub manual_vol_oracle: Account<'info, ManualVolOracle>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(pair_id: [u8; 32])]
pub struct SetAnnualizedVol<'info> {
    pub manual_vol_oracle: Account<'info, ManualVolOracle>,

    #[account(
        init_if_needed,
        payer = payer,
        space = ManualVol::LEN,
        seeds = [
            MANUAL_VOL_SEED,
            manual_vol_oracle.key().as_ref(),
            pair_id.as_ref()
        ],
        bump
    )]
    pub manual_vol: Account<'info, ManualVol>,

    pub admin: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct TransferManualVolAdmin<'info> {
    #[account(mut)]
    pub manual_vol_oracle: Account<'info, ManualVolOracle>,

    pub admin: Signer<'info>,
}
