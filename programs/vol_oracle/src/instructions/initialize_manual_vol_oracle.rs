use crate::InitializeManualVolOracle;
use anchor_lang::prelude::*;

/// Creates a manual volatility registry administered by `admin`.
pub fn handler(ctx: Context<InitializeManualVolOracle>, admin: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.manual_vol_oracle;
    registry.initialize(admin, ctx.bumps.manual_vol_oracle);

    msg!("Manual vol oracle initialized with admin {}", admin);
    Ok(())
}
