use crate::TransferManualVolAdmin;
use anchor_lang::prelude::*;

/// Hands the manual volatility registry to `new_admin`.
///
/// # Errors
/// * `VolOracleError::Unauthorized` - If the signer is not the current admin
pub fn handler(ctx: Context<TransferManualVolAdmin>, new_admin: Pubkey) -> Result<()> {
    let oracle = ctx.accounts.manual_vol_oracle.key();
    let signer = ctx.accounts.admin.key();
    let registry = &mut ctx.accounts.manual_vol_oracle;

    let cap = registry.authorize(oracle, &signer)?;
    registry.transfer_admin(&cap, new_admin)?;

    msg!("Manual vol oracle admin transferred from {} to {}", signer, new_admin);
    Ok(())
}
