/// Administrator-maintained annualized volatilities.
///
/// A `ManualVolOracle` is a registry whose admin publishes one annualized
/// volatility per 32-byte pair identifier. Each entry lives in its own
/// `ManualVol` PDA derived from the registry and the pair id.
///
/// Write access goes through an `AdminCapability`, which can only be obtained by
/// presenting the registry's current admin key.
use crate::constants::MAX_ANNUALIZED_VOL;
use crate::error::VolOracleError;
use anchor_lang::prelude::*;

#[account]
#[derive(Debug, Default)]
pub struct ManualVolOracle {
    pub admin: Pubkey,
    pub bump: u8,
}

/// Proof that the registry's admin signed the current instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminCapability {
    oracle: Pubkey,
    admin: Pubkey,
}

impl AdminCapability {
    /// Registry the capability was issued by.
    pub fn oracle(&self) -> Pubkey {
        self.oracle
    }
}

impl ManualVolOracle {
    /// 8 (discriminator) + 32 (admin) + 1 (bump)
    pub const LEN: usize = 8 + 32 + 1;

    pub fn initialize(&mut self, admin: Pubkey, bump: u8) {
        self.admin = admin;
        self.bump = bump;
    }

    /// Issues a capability for the registry at `oracle` if `signer` is its admin.
    ///
    /// # Errors
    /// * `VolOracleError::Unauthorized` - if `signer` is not the admin
    pub fn authorize(&self, oracle: Pubkey, signer: &Pubkey) -> Result<AdminCapability> {
        require_keys_eq!(*signer, self.admin, VolOracleError::Unauthorized);
        Ok(AdminCapability {
            oracle,
            admin: self.admin,
        })
    }

    /// Hands the registry to `new_admin`. Capabilities issued to the previous
    /// admin stop being accepted.
    pub fn transfer_admin(&mut self, cap: &AdminCapability, new_admin: Pubkey) -> Result<()> {
        require_keys_eq!(cap.admin, self.admin, VolOracleError::Unauthorized);
        self.admin = new_admin;
        Ok(())
    }
}

#[account]
#[derive(Debug, Default)]
pub struct ManualVol {
    /// Registry this entry belongs to
    pub oracle: Pubkey,
    pub pair_id: [u8; 32],
    /// Annualized volatility scaled by `VOL_SCALE` (1_000_000 = 100%)
    pub annualized_vol: u64,
    /// Unix seconds of the last update
    pub updated_at: i64,
    pub bump: u8,
}

impl ManualVol {
    /// 8 (discriminator) + 32 (oracle) + 32 (pair_id) + 8 (vol) + 8 (updated_at) + 1 (bump)
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 1;

    /// Publishes `annualized_vol` for `pair_id`.
    ///
    /// # Errors
    /// * `VolOracleError::Unauthorized` - if the entry belongs to another registry
    /// * `VolOracleError::InvalidAnnualizedVol` - if the value is zero or above 2000%
    pub fn set(
        &mut self,
        cap: &AdminCapability,
        pair_id: [u8; 32],
        annualized_vol: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        if self.oracle != Pubkey::default() {
            require_keys_eq!(self.oracle, cap.oracle, VolOracleError::Unauthorized);
        }
        require!(
            annualized_vol > 0 && annualized_vol <= MAX_ANNUALIZED_VOL,
            VolOracleError::InvalidAnnualizedVol
        );

        self.oracle = cap.oracle;
        self.pair_id = pair_id;
        self.annualized_vol = annualized_vol;
        self.updated_at = now;
        self.bump = bump;
        Ok(())
    }
}
