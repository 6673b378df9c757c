use anchor_lang::prelude::*;
use crate::constants::MAX_FEE_BPS;
use crate::errors::ShapelyError;

/// One marketplace deployment, addressed by `["config", seed]`.
#[account]
#[derive(InitSpace)]
pub struct Config {
    pub admin: Pubkey,
    /// Config ID
    pub seed: u64,
    /// Accessory sales commission (in basis points e.g 150 = 1.5%)
    pub fee_bps: u16,
    pub avatar_collection: Pubkey,
    pub accessory_collection: Pubkey,
    pub bump: u8,
    pub treasury_bump: u8,
    pub avatar_collection_bump: u8,
    pub accessory_collection_bump: u8,
}

impl Config {
    pub const SPACE: usize = 8 + Config::INIT_SPACE;

    pub fn validate_fee(fee_bps: u16) -> Result<()> {
        require!(fee_bps <= MAX_FEE_BPS, ShapelyError::InvalidFee);
        Ok(())
    }

    /// Collection references are only written by `initialize`, so a zeroed
    /// record has never been initialized.
    pub fn is_initialized(&self) -> bool {
        self.avatar_collection != Pubkey::default()
            || self.accessory_collection != Pubkey::default()
    }
}
