use anchor_lang::prelude::*;
use crate::constants::NFT_SUPPLY;
use crate::errors::ShapelyError;
use crate::utils::fees::{split_price, Settlement};

/// Escrow lifecycle of a single accessory offered by a single artist.
///
/// `Unlisted` must stay the first variant: a freshly allocated record is
/// zeroed and has to read back as unlisted.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingState {
    #[default]
    Unlisted,
    Listed,
    Delisted,
    Sold,
}

#[account]
#[derive(InitSpace)]
pub struct Listing {
    pub artist: Pubkey,
    pub accessory_mint: Pubkey,
    pub config: Pubkey,
    pub price: u64,
    pub state: ListingState,
    pub bump: u8,
}

impl Listing {
    pub const SPACE: usize = 8 + Listing::INIT_SPACE;

    /// Binds a fresh record to its artist and mint. No-op on a reused record.
    pub fn open(&mut self, artist: Pubkey, accessory_mint: Pubkey, config: Pubkey, bump: u8) {
        if self.artist == Pubkey::default() {
            self.artist = artist;
            self.accessory_mint = accessory_mint;
            self.config = config;
            self.bump = bump;
        }
    }

    pub fn is_listed(&self) -> bool {
        self.state == ListingState::Listed
    }

    /// Covers both the first listing and every relist of the same record.
    pub fn list(&mut self, artist: &Pubkey, price: u64, artist_units: u64) -> Result<()> {
        require!(price > 0, ShapelyError::InvalidPrice);
        require_keys_eq!(self.artist, *artist, ShapelyError::Unauthorized);
        require!(!self.is_listed(), ShapelyError::AlreadyListed);
        require!(artist_units >= NFT_SUPPLY, ShapelyError::NotOwner);

        self.price = price;
        self.state = ListingState::Listed;
        Ok(())
    }

    pub fn delist(&mut self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.artist, *caller, ShapelyError::Unauthorized);
        require!(self.is_listed(), ShapelyError::NotListed);

        self.price = 0;
        self.state = ListingState::Delisted;
        Ok(())
    }

    /// Closes the sale cycle and returns how the buyer's payment is split.
    pub fn purchase(&mut self, buyer_lamports: u64, fee_bps: u16) -> Result<Settlement> {
        require!(self.is_listed(), ShapelyError::NotListed);
        require!(buyer_lamports >= self.price, ShapelyError::InsufficientFunds);

        let settlement = split_price(self.price, fee_bps)?;

        self.price = 0;
        self.state = ListingState::Sold;
        Ok(settlement)
    }

    /// While listed the vault must hold exactly the escrowed unit.
    pub fn ensure_escrowed(&self, vault_amount: u64) -> Result<()> {
        require!(
            self.is_listed() && vault_amount == NFT_SUPPLY,
            ShapelyError::NotListed
        );
        Ok(())
    }
}
