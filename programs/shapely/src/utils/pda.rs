//! Address derivation shared by the program's account constraints and by
//! off-chain callers. Each scheme here is part of the wire contract: a client
//! that derives with different seeds will not find the account.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey::{MAX_SEEDS, MAX_SEED_LEN};
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::metadata::mpl_token_metadata;

use crate::constants::*;
use crate::errors::ShapelyError;
use crate::state::CollectionKind;

/// Checked derivation for caller-supplied seeds.
///
/// One seed slot is reserved for the bump, so at most `MAX_SEEDS - 1`
/// components are accepted.
pub fn derive_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    require!(seeds.len() < MAX_SEEDS, ShapelyError::TooManySeeds);
    require!(
        seeds.iter().all(|seed| seed.len() <= MAX_SEED_LEN),
        ShapelyError::SeedTooLong
    );

    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or(error!(ShapelyError::AddressDerivationFailed))
}

pub fn find_config_address(seed: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED, &seed.to_le_bytes()], &crate::ID)
}

pub fn find_treasury_address(config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY_SEED, config.as_ref()], &crate::ID)
}

pub fn find_collection_address(kind: CollectionKind, config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[kind.seed(), config.as_ref()], &crate::ID)
}

pub fn find_avatar_mint_address(collector: &Pubkey, avatar_collection: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[AVATAR_SEED, collector.as_ref(), avatar_collection.as_ref()],
        &crate::ID,
    )
}

pub fn find_listing_address(accessory_mint: &Pubkey, artist: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[LISTING_SEED, accessory_mint.as_ref(), artist.as_ref()],
        &crate::ID,
    )
}

/// The escrow vault is the listing's associated token account.
pub fn find_vault_address(accessory_mint: &Pubkey, listing: &Pubkey) -> Pubkey {
    get_associated_token_address(listing, accessory_mint)
}

pub fn find_metadata_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[METADATA_SEED, mpl_token_metadata::ID.as_ref(), mint.as_ref()],
        &mpl_token_metadata::ID,
    )
}

pub fn find_master_edition_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            mpl_token_metadata::ID.as_ref(),
            mint.as_ref(),
            EDITION_SEED,
        ],
        &mpl_token_metadata::ID,
    )
}
