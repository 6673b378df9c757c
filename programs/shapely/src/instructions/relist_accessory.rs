use anchor_lang::prelude::*;
use anchor_spl::metadata::{Metadata, MetadataAccount};
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::ShapelyError;
use crate::instructions::list_accessory::AccessoryListed;
use crate::state::{Config, Listing};
use crate::utils::escrow::transfer_nft;
use crate::utils::metadata::is_verified_member;

/// Puts an accessory back on sale through its existing listing record.
#[derive(Accounts)]
pub struct RelistAccessory<'info> {
    #[account(mut)]
    pub artist: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED, config.seed.to_le_bytes().as_ref()],
        bump = config.bump
    )]
    pub config: Box<Account<'info, Config>>,

    pub accessory_mint: Box<Account<'info, Mint>>,

    #[account(
        seeds = [METADATA_SEED, metadata_program.key().as_ref(), accessory_mint.key().as_ref()],
        bump,
        seeds::program = metadata_program.key(),
        constraint = is_verified_member(&accessory_metadata, &config.accessory_collection) @ ShapelyError::AccessoryNotVerified
    )]
    pub accessory_metadata: Box<Account<'info, MetadataAccount>>,

    #[account(
        mut,
        associated_token::mint = accessory_mint,
        associated_token::authority = artist
    )]
    pub artist_accessory_ata: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [LISTING_SEED, accessory_mint.key().as_ref(), listing.artist.as_ref()],
        bump = listing.bump,
        constraint = listing.artist == artist.key() @ ShapelyError::Unauthorized,
        constraint = listing.config == config.key() @ ShapelyError::ConfigMismatch
    )]
    pub listing: Box<Account<'info, Listing>>,

    #[account(
        mut,
        associated_token::mint = accessory_mint,
        associated_token::authority = listing
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub metadata_program: Program<'info, Metadata>,
}

pub fn relist_accessory(ctx: Context<RelistAccessory>, price: u64) -> Result<()> {
    let artist = ctx.accounts.artist.key();
    let artist_units = ctx.accounts.artist_accessory_ata.amount;

    ctx.accounts.listing.list(&artist, price, artist_units)?;

    transfer_nft(
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.artist_accessory_ata.to_account_info(),
        &ctx.accounts.accessory_mint.to_account_info(),
        &ctx.accounts.vault.to_account_info(),
        &ctx.accounts.artist.to_account_info(),
        &[],
    )?;

    emit!(AccessoryListed {
        listing: ctx.accounts.listing.key(),
        artist,
        accessory_mint: ctx.accounts.accessory_mint.key(),
        price,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Accessory relisted for {} lamports", price);

    Ok(())
}
