use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::{Metadata, MetadataAccount};
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::ShapelyError;
use crate::state::{Config, Listing};
use crate::utils::escrow::transfer_nft;
use crate::utils::metadata::is_verified_member;

#[derive(Accounts)]
pub struct ListAccessory<'info> {
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

    /// Omitted when the artist never held the accessory.
    #[account(
        mut,
        associated_token::mint = accessory_mint,
        associated_token::authority = artist
    )]
    pub artist_accessory_ata: Option<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = artist,
        space = Listing::SPACE,
        seeds = [LISTING_SEED, accessory_mint.key().as_ref(), artist.key().as_ref()],
        bump
    )]
    pub listing: Box<Account<'info, Listing>>,

    #[account(
        init_if_needed,
        payer = artist,
        associated_token::mint = accessory_mint,
        associated_token::authority = listing
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
}

pub fn list_accessory(ctx: Context<ListAccessory>, price: u64) -> Result<()> {
    let artist = ctx.accounts.artist.key();
    let accessory_mint = ctx.accounts.accessory_mint.key();
    let config = ctx.accounts.config.key();

    let artist_units = ctx
        .accounts
        .artist_accessory_ata
        .as_ref()
        .map_or(0, |ata| ata.amount);

    let listing = &mut ctx.accounts.listing;
    listing.open(artist, accessory_mint, config, ctx.bumps.listing);
    require_keys_eq!(listing.config, config, ShapelyError::ConfigMismatch);
    listing.list(&artist, price, artist_units)?;

    let artist_accessory_ata = ctx
        .accounts
        .artist_accessory_ata
        .as_ref()
        .ok_or(ShapelyError::NotOwner)?;

    transfer_nft(
        &ctx.accounts.token_program.to_account_info(),
        &artist_accessory_ata.to_account_info(),
        &ctx.accounts.accessory_mint.to_account_info(),
        &ctx.accounts.vault.to_account_info(),
        &ctx.accounts.artist.to_account_info(),
        &[],
    )?;

    emit!(AccessoryListed {
        listing: ctx.accounts.listing.key(),
        artist,
        accessory_mint,
        price,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Accessory listed for {} lamports", price);

    Ok(())
}

#[event]
pub struct AccessoryListed {
    pub listing: Pubkey,
    pub artist: Pubkey,
    pub accessory_mint: Pubkey,
    pub price: u64,
    pub timestamp: i64,
}
