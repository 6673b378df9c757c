use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::ShapelyError;
use crate::state::Listing;
use crate::utils::escrow::transfer_nft;

#[derive(Accounts)]
pub struct DelistAccessory<'info> {
    #[account(mut)]
    pub artist: Signer<'info>,

    pub accessory_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [LISTING_SEED, accessory_mint.key().as_ref(), listing.artist.as_ref()],
        bump = listing.bump,
        constraint = listing.artist == artist.key() @ ShapelyError::Unauthorized
    )]
    pub listing: Box<Account<'info, Listing>>,

    /// Recreated empty when a sale already closed it.
    #[account(
        init_if_needed,
        payer = artist,
        associated_token::mint = accessory_mint,
        associated_token::authority = listing
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = artist,
        associated_token::mint = accessory_mint,
        associated_token::authority = artist
    )]
    pub artist_accessory_ata: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn delist_accessory(ctx: Context<DelistAccessory>) -> Result<()> {
    let artist = ctx.accounts.artist.key();
    let accessory_mint = ctx.accounts.accessory_mint.key();
    let vault_amount = ctx.accounts.vault.amount;

    let listing = &mut ctx.accounts.listing;
    listing.ensure_escrowed(vault_amount)?;
    listing.delist(&artist)?;
    let bump = listing.bump;

    let listing_seeds: &[&[u8]] = &[
        LISTING_SEED,
        accessory_mint.as_ref(),
        artist.as_ref(),
        &[bump],
    ];

    transfer_nft(
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.vault.to_account_info(),
        &ctx.accounts.accessory_mint.to_account_info(),
        &ctx.accounts.artist_accessory_ata.to_account_info(),
        &ctx.accounts.listing.to_account_info(),
        &[listing_seeds],
    )?;

    emit!(AccessoryDelisted {
        listing: ctx.accounts.listing.key(),
        artist,
        accessory_mint,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Accessory delisted: {}", accessory_mint);

    Ok(())
}

#[event]
pub struct AccessoryDelisted {
    pub listing: Pubkey,
    pub artist: Pubkey,
    pub accessory_mint: Pubkey,
    pub timestamp: i64,
}
