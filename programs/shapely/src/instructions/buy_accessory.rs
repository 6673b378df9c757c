use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::{Metadata, MetadataAccount};
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::ShapelyError;
use crate::state::{Config, Listing};
use crate::utils::escrow::{close_vault, pay_lamports, transfer_nft};
use crate::utils::metadata::is_verified_member;

#[derive(Accounts)]
pub struct BuyAccessory<'info> {
    #[account(mut)]
    pub collector: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED, config.seed.to_le_bytes().as_ref()],
        bump = config.bump
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, config.key().as_ref()],
        bump = config.treasury_bump
    )]
    pub treasury: SystemAccount<'info>,

    #[account(
        seeds = [AVATAR_SEED, collector.key().as_ref(), config.avatar_collection.as_ref()],
        bump
    )]
    pub collector_avatar_mint: Box<Account<'info, Mint>>,

    #[account(
        associated_token::mint = collector_avatar_mint,
        associated_token::authority = collector,
        constraint = collector_avatar_ata.amount == NFT_SUPPLY @ ShapelyError::AvatarNotVerified
    )]
    pub collector_avatar_ata: Box<Account<'info, TokenAccount>>,

    #[account(
        seeds = [METADATA_SEED, metadata_program.key().as_ref(), collector_avatar_mint.key().as_ref()],
        bump,
        seeds::program = metadata_program.key(),
        constraint = is_verified_member(&collector_avatar_metadata, &config.avatar_collection) @ ShapelyError::AvatarNotVerified
    )]
    pub collector_avatar_metadata: Box<Account<'info, MetadataAccount>>,

    #[account(
        mut,
        constraint = artist.key() == listing.artist @ ShapelyError::Unauthorized
    )]
    pub artist: SystemAccount<'info>,

    pub accessory_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [LISTING_SEED, accessory_mint.key().as_ref(), listing.artist.as_ref()],
        bump = listing.bump,
        constraint = listing.config == config.key() @ ShapelyError::ConfigMismatch
    )]
    pub listing: Box<Account<'info, Listing>>,

    /// Closed after every sale, so a repeated purchase finds it recreated
    /// and empty.
    #[account(
        init_if_needed,
        payer = collector,
        associated_token::mint = accessory_mint,
        associated_token::authority = listing
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = collector,
        associated_token::mint = accessory_mint,
        associated_token::authority = collector
    )]
    pub collector_accessory_ata: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
}

pub fn buy_accessory(ctx: Context<BuyAccessory>) -> Result<()> {
    let vault_amount = ctx.accounts.vault.amount;
    let buyer_lamports = ctx.accounts.collector.lamports();
    let fee_bps = ctx.accounts.config.fee_bps;
    let accessory_mint = ctx.accounts.accessory_mint.key();

    let listing = &mut ctx.accounts.listing;
    listing.ensure_escrowed(vault_amount)?;
    let price = listing.price;
    let settlement = listing.purchase(buyer_lamports, fee_bps)?;
    let artist = listing.artist;
    let bump = listing.bump;

    let system_program = ctx.accounts.system_program.to_account_info();
    let collector = ctx.accounts.collector.to_account_info();

    pay_lamports(
        &system_program,
        &collector,
        &ctx.accounts.treasury.to_account_info(),
        settlement.fee,
    )?;
    pay_lamports(
        &system_program,
        &collector,
        &ctx.accounts.artist.to_account_info(),
        settlement.seller_amount,
    )?;

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
        &ctx.accounts.collector_accessory_ata.to_account_info(),
        &ctx.accounts.listing.to_account_info(),
        &[listing_seeds],
    )?;

    close_vault(
        &ctx.accounts.token_program.to_account_info(),
        &ctx.accounts.vault.to_account_info(),
        &ctx.accounts.artist.to_account_info(),
        &ctx.accounts.listing.to_account_info(),
        &[listing_seeds],
    )?;

    emit!(AccessorySold {
        listing: ctx.accounts.listing.key(),
        collector: ctx.accounts.collector.key(),
        artist,
        accessory_mint,
        price,
        fee: settlement.fee,
        seller_amount: settlement.seller_amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Accessory sold for {} lamports, fee: {}",
        price,
        settlement.fee
    );

    Ok(())
}

#[event]
pub struct AccessorySold {
    pub listing: Pubkey,
    pub collector: Pubkey,
    pub artist: Pubkey,
    pub accessory_mint: Pubkey,
    pub price: u64,
    pub fee: u64,
    pub seller_amount: u64,
    pub timestamp: i64,
}
