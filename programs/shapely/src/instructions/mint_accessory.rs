use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::{MasterEditionAccount, Metadata, MetadataAccount};
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::ShapelyError;
use crate::state::Config;
use crate::utils::accounts::mint_one;
use crate::utils::metadata::{
    accessory_creators, item_data, verify_collection_item, NftMetadataAccounts,
};
use crate::utils::validation::validate_metadata;

#[derive(Accounts)]
pub struct MintAccessory<'info> {
    #[account(mut)]
    pub artist: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED, config.seed.to_le_bytes().as_ref()],
        bump = config.bump
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        init,
        payer = artist,
        mint::decimals = NFT_DECIMALS,
        mint::authority = config,
        mint::freeze_authority = config
    )]
    pub accessory_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = artist,
        associated_token::mint = accessory_mint,
        associated_token::authority = artist
    )]
    pub artist_accessory_ata: Box<Account<'info, TokenAccount>>,

    /// CHECK: initialized by the metadata program
    #[account(
        mut,
        seeds = [METADATA_SEED, metadata_program.key().as_ref(), accessory_mint.key().as_ref()],
        bump,
        seeds::program = metadata_program.key()
    )]
    pub accessory_metadata: UncheckedAccount<'info>,

    /// CHECK: initialized by the metadata program
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            metadata_program.key().as_ref(),
            accessory_mint.key().as_ref(),
            EDITION_SEED
        ],
        bump,
        seeds::program = metadata_program.key()
    )]
    pub accessory_master_edition: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [ACCESSORY_COLLECTION_SEED, config.key().as_ref()],
        bump = config.accessory_collection_bump,
        constraint = accessory_collection.key() == config.accessory_collection @ ShapelyError::InvalidCollectionMint
    )]
    pub accessory_collection: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [METADATA_SEED, metadata_program.key().as_ref(), accessory_collection.key().as_ref()],
        bump,
        seeds::program = metadata_program.key()
    )]
    pub accessory_collection_metadata: Box<Account<'info, MetadataAccount>>,

    #[account(
        seeds = [
            METADATA_SEED,
            metadata_program.key().as_ref(),
            accessory_collection.key().as_ref(),
            EDITION_SEED
        ],
        bump,
        seeds::program = metadata_program.key()
    )]
    pub accessory_collection_master_edition: Box<Account<'info, MasterEditionAccount>>,

    /// CHECK: address constraint
    #[account(address = sysvar::instructions::ID)]
    pub sysvar_instructions: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
}

pub fn mint_accessory(ctx: Context<MintAccessory>, name: String, uri: String) -> Result<()> {
    validate_metadata(&name, &uri)?;

    let accounts = &ctx.accounts;
    let artist_key = accounts.artist.key();
    let collection_key = accounts.accessory_collection.key();
    let config_key = accounts.config.key();

    let seed_bytes = accounts.config.seed.to_le_bytes();
    let config_seeds: &[&[u8]] = &[CONFIG_SEED, seed_bytes.as_ref(), &[accounts.config.bump]];
    let config_signer = &[config_seeds];

    let artist = accounts.artist.to_account_info();
    let config = accounts.config.to_account_info();
    let mint = accounts.accessory_mint.to_account_info();
    let token_program = accounts.token_program.to_account_info();
    let system_program = accounts.system_program.to_account_info();
    let metadata_program = accounts.metadata_program.to_account_info();
    let metadata = accounts.accessory_metadata.to_account_info();
    let master_edition = accounts.accessory_master_edition.to_account_info();

    mint_one(
        &token_program,
        &mint,
        &accounts.artist_accessory_ata.to_account_info(),
        &config,
        config_signer,
    )?;

    let nft = NftMetadataAccounts {
        metadata_program: &metadata_program,
        metadata: &metadata,
        master_edition: &master_edition,
        mint: &mint,
        authority: &config,
        payer: &artist,
        token_program: &token_program,
        system_program: &system_program,
    };
    nft.create_metadata(
        item_data(
            name.clone(),
            ACCESSORY_SYMBOL,
            uri,
            accessory_creators(config_key, artist_key),
            collection_key,
        ),
        None,
        config_signer,
    )?;
    nft.create_master_edition(config_signer)?;

    verify_collection_item(
        &metadata_program,
        &config,
        &metadata,
        &accounts.accessory_collection.to_account_info(),
        &accounts.accessory_collection_metadata.to_account_info(),
        &accounts.accessory_collection_master_edition.to_account_info(),
        &system_program,
        &accounts.sysvar_instructions.to_account_info(),
        config_signer,
    )?;

    emit!(AccessoryMinted {
        artist: artist_key,
        mint: mint.key(),
        collection: collection_key,
        name,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Accessory minted: {}", mint.key());

    Ok(())
}

#[event]
pub struct AccessoryMinted {
    pub artist: Pubkey,
    pub mint: Pubkey,
    pub collection: Pubkey,
    pub name: String,
    pub timestamp: i64,
}
