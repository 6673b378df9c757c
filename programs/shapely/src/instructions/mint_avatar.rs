use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar;
use anchor_spl::associated_token::{get_associated_token_address, AssociatedToken};
use anchor_spl::metadata::{MasterEditionAccount, Metadata, MetadataAccount};
use anchor_spl::token::{Mint, Token};

use crate::constants::*;
use crate::errors::ShapelyError;
use crate::state::Config;
use crate::utils::accounts::{create_associated_token_account, create_nft_mint, mint_one};
use crate::utils::metadata::{avatar_creators, item_data, verify_collection_item, NftMetadataAccounts};
use crate::utils::validation::validate_metadata;

#[derive(Accounts)]
pub struct MintAvatar<'info> {
    #[account(mut)]
    pub collector: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED, config.seed.to_le_bytes().as_ref()],
        bump = config.bump
    )]
    pub config: Box<Account<'info, Config>>,

    /// CHECK: PDA mint, created by the handler. One per collector.
    #[account(
        mut,
        seeds = [AVATAR_SEED, collector.key().as_ref(), avatar_collection.key().as_ref()],
        bump
    )]
    pub avatar_mint: UncheckedAccount<'info>,

    /// CHECK: collector's associated token account, created by the handler
    #[account(
        mut,
        address = get_associated_token_address(&collector.key(), &avatar_mint.key())
    )]
    pub collector_avatar_ata: UncheckedAccount<'info>,

    /// CHECK: initialized by the metadata program
    #[account(
        mut,
        seeds = [METADATA_SEED, metadata_program.key().as_ref(), avatar_mint.key().as_ref()],
        bump,
        seeds::program = metadata_program.key()
    )]
    pub avatar_metadata: UncheckedAccount<'info>,

    /// CHECK: initialized by the metadata program
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            metadata_program.key().as_ref(),
            avatar_mint.key().as_ref(),
            EDITION_SEED
        ],
        bump,
        seeds::program = metadata_program.key()
    )]
    pub avatar_master_edition: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [AVATAR_COLLECTION_SEED, config.key().as_ref()],
        bump = config.avatar_collection_bump,
        constraint = avatar_collection.key() == config.avatar_collection @ ShapelyError::InvalidCollectionMint
    )]
    pub avatar_collection: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [METADATA_SEED, metadata_program.key().as_ref(), avatar_collection.key().as_ref()],
        bump,
        seeds::program = metadata_program.key()
    )]
    pub avatar_collection_metadata: Box<Account<'info, MetadataAccount>>,

    #[account(
        seeds = [
            METADATA_SEED,
            metadata_program.key().as_ref(),
            avatar_collection.key().as_ref(),
            EDITION_SEED
        ],
        bump,
        seeds::program = metadata_program.key()
    )]
    pub avatar_collection_master_edition: Box<Account<'info, MasterEditionAccount>>,

    /// CHECK: address constraint
    #[account(address = sysvar::instructions::ID)]
    pub sysvar_instructions: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
}

pub fn mint_avatar(ctx: Context<MintAvatar>, name: String, uri: String) -> Result<()> {
    validate_metadata(&name, &uri)?;

    let accounts = &ctx.accounts;
    require!(
        accounts.avatar_mint.data_is_empty(),
        ShapelyError::AvatarAlreadyMinted
    );

    let collector_key = accounts.collector.key();
    let collection_key = accounts.avatar_collection.key();
    let config_key = accounts.config.key();

    let mint_seeds: &[&[u8]] = &[
        AVATAR_SEED,
        collector_key.as_ref(),
        collection_key.as_ref(),
        &[ctx.bumps.avatar_mint],
    ];
    let seed_bytes = accounts.config.seed.to_le_bytes();
    let config_seeds: &[&[u8]] = &[CONFIG_SEED, seed_bytes.as_ref(), &[accounts.config.bump]];
    let config_signer = &[config_seeds];

    let collector = accounts.collector.to_account_info();
    let config = accounts.config.to_account_info();
    let mint = accounts.avatar_mint.to_account_info();
    let ata = accounts.collector_avatar_ata.to_account_info();
    let token_program = accounts.token_program.to_account_info();
    let system_program = accounts.system_program.to_account_info();
    let metadata_program = accounts.metadata_program.to_account_info();
    let metadata = accounts.avatar_metadata.to_account_info();
    let master_edition = accounts.avatar_master_edition.to_account_info();

    create_nft_mint(
        &collector,
        &mint,
        &config_key,
        &token_program,
        &system_program,
        &[mint_seeds],
    )?;
    create_associated_token_account(
        &collector,
        &ata,
        &collector,
        &mint,
        &token_program,
        &accounts.associated_token_program.to_account_info(),
        &system_program,
    )?;
    mint_one(&token_program, &mint, &ata, &config, config_signer)?;

    let nft = NftMetadataAccounts {
        metadata_program: &metadata_program,
        metadata: &metadata,
        master_edition: &master_edition,
        mint: &mint,
        authority: &config,
        payer: &collector,
        token_program: &token_program,
        system_program: &system_program,
    };
    nft.create_metadata(
        item_data(
            name.clone(),
            AVATAR_SYMBOL,
            uri,
            avatar_creators(config_key),
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
        &accounts.avatar_collection.to_account_info(),
        &accounts.avatar_collection_metadata.to_account_info(),
        &accounts.avatar_collection_master_edition.to_account_info(),
        &system_program,
        &accounts.sysvar_instructions.to_account_info(),
        config_signer,
    )?;

    emit!(AvatarMinted {
        collector: collector_key,
        mint: mint.key(),
        collection: collection_key,
        name,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Avatar minted: {}", mint.key());

    Ok(())
}

#[event]
pub struct AvatarMinted {
    pub collector: Pubkey,
    pub mint: Pubkey,
    pub collection: Pubkey,
    pub name: String,
    pub timestamp: i64,
}
