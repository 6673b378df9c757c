use anchor_lang::prelude::*;
use anchor_spl::associated_token::{get_associated_token_address, AssociatedToken};
use anchor_spl::metadata::mpl_token_metadata::types::CollectionDetails;
use anchor_spl::metadata::Metadata;
use anchor_spl::token::Token;

use crate::constants::*;
use crate::errors::ShapelyError;
use crate::state::{CollectionKind, Config};
use crate::utils::accounts::{
    create_associated_token_account, create_nft_mint, fund_rent_exempt, mint_one,
};
use crate::utils::metadata::{collection_data, NftMetadataAccounts};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = Config::SPACE,
        seeds = [CONFIG_SEED, seed.to_le_bytes().as_ref()],
        bump
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, config.key().as_ref()],
        bump
    )]
    pub treasury: SystemAccount<'info>,

    /// CHECK: PDA mint, created by the handler
    #[account(
        mut,
        seeds = [AVATAR_COLLECTION_SEED, config.key().as_ref()],
        bump
    )]
    pub avatar_collection: UncheckedAccount<'info>,

    /// CHECK: PDA mint, created by the handler
    #[account(
        mut,
        seeds = [ACCESSORY_COLLECTION_SEED, config.key().as_ref()],
        bump
    )]
    pub accessory_collection: UncheckedAccount<'info>,

    /// CHECK: config's associated token account, created by the handler
    #[account(
        mut,
        address = get_associated_token_address(&config.key(), &avatar_collection.key())
    )]
    pub avatar_collection_ata: UncheckedAccount<'info>,

    /// CHECK: config's associated token account, created by the handler
    #[account(
        mut,
        address = get_associated_token_address(&config.key(), &accessory_collection.key())
    )]
    pub accessory_collection_ata: UncheckedAccount<'info>,

    /// CHECK: initialized by the metadata program
    #[account(
        mut,
        seeds = [METADATA_SEED, metadata_program.key().as_ref(), avatar_collection.key().as_ref()],
        bump,
        seeds::program = metadata_program.key()
    )]
    pub avatar_collection_metadata: UncheckedAccount<'info>,

    /// CHECK: initialized by the metadata program
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            metadata_program.key().as_ref(),
            avatar_collection.key().as_ref(),
            EDITION_SEED
        ],
        bump,
        seeds::program = metadata_program.key()
    )]
    pub avatar_collection_master_edition: UncheckedAccount<'info>,

    /// CHECK: initialized by the metadata program
    #[account(
        mut,
        seeds = [METADATA_SEED, metadata_program.key().as_ref(), accessory_collection.key().as_ref()],
        bump,
        seeds::program = metadata_program.key()
    )]
    pub accessory_collection_metadata: UncheckedAccount<'info>,

    /// CHECK: initialized by the metadata program
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            metadata_program.key().as_ref(),
            accessory_collection.key().as_ref(),
            EDITION_SEED
        ],
        bump,
        seeds::program = metadata_program.key()
    )]
    pub accessory_collection_master_edition: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Mint, config-held unit, sized-collection metadata and master edition
    /// for one collection.
    fn create_collection(
        &self,
        kind: CollectionKind,
        collection_bump: u8,
        config_signer: &[&[&[u8]]],
    ) -> Result<()> {
        let (mint, ata, metadata, master_edition) = match kind {
            CollectionKind::Avatar => (
                &self.avatar_collection,
                &self.avatar_collection_ata,
                &self.avatar_collection_metadata,
                &self.avatar_collection_master_edition,
            ),
            CollectionKind::Accessory => (
                &self.accessory_collection,
                &self.accessory_collection_ata,
                &self.accessory_collection_metadata,
                &self.accessory_collection_master_edition,
            ),
        };
        require!(mint.data_is_empty(), ShapelyError::CollectionAlreadyExists);

        let config_key = self.config.key();
        let mint_seeds: &[&[u8]] = &[kind.seed(), config_key.as_ref(), &[collection_bump]];

        let payer = self.admin.to_account_info();
        let config = self.config.to_account_info();
        let mint = mint.to_account_info();
        let ata = ata.to_account_info();
        let token_program = self.token_program.to_account_info();
        let system_program = self.system_program.to_account_info();

        create_nft_mint(
            &payer,
            &mint,
            &config_key,
            &token_program,
            &system_program,
            &[mint_seeds],
        )?;
        create_associated_token_account(
            &payer,
            &ata,
            &config,
            &mint,
            &token_program,
            &self.associated_token_program.to_account_info(),
            &system_program,
        )?;
        mint_one(&token_program, &mint, &ata, &config, config_signer)?;

        let metadata_program = self.metadata_program.to_account_info();
        let metadata = metadata.to_account_info();
        let master_edition = master_edition.to_account_info();
        let nft = NftMetadataAccounts {
            metadata_program: &metadata_program,
            metadata: &metadata,
            master_edition: &master_edition,
            mint: &mint,
            authority: &config,
            payer: &payer,
            token_program: &token_program,
            system_program: &system_program,
        };
        nft.create_metadata(
            collection_data(kind, config_key),
            Some(CollectionDetails::V1 { size: 0 }),
            config_signer,
        )?;
        nft.create_master_edition(config_signer)?;

        Ok(())
    }
}

pub fn initialize(ctx: Context<Initialize>, seed: u64, fee_bps: u16) -> Result<()> {
    Config::validate_fee(fee_bps)?;
    require!(
        !ctx.accounts.config.is_initialized(),
        ShapelyError::AlreadyInitialized
    );

    let bumps = &ctx.bumps;
    let avatar_collection = ctx.accounts.avatar_collection.key();
    let accessory_collection = ctx.accounts.accessory_collection.key();

    ctx.accounts.config.set_inner(Config {
        admin: ctx.accounts.admin.key(),
        seed,
        fee_bps,
        avatar_collection,
        accessory_collection,
        bump: bumps.config,
        treasury_bump: bumps.treasury,
        avatar_collection_bump: bumps.avatar_collection,
        accessory_collection_bump: bumps.accessory_collection,
    });

    fund_rent_exempt(
        &ctx.accounts.admin.to_account_info(),
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
    )?;

    let seed_bytes = seed.to_le_bytes();
    let config_seeds: &[&[u8]] = &[CONFIG_SEED, seed_bytes.as_ref(), &[bumps.config]];
    let config_signer = &[config_seeds];

    ctx.accounts
        .create_collection(CollectionKind::Avatar, bumps.avatar_collection, config_signer)?;
    ctx.accounts.create_collection(
        CollectionKind::Accessory,
        bumps.accessory_collection,
        config_signer,
    )?;

    emit!(ConfigInitialized {
        config: ctx.accounts.config.key(),
        admin: ctx.accounts.admin.key(),
        seed,
        fee_bps,
        treasury: ctx.accounts.treasury.key(),
        avatar_collection,
        accessory_collection,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Config {} initialized with fee: {}bps", seed, fee_bps);

    Ok(())
}

#[event]
pub struct ConfigInitialized {
    pub config: Pubkey,
    pub admin: Pubkey,
    pub seed: u64,
    pub fee_bps: u16,
    pub treasury: Pubkey,
    pub avatar_collection: Pubkey,
    pub accessory_collection: Pubkey,
    pub timestamp: i64,
}
