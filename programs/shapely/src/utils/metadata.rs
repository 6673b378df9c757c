use anchor_lang::prelude::*;
use anchor_spl::metadata::mpl_token_metadata::instructions::{
    CreateMasterEditionV3Cpi, CreateMasterEditionV3CpiAccounts,
    CreateMasterEditionV3InstructionArgs, CreateMetadataAccountV3Cpi,
    CreateMetadataAccountV3CpiAccounts, CreateMetadataAccountV3InstructionArgs,
    VerifyCollectionV1Cpi, VerifyCollectionV1CpiAccounts,
};
use anchor_spl::metadata::mpl_token_metadata::types::{
    Collection, CollectionDetails, Creator, DataV2,
};
use anchor_spl::metadata::MetadataAccount;

use crate::state::CollectionKind;

/// Accounts shared by the metadata and master edition CPIs of one mint.
/// `authority` is the config PDA acting as mint and update authority.
pub struct NftMetadataAccounts<'a, 'info> {
    pub metadata_program: &'a AccountInfo<'info>,
    pub metadata: &'a AccountInfo<'info>,
    pub master_edition: &'a AccountInfo<'info>,
    pub mint: &'a AccountInfo<'info>,
    pub authority: &'a AccountInfo<'info>,
    pub payer: &'a AccountInfo<'info>,
    pub token_program: &'a AccountInfo<'info>,
    pub system_program: &'a AccountInfo<'info>,
}

impl<'a, 'info> NftMetadataAccounts<'a, 'info> {
    pub fn create_metadata(
        &self,
        data: DataV2,
        collection_details: Option<CollectionDetails>,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        CreateMetadataAccountV3Cpi::new(
            self.metadata_program,
            CreateMetadataAccountV3CpiAccounts {
                metadata: self.metadata,
                mint: self.mint,
                mint_authority: self.authority,
                payer: self.payer,
                update_authority: (self.authority, true),
                system_program: self.system_program,
                rent: None,
            },
            CreateMetadataAccountV3InstructionArgs {
                data,
                is_mutable: true,
                collection_details,
            },
        )
        .invoke_signed(signer_seeds)?;

        Ok(())
    }

    /// Locks supply at the single minted unit.
    pub fn create_master_edition(&self, signer_seeds: &[&[&[u8]]]) -> Result<()> {
        CreateMasterEditionV3Cpi::new(
            self.metadata_program,
            CreateMasterEditionV3CpiAccounts {
                edition: self.master_edition,
                update_authority: self.authority,
                mint_authority: self.authority,
                mint: self.mint,
                payer: self.payer,
                metadata: self.metadata,
                token_program: self.token_program,
                system_program: self.system_program,
                rent: None,
            },
            CreateMasterEditionV3InstructionArgs {
                max_supply: Some(0),
            },
        )
        .invoke_signed(signer_seeds)?;

        Ok(())
    }
}

/// Flips the item's collection reference to verified. Needs the collection's
/// update authority, which is the config PDA for both collections.
#[allow(clippy::too_many_arguments)]
pub fn verify_collection_item<'info>(
    metadata_program: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    item_metadata: &AccountInfo<'info>,
    collection_mint: &AccountInfo<'info>,
    collection_metadata: &AccountInfo<'info>,
    collection_master_edition: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    sysvar_instructions: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    VerifyCollectionV1Cpi::new(
        metadata_program,
        VerifyCollectionV1CpiAccounts {
            authority,
            delegate_record: None,
            metadata: item_metadata,
            collection_mint,
            collection_metadata: Some(collection_metadata),
            collection_master_edition: Some(collection_master_edition),
            system_program,
            sysvar_instructions,
        },
    )
    .invoke_signed(signer_seeds)?;

    Ok(())
}

pub fn collection_data(kind: CollectionKind, config: Pubkey) -> DataV2 {
    DataV2 {
        name: kind.name().to_owned(),
        symbol: kind.symbol().to_owned(),
        uri: kind.uri().to_owned(),
        seller_fee_basis_points: 0,
        creators: Some(vec![Creator {
            address: config,
            verified: true,
            share: 100,
        }]),
        collection: None,
        uses: None,
    }
}

/// Item metadata pointing at its collection, unverified until
/// [`verify_collection_item`] runs.
pub fn item_data(
    name: String,
    symbol: &str,
    uri: String,
    creators: Vec<Creator>,
    collection: Pubkey,
) -> DataV2 {
    DataV2 {
        name,
        symbol: symbol.to_owned(),
        uri,
        seller_fee_basis_points: 0,
        creators: Some(creators),
        collection: Some(Collection {
            verified: false,
            key: collection,
        }),
        uses: None,
    }
}

pub fn avatar_creators(config: Pubkey) -> Vec<Creator> {
    vec![Creator {
        address: config,
        verified: true,
        share: 100,
    }]
}

/// The config signs as a zero-share creator; royalties go to the artist.
pub fn accessory_creators(config: Pubkey, artist: Pubkey) -> Vec<Creator> {
    vec![
        Creator {
            address: config,
            verified: true,
            share: 0,
        },
        Creator {
            address: artist,
            verified: false,
            share: 100,
        },
    ]
}

pub fn is_verified_member(metadata: &MetadataAccount, collection: &Pubkey) -> bool {
    metadata
        .collection
        .as_ref()
        .map_or(false, |c| c.verified && c.key == *collection)
}
