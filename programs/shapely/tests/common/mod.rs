#![allow(dead_code)]

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{Instruction, InstructionError};
use anchor_lang::solana_program::program_option::COption;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::solana_program::{entrypoint::ProgramResult, sysvar};
use anchor_lang::{InstructionData, ToAccountMetas};
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::metadata::mpl_token_metadata;
use anchor_spl::token::spl_token::state::{
    Account as TokenAccountState, AccountState, Mint as MintState,
};
use shapely::constants::*;
use shapely::state::{Config, Listing};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::account::Account;
use solana_sdk::compute_budget::ComputeBudgetInstruction;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::{Transaction, TransactionError};

pub const FUNDED: u64 = 10_000_000_000;
pub const DATA_LAMPORTS: u64 = 100_000_000;
pub const METADATA_ACCOUNT_LEN: usize = 679;
pub const MASTER_EDITION_ACCOUNT_LEN: usize = 282;

pub const METADATA_PROGRAM: Pubkey = mpl_token_metadata::ID;
pub const TOKEN_PROGRAM: Pubkey = anchor_spl::token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM: Pubkey = anchor_spl::associated_token::ID;
pub const SYSTEM_PROGRAM: Pubkey = anchor_lang::system_program::ID;

fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    shapely::entry(program_id, accounts, data)
}

/// Stands in for the token metadata program in tests that only read its
/// accounts. Any CPI into it fails.
fn reject_metadata_instruction(
    _program_id: &Pubkey,
    _accounts: &[AccountInfo],
    _data: &[u8],
) -> ProgramResult {
    Err(ProgramError::InvalidInstructionData)
}

fn shapely_program_test() -> ProgramTest {
    let mut program_test = ProgramTest::default();
    program_test.prefer_bpf(false);
    program_test.add_program("shapely", shapely::ID, processor!(process_instruction));
    program_test
}

/// Shapely as a native program, spl-token and the associated token program
/// from the bundled binaries, and a metadata program that rejects every CPI.
pub fn program_test() -> ProgramTest {
    let mut program_test = shapely_program_test();
    program_test.add_program(
        "mpl_token_metadata",
        METADATA_PROGRAM,
        processor!(reject_metadata_instruction),
    );
    program_test
}

/// Same as `program_test` with the real metadata program loaded from
/// `tests/fixtures/mpl_token_metadata.so`.
pub fn program_test_with_metadata() -> ProgramTest {
    let mut program_test = shapely_program_test();
    program_test.add_program("mpl_token_metadata", METADATA_PROGRAM, None);
    program_test
}

pub struct Harness {
    pub ctx: ProgramTestContext,
    nonce: u32,
}

impl Harness {
    pub async fn start(program_test: ProgramTest) -> Self {
        Harness {
            ctx: program_test.start_with_context().await,
            nonce: 0,
        }
    }

    /// Every transaction carries a distinct compute limit so a resent
    /// instruction is not rejected as a duplicate.
    pub async fn send(
        &mut self,
        instruction: Instruction,
        signers: &[&Keypair],
    ) -> std::result::Result<(), BanksClientError> {
        self.nonce += 1;
        let budget = ComputeBudgetInstruction::set_compute_unit_limit(1_400_000 - self.nonce);
        let mut all_signers: Vec<&Keypair> = vec![&self.ctx.payer];
        all_signers.extend_from_slice(signers);
        let tx = Transaction::new_signed_with_payer(
            &[budget, instruction],
            Some(&self.ctx.payer.pubkey()),
            &all_signers,
            self.ctx.last_blockhash,
        );
        self.ctx.banks_client.process_transaction(tx).await
    }

    pub async fn account(&mut self, address: Pubkey) -> Option<Account> {
        self.ctx.banks_client.get_account(address).await.unwrap()
    }

    pub async fn lamports(&mut self, address: Pubkey) -> u64 {
        self.account(address).await.map_or(0, |a| a.lamports)
    }

    pub async fn token_amount(&mut self, address: Pubkey) -> Option<u64> {
        self.account(address)
            .await
            .map(|a| TokenAccountState::unpack(&a.data).unwrap().amount)
    }

    pub async fn listing(&mut self, address: Pubkey) -> Listing {
        let account = self.account(address).await.unwrap();
        Listing::try_deserialize(&mut account.data.as_slice()).unwrap()
    }

    pub async fn config(&mut self, address: Pubkey) -> Config {
        let account = self.account(address).await.unwrap();
        Config::try_deserialize(&mut account.data.as_slice()).unwrap()
    }
}

pub fn error_code(result: std::result::Result<(), BanksClientError>) -> u32 {
    match result.expect_err("transaction should fail").unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => code,
        other => panic!("unexpected error: {other:?}"),
    }
}

pub fn code(error: shapely::errors::ShapelyError) -> u32 {
    u32::from(error)
}

pub fn system_account(lamports: u64) -> Account {
    Account::new(lamports, 0, &SYSTEM_PROGRAM)
}

pub fn funded_keypair(program_test: &mut ProgramTest) -> Keypair {
    let keypair = Keypair::new();
    program_test.add_account(keypair.pubkey(), system_account(FUNDED));
    keypair
}

pub fn anchor_account<T: AccountSerialize>(value: &T, space: usize) -> Account {
    let mut data = Vec::with_capacity(space);
    value.try_serialize(&mut data).unwrap();
    data.resize(space, 0);
    Account {
        lamports: DATA_LAMPORTS,
        data,
        owner: shapely::ID,
        executable: false,
        rent_epoch: 0,
    }
}

pub fn mint_account(authority: &Pubkey, supply: u64) -> Account {
    let mut data = vec![0u8; MintState::LEN];
    MintState {
        mint_authority: COption::Some(*authority),
        supply,
        decimals: NFT_DECIMALS,
        is_initialized: true,
        freeze_authority: COption::Some(*authority),
    }
    .pack_into_slice(&mut data);
    Account {
        lamports: DATA_LAMPORTS,
        data,
        owner: TOKEN_PROGRAM,
        executable: false,
        rent_epoch: 0,
    }
}

pub fn token_account(mint: &Pubkey, owner: &Pubkey, amount: u64) -> Account {
    let mut data = vec![0u8; TokenAccountState::LEN];
    TokenAccountState {
        mint: *mint,
        owner: *owner,
        amount,
        delegate: COption::None,
        state: AccountState::Initialized,
        is_native: COption::None,
        delegated_amount: 0,
        close_authority: COption::None,
    }
    .pack_into_slice(&mut data);
    Account {
        lamports: DATA_LAMPORTS,
        data,
        owner: TOKEN_PROGRAM,
        executable: false,
        rent_epoch: 0,
    }
}

fn push_str(data: &mut Vec<u8>, value: &str) {
    data.extend_from_slice(&(value.len() as u32).to_le_bytes());
    data.extend_from_slice(value.as_bytes());
}

/// Metadata account in the token metadata program's V1 layout.
pub fn metadata_account(
    mint: &Pubkey,
    update_authority: &Pubkey,
    collection: Option<(&Pubkey, bool)>,
) -> Account {
    let mut data = vec![4u8];
    data.extend_from_slice(update_authority.as_ref());
    data.extend_from_slice(mint.as_ref());
    push_str(&mut data, "Shapely Item");
    push_str(&mut data, ACCESSORY_SYMBOL);
    push_str(&mut data, "https://arweave.net/item");
    data.extend_from_slice(&0u16.to_le_bytes());
    // creators, primary sale, mutable, edition nonce, token standard
    data.extend_from_slice(&[0, 0, 1, 0, 0]);
    match collection {
        Some((key, verified)) => {
            data.push(1);
            data.push(u8::from(verified));
            data.extend_from_slice(key.as_ref());
        }
        None => data.push(0),
    }
    // uses, collection details, programmable config
    data.extend_from_slice(&[0, 0, 0]);
    data.resize(METADATA_ACCOUNT_LEN, 0);
    Account {
        lamports: DATA_LAMPORTS,
        data,
        owner: METADATA_PROGRAM,
        executable: false,
        rent_epoch: 0,
    }
}

pub fn master_edition_account() -> Account {
    let mut data = vec![6u8];
    data.extend_from_slice(&0u64.to_le_bytes());
    data.push(1);
    data.extend_from_slice(&0u64.to_le_bytes());
    data.resize(MASTER_EDITION_ACCOUNT_LEN, 0);
    Account {
        lamports: DATA_LAMPORTS,
        data,
        owner: METADATA_PROGRAM,
        executable: false,
        rent_epoch: 0,
    }
}

pub fn metadata_address(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[METADATA_SEED, METADATA_PROGRAM.as_ref(), mint.as_ref()],
        &METADATA_PROGRAM,
    )
    .0
}

pub fn master_edition_address(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[METADATA_SEED, METADATA_PROGRAM.as_ref(), mint.as_ref(), EDITION_SEED],
        &METADATA_PROGRAM,
    )
    .0
}

pub fn listing_address(mint: &Pubkey, artist: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[LISTING_SEED, mint.as_ref(), artist.as_ref()], &shapely::ID).0
}

pub fn avatar_address(collector: &Pubkey, avatar_collection: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[AVATAR_SEED, collector.as_ref(), avatar_collection.as_ref()],
        &shapely::ID,
    )
    .0
}

/// Addresses of one marketplace deployment, derived from its seed.
#[derive(Clone, Copy)]
pub struct Deployment {
    pub admin: Pubkey,
    pub seed: u64,
    pub fee_bps: u16,
    pub config: Pubkey,
    pub treasury: Pubkey,
    pub avatar_collection: Pubkey,
    pub accessory_collection: Pubkey,
    config_bump: u8,
    treasury_bump: u8,
    avatar_collection_bump: u8,
    accessory_collection_bump: u8,
}

impl Deployment {
    pub fn new(admin: Pubkey, seed: u64, fee_bps: u16) -> Self {
        let (config, config_bump) =
            Pubkey::find_program_address(&[CONFIG_SEED, &seed.to_le_bytes()], &shapely::ID);
        let (treasury, treasury_bump) =
            Pubkey::find_program_address(&[TREASURY_SEED, config.as_ref()], &shapely::ID);
        let (avatar_collection, avatar_collection_bump) = Pubkey::find_program_address(
            &[AVATAR_COLLECTION_SEED, config.as_ref()],
            &shapely::ID,
        );
        let (accessory_collection, accessory_collection_bump) = Pubkey::find_program_address(
            &[ACCESSORY_COLLECTION_SEED, config.as_ref()],
            &shapely::ID,
        );
        Deployment {
            admin,
            seed,
            fee_bps,
            config,
            treasury,
            avatar_collection,
            accessory_collection,
            config_bump,
            treasury_bump,
            avatar_collection_bump,
            accessory_collection_bump,
        }
    }

    pub fn state(&self) -> Config {
        Config {
            admin: self.admin,
            seed: self.seed,
            fee_bps: self.fee_bps,
            avatar_collection: self.avatar_collection,
            accessory_collection: self.accessory_collection,
            bump: self.config_bump,
            treasury_bump: self.treasury_bump,
            avatar_collection_bump: self.avatar_collection_bump,
            accessory_collection_bump: self.accessory_collection_bump,
        }
    }

    /// Writes the accounts `initialize` would have produced.
    pub fn add_to(&self, program_test: &mut ProgramTest) {
        self.add_config(program_test, self.state());
        program_test.add_account(self.treasury, system_account(DATA_LAMPORTS));
        for collection in [self.avatar_collection, self.accessory_collection] {
            program_test.add_account(collection, mint_account(&self.config, 1));
            program_test.add_account(
                get_associated_token_address(&self.config, &collection),
                token_account(&collection, &self.config, 1),
            );
            program_test.add_account(
                metadata_address(&collection),
                metadata_account(&collection, &self.config, None),
            );
            program_test.add_account(master_edition_address(&collection), master_edition_account());
        }
    }

    pub fn add_config(&self, program_test: &mut ProgramTest, state: Config) {
        program_test.add_account(self.config, anchor_account(&state, Config::SPACE));
    }

    /// An accessory in this deployment's collection, held by `artist`.
    pub fn add_accessory(&self, program_test: &mut ProgramTest, artist: &Pubkey) -> Pubkey {
        let mint = Pubkey::new_unique();
        program_test.add_account(mint, mint_account(&self.config, 1));
        program_test.add_account(
            get_associated_token_address(artist, &mint),
            token_account(&mint, artist, 1),
        );
        program_test.add_account(
            metadata_address(&mint),
            metadata_account(&mint, &self.config, Some((&self.accessory_collection, true))),
        );
        mint
    }

    /// The collector's avatar, verified or not in the avatar collection.
    pub fn add_avatar(&self, program_test: &mut ProgramTest, collector: &Pubkey, verified: bool) {
        let mint = avatar_address(collector, &self.avatar_collection);
        program_test.add_account(mint, mint_account(&self.config, 1));
        program_test.add_account(
            get_associated_token_address(collector, &mint),
            token_account(&mint, collector, 1),
        );
        program_test.add_account(
            metadata_address(&mint),
            metadata_account(&mint, &self.config, Some((&self.avatar_collection, verified))),
        );
    }

    pub fn initialize(&self, admin: &Pubkey) -> Instruction {
        let collection_ata = |mint: &Pubkey| get_associated_token_address(&self.config, mint);
        Instruction {
            program_id: shapely::ID,
            accounts: shapely::accounts::Initialize {
                admin: *admin,
                config: self.config,
                treasury: self.treasury,
                avatar_collection: self.avatar_collection,
                accessory_collection: self.accessory_collection,
                avatar_collection_ata: collection_ata(&self.avatar_collection),
                accessory_collection_ata: collection_ata(&self.accessory_collection),
                avatar_collection_metadata: metadata_address(&self.avatar_collection),
                avatar_collection_master_edition: master_edition_address(&self.avatar_collection),
                accessory_collection_metadata: metadata_address(&self.accessory_collection),
                accessory_collection_master_edition: master_edition_address(
                    &self.accessory_collection,
                ),
                token_program: TOKEN_PROGRAM,
                associated_token_program: ASSOCIATED_TOKEN_PROGRAM,
                metadata_program: METADATA_PROGRAM,
                system_program: SYSTEM_PROGRAM,
            }
            .to_account_metas(None),
            data: shapely::instruction::Initialize {
                seed: self.seed,
                fee_bps: self.fee_bps,
            }
            .data(),
        }
    }

    pub fn mint_avatar(&self, collector: &Pubkey, name: &str) -> Instruction {
        let avatar_mint = avatar_address(collector, &self.avatar_collection);
        Instruction {
            program_id: shapely::ID,
            accounts: shapely::accounts::MintAvatar {
                collector: *collector,
                config: self.config,
                avatar_mint,
                collector_avatar_ata: get_associated_token_address(collector, &avatar_mint),
                avatar_metadata: metadata_address(&avatar_mint),
                avatar_master_edition: master_edition_address(&avatar_mint),
                avatar_collection: self.avatar_collection,
                avatar_collection_metadata: metadata_address(&self.avatar_collection),
                avatar_collection_master_edition: master_edition_address(&self.avatar_collection),
                sysvar_instructions: sysvar::instructions::ID,
                token_program: TOKEN_PROGRAM,
                associated_token_program: ASSOCIATED_TOKEN_PROGRAM,
                metadata_program: METADATA_PROGRAM,
                system_program: SYSTEM_PROGRAM,
            }
            .to_account_metas(None),
            data: shapely::instruction::MintAvatar {
                name: name.to_string(),
                uri: "https://arweave.net/avatar".to_string(),
            }
            .data(),
        }
    }

    pub fn mint_accessory(&self, artist: &Pubkey, accessory_mint: &Pubkey, name: &str) -> Instruction {
        Instruction {
            program_id: shapely::ID,
            accounts: shapely::accounts::MintAccessory {
                artist: *artist,
                config: self.config,
                accessory_mint: *accessory_mint,
                artist_accessory_ata: get_associated_token_address(artist, accessory_mint),
                accessory_metadata: metadata_address(accessory_mint),
                accessory_master_edition: master_edition_address(accessory_mint),
                accessory_collection: self.accessory_collection,
                accessory_collection_metadata: metadata_address(&self.accessory_collection),
                accessory_collection_master_edition: master_edition_address(
                    &self.accessory_collection,
                ),
                sysvar_instructions: sysvar::instructions::ID,
                token_program: TOKEN_PROGRAM,
                associated_token_program: ASSOCIATED_TOKEN_PROGRAM,
                metadata_program: METADATA_PROGRAM,
                system_program: SYSTEM_PROGRAM,
            }
            .to_account_metas(None),
            data: shapely::instruction::MintAccessory {
                name: name.to_string(),
                uri: "https://arweave.net/accessory".to_string(),
            }
            .data(),
        }
    }

    /// `with_artist_ata = false` leaves the optional token account out.
    pub fn list(&self, artist: &Pubkey, mint: &Pubkey, price: u64, with_artist_ata: bool) -> Instruction {
        let listing = listing_address(mint, artist);
        Instruction {
            program_id: shapely::ID,
            accounts: shapely::accounts::ListAccessory {
                artist: *artist,
                config: self.config,
                accessory_mint: *mint,
                accessory_metadata: metadata_address(mint),
                artist_accessory_ata: with_artist_ata
                    .then(|| get_associated_token_address(artist, mint)),
                listing,
                vault: get_associated_token_address(&listing, mint),
                token_program: TOKEN_PROGRAM,
                associated_token_program: ASSOCIATED_TOKEN_PROGRAM,
                metadata_program: METADATA_PROGRAM,
                system_program: SYSTEM_PROGRAM,
            }
            .to_account_metas(None),
            data: shapely::instruction::ListAccessory { price }.data(),
        }
    }

    pub fn buy(&self, collector: &Pubkey, artist: &Pubkey, mint: &Pubkey) -> Instruction {
        let listing = listing_address(mint, artist);
        let avatar_mint = avatar_address(collector, &self.avatar_collection);
        Instruction {
            program_id: shapely::ID,
            accounts: shapely::accounts::BuyAccessory {
                collector: *collector,
                config: self.config,
                treasury: self.treasury,
                collector_avatar_mint: avatar_mint,
                collector_avatar_ata: get_associated_token_address(collector, &avatar_mint),
                collector_avatar_metadata: metadata_address(&avatar_mint),
                artist: *artist,
                accessory_mint: *mint,
                listing,
                vault: get_associated_token_address(&listing, mint),
                collector_accessory_ata: get_associated_token_address(collector, mint),
                token_program: TOKEN_PROGRAM,
                associated_token_program: ASSOCIATED_TOKEN_PROGRAM,
                metadata_program: METADATA_PROGRAM,
                system_program: SYSTEM_PROGRAM,
            }
            .to_account_metas(None),
            data: shapely::instruction::BuyAccessory {}.data(),
        }
    }
}

/// `signer` asks to delist the record that `artist` opened.
pub fn delist(signer: &Pubkey, artist: &Pubkey, mint: &Pubkey) -> Instruction {
    let listing = listing_address(mint, artist);
    Instruction {
        program_id: shapely::ID,
        accounts: shapely::accounts::DelistAccessory {
            artist: *signer,
            accessory_mint: *mint,
            listing,
            vault: get_associated_token_address(&listing, mint),
            artist_accessory_ata: get_associated_token_address(signer, mint),
            token_program: TOKEN_PROGRAM,
            associated_token_program: ASSOCIATED_TOKEN_PROGRAM,
            system_program: SYSTEM_PROGRAM,
        }
        .to_account_metas(None),
        data: shapely::instruction::DelistAccessory {}.data(),
    }
}
