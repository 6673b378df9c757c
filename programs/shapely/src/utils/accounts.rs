use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};
use anchor_spl::associated_token::{create, Create};
use anchor_spl::token::{initialize_mint2, mint_to, spl_token, InitializeMint2, MintTo};

use crate::constants::{NFT_DECIMALS, NFT_SUPPLY};

/// Allocates a program-derived account owned by `owner`.
///
/// Anyone can send lamports to a PDA before it is allocated, so a funded
/// but empty target is topped up, allocated and assigned instead of failing
/// `create_account`.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    owner: &Pubkey,
    space: usize,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let rent = Rent::get()?;
    let required = rent.minimum_balance(space);

    if target.lamports() == 0 {
        create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer_seeds,
            ),
            required,
            space as u64,
            owner,
        )?;
        return Ok(());
    }

    let top_up = required.saturating_sub(target.lamports());
    if top_up > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }

    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer_seeds,
        ),
        owner,
    )?;

    Ok(())
}

/// Creates a 0-decimal mint at a PDA with `authority` as mint and freeze authority.
pub fn create_nft_mint<'info>(
    payer: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    authority: &Pubkey,
    token_program: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    mint_signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    create_pda_account(
        payer,
        mint,
        system_program,
        token_program.key,
        spl_token::state::Mint::LEN,
        mint_signer_seeds,
    )?;

    initialize_mint2(
        CpiContext::new(
            token_program.clone(),
            InitializeMint2 { mint: mint.clone() },
        ),
        NFT_DECIMALS,
        authority,
        Some(authority),
    )
}

pub fn create_associated_token_account<'info>(
    payer: &AccountInfo<'info>,
    associated_token: &AccountInfo<'info>,
    owner: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    associated_token_program: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
) -> Result<()> {
    create(CpiContext::new(
        associated_token_program.clone(),
        Create {
            payer: payer.clone(),
            associated_token: associated_token.clone(),
            authority: owner.clone(),
            mint: mint.clone(),
            system_program: system_program.clone(),
            token_program: token_program.clone(),
        },
    ))
}

/// Mints the single unit of an NFT; `authority` signs through `signer_seeds`.
pub fn mint_one<'info>(
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: mint.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        NFT_SUPPLY,
    )
}

/// Tops `account` up to the rent-exempt minimum for a data-less account.
pub fn fund_rent_exempt<'info>(
    payer: &AccountInfo<'info>,
    account: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
) -> Result<u64> {
    let required = Rent::get()?.minimum_balance(0);
    let top_up = required.saturating_sub(account.lamports());

    if top_up > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: account.clone(),
                },
            ),
            top_up,
        )?;
    }

    Ok(top_up)
}
