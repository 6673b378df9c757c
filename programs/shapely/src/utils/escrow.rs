use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::token::{close_account, transfer_checked, CloseAccount, TransferChecked};

use crate::constants::{NFT_DECIMALS, NFT_SUPPLY};

/// Moves the NFT unit between token accounts. Pass empty `signer_seeds` when
/// `authority` signed the transaction itself.
pub fn transfer_nft<'info>(
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    transfer_checked(
        CpiContext::new_with_signer(
            token_program.clone(),
            TransferChecked {
                from: from.clone(),
                mint: mint.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        NFT_SUPPLY,
        NFT_DECIMALS,
    )
}

/// System transfer from a signing payer. Zero amounts are skipped.
pub fn pay_lamports<'info>(
    system_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    transfer(
        CpiContext::new(
            system_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
            },
        ),
        amount,
    )
}

/// Closes an emptied vault, returning its rent to `destination`.
pub fn close_vault<'info>(
    token_program: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    close_account(CpiContext::new_with_signer(
        token_program.clone(),
        CloseAccount {
            account: vault.clone(),
            destination: destination.clone(),
            authority: authority.clone(),
        },
        signer_seeds,
    ))
}
