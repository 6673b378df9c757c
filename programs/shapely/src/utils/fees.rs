use anchor_lang::prelude::*;
use crate::constants::{FEE_BPS_DENOMINATOR, MAX_FEE_BPS};
use crate::errors::ShapelyError;
use crate::utils::safe_sub;

/// How a sale price is divided between the treasury and the artist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub price: u64,
    pub fee: u64,
    pub seller_amount: u64,
}

/// `floor(amount * fee_bps / 10_000)`, computed without intermediate overflow.
pub fn calculate_fee(amount: u64, fee_bps: u16) -> Result<u64> {
    require!(fee_bps <= MAX_FEE_BPS, ShapelyError::InvalidFee);

    let fee = (amount as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(ShapelyError::MathOverflow)?
        / FEE_BPS_DENOMINATOR as u128;

    u64::try_from(fee).map_err(|_| error!(ShapelyError::MathOverflow))
}

pub fn split_price(price: u64, fee_bps: u16) -> Result<Settlement> {
    let fee = calculate_fee(price, fee_bps)?;
    let seller_amount = safe_sub(price, fee)?;

    Ok(Settlement {
        price,
        fee,
        seller_amount,
    })
}
