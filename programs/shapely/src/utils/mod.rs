pub mod accounts;
pub mod escrow;
pub mod fees;
pub mod metadata;
pub mod pda;
pub mod validation;

use anchor_lang::prelude::*;
use crate::errors::ShapelyError;

pub fn safe_sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(ShapelyError::MathOverflow.into())
}
