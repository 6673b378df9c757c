use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ShapelyError;

/// Name and URI limits follow the token metadata program's on-chain format.
pub fn validate_metadata(name: &str, uri: &str) -> Result<()> {
    require!(!name.trim().is_empty(), ShapelyError::EmptyName);
    require!(name.len() <= MAX_NAME_LENGTH, ShapelyError::NameTooLong);
    require!(uri.len() <= MAX_URI_LENGTH, ShapelyError::UriTooLong);
    Ok(())
}
