use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("9PgEiZqE6d9CxAUY7gF9Tn2mXeySnJPnUkMhRAnxwskX");

#[program]
pub mod shapely {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, seed: u64, fee_bps: u16) -> Result<()> {
        instructions::initialize::initialize(ctx, seed, fee_bps)
    }

    pub fn mint_avatar(ctx: Context<MintAvatar>, name: String, uri: String) -> Result<()> {
        instructions::mint_avatar::mint_avatar(ctx, name, uri)
    }

    pub fn mint_accessory(ctx: Context<MintAccessory>, name: String, uri: String) -> Result<()> {
        instructions::mint_accessory::mint_accessory(ctx, name, uri)
    }

    pub fn list_accessory(ctx: Context<ListAccessory>, price: u64) -> Result<()> {
        instructions::list_accessory::list_accessory(ctx, price)
    }

    pub fn relist_accessory(ctx: Context<RelistAccessory>, price: u64) -> Result<()> {
        instructions::relist_accessory::relist_accessory(ctx, price)
    }

    pub fn delist_accessory(ctx: Context<DelistAccessory>) -> Result<()> {
        instructions::delist_accessory::delist_accessory(ctx)
    }

    pub fn buy_accessory(ctx: Context<BuyAccessory>) -> Result<()> {
        instructions::buy_accessory::buy_accessory(ctx)
    }
}
