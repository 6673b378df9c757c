// Seeds
pub const CONFIG_SEED: &[u8] = b"config";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const AVATAR_COLLECTION_SEED: &[u8] = b"avatar collection";
pub const ACCESSORY_COLLECTION_SEED: &[u8] = b"accessory collection";
pub const AVATAR_SEED: &[u8] = b"avatar";
pub const LISTING_SEED: &[u8] = b"listing";

// Metadata program seeds
pub const METADATA_SEED: &[u8] = b"metadata";
pub const EDITION_SEED: &[u8] = b"edition";

// Financial constants
pub const FEE_BPS_DENOMINATOR: u64 = 10_000;
pub const MAX_FEE_BPS: u16 = 10_000;        // 100%

// Token metadata limits
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_URI_LENGTH: usize = 200;

// Collections
pub const AVATAR_COLLECTION_NAME: &str = "Shapely Avatar Collection";
pub const AVATAR_COLLECTION_SYMBOL: &str = "SAVACOL";
pub const ACCESSORY_COLLECTION_NAME: &str = "Shapely Accessory Collection";
pub const ACCESSORY_COLLECTION_SYMBOL: &str = "SACCCOL";
pub const COLLECTION_URI: &str = "https://github.com/collinsezedike/shapely";

// Items
pub const AVATAR_SYMBOL: &str = "SAVATAR";
pub const ACCESSORY_SYMBOL: &str = "SACCESSORY";

/// Every item is a 1-of-1 with no decimals.
pub const NFT_DECIMALS: u8 = 0;
pub const NFT_SUPPLY: u64 = 1;
