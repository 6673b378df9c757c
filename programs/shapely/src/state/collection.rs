use anchor_lang::prelude::*;
use crate::constants::*;

/// The two top-level collections every deployment owns.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionKind {
    Avatar,
    Accessory,
}

impl CollectionKind {
    pub fn seed(&self) -> &'static [u8] {
        match self {
            CollectionKind::Avatar => AVATAR_COLLECTION_SEED,
            CollectionKind::Accessory => ACCESSORY_COLLECTION_SEED,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CollectionKind::Avatar => AVATAR_COLLECTION_NAME,
            CollectionKind::Accessory => ACCESSORY_COLLECTION_NAME,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CollectionKind::Avatar => AVATAR_COLLECTION_SYMBOL,
            CollectionKind::Accessory => ACCESSORY_COLLECTION_SYMBOL,
        }
    }

    /// Symbol carried by items minted into this collection.
    pub fn item_symbol(&self) -> &'static str {
        match self {
            CollectionKind::Avatar => AVATAR_SYMBOL,
            CollectionKind::Accessory => ACCESSORY_SYMBOL,
        }
    }

    pub fn uri(&self) -> &'static str {
        COLLECTION_URI
    }
}
