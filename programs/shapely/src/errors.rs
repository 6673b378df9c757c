use anchor_lang::prelude::*;

#[error_code]
pub enum ShapelyError {
    // Validation
    #[msg("Fee basis points must be <= 10000")]
    InvalidFee,

    #[msg("Listing price must be greater than zero")]
    InvalidPrice,

    #[msg("Name must not be empty")]
    EmptyName,

    #[msg("Name exceeds 32 bytes")]
    NameTooLong,

    #[msg("URI exceeds 200 bytes")]
    UriTooLong,

    #[msg("Invalid Collection Mint")]
    InvalidCollectionMint,

    #[msg("Accessory mint is not verified in the collection")]
    AccessoryNotVerified,

    #[msg("Avatar mint is not verified in the collection")]
    AvatarNotVerified,

    // Authorization
    #[msg("Signer is not the listing artist")]
    Unauthorized,

    #[msg("Artist does not own the accessory")]
    NotOwner,

    // State conflicts
    #[msg("Config already initialized for this seed")]
    AlreadyInitialized,

    #[msg("Collection already exists")]
    CollectionAlreadyExists,

    #[msg("Avatar already minted for this collector")]
    AvatarAlreadyMinted,

    #[msg("Accessory is not listed")]
    NotListed,

    #[msg("Accessory is already listed")]
    AlreadyListed,

    // Insufficient resources
    #[msg("Insufficient funds")]
    InsufficientFunds,

    // Address derivation
    #[msg("Seed component exceeds 32 bytes")]
    SeedTooLong,

    #[msg("Too many seed components")]
    TooManySeeds,

    #[msg("Unable to find a valid program address")]
    AddressDerivationFailed,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Listing belongs to a different config")]
    ConfigMismatch,
}

/// Coarse failure classes clients branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Authorization,
    StateConflict,
    InsufficientResource,
    Derivation,
    Arithmetic,
}

impl ShapelyError {
    pub fn category(&self) -> ErrorCategory {
        use ShapelyError::*;

        match self {
            InvalidFee | InvalidPrice | EmptyName | NameTooLong | UriTooLong
            | InvalidCollectionMint | AccessoryNotVerified | AvatarNotVerified => {
                ErrorCategory::Validation
            }
            Unauthorized | NotOwner => ErrorCategory::Authorization,
            AlreadyInitialized | CollectionAlreadyExists | AvatarAlreadyMinted | NotListed
            | AlreadyListed | ConfigMismatch => ErrorCategory::StateConflict,
            InsufficientFunds => ErrorCategory::InsufficientResource,
            SeedTooLong | TooManySeeds | AddressDerivationFailed => ErrorCategory::Derivation,
            MathOverflow => ErrorCategory::Arithmetic,
        }
    }
}
