pub mod initialize;
pub mod mint_avatar;
pub mod mint_accessory;
pub mod list_accessory;
pub mod relist_accessory;
pub mod delist_accessory;
pub mod buy_accessory;

pub use initialize::*;
pub use mint_avatar::*;
pub use mint_accessory::*;
pub use list_accessory::*;
pub use relist_accessory::*;
pub use delist_accessory::*;
pub use buy_accessory::*;
