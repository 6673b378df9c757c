pub mod collection;
pub mod config;
pub mod listing;

pub use collection::*;
pub use config::*;
pub use listing::*;
