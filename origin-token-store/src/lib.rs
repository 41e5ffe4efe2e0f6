pub mod config;
pub mod errors;
pub mod store;
pub mod token;

pub use config::StoreConfig;
pub use errors::TokenStoreError;
pub use store::{LruTokenStore, TokenStore};
pub use token::ClientToken;
