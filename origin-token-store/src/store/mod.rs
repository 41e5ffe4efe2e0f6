use crate::token::ClientToken;

mod lru_store;
pub use lru_store::LruTokenStore;
mod single_origin;

/// Where a client keeps the tokens handed out by the origins it talks to.
///
/// `key` identifies the origin (e.g. derived from scheme, host and port).
pub trait TokenStore: Send + Sync {
    /// Remember a token received from `key`.
    fn put(&self, key: &str, token: ClientToken);

    /// Get a token to present on the next contact with `key`, if any.
    fn pop(&self, key: &str) -> Option<ClientToken>;
}
