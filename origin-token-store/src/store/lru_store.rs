use super::single_origin::SingleOriginTokens;
use super::TokenStore;
use crate::config::StoreConfig;
use crate::errors::TokenStoreError;
use crate::token::ClientToken;
use linked_hash_map::LinkedHashMap;
use log::{debug, trace};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

struct OriginEntry {
    tokens: SingleOriginTokens,
    has_been_used: bool,
}

impl OriginEntry {
    fn new(tokens_per_origin: usize) -> OriginEntry {
        OriginEntry {
            tokens: SingleOriginTokens::new(tokens_per_origin),
            has_been_used: false,
        }
    }

    fn primary_token(&self) -> Option<&ClientToken> {
        self.tokens.peek()
    }
}

/// Tokens for at most `max_origins` origins, `tokens_per_origin` each.
///
/// Once full, storing a token for an unknown origin recycles the entry of
/// the least recently touched origin. Only `put`, `pop` and `take` count as
/// a touch.
pub struct LruTokenStore {
    // front is the least recently touched origin
    origins: Mutex<LinkedHashMap<String, OriginEntry>>,
    max_origins: usize,
    tokens_per_origin: usize,
}

impl LruTokenStore {
    pub fn new(
        max_origins: usize,
        tokens_per_origin: usize,
    ) -> Result<LruTokenStore, TokenStoreError> {
        LruTokenStore::from_config(&StoreConfig::new(max_origins, tokens_per_origin))
    }

    pub fn from_config(config: &StoreConfig) -> Result<LruTokenStore, TokenStoreError> {
        config.validate()?;
        debug!(
            "creating token store for {} origins, {} tokens each",
            config.max_origins, config.tokens_per_origin
        );
        Ok(LruTokenStore {
            origins: Mutex::new(LinkedHashMap::with_capacity(config.max_origins)),
            max_origins: config.max_origins,
            tokens_per_origin: config.tokens_per_origin,
        })
    }

    fn lock(&self) -> MutexGuard<'_, LinkedHashMap<String, OriginEntry>> {
        self.origins.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn put<T: Into<ClientToken>>(&self, key: &str, token: T) {
        let token = token.into();
        let mut origins = self.lock();
        trace!("put token for origin {}", key);

        if let Some(entry) = origins.get_refresh(key) {
            entry.tokens.insert(token);
            return;
        }

        let recycled = if origins.len() < self.max_origins {
            None
        } else {
            origins.pop_front()
        };

        let mut entry = match recycled {
            Some((evicted_key, mut entry)) => {
                debug!(
                    "evicting tokens of origin {} to make room for {}",
                    evicted_key, key
                );
                entry.tokens.clear();
                entry.has_been_used = false;
                entry
            }
            None => OriginEntry::new(self.tokens_per_origin),
        };
        entry.tokens.insert(token);
        origins.insert(key.to_owned(), entry);
    }

    /// Draw the newest token of `key` without removing it.
    ///
    /// The origin is marked as used, see [`LruTokenStore::has_been_used`].
    /// Use [`LruTokenStore::take`] when a token must not be handed out twice.
    pub fn pop(&self, key: &str) -> Option<ClientToken> {
        let mut origins = self.lock();
        trace!("pop token for origin {}", key);

        let entry = origins.get_refresh(key)?;
        entry.has_been_used = true;
        entry.primary_token().cloned()
    }

    /// Draw the newest token of `key` and remove it from the store.
    pub fn take(&self, key: &str) -> Option<ClientToken> {
        let mut origins = self.lock();
        trace!("take token for origin {}", key);

        let entry = origins.get_refresh(key)?;
        entry.has_been_used = true;
        entry.tokens.pop()
    }

    /// Whether a token was drawn for `key` since the last call.
    pub fn has_been_used(&self, key: &str) -> bool {
        let mut origins = self.lock();
        match origins.get_mut(key) {
            Some(entry) => std::mem::replace(&mut entry.has_been_used, false),
            None => false,
        }
    }

    /// Base64 of the newest token of `key`, empty when there is none.
    pub fn get_token(&self, key: &str) -> String {
        let origins = self.lock();
        origins
            .get(key)
            .and_then(OriginEntry::primary_token)
            .map(ClientToken::to_base64)
            .unwrap_or_default()
    }

    /// Length in bytes of the newest token of `key`, 0 when there is none.
    pub fn size(&self, key: &str) -> usize {
        let origins = self.lock();
        origins
            .get(key)
            .and_then(OriginEntry::primary_token)
            .map(ClientToken::len)
            .unwrap_or(0)
    }

    pub fn count(&self, key: &str) -> usize {
        let origins = self.lock();
        origins.get(key).map_or(0, |entry| entry.tokens.count())
    }

    /// Tracked origins, most recently touched first.
    pub fn origins(&self) -> Vec<String> {
        self.lock().keys().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn max_origins(&self) -> usize {
        self.max_origins
    }

    pub fn tokens_per_origin(&self) -> usize {
        self.tokens_per_origin
    }

    /// Human readable dump of every origin. Used flags are left untouched.
    pub fn describe(&self) -> String {
        let origins = self.lock();
        let mut ret = String::from("The token store contains the following items:\n");
        for (key, entry) in origins.iter() {
            let token = entry
                .primary_token()
                .map(ClientToken::to_base64)
                .unwrap_or_default();
            ret.push_str(&format!(
                "Domain: {} Used: {} Token: {}\n",
                key, entry.has_been_used, token
            ));
        }
        ret
    }
}

impl TokenStore for LruTokenStore {
    fn put(&self, key: &str, token: ClientToken) {
        LruTokenStore::put(self, key, token)
    }

    fn pop(&self, key: &str) -> Option<ClientToken> {
        LruTokenStore::pop(self, key)
    }
}

impl fmt::Display for LruTokenStore {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&self.describe())
    }
}

impl fmt::Debug for LruTokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruTokenStore")
            .field("max_origins", &self.max_origins)
            .field("tokens_per_origin", &self.tokens_per_origin)
            .field("origins", &self.len())
            .finish()
    }
}
