use crate::errors::TokenStoreError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// How many distinct origins are remembered at most
    pub max_origins: usize,
    /// How many tokens are kept for a single origin
    pub tokens_per_origin: usize,
}

/// `StoreConfig` implements `Default`
impl ::std::default::Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_origins: 100,
            tokens_per_origin: 4,
        }
    }
}

impl StoreConfig {
    pub fn new(max_origins: usize, tokens_per_origin: usize) -> StoreConfig {
        StoreConfig {
            max_origins,
            tokens_per_origin,
        }
    }

    pub fn validate(&self) -> Result<(), TokenStoreError> {
        if self.max_origins == 0 {
            return Err(TokenStoreError::ZeroMaxOrigins);
        }
        if self.tokens_per_origin == 0 {
            return Err(TokenStoreError::ZeroTokensPerOrigin);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::StoreConfig;
    use crate::errors::TokenStoreError;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Ok(()), StoreConfig::default().validate());
    }

    #[test]
    fn zero_capacities_are_rejected() {
        assert_eq!(
            Err(TokenStoreError::ZeroMaxOrigins),
            StoreConfig::new(0, 1).validate()
        );
        assert_eq!(
            Err(TokenStoreError::ZeroTokensPerOrigin),
            StoreConfig::new(1, 0).validate()
        );
    }
}
