use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenStoreError {
    #[error("max origins must be greater than zero")]
    ZeroMaxOrigins,
    #[error("tokens per origin must be greater than zero")]
    ZeroTokensPerOrigin,
}
