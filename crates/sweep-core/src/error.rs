use thiserror::Error;

use crate::provider::ProviderError;

/// Top-level sweep errors.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("chain error: {0}")]
    Chain(String),

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl From<chain_eth::EthError> for SweepError {
    fn from(e: chain_eth::EthError) -> Self {
        SweepError::Chain(format!("ETH: {e}"))
    }
}

impl From<chain_sol::SolError> for SweepError {
    fn from(e: chain_sol::SolError) -> Self {
        SweepError::Chain(format!("SOL: {e}"))
    }
}
