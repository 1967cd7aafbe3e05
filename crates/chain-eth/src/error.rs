use thiserror::Error;

/// Ethereum chain operation errors.
#[derive(Debug, Error)]
pub enum EthError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("fee overflow: {gas_limit} gas at {max_fee_per_gas} wei/gas exceeds u128")]
    FeeOverflow {
        gas_limit: u64,
        max_fee_per_gas: u128,
    },

    #[error("unsupported chain: {0}")]
    UnsupportedChain(u64),
}
