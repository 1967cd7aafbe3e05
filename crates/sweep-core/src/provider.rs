//! External collaborator traits.
//!
//! Balance retrieval, fee estimation, token metadata, and transfer
//! submission are all delegated to the embedding host: a provider is
//! already bound to one connected account on one chain. The planner and
//! flows only consume the values these traits return; they never open a
//! connection themselves.
//!
//! How a host satisfies these calls — JSON-RPC, an in-process node, a
//! wallet extension bridge — is invisible here.

use alloy_primitives::{Address, U256};
use chain_sol::SolAddress;
use thiserror::Error;

/// A collaborator call failed.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("balance query failed: {0}")]
    Balance(String),

    #[error("fee estimation failed: {0}")]
    FeeEstimation(String),

    #[error("token metadata query failed: {0}")]
    TokenMetadata(String),

    #[error("submission failed: {0}")]
    Submission(String),
}

/// Host-side access to the connected EVM account.
pub trait EvmProvider {
    /// Native balance of the connected account, in wei.
    fn native_balance(&self) -> Result<u128, ProviderError>;

    /// ERC-20 balance of the connected account, in the token's base units.
    fn token_balance(&self, contract: Address) -> Result<U256, ProviderError>;

    /// The token's `decimals()` value.
    fn token_decimals(&self, contract: Address) -> Result<u8, ProviderError>;

    /// Worst-case fee, in wei, for a native transfer to `recipient`.
    fn estimate_native_fee(&self, recipient: Address) -> Result<u128, ProviderError>;

    /// Current gas-price ceiling (max fee per gas), in wei, for hosts that
    /// quote prices rather than whole-transaction fees. Combined with the
    /// chain's default gas limits when the `estimate_*_fee` calls fail.
    /// The default refuses, sending callers straight to the fixed
    /// fallback fee.
    fn max_fee_per_gas(&self) -> Result<u128, ProviderError> {
        Err(ProviderError::FeeEstimation("no gas price source".into()))
    }

    /// Worst-case fee, in wei, for an ERC-20 transfer to `recipient`.
    fn estimate_token_fee(
        &self,
        contract: Address,
        recipient: Address,
    ) -> Result<u128, ProviderError>;

    /// Submits a native transfer. Fire-and-forget: confirmation tracking
    /// is the host's concern.
    fn submit_native_transfer(
        &self,
        recipient: Address,
        amount_wei: u128,
    ) -> Result<(), ProviderError>;

    /// Submits an ERC-20 transfer. `calldata` is the pre-encoded
    /// `transfer(address,uint256)` call for hosts that submit raw
    /// transactions; `decimals` is display metadata for hosts that
    /// re-encode through their own contract layer.
    fn submit_token_transfer(
        &self,
        contract: Address,
        recipient: Address,
        amount: U256,
        decimals: u8,
        calldata: &[u8],
    ) -> Result<(), ProviderError>;
}

/// Host-side access to the connected Solana account.
pub trait SolProvider {
    /// The connected account's address.
    fn account(&self) -> Result<SolAddress, ProviderError>;

    /// Balance of `owner`, in lamports.
    fn balance(&self, owner: &SolAddress) -> Result<u64, ProviderError>;

    /// Submits a SOL transfer from `sender` to `recipient`.
    fn submit_transfer(
        &self,
        recipient: &SolAddress,
        lamports: u64,
        sender: &SolAddress,
    ) -> Result<(), ProviderError>;
}
