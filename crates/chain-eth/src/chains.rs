use serde::Serialize;

use crate::fee::{ERC20_TRANSFER_GAS, NATIVE_TRANSFER_GAS};

/// Definition of an EVM-compatible blockchain network.
#[derive(Debug, Clone, Serialize)]
pub struct EvmChain {
    pub chain_id: u64,
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
    /// Gas limit to assume for a plain native transfer.
    pub native_transfer_gas: u64,
    /// Gas limit to assume for an ERC-20 `transfer` call.
    pub erc20_transfer_gas: u64,
    pub is_testnet: bool,
}

/// Ethereum Mainnet (chain ID 1).
pub const ETHEREUM: EvmChain = EvmChain {
    chain_id: 1,
    name: "Ethereum",
    symbol: "ETH",
    decimals: 18,
    native_transfer_gas: NATIVE_TRANSFER_GAS,
    erc20_transfer_gas: ERC20_TRANSFER_GAS,
    is_testnet: false,
};

/// Polygon PoS (chain ID 137).
pub const POLYGON: EvmChain = EvmChain {
    chain_id: 137,
    name: "Polygon",
    symbol: "MATIC",
    decimals: 18,
    native_transfer_gas: NATIVE_TRANSFER_GAS,
    erc20_transfer_gas: ERC20_TRANSFER_GAS,
    is_testnet: false,
};

/// Arbitrum One (chain ID 42161).
pub const ARBITRUM: EvmChain = EvmChain {
    chain_id: 42161,
    name: "Arbitrum One",
    symbol: "ETH",
    decimals: 18,
    native_transfer_gas: NATIVE_TRANSFER_GAS,
    erc20_transfer_gas: ERC20_TRANSFER_GAS,
    is_testnet: false,
};

/// Base (chain ID 8453).
pub const BASE: EvmChain = EvmChain {
    chain_id: 8453,
    name: "Base",
    symbol: "ETH",
    decimals: 18,
    native_transfer_gas: NATIVE_TRANSFER_GAS,
    erc20_transfer_gas: ERC20_TRANSFER_GAS,
    is_testnet: false,
};

/// Optimism (chain ID 10).
pub const OPTIMISM: EvmChain = EvmChain {
    chain_id: 10,
    name: "Optimism",
    symbol: "ETH",
    decimals: 18,
    native_transfer_gas: NATIVE_TRANSFER_GAS,
    erc20_transfer_gas: ERC20_TRANSFER_GAS,
    is_testnet: false,
};

/// Sepolia Testnet (chain ID 11155111).
pub const SEPOLIA: EvmChain = EvmChain {
    chain_id: 11155111,
    name: "Sepolia",
    symbol: "ETH",
    decimals: 18,
    native_transfer_gas: NATIVE_TRANSFER_GAS,
    erc20_transfer_gas: ERC20_TRANSFER_GAS,
    is_testnet: true,
};

/// All supported EVM chains.
const ALL_CHAINS: &[&EvmChain] = &[
    &ETHEREUM,
    &POLYGON,
    &ARBITRUM,
    &BASE,
    &OPTIMISM,
    &SEPOLIA,
];

/// Returns the chain definition for a given chain ID, or `None` if unsupported.
pub fn get_chain(chain_id: u64) -> Option<&'static EvmChain> {
    ALL_CHAINS.iter().find(|c| c.chain_id == chain_id).copied()
}

/// Returns all supported EVM chain definitions.
pub fn supported_chains() -> Vec<&'static EvmChain> {
    ALL_CHAINS.to_vec()
}
