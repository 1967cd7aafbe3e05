//! Ethereum/EVM chain support for the sweep planner.
//!
//! This crate provides:
//! - EVM address parsing and validation (with EIP-55 checksum verification)
//! - Fixed-precision unit conversion between display strings and wei/base units
//! - Worst-case EIP-1559 fee-reserve arithmetic
//! - ERC-20 `transfer` calldata encoding
//! - Multi-chain EVM network definitions
//!
//! All amount arithmetic is integer minor-unit arithmetic on `u128` (wei)
//! and `U256` (token base units) — floating point never touches a balance.

pub mod address;
pub mod chains;
pub mod erc20;
pub mod error;
pub mod fee;
pub mod units;

pub use address::parse_address;
pub use chains::{get_chain, supported_chains, EvmChain};
pub use erc20::{encode_transfer, DEFAULT_TOKEN_DECIMALS};
pub use error::EthError;
pub use fee::{worst_case_fee, ERC20_TRANSFER_GAS, NATIVE_TRANSFER_GAS};
pub use units::{format_amount, format_ether, parse_amount, parse_ether};
