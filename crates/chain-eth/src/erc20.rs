//! ERC-20 `transfer` calldata encoding.
//!
//! A token sweep is an ordinary transaction to the token contract whose
//! calldata invokes `transfer(address,uint256)`. Only that one call is
//! encoded here; balance and metadata queries are the host provider's
//! concern.

use alloy_primitives::{Address, U256};

/// Function selector for `transfer(address,uint256)`: `0xa9059cbb`.
pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// Decimal precision assumed for a token when its `decimals()` call fails.
///
/// 18 matches the overwhelming majority of ERC-20 deployments.
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;

/// Encodes an ERC-20 `transfer(address,uint256)` call.
///
/// Returns the complete calldata: 4-byte selector, the recipient address
/// left-padded to 32 bytes, and the amount as a big-endian uint256.
pub fn encode_transfer(to: Address, amount: U256) -> Vec<u8> {
    let mut data = Vec::with_capacity(68);
    data.extend_from_slice(&TRANSFER_SELECTOR);
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(to.as_slice());
    data.extend_from_slice(&amount.to_be_bytes::<32>());
    data
}
