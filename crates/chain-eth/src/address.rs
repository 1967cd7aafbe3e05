//! EVM address parsing and validation.
//!
//! Recipient and token-contract addresses arrive as strings from the host.
//! They are parsed into `alloy_primitives::Address` exactly once, at the
//! boundary; everything downstream works with the typed form. Mixed-case
//! input is verified against its EIP-55 checksum — a transposed character
//! in a destination address must be rejected, not silently accepted.

use alloy_primitives::Address;

use crate::error::EthError;

/// Parses a 0x-prefixed EVM address string.
///
/// All-lowercase and all-uppercase inputs carry no checksum and are accepted
/// as-is. Mixed-case inputs must match their EIP-55 checksummed form.
pub fn parse_address(address: &str) -> Result<Address, EthError> {
    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| EthError::InvalidAddress("address must start with 0x".into()))?;

    if hex_part.len() != 40 {
        return Err(EthError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_part.len()
        )));
    }

    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EthError::InvalidAddress(
            "address contains non-hex characters".into(),
        ));
    }

    let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());

    if has_upper && has_lower {
        // Mixed case: EIP-55 checksum must hold.
        Address::parse_checksummed(format!("0x{hex_part}"), None)
            .map_err(|_| EthError::InvalidAddress("EIP-55 checksum mismatch".into()))
    } else {
        hex_part
            .parse()
            .map_err(|e| EthError::InvalidAddress(format!("invalid hex: {e}")))
    }
}

/// Returns the EIP-55 checksummed display form of an address.
pub fn checksum(address: &Address) -> String {
    address.to_checksum(None)
}
