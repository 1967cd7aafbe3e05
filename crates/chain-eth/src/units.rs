//! Fixed-precision conversion between display amounts and minor units.
//!
//! Balances and fees are carried as integer wei (`u128`) or token base
//! units (`U256`) throughout. Display strings are parsed and formatted
//! at the host boundary via `alloy_primitives::utils`, so no floating
//! point is ever involved in amount arithmetic.

use alloy_primitives::utils::{format_units, parse_units, ParseUnits};
use alloy_primitives::U256;

use crate::error::EthError;

/// Wei per 1 ETH (18 decimals).
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Parses a decimal amount string into base units for an asset with the
/// given number of decimals.
///
/// Rejects negative amounts and amounts with more fractional digits than
/// the asset carries.
pub fn parse_amount(value: &str, decimals: u8) -> Result<U256, EthError> {
    match parse_units(value, decimals)
        .map_err(|e| EthError::InvalidAmount(format!("{value:?}: {e}")))?
    {
        ParseUnits::U256(amount) => Ok(amount),
        ParseUnits::I256(_) => Err(EthError::InvalidAmount(format!(
            "{value:?}: amount must not be negative"
        ))),
    }
}

/// Formats base units as a decimal string, trimming trailing zeros.
pub fn format_amount(amount: U256, decimals: u8) -> Result<String, EthError> {
    let s = format_units(amount, decimals)
        .map_err(|e| EthError::InvalidAmount(e.to_string()))?;
    Ok(trim_trailing_zeros(&s))
}

/// Parses a decimal ETH amount string into wei.
pub fn parse_ether(value: &str) -> Result<u128, EthError> {
    let wei = parse_amount(value, 18)?;
    u128::try_from(wei)
        .map_err(|_| EthError::InvalidAmount(format!("{value:?}: exceeds u128 wei")))
}

/// Formats wei as a decimal ETH string, trimming trailing zeros.
pub fn format_ether(wei: u128) -> String {
    // 18 is a valid unit count, so format_units cannot fail here.
    let s = format_units(U256::from(wei), 18).unwrap_or_default();
    trim_trailing_zeros(&s)
}

fn trim_trailing_zeros(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
