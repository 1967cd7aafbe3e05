//! Worst-case fee-reserve arithmetic for EIP-1559 transfers.
//!
//! A sweep must withhold enough of the balance to pay for its own
//! transaction, so the reserve is computed against `max_fee_per_gas` —
//! the most the sender can be charged — rather than an expected
//! effective price. Overshooting the reserve leaves dust behind;
//! undershooting makes the transaction unpayable.

use crate::error::EthError;

/// Gas consumed by a plain native transfer.
pub const NATIVE_TRANSFER_GAS: u64 = 21_000;

/// Gas limit to assume for an ERC-20 `transfer` call.
///
/// Token transfers vary by contract; 65k covers standard implementations
/// with headroom.
pub const ERC20_TRANSFER_GAS: u64 = 65_000;

/// Computes the worst-case fee in wei for a transaction.
///
/// Checked multiplication: a corrupt or adversarial fee quote must not
/// wrap into a tiny reserve.
pub fn worst_case_fee(gas_limit: u64, max_fee_per_gas: u128) -> Result<u128, EthError> {
    (gas_limit as u128)
        .checked_mul(max_fee_per_gas)
        .ok_or(EthError::FeeOverflow {
            gas_limit,
            max_fee_per_gas,
        })
}
