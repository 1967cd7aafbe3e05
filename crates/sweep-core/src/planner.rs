//! Maximum-transfer planning.
//!
//! Each function maps a freshly observed `(balance, fee reserve)` pair to
//! either the largest amount that can be sent or an explicit reason why
//! nothing should be. All three are pure: no I/O, no state, no clock.
//! Callers fetch balances and fees immediately beforehand and submit (or
//! drop) the result immediately afterwards.
//!
//! Subtraction is checked throughout — a fee larger than the balance must
//! yield a skip, never a wrapped amount.

use alloy_primitives::U256;
use serde::Serialize;

/// Why a planning pass produced no transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The balance does not cover the fee reserve with anything left over.
    InsufficientNative,
    /// The token balance is zero.
    NothingToSend,
    /// The native balance cannot pay for the token transfer's fee.
    FeeUnaffordable,
}

/// Result of one planning pass: a sendable amount, or a reason to do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutcome<T> {
    Planned(T),
    Skipped(SkipReason),
}

impl<T> PlanOutcome<T> {
    /// Returns the planned amount, if any.
    pub fn planned(self) -> Option<T> {
        match self {
            PlanOutcome::Planned(amount) => Some(amount),
            PlanOutcome::Skipped(_) => None,
        }
    }

    /// Returns the skip reason, if the pass produced no transfer.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            PlanOutcome::Planned(_) => None,
            PlanOutcome::Skipped(reason) => Some(*reason),
        }
    }
}

/// Plans a native-asset sweep: send everything except the fee reserve.
///
/// Returns `Planned(balance - fee)` iff the difference is strictly
/// positive. A balance exactly equal to the fee plans nothing — there
/// would be nothing left to send.
pub fn plan_native_transfer(balance_wei: u128, fee_wei: u128) -> PlanOutcome<u128> {
    match balance_wei.checked_sub(fee_wei) {
        Some(amount) if amount > 0 => PlanOutcome::Planned(amount),
        _ => PlanOutcome::Skipped(SkipReason::InsufficientNative),
    }
}

/// Plans a token sweep: the whole token balance moves, but only if the
/// native balance can pay the token transfer's fee.
///
/// Token transfers on account-based chains are paid for in the chain's
/// native asset, so affordability is checked against the native balance
/// independently of how much token is being moved. The fee-affordability
/// precondition is checked first: with no native funds for gas, a zero
/// token balance is still reported as `FeeUnaffordable`.
pub fn plan_token_transfer(
    token_balance: U256,
    native_balance_wei: u128,
    token_fee_wei: u128,
) -> PlanOutcome<U256> {
    if native_balance_wei < token_fee_wei {
        return PlanOutcome::Skipped(SkipReason::FeeUnaffordable);
    }
    if token_balance.is_zero() {
        return PlanOutcome::Skipped(SkipReason::NothingToSend);
    }
    PlanOutcome::Planned(token_balance)
}

/// Plans a SOL sweep: send everything above the fixed reserve.
///
/// The reserve covers the transaction fee and the sender account's
/// rent-exemption floor. Strict inequality: a balance exactly at the
/// reserve plans nothing.
pub fn plan_sol_transfer(balance_lamports: u64, reserve_lamports: u64) -> PlanOutcome<u64> {
    match balance_lamports.checked_sub(reserve_lamports) {
        Some(amount) if amount > 0 => PlanOutcome::Planned(amount),
        _ => PlanOutcome::Skipped(SkipReason::InsufficientNative),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_eth::units::parse_ether;
    use chain_sol::units::{parse_sol, MIN_TRANSFER_RESERVE_LAMPORTS};

    // ─── plan_native_transfer ────────────────────────────────────────

    #[test]
    fn native_balance_minus_fee() {
        // 1.5 ETH balance, 0.001 ETH fee -> 1.499 ETH planned.
        let balance = parse_ether("1.5").unwrap();
        let fee = parse_ether("0.001").unwrap();

        let outcome = plan_native_transfer(balance, fee);
        assert_eq!(outcome.planned(), Some(parse_ether("1.499").unwrap()));
    }

    #[test]
    fn native_balance_below_fee_skips() {
        // 0.0005 ETH balance, 0.001 ETH fee -> nothing to plan.
        let balance = parse_ether("0.0005").unwrap();
        let fee = parse_ether("0.001").unwrap();

        let outcome = plan_native_transfer(balance, fee);
        assert_eq!(outcome.skip_reason(), Some(SkipReason::InsufficientNative));
    }

    #[test]
    fn native_balance_equal_to_fee_skips() {
        let outcome = plan_native_transfer(1_000, 1_000);
        assert_eq!(outcome.skip_reason(), Some(SkipReason::InsufficientNative));
    }

    #[test]
    fn native_zero_balance_skips() {
        let outcome = plan_native_transfer(0, 0);
        assert_eq!(outcome.skip_reason(), Some(SkipReason::InsufficientNative));
    }

    #[test]
    fn native_zero_fee_sends_everything() {
        let outcome = plan_native_transfer(42, 0);
        assert_eq!(outcome.planned(), Some(42));
    }

    #[test]
    fn native_planned_iff_balance_exceeds_fee() {
        for balance in 0..50u128 {
            for fee in 0..50u128 {
                let outcome = plan_native_transfer(balance, fee);
                if balance > fee {
                    assert_eq!(outcome.planned(), Some(balance - fee));
                } else {
                    assert_eq!(
                        outcome.skip_reason(),
                        Some(SkipReason::InsufficientNative),
                        "balance={balance} fee={fee}"
                    );
                }
            }
        }
    }

    #[test]
    fn native_planning_is_idempotent() {
        let a = plan_native_transfer(1_000_000, 333);
        let b = plan_native_transfer(1_000_000, 333);
        assert_eq!(a, b);
    }

    // ─── plan_token_transfer ─────────────────────────────────────────

    #[test]
    fn token_whole_balance_when_fee_affordable() {
        let token_balance = U256::from(100_000_000u64); // 100 tokens, 6 decimals
        let native = parse_ether("0.01").unwrap();
        let fee = parse_ether("0.0005").unwrap();

        let outcome = plan_token_transfer(token_balance, native, fee);
        assert_eq!(outcome.planned(), Some(token_balance));
    }

    #[test]
    fn token_skipped_when_native_cannot_pay_fee() {
        // Token balance 100, native 0.0002 ETH, token fee 0.0005 ETH.
        let token_balance = U256::from(100u64);
        let native = parse_ether("0.0002").unwrap();
        let fee = parse_ether("0.0005").unwrap();

        let outcome = plan_token_transfer(token_balance, native, fee);
        assert_eq!(outcome.skip_reason(), Some(SkipReason::FeeUnaffordable));
    }

    #[test]
    fn token_fee_check_ignores_token_balance() {
        // Even an enormous token balance cannot pay a native-denominated fee.
        let outcome = plan_token_transfer(U256::MAX, 0, 1);
        assert_eq!(outcome.skip_reason(), Some(SkipReason::FeeUnaffordable));
    }

    #[test]
    fn token_zero_balance_skips() {
        let native = parse_ether("1").unwrap();
        let fee = parse_ether("0.0005").unwrap();

        let outcome = plan_token_transfer(U256::ZERO, native, fee);
        assert_eq!(outcome.skip_reason(), Some(SkipReason::NothingToSend));
    }

    #[test]
    fn token_native_exactly_at_fee_is_affordable() {
        let outcome = plan_token_transfer(U256::from(5u64), 1_000, 1_000);
        assert_eq!(outcome.planned(), Some(U256::from(5u64)));
    }

    #[test]
    fn token_planning_is_idempotent() {
        let a = plan_token_transfer(U256::from(7u64), 100, 10);
        let b = plan_token_transfer(U256::from(7u64), 100, 10);
        assert_eq!(a, b);
    }

    // ─── plan_sol_transfer ───────────────────────────────────────────

    #[test]
    fn sol_balance_minus_reserve() {
        let balance = parse_sol("0.5").unwrap();

        let outcome = plan_sol_transfer(balance, MIN_TRANSFER_RESERVE_LAMPORTS);
        assert_eq!(outcome.planned(), Some(parse_sol("0.49999").unwrap()));
    }

    #[test]
    fn sol_balance_exactly_at_reserve_skips() {
        // 0.00001 SOL balance against a 0.00001 SOL reserve: strict
        // inequality, nothing to send.
        let balance = parse_sol("0.00001").unwrap();

        let outcome = plan_sol_transfer(balance, MIN_TRANSFER_RESERVE_LAMPORTS);
        assert_eq!(outcome.skip_reason(), Some(SkipReason::InsufficientNative));
    }

    #[test]
    fn sol_zero_balance_skips() {
        let outcome = plan_sol_transfer(0, MIN_TRANSFER_RESERVE_LAMPORTS);
        assert_eq!(outcome.skip_reason(), Some(SkipReason::InsufficientNative));
    }

    #[test]
    fn sol_planning_is_monotonic_in_balance() {
        // A larger balance never plans a smaller amount.
        let mut last = 0u64;
        for balance in 0..100_000u64 {
            let planned = plan_sol_transfer(balance, MIN_TRANSFER_RESERVE_LAMPORTS)
                .planned()
                .unwrap_or(0);
            assert!(planned >= last, "balance={balance}");
            last = planned;
        }
    }

    #[test]
    fn sol_planning_is_idempotent() {
        let a = plan_sol_transfer(123_456_789, MIN_TRANSFER_RESERVE_LAMPORTS);
        let b = plan_sol_transfer(123_456_789, MIN_TRANSFER_RESERVE_LAMPORTS);
        assert_eq!(a, b);
    }

    // ─── SkipReason serialization ────────────────────────────────────

    #[test]
    fn skip_reason_serializes_snake_case() {
        let json = serde_json::to_string(&SkipReason::FeeUnaffordable).unwrap();
        assert_eq!(json, "\"fee_unaffordable\"");
    }
}
