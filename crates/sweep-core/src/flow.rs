//! Sweep orchestration.
//!
//! Each flow observes fresh state, plans, and submits — strictly in that
//! order, once per invocation. Nothing is cached between invocations and
//! nothing is retried: a re-triggered flow simply reads fresh state and
//! computes an independent plan.
//!
//! Failure policy mirrors the planner's taxonomy:
//! - fee estimation degrades in steps — the host's whole-transaction
//!   estimate, then a quote from the host's gas price and the chain's
//!   default gas limit, then the fixed fallback fee (logged at `warn`),
//! - token-decimals lookups are recovered locally with a fixed default,
//! - insufficient funds is an explicit `Skipped` outcome, not an error,
//! - balance queries and submission failures propagate as `SweepError`.

use alloy_primitives::U256;
use chain_eth::{worst_case_fee, ERC20_TRANSFER_GAS, NATIVE_TRANSFER_GAS};
use log::{debug, warn};
use serde::Serialize;

use crate::config::SweepConfig;
use crate::error::SweepError;
use crate::planner::{
    plan_native_transfer, plan_sol_transfer, plan_token_transfer, PlanOutcome, SkipReason,
};
use crate::provider::{EvmProvider, ProviderError, SolProvider};
use crate::types::{AssetRef, Chain, Recipient, TransferPlan};

/// Result of one asset flow, for the embedding host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FlowOutcome {
    /// A transfer was planned and handed to the submit primitive.
    Submitted { asset: String, amount: String },
    /// Planning decided against a transfer.
    Skipped { asset: String, reason: SkipReason },
}

/// Outcomes of the EVM sweep: the native flow, plus the token flow when a
/// token is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvmSweepReport {
    pub native: FlowOutcome,
    pub token: Option<FlowOutcome>,
}

/// Sweeps the connected EVM account: the native asset first, then the
/// configured ERC-20 token, if any. The two passes are independent; a
/// skipped native sweep does not prevent the token sweep.
pub fn sweep_evm<P: EvmProvider>(
    provider: &P,
    config: &SweepConfig,
) -> Result<EvmSweepReport, SweepError> {
    let native = sweep_evm_native(provider, config)?;
    let token = match config.token {
        Some(contract) => Some(sweep_evm_token(provider, config, contract)?),
        None => None,
    };
    Ok(EvmSweepReport { native, token })
}

fn sweep_evm_native<P: EvmProvider>(
    provider: &P,
    config: &SweepConfig,
) -> Result<FlowOutcome, SweepError> {
    let asset = AssetRef::Native(config.evm_chain);
    let balance = provider.native_balance()?;

    let gas_limit = config
        .evm_chain
        .evm_chain()
        .map(|c| c.native_transfer_gas)
        .unwrap_or(NATIVE_TRANSFER_GAS);
    let fee = resolve_fee(
        provider,
        config,
        provider.estimate_native_fee(config.evm_recipient),
        gas_limit,
    );

    match plan_native_transfer(balance, fee) {
        PlanOutcome::Planned(amount) => {
            let plan = TransferPlan {
                asset,
                recipient: Recipient::Evm(config.evm_recipient),
                amount: U256::from(amount),
            };
            provider.submit_native_transfer(config.evm_recipient, amount)?;
            submitted(&plan)
        }
        PlanOutcome::Skipped(reason) => Ok(skipped(asset, reason)),
    }
}

fn sweep_evm_token<P: EvmProvider>(
    provider: &P,
    config: &SweepConfig,
    contract: alloy_primitives::Address,
) -> Result<FlowOutcome, SweepError> {
    let token_balance = provider.token_balance(contract)?;
    // Fresh snapshot: the native sweep above may have just spent this down.
    let native_balance = provider.native_balance()?;

    let decimals = match provider.token_decimals(contract) {
        Ok(d) => d,
        Err(e) => {
            warn!(
                "token decimals lookup failed, assuming {}: {e}",
                chain_eth::DEFAULT_TOKEN_DECIMALS
            );
            chain_eth::DEFAULT_TOKEN_DECIMALS
        }
    };
    let asset = AssetRef::Erc20 { contract, decimals };

    let gas_limit = config
        .evm_chain
        .evm_chain()
        .map(|c| c.erc20_transfer_gas)
        .unwrap_or(ERC20_TRANSFER_GAS);
    let fee = resolve_fee(
        provider,
        config,
        provider.estimate_token_fee(contract, config.evm_recipient),
        gas_limit,
    );

    match plan_token_transfer(token_balance, native_balance, fee) {
        PlanOutcome::Planned(amount) => {
            let plan = TransferPlan {
                asset,
                recipient: Recipient::Evm(config.evm_recipient),
                amount,
            };
            let calldata = plan
                .erc20_calldata()
                .ok_or_else(|| SweepError::Chain("token plan produced no calldata".into()))?;
            provider.submit_token_transfer(
                contract,
                config.evm_recipient,
                amount,
                decimals,
                &calldata,
            )?;
            submitted(&plan)
        }
        PlanOutcome::Skipped(reason) => Ok(skipped(asset, reason)),
    }
}

/// Sweeps the connected Solana account down to the fixed reserve.
pub fn sweep_sol<P: SolProvider>(
    provider: &P,
    config: &SweepConfig,
) -> Result<FlowOutcome, SweepError> {
    let asset = AssetRef::Native(Chain::Solana);
    let sender = provider.account()?;
    let balance = provider.balance(&sender)?;

    match plan_sol_transfer(balance, config.sol_reserve_lamports) {
        PlanOutcome::Planned(lamports) => {
            let plan = TransferPlan {
                asset,
                recipient: Recipient::Sol(config.sol_recipient),
                amount: U256::from(lamports),
            };
            provider.submit_transfer(&config.sol_recipient, lamports, &sender)?;
            submitted(&plan)
        }
        PlanOutcome::Skipped(reason) => Ok(skipped(asset, reason)),
    }
}

/// Resolves the fee reserve for one transfer with decreasing precision:
/// the host's whole-transaction estimate, then a worst-case quote from
/// the host's gas price and the chain's default gas limit, then the
/// fixed fallback fee. Never blocks planning on a missing estimate.
fn resolve_fee<P: EvmProvider>(
    provider: &P,
    config: &SweepConfig,
    estimate: Result<u128, ProviderError>,
    gas_limit: u64,
) -> u128 {
    let estimate = estimate.or_else(|e| {
        warn!("fee estimation failed, quoting from gas price: {e}");
        let price = provider.max_fee_per_gas()?;
        worst_case_fee(gas_limit, price)
            .map_err(|e| ProviderError::FeeEstimation(e.to_string()))
    });

    match estimate {
        Ok(fee) => fee,
        Err(e) => {
            warn!("using fixed fallback fee: {e}");
            config.fallback_fee_wei
        }
    }
}

fn submitted(plan: &TransferPlan) -> Result<FlowOutcome, SweepError> {
    let amount = plan.display_amount()?;
    debug!("submitted sweep of {amount} {} to {}", plan.asset, plan.recipient);
    Ok(FlowOutcome::Submitted {
        asset: plan.asset.to_string(),
        amount,
    })
}

fn skipped(asset: AssetRef, reason: SkipReason) -> FlowOutcome {
    debug!("skipped {asset} sweep: {reason:?}");
    FlowOutcome::Skipped {
        asset: asset.to_string(),
        reason,
    }
}
