//! Maximum-transfer ("sweep") planning for EVM chains and Solana.
//!
//! The core is a trio of pure planning functions that turn a freshly
//! observed balance and fee estimate into the largest safely sendable
//! amount — or an explicit reason to send nothing. Around them sit the
//! collaborator traits the embedding host implements (balance queries,
//! fee estimation, token metadata, submission) and the flow functions
//! that wire fetch -> plan -> submit together in that strict order.
//!
//! All amounts are integer minor units (wei, lamports, token base units);
//! display strings are converted only at the host boundary.

pub mod config;
pub mod error;
pub mod flow;
pub mod planner;
pub mod provider;
pub mod types;

pub use config::{SweepConfig, EVM_RECIPIENT, FALLBACK_FEE_WEI, SOL_RECIPIENT};
pub use error::SweepError;
pub use flow::{sweep_evm, sweep_sol, EvmSweepReport, FlowOutcome};
pub use planner::{
    plan_native_transfer, plan_sol_transfer, plan_token_transfer, PlanOutcome, SkipReason,
};
pub use provider::{EvmProvider, ProviderError, SolProvider};
pub use types::{AssetRef, Chain, Recipient, TransferPlan};
