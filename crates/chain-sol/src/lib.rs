//! Solana chain support for the sweep planner.
//!
//! This crate handles Solana address validation and lamport-denominated
//! amount arithmetic — all without pulling in `solana-sdk` (which drags
//! in tokio and 200+ transitive dependencies).
//!
//! Addresses are Base58-encoded 32-byte Ed25519 public keys, handled via
//! the `bs58` crate; amounts are parsed by hand into integer lamports.

pub mod address;
pub mod error;
pub mod units;

pub use address::SolAddress;
pub use error::SolError;
pub use units::{
    format_sol, parse_sol, LAMPORTS_PER_SOL, MIN_TRANSFER_RESERVE_LAMPORTS,
};
