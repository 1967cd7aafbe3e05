//! Sweep configuration.
//!
//! Destinations are compile-time constants: a sweep consolidates funds to
//! fixed, audited treasury addresses, and making them runtime input would
//! reopen the door to pasted-address mistakes the sweep exists to avoid.
//! The only runtime input is the optional token contract.

use alloy_primitives::Address;
use chain_sol::units::MIN_TRANSFER_RESERVE_LAMPORTS;
use chain_sol::SolAddress;

use crate::error::SweepError;
use crate::types::Chain;

/// Destination for swept EVM assets. Placeholder burn address — deployments
/// replace this with their own treasury account.
pub const EVM_RECIPIENT: &str = "0x000000000000000000000000000000000000dEaD";

/// Destination for swept SOL. Placeholder — deployments replace this with
/// their own treasury account.
pub const SOL_RECIPIENT: &str = "11111111111111111111111111111112";

/// Fee assumed when the host's fee estimator fails: 0.001 native units.
///
/// Deliberately above typical transfer fees so a fallback sweep still
/// leaves enough behind to pay for itself.
pub const FALLBACK_FEE_WEI: u128 = 1_000_000_000_000_000;

/// Resolved configuration for one pair of sweep flows.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub evm_chain: Chain,
    pub evm_recipient: Address,
    pub sol_recipient: SolAddress,
    /// ERC-20 contract to sweep alongside the native asset, if any.
    pub token: Option<Address>,
    pub fallback_fee_wei: u128,
    pub sol_reserve_lamports: u64,
}

impl SweepConfig {
    /// Builds the default configuration from the compiled-in constants.
    pub fn new() -> Result<Self, SweepError> {
        Ok(SweepConfig {
            evm_chain: Chain::Ethereum,
            evm_recipient: chain_eth::parse_address(EVM_RECIPIENT)?,
            sol_recipient: SOL_RECIPIENT
                .parse()
                .map_err(|e| SweepError::Config(format!("SOL recipient: {e}")))?,
            token: None,
            fallback_fee_wei: FALLBACK_FEE_WEI,
            sol_reserve_lamports: MIN_TRANSFER_RESERVE_LAMPORTS,
        })
    }

    /// Adds an ERC-20 token to the EVM sweep.
    pub fn with_token(mut self, contract: Address) -> Self {
        self.token = Some(contract);
        self
    }

    /// Targets a different EVM chain (the recipient is unchanged; EVM
    /// addresses are valid across chains).
    pub fn on_chain(mut self, chain: Chain) -> Self {
        self.evm_chain = chain;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_eth::units::parse_ether;

    #[test]
    fn default_config_parses_constants() {
        let config = SweepConfig::new().unwrap();
        assert_eq!(config.evm_chain, Chain::Ethereum);
        assert_eq!(chain_eth::address::checksum(&config.evm_recipient), EVM_RECIPIENT);
        assert_eq!(config.sol_recipient.to_string(), SOL_RECIPIENT);
        assert!(config.token.is_none());
    }

    #[test]
    fn fallback_fee_is_one_milli_eth() {
        assert_eq!(FALLBACK_FEE_WEI, parse_ether("0.001").unwrap());
    }

    #[test]
    fn default_sol_reserve_matches_chain_constant() {
        let config = SweepConfig::new().unwrap();
        assert_eq!(config.sol_reserve_lamports, MIN_TRANSFER_RESERVE_LAMPORTS);
    }

    #[test]
    fn with_token_sets_contract() {
        let contract =
            chain_eth::parse_address("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48").unwrap();
        let config = SweepConfig::new().unwrap().with_token(contract);
        assert_eq!(config.token, Some(contract));
    }

    #[test]
    fn on_chain_switches_network() {
        let config = SweepConfig::new().unwrap().on_chain(Chain::Sepolia);
        assert_eq!(config.evm_chain, Chain::Sepolia);
    }
}
