use std::fmt;

use alloy_primitives::{Address, U256};
use chain_eth::EvmChain;
use chain_sol::SolAddress;
use serde::{Deserialize, Serialize};

/// Supported blockchain networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    Ethereum,
    Polygon,
    Arbitrum,
    Base,
    Optimism,
    Sepolia,
    Solana,
    SolanaDevnet,
}

impl Chain {
    /// EVM chain ID; `None` for the Solana networks.
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            Chain::Ethereum => Some(1),
            Chain::Polygon => Some(137),
            Chain::Arbitrum => Some(42161),
            Chain::Base => Some(8453),
            Chain::Optimism => Some(10),
            Chain::Sepolia => Some(11155111),
            Chain::Solana | Chain::SolanaDevnet => None,
        }
    }

    /// The chain-eth network definition backing this chain, if EVM.
    ///
    /// Symbol, decimals, testnet flag, and default transfer gas limits
    /// all come from this table; only the Solana networks carry their
    /// metadata locally.
    pub fn evm_chain(&self) -> Option<&'static EvmChain> {
        self.chain_id().and_then(chain_eth::get_chain)
    }

    /// Native token symbol.
    pub fn symbol(&self) -> &'static str {
        match self.evm_chain() {
            Some(chain) => chain.symbol,
            None => "SOL",
        }
    }

    /// Decimal precision of the native asset.
    pub fn decimals(&self) -> u8 {
        match self.evm_chain() {
            Some(chain) => chain.decimals,
            None => 9,
        }
    }

    /// Display name.
    pub fn display_name(&self) -> &'static str {
        match self.evm_chain() {
            Some(chain) => chain.name,
            None => match self {
                Chain::SolanaDevnet => "Solana Devnet",
                _ => "Solana",
            },
        }
    }

    /// Whether this is a testnet.
    pub fn is_testnet(&self) -> bool {
        match self.evm_chain() {
            Some(chain) => chain.is_testnet,
            None => matches!(self, Chain::SolanaDevnet),
        }
    }
}

/// The asset a transfer plan moves: a chain's native asset or an ERC-20
/// token identified by its contract address and decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetRef {
    Native(Chain),
    Erc20 { contract: Address, decimals: u8 },
}

impl AssetRef {
    /// Decimal precision of amounts in this asset.
    pub fn decimals(&self) -> u8 {
        match self {
            AssetRef::Native(chain) => chain.decimals(),
            AssetRef::Erc20 { decimals, .. } => *decimals,
        }
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetRef::Native(chain) => f.write_str(chain.symbol()),
            AssetRef::Erc20 { contract, .. } => {
                f.write_str(&chain_eth::address::checksum(contract))
            }
        }
    }
}

/// A transfer destination: typed per address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    Evm(Address),
    Sol(SolAddress),
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recipient::Evm(addr) => f.write_str(&chain_eth::address::checksum(addr)),
            Recipient::Sol(addr) => addr.fmt(f),
        }
    }
}

/// A planned transfer, ready for submission. Ephemeral: computed from a
/// fresh balance snapshot, handed to the submit primitive, and discarded.
///
/// `amount` is in the asset's base units and is always strictly positive
/// by construction (the planner skips instead of producing a zero plan).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    pub asset: AssetRef,
    pub recipient: Recipient,
    pub amount: U256,
}

impl TransferPlan {
    /// Formats the amount in display units for the plan's asset.
    pub fn display_amount(&self) -> Result<String, chain_eth::EthError> {
        chain_eth::units::format_amount(self.amount, self.asset.decimals())
    }

    /// For an ERC-20 plan with an EVM recipient, the `transfer` calldata
    /// a host submits to the token contract. `None` for any other shape.
    pub fn erc20_calldata(&self) -> Option<Vec<u8>> {
        match (&self.asset, &self.recipient) {
            (AssetRef::Erc20 { .. }, Recipient::Evm(to)) => {
                Some(chain_eth::erc20::encode_transfer(*to, self.amount))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_eth::parse_address;

    fn dead() -> Address {
        parse_address("0x000000000000000000000000000000000000dEaD").unwrap()
    }

    #[test]
    fn ethereum_symbol_and_decimals() {
        assert_eq!(Chain::Ethereum.symbol(), "ETH");
        assert_eq!(Chain::Ethereum.decimals(), 18);
        assert!(!Chain::Ethereum.is_testnet());
    }

    #[test]
    fn solana_symbol_and_decimals() {
        assert_eq!(Chain::Solana.symbol(), "SOL");
        assert_eq!(Chain::Solana.decimals(), 9);
    }

    #[test]
    fn evm_metadata_delegates_to_chain_table() {
        let evm_chains = [
            Chain::Ethereum,
            Chain::Polygon,
            Chain::Arbitrum,
            Chain::Base,
            Chain::Optimism,
            Chain::Sepolia,
        ];
        for chain in evm_chains {
            let table = chain.evm_chain().expect("EVM chain should be in the table");
            assert_eq!(chain.symbol(), table.symbol);
            assert_eq!(chain.decimals(), table.decimals);
            assert_eq!(chain.display_name(), table.name);
            assert_eq!(chain.is_testnet(), table.is_testnet);
        }
    }

    #[test]
    fn solana_networks_have_no_evm_definition() {
        assert!(Chain::Solana.evm_chain().is_none());
        assert!(Chain::SolanaDevnet.evm_chain().is_none());
        assert!(Chain::Solana.chain_id().is_none());
    }

    #[test]
    fn testnets_are_flagged() {
        assert!(Chain::Sepolia.is_testnet());
        assert!(Chain::SolanaDevnet.is_testnet());
        assert!(!Chain::Polygon.is_testnet());
    }

    #[test]
    fn native_asset_displays_symbol() {
        assert_eq!(AssetRef::Native(Chain::Ethereum).to_string(), "ETH");
        assert_eq!(AssetRef::Native(Chain::Solana).to_string(), "SOL");
    }

    #[test]
    fn erc20_asset_displays_checksummed_contract() {
        let asset = AssetRef::Erc20 {
            contract: dead(),
            decimals: 6,
        };
        assert_eq!(
            asset.to_string(),
            "0x000000000000000000000000000000000000dEaD"
        );
    }

    #[test]
    fn erc20_asset_decimals() {
        let asset = AssetRef::Erc20 {
            contract: dead(),
            decimals: 6,
        };
        assert_eq!(asset.decimals(), 6);
    }

    #[test]
    fn native_plan_display_amount() {
        let plan = TransferPlan {
            asset: AssetRef::Native(Chain::Ethereum),
            recipient: Recipient::Evm(dead()),
            amount: U256::from(1_499_000_000_000_000_000u64),
        };
        assert_eq!(plan.display_amount().unwrap(), "1.499");
    }

    #[test]
    fn sol_plan_display_amount() {
        let plan = TransferPlan {
            asset: AssetRef::Native(Chain::Solana),
            recipient: Recipient::Sol(SolAddress([0u8; 32])),
            amount: U256::from(499_990_000u64),
        };
        assert_eq!(plan.display_amount().unwrap(), "0.49999");
    }

    #[test]
    fn erc20_plan_produces_calldata() {
        let plan = TransferPlan {
            asset: AssetRef::Erc20 {
                contract: dead(),
                decimals: 6,
            },
            recipient: Recipient::Evm(dead()),
            amount: U256::from(100_000_000u64),
        };

        let calldata = plan.erc20_calldata().unwrap();
        assert_eq!(calldata.len(), 68);
        assert_eq!(&calldata[..4], &chain_eth::erc20::TRANSFER_SELECTOR);
    }

    #[test]
    fn native_plan_has_no_calldata() {
        let plan = TransferPlan {
            asset: AssetRef::Native(Chain::Ethereum),
            recipient: Recipient::Evm(dead()),
            amount: U256::from(1u64),
        };
        assert!(plan.erc20_calldata().is_none());
    }
}
