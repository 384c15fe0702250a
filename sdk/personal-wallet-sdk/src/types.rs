use crate::core::constants::{DEVNET_URL, LOCALNET_URL, MAINNET_BETA_URL, TESTNET_URL};
use crate::error::WalletError;
use serde::{Deserialize, Serialize};
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use std::fmt;
use std::str::FromStr;

/// Network a session talks to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
    /// Any other RPC endpoint
    Custom(String),
}

impl Cluster {
    /// RPC endpoint for this cluster
    pub fn url(&self) -> &str {
        match self {
            Cluster::Devnet => DEVNET_URL,
            Cluster::Testnet => TESTNET_URL,
            Cluster::MainnetBeta => MAINNET_BETA_URL,
            Cluster::Localnet => LOCALNET_URL,
            Cluster::Custom(url) => url,
        }
    }

    /// Whether the cluster is expected to run a faucet
    pub fn has_faucet(&self) -> bool {
        !matches!(self, Cluster::MainnetBeta)
    }
}

impl FromStr for Cluster {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "devnet" | "d" => Ok(Cluster::Devnet),
            "testnet" | "t" => Ok(Cluster::Testnet),
            "mainnet-beta" | "mainnet" | "m" => Ok(Cluster::MainnetBeta),
            "localnet" | "localhost" | "l" => Ok(Cluster::Localnet),
            other if other.starts_with("http://") || other.starts_with("https://") => {
                Ok(Cluster::Custom(other.to_string()))
            },
            other => Err(WalletError::Connection(format!(
                "Unknown cluster {:?} (expected devnet, testnet, mainnet-beta, localnet or an http(s) URL)",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Cluster {
    type Error = WalletError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Cluster> for String {
    fn from(cluster: Cluster) -> Self {
        cluster.to_string()
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cluster::Devnet => write!(f, "devnet"),
            Cluster::Testnet => write!(f, "testnet"),
            Cluster::MainnetBeta => write!(f, "mainnet-beta"),
            Cluster::Localnet => write!(f, "localnet"),
            Cluster::Custom(url) => write!(f, "{}", url),
        }
    }
}

/// What the user asked to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferIntent {
    /// Base58 recipient address
    pub recipient: String,

    /// Amount in whole SOL
    pub amount_sol: u64,
}

impl TransferIntent {
    pub fn new(recipient: impl Into<String>, amount_sol: u64) -> Self {
        Self {
            recipient: recipient.into(),
            amount_sol,
        }
    }
}

/// Outcome of a submitted transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    /// Transaction signature returned by the node
    pub signature: Signature,

    pub sender: Pubkey,

    pub recipient: Pubkey,

    pub lamports: u64,

    /// Blockhash the transaction was signed against
    pub recent_blockhash: Hash,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_monikers() {
        assert_eq!("devnet".parse::<Cluster>().unwrap(), Cluster::Devnet);
        assert_eq!("mainnet".parse::<Cluster>().unwrap(), Cluster::MainnetBeta);
        assert_eq!("localhost".parse::<Cluster>().unwrap(), Cluster::Localnet);
        assert_eq!(Cluster::default().url(), DEVNET_URL);
    }

    #[test]
    fn parses_custom_urls() {
        let cluster: Cluster = "http://10.0.0.5:8899".parse().unwrap();
        assert_eq!(cluster.url(), "http://10.0.0.5:8899");
        assert!(cluster.has_faucet());
        assert!(!Cluster::MainnetBeta.has_faucet());
    }

    #[test]
    fn rejects_unknown_cluster() {
        assert!(matches!(
            "moonnet".parse::<Cluster>(),
            Err(WalletError::Connection(_))
        ));
    }

    #[test]
    fn display_round_trips() {
        for cluster in [
            Cluster::Devnet,
            Cluster::Testnet,
            Cluster::MainnetBeta,
            Cluster::Localnet,
            Cluster::Custom("https://rpc.example.org".to_string()),
        ] {
            assert_eq!(cluster.to_string().parse::<Cluster>().unwrap(), cluster);
        }
    }
}
