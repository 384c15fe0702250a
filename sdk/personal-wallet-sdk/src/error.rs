use std::path::PathBuf;

use thiserror::Error;

/// Error kinds surfaced by every wallet operation.
///
/// Nothing in this crate recovers from these locally; they are returned to
/// the caller, which decides whether to retry.
#[derive(Debug, Error)]
pub enum WalletError {
    /// No secret file exists at the keystore path
    #[error("No wallet found at {}", .0.display())]
    NotFound(PathBuf),

    /// The secret file does not decode into a valid keypair
    #[error("Invalid key material: {0}")]
    InvalidKey(String),

    /// Recipient is not a base58-encoded 32-byte public key
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Whole-SOL amount does not fit in u64 once scaled to lamports
    #[error("Amount of {0} SOL overflows when converted to lamports")]
    AmountOverflow(u64),

    /// A required signer slot could not be satisfied
    #[error("Signing error: {0}")]
    Signing(String),

    /// The endpoint could not be turned into a connection handle
    #[error("Connection error: {0}")]
    Connection(String),

    /// Transport failure while talking to the node
    #[error("Network error: {0}")]
    Network(String),

    /// The node received the transaction and refused it
    #[error("Transaction rejected: {0}")]
    Rejected(String),

    /// Secret file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WalletError {
    /// Short, stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            WalletError::NotFound(_) => "NotFound",
            WalletError::InvalidKey(_) => "InvalidKey",
            WalletError::InvalidAddress(_) => "InvalidAddress",
            WalletError::AmountOverflow(_) => "AmountOverflow",
            WalletError::Signing(_) => "Signing",
            WalletError::Connection(_) => "Connection",
            WalletError::Network(_) => "Network",
            WalletError::Rejected(_) => "Rejected",
            WalletError::Io(_) => "Io",
        }
    }
}

/// Result type alias for wallet operations
pub type Result<T> = std::result::Result<T, WalletError>;
