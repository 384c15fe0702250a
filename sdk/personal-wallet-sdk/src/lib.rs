//! Key management and transaction construction for a single-keypair
//! Solana wallet.
//!
//! A [`KeyStore`] persists the keypair, an [`AccountSession`] binds it to an
//! RPC endpoint for one command, and the operations in [`basic`] act on a
//! session: balance, faucet airdrop and SOL transfer.

pub mod advanced;
pub mod basic;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;

pub use crate::basic::airdrop::request_airdrop;
pub use crate::basic::balance::get_balance;
pub use crate::basic::keystore::KeyStore;
pub use crate::basic::session::{AccountSession, SessionOptions};
pub use crate::basic::transfer::{
    transfer, AssembledTransfer, SignedTransfer, TransferBuilder,
};
pub use crate::core::connection::{SolConnection, SubmitError};
pub use crate::core::constants::LAMPORTS_PER_SOL;
pub use crate::core::signer::WalletSigner;
pub use crate::error::{Result, WalletError};
pub use crate::types::{Cluster, TransferIntent, TransferReceipt};
pub use crate::utils::{format_sol, lamports_to_sol, parse_address, sol_to_lamports};
