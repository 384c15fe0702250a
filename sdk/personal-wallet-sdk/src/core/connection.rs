use async_trait::async_trait;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::RpcError;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::error::Error;
use thiserror::Error;

/// Failure modes of a transaction submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The node could not be reached or the response was unusable
    #[error("{0}")]
    Transport(Box<dyn Error + Send + Sync>),

    /// The node answered and refused the transaction
    #[error("{0}")]
    Rejected(String),
}

/// The RPC capabilities the wallet needs from a node.
///
/// Implementations own transport concerns (framing, TLS, retries). Callers
/// in this crate never retry on their own.
#[async_trait]
pub trait SolConnection: Send + Sync {
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, Box<dyn Error + Send + Sync>>;
    async fn request_airdrop(
        &self,
        pubkey: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>>;
    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>>;
    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, SubmitError>;
}

#[async_trait]
impl SolConnection for RpcClient {
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, Box<dyn Error + Send + Sync>> {
        RpcClient::get_balance(self, pubkey)
            .await
            .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)
    }

    async fn request_airdrop(
        &self,
        pubkey: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>> {
        RpcClient::request_airdrop(self, pubkey, lamports)
            .await
            .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>> {
        RpcClient::get_latest_blockhash(self)
            .await
            .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)
    }

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, SubmitError> {
        RpcClient::send_transaction(self, tx)
            .await
            .map_err(classify_submit_error)
    }
}

/// A JSON-RPC error response (preflight failure, blockhash not found, ...)
/// or a decoded transaction error means the node saw the transaction.
fn classify_submit_error(err: ClientError) -> SubmitError {
    match err.kind() {
        ClientErrorKind::RpcError(RpcError::RpcResponseError { .. })
        | ClientErrorKind::TransactionError(_) => SubmitError::Rejected(err.to_string()),
        _ => SubmitError::Transport(Box::new(err)),
    }
}
