use crate::basic::keystore::KeyStore;
use crate::core::connection::SolConnection;
use crate::core::constants::DEFAULT_TIMEOUT_SECS;
use crate::error::{Result, WalletError};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Connection parameters for [`AccountSession::open_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Per-request deadline applied by the RPC client
    pub timeout: Duration,

    pub commitment: CommitmentConfig,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            commitment: CommitmentConfig::confirmed(),
        }
    }
}

/// The acting account for one command: a loaded keypair bound to a
/// connection. Built once per command and passed by reference to each
/// operation; never shared between concurrent operations.
pub struct AccountSession<C: SolConnection = RpcClient> {
    keypair: Keypair,
    connection: C,
}

impl AccountSession<RpcClient> {
    /// Load the wallet from `keystore` and bind it to `endpoint` with default
    /// options.
    ///
    /// The RPC transport is lazy: only a malformed endpoint fails here (with
    /// `Connection`). An unreachable node is reported as `Network` by the
    /// first request made through the session.
    pub fn open(keystore: &KeyStore, endpoint: &str) -> Result<Self> {
        Self::open_with(keystore, endpoint, SessionOptions::default())
    }

    pub fn open_with(keystore: &KeyStore, endpoint: &str, options: SessionOptions) -> Result<Self> {
        let url = validate_endpoint(endpoint)?;
        let keypair = keystore.load_wallet()?;

        debug!(
            endpoint = %url,
            timeout_secs = options.timeout.as_secs(),
            "opening session"
        );
        let connection = RpcClient::new_with_timeout_and_commitment(
            endpoint.to_string(),
            options.timeout,
            options.commitment,
        );

        Ok(Self::with_connection(keypair, connection))
    }
}

impl<C: SolConnection> AccountSession<C> {
    /// Bind an already-loaded keypair to any connection implementation
    pub fn with_connection(keypair: Keypair, connection: C) -> Self {
        Self {
            keypair,
            connection,
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Base58 address of the acting account
    pub fn address(&self) -> String {
        self.keypair.pubkey().to_string()
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub(crate) fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}

fn validate_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint)
        .map_err(|e| WalletError::Connection(format!("{:?}: {}", endpoint, e)))?;

    match url.scheme() {
        "http" | "https" if url.host().is_some() => Ok(url),
        _ => Err(WalletError::Connection(format!(
            "{:?} is not an http(s) RPC endpoint",
            endpoint
        ))),
    }
}
