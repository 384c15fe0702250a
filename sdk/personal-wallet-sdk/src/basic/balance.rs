use crate::basic::session::AccountSession;
use crate::core::connection::SolConnection;
use crate::error::{Result, WalletError};
use tracing::debug;

/// Current balance of the session's account, in lamports.
///
/// An account the node has never seen is a valid zero. A failed query is
/// always an error, never a zero.
pub async fn get_balance<C: SolConnection>(session: &AccountSession<C>) -> Result<u64> {
    let pubkey = session.pubkey();
    let lamports = session
        .connection()
        .get_balance(&pubkey)
        .await
        .map_err(|e| WalletError::Network(e.to_string()))?;

    debug!(address = %pubkey, lamports, "fetched balance");
    Ok(lamports)
}
