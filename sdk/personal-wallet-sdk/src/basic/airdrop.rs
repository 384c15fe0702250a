use crate::basic::session::AccountSession;
use crate::core::connection::SolConnection;
use crate::error::{Result, WalletError};
use crate::utils::sol_to_lamports;
use solana_sdk::signature::Signature;
use tracing::info;

/// Ask the cluster faucet to credit `amount_sol` whole SOL to the session's
/// account.
///
/// Returns once the request is accepted; confirmation is not awaited, so the
/// balance may lag behind the returned signature.
pub async fn request_airdrop<C: SolConnection>(
    session: &AccountSession<C>,
    amount_sol: u64,
) -> Result<Signature> {
    let lamports = sol_to_lamports(amount_sol)?;
    let pubkey = session.pubkey();

    let signature = session
        .connection()
        .request_airdrop(&pubkey, lamports)
        .await
        .map_err(|e| WalletError::Network(e.to_string()))?;

    info!(address = %pubkey, lamports, %signature, "airdrop requested");
    Ok(signature)
}
