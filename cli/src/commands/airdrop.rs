//! Faucet airdrop command

use anyhow::Result;
use personal_wallet_sdk::request_airdrop;

use super::{print_success, print_warning, Context};

/// Run the airdrop command
pub async fn run(ctx: &Context, amount: u64) -> Result<()> {
    if !ctx.settings.cluster.has_faucet() {
        print_warning(&format!(
            "{} does not normally offer airdrops; the request will likely fail",
            ctx.settings.cluster
        ));
    }

    let session = ctx.open_session()?;
    println!("Requesting airdrop to: {}", session.address());

    let signature = request_airdrop(&session, amount).await?;

    print_success(&format!("Airdrop of {} SOL requested.", amount));
    println!("Transaction hash: {}", signature);
    println!("The balance updates once the cluster confirms the transaction.");

    Ok(())
}
