//! Wallet import command

use anyhow::Result;
use personal_wallet_sdk::{format_sol, get_balance};

use super::Context;

/// Run the import command: load the existing key file, then show the
/// address and current balance.
pub async fn run(ctx: &Context) -> Result<()> {
    println!(
        "Importing wallet from {}",
        ctx.settings.keypair_path.display()
    );

    let session = ctx.open_session()?;
    println!("Public Key: {}", session.address());

    let lamports = get_balance(&session).await?;
    println!("Wallet balance: {} SOL", format_sol(lamports));

    Ok(())
}
