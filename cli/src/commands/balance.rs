//! Balance check command

use anyhow::Result;
use personal_wallet_sdk::{format_sol, get_balance};

use super::{print_success, Context};

/// Run the balance command
pub async fn run(ctx: &Context, lamports_only: bool) -> Result<()> {
    let session = ctx.open_session()?;
    let lamports = get_balance(&session).await?;

    if lamports_only {
        println!("{}", lamports);
    } else {
        print_success(&format!("Balance: {} SOL", format_sol(lamports)));
        println!("Account: {} ({})", session.address(), ctx.settings.cluster);
    }

    Ok(())
}
