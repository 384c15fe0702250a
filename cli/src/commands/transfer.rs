//! SOL transfer command

use anyhow::Result;
use personal_wallet_sdk::{format_sol, parse_address, transfer, TransferIntent};

use super::{print_success, prompt_confirm, Context};

/// Run the transfer command
pub async fn run(ctx: &Context, recipient: &str, amount: u64, yes: bool) -> Result<()> {
    // Fail on a bad address before touching the key file or the network
    parse_address(recipient)?;

    let session = ctx.open_session()?;

    println!("From:      {}", session.address());
    println!("Recipient: {}", recipient);
    println!("Amount:    {} SOL", amount);

    if !yes && !prompt_confirm("Send this transfer?")? {
        println!("Aborted.");
        return Ok(());
    }

    let receipt = transfer(&session, TransferIntent::new(recipient, amount)).await?;

    print_success(&format!(
        "Transferred {} SOL.",
        format_sol(receipt.lamports)
    ));
    println!("Transaction hash: {}", receipt.signature);

    Ok(())
}
