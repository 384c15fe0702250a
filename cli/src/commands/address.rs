//! Address display command

use anyhow::Result;
use solana_sdk::signature::Signer;

use super::Context;

/// Run the address command. Reads the key file only; no network access.
pub async fn run(ctx: &Context) -> Result<()> {
    let keypair = ctx.keystore().load_wallet()?;
    println!("{}", keypair.pubkey());
    Ok(())
}
