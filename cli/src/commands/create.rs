//! Wallet creation command

use anyhow::Result;
use solana_sdk::signature::Signer;

use super::{print_success, print_warning, prompt_confirm, Context};

/// Run the create command
pub async fn run(ctx: &Context, yes: bool) -> Result<()> {
    let keystore = ctx.keystore();

    if keystore.exists() {
        print_warning(&format!(
            "A wallet already exists at {}",
            keystore.path().display()
        ));

        if !yes && !prompt_confirm("Overwrite it? The old key cannot be recovered")? {
            println!("Aborted.");
            return Ok(());
        }
        tracing::warn!(path = %keystore.path().display(), "overwriting existing wallet");
    }

    let keypair = keystore.create_wallet()?;

    print_success("Wallet created successfully!");
    println!("Public Key: {}", keypair.pubkey());
    println!("Saved to:   {}", keystore.path().display());
    println!();
    print_warning("The key file is stored unencrypted. Anyone who can read it controls your funds.");

    Ok(())
}
