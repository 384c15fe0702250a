// Example: Step-by-step SOL transfer
//
// Walks through each stage of the transfer pipeline:
// assemble (validate + fetch blockhash) -> sign -> submit.
//
// Usage: cargo run --example transfer -- <RECIPIENT> <AMOUNT_SOL>

use personal_wallet_sdk::{AccountSession, Cluster, KeyStore, TransferBuilder, TransferIntent};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let recipient = args.next().ok_or("recipient address required")?;
    let amount: u64 = args.next().ok_or("amount required")?.parse()?;

    let keystore = KeyStore::new("example_key_data");
    let session = AccountSession::open(&keystore, Cluster::Devnet.url())?;

    let assembled = TransferBuilder::new(&session, TransferIntent::new(recipient, amount))
        .assemble()
        .await?;
    println!("Blockhash: {}", assembled.message().recent_blockhash);

    let signed = assembled.sign().await?;
    println!("Signature: {}", signed.signature());

    let receipt = signed.submit().await?;
    println!("Submitted: {} lamports to {}", receipt.lamports, receipt.recipient);

    Ok(())
}
