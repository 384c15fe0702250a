// Example: Creating a wallet and checking its balance
//
// This example demonstrates how to:
// 1. Create (or reuse) a key file
// 2. Open a session against devnet
// 3. Read the balance and request an airdrop

use personal_wallet_sdk::{format_sol, get_balance, request_airdrop, AccountSession, Cluster, KeyStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Key file in the working directory
    let keystore = KeyStore::new("example_key_data");
    if !keystore.exists() {
        keystore.create_wallet()?;
    }

    // 2. Session on devnet
    let session = AccountSession::open(&keystore, Cluster::Devnet.url())?;
    println!("Address: {}", session.address());

    // 3. Balance and faucet
    let lamports = get_balance(&session).await?;
    println!("Balance: {} SOL", format_sol(lamports));

    let signature = request_airdrop(&session, 1).await?;
    println!("Airdrop requested: {}", signature);

    Ok(())
}
