use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};

/// Abstraction for an entity that can sign transaction messages.
/// Key material stays inside the implementor; only signatures come out.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    fn pubkey(&self) -> Pubkey;

    /// Sign the serialized message bytes.
    /// Returns Err if the key material is unavailable.
    async fn sign_message(&self, message: &[u8]) -> Result<Signature, String>;
}

#[async_trait]
impl WalletSigner for Keypair {
    fn pubkey(&self) -> Pubkey {
        Signer::pubkey(self)
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Signature, String> {
        self.try_sign_message(message).map_err(|e| e.to_string())
    }
}
