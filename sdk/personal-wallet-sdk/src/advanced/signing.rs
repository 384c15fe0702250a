use crate::core::signer::WalletSigner;
use crate::error::{Result, WalletError};
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use tracing::debug;

/// Sign `message` for every required signer slot.
///
/// `signers` may name the same key more than once (e.g. as fee payer and as
/// transfer source). Each unique key signs the serialized message exactly
/// once and that signature fills every slot belonging to the key. A slot
/// with no matching signer fails with `Signing`.
pub async fn sign_message(message: Message, signers: &[&dyn WalletSigner]) -> Result<Transaction> {
    let message_bytes = message.serialize();
    let required = usize::from(message.header.num_required_signatures);
    let slot_keys = message.account_keys.get(..required).ok_or_else(|| {
        WalletError::Signing(format!(
            "message requires {} signers but lists {} accounts",
            required,
            message.account_keys.len()
        ))
    })?;

    let mut produced: Vec<(Pubkey, Signature)> = Vec::with_capacity(required);
    let mut signatures = Vec::with_capacity(required);

    for key in slot_keys {
        if let Some((_, signature)) = produced.iter().find(|(signed, _)| signed == key) {
            signatures.push(*signature);
            continue;
        }

        let signer = signers
            .iter()
            .find(|signer| signer.pubkey() == *key)
            .ok_or_else(|| WalletError::Signing(format!("no key available for signer {}", key)))?;

        let signature = signer
            .sign_message(&message_bytes)
            .await
            .map_err(WalletError::Signing)?;
        produced.push((*key, signature));
        signatures.push(signature);
    }

    debug!(
        slots = required,
        unique_signers = produced.len(),
        "signed message"
    );
    Ok(Transaction {
        signatures,
        message,
    })
}
