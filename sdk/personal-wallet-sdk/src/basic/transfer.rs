use crate::advanced::{instructions, signing};
use crate::basic::session::AccountSession;
use crate::core::connection::{SolConnection, SubmitError};
use crate::core::signer::WalletSigner;
use crate::error::{Result, WalletError};
use crate::types::{TransferIntent, TransferReceipt};
use crate::utils::{parse_address, sol_to_lamports};
use solana_sdk::hash::Hash;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use tracing::{debug, info, warn};

/// Send `intent.amount_sol` whole SOL from the session's account to
/// `intent.recipient`: assemble, sign and submit in one go.
///
/// A rejected transfer is not retried. Calling this again starts over with a
/// fresh blockhash.
pub async fn transfer<C: SolConnection>(
    session: &AccountSession<C>,
    intent: TransferIntent,
) -> Result<TransferReceipt> {
    TransferBuilder::new(session, intent)
        .assemble()
        .await?
        .sign()
        .await?
        .submit()
        .await
}

/// Unbuilt transfer. Nothing has been validated or fetched yet.
pub struct TransferBuilder<'a, C: SolConnection> {
    session: &'a AccountSession<C>,
    intent: TransferIntent,
}

impl<'a, C: SolConnection> TransferBuilder<'a, C> {
    pub fn new(session: &'a AccountSession<C>, intent: TransferIntent) -> Self {
        Self { session, intent }
    }

    /// Validate the intent, fetch a recent blockhash and compile the message.
    ///
    /// The recipient and amount are checked before the node is contacted, so
    /// a bad address or an overflowing amount costs no network call.
    pub async fn assemble(self) -> Result<AssembledTransfer<'a, C>> {
        let recipient = parse_address(&self.intent.recipient)?;
        let lamports = sol_to_lamports(self.intent.amount_sol)?;
        let sender = self.session.pubkey();

        let recent_blockhash = self
            .session
            .connection()
            .get_latest_blockhash()
            .await
            .map_err(|e| WalletError::Network(e.to_string()))?;

        let ix = instructions::transfer(&sender, &recipient, lamports);
        let message = instructions::build_message(&sender, &[ix], recent_blockhash);

        debug!(
            %sender,
            %recipient,
            lamports,
            %recent_blockhash,
            "assembled transfer message"
        );
        Ok(AssembledTransfer {
            session: self.session,
            message,
            recipient,
            lamports,
        })
    }
}

/// Compiled message waiting for signatures
pub struct AssembledTransfer<'a, C: SolConnection> {
    session: &'a AccountSession<C>,
    message: Message,
    recipient: Pubkey,
    lamports: u64,
}

impl<'a, C: SolConnection> AssembledTransfer<'a, C> {
    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn lamports(&self) -> u64 {
        self.lamports
    }

    /// Sign as fee payer and as transfer source. Both roles belong to the
    /// session's key, which signs once.
    pub async fn sign(self) -> Result<SignedTransfer<'a, C>> {
        let keypair = self.session.keypair();
        let payer: &dyn WalletSigner = keypair;
        let source: &dyn WalletSigner = keypair;

        let transaction = signing::sign_message(self.message, &[payer, source]).await?;

        Ok(SignedTransfer {
            session: self.session,
            transaction,
            recipient: self.recipient,
            lamports: self.lamports,
        })
    }
}

/// Fully signed transaction, ready for a single submission
pub struct SignedTransfer<'a, C: SolConnection> {
    session: &'a AccountSession<C>,
    transaction: Transaction,
    recipient: Pubkey,
    lamports: u64,
}

impl<'a, C: SolConnection> Clone for SignedTransfer<'a, C> {
    fn clone(&self) -> Self {
        Self {
            session: self.session,
            transaction: self.transaction.clone(),
            recipient: self.recipient,
            lamports: self.lamports,
        }
    }
}

impl<'a, C: SolConnection> SignedTransfer<'a, C> {
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Fee payer signature, which is also the transaction id
    pub fn signature(&self) -> Signature {
        self.transaction.signatures[0]
    }

    pub fn recent_blockhash(&self) -> Hash {
        self.transaction.message.recent_blockhash
    }

    /// Hand the transaction to the node. Rejections are surfaced as-is; the
    /// blockhash is never refreshed here.
    pub async fn submit(self) -> Result<TransferReceipt> {
        let sender = self.session.pubkey();
        let recent_blockhash = self.recent_blockhash();

        let signature = match self
            .session
            .connection()
            .send_transaction(&self.transaction)
            .await
        {
            Ok(signature) => signature,
            Err(SubmitError::Rejected(reason)) => {
                warn!(%recent_blockhash, %reason, "transfer rejected");
                return Err(WalletError::Rejected(reason));
            },
            Err(SubmitError::Transport(e)) => return Err(WalletError::Network(e.to_string())),
        };

        info!(
            %sender,
            recipient = %self.recipient,
            lamports = self.lamports,
            %signature,
            "transfer submitted"
        );
        Ok(TransferReceipt {
            signature,
            sender,
            recipient: self.recipient,
            lamports: self.lamports,
            recent_blockhash,
        })
    }
}
