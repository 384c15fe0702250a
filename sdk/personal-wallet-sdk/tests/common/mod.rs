use async_trait::async_trait;
use personal_wallet_sdk::{AccountSession, KeyStore, SolConnection, SubmitError};
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_program,
    transaction::Transaction,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::Mutex;

/// Flat fee charged per submitted transaction
pub const FEE_LAMPORTS: u64 = 5_000;

/// Requests seen by the mock, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetBalance(Pubkey),
    RequestAirdrop(Pubkey, u64),
    GetLatestBlockhash,
    SendTransaction(Signature),
}

#[derive(Default)]
struct LedgerState {
    balances: HashMap<Pubkey, u64>,
    pending_airdrops: Vec<(Pubkey, u64)>,
    blockhash: Hash,
    expired: HashSet<Hash>,
    calls: Vec<Call>,
    offline: bool,
    faucet_disabled: bool,
}

/// In-memory stand-in for a cluster RPC node.
///
/// Clones share state, so a test can keep a handle after moving one into a
/// session.
#[derive(Clone)]
pub struct MockLedger {
    state: Arc<Mutex<LedgerState>>,
}

impl MockLedger {
    pub fn new() -> Self {
        let state = LedgerState {
            blockhash: Hash::new_unique(),
            ..LedgerState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.state.lock().await.calls.clone()
    }

    pub async fn count_calls(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.state.lock().await.calls.iter().filter(|c| pred(c)).count()
    }

    pub async fn set_balance(&self, pubkey: Pubkey, lamports: u64) {
        self.state.lock().await.balances.insert(pubkey, lamports);
    }

    pub async fn balance_of(&self, pubkey: &Pubkey) -> u64 {
        self.state
            .lock()
            .await
            .balances
            .get(pubkey)
            .copied()
            .unwrap_or(0)
    }

    /// Simulate the transport being unreachable
    pub async fn set_offline(&self, offline: bool) {
        self.state.lock().await.offline = offline;
    }

    pub async fn disable_faucet(&self) {
        self.state.lock().await.faucet_disabled = true;
    }

    /// Credit every pending airdrop, as the cluster would after confirmation
    pub async fn confirm_airdrops(&self) {
        let mut state = self.state.lock().await;
        let pending = std::mem::take(&mut state.pending_airdrops);
        for (pubkey, lamports) in pending {
            *state.balances.entry(pubkey).or_insert(0) += lamports;
        }
    }

    /// Advance to a new blockhash; the current one stops being accepted
    pub async fn expire_blockhash(&self) {
        let mut state = self.state.lock().await;
        let old = state.blockhash;
        state.expired.insert(old);
        state.blockhash = Hash::new_unique();
    }

    pub async fn current_blockhash(&self) -> Hash {
        self.state.lock().await.blockhash
    }
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[async_trait]
impl SolConnection for MockLedger {
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, BoxError> {
        let mut state = self.state.lock().await;
        state.calls.push(Call::GetBalance(*pubkey));
        if state.offline {
            return Err("connection refused".into());
        }
        Ok(state.balances.get(pubkey).copied().unwrap_or(0))
    }

    async fn request_airdrop(&self, pubkey: &Pubkey, lamports: u64) -> Result<Signature, BoxError> {
        let mut state = self.state.lock().await;
        state.calls.push(Call::RequestAirdrop(*pubkey, lamports));
        if state.offline {
            return Err("connection refused".into());
        }
        if state.faucet_disabled {
            return Err("airdrop request failed: rate limit reached".into());
        }
        state.pending_airdrops.push((*pubkey, lamports));
        Ok(Keypair::new().sign_message(&lamports.to_le_bytes()))
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, BoxError> {
        let mut state = self.state.lock().await;
        state.calls.push(Call::GetLatestBlockhash);
        if state.offline {
            return Err("connection refused".into());
        }
        Ok(state.blockhash)
    }

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, SubmitError> {
        let mut state = self.state.lock().await;
        let signature = tx.signatures.first().copied().unwrap_or_default();
        state.calls.push(Call::SendTransaction(signature));
        if state.offline {
            return Err(SubmitError::Transport("connection refused".into()));
        }

        let required = usize::from(tx.message.header.num_required_signatures);
        if tx.signatures.len() != required || tx.verify().is_err() {
            return Err(SubmitError::Rejected(
                "Transaction signature verification failure".to_string(),
            ));
        }

        let blockhash = tx.message.recent_blockhash;
        if blockhash != state.blockhash || state.expired.contains(&blockhash) {
            return Err(SubmitError::Rejected("Blockhash not found".to_string()));
        }

        let payer = tx.message.account_keys[0];
        let mut debit = FEE_LAMPORTS;
        let mut credits = Vec::new();
        for ix in &tx.message.instructions {
            let program = tx.message.account_keys[usize::from(ix.program_id_index)];
            if program != system_program::id() || ix.data.len() != 12 {
                return Err(SubmitError::Rejected("unsupported instruction".to_string()));
            }
            let tag = u32::from_le_bytes(ix.data[..4].try_into().unwrap());
            if tag != 2 {
                return Err(SubmitError::Rejected("unsupported instruction".to_string()));
            }
            let lamports = u64::from_le_bytes(ix.data[4..12].try_into().unwrap());
            let to = tx.message.account_keys[usize::from(ix.accounts[1])];
            debit += lamports;
            credits.push((to, lamports));
        }

        let available = state.balances.get(&payer).copied().unwrap_or(0);
        if available < debit {
            return Err(SubmitError::Rejected(
                "Attempt to debit an account but found no record of a prior credit".to_string(),
            ));
        }

        state.balances.insert(payer, available - debit);
        for (to, lamports) in credits {
            *state.balances.entry(to).or_insert(0) += lamports;
        }
        Ok(signature)
    }
}

/// A wallet created in a fresh temp directory plus a session on a mock ledger
pub struct TestWallet {
    pub dir: TempDir,
    pub keystore: KeyStore,
    pub ledger: MockLedger,
    pub session: AccountSession<MockLedger>,
}

pub fn setup_wallet() -> TestWallet {
    let dir = TempDir::new().unwrap();
    let keystore = KeyStore::new(dir.path().join("key_data"));
    let keypair: Keypair = keystore.create_wallet().unwrap();
    let ledger = MockLedger::new();
    let session = AccountSession::with_connection(keypair, ledger.clone());

    TestWallet {
        dir,
        keystore,
        ledger,
        session,
    }
}
