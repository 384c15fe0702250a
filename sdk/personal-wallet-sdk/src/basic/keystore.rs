use crate::core::constants::{DEFAULT_SECRET_FILE, KEYPAIR_LENGTH};
use crate::error::{Result, WalletError};
use solana_sdk::signature::{keypair_from_seed, Keypair, Signer};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Owns the location of the secret file holding the wallet keypair.
///
/// The file holds the 64 raw keypair bytes (seed then public key) with no
/// encryption and default filesystem permissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStore {
    path: PathBuf,
}

impl Default for KeyStore {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET_FILE)
    }
}

impl KeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a secret file is present. Used to warn before overwriting.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Generate a fresh keypair from the OS random source and write it to
    /// the secret file, replacing any wallet already stored there.
    ///
    /// The bytes go to a temporary file in the same directory which is then
    /// renamed over the secret file, so a failed write leaves the previous
    /// wallet untouched.
    pub fn create_wallet(&self) -> Result<Keypair> {
        let keypair = Keypair::new();

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(&keypair.to_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|e| e.error)?;

        info!(
            path = %self.path.display(),
            address = %keypair.pubkey(),
            "created wallet"
        );
        Ok(keypair)
    }

    /// Read the secret file and rebuild the keypair from it.
    ///
    /// The keypair is re-derived from the stored seed and the stored public
    /// half must match, so truncated or corrupted files are rejected rather
    /// than producing a different account.
    pub fn load_wallet(&self) -> Result<Keypair> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(WalletError::NotFound(self.path.clone()))
            },
            Err(e) => return Err(WalletError::Io(e)),
        };

        let keypair = keypair_from_bytes(&bytes)?;
        debug!(address = %keypair.pubkey(), "loaded wallet");
        Ok(keypair)
    }
}

fn keypair_from_bytes(bytes: &[u8]) -> Result<Keypair> {
    if bytes.len() != KEYPAIR_LENGTH {
        return Err(WalletError::InvalidKey(format!(
            "expected {} bytes, found {}",
            KEYPAIR_LENGTH,
            bytes.len()
        )));
    }

    let (seed, public) = bytes.split_at(32);
    let keypair = keypair_from_seed(seed).map_err(|e| WalletError::InvalidKey(e.to_string()))?;

    if keypair.pubkey().as_ref() != public {
        return Err(WalletError::InvalidKey(
            "public key does not match secret key".to_string(),
        ));
    }

    Ok(keypair)
}
