//! CLI Commands
//!
//! One module per subcommand. Each command opens at most one session and
//! passes it by reference to the wallet operations.

pub mod address;
pub mod airdrop;
pub mod balance;
pub mod create;
pub mod import;
pub mod transfer;

use anyhow::Result;
use personal_wallet_sdk::{AccountSession, KeyStore};
use std::io::{self, Write};

use crate::config::Settings;

/// Everything a command needs to find the wallet and reach the cluster
pub struct Context {
    pub settings: Settings,
}

impl Context {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn keystore(&self) -> KeyStore {
        KeyStore::new(&self.settings.keypair_path)
    }

    /// Load the wallet and bind it to the configured cluster
    pub fn open_session(&self) -> Result<AccountSession> {
        let session = AccountSession::open_with(
            &self.keystore(),
            self.settings.cluster.url(),
            self.settings.session_options(),
        )?;
        Ok(session)
    }
}

/// Prompt for confirmation
pub fn prompt_confirm(message: &str) -> Result<bool> {
    print!("{} [y/N]: ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y") || input.trim().eq_ignore_ascii_case("yes"))
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("\x1b[31mError:\x1b[0m {}", message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("\x1b[32m{}\x1b[0m", message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("\x1b[33mWarning:\x1b[0m {}", message);
}
