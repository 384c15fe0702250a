//! Personal Wallet CLI
//!
//! Keeps a single Solana keypair in a local key file and uses it to check
//! balances, request devnet airdrops and send SOL.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use personal_wallet_sdk::{Cluster, WalletError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::Context;
use config::{ConfigFile, Overrides, Settings};

#[derive(Parser)]
#[command(name = "pwallet")]
#[command(about = "Minimal Solana wallet - one key, balance, airdrop and transfer")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Key file path
    #[arg(short, long, global = true)]
    keypair: Option<PathBuf>,

    /// Cluster moniker (devnet, testnet, mainnet-beta, localnet) or RPC URL
    #[arg(short = 'u', long = "url", global = true)]
    cluster: Option<Cluster>,

    /// Per-request RPC timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new wallet, replacing any existing key file
    Create {
        /// Overwrite an existing wallet without asking
        #[arg(long)]
        yes: bool,
    },

    /// Load the existing key file and show its address and balance
    Import,

    /// Show the wallet address
    Address,

    /// Check wallet balance
    Balance {
        /// Print the raw lamport amount
        #[arg(long)]
        lamports: bool,
    },

    /// Request SOL from the cluster faucet
    Airdrop {
        /// Amount in whole SOL
        amount: u64,
    },

    /// Send SOL to an address
    Transfer {
        /// Recipient address
        recipient: String,

        /// Amount in whole SOL
        amount: u64,

        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = match e.downcast_ref::<WalletError>() {
                Some(wallet_err) => format!("[{}] {}", wallet_err.kind(), wallet_err),
                None => format!("{:#}", e),
            };
            commands::print_error(&message);
            ExitCode::FAILURE
        },
    }
}

async fn run(cli: Cli) -> Result<()> {
    let file = match cli.config.or_else(config::default_config_path) {
        Some(path) => ConfigFile::load(&path)?,
        None => ConfigFile::default(),
    };
    let settings = Settings::resolve(
        file,
        Overrides {
            cluster: cli.cluster,
            keypair_path: cli.keypair,
            timeout_secs: cli.timeout,
        },
    )?;
    tracing::debug!(
        cluster = %settings.cluster,
        keypair = %settings.keypair_path.display(),
        "resolved settings"
    );

    let ctx = Context::new(settings);

    match cli.command {
        Commands::Create { yes } => commands::create::run(&ctx, yes).await,
        Commands::Import => commands::import::run(&ctx).await,
        Commands::Address => commands::address::run(&ctx).await,
        Commands::Balance { lamports } => commands::balance::run(&ctx, lamports).await,
        Commands::Airdrop { amount } => commands::airdrop::run(&ctx, amount).await,
        Commands::Transfer {
            recipient,
            amount,
            yes,
        } => commands::transfer::run(&ctx, &recipient, amount, yes).await,
    }
}
