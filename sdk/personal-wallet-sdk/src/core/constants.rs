pub use solana_sdk::native_token::LAMPORTS_PER_SOL;

/// Secret file name used when no path is configured
pub const DEFAULT_SECRET_FILE: &str = "key_data";

/// Length of the raw keypair bytes: 32-byte seed followed by 32-byte public key
pub const KEYPAIR_LENGTH: usize = 64;

pub const DEVNET_URL: &str = "https://api.devnet.solana.com";
pub const TESTNET_URL: &str = "https://api.testnet.solana.com";
pub const MAINNET_BETA_URL: &str = "https://api.mainnet-beta.solana.com";
pub const LOCALNET_URL: &str = "http://127.0.0.1:8899";

/// Default per-request RPC timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
