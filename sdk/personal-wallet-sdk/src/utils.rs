use crate::core::constants::LAMPORTS_PER_SOL;
use crate::error::{Result, WalletError};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

//=============================================================================
// Unit Conversion
//=============================================================================

/// Convert whole SOL to lamports, failing instead of wrapping on overflow
pub fn sol_to_lamports(sol: u64) -> Result<u64> {
    sol.checked_mul(LAMPORTS_PER_SOL)
        .ok_or(WalletError::AmountOverflow(sol))
}

/// Whole SOL contained in `lamports` (fractional part truncated)
pub fn lamports_to_sol(lamports: u64) -> u64 {
    lamports / LAMPORTS_PER_SOL
}

/// Render lamports as an exact decimal SOL amount, e.g. `1.5` or `0.000005`
pub fn format_sol(lamports: u64) -> String {
    let whole = lamports / LAMPORTS_PER_SOL;
    let frac = lamports % LAMPORTS_PER_SOL;
    if frac == 0 {
        return whole.to_string();
    }

    let digits = format!("{:09}", frac);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

//=============================================================================
// Address Parsing
//=============================================================================

/// Decode a base58 address into a public key.
///
/// The string is decoded exactly as given: surrounding whitespace or
/// anything that is not base58 of exactly 32 bytes is rejected. No network
/// access happens here.
pub fn parse_address(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address)
        .map_err(|e| WalletError::InvalidAddress(format!("{:?}: {}", address, e)))
}
