pub mod airdrop;
pub mod balance;
pub mod keystore;
pub mod session;
pub mod transfer;
