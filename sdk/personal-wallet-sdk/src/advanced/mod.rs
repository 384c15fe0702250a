pub mod instructions;
pub mod signing;
