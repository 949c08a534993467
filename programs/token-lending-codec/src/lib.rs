//! Instruction builders and account decoders for the token-lending program.
//!
//! Every byte layout here is fixed by the deployed program. Builders produce
//! [`solana_program::instruction::Instruction`] values, decoders turn raw
//! account data into the typed records in [`state`].

pub mod config;
pub mod error;
pub mod instructions;
pub mod math;
pub mod oracle;
pub mod state;
pub mod utils;

pub use config::LendingConfig;
pub use error::LendingError;
pub use instructions::*;
pub use state::*;

use solana_program::{pubkey, pubkey::Pubkey};

solana_program::declare_id!("69XC5QntXPhd14psQms6zUofH9ZPZiHfKAhQa32u3t2A");

/// Pyth oracle program the reserves read prices from
pub const ORACLE_PROGRAM_ID: Pubkey = pubkey!("gSbePebfvPy7tRqimPoVecS2UsBvYv46ynrzWocc92s");

/// SPL token program
pub const TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
