//! State types

mod last_update;
mod lending_market;
mod obligation;
mod reserve;

pub use last_update::*;
pub use lending_market::*;
pub use obligation::*;
pub use reserve::*;

use crate::error::LendingError;
use solana_program::msg;

/// Current version of the program and all new accounts created
pub const PROGRAM_VERSION: u8 = 1;

/// Fixed-length account layout shared with the lending program
pub trait AccountLayout: Sized {
    /// Packed length in bytes
    const LEN: usize;

    /// Serialize into a new buffer of exactly `LEN` bytes
    fn pack(&self) -> Result<Vec<u8>, LendingError>;

    /// Deserialize a buffer of exactly `LEN` bytes
    fn unpack(src: &[u8]) -> Result<Self, LendingError>;

    /// Serialize into an existing account buffer
    fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), LendingError> {
        if dst.len() != Self::LEN {
            msg!("Account buffer is {} bytes, expected {}", dst.len(), Self::LEN);
            return Err(LendingError::LayoutMismatch);
        }
        dst.copy_from_slice(&self.pack()?);
        Ok(())
    }
}

/// Kinds of account owned by the lending program
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountKind {
    LendingMarket,
    Reserve,
    Obligation,
}

impl AccountKind {
    /// Fixed account size of this kind
    pub const fn len(self) -> usize {
        match self {
            AccountKind::LendingMarket => LendingMarket::LEN,
            AccountKind::Reserve => Reserve::LEN,
            AccountKind::Obligation => Obligation::LEN,
        }
    }

    /// Kind whose fixed size is `len`, if any. Sizes are distinct per kind.
    pub fn from_len(len: usize) -> Option<Self> {
        [
            AccountKind::LendingMarket,
            AccountKind::Reserve,
            AccountKind::Obligation,
        ]
        .into_iter()
        .find(|kind| kind.len() == len)
    }
}

/// Decoded account of any kind
#[derive(Clone, Debug, PartialEq)]
pub enum LendingAccount {
    LendingMarket(LendingMarket),
    Reserve(Box<Reserve>),
    Obligation(Obligation),
}

/// Decode `data` as an account of `kind`
pub fn decode_account(data: &[u8], kind: AccountKind) -> Result<LendingAccount, LendingError> {
    Ok(match kind {
        AccountKind::LendingMarket => LendingAccount::LendingMarket(LendingMarket::unpack(data)?),
        AccountKind::Reserve => LendingAccount::Reserve(Box::new(Reserve::unpack(data)?)),
        AccountKind::Obligation => LendingAccount::Obligation(Obligation::unpack(data)?),
    })
}

fn check_version(version: u8, account: &str) -> Result<(), LendingError> {
    if version != PROGRAM_VERSION {
        msg!(
            "{} version {} does not match program version {}",
            account,
            version,
            PROGRAM_VERSION
        );
        return Err(LendingError::InvariantViolation);
    }
    Ok(())
}
