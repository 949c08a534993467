//! Error types

use num_derive::FromPrimitive;
use solana_program::{decode_error::DecodeError, program_error::ProgramError};
use thiserror::Error;

/// Errors that may be returned while encoding or decoding lending program data.
#[derive(Clone, Copy, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum LendingError {
    /// Buffer length differs from the fixed size of the layout
    #[error("Layout Mismatch")]
    LayoutMismatch,

    /// Value does not fit the field width or its documented range
    #[error("Value Out Of Range")]
    RangeError,

    /// Decoded data breaks an invariant of the claimed account kind
    #[error("Invariant Violation")]
    InvariantViolation,

    #[error("Unknown Asset")]
    UnknownAsset,

    /// No bump seed produced an off-curve authority address
    #[error("Derivation Exhausted")]
    DerivationExhausted,

    #[error("Invalid Instruction")]
    InvalidInstruction,
}

impl From<LendingError> for ProgramError {
    fn from(e: LendingError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for LendingError {
    fn type_of() -> &'static str {
        "Lending Error"
    }
}
