//! Math for the WAD-scaled fields of the lending program

mod common;
mod decimal;

pub use common::*;
pub use decimal::*;
