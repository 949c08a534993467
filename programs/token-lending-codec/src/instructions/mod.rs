//! Instruction types

pub mod borrow_obligation_liquidity;
pub mod deposit_obligation_collateral;
pub mod deposit_reserve_liquidity;
pub mod flash_loan;
pub mod init_lending_market;
pub mod init_obligation;
pub mod init_reserve;
pub mod liquidate_obligation;
pub mod redeem_reserve_collateral;
pub mod refresh_obligation;
pub mod refresh_reserve;
pub mod repay_obligation_liquidity;
pub mod withdraw_obligation_collateral;

pub use borrow_obligation_liquidity::*;
pub use deposit_obligation_collateral::*;
pub use deposit_reserve_liquidity::*;
pub use flash_loan::*;
pub use init_lending_market::*;
pub use init_obligation::*;
pub use init_reserve::*;
pub use liquidate_obligation::*;
pub use redeem_reserve_collateral::*;
pub use refresh_obligation::*;
pub use refresh_reserve::*;
pub use repay_obligation_liquidity::*;
pub use withdraw_obligation_collateral::*;

use crate::{
    config::LendingConfig,
    error::LendingError,
    state::{read_reserve_config, ReserveConfig, RESERVE_CONFIG_LEN},
    utils::layout::{Reader, Writer},
};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    msg,
    pubkey::Pubkey,
};

/// First byte of every instruction, selecting the operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
#[repr(u8)]
pub enum Opcode {
    InitLendingMarket = 0,
    InitReserve = 1,
    RefreshReserve = 2,
    DepositReserveLiquidity = 3,
    RedeemReserveCollateral = 4,
    InitObligation = 5,
    RefreshObligation = 6,
    DepositObligationCollateral = 7,
    WithdrawObligationCollateral = 8,
    BorrowObligationLiquidity = 9,
    RepayObligationLiquidity = 10,
    LiquidateObligation = 11,
    FlashLoan = 12,
}

impl Opcode {
    /// Length of the instruction data, opcode byte included
    pub const fn payload_len(self) -> usize {
        match self {
            Opcode::InitLendingMarket => 1 + 32 + 32,
            Opcode::InitReserve => 1 + 8 + RESERVE_CONFIG_LEN,
            Opcode::RefreshReserve | Opcode::InitObligation | Opcode::RefreshObligation => 1,
            Opcode::DepositReserveLiquidity
            | Opcode::RedeemReserveCollateral
            | Opcode::DepositObligationCollateral
            | Opcode::WithdrawObligationCollateral
            | Opcode::BorrowObligationLiquidity
            | Opcode::RepayObligationLiquidity
            | Opcode::LiquidateObligation
            | Opcode::FlashLoan => 1 + 8,
        }
    }
}

/// Instructions supported by the lending program
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LendingInstruction {
    /// Initializes a new lending market.
    InitLendingMarket {
        /// Owner authority which can add new reserves
        owner: Pubkey,
        /// Currency market prices are quoted in
        quote_currency: [u8; 32],
    },

    /// Initializes a new lending market reserve, depositing an initial amount of liquidity.
    InitReserve {
        /// Initial amount of liquidity to deposit into the new reserve
        liquidity_amount: u64,
        /// Reserve configuration values
        config: ReserveConfig,
    },

    /// Accrue interest and update market price of liquidity on a reserve.
    RefreshReserve,

    /// Deposit liquidity into a reserve in exchange for collateral.
    DepositReserveLiquidity {
        /// Amount of liquidity to deposit in exchange for collateral tokens
        liquidity_amount: u64,
    },

    /// Redeem collateral from a reserve in exchange for liquidity.
    RedeemReserveCollateral {
        /// Amount of collateral tokens to redeem in exchange for liquidity
        collateral_amount: u64,
    },

    /// Initializes a new lending market obligation.
    InitObligation,

    /// Refresh an obligation's accrued interest and collateral and liquidity prices.
    RefreshObligation,

    /// Deposit collateral to an obligation.
    DepositObligationCollateral {
        /// Amount of collateral tokens to deposit
        collateral_amount: u64,
    },

    /// Withdraw collateral from an obligation.
    WithdrawObligationCollateral {
        /// Amount of collateral tokens to withdraw - u64::MAX for up to 100% of deposited amount
        collateral_amount: u64,
    },

    /// Borrow liquidity from a reserve by depositing collateral tokens.
    BorrowObligationLiquidity {
        /// Amount of liquidity to borrow - u64::MAX for 100% of borrowing power
        liquidity_amount: u64,
    },

    /// Repay borrowed liquidity to a reserve.
    RepayObligationLiquidity {
        /// Amount of liquidity to repay - u64::MAX for 100% of borrowed amount
        liquidity_amount: u64,
    },

    /// Repay borrowed liquidity to a reserve to receive collateral at a discount from an unhealthy
    /// obligation.
    LiquidateObligation {
        /// Amount of liquidity to repay - u64::MAX for up to 100% of borrowed amount
        liquidity_amount: u64,
    },

    /// Make a flash loan, which the receiver program must repay within the same instruction.
    FlashLoan {
        /// The amount that is to be borrowed - u64::MAX for up to 100% of available liquidity
        amount: u64,
    },
}

impl LendingInstruction {
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::InitLendingMarket { .. } => Opcode::InitLendingMarket,
            Self::InitReserve { .. } => Opcode::InitReserve,
            Self::RefreshReserve => Opcode::RefreshReserve,
            Self::DepositReserveLiquidity { .. } => Opcode::DepositReserveLiquidity,
            Self::RedeemReserveCollateral { .. } => Opcode::RedeemReserveCollateral,
            Self::InitObligation => Opcode::InitObligation,
            Self::RefreshObligation => Opcode::RefreshObligation,
            Self::DepositObligationCollateral { .. } => Opcode::DepositObligationCollateral,
            Self::WithdrawObligationCollateral { .. } => Opcode::WithdrawObligationCollateral,
            Self::BorrowObligationLiquidity { .. } => Opcode::BorrowObligationLiquidity,
            Self::RepayObligationLiquidity { .. } => Opcode::RepayObligationLiquidity,
            Self::LiquidateObligation { .. } => Opcode::LiquidateObligation,
            Self::FlashLoan { .. } => Opcode::FlashLoan,
        }
    }

    /// Packs a [LendingInstruction](enum.LendingInstruction.html) into a byte buffer.
    pub fn pack(&self) -> Result<Vec<u8>, LendingError> {
        let opcode = self.opcode();
        let mut writer = Writer::with_capacity(opcode.payload_len());
        writer.put_u8(opcode as u8);
        match self {
            Self::InitLendingMarket {
                owner,
                quote_currency,
            } => {
                writer.put_pubkey(owner);
                writer.put_bytes(quote_currency);
            }
            Self::InitReserve {
                liquidity_amount,
                config,
            } => {
                config.validate()?;
                writer.put_u64(*liquidity_amount);
                writer.put(config)?;
            }
            Self::RefreshReserve | Self::InitObligation | Self::RefreshObligation => {}
            Self::DepositReserveLiquidity { liquidity_amount }
            | Self::BorrowObligationLiquidity { liquidity_amount }
            | Self::RepayObligationLiquidity { liquidity_amount }
            | Self::LiquidateObligation { liquidity_amount } => {
                writer.put_u64(*liquidity_amount);
            }
            Self::RedeemReserveCollateral { collateral_amount }
            | Self::DepositObligationCollateral { collateral_amount }
            | Self::WithdrawObligationCollateral { collateral_amount } => {
                writer.put_u64(*collateral_amount);
            }
            Self::FlashLoan { amount } => {
                writer.put_u64(*amount);
            }
        }
        writer.finish(opcode.payload_len())
    }

    /// Unpacks a byte buffer into a [LendingInstruction](enum.LendingInstruction.html).
    pub fn unpack(input: &[u8]) -> Result<Self, LendingError> {
        let (&tag, rest) = input.split_first().ok_or_else(|| {
            msg!("Instruction data is empty");
            LendingError::InvalidInstruction
        })?;
        let opcode = Opcode::from_u8(tag).ok_or_else(|| {
            msg!("Instruction cannot be unpacked, unknown opcode {}", tag);
            LendingError::InvalidInstruction
        })?;
        let mut reader = Reader::new(rest, opcode.payload_len() - 1)?;
        Ok(match opcode {
            Opcode::InitLendingMarket => Self::InitLendingMarket {
                owner: reader.read_pubkey()?,
                quote_currency: reader.read_array()?,
            },
            Opcode::InitReserve => Self::InitReserve {
                liquidity_amount: reader.read_u64()?,
                config: read_reserve_config(&mut reader)?,
            },
            Opcode::RefreshReserve => Self::RefreshReserve,
            Opcode::DepositReserveLiquidity => Self::DepositReserveLiquidity {
                liquidity_amount: reader.read_u64()?,
            },
            Opcode::RedeemReserveCollateral => Self::RedeemReserveCollateral {
                collateral_amount: reader.read_u64()?,
            },
            Opcode::InitObligation => Self::InitObligation,
            Opcode::RefreshObligation => Self::RefreshObligation,
            Opcode::DepositObligationCollateral => Self::DepositObligationCollateral {
                collateral_amount: reader.read_u64()?,
            },
            Opcode::WithdrawObligationCollateral => Self::WithdrawObligationCollateral {
                collateral_amount: reader.read_u64()?,
            },
            Opcode::BorrowObligationLiquidity => Self::BorrowObligationLiquidity {
                liquidity_amount: reader.read_u64()?,
            },
            Opcode::RepayObligationLiquidity => Self::RepayObligationLiquidity {
                liquidity_amount: reader.read_u64()?,
            },
            Opcode::LiquidateObligation => Self::LiquidateObligation {
                liquidity_amount: reader.read_u64()?,
            },
            Opcode::FlashLoan => Self::FlashLoan {
                amount: reader.read_u64()?,
            },
        })
    }
}

/// Address `instruction` to the lending program with `accounts` in calling order
fn build(
    config: &LendingConfig,
    accounts: Vec<AccountMeta>,
    instruction: LendingInstruction,
) -> Result<Instruction, LendingError> {
    Ok(Instruction {
        program_id: config.program_id,
        accounts,
        data: instruction.pack()?,
    })
}
