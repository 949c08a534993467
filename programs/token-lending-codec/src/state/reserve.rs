use super::*;
use crate::{
    math::{Decimal, WAD},
    utils::layout::{Reader, Writer},
};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{clock::Slot, pubkey::Pubkey};

/// Packed length of [`Reserve`]
pub const RESERVE_LEN: usize = 571; // 1 + 9 + 32 + 185 + 72 + 40 + 232
/// Packed length of [`ReserveConfig`]
pub const RESERVE_CONFIG_LEN: usize = 40; // 7 + 33
/// Packed length of [`ReserveFees`]
pub const RESERVE_FEES_LEN: usize = 33; // 16 + 16 + 1
const RESERVE_PADDING_LEN: usize = 232;

/// Lending market reserve state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reserve {
    /// Version of the struct
    pub version: u8,
    /// Last slot when supply and rates updated
    pub last_update: LastUpdate,
    /// Lending market address
    pub lending_market: Pubkey,
    /// Reserve liquidity
    pub liquidity: ReserveLiquidity,
    /// Reserve collateral
    pub collateral: ReserveCollateral,
    /// Reserve configuration values
    pub config: ReserveConfig,
}

impl Reserve {
    /// Create a new reserve
    pub fn new(params: InitReserveParams) -> Self {
        Self {
            version: PROGRAM_VERSION,
            last_update: LastUpdate::new(params.current_slot),
            lending_market: params.lending_market,
            liquidity: params.liquidity,
            collateral: params.collateral,
            config: params.config,
        }
    }
}

/// Initialize a reserve
pub struct InitReserveParams {
    /// Last slot when supply and rates updated
    pub current_slot: Slot,
    /// Lending market address
    pub lending_market: Pubkey,
    /// Reserve liquidity
    pub liquidity: ReserveLiquidity,
    /// Reserve collateral
    pub collateral: ReserveCollateral,
    /// Reserve configuration values
    pub config: ReserveConfig,
}

/// Reserve liquidity
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReserveLiquidity {
    /// Reserve liquidity mint address
    pub mint_pubkey: Pubkey,
    /// Reserve liquidity mint decimals
    pub mint_decimals: u8,
    /// Reserve liquidity supply address
    pub supply_pubkey: Pubkey,
    /// Reserve liquidity fee receiver address
    pub fee_receiver: Pubkey,
    /// Reserve liquidity Pyth price account
    pub oracle_pubkey: Pubkey,
    /// Reserve liquidity available
    pub available_amount: u64,
    /// Reserve liquidity borrowed
    pub borrowed_amount_wads: Decimal,
    /// Reserve liquidity cumulative borrow rate
    pub cumulative_borrow_rate_wads: Decimal,
    /// Reserve liquidity market price in quote currency
    pub market_price: Decimal,
}

impl ReserveLiquidity {
    /// Create a new reserve liquidity
    pub fn new(params: NewReserveLiquidityParams) -> Self {
        Self {
            mint_pubkey: params.mint_pubkey,
            mint_decimals: params.mint_decimals,
            supply_pubkey: params.supply_pubkey,
            fee_receiver: params.fee_receiver,
            oracle_pubkey: params.oracle_pubkey,
            available_amount: 0,
            borrowed_amount_wads: Decimal::zero(),
            cumulative_borrow_rate_wads: Decimal::one(),
            market_price: params.market_price,
        }
    }

    fn pack(&self, writer: &mut Writer) -> Result<(), LendingError> {
        writer.put_pubkey(&self.mint_pubkey);
        writer.put_u8(self.mint_decimals);
        writer.put_pubkey(&self.supply_pubkey);
        writer.put_pubkey(&self.fee_receiver);
        writer.put_pubkey(&self.oracle_pubkey);
        writer.put_u64(self.available_amount);
        writer.put_decimal(self.borrowed_amount_wads)?;
        writer.put_decimal(self.cumulative_borrow_rate_wads)?;
        writer.put_decimal(self.market_price)
    }

    fn unpack(reader: &mut Reader) -> Result<Self, LendingError> {
        Ok(Self {
            mint_pubkey: reader.read_pubkey()?,
            mint_decimals: reader.read_u8()?,
            supply_pubkey: reader.read_pubkey()?,
            fee_receiver: reader.read_pubkey()?,
            oracle_pubkey: reader.read_pubkey()?,
            available_amount: reader.read_u64()?,
            borrowed_amount_wads: reader.read_decimal()?,
            cumulative_borrow_rate_wads: reader.read_decimal()?,
            market_price: reader.read_decimal()?,
        })
    }
}

/// Create a new reserve liquidity
pub struct NewReserveLiquidityParams {
    /// Reserve liquidity mint address
    pub mint_pubkey: Pubkey,
    /// Reserve liquidity mint decimals
    pub mint_decimals: u8,
    /// Reserve liquidity supply address
    pub supply_pubkey: Pubkey,
    /// Reserve liquidity fee receiver address
    pub fee_receiver: Pubkey,
    /// Reserve liquidity Pyth price account
    pub oracle_pubkey: Pubkey,
    /// Reserve liquidity market price in quote currency
    pub market_price: Decimal,
}

/// Reserve collateral
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReserveCollateral {
    /// Reserve collateral mint address
    pub mint_pubkey: Pubkey,
    /// Reserve collateral mint supply, used for exchange rate
    pub mint_total_supply: u64,
    /// Reserve collateral supply address
    pub supply_pubkey: Pubkey,
}

impl ReserveCollateral {
    /// Create a new reserve collateral
    pub fn new(params: NewReserveCollateralParams) -> Self {
        Self {
            mint_pubkey: params.mint_pubkey,
            mint_total_supply: 0,
            supply_pubkey: params.supply_pubkey,
        }
    }
}

/// Create a new reserve collateral
pub struct NewReserveCollateralParams {
    /// Reserve collateral mint address
    pub mint_pubkey: Pubkey,
    /// Reserve collateral supply address
    pub supply_pubkey: Pubkey,
}

/// Reserve configuration values
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReserveConfig {
    /// Optimal utilization rate, as a percentage
    pub optimal_utilization_rate: u8,
    /// Target ratio of the value of borrows to deposits, as a percentage
    /// 0 if use as collateral is disabled
    pub loan_to_value_ratio: u8,
    /// Bonus a liquidator gets when repaying part of an unhealthy obligation, as a percentage
    pub liquidation_bonus: u8,
    /// Loan to value ratio at which an obligation can be liquidated, as a percentage
    pub liquidation_threshold: u8,
    /// Min borrow APY
    pub min_borrow_rate: u8,
    /// Optimal (utilization) borrow APY
    pub optimal_borrow_rate: u8,
    /// Max borrow APY
    pub max_borrow_rate: u8,
    /// Program owner fees assessed, separate from gains due to interest accrual
    pub fees: ReserveFees,
}

impl ReserveConfig {
    /// Config used by the devnet deployment scripts
    pub fn standard() -> Self {
        Self {
            optimal_utilization_rate: 80,
            loan_to_value_ratio: 50,
            liquidation_bonus: 3,
            liquidation_threshold: 80,
            min_borrow_rate: 2,
            optimal_borrow_rate: 8,
            max_borrow_rate: 15,
            fees: ReserveFees {
                borrow_fee_wad: WAD as u128 / 20,
                flash_loan_fee_wad: WAD as u128 / 20,
                host_fee_percentage: 20,
            },
        }
    }

    /// Check that every value lies in its documented range
    pub fn validate(&self) -> Result<(), LendingError> {
        if self.optimal_utilization_rate > 100 {
            msg!("Optimal utilization rate must be in range [0, 100]");
            return Err(LendingError::RangeError);
        }
        if self.loan_to_value_ratio >= 100 {
            msg!("Loan to value ratio must be in range [0, 100)");
            return Err(LendingError::RangeError);
        }
        if self.liquidation_bonus > 100 {
            msg!("Liquidation bonus must be in range [0, 100]");
            return Err(LendingError::RangeError);
        }
        if self.liquidation_threshold <= self.loan_to_value_ratio
            || self.liquidation_threshold > 100
        {
            msg!("Liquidation threshold must be in range (LTV, 100]");
            return Err(LendingError::RangeError);
        }
        if self.optimal_borrow_rate < self.min_borrow_rate {
            msg!("Optimal borrow rate must be >= min borrow rate");
            return Err(LendingError::RangeError);
        }
        if self.optimal_borrow_rate > self.max_borrow_rate {
            msg!("Optimal borrow rate must be <= max borrow rate");
            return Err(LendingError::RangeError);
        }
        self.fees.validate()
    }
}

/// Additional fee information on a reserve
///
/// These exist separately from interest accrual fees, and are specifically for the program owner
/// and frontend host. The fees are paid out as a percentage of liquidity token amounts during
/// repayments and liquidations.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReserveFees {
    /// Fee assessed on `BorrowObligationLiquidity`, expressed as a Wad.
    /// Must be between 0 and 10^18, such that 10^18 = 1.  A few examples for
    /// clarity:
    /// 1% = 10_000_000_000_000_000
    /// 0.01% (1 basis point) = 100_000_000_000_000
    /// 0.00001% (Aave borrow fee) = 100_000_000_000
    pub borrow_fee_wad: u128,
    /// Fee for flash loan, expressed as a Wad.
    pub flash_loan_fee_wad: u128,
    /// Amount of fee going to host account, if provided in liquidate and repay
    pub host_fee_percentage: u8,
}

impl ReserveFees {
    /// Check that both fees are at most one and the host cut is a percentage
    pub fn validate(&self) -> Result<(), LendingError> {
        if self.borrow_fee_wad > WAD as u128 {
            msg!("Borrow fee must be in range [0, 1_000_000_000_000_000_000]");
            return Err(LendingError::RangeError);
        }
        if self.flash_loan_fee_wad > WAD as u128 {
            msg!("Flash loan fee must be in range [0, 1_000_000_000_000_000_000]");
            return Err(LendingError::RangeError);
        }
        if self.host_fee_percentage > 100 {
            msg!("Host fee percentage must be in range [0, 100]");
            return Err(LendingError::RangeError);
        }
        Ok(())
    }
}

/// Read a config and reject values the program would never have written
pub(crate) fn read_reserve_config(reader: &mut Reader) -> Result<ReserveConfig, LendingError> {
    let config: ReserveConfig = reader.read(RESERVE_CONFIG_LEN)?;
    config
        .validate()
        .map_err(|_| LendingError::InvariantViolation)?;
    Ok(config)
}

impl AccountLayout for Reserve {
    const LEN: usize = RESERVE_LEN;

    fn pack(&self) -> Result<Vec<u8>, LendingError> {
        self.config.validate()?;

        let mut writer = Writer::with_capacity(RESERVE_LEN);
        writer.put_u8(self.version);
        writer.put(&self.last_update)?;
        writer.put_pubkey(&self.lending_market);
        self.liquidity.pack(&mut writer)?;
        writer.put_pubkey(&self.collateral.mint_pubkey);
        writer.put_u64(self.collateral.mint_total_supply);
        writer.put_pubkey(&self.collateral.supply_pubkey);
        writer.put(&self.config)?;
        writer.put_zeros(RESERVE_PADDING_LEN);
        writer.finish(RESERVE_LEN)
    }

    fn unpack(src: &[u8]) -> Result<Self, LendingError> {
        let mut reader = Reader::new(src, RESERVE_LEN)?;
        let version = reader.read_u8()?;
        check_version(version, "Reserve")?;
        let reserve = Self {
            version,
            last_update: reader.read(LAST_UPDATE_LEN)?,
            lending_market: reader.read_pubkey()?,
            liquidity: ReserveLiquidity::unpack(&mut reader)?,
            collateral: ReserveCollateral {
                mint_pubkey: reader.read_pubkey()?,
                mint_total_supply: reader.read_u64()?,
                supply_pubkey: reader.read_pubkey()?,
            },
            config: read_reserve_config(&mut reader)?,
        };
        reader.skip(RESERVE_PADDING_LEN)?;
        Ok(reserve)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn reserve() -> Reserve {
        let mut reserve = Reserve::new(InitReserveParams {
            current_slot: 77,
            lending_market: Pubkey::new_unique(),
            liquidity: ReserveLiquidity::new(NewReserveLiquidityParams {
                mint_pubkey: Pubkey::new_unique(),
                mint_decimals: 9,
                supply_pubkey: Pubkey::new_unique(),
                fee_receiver: Pubkey::new_unique(),
                oracle_pubkey: Pubkey::new_unique(),
                market_price: Decimal::from(23u64),
            }),
            collateral: ReserveCollateral::new(NewReserveCollateralParams {
                mint_pubkey: Pubkey::new_unique(),
                supply_pubkey: Pubkey::new_unique(),
            }),
            config: ReserveConfig::standard(),
        });
        reserve.liquidity.available_amount = 1_000;
        reserve.collateral.mint_total_supply = 5_000;
        reserve
    }

    #[test]
    fn standard_config_is_valid() {
        let config = ReserveConfig::standard();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.fees.borrow_fee_wad, 50_000_000_000_000_000);

        let bytes = borsh::to_vec(&config).unwrap();
        assert_eq!(bytes.len(), RESERVE_CONFIG_LEN);
        assert_eq!(&bytes[..7], &[80, 50, 3, 80, 2, 8, 15]);
        assert_eq!(&bytes[7..23], &(WAD as u128 / 20).to_le_bytes());
        assert_eq!(&bytes[23..39], &(WAD as u128 / 20).to_le_bytes());
        assert_eq!(bytes[39], 20);
    }

    #[test]
    fn config_ranges() {
        let base = ReserveConfig::standard();
        let invalid = [
            ReserveConfig {
                optimal_utilization_rate: 101,
                ..base
            },
            ReserveConfig {
                loan_to_value_ratio: 100,
                ..base
            },
            ReserveConfig {
                liquidation_bonus: 101,
                ..base
            },
            ReserveConfig {
                liquidation_threshold: base.loan_to_value_ratio,
                ..base
            },
            ReserveConfig {
                liquidation_threshold: 101,
                ..base
            },
            ReserveConfig {
                min_borrow_rate: base.optimal_borrow_rate + 1,
                ..base
            },
            ReserveConfig {
                max_borrow_rate: base.optimal_borrow_rate - 1,
                ..base
            },
            ReserveConfig {
                fees: ReserveFees {
                    borrow_fee_wad: WAD as u128 + 1,
                    ..base.fees
                },
                ..base
            },
            ReserveConfig {
                fees: ReserveFees {
                    flash_loan_fee_wad: WAD as u128 + 1,
                    ..base.fees
                },
                ..base
            },
            ReserveConfig {
                fees: ReserveFees {
                    host_fee_percentage: 101,
                    ..base.fees
                },
                ..base
            },
        ];
        for config in invalid {
            assert_eq!(config.validate(), Err(LendingError::RangeError), "{config:?}");
        }

        let edge = ReserveConfig {
            optimal_utilization_rate: 100,
            loan_to_value_ratio: 99,
            liquidation_bonus: 100,
            liquidation_threshold: 100,
            min_borrow_rate: 7,
            optimal_borrow_rate: 7,
            max_borrow_rate: 7,
            fees: ReserveFees {
                borrow_fee_wad: WAD as u128,
                flash_loan_fee_wad: WAD as u128,
                host_fee_percentage: 100,
            },
        };
        assert_eq!(edge.validate(), Ok(()));
    }

    #[test]
    fn field_offsets() {
        let reserve = reserve();
        let packed = reserve.pack().unwrap();
        assert_eq!(packed.len(), RESERVE_LEN);
        assert_eq!(packed[0], PROGRAM_VERSION);
        assert_eq!(&packed[1..9], &77u64.to_le_bytes());
        assert_eq!(packed[9], 1);
        assert_eq!(&packed[10..42], reserve.lending_market.as_ref());
        assert_eq!(&packed[42..74], reserve.liquidity.mint_pubkey.as_ref());
        assert_eq!(packed[74], 9);
        assert_eq!(&packed[171..179], &1_000u64.to_le_bytes());
        // cumulative borrow rate starts at one
        assert_eq!(&packed[195..211], &(WAD as u128).to_le_bytes());
        assert_eq!(&packed[211..227], &(23 * WAD as u128).to_le_bytes());
        assert_eq!(&packed[259..267], &5_000u64.to_le_bytes());
        assert_eq!(&packed[299..306], &[80, 50, 3, 80, 2, 8, 15]);
        assert!(packed[339..].iter().all(|byte| *byte == 0));
        assert_eq!(Reserve::unpack(&packed), Ok(reserve));
    }

    #[test]
    fn pack_rejects_invalid_config() {
        let mut reserve = reserve();
        reserve.config.loan_to_value_ratio = 90;
        assert_eq!(reserve.pack(), Err(LendingError::RangeError));
    }

    #[test]
    fn unpack_rejects_invalid_config() {
        let mut packed = reserve().pack().unwrap();
        // liquidation threshold below loan to value ratio
        packed[302] = 10;
        assert_eq!(
            Reserve::unpack(&packed),
            Err(LendingError::InvariantViolation)
        );
    }

    #[test]
    fn unpack_rejects_bad_stale_flag() {
        let mut packed = reserve().pack().unwrap();
        packed[9] = 3;
        assert_eq!(
            Reserve::unpack(&packed),
            Err(LendingError::InvariantViolation)
        );
    }
}
