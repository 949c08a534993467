use super::*;
use crate::{
    math::Decimal,
    utils::layout::{Reader, Writer},
};
use solana_program::{clock::Slot, pubkey::Pubkey};

/// Max number of collateral and liquidity reserve accounts combined for an obligation
pub const MAX_OBLIGATION_RESERVES: usize = 10;

/// Packed length of [`Obligation`]
pub const OBLIGATION_LEN: usize = 916; // 1 + 9 + 32 + 32 + 16 * 4 + 1 + 1 + 776
/// Packed length of [`ObligationCollateral`]
pub const OBLIGATION_COLLATERAL_LEN: usize = 56; // 32 + 8 + 16
/// Packed length of [`ObligationLiquidity`]
pub const OBLIGATION_LIQUIDITY_LEN: usize = 80; // 32 + 16 + 16 + 16
// one deposit slot and nine borrow slots
const OBLIGATION_DATA_LEN: usize = OBLIGATION_COLLATERAL_LEN + OBLIGATION_LIQUIDITY_LEN * 9;

/// Lending market obligation state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Obligation {
    /// Version of the struct
    pub version: u8,
    /// Last update to collateral, liquidity, or their market values
    pub last_update: LastUpdate,
    /// Lending market address
    pub lending_market: Pubkey,
    /// Owner authority which can borrow liquidity
    pub owner: Pubkey,
    /// Deposited collateral for the obligation, unique by deposit reserve address
    pub deposits: Vec<ObligationCollateral>,
    /// Borrowed liquidity for the obligation, unique by borrow reserve address
    pub borrows: Vec<ObligationLiquidity>,
    /// Market value of deposits
    pub deposited_value: Decimal,
    /// Market value of borrows
    pub borrowed_value: Decimal,
    /// The maximum borrow value at the weighted average loan to value ratio
    pub allowed_borrow_value: Decimal,
    /// The dangerous borrow value at the weighted average liquidation threshold
    pub unhealthy_borrow_value: Decimal,
}

impl Obligation {
    /// Create a new obligation
    pub fn new(params: InitObligationParams) -> Self {
        Self {
            version: PROGRAM_VERSION,
            last_update: LastUpdate::new(params.current_slot),
            lending_market: params.lending_market,
            owner: params.owner,
            deposits: params.deposits,
            borrows: params.borrows,
            ..Self::default()
        }
    }

    /// Deposit reserves in the order `RefreshObligation` expects them
    pub fn deposit_reserves(&self) -> Vec<Pubkey> {
        self.deposits
            .iter()
            .map(|collateral| collateral.deposit_reserve)
            .collect()
    }

    /// Borrow reserves in the order `RefreshObligation` expects them
    pub fn borrow_reserves(&self) -> Vec<Pubkey> {
        self.borrows
            .iter()
            .map(|liquidity| liquidity.borrow_reserve)
            .collect()
    }

    /// Find collateral by deposit reserve
    pub fn find_collateral_in_deposits(
        &self,
        deposit_reserve: &Pubkey,
    ) -> Option<(&ObligationCollateral, usize)> {
        self.deposits
            .iter()
            .enumerate()
            .find(|(_, collateral)| collateral.deposit_reserve == *deposit_reserve)
            .map(|(index, collateral)| (collateral, index))
    }

    /// Find liquidity by borrow reserve
    pub fn find_liquidity_in_borrows(
        &self,
        borrow_reserve: &Pubkey,
    ) -> Option<(&ObligationLiquidity, usize)> {
        self.borrows
            .iter()
            .enumerate()
            .find(|(_, liquidity)| liquidity.borrow_reserve == *borrow_reserve)
            .map(|(index, liquidity)| (liquidity, index))
    }
}

/// Initialize an obligation
pub struct InitObligationParams {
    /// Last update to collateral, liquidity, or their market values
    pub current_slot: Slot,
    /// Lending market address
    pub lending_market: Pubkey,
    /// Owner authority which can borrow liquidity
    pub owner: Pubkey,
    /// Deposited collateral for the obligation, unique by deposit reserve address
    pub deposits: Vec<ObligationCollateral>,
    /// Borrowed liquidity for the obligation, unique by borrow reserve address
    pub borrows: Vec<ObligationLiquidity>,
}

/// Obligation collateral state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObligationCollateral {
    /// Reserve collateral is deposited to
    pub deposit_reserve: Pubkey,
    /// Amount of collateral deposited
    pub deposited_amount: u64,
    /// Collateral market value in quote currency
    pub market_value: Decimal,
}

impl ObligationCollateral {
    /// Create new obligation collateral
    pub fn new(deposit_reserve: Pubkey) -> Self {
        Self {
            deposit_reserve,
            deposited_amount: 0,
            market_value: Decimal::zero(),
        }
    }

    fn pack(&self, writer: &mut Writer) -> Result<(), LendingError> {
        writer.put_pubkey(&self.deposit_reserve);
        writer.put_u64(self.deposited_amount);
        writer.put_decimal(self.market_value)
    }

    fn unpack(reader: &mut Reader) -> Result<Self, LendingError> {
        Ok(Self {
            deposit_reserve: reader.read_pubkey()?,
            deposited_amount: reader.read_u64()?,
            market_value: reader.read_decimal()?,
        })
    }
}

/// Obligation liquidity state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObligationLiquidity {
    /// Reserve liquidity is borrowed from
    pub borrow_reserve: Pubkey,
    /// Borrow rate used for calculating interest
    pub cumulative_borrow_rate_wads: Decimal,
    /// Amount of liquidity borrowed plus interest
    pub borrowed_amount_wads: Decimal,
    /// Liquidity market value in quote currency
    pub market_value: Decimal,
}

impl ObligationLiquidity {
    /// Create new obligation liquidity
    pub fn new(borrow_reserve: Pubkey, cumulative_borrow_rate_wads: Decimal) -> Self {
        Self {
            borrow_reserve,
            cumulative_borrow_rate_wads,
            borrowed_amount_wads: Decimal::zero(),
            market_value: Decimal::zero(),
        }
    }

    fn pack(&self, writer: &mut Writer) -> Result<(), LendingError> {
        writer.put_pubkey(&self.borrow_reserve);
        writer.put_decimal(self.cumulative_borrow_rate_wads)?;
        writer.put_decimal(self.borrowed_amount_wads)?;
        writer.put_decimal(self.market_value)
    }

    fn unpack(reader: &mut Reader) -> Result<Self, LendingError> {
        Ok(Self {
            borrow_reserve: reader.read_pubkey()?,
            cumulative_borrow_rate_wads: reader.read_decimal()?,
            borrowed_amount_wads: reader.read_decimal()?,
            market_value: reader.read_decimal()?,
        })
    }
}

/// Bytes of `data_flat` taken by the active entries, if they are within bounds
fn active_data_len(deposits_len: usize, borrows_len: usize) -> Option<usize> {
    if deposits_len + borrows_len > MAX_OBLIGATION_RESERVES {
        msg!(
            "Obligation cannot have more than {} deposits and borrows combined",
            MAX_OBLIGATION_RESERVES
        );
        return None;
    }
    let len = deposits_len * OBLIGATION_COLLATERAL_LEN + borrows_len * OBLIGATION_LIQUIDITY_LEN;
    if len > OBLIGATION_DATA_LEN {
        msg!(
            "Obligation entries need {} bytes, only {} are available",
            len,
            OBLIGATION_DATA_LEN
        );
        return None;
    }
    Some(len)
}

impl AccountLayout for Obligation {
    const LEN: usize = OBLIGATION_LEN;

    fn pack(&self) -> Result<Vec<u8>, LendingError> {
        let data_len = active_data_len(self.deposits.len(), self.borrows.len())
            .ok_or(LendingError::RangeError)?;

        let mut writer = Writer::with_capacity(OBLIGATION_LEN);
        writer.put_u8(self.version);
        writer.put(&self.last_update)?;
        writer.put_pubkey(&self.lending_market);
        writer.put_pubkey(&self.owner);
        writer.put_decimal(self.deposited_value)?;
        writer.put_decimal(self.borrowed_value)?;
        writer.put_decimal(self.allowed_borrow_value)?;
        writer.put_decimal(self.unhealthy_borrow_value)?;
        // counts are bounded by MAX_OBLIGATION_RESERVES above
        writer.put_u8(self.deposits.len() as u8);
        writer.put_u8(self.borrows.len() as u8);
        for collateral in &self.deposits {
            collateral.pack(&mut writer)?;
        }
        for liquidity in &self.borrows {
            liquidity.pack(&mut writer)?;
        }
        writer.put_zeros(OBLIGATION_DATA_LEN - data_len);
        writer.finish(OBLIGATION_LEN)
    }

    fn unpack(src: &[u8]) -> Result<Self, LendingError> {
        let mut reader = Reader::new(src, OBLIGATION_LEN)?;
        let version = reader.read_u8()?;
        check_version(version, "Obligation")?;
        let last_update = reader.read(LAST_UPDATE_LEN)?;
        let lending_market = reader.read_pubkey()?;
        let owner = reader.read_pubkey()?;
        let deposited_value = reader.read_decimal()?;
        let borrowed_value = reader.read_decimal()?;
        let allowed_borrow_value = reader.read_decimal()?;
        let unhealthy_borrow_value = reader.read_decimal()?;
        let deposits_len = reader.read_u8()? as usize;
        let borrows_len = reader.read_u8()? as usize;
        active_data_len(deposits_len, borrows_len).ok_or(LendingError::InvariantViolation)?;

        let mut deposits = Vec::with_capacity(deposits_len);
        for _ in 0..deposits_len {
            deposits.push(ObligationCollateral::unpack(&mut reader)?);
        }
        let mut borrows = Vec::with_capacity(borrows_len);
        for _ in 0..borrows_len {
            borrows.push(ObligationLiquidity::unpack(&mut reader)?);
        }

        Ok(Self {
            version,
            last_update,
            lending_market,
            owner,
            deposits,
            borrows,
            deposited_value,
            borrowed_value,
            allowed_borrow_value,
            unhealthy_borrow_value,
        })
    }
}
