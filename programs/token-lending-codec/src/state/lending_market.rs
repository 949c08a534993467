use super::*;
use crate::utils::layout::{Reader, Writer};
use solana_program::pubkey::Pubkey;

/// Packed length of [`LendingMarket`]
pub const LENDING_MARKET_LEN: usize = 258; // 1 + 1 + 32 + 32 + 32 + 32 + 128
const LENDING_MARKET_PADDING_LEN: usize = 128;

/// Lending market state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LendingMarket {
    /// Version of lending market
    pub version: u8,
    /// Bump seed for derived authority address
    pub bump_seed: u8,
    /// Owner authority which can add new reserves
    pub owner: Pubkey,
    /// Currency market prices are quoted in
    /// e.g. "USD" null padded (`*b"USD\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0"`) or a SPL token mint pubkey
    pub quote_currency: [u8; 32],
    /// Token program id
    pub token_program_id: Pubkey,
    /// Oracle (Pyth) program id
    pub oracle_program_id: Pubkey,
}

impl LendingMarket {
    /// Create a new lending market
    pub fn new(params: InitLendingMarketParams) -> Self {
        Self {
            version: PROGRAM_VERSION,
            bump_seed: params.bump_seed,
            owner: params.owner,
            quote_currency: params.quote_currency,
            token_program_id: params.token_program_id,
            oracle_program_id: params.oracle_program_id,
        }
    }

    /// Quote currency as text, if it is a null padded UTF-8 code
    pub fn quote_currency_str(&self) -> Option<&str> {
        let end = self
            .quote_currency
            .iter()
            .position(|byte| *byte == 0)
            .unwrap_or(self.quote_currency.len());
        std::str::from_utf8(&self.quote_currency[..end]).ok()
    }
}

/// Initialize a lending market
pub struct InitLendingMarketParams {
    /// Bump seed for derived authority address
    pub bump_seed: u8,
    /// Owner authority which can add new reserves
    pub owner: Pubkey,
    /// Currency market prices are quoted in
    pub quote_currency: [u8; 32],
    /// Token program id
    pub token_program_id: Pubkey,
    /// Oracle (Pyth) program id
    pub oracle_program_id: Pubkey,
}

/// Null padded quote currency field, e.g. `quote_currency("USD")`
pub fn quote_currency(code: &str) -> Result<[u8; 32], LendingError> {
    let mut field = [0u8; 32];
    if code.len() > field.len() {
        msg!("Quote currency {:?} is longer than 32 bytes", code);
        return Err(LendingError::RangeError);
    }
    field[..code.len()].copy_from_slice(code.as_bytes());
    Ok(field)
}

impl AccountLayout for LendingMarket {
    const LEN: usize = LENDING_MARKET_LEN;

    fn pack(&self) -> Result<Vec<u8>, LendingError> {
        let mut writer = Writer::with_capacity(LENDING_MARKET_LEN);
        writer.put_u8(self.version);
        writer.put_u8(self.bump_seed);
        writer.put_pubkey(&self.owner);
        writer.put_bytes(&self.quote_currency);
        writer.put_pubkey(&self.token_program_id);
        writer.put_pubkey(&self.oracle_program_id);
        writer.put_zeros(LENDING_MARKET_PADDING_LEN);
        writer.finish(LENDING_MARKET_LEN)
    }

    fn unpack(src: &[u8]) -> Result<Self, LendingError> {
        let mut reader = Reader::new(src, LENDING_MARKET_LEN)?;
        let version = reader.read_u8()?;
        check_version(version, "Lending market")?;
        let market = Self {
            version,
            bump_seed: reader.read_u8()?,
            owner: reader.read_pubkey()?,
            quote_currency: reader.read_array()?,
            token_program_id: reader.read_pubkey()?,
            oracle_program_id: reader.read_pubkey()?,
        };
        reader.skip(LENDING_MARKET_PADDING_LEN)?;
        Ok(market)
    }
}
