use crate::error::LendingError;
use solana_program::{msg, pubkey::Pubkey};

/// Program-owned signer of a lending market, derived from the market address
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarketAuthority {
    /// Derived address, which has no private key
    pub address: Pubkey,
    /// Bump seed appended to the market address to move it off the curve
    pub bump_seed: u8,
}

/// Derive the authority of `lending_market` under `program_id`.
///
/// Bump seeds are tried from 255 downwards and the first one yielding an
/// off-curve address wins, which is the search the runtime performs when
/// the lending program signs for the market.
pub fn derive_lending_market_authority(
    lending_market: &Pubkey,
    program_id: &Pubkey,
) -> Result<MarketAuthority, LendingError> {
    for bump_seed in (1..=u8::MAX).rev() {
        if let Ok(address) =
            Pubkey::create_program_address(&[lending_market.as_ref(), &[bump_seed]], program_id)
        {
            return Ok(MarketAuthority { address, bump_seed });
        }
    }
    msg!(
        "No bump seed yields an authority for lending market {}",
        lending_market
    );
    Err(LendingError::DerivationExhausted)
}

/// Address of the authority of `lending_market`
pub fn lending_market_authority(
    lending_market: &Pubkey,
    program_id: &Pubkey,
) -> Result<Pubkey, LendingError> {
    derive_lending_market_authority(lending_market, program_id).map(|authority| authority.address)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn matches_runtime_search() {
        let program_id = Pubkey::new_unique();
        let lending_market = Pubkey::new_unique();
        let authority = derive_lending_market_authority(&lending_market, &program_id).unwrap();
        let (address, bump_seed) =
            Pubkey::find_program_address(&[lending_market.as_ref()], &program_id);
        assert_eq!(authority, MarketAuthority { address, bump_seed });
        assert!(!authority.address.is_on_curve());
    }

    #[test]
    fn deterministic() {
        let program_id = crate::id();
        let lending_market = Pubkey::new_unique();
        assert_eq!(
            derive_lending_market_authority(&lending_market, &program_id),
            derive_lending_market_authority(&lending_market, &program_id)
        );
        assert_ne!(
            lending_market_authority(&lending_market, &program_id).unwrap(),
            lending_market_authority(&Pubkey::new_unique(), &program_id).unwrap()
        );
    }
}
