//! Pyth accounts for the assets the devnet markets list

use crate::error::LendingError;
use solana_program::{msg, pubkey, pubkey::Pubkey};
use std::str::FromStr;

/// Product and price accounts of a Pyth feed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PythOracle {
    pub product: Pubkey,
    pub price: Pubkey,
}

/// Assets with a known devnet feed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Asset {
    Eth,
    Sol,
    Usdc,
}

impl Asset {
    pub const ALL: [Asset; 3] = [Asset::Eth, Asset::Sol, Asset::Usdc];

    /// Devnet feed of this asset
    pub const fn oracle(self) -> PythOracle {
        match self {
            Asset::Eth => PythOracle {
                product: pubkey!("2ciUuGZiee5macAMeQ7bHGTJtwcYTgnt6jdmQnnKZrfu"),
                price: pubkey!("EdVCmQ9FSPcVe5YySXDPCRmc8aDQLKJ9xvYBMZPie1Vw"),
            },
            Asset::Sol => PythOracle {
                product: pubkey!("3Mnn2fX6rQyUsyELYms1sBJyChWofzSNRoqYzvgMVz5E"),
                price: pubkey!("J83w4HKfqxwcq3BEMMkPFSppX3gqekLyLJBexebFVkix"),
            },
            Asset::Usdc => PythOracle {
                product: pubkey!("6NpdXrQEpmDZ3jZKmM2rhdmkd3H6QAk23j2x8bkXcHKA"),
                price: pubkey!("5SSkXsEKQepHHAewytPVwdej4epN1nxgLVM84L4KXgy7"),
            },
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Asset::Eth => "ETH",
            Asset::Sol => "SOL",
            Asset::Usdc => "USDC",
        }
    }
}

impl FromStr for Asset {
    type Err = LendingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Asset::ALL
            .into_iter()
            .find(|asset| asset.symbol().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                msg!("No oracle is known for currency {:?}", s);
                LendingError::UnknownAsset
            })
    }
}

/// Feed for a currency symbol such as "usdc"
pub fn oracle_for(currency: &str) -> Result<PythOracle, LendingError> {
    currency.parse::<Asset>().map(Asset::oracle)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!("eth".parse::<Asset>(), Ok(Asset::Eth));
        assert_eq!("Usdc".parse::<Asset>(), Ok(Asset::Usdc));
        assert_eq!(
            oracle_for("SOL").unwrap().price.to_string(),
            "J83w4HKfqxwcq3BEMMkPFSppX3gqekLyLJBexebFVkix"
        );
    }

    #[test]
    fn unknown_currency() {
        assert_eq!(oracle_for("BTC"), Err(LendingError::UnknownAsset));
        assert_eq!(oracle_for(""), Err(LendingError::UnknownAsset));
    }

    #[test]
    fn feeds_are_distinct() {
        for (i, a) in Asset::ALL.iter().enumerate() {
            for b in &Asset::ALL[i + 1..] {
                assert_ne!(a.oracle().price, b.oracle().price);
                assert_ne!(a.oracle().product, b.oracle().product);
            }
            assert_ne!(a.oracle().product, a.oracle().price);
        }
    }
}
