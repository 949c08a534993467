use super::*;
use crate::{oracle::PythOracle, utils::lending_market_authority};
use solana_program::sysvar;

/// Accounts of [`init_reserve`]
#[derive(Clone, Copy, Debug)]
pub struct InitReserveAccounts {
    /// Source liquidity token account, the transfer authority can move `liquidity_amount` from it
    pub source_liquidity: Pubkey,
    /// Destination collateral token account, uninitialized
    pub destination_collateral: Pubkey,
    /// Reserve account, uninitialized
    pub reserve: Pubkey,
    pub liquidity_mint: Pubkey,
    /// Reserve liquidity supply token account, uninitialized
    pub liquidity_supply: Pubkey,
    /// Reserve liquidity fee receiver, uninitialized
    pub liquidity_fee_receiver: Pubkey,
    /// Pyth product and price accounts of the liquidity
    pub pyth_oracle: PythOracle,
    /// Reserve collateral SPL token mint, uninitialized
    pub collateral_mint: Pubkey,
    /// Reserve collateral token supply, uninitialized
    pub collateral_supply: Pubkey,
    pub lending_market: Pubkey,
    pub lending_market_owner: Pubkey,
    pub user_transfer_authority: Pubkey,
}

/// Creates an 'InitReserve' instruction.
///
///   0. `[writable]` Source liquidity token account.
///   1. `[writable]` Destination collateral token account - uninitialized.
///   2. `[writable]` Reserve account - uninitialized.
///   3. `[]` Reserve liquidity SPL Token mint.
///   4. `[writable]` Reserve liquidity supply SPL Token account - uninitialized.
///   5. `[writable]` Reserve liquidity fee receiver - uninitialized.
///   6. `[]` Pyth product account.
///   7. `[]` Pyth price account.
///   8. `[writable]` Reserve collateral SPL Token mint - uninitialized.
///   9. `[writable]` Reserve collateral token supply - uninitialized.
///   10. `[writable]` Lending market account.
///   11. `[]` Derived lending market authority.
///   12. `[signer]` Lending market owner.
///   13. `[signer]` User transfer authority ($authority).
///   14. `[]` Clock sysvar.
///   15. `[]` Rent sysvar.
///   16. `[]` Token program id.
pub fn init_reserve(
    config: &LendingConfig,
    liquidity_amount: u64,
    reserve_config: ReserveConfig,
    accounts: InitReserveAccounts,
) -> Result<Instruction, LendingError> {
    reserve_config.validate()?;
    let lending_market_authority =
        lending_market_authority(&accounts.lending_market, &config.program_id)?;
    build(
        config,
        vec![
            AccountMeta::new(accounts.source_liquidity, false),
            AccountMeta::new(accounts.destination_collateral, false),
            AccountMeta::new(accounts.reserve, false),
            AccountMeta::new_readonly(accounts.liquidity_mint, false),
            AccountMeta::new(accounts.liquidity_supply, false),
            AccountMeta::new(accounts.liquidity_fee_receiver, false),
            AccountMeta::new_readonly(accounts.pyth_oracle.product, false),
            AccountMeta::new_readonly(accounts.pyth_oracle.price, false),
            AccountMeta::new(accounts.collateral_mint, false),
            AccountMeta::new(accounts.collateral_supply, false),
            AccountMeta::new(accounts.lending_market, false),
            AccountMeta::new_readonly(lending_market_authority, false),
            AccountMeta::new_readonly(accounts.lending_market_owner, true),
            AccountMeta::new_readonly(accounts.user_transfer_authority, true),
            AccountMeta::new_readonly(sysvar::clock::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
            AccountMeta::new_readonly(config.token_program_id, false),
        ],
        LendingInstruction::InitReserve {
            liquidity_amount,
            config: reserve_config,
        },
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::oracle::Asset;

    fn accounts() -> InitReserveAccounts {
        InitReserveAccounts {
            source_liquidity: Pubkey::new_unique(),
            destination_collateral: Pubkey::new_unique(),
            reserve: Pubkey::new_unique(),
            liquidity_mint: Pubkey::new_unique(),
            liquidity_supply: Pubkey::new_unique(),
            liquidity_fee_receiver: Pubkey::new_unique(),
            pyth_oracle: Asset::Sol.oracle(),
            collateral_mint: Pubkey::new_unique(),
            collateral_supply: Pubkey::new_unique(),
            lending_market: Pubkey::new_unique(),
            lending_market_owner: Pubkey::new_unique(),
            user_transfer_authority: Pubkey::new_unique(),
        }
    }

    #[test]
    fn account_order() {
        let config = LendingConfig::default();
        let accounts = accounts();
        let instruction =
            init_reserve(&config, 1_000, ReserveConfig::standard(), accounts).unwrap();

        let keys: Vec<Pubkey> = instruction.accounts.iter().map(|meta| meta.pubkey).collect();
        assert_eq!(
            keys,
            vec![
                accounts.source_liquidity,
                accounts.destination_collateral,
                accounts.reserve,
                accounts.liquidity_mint,
                accounts.liquidity_supply,
                accounts.liquidity_fee_receiver,
                accounts.pyth_oracle.product,
                accounts.pyth_oracle.price,
                accounts.collateral_mint,
                accounts.collateral_supply,
                accounts.lending_market,
                lending_market_authority(&accounts.lending_market, &config.program_id).unwrap(),
                accounts.lending_market_owner,
                accounts.user_transfer_authority,
                sysvar::clock::id(),
                sysvar::rent::id(),
                config.token_program_id,
            ]
        );

        let signers: Vec<usize> = instruction
            .accounts
            .iter()
            .enumerate()
            .filter(|(_, meta)| meta.is_signer)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(signers, vec![12, 13]);

        let writable: Vec<usize> = instruction
            .accounts
            .iter()
            .enumerate()
            .filter(|(_, meta)| meta.is_writable)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(writable, vec![0, 1, 2, 4, 5, 8, 9, 10]);
    }

    #[test]
    fn data_layout() {
        let instruction = init_reserve(
            &LendingConfig::default(),
            1_000,
            ReserveConfig::standard(),
            accounts(),
        )
        .unwrap();
        assert_eq!(instruction.data.len(), 49);
        assert_eq!(instruction.data[0], 1);
        assert_eq!(&instruction.data[1..9], &1_000u64.to_le_bytes());
        assert_eq!(
            LendingInstruction::unpack(&instruction.data),
            Ok(LendingInstruction::InitReserve {
                liquidity_amount: 1_000,
                config: ReserveConfig::standard(),
            })
        );
    }

    #[test]
    fn rejects_invalid_config() {
        let reserve_config = ReserveConfig {
            liquidation_threshold: 40,
            ..ReserveConfig::standard()
        };
        assert_eq!(
            init_reserve(&LendingConfig::default(), 1, reserve_config, accounts()),
            Err(LendingError::RangeError)
        );
    }
}
