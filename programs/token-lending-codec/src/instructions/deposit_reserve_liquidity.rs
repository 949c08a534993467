use super::*;
use crate::utils::lending_market_authority;
use solana_program::sysvar;

/// Accounts of [`deposit_reserve_liquidity`]
#[derive(Clone, Copy, Debug)]
pub struct DepositReserveLiquidityAccounts {
    /// Source liquidity token account, the transfer authority can move `liquidity_amount` from it
    pub source_liquidity: Pubkey,
    /// Destination collateral token account
    pub destination_collateral: Pubkey,
    pub reserve: Pubkey,
    pub reserve_liquidity_supply: Pubkey,
    pub reserve_collateral_mint: Pubkey,
    pub lending_market: Pubkey,
    pub user_transfer_authority: Pubkey,
}

/// Creates a 'DepositReserveLiquidity' instruction.
///
///   0. `[writable]` Source liquidity token account.
///   1. `[writable]` Destination collateral token account.
///   2. `[writable]` Reserve account.
///   3. `[writable]` Reserve liquidity supply SPL Token account.
///   4. `[writable]` Reserve collateral SPL Token mint.
///   5. `[]` Lending market account.
///   6. `[]` Derived lending market authority.
///   7. `[signer]` User transfer authority ($authority).
///   8. `[]` Clock sysvar.
///   9. `[]` Token program id.
pub fn deposit_reserve_liquidity(
    config: &LendingConfig,
    liquidity_amount: u64,
    accounts: DepositReserveLiquidityAccounts,
) -> Result<Instruction, LendingError> {
    let lending_market_authority =
        lending_market_authority(&accounts.lending_market, &config.program_id)?;
    build(
        config,
        vec![
            AccountMeta::new(accounts.source_liquidity, false),
            AccountMeta::new(accounts.destination_collateral, false),
            AccountMeta::new(accounts.reserve, false),
            AccountMeta::new(accounts.reserve_liquidity_supply, false),
            AccountMeta::new(accounts.reserve_collateral_mint, false),
            AccountMeta::new_readonly(accounts.lending_market, false),
            AccountMeta::new_readonly(lending_market_authority, false),
            AccountMeta::new_readonly(accounts.user_transfer_authority, true),
            AccountMeta::new_readonly(sysvar::clock::id(), false),
            AccountMeta::new_readonly(config.token_program_id, false),
        ],
        LendingInstruction::DepositReserveLiquidity { liquidity_amount },
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accounts_and_data() {
        let config = LendingConfig::new(Pubkey::new_unique());
        let accounts = DepositReserveLiquidityAccounts {
            source_liquidity: Pubkey::new_unique(),
            destination_collateral: Pubkey::new_unique(),
            reserve: Pubkey::new_unique(),
            reserve_liquidity_supply: Pubkey::new_unique(),
            reserve_collateral_mint: Pubkey::new_unique(),
            lending_market: Pubkey::new_unique(),
            user_transfer_authority: Pubkey::new_unique(),
        };
        let instruction = deposit_reserve_liquidity(&config, 42, accounts).unwrap();

        assert_eq!(instruction.program_id, config.program_id);
        assert_eq!(instruction.accounts.len(), 10);
        assert_eq!(
            instruction.accounts[6],
            AccountMeta::new_readonly(
                lending_market_authority(&accounts.lending_market, &config.program_id).unwrap(),
                false
            )
        );
        assert_eq!(
            instruction.accounts[7],
            AccountMeta::new_readonly(accounts.user_transfer_authority, true)
        );
        assert_eq!(instruction.data[0], 3);
        assert_eq!(&instruction.data[1..], &42u64.to_le_bytes());
    }
}
