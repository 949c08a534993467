use super::*;
use crate::utils::lending_market_authority;
use solana_program::sysvar;

/// Accounts of [`liquidate_obligation`]
#[derive(Clone, Copy, Debug)]
pub struct LiquidateObligationAccounts {
    /// Source liquidity token account, the transfer authority can move `liquidity_amount` from it
    pub source_liquidity: Pubkey,
    /// Destination collateral token account
    pub destination_collateral: Pubkey,
    pub repay_reserve: Pubkey,
    pub repay_reserve_liquidity_supply: Pubkey,
    pub withdraw_reserve: Pubkey,
    pub withdraw_reserve_collateral_supply: Pubkey,
    pub obligation: Pubkey,
    pub lending_market: Pubkey,
    pub user_transfer_authority: Pubkey,
}

/// Creates a 'LiquidateObligation' instruction.
///
///   0. `[writable]` Source liquidity token account.
///   1. `[writable]` Destination collateral token account.
///   2. `[writable]` Repay reserve account - refreshed.
///   3. `[writable]` Repay reserve liquidity supply SPL Token account.
///   4. `[]` Withdraw reserve account - refreshed.
///   5. `[writable]` Withdraw reserve collateral supply SPL Token account.
///   6. `[writable]` Obligation account - refreshed.
///   7. `[]` Lending market account.
///   8. `[]` Derived lending market authority.
///   9. `[signer]` User transfer authority ($authority).
///   10. `[]` Clock sysvar.
///   11. `[]` Token program id.
pub fn liquidate_obligation(
    config: &LendingConfig,
    liquidity_amount: u64,
    accounts: LiquidateObligationAccounts,
) -> Result<Instruction, LendingError> {
    let lending_market_authority =
        lending_market_authority(&accounts.lending_market, &config.program_id)?;
    build(
        config,
        vec![
            AccountMeta::new(accounts.source_liquidity, false),
            AccountMeta::new(accounts.destination_collateral, false),
            AccountMeta::new(accounts.repay_reserve, false),
            AccountMeta::new(accounts.repay_reserve_liquidity_supply, false),
            AccountMeta::new_readonly(accounts.withdraw_reserve, false),
            AccountMeta::new(accounts.withdraw_reserve_collateral_supply, false),
            AccountMeta::new(accounts.obligation, false),
            AccountMeta::new_readonly(accounts.lending_market, false),
            AccountMeta::new_readonly(lending_market_authority, false),
            AccountMeta::new_readonly(accounts.user_transfer_authority, true),
            AccountMeta::new_readonly(sysvar::clock::id(), false),
            AccountMeta::new_readonly(config.token_program_id, false),
        ],
        LendingInstruction::LiquidateObligation { liquidity_amount },
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn withdraw_reserve_is_read_only() {
        let accounts = LiquidateObligationAccounts {
            source_liquidity: Pubkey::new_unique(),
            destination_collateral: Pubkey::new_unique(),
            repay_reserve: Pubkey::new_unique(),
            repay_reserve_liquidity_supply: Pubkey::new_unique(),
            withdraw_reserve: Pubkey::new_unique(),
            withdraw_reserve_collateral_supply: Pubkey::new_unique(),
            obligation: Pubkey::new_unique(),
            lending_market: Pubkey::new_unique(),
            user_transfer_authority: Pubkey::new_unique(),
        };
        let instruction = liquidate_obligation(&LendingConfig::default(), 1, accounts).unwrap();
        assert_eq!(instruction.accounts.len(), 12);
        let writable: Vec<usize> = instruction
            .accounts
            .iter()
            .enumerate()
            .filter(|(_, meta)| meta.is_writable)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(writable, vec![0, 1, 2, 3, 5, 6]);
        assert_eq!(instruction.accounts[4].pubkey, accounts.withdraw_reserve);
        assert_eq!(instruction.data[0], 11);
    }
}
