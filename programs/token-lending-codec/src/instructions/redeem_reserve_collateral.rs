use super::*;
use crate::utils::lending_market_authority;
use solana_program::sysvar;

/// Accounts of [`redeem_reserve_collateral`]
#[derive(Clone, Copy, Debug)]
pub struct RedeemReserveCollateralAccounts {
    /// Source collateral token account, the transfer authority can move `collateral_amount` from it
    pub source_collateral: Pubkey,
    /// Destination liquidity token account
    pub destination_liquidity: Pubkey,
    pub reserve: Pubkey,
    pub reserve_collateral_mint: Pubkey,
    pub reserve_liquidity_supply: Pubkey,
    pub lending_market: Pubkey,
    pub user_transfer_authority: Pubkey,
}

/// Creates a 'RedeemReserveCollateral' instruction.
///
///   0. `[writable]` Source collateral token account.
///   1. `[writable]` Destination liquidity token account.
///   2. `[writable]` Reserve account.
///   3. `[writable]` Reserve collateral SPL Token mint.
///   4. `[writable]` Reserve liquidity supply SPL Token account.
///   5. `[]` Lending market account.
///   6. `[]` Derived lending market authority.
///   7. `[signer]` User transfer authority ($authority).
///   8. `[]` Clock sysvar.
///   9. `[]` Token program id.
pub fn redeem_reserve_collateral(
    config: &LendingConfig,
    collateral_amount: u64,
    accounts: RedeemReserveCollateralAccounts,
) -> Result<Instruction, LendingError> {
    let lending_market_authority =
        lending_market_authority(&accounts.lending_market, &config.program_id)?;
    build(
        config,
        vec![
            AccountMeta::new(accounts.source_collateral, false),
            AccountMeta::new(accounts.destination_liquidity, false),
            AccountMeta::new(accounts.reserve, false),
            AccountMeta::new(accounts.reserve_collateral_mint, false),
            AccountMeta::new(accounts.reserve_liquidity_supply, false),
            AccountMeta::new_readonly(accounts.lending_market, false),
            AccountMeta::new_readonly(lending_market_authority, false),
            AccountMeta::new_readonly(accounts.user_transfer_authority, true),
            AccountMeta::new_readonly(sysvar::clock::id(), false),
            AccountMeta::new_readonly(config.token_program_id, false),
        ],
        LendingInstruction::RedeemReserveCollateral { collateral_amount },
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mint_before_supply() {
        let accounts = RedeemReserveCollateralAccounts {
            source_collateral: Pubkey::new_unique(),
            destination_liquidity: Pubkey::new_unique(),
            reserve: Pubkey::new_unique(),
            reserve_collateral_mint: Pubkey::new_unique(),
            reserve_liquidity_supply: Pubkey::new_unique(),
            lending_market: Pubkey::new_unique(),
            user_transfer_authority: Pubkey::new_unique(),
        };
        let instruction =
            redeem_reserve_collateral(&LendingConfig::default(), 7, accounts).unwrap();
        assert_eq!(instruction.accounts.len(), 10);
        assert_eq!(instruction.accounts[3].pubkey, accounts.reserve_collateral_mint);
        assert_eq!(instruction.accounts[4].pubkey, accounts.reserve_liquidity_supply);
        assert!(instruction.accounts[..5].iter().all(|meta| meta.is_writable));
        assert_eq!(
            LendingInstruction::unpack(&instruction.data),
            Ok(LendingInstruction::RedeemReserveCollateral {
                collateral_amount: 7
            })
        );
    }
}
