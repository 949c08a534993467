use super::*;
use crate::utils::lending_market_authority;
use solana_program::sysvar;

/// Accounts of [`withdraw_obligation_collateral`]
#[derive(Clone, Copy, Debug)]
pub struct WithdrawObligationCollateralAccounts {
    /// Reserve collateral supply the withdrawal is paid from
    pub source_collateral: Pubkey,
    /// Destination collateral token account
    pub destination_collateral: Pubkey,
    pub withdraw_reserve: Pubkey,
    pub obligation: Pubkey,
    pub lending_market: Pubkey,
    pub obligation_owner: Pubkey,
}

/// Creates a 'WithdrawObligationCollateral' instruction.
///
///   0. `[writable]` Source withdraw reserve collateral supply SPL Token account.
///   1. `[writable]` Destination collateral token account.
///   2. `[]` Withdraw reserve account - refreshed.
///   3. `[writable]` Obligation account - refreshed.
///   4. `[]` Lending market account.
///   5. `[]` Derived lending market authority.
///   6. `[signer]` Obligation owner.
///   7. `[]` Clock sysvar.
///   8. `[]` Token program id.
pub fn withdraw_obligation_collateral(
    config: &LendingConfig,
    collateral_amount: u64,
    accounts: WithdrawObligationCollateralAccounts,
) -> Result<Instruction, LendingError> {
    let lending_market_authority =
        lending_market_authority(&accounts.lending_market, &config.program_id)?;
    build(
        config,
        vec![
            AccountMeta::new(accounts.source_collateral, false),
            AccountMeta::new(accounts.destination_collateral, false),
            AccountMeta::new_readonly(accounts.withdraw_reserve, false),
            AccountMeta::new(accounts.obligation, false),
            AccountMeta::new_readonly(accounts.lending_market, false),
            AccountMeta::new_readonly(lending_market_authority, false),
            AccountMeta::new_readonly(accounts.obligation_owner, true),
            AccountMeta::new_readonly(sysvar::clock::id(), false),
            AccountMeta::new_readonly(config.token_program_id, false),
        ],
        LendingInstruction::WithdrawObligationCollateral { collateral_amount },
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn only_owner_signs() {
        let accounts = WithdrawObligationCollateralAccounts {
            source_collateral: Pubkey::new_unique(),
            destination_collateral: Pubkey::new_unique(),
            withdraw_reserve: Pubkey::new_unique(),
            obligation: Pubkey::new_unique(),
            lending_market: Pubkey::new_unique(),
            obligation_owner: Pubkey::new_unique(),
        };
        let instruction =
            withdraw_obligation_collateral(&LendingConfig::default(), u64::MAX, accounts)
                .unwrap();
        assert_eq!(instruction.accounts.len(), 9);
        let signers: Vec<Pubkey> = instruction
            .accounts
            .iter()
            .filter(|meta| meta.is_signer)
            .map(|meta| meta.pubkey)
            .collect();
        assert_eq!(signers, vec![accounts.obligation_owner]);
        assert_eq!(&instruction.data[1..], &[0xff; 8]);
    }
}
