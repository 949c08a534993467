use super::*;
use solana_program::sysvar;

/// Accounts of [`deposit_obligation_collateral`]
#[derive(Clone, Copy, Debug)]
pub struct DepositObligationCollateralAccounts {
    /// Source collateral token account, the transfer authority can move `collateral_amount` from it
    pub source_collateral: Pubkey,
    /// Reserve collateral supply receiving the deposit
    pub destination_collateral: Pubkey,
    pub deposit_reserve: Pubkey,
    pub obligation: Pubkey,
    pub lending_market: Pubkey,
    pub obligation_owner: Pubkey,
    pub user_transfer_authority: Pubkey,
}

/// Creates a 'DepositObligationCollateral' instruction.
///
///   0. `[writable]` Source collateral token account.
///   1. `[writable]` Destination deposit reserve collateral supply SPL Token account.
///   2. `[]` Deposit reserve account - refreshed.
///   3. `[writable]` Obligation account.
///   4. `[]` Lending market account.
///   5. `[signer]` Obligation owner.
///   6. `[signer]` User transfer authority ($authority).
///   7. `[]` Clock sysvar.
///   8. `[]` Token program id.
pub fn deposit_obligation_collateral(
    config: &LendingConfig,
    collateral_amount: u64,
    accounts: DepositObligationCollateralAccounts,
) -> Result<Instruction, LendingError> {
    build(
        config,
        vec![
            AccountMeta::new(accounts.source_collateral, false),
            AccountMeta::new(accounts.destination_collateral, false),
            AccountMeta::new_readonly(accounts.deposit_reserve, false),
            AccountMeta::new(accounts.obligation, false),
            AccountMeta::new_readonly(accounts.lending_market, false),
            AccountMeta::new_readonly(accounts.obligation_owner, true),
            AccountMeta::new_readonly(accounts.user_transfer_authority, true),
            AccountMeta::new_readonly(sysvar::clock::id(), false),
            AccountMeta::new_readonly(config.token_program_id, false),
        ],
        LendingInstruction::DepositObligationCollateral { collateral_amount },
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn owner_and_authority_sign() {
        let owner = Pubkey::new_unique();
        let accounts = DepositObligationCollateralAccounts {
            source_collateral: Pubkey::new_unique(),
            destination_collateral: Pubkey::new_unique(),
            deposit_reserve: Pubkey::new_unique(),
            obligation: Pubkey::new_unique(),
            lending_market: Pubkey::new_unique(),
            obligation_owner: owner,
            // the owner often moves its own tokens
            user_transfer_authority: owner,
        };
        let instruction =
            deposit_obligation_collateral(&LendingConfig::default(), 500, accounts).unwrap();
        assert_eq!(instruction.accounts.len(), 9);
        assert_eq!(instruction.accounts[5], AccountMeta::new_readonly(owner, true));
        assert_eq!(instruction.accounts[6], AccountMeta::new_readonly(owner, true));
        assert!(!instruction.accounts[2].is_writable);
        assert!(instruction.accounts[3].is_writable);
        assert_eq!(instruction.data[0], 7);
    }
}
