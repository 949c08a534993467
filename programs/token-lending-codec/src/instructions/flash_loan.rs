use super::*;
use crate::utils::lending_market_authority;

/// Accounts of [`flash_loan`]
#[derive(Clone, Debug)]
pub struct FlashLoanAccounts {
    /// Reserve liquidity supply the loan is paid from
    pub source_liquidity: Pubkey,
    /// Destination liquidity token account
    pub destination_liquidity: Pubkey,
    pub reserve: Pubkey,
    pub reserve_liquidity_fee_receiver: Pubkey,
    pub host_fee_receiver: Pubkey,
    pub lending_market: Pubkey,
    /// Program invoked with the borrowed liquidity, which must repay it
    pub flash_loan_receiver_program: Pubkey,
    /// Accounts passed through to the receiver program as given
    pub flash_loan_receiver_accounts: Vec<AccountMeta>,
}

/// Creates a `FlashLoan` instruction.
///
///   0. `[writable]` Source liquidity (reserve liquidity supply), minted by reserve liquidity mint
///   1. `[writable]` Destination liquidity (owned by the flash loan receiver program)
///   2. `[writable]` Reserve account.
///   3. `[writable]` Flash loan fee receiver account.
///   4. `[writable]` Host fee receiver.
///   5. `[]` Lending market account.
///   6. `[]` Derived lending market authority.
///   7. `[]` Token program id.
///   8. `[]` Flash loan receiver program id.
///   .. `[any]` Additional accounts expected by the receiving program's `ReceiveFlashLoan` instruction.
pub fn flash_loan(
    config: &LendingConfig,
    amount: u64,
    accounts: FlashLoanAccounts,
) -> Result<Instruction, LendingError> {
    let lending_market_authority =
        lending_market_authority(&accounts.lending_market, &config.program_id)?;
    let mut metas = vec![
        AccountMeta::new(accounts.source_liquidity, false),
        AccountMeta::new(accounts.destination_liquidity, false),
        AccountMeta::new(accounts.reserve, false),
        AccountMeta::new(accounts.reserve_liquidity_fee_receiver, false),
        AccountMeta::new(accounts.host_fee_receiver, false),
        AccountMeta::new_readonly(accounts.lending_market, false),
        AccountMeta::new_readonly(lending_market_authority, false),
        AccountMeta::new_readonly(config.token_program_id, false),
        AccountMeta::new_readonly(accounts.flash_loan_receiver_program, false),
    ];
    metas.extend(accounts.flash_loan_receiver_accounts);
    build(config, metas, LendingInstruction::FlashLoan { amount })
}
