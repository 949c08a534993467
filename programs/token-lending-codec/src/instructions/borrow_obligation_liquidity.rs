use super::*;
use crate::utils::lending_market_authority;
use solana_program::sysvar;

/// Accounts of [`borrow_obligation_liquidity`]
#[derive(Clone, Copy, Debug)]
pub struct BorrowObligationLiquidityAccounts {
    /// Reserve liquidity supply the loan is paid from
    pub source_liquidity: Pubkey,
    /// Destination liquidity token account
    pub destination_liquidity: Pubkey,
    pub borrow_reserve: Pubkey,
    pub borrow_reserve_liquidity_fee_receiver: Pubkey,
    pub obligation: Pubkey,
    pub lending_market: Pubkey,
    pub obligation_owner: Pubkey,
    /// Receives the host share of the borrow fee when present
    pub host_fee_receiver: Option<Pubkey>,
}

/// Creates a 'BorrowObligationLiquidity' instruction.
///
///   0. `[writable]` Source borrow reserve liquidity supply SPL Token account.
///   1. `[writable]` Destination liquidity token account.
///   2. `[writable]` Borrow reserve account - refreshed.
///   3. `[writable]` Borrow reserve liquidity fee receiver account.
///   4. `[writable]` Obligation account - refreshed.
///   5. `[]` Lending market account.
///   6. `[]` Derived lending market authority.
///   7. `[signer]` Obligation owner.
///   8. `[]` Clock sysvar.
///   9. `[]` Token program id.
///   10. `[optional, writable]` Host fee receiver account.
pub fn borrow_obligation_liquidity(
    config: &LendingConfig,
    liquidity_amount: u64,
    accounts: BorrowObligationLiquidityAccounts,
) -> Result<Instruction, LendingError> {
    let lending_market_authority =
        lending_market_authority(&accounts.lending_market, &config.program_id)?;
    let mut metas = vec![
        AccountMeta::new(accounts.source_liquidity, false),
        AccountMeta::new(accounts.destination_liquidity, false),
        AccountMeta::new(accounts.borrow_reserve, false),
        AccountMeta::new(accounts.borrow_reserve_liquidity_fee_receiver, false),
        AccountMeta::new(accounts.obligation, false),
        AccountMeta::new_readonly(accounts.lending_market, false),
        AccountMeta::new_readonly(lending_market_authority, false),
        AccountMeta::new_readonly(accounts.obligation_owner, true),
        AccountMeta::new_readonly(sysvar::clock::id(), false),
        AccountMeta::new_readonly(config.token_program_id, false),
    ];
    if let Some(host_fee_receiver) = accounts.host_fee_receiver {
        metas.push(AccountMeta::new(host_fee_receiver, false));
    }
    build(
        config,
        metas,
        LendingInstruction::BorrowObligationLiquidity { liquidity_amount },
    )
}
