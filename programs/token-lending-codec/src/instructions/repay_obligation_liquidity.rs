use super::*;
use solana_program::sysvar;

/// Accounts of [`repay_obligation_liquidity`]
#[derive(Clone, Copy, Debug)]
pub struct RepayObligationLiquidityAccounts {
    /// Source liquidity token account, the transfer authority can move `liquidity_amount` from it
    pub source_liquidity: Pubkey,
    /// Reserve liquidity supply receiving the repayment
    pub destination_liquidity: Pubkey,
    pub repay_reserve: Pubkey,
    pub obligation: Pubkey,
    pub lending_market: Pubkey,
    pub user_transfer_authority: Pubkey,
}

/// Creates a `RepayObligationLiquidity` instruction
///
///   0. `[writable]` Source liquidity token account.
///   1. `[writable]` Destination repay reserve liquidity supply SPL Token account.
///   2. `[writable]` Repay reserve account - refreshed.
///   3. `[writable]` Obligation account - refreshed.
///   4. `[]` Lending market account.
///   5. `[signer]` User transfer authority ($authority).
///   6. `[]` Clock sysvar.
///   7. `[]` Token program id.
pub fn repay_obligation_liquidity(
    config: &LendingConfig,
    liquidity_amount: u64,
    accounts: RepayObligationLiquidityAccounts,
) -> Result<Instruction, LendingError> {
    build(
        config,
        vec![
            AccountMeta::new(accounts.source_liquidity, false),
            AccountMeta::new(accounts.destination_liquidity, false),
            AccountMeta::new(accounts.repay_reserve, false),
            AccountMeta::new(accounts.obligation, false),
            AccountMeta::new_readonly(accounts.lending_market, false),
            AccountMeta::new_readonly(accounts.user_transfer_authority, true),
            AccountMeta::new_readonly(sysvar::clock::id(), false),
            AccountMeta::new_readonly(config.token_program_id, false),
        ],
        LendingInstruction::RepayObligationLiquidity { liquidity_amount },
    )
}
