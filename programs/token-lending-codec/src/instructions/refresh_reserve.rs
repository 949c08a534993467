use super::*;
use solana_program::sysvar;

/// Accounts of [`refresh_reserve`]
#[derive(Clone, Copy, Debug)]
pub struct RefreshReserveAccounts {
    pub reserve: Pubkey,
    /// Pyth price account stored in the reserve
    pub reserve_liquidity_oracle: Pubkey,
}

/// Creates a `RefreshReserve` instruction
///
///   0. `[writable]` Reserve account.
///   1. `[]` Reserve liquidity oracle account.
///   2. `[]` Clock sysvar.
pub fn refresh_reserve(
    config: &LendingConfig,
    accounts: RefreshReserveAccounts,
) -> Result<Instruction, LendingError> {
    build(
        config,
        vec![
            AccountMeta::new(accounts.reserve, false),
            AccountMeta::new_readonly(accounts.reserve_liquidity_oracle, false),
            AccountMeta::new_readonly(sysvar::clock::id(), false),
        ],
        LendingInstruction::RefreshReserve,
    )
}
