use super::*;
use solana_program::sysvar;

/// Accounts of [`init_lending_market`]
#[derive(Clone, Copy, Debug)]
pub struct InitLendingMarketAccounts {
    /// Uninitialized lending market account, owned by the lending program
    pub lending_market: Pubkey,
}

/// Creates an 'InitLendingMarket' instruction.
///
///   0. `[writable]` Lending market account
///   1. `[]` Rent sysvar
///   2. `[]` Token program id
///   3. `[]` Oracle program id
pub fn init_lending_market(
    config: &LendingConfig,
    owner: Pubkey,
    quote_currency: [u8; 32],
    accounts: InitLendingMarketAccounts,
) -> Result<Instruction, LendingError> {
    build(
        config,
        vec![
            AccountMeta::new(accounts.lending_market, false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
            AccountMeta::new_readonly(config.token_program_id, false),
            AccountMeta::new_readonly(config.oracle_program_id, false),
        ],
        LendingInstruction::InitLendingMarket {
            owner,
            quote_currency,
        },
    )
}
