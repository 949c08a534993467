use super::*;
use solana_program::sysvar;

/// Accounts of [`init_obligation`]
#[derive(Clone, Copy, Debug)]
pub struct InitObligationAccounts {
    /// Obligation account, uninitialized and owned by the lending program
    pub obligation: Pubkey,
    pub lending_market: Pubkey,
    pub obligation_owner: Pubkey,
}

/// Creates an 'InitObligation' instruction.
///
///   0. `[writable]` Obligation account - uninitialized.
///   1. `[]` Lending market account.
///   2. `[signer]` Obligation owner.
///   3. `[]` Clock sysvar.
///   4. `[]` Rent sysvar.
///   5. `[]` Token program id.
pub fn init_obligation(
    config: &LendingConfig,
    accounts: InitObligationAccounts,
) -> Result<Instruction, LendingError> {
    build(
        config,
        vec![
            AccountMeta::new(accounts.obligation, false),
            AccountMeta::new_readonly(accounts.lending_market, false),
            AccountMeta::new_readonly(accounts.obligation_owner, true),
            AccountMeta::new_readonly(sysvar::clock::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
            AccountMeta::new_readonly(config.token_program_id, false),
        ],
        LendingInstruction::InitObligation,
    )
}
