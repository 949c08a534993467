use super::*;
use crate::state::Obligation;
use solana_program::sysvar;

/// Accounts of [`refresh_obligation`]
#[derive(Clone, Debug)]
pub struct RefreshObligationAccounts {
    pub obligation: Pubkey,
    /// Reserves of the obligation's deposits, in deposit order
    pub deposit_reserves: Vec<Pubkey>,
    /// Reserves of the obligation's borrows, in borrow order
    pub borrow_reserves: Vec<Pubkey>,
}

impl RefreshObligationAccounts {
    /// Reserves listed by a decoded obligation
    pub fn for_obligation(obligation_pubkey: Pubkey, obligation: &Obligation) -> Self {
        Self {
            obligation: obligation_pubkey,
            deposit_reserves: obligation.deposit_reserves(),
            borrow_reserves: obligation.borrow_reserves(),
        }
    }
}

/// Creates a 'RefreshObligation' instruction.
///
///   0. `[writable]` Obligation account.
///   1. `[]` Clock sysvar.
///   .. `[]` Collateral deposit reserve accounts - refreshed, all, in order.
///   .. `[]` Liquidity borrow reserve accounts - refreshed, all, in order.
pub fn refresh_obligation(
    config: &LendingConfig,
    accounts: RefreshObligationAccounts,
) -> Result<Instruction, LendingError> {
    let mut metas = Vec::with_capacity(
        2 + accounts.deposit_reserves.len() + accounts.borrow_reserves.len(),
    );
    metas.push(AccountMeta::new(accounts.obligation, false));
    metas.push(AccountMeta::new_readonly(sysvar::clock::id(), false));
    metas.extend(
        accounts
            .deposit_reserves
            .into_iter()
            .chain(accounts.borrow_reserves)
            .map(|reserve| AccountMeta::new_readonly(reserve, false)),
    );
    build(config, metas, LendingInstruction::RefreshObligation)
}
