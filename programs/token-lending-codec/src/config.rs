//! Program ids threaded through every instruction builder

use solana_program::pubkey::Pubkey;

/// Programs an instruction is addressed to or passes along to the lending program
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LendingConfig {
    /// Lending program id
    pub program_id: Pubkey,
    /// Pyth oracle program id
    pub oracle_program_id: Pubkey,
    /// SPL token program id
    pub token_program_id: Pubkey,
}

impl LendingConfig {
    /// Devnet oracle and token programs with a different lending program
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            ..Self::default()
        }
    }
}

impl Default for LendingConfig {
    fn default() -> Self {
        Self {
            program_id: crate::id(),
            oracle_program_id: crate::ORACLE_PROGRAM_ID,
            token_program_id: crate::TOKEN_PROGRAM_ID,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn override_program_id() {
        let program_id = Pubkey::new_unique();
        let config = LendingConfig::new(program_id);
        assert_eq!(config.program_id, program_id);
        assert_eq!(config.oracle_program_id, LendingConfig::default().oracle_program_id);
        assert_eq!(
            LendingConfig::default().token_program_id.to_string(),
            "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
        );
    }
}
