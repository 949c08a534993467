use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::clock::Slot;

/// Packed length of [`LastUpdate`]
pub const LAST_UPDATE_LEN: usize = 9; // 8 + 1

/// Last update state
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LastUpdate {
    /// Last slot when updated
    pub slot: Slot,
    /// True when marked stale, false when slot updated
    pub stale: bool,
}

impl LastUpdate {
    /// Create new last update
    pub fn new(slot: Slot) -> Self {
        Self { slot, stale: true }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stale_flag_must_be_bool() {
        let mut bytes = borsh::to_vec(&LastUpdate::new(42)).unwrap();
        assert_eq!(bytes.len(), LAST_UPDATE_LEN);
        assert_eq!(bytes[8], 1);
        assert_eq!(LastUpdate::try_from_slice(&bytes).unwrap().slot, 42);

        bytes[8] = 2;
        assert!(LastUpdate::try_from_slice(&bytes).is_err());
    }
}
