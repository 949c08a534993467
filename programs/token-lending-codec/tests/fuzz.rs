use proptest::prelude::*;
use token_lending_codec::{decode_account, AccountKind, LendingInstruction};

proptest! {
    #[test]
    fn fuzz_instruction_unpack(data in proptest::collection::vec(any::<u8>(), 0..128)) {
        // Just verify it doesn't panic
        let _ = LendingInstruction::unpack(&data);
    }

    #[test]
    fn fuzz_account_decode(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
        for kind in [AccountKind::LendingMarket, AccountKind::Reserve, AccountKind::Obligation] {
            let _ = decode_account(&data, kind);
        }
    }

    #[test]
    fn fuzz_versioned_account_decode(mut data in proptest::collection::vec(any::<u8>(), 916)) {
        data[0] = 1;
        for kind in [AccountKind::LendingMarket, AccountKind::Reserve, AccountKind::Obligation] {
            let _ = decode_account(&data[..kind.len()], kind);
        }
    }
}
