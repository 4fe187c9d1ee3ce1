use proptest::prelude::*;

use permchain_types::{Amount, ApprovalPolicy, BlockHash, Timestamp, TxHash};

proptest! {
    /// BlockHash::is_zero is true only for all-zero bytes.
    #[test]
    fn block_hash_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        prop_assert_eq!(hash.is_zero(), bytes == [0u8; 32]);
    }

    /// Display renders the full hash as 64 lowercase hex characters.
    #[test]
    fn tx_hash_display_is_full_hex(bytes in prop::array::uniform32(0u8..)) {
        let rendered = TxHash::new(bytes).to_string();
        prop_assert_eq!(rendered.len(), 64);
        prop_assert!(rendered.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        prop_assert_eq!(Timestamp::new(a) <= Timestamp::new(b), a <= b);
    }

    /// Amount: checked_sub returns None exactly when b > a.
    #[test]
    fn amount_checked_sub_underflow(a in 0u128..1_000_000, b in 0u128..1_000_000) {
        let result = Amount::new(a).checked_sub(Amount::new(b));
        if b > a {
            prop_assert!(result.is_none());
        } else {
            prop_assert_eq!(result, Some(Amount::new(a - b)));
        }
    }

    /// Amount: a debit followed by a credit of the same value conserves the sum.
    #[test]
    fn amount_transfer_conserves_total(
        a in 0u128..1_000_000,
        b in 0u128..1_000_000,
        x in 0u128..1_000_000,
    ) {
        prop_assume!(x <= a);
        let sender = Amount::new(a).checked_sub(Amount::new(x)).unwrap();
        let recipient = Amount::new(b).checked_add(Amount::new(x)).unwrap();
        prop_assert_eq!(sender + recipient, Amount::new(a + b));
    }

    /// Amount: decimal rendering matches the integer's.
    #[test]
    fn amount_decimal_string(units in 0u128..u128::MAX) {
        prop_assert_eq!(Amount::new(units).to_decimal_string(), units.to_string());
    }

    /// Both policies require at least one and at most n approvals (n >= 1).
    #[test]
    fn approval_policy_bounds(n in 1usize..10_000) {
        for policy in [ApprovalPolicy::OneThirdPlusOne, ApprovalPolicy::StrictMajority] {
            let required = policy.required(n);
            prop_assert!(required >= 1);
            prop_assert!(required <= n);
        }
    }
}
