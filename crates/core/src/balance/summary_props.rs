//! Property-based tests for balance aggregation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::{BalanceEntryId, GroupId, UserId};

use super::settlement::{group_settlement_lines, SettlementLine};
use super::summary::user_summary;
use super::types::SignedBalanceEntry;

/// Strategy to generate stored amount strings, including malformed ones.
fn stored_amount() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => (-100_000i64..100_000i64).prop_map(|cents| Some(Decimal::new(cents, 2).to_string())),
        1 => Just(None),
        1 => "[a-z]{1,5}".prop_map(Some),
    ]
}

fn entry_strategy() -> impl Strategy<Value = SignedBalanceEntry> {
    (0i64..1_000, 1i64..5, 1i64..5, stored_amount(), 1i64..3).prop_map(
        |(id, creditor, debtor, amount, group)| SignedBalanceEntry {
            id: BalanceEntryId::new(id),
            creditor_user_id: UserId::new(creditor),
            debtor_user_id: UserId::new(debtor),
            amount,
            group_id: GroupId::new(group),
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reordering entries does not change the totals.
    #[test]
    fn prop_summary_order_independent(
        entries in prop::collection::vec(entry_strategy(), 0..30),
        user in 1i64..5,
    ) {
        let user = UserId::new(user);
        let mut reversed = entries.clone();
        reversed.reverse();
        prop_assert_eq!(user_summary(&entries, user), user_summary(&reversed, user));
    }

    /// Summing two halves equals summing the whole.
    #[test]
    fn prop_summary_linear(
        entries in prop::collection::vec(entry_strategy(), 0..30),
        split in any::<prop::sample::Index>(),
        user in 1i64..5,
    ) {
        let user = UserId::new(user);
        let cut = if entries.is_empty() { 0 } else { split.index(entries.len()) };
        let (left, right) = entries.split_at(cut);
        let whole = user_summary(&entries, user);
        let a = user_summary(left, user);
        let b = user_summary(right, user);
        prop_assert_eq!(whole.total_credit, a.total_credit + b.total_credit);
        prop_assert_eq!(whole.total_debt, a.total_debt + b.total_debt);
    }

    /// Settled up is either the only line or absent, and every other line is positive.
    #[test]
    fn prop_settlement_lines_shape(
        entries in prop::collection::vec(entry_strategy(), 0..30),
        user in 1i64..5,
    ) {
        let lines = group_settlement_lines(&entries, UserId::new(user));
        prop_assert!(!lines.is_empty());
        if lines.contains(&SettlementLine::SettledUp) {
            prop_assert_eq!(lines.len(), 1);
        } else {
            prop_assert!(lines.iter().all(|l| l.amount().is_some_and(|a| a > Decimal::ZERO)));
        }
    }
}
