//! Property-based tests for share recomputation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::UserId;
use tally_shared::{RemainderPolicy, SplitSettings};

use super::reducer::{SplitEvent, SplitFormState};
use super::split::SplitCalculator;
use super::types::DivisionStrategy;

/// Strategy to generate positive totals (0.01 to 1,000,000.00).
fn positive_total() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn participant_ids() -> impl Strategy<Value = Vec<UserId>> {
    prop::collection::btree_set(1i64..1_000, 1..20)
        .prop_map(|ids| ids.into_iter().map(UserId::new).collect())
}

fn reconciling() -> SplitCalculator {
    SplitCalculator::new(SplitSettings {
        remainder: RemainderPolicy::LargestRemainder,
        ..SplitSettings::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reconciled equal shares always sum to the total and differ by at most one cent.
    #[test]
    fn prop_reconciled_equal_split_sums_exactly(
        total in positive_total(),
        ids in participant_ids(),
    ) {
        let split = reconciling().equal_shares(total, &ids, ids[0]).unwrap();
        let sum: Decimal = split.shares.iter().map(|s| s.share_amount).sum();
        prop_assert_eq!(sum, total);

        let max = split.shares.iter().map(|s| s.share_amount).max().unwrap();
        let min = split.shares.iter().map(|s| s.share_amount).min().unwrap();
        prop_assert!(max - min <= Decimal::new(1, 2));
    }

    /// Unreconciled equal shares are all identical.
    #[test]
    fn prop_plain_equal_split_identical_shares(
        total in positive_total(),
        ids in participant_ids(),
    ) {
        let split = SplitCalculator::default().equal_shares(total, &ids, ids[0]).unwrap();
        prop_assert_eq!(split.shares.len(), ids.len());
        let first = split.shares[0].share_amount;
        prop_assert!(split.shares.iter().all(|s| s.share_amount == first));
    }

    /// Checking then unchecking a participant restores the equal shares.
    #[test]
    fn prop_check_uncheck_restores_shares(
        total in positive_total(),
        ids in participant_ids(),
    ) {
        let calc = SplitCalculator::default();
        let start = ids.iter().fold(
            SplitFormState::new(total, DivisionStrategy::Equals, ids[0]),
            |state, id| calc.reduce(&state, SplitEvent::ParticipantChecked(*id)),
        );
        let extra = UserId::new(10_000);
        let grown = calc.reduce(&start, SplitEvent::ParticipantChecked(extra));
        let back = calc.reduce(&grown, SplitEvent::ParticipantUnchecked(extra));
        prop_assert_eq!(back, start);
    }
}
