//! Property-based tests for expense draft validation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::UserId;

use super::error::ExpenseErrorKind;
use super::types::{ExpenseDraft, ParticipantShare};
use super::validation::validate;

/// Strategy to generate a share amount (0.00 to 10,000.00).
fn share_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate 2 to 8 shares whose total is at least 1.
fn balanced_shares() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(share_amount(), 2..8).prop_map(|mut shares| {
        shares[0] += Decimal::ONE;
        shares
    })
}

fn valid_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("EQUALS"), Just("MANUAL"), Just("PERCENTAGE")]
}

fn make_draft(strategy: &str, shares: &[Decimal], amount: Decimal) -> ExpenseDraft {
    ExpenseDraft {
        description: "Shared groceries".to_string(),
        amount,
        division_strategy: strategy.to_string(),
        participants: shares
            .iter()
            .enumerate()
            .map(|(i, share)| ParticipantShare::new(UserId::new(i as i64 + 1), *share))
            .collect(),
    }
}

fn has_kind(errors: &super::error::ExpenseValidationErrors, code: &str) -> bool {
    errors.kinds().any(|kind| kind.error_code() == code)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A draft whose shares sum to its amount is accepted.
    #[test]
    fn prop_balanced_draft_accepted(
        strategy in valid_strategy(),
        shares in balanced_shares(),
    ) {
        let amount: Decimal = shares.iter().copied().sum();
        let draft = make_draft(strategy, &shares, amount);
        prop_assert!(validate(&draft).is_ok());
    }

    /// Changing any single share breaks the sum rule.
    #[test]
    fn prop_mutated_share_rejected(
        shares in balanced_shares(),
        index in any::<prop::sample::Index>(),
        delta in 1i64..100_000i64,
    ) {
        let amount: Decimal = shares.iter().copied().sum();
        let mut mutated = shares.clone();
        let i = index.index(mutated.len());
        mutated[i] += Decimal::new(delta, 2);

        let errors = validate(&make_draft("MANUAL", &mutated, amount)).unwrap_err();
        let kinds: Vec<_> = errors.kinds().cloned().collect();
        prop_assert_eq!(
            kinds,
            vec![ExpenseErrorKind::ShareSumMismatch {
                expected: amount,
                actual: amount + Decimal::new(delta, 2),
            }]
        );
    }

    /// Fewer than two participants always fails, whatever else is valid.
    #[test]
    fn prop_short_participant_list_rejected(
        strategy in valid_strategy(),
        shares in prop::collection::vec(share_amount(), 0..2),
        amount in share_amount(),
    ) {
        let errors = validate(&make_draft(strategy, &shares, amount)).unwrap_err();
        prop_assert!(has_kind(&errors, "INSUFFICIENT_PARTICIPANTS"));
    }

    /// Anything outside the three wire names is rejected, even when balanced.
    #[test]
    fn prop_unknown_strategy_rejected(
        strategy in "[A-Za-z_]{0,12}",
        shares in balanced_shares(),
    ) {
        prop_assume!(!matches!(strategy.as_str(), "EQUALS" | "MANUAL" | "PERCENTAGE"));
        let amount: Decimal = shares.iter().copied().sum();
        let errors = validate(&make_draft(&strategy, &shares, amount)).unwrap_err();
        prop_assert!(has_kind(&errors, "INVALID_DIVISION_STRATEGY"));
        prop_assert_eq!(errors.len(), 1);
    }
}
