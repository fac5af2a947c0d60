//! End-to-end scenarios: form editing, validation, submission and balances.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_core::balance::{
    net_balance, render_group_settlement, settlement_by_group, user_summary, AmountRecord,
    SignedBalanceEntry, UserBalanceSummary,
};
use tally_core::expense::{
    normalize_for_submission, reduce, validate, DivisionStrategy, ExpenseDraft, ExpenseErrorKind,
    ParticipantShare, SplitEvent, SplitFormState,
};
use tally_shared::types::{flatten_pages, BalanceEntryId, GroupId, Page, UserId};

fn user(id: i64) -> UserId {
    UserId::new(id)
}

fn entry(id: i64, creditor: i64, debtor: i64, amount: &str, group: i64) -> SignedBalanceEntry {
    SignedBalanceEntry {
        id: BalanceEntryId::new(id),
        creditor_user_id: user(creditor),
        debtor_user_id: user(debtor),
        amount: Some(amount.to_string()),
        group_id: GroupId::new(group),
    }
}

#[test]
fn dinner_draft_passes() {
    let draft = ExpenseDraft {
        description: "Dinner".to_string(),
        amount: dec!(100),
        division_strategy: "EQUALS".to_string(),
        participants: vec![
            ParticipantShare::new(user(1), dec!(50)),
            ParticipantShare::new(user(2), dec!(50)),
        ],
    };
    assert!(validate(&draft).is_ok());
}

#[test]
fn two_letter_description_fails_alone() {
    let draft = ExpenseDraft {
        description: "AB".to_string(),
        amount: dec!(100),
        division_strategy: "EQUALS".to_string(),
        participants: vec![
            ParticipantShare::new(user(1), dec!(50)),
            ParticipantShare::new(user(2), dec!(50)),
        ],
    };
    let errors = validate(&draft).unwrap_err();
    let kinds: Vec<_> = errors.kinds().cloned().collect();
    assert_eq!(kinds, vec![ExpenseErrorKind::DescriptionTooShort { min: 3 }]);
}

#[test]
fn settlement_lines_from_both_sides() {
    let names = HashMap::from([(user(1), "Ana".to_string()), (user(2), "Ben".to_string())]);
    let entries = vec![entry(1, 2, 1, "50", 1)];

    assert_eq!(render_group_settlement(&entries, user(1), &names), vec!["You owe Ben"]);
    assert_eq!(render_group_settlement(&entries, user(2), &names), vec!["Ana owes you"]);
}

#[test]
fn credit_and_debt_records_net_out() {
    let credits = [AmountRecord::new("50"), AmountRecord::new("30")];
    let debts = [AmountRecord::new("20"), AmountRecord::new("10")];
    let summary = UserBalanceSummary::from_records(&credits, &debts);

    assert_eq!(summary.total_credit, dec!(80));
    assert_eq!(summary.total_debt, dec!(30));
    assert_eq!(net_balance(summary.total_credit, summary.total_debt), dec!(50));
}

#[test]
fn equal_split_grows_and_shrinks() {
    let state = SplitFormState::new(dec!(90), DivisionStrategy::Equals, user(1));
    let state = reduce(&state, SplitEvent::ParticipantChecked(user(1)));
    let state = reduce(&state, SplitEvent::ParticipantChecked(user(2)));

    let three = reduce(&state, SplitEvent::ParticipantChecked(user(3)));
    assert!(three.participants.iter().all(|p| p.share_amount == dec!(30)));

    let two = reduce(&three, SplitEvent::ParticipantUnchecked(user(2)));
    assert!(two.participants.iter().all(|p| p.share_amount == dec!(45)));
}

#[test]
fn form_to_submission_flow() {
    let state = [1, 2, 3].into_iter().fold(
        SplitFormState::new(dec!(90), DivisionStrategy::Equals, user(2)),
        |state, id| reduce(&state, SplitEvent::ParticipantChecked(user(id))),
    );

    let validated = validate(&state.to_draft("Groceries")).unwrap();
    let submitted = normalize_for_submission(validated, user(2));

    let amounts: Vec<Decimal> = submitted.participants.iter().map(|p| p.share_amount).collect();
    assert_eq!(amounts, vec![dec!(-30), dec!(30), dec!(-30)]);
    assert_eq!(submitted.owed_to_payer(), dec!(60));
}

#[test]
fn paged_entries_aggregate_like_a_single_sequence() {
    let all = vec![
        entry(1, 1, 2, "10", 1),
        entry(2, 3, 1, "4", 1),
        entry(3, 1, 3, "6", 2),
        entry(4, 2, 1, "0", 2),
    ];
    let pages = vec![
        Page::new(all[..2].to_vec(), 1, 2, 4),
        Page::new(all[2..].to_vec(), 2, 2, 4),
    ];
    let flat = flatten_pages(pages);

    assert_eq!(user_summary(&flat, user(1)), user_summary(&all, user(1)));
    let groups = settlement_by_group(&flat, user(1));
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| !g.is_settled()));
}
