//! Sign normalization at the submission boundary.

use tally_shared::types::UserId;
use tracing::debug;

use super::types::{ParticipantShare, SubmittedExpense, ValidatedExpense};

/// Converts a validated expense into its submitted form.
///
/// Every participant other than `payer` has their share negated, so a negative
/// share reads as "this user owes". The payer's share is kept as entered.
/// Consuming the `ValidatedExpense` means the flip happens exactly once.
#[must_use]
pub fn normalize_for_submission(expense: ValidatedExpense, payer: UserId) -> SubmittedExpense {
    if !expense.participants.iter().any(|p| p.user_id == payer) {
        debug!(%payer, "Payer is not among the participants");
    }

    let participants = expense
        .participants
        .into_iter()
        .map(|p| {
            if p.user_id == payer {
                p
            } else {
                ParticipantShare::new(p.user_id, -p.share_amount)
            }
        })
        .collect();

    SubmittedExpense {
        description: expense.description,
        amount: expense.amount,
        division_strategy: expense.division_strategy,
        payer_user_id: payer,
        participants,
    }
}
