//! Expense domain types.
//!
//! A draft is what the creation form collects. It is validated into a
//! `ValidatedExpense`, which is normalized exactly once into a
//! `SubmittedExpense` at the submission boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::UserId;

/// Method used to allocate the total across participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DivisionStrategy {
    /// Every participant pays the same share.
    Equals,
    /// Shares are entered by hand.
    Manual,
    /// Shares are derived from per-participant percentages.
    Percentage,
}

impl DivisionStrategy {
    /// All strategies, in wire order.
    pub const ALL: [Self; 3] = [Self::Equals, Self::Manual, Self::Percentage];

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "EQUALS",
            Self::Manual => "MANUAL",
            Self::Percentage => "PERCENTAGE",
        }
    }
}

impl std::fmt::Display for DivisionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DivisionStrategy {
    type Err = String;

    /// Case-sensitive: `"equals"` is not a strategy.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| format!("Unknown division strategy: {s}"))
    }
}

/// One participant's share of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantShare {
    /// The participant.
    #[serde(alias = "id")]
    pub user_id: UserId,
    /// The amount this participant is allocated.
    #[serde(alias = "amount")]
    pub share_amount: Decimal,
}

impl ParticipantShare {
    /// Creates a new share.
    #[must_use]
    pub const fn new(user_id: UserId, share_amount: Decimal) -> Self {
        Self {
            user_id,
            share_amount,
        }
    }
}

/// A proposed expense division as collected from the creation form.
///
/// The strategy stays a raw string until validation so that unknown values can
/// be reported instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    /// Free-text description.
    pub description: String,
    /// Total amount of the expense.
    pub amount: Decimal,
    /// Raw division strategy name.
    pub division_strategy: String,
    /// Participants in display order.
    #[serde(default)]
    pub participants: Vec<ParticipantShare>,
}

impl ExpenseDraft {
    /// Sum of all participant shares.
    ///
    /// `None` when the shares overflow `Decimal`.
    #[must_use]
    pub fn share_total(&self) -> Option<Decimal> {
        sum_shares(&self.participants)
    }
}

/// An expense that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedExpense {
    /// Free-text description.
    pub description: String,
    /// Total amount of the expense.
    pub amount: Decimal,
    /// Parsed division strategy.
    pub division_strategy: DivisionStrategy,
    /// Participants in display order; shares sum to `amount`.
    pub participants: Vec<ParticipantShare>,
}

/// An expense ready to hand to the persistence layer.
///
/// Every participant other than the payer carries a negated share: the sign
/// encodes "this user owes". Only `normalize_for_submission` builds this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedExpense {
    /// Free-text description.
    pub description: String,
    /// Total amount of the expense.
    pub amount: Decimal,
    /// Parsed division strategy.
    pub division_strategy: DivisionStrategy,
    /// The user who paid.
    pub payer_user_id: UserId,
    /// Signed participant shares.
    pub participants: Vec<ParticipantShare>,
}

impl SubmittedExpense {
    /// Total owed to the payer by everyone else, as a positive amount.
    #[must_use]
    pub fn owed_to_payer(&self) -> Decimal {
        -self
            .participants
            .iter()
            .filter(|p| p.user_id != self.payer_user_id)
            .fold(Decimal::ZERO, |total, p| total.saturating_add(p.share_amount))
    }
}

pub(crate) fn sum_shares(participants: &[ParticipantShare]) -> Option<Decimal> {
    participants
        .iter()
        .try_fold(Decimal::ZERO, |total, p| total.checked_add(p.share_amount))
}

/// Share sum clamped to the `Decimal` range, for error reporting.
pub(crate) fn saturating_share_total(participants: &[ParticipantShare]) -> Decimal {
    participants
        .iter()
        .fold(Decimal::ZERO, |total, p| total.saturating_add(p.share_amount))
}
