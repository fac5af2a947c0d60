//! Interactive share editing as a pure reducer.
//!
//! Each event produces a new `SplitFormState`; the previous state is never
//! modified. Shares are unsigned while editing; signs are only applied by
//! `normalize_for_submission`.

use rust_decimal::Decimal;
use tally_shared::types::UserId;

use super::split::SplitCalculator;
use super::types::{DivisionStrategy, ExpenseDraft, ParticipantShare};

/// One participant row of the split form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormParticipant {
    /// The participant.
    pub user_id: UserId,
    /// Current share.
    pub share_amount: Decimal,
    /// Percentage used under `DivisionStrategy::Percentage`.
    pub percent: Decimal,
}

impl FormParticipant {
    fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            share_amount: Decimal::ZERO,
            percent: Decimal::ZERO,
        }
    }
}

/// Editing state of an expense split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitFormState {
    /// Expense total.
    pub total: Decimal,
    /// Active division strategy.
    pub strategy: DivisionStrategy,
    /// The user paying the expense.
    pub payer: UserId,
    /// Checked participants, in the order they were checked.
    pub participants: Vec<FormParticipant>,
}

/// User interaction on the split form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitEvent {
    /// A user was added to the split.
    ParticipantChecked(UserId),
    /// A user was removed from the split.
    ParticipantUnchecked(UserId),
    /// A share was typed in by hand.
    AmountEdited {
        /// Participant whose share changed.
        user_id: UserId,
        /// New share.
        amount: Decimal,
    },
    /// A percentage was typed in.
    PercentageEdited {
        /// Participant whose percentage changed.
        user_id: UserId,
        /// New percentage (0-100).
        percent: Decimal,
    },
    /// The division strategy was switched.
    StrategyChanged(DivisionStrategy),
    /// The expense total was changed.
    TotalEdited(Decimal),
}

impl SplitFormState {
    /// Creates an empty form.
    #[must_use]
    pub const fn new(total: Decimal, strategy: DivisionStrategy, payer: UserId) -> Self {
        Self {
            total,
            strategy,
            payer,
            participants: Vec::new(),
        }
    }

    /// Returns true if `user_id` is checked.
    #[must_use]
    pub fn contains(&self, user_id: UserId) -> bool {
        self.participants.iter().any(|p| p.user_id == user_id)
    }

    /// Returns the current share of `user_id`.
    #[must_use]
    pub fn share_of(&self, user_id: UserId) -> Option<Decimal> {
        self.participants
            .iter()
            .find(|p| p.user_id == user_id)
            .map(|p| p.share_amount)
    }

    /// Builds the draft handed to validation.
    #[must_use]
    pub fn to_draft(&self, description: impl Into<String>) -> ExpenseDraft {
        ExpenseDraft {
            description: description.into(),
            amount: self.total,
            division_strategy: self.strategy.as_str().to_string(),
            participants: self
                .participants
                .iter()
                .map(|p| ParticipantShare::new(p.user_id, p.share_amount))
                .collect(),
        }
    }
}

impl SplitCalculator {
    /// Applies `event` to `state` and returns the resulting state.
    #[must_use]
    pub fn reduce(&self, state: &SplitFormState, event: SplitEvent) -> SplitFormState {
        let mut next = state.clone();
        match event {
            SplitEvent::ParticipantChecked(user_id) => {
                if next.contains(user_id) {
                    return next;
                }
                next.participants.push(FormParticipant::new(user_id));
            }
            SplitEvent::ParticipantUnchecked(user_id) => {
                next.participants.retain(|p| p.user_id != user_id);
            }
            SplitEvent::AmountEdited { user_id, amount } => {
                if let Some(p) = next.participants.iter_mut().find(|p| p.user_id == user_id) {
                    p.share_amount = amount;
                }
                return next;
            }
            SplitEvent::PercentageEdited { user_id, percent } => {
                if let Some(p) = next.participants.iter_mut().find(|p| p.user_id == user_id) {
                    p.percent = percent;
                }
            }
            SplitEvent::StrategyChanged(strategy) => next.strategy = strategy,
            SplitEvent::TotalEdited(total) => next.total = total,
        }
        self.recompute(next)
    }

    fn recompute(&self, mut state: SplitFormState) -> SplitFormState {
        match state.strategy {
            DivisionStrategy::Equals => {
                let ids: Vec<UserId> = state.participants.iter().map(|p| p.user_id).collect();
                if let Some(split) = self.equal_shares(state.total, &ids, state.payer) {
                    for (p, share) in state.participants.iter_mut().zip(split.shares) {
                        p.share_amount = share.share_amount;
                    }
                }
            }
            DivisionStrategy::Percentage => {
                let pcts: Vec<(UserId, Decimal)> = state
                    .participants
                    .iter()
                    .map(|p| (p.user_id, p.percent))
                    .collect();
                if let Some(shares) = self.percentage_shares(state.total, &pcts) {
                    for (p, share) in state.participants.iter_mut().zip(shares) {
                        p.share_amount = share.share_amount;
                    }
                }
            }
            DivisionStrategy::Manual => {}
        }
        state
    }
}

/// Applies `event` with the default settings.
#[must_use]
pub fn reduce(state: &SplitFormState, event: SplitEvent) -> SplitFormState {
    SplitCalculator::default().reduce(state, event)
}
