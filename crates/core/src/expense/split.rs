//! Share recomputation for equal and percentage splits.

use rust_decimal::Decimal;
use tally_shared::types::UserId;
use tally_shared::{RemainderPolicy, SplitSettings};
use tracing::debug;

use super::allocation;
use super::types::ParticipantShare;

/// Result of an equal split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualSplit {
    /// The user who paid the expense.
    pub payer: UserId,
    /// One share per distinct participant, in input order.
    pub shares: Vec<ParticipantShare>,
}

impl EqualSplit {
    /// Returns the share allocated to `user_id`, if they participate.
    #[must_use]
    pub fn share_of(&self, user_id: UserId) -> Option<Decimal> {
        self.shares
            .iter()
            .find(|share| share.user_id == user_id)
            .map(|share| share.share_amount)
    }

    /// Amount the other participants owe the payer.
    #[must_use]
    pub fn owed_to_payer(&self) -> Decimal {
        self.shares
            .iter()
            .filter(|share| share.user_id != self.payer)
            .fold(Decimal::ZERO, |total, share| total.saturating_add(share.share_amount))
    }
}

/// Recomputes shares under the configured remainder policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitCalculator {
    settings: SplitSettings,
}

impl SplitCalculator {
    /// Creates a calculator with the given settings.
    #[must_use]
    pub const fn new(settings: SplitSettings) -> Self {
        Self { settings }
    }

    /// Splits `total` equally across `participant_ids`.
    ///
    /// Participants are treated as an ordered set: repeated ids keep their
    /// first position only. Returns `None` when there is nobody to split
    /// between, in which case the caller keeps its current shares.
    #[must_use]
    pub fn equal_shares(
        &self,
        total: Decimal,
        participant_ids: &[UserId],
        payer: UserId,
    ) -> Option<EqualSplit> {
        let participants = distinct(participant_ids);
        if participants.is_empty() {
            debug!(%total, "Equal split skipped: no participants");
            return None;
        }

        let amounts = match self.settings.remainder {
            RemainderPolicy::None => {
                let each = total / Decimal::from(participants.len());
                Some(vec![each; participants.len()])
            }
            RemainderPolicy::LargestRemainder => {
                allocation::allocate_equal(total, participants.len(), self.settings.decimal_places)
            }
        };
        let Some(amounts) = amounts else {
            debug!(%total, "Equal split skipped: amount out of range");
            return None;
        };

        debug!(%total, participants = participants.len(), "Equal split recomputed");
        Some(EqualSplit {
            payer,
            shares: zip_shares(&participants, amounts),
        })
    }

    /// Splits `total` by per-participant percentages.
    ///
    /// Returns `None` when no participant is given or when a share would
    /// overflow `Decimal`.
    #[must_use]
    pub fn percentage_shares(
        &self,
        total: Decimal,
        percentages: &[(UserId, Decimal)],
    ) -> Option<Vec<ParticipantShare>> {
        if percentages.is_empty() {
            return None;
        }

        let (ids, pcts): (Vec<UserId>, Vec<Decimal>) = percentages.iter().copied().unzip();
        let amounts = match self.settings.remainder {
            RemainderPolicy::None => pcts
                .iter()
                .map(|pct| allocation::percent_of(total, *pct))
                .collect::<Option<Vec<_>>>(),
            RemainderPolicy::LargestRemainder => {
                allocation::allocate_by_percentages(total, &pcts, self.settings.decimal_places)
            }
        };
        let Some(amounts) = amounts else {
            debug!(%total, "Percentage split skipped: amount out of range");
            return None;
        };

        Some(zip_shares(&ids, amounts))
    }
}

/// Splits `total` equally with the default settings (no remainder handling).
#[must_use]
pub fn recompute_equal_shares(
    total: Decimal,
    participant_ids: &[UserId],
    payer: UserId,
) -> Option<EqualSplit> {
    SplitCalculator::default().equal_shares(total, participant_ids, payer)
}

/// Splits `total` by percentages with the default settings.
#[must_use]
pub fn recompute_percentage_shares(
    total: Decimal,
    percentages: &[(UserId, Decimal)],
) -> Option<Vec<ParticipantShare>> {
    SplitCalculator::default().percentage_shares(total, percentages)
}

fn distinct(ids: &[UserId]) -> Vec<UserId> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(id) {
            seen.push(*id);
        }
    }
    seen
}

fn zip_shares(ids: &[UserId], amounts: Vec<Decimal>) -> Vec<ParticipantShare> {
    ids.iter()
        .zip(amounts)
        .map(|(id, amount)| ParticipantShare::new(*id, amount))
        .collect()
}
