//! Per-user credit and debt totals.

use rust_decimal::Decimal;
use serde::Serialize;
use tally_shared::types::{format_currency, UserId};
use tally_shared::DisplaySettings;
use tracing::warn;

use super::types::{AmountRecord, SignedBalanceEntry};

/// A user's credit and debt totals, recomputed on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBalanceSummary {
    /// Sum of amounts owed to the user.
    pub total_credit: Decimal,
    /// Sum of amounts the user owes.
    pub total_debt: Decimal,
}

impl UserBalanceSummary {
    /// Sums plain credit and debt records.
    #[must_use]
    pub fn from_records(credits: &[AmountRecord], debts: &[AmountRecord]) -> Self {
        let total = |records: &[AmountRecord], side: &'static str| {
            records
                .iter()
                .enumerate()
                .fold(Decimal::ZERO, |sum, (index, record)| {
                    let index = i64::try_from(index).unwrap_or(i64::MAX);
                    accumulate(sum, record.amount_value(), side, index)
                })
        };
        Self {
            total_credit: total(credits, "credit"),
            total_debt: total(debts, "debt"),
        }
    }

    /// Credit minus debt.
    #[must_use]
    pub fn net(&self) -> Decimal {
        net_balance(self.total_credit, self.total_debt)
    }

    /// Display tone of the net balance.
    #[must_use]
    pub fn tone(&self) -> BalanceTone {
        BalanceTone::of(self.net())
    }
}

/// Sums `entries` where `for_user` is creditor and where they are debtor.
///
/// Order-independent. Malformed amounts count as zero, and an amount that
/// would push a total out of the `Decimal` range is skipped.
#[must_use]
pub fn user_summary(entries: &[SignedBalanceEntry], for_user: UserId) -> UserBalanceSummary {
    entries
        .iter()
        .fold(UserBalanceSummary::default(), |mut summary, entry| {
            let id = entry.id.into_inner();
            if entry.creditor_user_id == for_user {
                summary.total_credit =
                    accumulate(summary.total_credit, entry.amount_value(), "credit", id);
            }
            if entry.debtor_user_id == for_user {
                summary.total_debt =
                    accumulate(summary.total_debt, entry.amount_value(), "debt", id);
            }
            summary
        })
}

fn accumulate(total: Decimal, amount: Decimal, side: &'static str, id: i64) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        warn!(side, id, %amount, "Amount overflows balance total, skipped");
        total
    })
}

/// Credit minus debt, clamped to the `Decimal` range.
#[must_use]
pub fn net_balance(total_credit: Decimal, total_debt: Decimal) -> Decimal {
    total_credit.saturating_sub(total_debt)
}

/// Styling applied to a balance; the sign never appears in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceTone {
    /// Zero or owed money.
    Positive,
    /// Owes money.
    Negative,
}

impl BalanceTone {
    /// Tone for a net amount. Zero is positive.
    #[must_use]
    pub fn of(net: Decimal) -> Self {
        if net < Decimal::ZERO {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

/// Currency texts for a summary header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceDisplay {
    /// Formatted total credit.
    pub credit: String,
    /// Formatted total debt.
    pub debt: String,
    /// Formatted absolute net balance.
    pub net: String,
    /// Styling for the net balance.
    pub tone: BalanceTone,
}

impl BalanceDisplay {
    /// Formats `summary` with the configured symbol and precision.
    #[must_use]
    pub fn new(summary: &UserBalanceSummary, settings: &DisplaySettings) -> Self {
        let fmt =
            |amount| format_currency(amount, &settings.currency_symbol, settings.decimal_places);
        Self {
            credit: fmt(summary.total_credit),
            debt: fmt(summary.total_debt),
            net: fmt(summary.net()),
            tone: summary.tone(),
        }
    }
}
