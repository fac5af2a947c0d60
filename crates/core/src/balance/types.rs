//! Balance record types supplied by the data layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{parse_amount_lenient, BalanceEntryId, GroupId, UserId};
use tracing::warn;

/// "`debtor_user_id` owes `creditor_user_id` `amount` within `group_id`."
///
/// The amount is kept as the stored decimal string. A positive amount always
/// flows debtor to creditor; direction is encoded by the two ids, not the sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedBalanceEntry {
    /// Entry id.
    pub id: BalanceEntryId,
    /// The user who is owed.
    #[serde(alias = "creditUserRelated")]
    pub creditor_user_id: UserId,
    /// The user who owes.
    #[serde(alias = "debtUserRelated")]
    pub debtor_user_id: UserId,
    /// Stored decimal string.
    #[serde(default)]
    pub amount: Option<String>,
    /// Group the debt belongs to.
    pub group_id: GroupId,
}

impl SignedBalanceEntry {
    /// Parsed amount; malformed or missing amounts count as zero.
    #[must_use]
    pub fn amount_value(&self) -> Decimal {
        amount_or_zero(self.amount.as_deref(), "balance_entry", self.id.into_inner())
    }
}

/// A plain credit or debt record carrying only an amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountRecord {
    /// Stored decimal string.
    #[serde(default)]
    pub amount: Option<String>,
}

impl AmountRecord {
    /// Creates a record from a stored amount string.
    #[must_use]
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            amount: Some(amount.into()),
        }
    }

    /// Parsed amount; malformed or missing amounts count as zero.
    #[must_use]
    pub fn amount_value(&self) -> Decimal {
        amount_or_zero(self.amount.as_deref(), "amount_record", 0)
    }
}

fn amount_or_zero(raw: Option<&str>, record: &'static str, id: i64) -> Decimal {
    match parse_amount_lenient(raw) {
        Some(amount) => amount,
        None => {
            if raw.is_some_and(|s| !s.trim().is_empty()) {
                warn!(record, id, raw = ?raw, "Malformed amount treated as zero");
            }
            Decimal::ZERO
        }
    }
}
