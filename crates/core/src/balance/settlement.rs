//! Per-group "who owes whom" lines.

use std::borrow::Cow;
use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tally_shared::types::{format_currency, GroupId, UserId};
use tally_shared::DisplaySettings;

use super::types::SignedBalanceEntry;

/// Text shown when nothing is owed in a group.
pub const SETTLED_UP: &str = "Settled up";

/// Resolves user ids to display names.
pub trait UserDirectory {
    /// Returns the display name of `user_id`, if known.
    fn display_name(&self, user_id: UserId) -> Option<&str>;

    /// Display name with a fallback for unknown users.
    fn name_or_fallback(&self, user_id: UserId) -> Cow<'_, str> {
        self.display_name(user_id)
            .map_or_else(|| Cow::Owned(format!("User {user_id}")), Cow::Borrowed)
    }
}

impl UserDirectory for HashMap<UserId, String> {
    fn display_name(&self, user_id: UserId) -> Option<&str> {
        self.get(&user_id).map(String::as_str)
    }
}

/// One display line of a group's settlement status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SettlementLine {
    /// Nothing is owed in either direction.
    SettledUp,
    /// The viewing user owes `creditor`.
    YouOwe {
        /// Who is owed.
        creditor: UserId,
        /// Amount owed.
        amount: Decimal,
    },
    /// `debtor` owes the viewing user.
    OwesYou {
        /// Who owes.
        debtor: UserId,
        /// Amount owed.
        amount: Decimal,
    },
}

impl SettlementLine {
    /// Amount carried by the line; `None` when settled.
    #[must_use]
    pub const fn amount(&self) -> Option<Decimal> {
        match self {
            Self::SettledUp => None,
            Self::YouOwe { amount, .. } | Self::OwesYou { amount, .. } => Some(*amount),
        }
    }

    /// Renders the line, e.g. `"You owe Alice"` or `"Bob owes you"`.
    #[must_use]
    pub fn render(&self, directory: &impl UserDirectory) -> String {
        match self {
            Self::SettledUp => SETTLED_UP.to_string(),
            Self::YouOwe { creditor, .. } => {
                format!("You owe {}", directory.name_or_fallback(*creditor))
            }
            Self::OwesYou { debtor, .. } => {
                format!("{} owes you", directory.name_or_fallback(*debtor))
            }
        }
    }

    /// Renders the line followed by its formatted amount, e.g. `"You owe Alice $50.00"`.
    #[must_use]
    pub fn render_with_amount(
        &self,
        directory: &impl UserDirectory,
        settings: &DisplaySettings,
    ) -> String {
        let text = self.render(directory);
        match self.amount() {
            Some(amount) => format!(
                "{text} {}",
                format_currency(amount, &settings.currency_symbol, settings.decimal_places)
            ),
            None => text,
        }
    }
}

/// Settlement lines for `for_user` over the entries of one group.
///
/// Entries with an amount of zero or less produce nothing. If nothing is left,
/// the result is the single `SettledUp` line. Input order is preserved.
#[must_use]
pub fn group_settlement_lines(
    entries: &[SignedBalanceEntry],
    for_user: UserId,
) -> Vec<SettlementLine> {
    let lines: Vec<SettlementLine> = entries
        .iter()
        .filter_map(|entry| {
            let amount = entry.amount_value();
            if amount <= Decimal::ZERO {
                return None;
            }
            Some(if entry.debtor_user_id == for_user {
                SettlementLine::YouOwe {
                    creditor: entry.creditor_user_id,
                    amount,
                }
            } else {
                SettlementLine::OwesYou {
                    debtor: entry.debtor_user_id,
                    amount,
                }
            })
        })
        .collect();

    if lines.is_empty() {
        vec![SettlementLine::SettledUp]
    } else {
        lines
    }
}

/// Renders `group_settlement_lines` with names from `directory`.
#[must_use]
pub fn render_group_settlement(
    entries: &[SignedBalanceEntry],
    for_user: UserId,
    directory: &impl UserDirectory,
) -> Vec<String> {
    group_settlement_lines(entries, for_user)
        .iter()
        .map(|line| line.render(directory))
        .collect()
}

/// Settlement status of one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSettlement {
    /// The group.
    pub group_id: GroupId,
    /// Lines for the viewing user.
    pub lines: Vec<SettlementLine>,
}

impl GroupSettlement {
    /// Returns true if nothing is owed in the group.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self.lines.as_slice(), [SettlementLine::SettledUp])
    }
}

/// Splits entries by group, in order of first appearance, and computes the
/// settlement lines of each group.
#[must_use]
pub fn settlement_by_group(
    entries: &[SignedBalanceEntry],
    for_user: UserId,
) -> Vec<GroupSettlement> {
    let mut order: Vec<GroupId> = Vec::new();
    let mut by_group: HashMap<GroupId, Vec<SignedBalanceEntry>> = HashMap::new();
    for entry in entries {
        by_group
            .entry(entry.group_id)
            .or_insert_with(|| {
                order.push(entry.group_id);
                Vec::new()
            })
            .push(entry.clone());
    }

    order
        .into_iter()
        .map(|group_id| {
            let group_entries = by_group.remove(&group_id).unwrap_or_default();
            GroupSettlement {
                group_id,
                lines: group_settlement_lines(&group_entries, for_user),
            }
        })
        .collect()
}
