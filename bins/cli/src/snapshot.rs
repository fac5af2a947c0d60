//! Snapshot file format read by the CLI.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tally_core::balance::{AmountRecord, SignedBalanceEntry};
use tally_core::expense::ExpenseDraft;
use tally_core::group::GroupDraft;
use tally_shared::types::{flatten_pages, Page, UserId};
use tally_shared::{AppError, AppResult};

/// An expense draft together with who paid it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftInput {
    /// The paying user.
    pub payer_user_id: UserId,
    /// The draft itself.
    #[serde(flatten)]
    pub draft: ExpenseDraft,
}

/// Everything the data layer exported for one user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Display names by user id.
    #[serde(default)]
    pub users: HashMap<UserId, String>,
    /// Expense drafts awaiting validation.
    #[serde(default)]
    pub expenses: Vec<DraftInput>,
    /// Group drafts awaiting validation.
    #[serde(default)]
    pub groups: Vec<GroupDraft>,
    /// Balance entries as fetched, one page at a time.
    #[serde(default)]
    pub balances: Vec<Page<SignedBalanceEntry>>,
    /// Plain credit records.
    #[serde(default)]
    pub credits: Vec<AmountRecord>,
    /// Plain debt records.
    #[serde(default)]
    pub debts: Vec<AmountRecord>,
}

impl Snapshot {
    /// Reads and decodes a snapshot file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Input(format!("{}: {e}", path.display())))?;
        Self::parse(&raw)
    }

    /// Decodes a snapshot from JSON text.
    pub fn parse(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| AppError::Input(e.to_string()))
    }

    /// True if the last exported page says more pages follow.
    pub fn is_truncated(&self) -> bool {
        self.balances.last().is_some_and(Page::has_next)
    }

    /// All balance entries, pages flattened in order.
    pub fn balance_entries(&self) -> Vec<SignedBalanceEntry> {
        flatten_pages(self.balances.iter().cloned())
    }
}
