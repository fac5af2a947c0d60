//! Balance aggregation.
//!
//! Derives per-user credit/debt totals and per-group settlement lines from the
//! full current set of balance records. Nothing here is cached; callers re-run
//! the reductions whenever new pages of records arrive.

pub mod settlement;
pub mod summary;
pub mod types;

#[cfg(test)]
mod summary_props;

pub use settlement::{
    group_settlement_lines, render_group_settlement, settlement_by_group, GroupSettlement,
    SettlementLine, UserDirectory, SETTLED_UP,
};
pub use summary::{net_balance, user_summary, BalanceDisplay, BalanceTone, UserBalanceSummary};
pub use types::{AmountRecord, SignedBalanceEntry};
