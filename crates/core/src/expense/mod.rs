//! Expense splitting.
//!
//! This module implements the expense-division engine:
//! - Expense drafts and their validated/submitted forms
//! - Draft validation with field-scoped errors
//! - Equal and percentage share recomputation
//! - The split form reducer
//! - Sign normalization at submission

pub mod allocation;
pub mod error;
pub mod reducer;
pub mod split;
pub mod submission;
pub mod types;
pub mod validation;

#[cfg(test)]
mod split_props;
#[cfg(test)]
mod validation_props;

pub use error::{ExpenseErrorKind, ExpenseField, ExpenseValidationErrors};
pub use reducer::{reduce, FormParticipant, SplitEvent, SplitFormState};
pub use split::{
    recompute_equal_shares, recompute_percentage_shares, EqualSplit, SplitCalculator,
};
pub use submission::normalize_for_submission;
pub use types::{
    DivisionStrategy, ExpenseDraft, ParticipantShare, SubmittedExpense, ValidatedExpense,
};
pub use validation::{validate, ExpenseValidator};
