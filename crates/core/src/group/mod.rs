//! Expense-sharing groups.

pub mod validation;

pub use validation::{
    validate_group, GroupDraft, GroupErrorKind, GroupField, GroupValidationErrors, ValidatedGroup,
};
