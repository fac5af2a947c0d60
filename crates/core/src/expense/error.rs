//! Expense validation error types.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Draft field a violation is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseField {
    /// The description text.
    Description,
    /// The expense total.
    Amount,
    /// The division strategy.
    DivisionStrategy,
    /// The participant list.
    Participants,
}

impl ExpenseField {
    /// Returns the form field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Amount => "amount",
            Self::DivisionStrategy => "divisionStrategy",
            Self::Participants => "participants",
        }
    }
}

impl std::fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Rules an expense draft can violate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseErrorKind {
    /// Description is shorter than the minimum length.
    #[error("Description must be at least {min} characters")]
    DescriptionTooShort {
        /// Minimum number of characters.
        min: usize,
    },

    /// Amount is below the minimum unit.
    #[error("Amount must be at least {min}")]
    AmountTooLow {
        /// Smallest accepted amount.
        min: Decimal,
    },

    /// Strategy is not one of `EQUALS`, `MANUAL`, `PERCENTAGE`.
    #[error("Invalid division strategy: {0:?}")]
    InvalidDivisionStrategy(String),

    /// Fewer participants than an expense can be split between.
    #[error("At least {min} participants are required, got {actual}")]
    InsufficientParticipants {
        /// Minimum participant count.
        min: usize,
        /// Participants present.
        actual: usize,
    },

    /// Participant shares do not add up to the total.
    #[error("Participant shares sum to {actual}, expected {expected}")]
    ShareSumMismatch {
        /// The expense total.
        expected: Decimal,
        /// Sum of the shares.
        actual: Decimal,
    },
}

impl ExpenseErrorKind {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::DescriptionTooShort { .. } => "DESCRIPTION_TOO_SHORT",
            Self::AmountTooLow { .. } => "AMOUNT_TOO_LOW",
            Self::InvalidDivisionStrategy(_) => "INVALID_DIVISION_STRATEGY",
            Self::InsufficientParticipants { .. } => "INSUFFICIENT_PARTICIPANTS",
            Self::ShareSumMismatch { .. } => "SHARE_SUM_MISMATCH",
        }
    }
}

/// All violations found in one expense draft.
pub type ExpenseValidationErrors = ValidationErrors<ExpenseField, ExpenseErrorKind>;
