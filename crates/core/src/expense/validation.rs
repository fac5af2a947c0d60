//! Business rule validation for expense drafts.

use std::str::FromStr;

use rust_decimal::Decimal;
use tally_shared::{ShareSumCheck, SplitSettings};
use tracing::debug;

use super::error::{ExpenseErrorKind, ExpenseField, ExpenseValidationErrors};
use super::types::{saturating_share_total, DivisionStrategy, ExpenseDraft, ValidatedExpense};

/// Minimum description length, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 3;

/// Minimum number of participants in a split.
pub const MIN_PARTICIPANTS: usize = 2;

/// Smallest accepted expense amount.
pub const MIN_AMOUNT: Decimal = Decimal::ONE;

/// Validates expense drafts under the configured share sum rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseValidator {
    settings: SplitSettings,
}

impl ExpenseValidator {
    /// Creates a validator with the given settings.
    #[must_use]
    pub const fn new(settings: SplitSettings) -> Self {
        Self { settings }
    }

    /// Validates a draft.
    ///
    /// Every rule is evaluated; the error list holds all violations in rule
    /// order. A share mismatch is reported on the participants field.
    ///
    /// # Errors
    ///
    /// Returns every violated rule if the draft is not acceptable.
    pub fn validate(
        &self,
        draft: &ExpenseDraft,
    ) -> Result<ValidatedExpense, ExpenseValidationErrors> {
        let mut errors = ExpenseValidationErrors::new();

        if draft.description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.push(
                ExpenseField::Description,
                ExpenseErrorKind::DescriptionTooShort {
                    min: MIN_DESCRIPTION_CHARS,
                },
            );
        }

        if draft.amount < MIN_AMOUNT {
            errors.push(
                ExpenseField::Amount,
                ExpenseErrorKind::AmountTooLow { min: MIN_AMOUNT },
            );
        }

        let strategy = DivisionStrategy::from_str(&draft.division_strategy).ok();
        if strategy.is_none() {
            errors.push(
                ExpenseField::DivisionStrategy,
                ExpenseErrorKind::InvalidDivisionStrategy(draft.division_strategy.clone()),
            );
        }

        if draft.participants.len() < MIN_PARTICIPANTS {
            errors.push(
                ExpenseField::Participants,
                ExpenseErrorKind::InsufficientParticipants {
                    min: MIN_PARTICIPANTS,
                    actual: draft.participants.len(),
                },
            );
        }

        let balanced = draft
            .share_total()
            .is_some_and(|share_total| self.shares_balance(share_total, draft.amount));
        if !balanced {
            errors.push(
                ExpenseField::Participants,
                ExpenseErrorKind::ShareSumMismatch {
                    expected: draft.amount,
                    actual: saturating_share_total(&draft.participants),
                },
            );
        }

        match strategy {
            Some(division_strategy) if errors.is_empty() => Ok(ValidatedExpense {
                description: draft.description.clone(),
                amount: draft.amount,
                division_strategy,
                participants: draft.participants.clone(),
            }),
            _ => {
                debug!(
                    description = %draft.description,
                    violations = errors.len(),
                    "Expense draft rejected"
                );
                Err(errors)
            }
        }
    }

    fn shares_balance(&self, share_total: Decimal, amount: Decimal) -> bool {
        match self.settings.share_sum_check {
            ShareSumCheck::Exact => share_total == amount,
            ShareSumCheck::Tolerance => share_total
                .checked_sub(amount)
                .is_some_and(|diff| diff.abs() <= self.settings.tolerance),
        }
    }
}

/// Validates a draft with the default settings (exact share sum).
///
/// # Errors
///
/// Returns every violated rule if the draft is not acceptable.
pub fn validate(draft: &ExpenseDraft) -> Result<ValidatedExpense, ExpenseValidationErrors> {
    ExpenseValidator::default().validate(draft)
}
