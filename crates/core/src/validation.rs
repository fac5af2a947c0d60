//! Field-scoped validation error collection.
//!
//! Validators evaluate every rule and report all violations in one pass, each
//! tagged with the input field it belongs to so a form can render it inline.

use std::fmt;

/// A single violation attached to an input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError<F, K> {
    /// The offending field.
    pub field: F,
    /// What is wrong with it.
    pub kind: K,
}

impl<F: fmt::Display, K: fmt::Display> fmt::Display for FieldError<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// Every violation found while validating one input, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors<F, K> {
    errors: Vec<FieldError<F, K>>,
}

impl<F, K> Default for ValidationErrors<F, K> {
    fn default() -> Self {
        Self { errors: Vec::new() }
    }
}

impl<F, K> ValidationErrors<F, K> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation.
    pub fn push(&mut self, field: F, kind: K) {
        self.errors.push(FieldError { field, kind });
    }

    /// Returns true if no violation was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over the violations in the order they were found.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError<F, K>> {
        self.errors.iter()
    }

    /// Iterates over the kinds of all violations.
    pub fn kinds(&self) -> impl Iterator<Item = &K> {
        self.errors.iter().map(|e| &e.kind)
    }

    /// Iterates over the violations attached to `field`.
    pub fn for_field<'a>(&'a self, field: &'a F) -> impl Iterator<Item = &'a K> + 'a
    where
        F: PartialEq,
    {
        self.errors
            .iter()
            .filter(move |e| &e.field == field)
            .map(|e| &e.kind)
    }

    /// Returns `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the collected violations if there is at least one.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.errors.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl<'a, F, K> IntoIterator for &'a ValidationErrors<F, K> {
    type Item = &'a FieldError<F, K>;
    type IntoIter = std::slice::Iter<'a, FieldError<F, K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl<F, K> IntoIterator for ValidationErrors<F, K> {
    type Item = FieldError<F, K>;
    type IntoIter = std::vec::IntoIter<FieldError<F, K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<F: fmt::Display, K: fmt::Display> fmt::Display for ValidationErrors<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl<F, K> std::error::Error for ValidationErrors<F, K>
where
    F: fmt::Debug + fmt::Display,
    K: fmt::Debug + fmt::Display,
{
}
