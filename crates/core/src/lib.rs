//! Core business logic for Tally.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! Every function takes its full input and returns a fresh result, so callers
//! can re-run it on every read.
//!
//! # Modules
//!
//! - `expense` - Expense drafts, split validation, share recomputation and submission
//! - `balance` - Per-user credit/debt totals and per-group settlement lines
//! - `group` - Group draft validation
//! - `validation` - Field-scoped error collection shared by the validators

pub mod balance;
pub mod expense;
pub mod group;
pub mod validation;

pub use validation::{FieldError, ValidationErrors};
