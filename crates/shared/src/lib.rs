//! Shared types, errors, and configuration for Tally.
//!
//! This crate provides common types used across all other crates:
//! - Money parsing and currency formatting with decimal precision
//! - Typed IDs for type-safe entity references
//! - Paged result wrappers
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DisplaySettings, RemainderPolicy, ShareSumCheck, SplitSettings};
pub use error::{AppError, AppResult};
