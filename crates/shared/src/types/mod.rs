//! Common types used across the workspace.

pub mod id;
pub mod money;
pub mod pagination;

pub use id::*;
pub use money::{format_currency, parse_amount_lenient};
pub use pagination::{flatten_pages, Page, PageMeta};
