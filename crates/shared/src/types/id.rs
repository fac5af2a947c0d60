//! Typed IDs for type-safe entity references.
//!
//! Record ids arrive from the data layer as plain integers. Wrapping them keeps a
//! `GroupId` from being passed where a `UserId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from its raw value.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw value.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

typed_id!(UserId, "Unique identifier for a user.");
typed_id!(GroupId, "Unique identifier for an expense-sharing group.");
typed_id!(
    BalanceEntryId,
    "Unique identifier for a directional balance entry between two users."
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_roundtrip_raw() {
        let id = UserId::new(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(UserId::from(42), id);
    }

    #[test]
    fn test_typed_id_display() {
        assert_eq!(GroupId::new(7).to_string(), "7");
    }

    #[test]
    fn test_typed_id_from_str() {
        assert_eq!(UserId::from_str("12").unwrap(), UserId::new(12));
        assert_eq!(UserId::from_str(" 12 ").unwrap(), UserId::new(12));
        assert!(UserId::from_str("abc").is_err());
    }

    #[test]
    fn test_typed_id_serde_transparent() {
        let json = serde_json::to_string(&BalanceEntryId::new(5)).unwrap();
        assert_eq!(json, "5");
        let back: BalanceEntryId = serde_json::from_str("5").unwrap();
        assert_eq!(back, BalanceEntryId::new(5));
    }
}
