//! Group draft validation.

use serde::{Deserialize, Serialize};
use tally_shared::types::UserId;
use thiserror::Error;
use tracing::debug;

use crate::validation::ValidationErrors;

/// Minimum group name length, in characters.
pub const MIN_NAME_CHARS: usize = 3;

/// Minimum number of members in a group.
pub const MIN_MEMBERS: usize = 2;

/// A proposed group as collected from the creation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDraft {
    /// Group name.
    pub name: String,
    /// Invited members, creator included.
    #[serde(default)]
    pub member_ids: Vec<UserId>,
}

/// A group that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedGroup {
    /// Group name.
    pub name: String,
    /// Distinct members in input order.
    pub member_ids: Vec<UserId>,
}

/// Draft field a violation is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupField {
    /// The group name.
    Name,
    /// The member list.
    Members,
}

impl std::fmt::Display for GroupField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => f.pad("name"),
            Self::Members => f.pad("memberIds"),
        }
    }
}

/// Rules a group draft can violate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupErrorKind {
    /// Name is shorter than the minimum length.
    #[error("Group name must be at least {min} characters")]
    NameTooShort {
        /// Minimum number of characters.
        min: usize,
    },

    /// Not enough members to share expenses.
    #[error("A group needs at least {min} members, got {actual}")]
    InsufficientMembers {
        /// Minimum member count.
        min: usize,
        /// Distinct members present.
        actual: usize,
    },

    /// The same user is listed twice.
    #[error("User {0} is listed more than once")]
    DuplicateMember(UserId),
}

impl GroupErrorKind {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NameTooShort { .. } => "NAME_TOO_SHORT",
            Self::InsufficientMembers { .. } => "INSUFFICIENT_MEMBERS",
            Self::DuplicateMember(_) => "DUPLICATE_MEMBER",
        }
    }
}

/// All violations found in one group draft.
pub type GroupValidationErrors = ValidationErrors<GroupField, GroupErrorKind>;

/// Validates a group draft, reporting every violation.
///
/// # Errors
///
/// Returns every violated rule if the draft is not acceptable.
pub fn validate_group(draft: &GroupDraft) -> Result<ValidatedGroup, GroupValidationErrors> {
    let mut errors = GroupValidationErrors::new();

    if draft.name.chars().count() < MIN_NAME_CHARS {
        errors.push(GroupField::Name, GroupErrorKind::NameTooShort { min: MIN_NAME_CHARS });
    }

    let mut members: Vec<UserId> = Vec::with_capacity(draft.member_ids.len());
    for id in &draft.member_ids {
        if members.contains(id) {
            errors.push(GroupField::Members, GroupErrorKind::DuplicateMember(*id));
        } else {
            members.push(*id);
        }
    }

    if members.len() < MIN_MEMBERS {
        errors.push(
            GroupField::Members,
            GroupErrorKind::InsufficientMembers {
                min: MIN_MEMBERS,
                actual: members.len(),
            },
        );
    }

    if !errors.is_empty() {
        debug!(name = %draft.name, violations = errors.len(), "Group draft rejected");
    }

    errors.into_result(|| ValidatedGroup {
        name: draft.name.clone(),
        member_ids: members,
    })
}
