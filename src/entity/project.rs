// src/entity/project.rs
use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Member user ids; the store does not prevent duplicates
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<String>,
}

/// Caller-supplied fields for a new project. The id is always generated.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub members: Option<Vec<String>>,
}

impl ProjectDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Project {
    pub(crate) fn from_draft(id: String, draft: ProjectDraft) -> Self {
        Self {
            id,
            name: draft.name.unwrap_or_default(),
            description: draft.description,
            category: draft.category,
            priority: draft.priority,
            members: draft.members.unwrap_or_default(),
        }
    }
}
