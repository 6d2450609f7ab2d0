// src/entity/task.rs
use serde::{Deserialize, Serialize};

use super::{null_as_default, patch, patch_opt};

/// Conventional status values. The store accepts any string.
pub mod status {
    pub const PENDING: &str = "Pendiente";
    pub const IN_PROGRESS: &str = "En progreso";
    pub const COMPLETED: &str = "Completado";

    pub const ALL: [&str; 3] = [PENDING, IN_PROGRESS, COMPLETED];
}

/// Conventional priority values. The store accepts any string.
pub mod priority {
    pub const LOW: &str = "Baja";
    pub const MEDIUM: &str = "Media";
    pub const HIGH: &str = "Alta";
    pub const URGENT: &str = "Urgente";

    pub const ALL: [&str; 4] = [LOW, MEDIUM, HIGH, URGENT];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Assigned member's user id
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(rename = "dateline", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl Task {
    pub(crate) fn from_draft(id: String, draft: TaskDraft) -> Self {
        Self {
            id,
            description: draft.description.unwrap_or_default(),
            project_id: draft.project_id,
            status: draft.status,
            priority: draft.priority,
            assignee: draft.assignee,
            due_date: draft.due_date,
        }
    }

    pub(crate) fn apply(&mut self, update: TaskUpdate) {
        patch(&mut self.description, update.description);
        patch_opt(&mut self.project_id, update.project_id);
        patch_opt(&mut self.status, update.status);
        patch_opt(&mut self.priority, update.priority);
        patch_opt(&mut self.assignee, update.assignee);
        patch_opt(&mut self.due_date, update.due_date);
    }

    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some(status::COMPLETED)
    }
}

/// Caller-supplied fields for a new task. The id is always generated.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub description: Option<String>,
    pub project_id: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
}

impl TaskDraft {
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }
}

/// Update payload for a task
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub description: Option<String>,
    pub project_id: Option<Option<String>>, // Some(None) to clear, Some(Some(s)) to set
    pub status: Option<Option<String>>,
    pub priority: Option<Option<String>>,
    pub assignee: Option<Option<String>>,
    pub due_date: Option<Option<String>>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.project_id.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
            && self.due_date.is_none()
    }
}
