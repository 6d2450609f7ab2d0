mod member;
mod project;
mod settings;
mod task;

pub use member::{Member, MemberUpdate};
pub use project::{Project, ProjectDraft};
pub use settings::{Settings, SettingsUpdate};
pub use task::{priority, status, Task, TaskDraft, TaskUpdate};

use serde::{Deserialize, Deserializer};

/// Deserialize a missing or `null` field as its default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Apply a patch to a required field
pub(crate) fn patch<T>(field: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *field = v;
    }
}

/// Apply a patch to an optional field; `Some(None)` clears it
pub(crate) fn patch_opt<T>(field: &mut Option<T>, value: Option<Option<T>>) {
    if let Some(v) = value {
        *field = v;
    }
}
