//! The entity store: the single owner of projects, members, tasks and
//! settings.
//!
//! Reads are borrowed snapshots of in-memory state. Writes go through the
//! named operations below, which update memory first and then write every
//! affected collection to the backend. Backend failures never reach the
//! caller; the in-memory state stays authoritative for the session.

mod page;
pub mod seed;

pub use page::{paginate, Page};

use std::collections::HashSet;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::entity::{
    status, Member, MemberUpdate, Project, ProjectDraft, Settings, SettingsUpdate, Task,
    TaskDraft, TaskUpdate,
};
use crate::error::BoardError;
use crate::storage::{
    KeyValueStore, DEFAULT_KEY_PREFIX, MEMBERS_KEY, PROJECTS_KEY, SETTINGS_KEY, TASKS_KEY,
};

const PROJECT_ID_PREFIX: &str = "p";
const TASK_ID_PREFIX: &str = "t";
const ID_SUFFIX_LEN: usize = 7;

/// Fully-qualified backend keys for the four collections
#[derive(Debug, Clone)]
struct Keys {
    projects: String,
    members: String,
    tasks: String,
    settings: String,
}

impl Keys {
    fn with_prefix(prefix: &str) -> Self {
        Self {
            projects: format!("{}{}", prefix, PROJECTS_KEY),
            members: format!("{}{}", prefix, MEMBERS_KEY),
            tasks: format!("{}{}", prefix, TASKS_KEY),
            settings: format!("{}{}", prefix, SETTINGS_KEY),
        }
    }
}

pub struct EntityStore<S: KeyValueStore> {
    backend: S,
    keys: Keys,
    projects: Vec<Project>,
    members: Vec<Member>,
    tasks: Vec<Task>,
    settings: Settings,
}

impl<S: KeyValueStore> EntityStore<S> {
    /// Load state from `backend` under the default `app:` key namespace
    pub fn open(backend: S) -> Self {
        Self::open_with_prefix(backend, DEFAULT_KEY_PREFIX)
    }

    /// Load state from `backend`, falling back to seed data per collection.
    ///
    /// Every collection is written back once after loading, so a fresh
    /// backend ends up holding the seed dataset.
    pub fn open_with_prefix(backend: S, prefix: &str) -> Self {
        let keys = Keys::with_prefix(prefix);

        let projects = load_collection(&backend, &keys.projects, |p: &Project| p.id.clone())
            .unwrap_or_else(seed::projects);
        let members = load_collection(&backend, &keys.members, |m: &Member| m.user_id.clone())
            .unwrap_or_else(seed::members);
        let tasks = load_collection(&backend, &keys.tasks, |t: &Task| t.id.clone())
            .unwrap_or_else(seed::tasks);
        let settings = load_record(&backend, &keys.settings).unwrap_or_else(seed::settings);

        debug!(
            projects = projects.len(),
            members = members.len(),
            tasks = tasks.len(),
            "entity store loaded"
        );

        let mut store = Self {
            backend,
            keys,
            projects,
            members,
            tasks,
            settings,
        };
        store.persist_projects();
        store.persist_members();
        store.persist_tasks();
        store.persist_settings();
        store
    }

    /// End the store's lifetime and hand the backend back
    pub fn close(self) -> S {
        self.backend
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn member(&self, user_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.user_id == user_id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Members listed on the project, in member-collection order
    pub fn project_members(&self, project_id: &str) -> Vec<&Member> {
        match self.project(project_id) {
            Some(project) => self
                .members
                .iter()
                .filter(|m| project.members.contains(&m.user_id))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn project_tasks(&self, project_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.project_id.as_deref() == Some(project_id))
            .collect()
    }

    /// The requested page of tasks, sized by `settings.items_per_page`
    pub fn task_page(&self, page: usize) -> Page<'_, Task> {
        paginate(&self.tasks, page, self.settings.items_per_page as usize)
    }

    /// Create a project with a generated id and return that id
    pub fn add_project(&mut self, draft: ProjectDraft) -> String {
        let id = generate_id(PROJECT_ID_PREFIX);
        self.projects.push(Project::from_draft(id.clone(), draft));
        self.persist_projects();
        id
    }

    /// Remove a project and clear every task and member reference to it
    pub fn delete_project(&mut self, id: &str) {
        self.projects.retain(|p| p.id != id);

        for task in &mut self.tasks {
            if task.project_id.as_deref() == Some(id) {
                task.project_id = None;
            }
        }
        for member in &mut self.members {
            if member.project_id.as_deref() == Some(id) {
                member.project_id = None;
            }
        }

        self.persist_projects();
        self.persist_tasks();
        self.persist_members();
    }

    /// Append a member. A colliding `user_id` is ignored with a warning.
    pub fn add_member(&mut self, member: Member) {
        if self.member(&member.user_id).is_some() {
            warn!(user_id = %member.user_id, "add_member: userId already exists, ignoring");
            return;
        }

        self.members.push(member);
        self.persist_members();
    }

    pub fn update_member(&mut self, user_id: &str, update: MemberUpdate) {
        if let Some(member) = self.members.iter_mut().find(|m| m.user_id == user_id) {
            member.apply(update);
        }
        self.persist_members();
    }

    /// Remove a member and unassign every task it held
    pub fn delete_member(&mut self, user_id: &str) {
        self.members.retain(|m| m.user_id != user_id);

        for task in &mut self.tasks {
            if task.assignee.as_deref() == Some(user_id) {
                task.assignee = None;
            }
        }

        self.persist_members();
        self.persist_tasks();
    }

    /// Create a task with a generated id and return that id
    pub fn add_task(&mut self, draft: TaskDraft) -> String {
        let id = generate_id(TASK_ID_PREFIX);
        self.tasks.push(Task::from_draft(id.clone(), draft));
        self.persist_tasks();
        id
    }

    pub fn update_task(&mut self, id: &str, update: TaskUpdate) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.apply(update);
        }
        self.persist_tasks();
    }

    pub fn delete_task(&mut self, id: &str) {
        self.tasks.retain(|t| t.id != id);
        self.persist_tasks();
    }

    /// Flip a task between completed and pending. Any other status,
    /// or none, counts as not completed.
    pub fn toggle_task_completion(&mut self, id: &str) {
        let next = match self.task(id) {
            Some(task) if task.is_completed() => status::PENDING,
            Some(_) => status::COMPLETED,
            None => return,
        };

        self.update_task(
            id,
            TaskUpdate {
                status: Some(Some(next.to_string())),
                ..Default::default()
            },
        );
    }

    pub fn update_settings(&mut self, update: SettingsUpdate) {
        self.settings.apply(update);
        self.persist_settings();
    }

    fn persist_projects(&mut self) {
        write_json(&mut self.backend, &self.keys.projects, &self.projects);
    }

    fn persist_members(&mut self) {
        write_json(&mut self.backend, &self.keys.members, &self.members);
    }

    fn persist_tasks(&mut self) {
        write_json(&mut self.backend, &self.keys.tasks, &self.tasks);
    }

    fn persist_settings(&mut self) {
        write_json(&mut self.backend, &self.keys.settings, &self.settings);
    }
}

/// Drop every item whose key was already seen, keeping the first occurrence
pub fn dedup_by_key<T, K, F>(items: Vec<T>, key_of: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key_of(item)))
        .collect()
}

/// `<prefix>_<7 lowercase alphanumerics>`. Not checked against existing ids.
fn generate_id(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}_{}", prefix, &suffix[..ID_SUFFIX_LEN])
}

fn load_raw<S: KeyValueStore>(backend: &S, key: &str) -> Option<String> {
    match backend.get(key) {
        Ok(Some(raw)) if !raw.is_empty() => Some(raw),
        Ok(_) => {
            debug!(key, "nothing stored, using seed data");
            None
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read stored data, using seed data");
            None
        }
    }
}

fn load_collection<S, T, K, F>(backend: &S, key: &str, key_of: F) -> Option<Vec<T>>
where
    S: KeyValueStore,
    T: DeserializeOwned,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let raw = load_raw(backend, key)?;
    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => {
            let loaded = items.len();
            let items = dedup_by_key(items, key_of);
            if items.len() < loaded {
                debug!(key, dropped = loaded - items.len(), "dropped duplicate records");
            }
            Some(items)
        }
        Err(e) => {
            warn!(key, error = %e, "stored collection is malformed, using seed data");
            None
        }
    }
}

fn load_record<S, T>(backend: &S, key: &str) -> Option<T>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let raw = load_raw(backend, key)?;
    match serde_json::from_str(&raw) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(key, error = %e, "stored record is malformed, using seed data");
            None
        }
    }
}

/// Serialize and store `value`. Failures are logged and discarded.
fn write_json<S, T>(backend: &mut S, key: &str, value: &T)
where
    S: KeyValueStore,
    T: Serialize + ?Sized,
{
    let result = serde_json::to_string(value)
        .map_err(BoardError::from)
        .and_then(|json| backend.set(key, &json));

    if let Err(e) = result {
        warn!(key, error = %e, "failed to persist, keeping in-memory state");
    }
}
