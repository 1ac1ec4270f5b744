//! The task store: the authoritative in-memory collection.
//!
//! Holds tasks in insertion order plus a nullable editing cursor, enforces
//! the validation and identity invariants, and persists the full collection
//! through the [`Storage`] adapter after every successful mutation. Reads
//! hand out snapshots only; callers re-query after mutating.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::storage::Storage;
use crate::task::{Task, TaskDraft};

/// Validation policy applied by the store, derived from configuration
#[derive(Debug, Clone)]
pub struct StorePolicy {
    /// Refuse a create/update whose title matches an existing task
    /// (case-insensitive)
    pub unique_titles: bool,
    /// When non-empty, subjects must come from this set
    pub allowed_subjects: Vec<String>,
}

impl Default for StorePolicy {
    fn default() -> Self {
        Self {
            unique_titles: true,
            allowed_subjects: Vec::new(),
        }
    }
}

/// Authoritative store for the task collection
#[derive(Debug)]
pub struct TaskStore {
    storage: Storage,
    policy: StorePolicy,
    tasks: Vec<Task>,
    editing: Option<String>,
}

impl TaskStore {
    /// Open the store, loading whatever the storage adapter has persisted
    pub fn open(storage: Storage, policy: StorePolicy) -> Self {
        let tasks = storage.load();
        Self {
            storage,
            policy,
            tasks,
            editing: None,
        }
    }

    /// Read-only snapshot of the collection in insertion order
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by exact id
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Resolve an exact id or unique id prefix to a full id
    pub fn resolve_id(&self, prefix: &str) -> Result<String> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(Error::InvalidArgument("empty task id".to_string()));
        }

        if let Some(task) = self.get(prefix) {
            return Ok(task.id.clone());
        }

        let mut matches = self
            .tasks
            .iter()
            .filter(|task| task.id.starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Ok(task.id.clone()),
            (Some(_), Some(_)) => Err(Error::AmbiguousId(prefix.to_string())),
            (None, _) => Err(Error::TaskNotFound(prefix.to_string())),
        }
    }

    /// Validate a draft, create the task, append it, and persist.
    ///
    /// Clears the editing cursor on success. The collection is untouched on
    /// any validation failure.
    pub fn create(&mut self, draft: &TaskDraft) -> Result<Task> {
        let due_date = self.validate(draft, None)?;
        let mut task = Task::from_draft(draft, due_date);

        // id uniqueness is a hard invariant, not just a property of v4
        while self.get(&task.id).is_some() {
            task.id = crate::task::generate_id();
        }

        self.tasks.push(task.clone());
        self.persist()?;
        self.editing = None;
        Ok(task)
    }

    /// Replace a task's mutable fields (title, subject, due date) in place
    pub fn update(&mut self, id: &str, draft: &TaskDraft) -> Result<Task> {
        let due_date = self.validate(draft, Some(id))?;
        let index = self.index_of(id)?;

        {
            let task = &mut self.tasks[index];
            task.title = draft.title.trim().to_string();
            task.subject = draft.subject.trim().to_string();
            task.due_date = due_date;
        }

        self.persist()?;
        self.editing = None;
        Ok(self.tasks[index].clone())
    }

    /// Flip a task's completed flag
    pub fn toggle_completed(&mut self, id: &str) -> Result<Task> {
        let index = self.index_of(id)?;
        self.tasks[index].completed = !self.tasks[index].completed;
        self.persist()?;
        Ok(self.tasks[index].clone())
    }

    /// Remove a task from the collection.
    ///
    /// Any user confirmation happens in the caller; the store deletes
    /// unconditionally.
    pub fn delete(&mut self, id: &str) -> Result<Task> {
        let index = self.index_of(id)?;
        let removed = self.tasks.remove(index);
        self.persist()?;
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        Ok(removed)
    }

    /// Mark a task as being edited and return it
    pub fn begin_edit(&mut self, id: &str) -> Result<&Task> {
        let index = self.index_of(id)?;
        self.editing = Some(self.tasks[index].id.clone());
        Ok(&self.tasks[index])
    }

    /// Id of the task currently being edited, if any
    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))
    }

    fn validate(&self, draft: &TaskDraft, exclude_id: Option<&str>) -> Result<NaiveDate> {
        let due_date = draft.validate()?;

        let subject = draft.subject.trim();
        if !self.policy.allowed_subjects.is_empty()
            && !self
                .policy
                .allowed_subjects
                .iter()
                .any(|allowed| allowed == subject)
        {
            return Err(Error::UnknownSubject {
                subject: subject.to_string(),
                allowed: self.policy.allowed_subjects.clone(),
            });
        }

        if self.policy.unique_titles {
            let title = draft.title.trim().to_lowercase();
            let duplicate = self.tasks.iter().any(|task| {
                exclude_id != Some(task.id.as_str()) && task.title.to_lowercase() == title
            });
            if duplicate {
                return Err(Error::DuplicateTitle(draft.title.trim().to_string()));
            }
        }

        Ok(due_date)
    }

    fn persist(&self) -> Result<()> {
        self.storage.save(&self.tasks)
    }
}
