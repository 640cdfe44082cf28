//! In-memory task store: identity assignment, CRUD, and mutation invariants.

use crate::types::{NewTask, Task, TaskPatch};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mutable state behind the store's lock.
///
/// The id index and the insertion-order list are kept separately so that
/// `get_all` ordering is a guaranteed property rather than a side effect of
/// the map's iteration order. The id counter only ever increases; deleting a
/// task never frees its identifier for reuse.
struct Inner {
    tasks: HashMap<String, Task>,
    order: Vec<String>,
    next_id: u64,
}

impl Inner {
    fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }

    fn generate_id(&mut self) -> String {
        let id = format!("task_{}", self.next_id);
        self.next_id += 1;
        id
    }
}

/// Handle to the task store. Cheap to clone; all clones share state.
///
/// Every operation takes the single internal lock, so mutations are atomic
/// with respect to both identifier generation and the task map, and readers
/// never observe a partially applied update. Returned tasks are snapshots;
/// mutating them has no effect on stored state.
#[derive(Clone)]
pub struct TaskStore {
    inner: Arc<Mutex<Inner>>,
}

impl TaskStore {
    /// Create an empty store. Identifiers start at `task_1`.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::new())),
        }
    }

    /// Create a task. String fields are trimmed, `status` defaults to
    /// pending, and both timestamps are set to now. Input validation is the
    /// caller's responsibility.
    pub fn create(&self, input: NewTask) -> Task {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.generate_id();
        let now = Utc::now();
        let task = Task {
            id: id.clone(),
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            status: input.status.unwrap_or_default(),
            category: input.category,
            created_at: now,
            updated_at: now,
        };
        inner.tasks.insert(id.clone(), task.clone());
        inner.order.push(id);
        task
    }

    /// All tasks, in the order they were created. Updates do not re-order.
    pub fn get_all(&self) -> Vec<Task> {
        let inner = self.inner.lock().unwrap();
        inner
            .order
            .iter()
            .filter_map(|id| inner.tasks.get(id))
            .cloned()
            .collect()
    }

    /// Look up a task by id. `None` is a normal negative result.
    pub fn get_by_id(&self, id: &str) -> Option<Task> {
        let inner = self.inner.lock().unwrap();
        inner.tasks.get(id).cloned()
    }

    /// Apply a partial update. Absent fields are left unchanged; `id` and
    /// `created_at` can never be altered. `updated_at` is refreshed on every
    /// successful call, even when the patch changes nothing, and never moves
    /// backwards. Returns `None` if the id is absent.
    pub fn update(&self, id: &str, patch: TaskPatch) -> Option<Task> {
        let mut inner = self.inner.lock().unwrap();
        let task = inner.tasks.get_mut(id)?;
        if let Some(title) = patch.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            task.description = description.trim().to_string();
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(category) = patch.category {
            task.category = Some(category);
        }
        task.updated_at = monotonic_now(task.updated_at);
        Some(task.clone())
    }

    /// Remove a task. Returns whether a task existed to remove.
    pub fn delete(&self, id: &str) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.tasks.remove(id).is_none() {
            return false;
        }
        inner.order.retain(|existing| existing != id);
        true
    }

    /// Number of currently stored tasks.
    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().tasks.len()
    }

    /// Remove all tasks and reset identifier generation to `task_1`.
    /// Intended for test isolation between scenarios.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.tasks.clear();
        inner.order.clear();
        inner.next_id = 1;
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Current time, clamped so `updated_at` never decreases even if the wall
/// clock steps backwards between mutations.
fn monotonic_now(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous)
}
