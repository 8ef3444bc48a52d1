//! Production task records, lifecycle rules, and the task store.

use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::core::error::{Entity, FloorError};

/// Status of a production task.
///
/// The lifecycle is monotonic: `Pending -> InProgress -> Completed`. A
/// non-terminal task may be "re-set" to its current status (a no-op), but
/// never moves backward and never skips `InProgress`. `Completed` accepts no
/// further transition at all, repeats included: of two racing completes,
/// the second observes the terminal state and fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created, not yet picked up.
    Pending,
    /// Being worked by a team.
    InProgress,
    /// Finished; terminal.
    Completed,
}

impl TaskStatus {
    /// Wire/display name, matching the serde encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Whether the lifecycle permits moving from `self` to `next`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        (self == next && !self.is_terminal())
            || matches!(
                (self, next),
                (Self::Pending, Self::InProgress) | (Self::InProgress, Self::Completed)
            )
    }

    /// Whether this status accepts no further lifecycle changes.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority used for task ordering on team boards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Background work.
    Low,
    /// Default.
    Medium,
    /// Ahead of the usual flow.
    High,
    /// Jump the board.
    Urgent,
}

impl TaskPriority {
    /// Wire/display name, matching the serde encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A production task on a team's board.
///
/// `cpu_type` and `components` are enriched once from the referenced order at
/// creation time and never re-joined afterwards; `clear_order_link` resets
/// all three order-derived fields together.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: Uuid,
    /// Owning team; immutable after creation.
    pub team_id: String,
    /// Referenced customer order; empty when unlinked.
    pub order_id: String,
    /// CPU type resolved from the order at creation; empty when unresolved.
    pub cpu_type: String,
    /// Component list resolved from the order at creation.
    pub components: Vec<String>,
    /// Board ordering hint.
    pub priority: TaskPriority,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Member name currently assigned, if any.
    pub assigned_member: Option<String>,
    /// Planner's effort estimate.
    pub estimated_hours: f64,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Creation timestamp in milliseconds since epoch.
    pub created_at_ms: u64,
}

/// Caller-supplied fields for creating a task.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NewTask {
    /// Team the task belongs to; must be a registered resource.
    pub team_id: String,
    /// Order to enrich from; unresolvable ids still create the task.
    pub order_id: String,
    /// Board ordering hint.
    pub priority: TaskPriority,
    /// Planner's effort estimate.
    pub estimated_hours: f64,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Shared store of all tasks, keyed by id.
///
/// Mutations go through [`TaskStore::update`], which holds the write lock
/// across the caller's check-and-set closure; concurrent lifecycle changes
/// on one task therefore serialize instead of racing.
#[derive(Debug, Default)]
pub struct TaskStore {
    inner: RwLock<TaskTable>,
}

#[derive(Debug, Default)]
struct TaskTable {
    tasks: HashMap<Uuid, Task>,
    insertion: Vec<Uuid>,
}

impl TaskStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a freshly created task.
    pub(crate) fn insert(&self, task: Task) {
        let mut table = self.inner.write();
        table.insertion.push(task.id);
        table.tasks.insert(task.id, task);
    }

    /// Copy of one task.
    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<Task> {
        self.inner.read().tasks.get(id).cloned()
    }

    /// Apply a fallible mutation to one task under the write lock.
    ///
    /// The closure runs with exclusive access against a working copy that is
    /// committed only on `Ok`, so a failed update leaves the task exactly as
    /// it was. Returns the updated task on success.
    ///
    /// # Errors
    /// Returns [`FloorError::NotFound`] for an unknown id, or whatever the
    /// closure returns.
    pub fn update<F>(&self, id: &Uuid, apply: F) -> Result<Task, FloorError>
    where
        F: FnOnce(&mut Task) -> Result<(), FloorError>,
    {
        let mut table = self.inner.write();
        let task = table.tasks.get_mut(id).ok_or_else(|| FloorError::NotFound {
            entity: Entity::Task,
            id: id.to_string(),
        })?;
        let mut candidate = task.clone();
        apply(&mut candidate)?;
        *task = candidate.clone();
        Ok(candidate)
    }

    /// Tasks for one team, in creation order.
    #[must_use]
    pub fn for_team(&self, team_id: &str) -> Vec<Task> {
        let table = self.inner.read();
        table
            .insertion
            .iter()
            .filter_map(|id| table.tasks.get(id))
            .filter(|task| task.team_id == team_id)
            .cloned()
            .collect()
    }

    /// Every task, in creation order.
    #[must_use]
    pub fn all(&self) -> Vec<Task> {
        let table = self.inner.read();
        table
            .insertion
            .iter()
            .filter_map(|id| table.tasks.get(id))
            .cloned()
            .collect()
    }

    /// Number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().tasks.len()
    }

    /// Whether no task exists yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().tasks.is_empty()
    }
}
