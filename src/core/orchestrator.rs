//! Task orchestration over the stores and the order directory.

use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{Entity, FloorError};
use crate::core::events::{build_event, FloorEventKind, SharedEventSink};
use crate::core::resource::ResourceStore;
use crate::core::task::{NewTask, Task, TaskStatus, TaskStore};

/// Order fields consumed when enriching a task.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OrderRecord {
    /// CPU type the order was placed for.
    pub cpu_type: String,
    /// Component specs listed on the order; may be empty.
    pub components: Vec<String>,
}

/// Catalog row describing a CPU type.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CpuProfile {
    /// Marketing name.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

/// Read-only lookup into the external order/CPU catalog.
///
/// The floor never writes through this seam; orders and catalog rows are
/// owned elsewhere and consumed at task creation only.
pub trait OrderDirectory: Send + Sync {
    /// Fields of the referenced order, if it exists.
    fn resolve_order(&self, order_id: &str) -> Option<OrderRecord>;
    /// Catalog entry for a CPU type, if it exists.
    fn cpu_profile(&self, cpu_type: &str) -> Option<CpuProfile>;
}

/// Creates tasks from orders and walks them through their lifecycle.
///
/// Holds shared handles to the stores it mutates; all operations are
/// synchronous and may run concurrently with the refresh scheduler.
pub struct TaskOrchestrator {
    resources: Arc<ResourceStore>,
    tasks: Arc<TaskStore>,
    orders: Arc<dyn OrderDirectory>,
    events: Option<SharedEventSink>,
}

impl TaskOrchestrator {
    /// Orchestrator over the given stores and order directory.
    pub fn new(
        resources: Arc<ResourceStore>,
        tasks: Arc<TaskStore>,
        orders: Arc<dyn OrderDirectory>,
    ) -> Self {
        Self {
            resources,
            tasks,
            orders,
            events: None,
        }
    }

    /// Attach an event sink.
    #[must_use]
    pub fn with_event_sink(mut self, events: SharedEventSink) -> Self {
        self.events = Some(events);
        self
    }

    /// Create a task for a registered team, enriching it from its order.
    ///
    /// Enrichment is best effort: an unresolvable order id (or an order
    /// without component specs) still creates the task, with empty
    /// `cpu_type`/`components`. Only an unknown team fails.
    ///
    /// # Errors
    /// Returns [`FloorError::NotFound`] when `new_task.team_id` is not a
    /// registered resource.
    pub fn create_task(&self, new_task: NewTask, now_ms: u64) -> Result<Task, FloorError> {
        if !self.resources.contains(&new_task.team_id) {
            return Err(FloorError::NotFound {
                entity: Entity::Team,
                id: new_task.team_id,
            });
        }

        let (cpu_type, components) = match self.orders.resolve_order(&new_task.order_id) {
            Some(order) => (order.cpu_type, order.components),
            None => {
                if !new_task.order_id.is_empty() {
                    tracing::debug!(
                        "order {} not found; creating task without enrichment",
                        new_task.order_id
                    );
                }
                (String::new(), Vec::new())
            }
        };

        let task = Task {
            id: Uuid::new_v4(),
            team_id: new_task.team_id,
            order_id: new_task.order_id,
            cpu_type,
            components,
            priority: new_task.priority,
            status: TaskStatus::Pending,
            assigned_member: None,
            estimated_hours: new_task.estimated_hours,
            notes: new_task.notes,
            created_at_ms: now_ms,
        };
        self.tasks.insert(task.clone());
        tracing::info!("task {} created for team {}", task.id, task.team_id);
        self.record(
            FloorEventKind::TaskCreated,
            Some(task.team_id.clone()),
            Some(task.id),
            None,
        );
        Ok(task)
    }

    /// Move a task to a new lifecycle status.
    ///
    /// Permitted moves are `pending -> in_progress`, `in_progress ->
    /// completed`, and the degenerate `X -> X` for non-terminal statuses;
    /// anything else fails and leaves the task unchanged. Concurrent
    /// transitions on one task serialize in the store, so of two racing
    /// completes exactly one wins and the other observes the terminal state.
    ///
    /// # Errors
    /// Returns [`FloorError::NotFound`] for an unknown task and
    /// [`FloorError::InvalidTransition`] for a forbidden move.
    pub fn transition(&self, task_id: &Uuid, next: TaskStatus) -> Result<Task, FloorError> {
        let task = self.tasks.update(task_id, |task| {
            if !task.status.can_transition_to(next) {
                return Err(FloorError::InvalidTransition {
                    from: task.status,
                    to: next,
                });
            }
            task.status = next;
            Ok(())
        })?;
        tracing::info!("task {} moved to {}", task.id, task.status);
        self.record(
            FloorEventKind::TaskTransitioned,
            Some(task.team_id.clone()),
            Some(task.id),
            Some(next.as_str().to_string()),
        );
        Ok(task)
    }

    /// Assign a member to a non-terminal task.
    ///
    /// # Errors
    /// Returns [`FloorError::NotFound`] for an unknown task and
    /// [`FloorError::TerminalTask`] when the task is completed.
    pub fn assign(&self, task_id: &Uuid, member_name: &str) -> Result<Task, FloorError> {
        let task = self.tasks.update(task_id, |task| {
            if task.status.is_terminal() {
                return Err(FloorError::TerminalTask {
                    id: task.id.to_string(),
                });
            }
            task.assigned_member = Some(member_name.to_string());
            Ok(())
        })?;
        self.record(
            FloorEventKind::TaskAssigned,
            Some(task.team_id.clone()),
            Some(task.id),
            Some(member_name.to_string()),
        );
        Ok(task)
    }

    /// Reset a task's order-derived fields, in any status.
    ///
    /// `order_id`, `cpu_type`, and `components` clear together; the rest of
    /// the task is untouched.
    ///
    /// # Errors
    /// Returns [`FloorError::NotFound`] for an unknown task.
    pub fn clear_order_link(&self, task_id: &Uuid) -> Result<Task, FloorError> {
        let task = self.tasks.update(task_id, |task| {
            task.order_id.clear();
            task.cpu_type.clear();
            task.components.clear();
            Ok(())
        })?;
        self.record(
            FloorEventKind::OrderLinkCleared,
            Some(task.team_id.clone()),
            Some(task.id),
            None,
        );
        Ok(task)
    }

    /// Copy of one task.
    ///
    /// # Errors
    /// Returns [`FloorError::NotFound`] for an unknown task.
    pub fn task(&self, task_id: &Uuid) -> Result<Task, FloorError> {
        self.tasks.get(task_id).ok_or_else(|| FloorError::NotFound {
            entity: Entity::Task,
            id: task_id.to_string(),
        })
    }

    /// Tasks on a registered team's board, in creation order.
    ///
    /// # Errors
    /// Returns [`FloorError::NotFound`] for an unknown team.
    pub fn tasks_for_team(&self, team_id: &str) -> Result<Vec<Task>, FloorError> {
        if !self.resources.contains(team_id) {
            return Err(FloorError::NotFound {
                entity: Entity::Team,
                id: team_id.to_string(),
            });
        }
        Ok(self.tasks.for_team(team_id))
    }

    /// Catalog entry for a CPU type, passed through from the directory.
    #[must_use]
    pub fn cpu_profile(&self, cpu_type: &str) -> Option<CpuProfile> {
        self.orders.cpu_profile(cpu_type)
    }

    fn record(
        &self,
        kind: FloorEventKind,
        team_id: Option<String>,
        task_id: Option<Uuid>,
        detail: Option<String>,
    ) {
        if let Some(sink) = &self.events {
            sink.lock().record(build_event(kind, team_id, task_id, detail));
        }
    }
}
