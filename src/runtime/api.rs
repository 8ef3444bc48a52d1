//! Command-facing request/response models over a built floor.

use std::sync::Arc;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::builders::{ProductionFloor, build_floor};
use crate::config::FloorConfig;
use crate::core::{
    AppResult, CapacityResource, CpuProfile, FloorError, NewTask, OrderDirectory, Task,
    TaskPriority, TaskStatus, Team, TeamMember,
};

/// Task creation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    /// Team the task is for.
    pub team_id: String,
    /// Referenced order; empty creates an unlinked task.
    #[serde(default)]
    pub order_id: String,
    /// Board ordering hint.
    pub priority: TaskPriority,
    /// Planner's effort estimate.
    pub estimated_hours: f64,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Status-change payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// Task to move.
    pub task_id: Uuid,
    /// Requested status.
    pub status: TaskStatus,
}

/// Assignment payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignRequest {
    /// Task to assign.
    pub task_id: Uuid,
    /// Member name to assign.
    pub member: String,
}

/// Roster addition payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemberRequest {
    /// Team receiving the member.
    pub team_id: String,
    /// Member display name.
    pub name: String,
    /// Member email; unique within the team.
    pub email: String,
}

/// Machine-readable command failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    /// Stable error kind (`not_found`, `invalid_transition`, ...).
    pub kind: String,
    /// Human-readable message.
    pub message: String,
}

impl From<FloorError> for CommandError {
    fn from(err: FloorError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
}

/// Create a task from an order reference.
///
/// # Errors
/// `not_found` when the team is unknown.
pub fn create_task(
    floor: &ProductionFloor,
    req: CreateTaskRequest,
    now_ms: u64,
) -> Result<Task, CommandError> {
    floor
        .orchestrator()
        .create_task(
            NewTask {
                team_id: req.team_id,
                order_id: req.order_id,
                priority: req.priority,
                estimated_hours: req.estimated_hours,
                notes: req.notes,
            },
            now_ms,
        )
        .map_err(Into::into)
}

/// Move a task to a new lifecycle status.
///
/// # Errors
/// `not_found` for an unknown task, `invalid_transition` for a forbidden
/// move.
pub fn transition_task(
    floor: &ProductionFloor,
    req: &TransitionRequest,
) -> Result<Task, CommandError> {
    floor
        .orchestrator()
        .transition(&req.task_id, req.status)
        .map_err(Into::into)
}

/// Assign a member to a task.
///
/// # Errors
/// `not_found` for an unknown task, `invalid_transition` when the task is
/// completed.
pub fn assign_task(floor: &ProductionFloor, req: &AssignRequest) -> Result<Task, CommandError> {
    floor
        .orchestrator()
        .assign(&req.task_id, &req.member)
        .map_err(Into::into)
}

/// Reset a task's order-derived fields.
///
/// # Errors
/// `not_found` for an unknown task.
pub fn clear_order_link(floor: &ProductionFloor, task_id: &Uuid) -> Result<Task, CommandError> {
    floor
        .orchestrator()
        .clear_order_link(task_id)
        .map_err(Into::into)
}

/// Add a member to a team's roster.
///
/// # Errors
/// `not_found` for an unknown team, `duplicate_member` on an email
/// collision.
pub fn add_member(floor: &ProductionFloor, req: AddMemberRequest) -> Result<Team, CommandError> {
    floor
        .add_member(&req.team_id, TeamMember::new(req.name, req.email))
        .map_err(Into::into)
}

/// Current fleet state, in registration order.
#[must_use]
pub fn list_resources(floor: &ProductionFloor) -> Vec<CapacityResource> {
    floor.resources().snapshot()
}

/// Tasks on one team's board, in creation order.
///
/// # Errors
/// `not_found` for an unknown team.
pub fn team_tasks(floor: &ProductionFloor, team_id: &str) -> Result<Vec<Task>, CommandError> {
    floor
        .orchestrator()
        .tasks_for_team(team_id)
        .map_err(Into::into)
}

/// Catalog entry for a CPU type.
#[must_use]
pub fn cpu_profile(floor: &ProductionFloor, cpu_type: &str) -> Option<CpuProfile> {
    floor.orchestrator().cpu_profile(cpu_type)
}

/// Return a health payload.
#[must_use]
pub const fn health() -> Health {
    Health { ok: true }
}

/// Parse config JSON and build a floor over the given order directory.
///
/// # Errors
/// Fails on malformed or invalid configuration, with context attached.
pub fn floor_from_json(json: &str, orders: Arc<dyn OrderDirectory>) -> AppResult<ProductionFloor> {
    let cfg = FloorConfig::from_json_str(json).context("parsing floor configuration")?;
    let floor = build_floor(cfg, orders).context("building production floor")?;
    Ok(floor)
}
