//! Error types for floor operations.

use thiserror::Error;

use super::task::TaskStatus;

/// Entity kinds that lookups can fail on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// A team / capacity resource.
    Team,
    /// A production task.
    Task,
}

impl Entity {
    /// Lowercase noun used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Task => "task",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by floor components.
#[derive(Debug, Error)]
pub enum FloorError {
    /// A referenced team or task does not exist.
    #[error("{entity} `{id}` not found")]
    NotFound {
        /// Kind of entity that was looked up.
        entity: Entity,
        /// Identifier the caller supplied.
        id: String,
    },
    /// A task-status change outside the permitted lifecycle.
    #[error("invalid transition from `{from}` to `{to}`")]
    InvalidTransition {
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status the caller requested.
        to: TaskStatus,
    },
    /// A completed task rejects further mutation.
    #[error("task `{id}` is completed and can no longer be modified")]
    TerminalTask {
        /// Identifier of the completed task.
        id: String,
    },
    /// A member with the same email already exists in the team.
    #[error("team `{team_id}` already has a member with email `{email}`")]
    DuplicateMember {
        /// Team the member was being added to.
        team_id: String,
        /// Email that collided.
        email: String,
    },
    /// Fleet-wide aggregation over zero registered resources.
    #[error("no capacity resources registered")]
    EmptyFleet,
    /// A refresh cycle failed; the previous snapshot remains current.
    #[error("tick failed: {0}")]
    TickFailure(String),
    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl FloorError {
    /// Stable machine-readable kind, used by the command surface.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::InvalidTransition { .. } | Self::TerminalTask { .. } => "invalid_transition",
            Self::DuplicateMember { .. } => "duplicate_member",
            Self::EmptyFleet => "empty_fleet",
            Self::TickFailure(_) => "tick_failure",
            Self::InvalidConfig(_) => "invalid_config",
        }
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
