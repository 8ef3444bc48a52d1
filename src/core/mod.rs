//! Core domain: capacity resources, fleet metrics, tasks, and rosters.

pub mod error;
pub mod resource;
pub mod variance;
pub mod engine;
pub mod metrics;
pub mod task;
pub mod orchestrator;
pub mod roster;
pub mod events;

pub use error::{AppResult, Entity, FloorError};
pub use resource::{CapacityResource, ResourceStatus, ResourceStore, UtilizationTrend};
pub use variance::{
    MAX_AVAILABILITY_DELAY_MS, ScriptedVariance, SimulatedVariance, VarianceSource,
};
pub use engine::CapacityEngine;
pub use metrics::FleetMetrics;
pub use task::{NewTask, Task, TaskPriority, TaskStatus, TaskStore};
pub use orchestrator::{CpuProfile, OrderDirectory, OrderRecord, TaskOrchestrator};
pub use roster::{RosterStore, Team, TeamMember};
pub use events::{
    EventSink, FloorEvent, FloorEventKind, InMemoryEventSink, SharedEventSink, build_event,
};
