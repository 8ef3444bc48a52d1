//! Runtime adapters and the command/API surface.

use std::future::Future;

pub mod api;
#[cfg(feature = "tokio-runtime")]
pub mod scheduler;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_spawner;

/// Abstraction for spawning the refresh loop on an async runtime.
pub trait Spawn {
    /// Spawn an async task that returns a future.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

pub use api::{
    AddMemberRequest, AssignRequest, CommandError, CreateTaskRequest, Health, TransitionRequest,
};
#[cfg(feature = "tokio-runtime")]
pub use scheduler::{FloorHandle, FloorSnapshot, RefreshScheduler, SchedulerStats, TickCounters};
#[cfg(feature = "tokio-runtime")]
pub use tokio_spawner::TokioSpawner;
