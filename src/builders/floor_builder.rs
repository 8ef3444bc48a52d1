//! Builders to construct a production floor from configuration.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::FloorConfig;
use crate::core::{
    CapacityResource, EventSink, FloorError, FloorEventKind, OrderDirectory, ResourceStore,
    RosterStore, SharedEventSink, TaskOrchestrator, TaskStore, Team, TeamMember, build_event,
};
use crate::util::clock::now_ms;

/// A fully wired floor: stores, roster, and orchestrator sharing one state.
///
/// Everything here is synchronous; the refresh scheduler attaches on top in
/// `runtime` and drives the resource store through its own handle.
pub struct ProductionFloor {
    config: FloorConfig,
    resources: Arc<ResourceStore>,
    tasks: Arc<TaskStore>,
    roster: Arc<RosterStore>,
    orchestrator: TaskOrchestrator,
    events: Option<SharedEventSink>,
}

impl std::fmt::Debug for ProductionFloor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductionFloor")
            .field("config", &self.config)
            .field("resources", &self.resources)
            .field("tasks", &self.tasks)
            .field("roster", &self.roster)
            .finish_non_exhaustive()
    }
}

/// Build a floor from configuration using the given order directory.
///
/// Config is validated up front; nothing is registered when validation
/// fails. Teams seed in id order so fleet snapshots list deterministically.
///
/// # Errors
/// Returns [`FloorError::InvalidConfig`] for invalid configuration.
pub fn build_floor(
    cfg: FloorConfig,
    orders: Arc<dyn OrderDirectory>,
) -> Result<ProductionFloor, FloorError> {
    cfg.validate()?;

    let resources = Arc::new(ResourceStore::new());
    let roster = Arc::new(RosterStore::new());
    let now = now_ms();

    let mut team_ids: Vec<&String> = cfg.teams.keys().collect();
    team_ids.sort();
    for id in team_ids {
        let team = &cfg.teams[id];
        resources.register(CapacityResource::new(
            id.clone(),
            team.name.clone(),
            team.daily_capacity,
            team.time_per_unit_minutes,
            team.initial_utilization,
            now,
        )?)?;
        roster.register(Team::new(id.clone(), team.name.clone()))?;
    }

    let tasks = Arc::new(TaskStore::new());
    let orchestrator =
        TaskOrchestrator::new(Arc::clone(&resources), Arc::clone(&tasks), orders);

    tracing::info!("floor built with {} teams", resources.len());
    Ok(ProductionFloor {
        config: cfg,
        resources,
        tasks,
        roster,
        orchestrator,
        events: None,
    })
}

impl ProductionFloor {
    /// Attach an event sink; lifecycle recorders share it from here on.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        let shared: SharedEventSink = Arc::new(Mutex::new(sink));
        self.orchestrator = self.orchestrator.with_event_sink(Arc::clone(&shared));
        self.events = Some(shared);
        self
    }

    /// Configuration the floor was built from.
    #[must_use]
    pub const fn config(&self) -> &FloorConfig {
        &self.config
    }

    /// Shared fleet store.
    #[must_use]
    pub const fn resources(&self) -> &Arc<ResourceStore> {
        &self.resources
    }

    /// Shared task store.
    #[must_use]
    pub const fn tasks(&self) -> &Arc<TaskStore> {
        &self.tasks
    }

    /// Shared roster store.
    #[must_use]
    pub const fn roster(&self) -> &Arc<RosterStore> {
        &self.roster
    }

    /// Task orchestrator bound to this floor's stores.
    #[must_use]
    pub const fn orchestrator(&self) -> &TaskOrchestrator {
        &self.orchestrator
    }

    /// Event sink shared with the floor's recorders, if one is attached.
    #[must_use]
    pub fn event_sink(&self) -> Option<SharedEventSink> {
        self.events.clone()
    }

    /// Add a member to a team's roster.
    ///
    /// # Errors
    /// Returns [`FloorError::NotFound`] for an unknown team and
    /// [`FloorError::DuplicateMember`] on an email collision.
    pub fn add_member(&self, team_id: &str, member: TeamMember) -> Result<Team, FloorError> {
        let team = self.roster.add_member(team_id, member)?;
        tracing::info!("member added to team {}", team_id);
        if let Some(sink) = &self.events {
            sink.lock().record(build_event(
                FloorEventKind::MemberAdded,
                Some(team_id.to_string()),
                None,
                None,
            ));
        }
        Ok(team)
    }
}
