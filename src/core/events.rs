//! Floor event trail.
//!
//! Orchestrator and scheduler record lifecycle events through an optional
//! sink; the in-memory implementation keeps a bounded ring for dev and test.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::util::clock::now_ms;

/// What happened on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorEventKind {
    /// A task was created.
    TaskCreated,
    /// A task changed status.
    TaskTransitioned,
    /// A task was assigned to a member.
    TaskAssigned,
    /// A task's order-derived fields were reset.
    OrderLinkCleared,
    /// A member joined a team.
    MemberAdded,
    /// A refresh cycle published a fresh snapshot.
    TickCompleted,
    /// A refresh cycle failed and the prior snapshot was retained.
    TickFailed,
}

impl FloorEventKind {
    /// Short action name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskCreated => "task_created",
            Self::TaskTransitioned => "task_transitioned",
            Self::TaskAssigned => "task_assigned",
            Self::OrderLinkCleared => "order_link_cleared",
            Self::MemberAdded => "member_added",
            Self::TickCompleted => "tick_completed",
            Self::TickFailed => "tick_failed",
        }
    }
}

/// One recorded floor event.
#[derive(Debug, Clone)]
pub struct FloorEvent {
    /// What happened.
    pub kind: FloorEventKind,
    /// Team involved, when the event is team-scoped.
    pub team_id: Option<String>,
    /// Task involved, when the event is task-scoped.
    pub task_id: Option<Uuid>,
    /// Additional context (target status, member name, error text).
    pub detail: Option<String>,
    /// Timestamp milliseconds.
    pub recorded_at_ms: u64,
}

/// Event sink abstraction.
pub trait EventSink: Send {
    /// Record a floor event.
    fn record(&mut self, event: FloorEvent);
}

/// Shared, lockable handle to a boxed sink, cloned into each recorder.
pub type SharedEventSink = Arc<Mutex<Box<dyn EventSink>>>;

/// In-memory event sink for testing and dev.
///
/// Clones share one buffer, so a test can keep a handle and read back events
/// recorded through the boxed clone it handed to the floor.
#[derive(Clone)]
pub struct InMemoryEventSink {
    inner: Arc<Mutex<EventRing>>,
}

struct EventRing {
    events: VecDeque<FloorEvent>,
    max_events: usize,
}

impl InMemoryEventSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventRing {
                events: VecDeque::with_capacity(max_events),
                max_events,
            })),
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<FloorEvent> {
        self.inner.lock().events.iter().cloned().collect()
    }
}

impl EventSink for InMemoryEventSink {
    fn record(&mut self, event: FloorEvent) {
        let mut ring = self.inner.lock();
        if ring.events.len() >= ring.max_events {
            ring.events.pop_front();
        }
        ring.events.push_back(event);
    }
}

/// Helper to build an event from context, stamped with the current time.
#[must_use]
pub fn build_event(
    kind: FloorEventKind,
    team_id: Option<String>,
    task_id: Option<Uuid>,
    detail: Option<String>,
) -> FloorEvent {
    FloorEvent {
        kind,
        team_id,
        task_id,
        detail,
        recorded_at_ms: now_ms(),
    }
}
