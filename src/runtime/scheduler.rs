//! Periodic refresh scheduler publishing fleet snapshots.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::{Notify, watch};
use tokio::time::MissedTickBehavior;

use crate::builders::ProductionFloor;
use crate::core::{
    CapacityEngine, CapacityResource, FleetMetrics, FloorError, FloorEventKind, ResourceStore,
    SharedEventSink, VarianceSource, build_event,
};
use crate::runtime::Spawn;
use crate::util::clock::now_ms;

/// What subscribers receive after every refresh cycle.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FloorSnapshot {
    /// When this snapshot was published, milliseconds since epoch.
    pub published_at_ms: u64,
    /// Fleet state the cycle produced, or retained when stale.
    pub resources: Vec<CapacityResource>,
    /// Metrics aggregated from `resources`.
    pub metrics: FleetMetrics,
    /// True when the producing cycle failed and this is last-known-good data.
    pub stale: bool,
    /// Render of the failure behind a stale snapshot.
    pub last_error: Option<String>,
}

/// Monotonic cycle counters, shared between the loop and its handles.
#[derive(Debug, Default)]
pub struct TickCounters {
    completed: AtomicU64,
    failed: AtomicU64,
    suppressed: AtomicU64,
}

impl TickCounters {
    fn snapshot(&self, in_flight: bool) -> SchedulerStats {
        SchedulerStats {
            completed_ticks: self.completed.load(Ordering::Relaxed),
            failed_ticks: self.failed.load(Ordering::Relaxed),
            suppressed_ticks: self.suppressed.load(Ordering::Relaxed),
            in_flight,
        }
    }
}

/// Point-in-time view of scheduler activity.
#[derive(Debug, Clone, Default)]
pub struct SchedulerStats {
    /// Cycles that published a fresh snapshot.
    pub completed_ticks: u64,
    /// Cycles that failed and republished last-known-good data.
    pub failed_ticks: u64,
    /// Cycle requests suppressed because one was already in flight.
    pub suppressed_ticks: u64,
    /// Whether a cycle is running right now.
    pub in_flight: bool,
}

/// Drives the update engine on a fixed interval and publishes snapshots.
///
/// One cycle runs the engine over the current fleet, aggregates metrics from
/// the fully assembled output, commits the new fleet to the store, and
/// publishes. A failed cycle publishes the prior data flagged stale instead
/// and never stops the loop. The simulated variance source cannot block, so
/// no per-cycle timeout is imposed here; a telemetry-backed source would
/// bring one and surface it as a cycle failure.
pub struct RefreshScheduler<V> {
    engine: CapacityEngine<V>,
    resources: Arc<ResourceStore>,
    interval: Duration,
    events: Option<SharedEventSink>,
}

impl<V: VarianceSource + 'static> RefreshScheduler<V> {
    /// Scheduler over an explicit store, engine, and cadence.
    pub fn new(engine: CapacityEngine<V>, resources: Arc<ResourceStore>, interval: Duration) -> Self {
        Self {
            engine,
            resources,
            interval,
            events: None,
        }
    }

    /// Scheduler for a built floor, using its configured cadence and sink.
    pub fn for_floor(floor: &ProductionFloor, variance: V) -> Self {
        Self {
            engine: CapacityEngine::new(variance),
            resources: Arc::clone(floor.resources()),
            interval: Duration::from_secs(floor.config().refresh_interval_secs),
            events: floor.event_sink(),
        }
    }

    /// Override the publish cadence.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Attach an event sink for cycle completion/failure records.
    #[must_use]
    pub fn with_event_sink(mut self, events: SharedEventSink) -> Self {
        self.events = Some(events);
        self
    }

    /// Run the first cycle synchronously, then spawn the refresh loop.
    ///
    /// Subscribers obtained from the returned handle immediately observe the
    /// first snapshot; late subscribers always observe the latest one. The
    /// loop stops on [`FloorHandle::shutdown`] or once every receiver is
    /// gone.
    ///
    /// # Errors
    /// Fails fast with the first cycle's error, [`FloorError::EmptyFleet`]
    /// in particular: a floor must register teams before scheduling starts.
    pub fn start<S: Spawn>(mut self, spawner: &S) -> Result<FloorHandle, FloorError> {
        let now = now_ms();
        let (resources, metrics) = run_cycle(&mut self.engine, &self.resources, now)?;
        let first = FloorSnapshot {
            published_at_ms: now,
            resources,
            metrics,
            stale: false,
            last_error: None,
        };
        let (snapshot_tx, snapshot_rx) = watch::channel(first);

        let trigger = Arc::new(Notify::new());
        let shutdown = Arc::new(Notify::new());
        let counters = Arc::new(TickCounters::default());
        let in_flight = Arc::new(AtomicBool::new(false));
        counters.completed.fetch_add(1, Ordering::Relaxed);

        let handle = FloorHandle {
            snapshot_rx,
            trigger: Arc::clone(&trigger),
            shutdown: Arc::clone(&shutdown),
            counters: Arc::clone(&counters),
            in_flight: Arc::clone(&in_flight),
        };

        tracing::info!(
            "refresh scheduler started: {} teams every {:?}",
            self.resources.len(),
            self.interval
        );
        spawner.spawn(run_loop(
            self,
            snapshot_tx,
            trigger,
            shutdown,
            counters,
            in_flight,
        ));
        Ok(handle)
    }
}

/// Cloneable handle to a running scheduler.
#[derive(Debug, Clone)]
pub struct FloorHandle {
    snapshot_rx: watch::Receiver<FloorSnapshot>,
    trigger: Arc<Notify>,
    shutdown: Arc<Notify>,
    counters: Arc<TickCounters>,
    in_flight: Arc<AtomicBool>,
}

impl FloorHandle {
    /// Subscribe to the snapshot stream.
    ///
    /// The receiver starts with the latest snapshot already readable, so a
    /// consumer joining mid-run never waits for the next cycle to render.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FloorSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Copy of the latest published snapshot.
    #[must_use]
    pub fn latest(&self) -> FloorSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Request an immediate refresh cycle.
    ///
    /// Goes through the same in-flight guard as interval ticks; a request
    /// landing mid-cycle is suppressed and counted, not queued.
    pub fn trigger_now(&self) {
        self.trigger.notify_one();
    }

    /// Stop the scheduler loop.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }

    /// Counters snapshot.
    #[must_use]
    pub fn stats(&self) -> SchedulerStats {
        self.counters.snapshot(self.in_flight.load(Ordering::Acquire))
    }
}

/// One full cycle: tick, aggregate, then commit.
///
/// Aggregation runs before the store swap so a failed cycle leaves the store
/// and the published snapshot at the same last-good state.
fn run_cycle<V: VarianceSource>(
    engine: &mut CapacityEngine<V>,
    store: &ResourceStore,
    now_ms: u64,
) -> Result<(Vec<CapacityResource>, FleetMetrics), FloorError> {
    let prior = store.snapshot();
    let next = engine.tick(&prior, now_ms);
    let metrics = FleetMetrics::aggregate(&next, now_ms)?;
    store.replace_all(next.clone());
    Ok((next, metrics))
}

/// Rebuild the previous snapshot as stale, carrying the failure text.
fn degrade(previous: &FloorSnapshot, error: &FloorError, now_ms: u64) -> FloorSnapshot {
    FloorSnapshot {
        published_at_ms: now_ms,
        resources: previous.resources.clone(),
        metrics: previous.metrics.clone(),
        stale: true,
        last_error: Some(error.to_string()),
    }
}

fn record(events: &Option<SharedEventSink>, kind: FloorEventKind, detail: Option<String>) {
    if let Some(sink) = events {
        sink.lock().record(build_event(kind, None, None, detail));
    }
}

async fn run_loop<V: VarianceSource>(
    mut scheduler: RefreshScheduler<V>,
    snapshot_tx: watch::Sender<FloorSnapshot>,
    trigger: Arc<Notify>,
    shutdown: Arc<Notify>,
    counters: Arc<TickCounters>,
    in_flight: Arc<AtomicBool>,
) {
    let mut ticker = tokio::time::interval(scheduler.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // an interval's first tick fires immediately; start() already published
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            () = trigger.notified() => {}
            () = shutdown.notified() => {
                tracing::info!("refresh scheduler stopping");
                break;
            }
        }

        if in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            counters.suppressed.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("cycle already in flight; suppressed");
            continue;
        }

        let now = now_ms();
        let outcome = run_cycle(&mut scheduler.engine, &scheduler.resources, now);
        in_flight.store(false, Ordering::Release);

        let snapshot = match outcome {
            Ok((resources, metrics)) => {
                counters.completed.fetch_add(1, Ordering::Relaxed);
                record(&scheduler.events, FloorEventKind::TickCompleted, None);
                FloorSnapshot {
                    published_at_ms: now,
                    resources,
                    metrics,
                    stale: false,
                    last_error: None,
                }
            }
            Err(inner) => {
                counters.failed.fetch_add(1, Ordering::Relaxed);
                let err = FloorError::TickFailure(inner.to_string());
                tracing::warn!("cycle failed, retaining previous snapshot: {}", err);
                record(&scheduler.events, FloorEventKind::TickFailed, Some(err.to_string()));
                let previous = snapshot_tx.borrow().clone();
                degrade(&previous, &err, now)
            }
        };

        if snapshot_tx.send(snapshot).is_err() {
            tracing::debug!("all snapshot subscribers dropped; stopping");
            break;
        }
    }
}
