//! # Shopfloor
//!
//! A capacity-tracking and task-orchestration engine for small production
//! floors.
//!
//! This library models the live status of a factory's teams: each team's
//! utilization is re-read on a fixed cadence, classified against alert
//! thresholds, and aggregated into fleet-wide metrics, while production
//! tasks derived from customer orders move through an explicit lifecycle on
//! per-team boards.
//!
//! ## Core Problem Solved
//!
//! Floor-status dashboards need numbers that are consistent with each other:
//!
//! - **Torn reads**: totals must never mix one team's pre-refresh state with
//!   another's post-refresh state
//! - **Derived fields drifting**: alert status and trend must always match
//!   the utilization they were computed from
//! - **Racing commands**: task boards are mutated while the refresh runs,
//!   and two hands may grab the same task at once
//! - **Degraded sources**: a failed refresh must keep the last good picture
//!   on screen instead of blanking it
//!
//! ## Key Features
//!
//! - **Injectable Variance**: the per-tick readings come from a
//!   [`core::VarianceSource`]; simulation and scripted tests plug in without
//!   touching tick logic
//! - **Whole-Snapshot Publishing**: every cycle publishes one immutable
//!   `(timestamp, resources, metrics)` snapshot over a watch channel; late
//!   subscribers see the latest value immediately
//! - **Serialized Task Lifecycle**: status changes are check-and-set under
//!   the store's write lock, so exactly one of two racing completes wins
//! - **Best-Effort Enrichment**: tasks resolve their order's CPU type and
//!   components once at creation; a missing order never blocks creation
//! - **Stale-Not-Silent Failures**: a failed cycle republishes last-known-good
//!   data flagged stale, with the error text attached
//!
//! ## Building a Floor
//!
//! ```rust,ignore
//! use shopfloor::builders::build_floor;
//! use shopfloor::config::FloorConfig;
//! use shopfloor::core::SimulatedVariance;
//! use shopfloor::infra::InMemoryOrderDirectory;
//! use shopfloor::runtime::{RefreshScheduler, TokioSpawner};
//! use std::sync::Arc;
//!
//! let cfg = FloorConfig::from_json_str(config_json)?;
//! let orders = Arc::new(InMemoryOrderDirectory::new());
//! let floor = build_floor(cfg, orders)?;
//!
//! // Drive the fleet and subscribe to published snapshots
//! let spawner = TokioSpawner::new(tokio::runtime::Handle::current());
//! let handle = RefreshScheduler::for_floor(&floor, SimulatedVariance::new())
//!     .start(&spawner)?;
//! let mut updates = handle.subscribe();
//! ```
//!
//! ## Working the Task Board
//!
//! ```rust,ignore
//! use shopfloor::core::{TaskPriority, TaskStatus};
//! use shopfloor::runtime::api::{self, CreateTaskRequest};
//! use shopfloor::util::clock::now_ms;
//!
//! let task = api::create_task(&floor, CreateTaskRequest {
//!     team_id: "assembly-a".into(),
//!     order_id: "ORD-002".into(),
//!     priority: TaskPriority::High,
//!     estimated_hours: 6.0,
//!     notes: None,
//! }, now_ms())?;
//! ```
//!
//! For complete examples, see:
//! - `tests/refresh_scheduler_test.rs` - Full scheduler integration tests
//! - `tests/task_lifecycle_test.rs` - Task board walkthroughs

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core domain: resources, metrics, tasks, rosters, and their stores.
pub mod core;
/// Configuration models for the floor, teams, and refresh cadence.
pub mod config;
/// Builders to construct floor components from configuration.
pub mod builders;
/// Infrastructure adapters for external collaborators.
pub mod infra;
/// Runtime adapters (scheduler, spawner) and API surface.
pub mod runtime;
/// Shared utilities.
pub mod util;
