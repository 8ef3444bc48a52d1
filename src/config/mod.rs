//! Configuration models for the floor, teams, and refresh cadence.

pub mod floor;

pub use floor::{FloorConfig, TeamConfig};
