//! Builders to construct floor components from configuration.

pub mod floor_builder;

pub use floor_builder::{ProductionFloor, build_floor};
