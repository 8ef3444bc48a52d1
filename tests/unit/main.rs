//! Unit tests for individual components

mod error_test;
mod config_test;
mod events_test;
mod builders_test;
mod orders_test;
mod serde_test;
