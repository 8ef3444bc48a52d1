//! Infrastructure adapters for external collaborators.

pub mod orders;

pub use orders::InMemoryOrderDirectory;
