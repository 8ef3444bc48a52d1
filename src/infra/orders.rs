//! In-memory order/CPU-catalog backend.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::core::{CpuProfile, OrderDirectory, OrderRecord};

/// Simple in-memory order directory for development/testing.
///
/// Orders and catalog rows are seeded up front (or added while running);
/// the floor only ever reads through the [`OrderDirectory`] trait.
#[derive(Default)]
pub struct InMemoryOrderDirectory {
    orders: RwLock<HashMap<String, OrderRecord>>,
    cpu_profiles: RwLock<HashMap<String, CpuProfile>>,
}

impl InMemoryOrderDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or replace an order.
    pub fn insert_order(&self, order_id: impl Into<String>, record: OrderRecord) {
        self.orders.write().insert(order_id.into(), record);
    }

    /// Seed or replace a CPU catalog row.
    pub fn insert_cpu_profile(&self, cpu_type: impl Into<String>, profile: CpuProfile) {
        self.cpu_profiles.write().insert(cpu_type.into(), profile);
    }

    /// Number of seeded orders.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.orders.read().len()
    }
}

impl OrderDirectory for InMemoryOrderDirectory {
    fn resolve_order(&self, order_id: &str) -> Option<OrderRecord> {
        self.orders.read().get(order_id).cloned()
    }

    fn cpu_profile(&self, cpu_type: &str) -> Option<CpuProfile> {
        self.cpu_profiles.read().get(cpu_type).cloned()
    }
}
