//! Fleet-wide metrics derived from a resource snapshot.

use crate::core::error::FloorError;
use crate::core::resource::{CapacityResource, ResourceStatus};

/// Totals computed over one consistent fleet snapshot.
///
/// Never persisted independently: every value is recomputed from the
/// snapshot it was aggregated from, so a metrics record can never mix pre-
/// and post-tick resource states.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FleetMetrics {
    /// Sum of per-team daily capacity.
    pub total_capacity: u32,
    /// Sum of units currently in production.
    pub total_in_progress: u32,
    /// Mean utilization across teams, rounded to the nearest point.
    pub average_utilization: u32,
    /// Number of teams classified critical. Attention does not count.
    pub overloaded_count: usize,
    /// When this aggregation ran, milliseconds since epoch.
    pub computed_at_ms: u64,
}

impl FleetMetrics {
    /// Aggregate a non-empty snapshot.
    ///
    /// # Errors
    /// Returns [`FloorError::EmptyFleet`] when `resources` is empty; the
    /// mean is undefined there and callers are expected to register teams
    /// before the first aggregation.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn aggregate(resources: &[CapacityResource], now_ms: u64) -> Result<Self, FloorError> {
        if resources.is_empty() {
            return Err(FloorError::EmptyFleet);
        }
        let mean = resources.iter().map(|r| r.utilization).sum::<f64>() / resources.len() as f64;
        Ok(Self {
            total_capacity: resources.iter().map(|r| r.daily_capacity).sum(),
            total_in_progress: resources.iter().map(|r| r.units_in_progress).sum(),
            average_utilization: mean.round() as u32,
            overloaded_count: resources
                .iter()
                .filter(|r| r.status == ResourceStatus::Critical)
                .count(),
            computed_at_ms: now_ms,
        })
    }
}
