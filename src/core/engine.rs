//! Per-tick capacity update engine.

use crate::core::resource::{CapacityResource, ResourceStatus, UtilizationTrend};
use crate::core::variance::VarianceSource;

/// Recomputes every resource's mutable state from one consistent prior
/// snapshot plus fresh variance readings.
///
/// `tick` is pure apart from the injected [`VarianceSource`]: given the same
/// prior snapshot and the same source state, it produces the same output.
#[derive(Debug)]
pub struct CapacityEngine<V> {
    variance: V,
}

impl<V: VarianceSource> CapacityEngine<V> {
    /// Engine drawing readings from the given source.
    pub const fn new(variance: V) -> Self {
        Self { variance }
    }

    /// Advance the whole fleet one tick.
    ///
    /// Every output record derives from the `prior` slice only, so no
    /// resource observes a sibling's post-tick value mid-computation.
    pub fn tick(&mut self, prior: &[CapacityResource], now_ms: u64) -> Vec<CapacityResource> {
        tracing::debug!("advancing {} teams", prior.len());
        prior
            .iter()
            .map(|resource| self.advance(resource, now_ms))
            .collect()
    }

    /// Recompute one resource. The seven mutable fields are stamped together
    /// in a single record construction; identity fields carry over untouched.
    fn advance(&mut self, prior: &CapacityResource, now_ms: u64) -> CapacityResource {
        let delta = self.variance.utilization_delta();
        let utilization = (prior.utilization + delta).clamp(0.0, 100.0);
        let trend = UtilizationTrend::from_change(prior.utilization, utilization);
        let status = ResourceStatus::classify(utilization);
        let units_in_progress = self
            .variance
            .units_in_progress(prior.daily_capacity)
            .min(prior.daily_capacity);

        if status == ResourceStatus::Critical && prior.status != ResourceStatus::Critical {
            tracing::info!("team {} entered critical load at {:.1}%", prior.id, utilization);
        }

        CapacityResource {
            id: prior.id.clone(),
            name: prior.name.clone(),
            daily_capacity: prior.daily_capacity,
            utilization,
            units_in_progress,
            time_per_unit_minutes: prior.time_per_unit_minutes,
            status,
            trend,
            next_availability_ms: now_ms.saturating_add(self.variance.availability_delay_ms()),
            last_updated_ms: now_ms,
        }
    }
}
