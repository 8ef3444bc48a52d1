//! Per-team capacity resource records, derived classifications, and the
//! fleet store.

use parking_lot::RwLock;

use crate::core::error::FloorError;

/// Alert classification derived from utilization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    /// Utilization at or below 85.
    Normal,
    /// Utilization above 85, at or below 95.
    Attention,
    /// Utilization above 95.
    Critical,
}

impl ResourceStatus {
    /// Classify a clamped utilization percentage.
    ///
    /// This is the only place status is derived; callers never set it
    /// independently of utilization.
    #[must_use]
    pub fn classify(utilization: f64) -> Self {
        if utilization > 95.0 {
            Self::Critical
        } else if utilization > 85.0 {
            Self::Attention
        } else {
            Self::Normal
        }
    }

    /// Wire/display name, matching the serde encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Attention => "attention",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the most recent utilization change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationTrend {
    /// Clamped utilization increased this tick.
    Rising,
    /// Clamped utilization decreased this tick.
    Falling,
    /// No change after clamping.
    Stable,
}

impl UtilizationTrend {
    /// Trend of a move from `previous` to `next`, both already clamped.
    #[must_use]
    pub fn from_change(previous: f64, next: f64) -> Self {
        if next > previous {
            Self::Rising
        } else if next < previous {
            Self::Falling
        } else {
            Self::Stable
        }
    }

    /// Wire/display name, matching the serde encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Stable => "stable",
        }
    }
}

impl std::fmt::Display for UtilizationTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capacity state of one team.
///
/// `status` and `trend` are always consistent with the latest utilization
/// transition: records enter the system through [`CapacityResource::new`] or
/// a whole-record replacement produced by the update engine, never through
/// field-level writes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CapacityResource {
    /// Stable team identifier.
    pub id: String,
    /// Human-readable team name.
    pub name: String,
    /// Maximum units the team can produce per day; immutable, at least 1.
    pub daily_capacity: u32,
    /// Current utilization percentage in `[0, 100]`.
    pub utilization: f64,
    /// Units currently in production, within `[0, daily_capacity]`.
    pub units_in_progress: u32,
    /// Minutes of work per unit; static per team.
    pub time_per_unit_minutes: f64,
    /// Alert classification derived from `utilization`.
    pub status: ResourceStatus,
    /// Direction of the latest utilization change.
    pub trend: UtilizationTrend,
    /// Projected next-free timestamp in milliseconds since epoch.
    pub next_availability_ms: u64,
    /// Timestamp of the last engine update in milliseconds since epoch.
    pub last_updated_ms: u64,
}

impl CapacityResource {
    /// Build a validated resource in its initial state.
    ///
    /// Status is derived from `initial_utilization`, trend starts `Stable`,
    /// nothing is in progress, and the team is available now.
    ///
    /// # Errors
    /// Returns [`FloorError::InvalidConfig`] when `daily_capacity` is zero,
    /// `time_per_unit_minutes` is not positive, or `initial_utilization`
    /// falls outside `[0, 100]`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        daily_capacity: u32,
        time_per_unit_minutes: f64,
        initial_utilization: f64,
        now_ms: u64,
    ) -> Result<Self, FloorError> {
        let id = id.into();
        if daily_capacity == 0 {
            return Err(FloorError::InvalidConfig(format!(
                "team `{id}`: daily_capacity must be at least 1"
            )));
        }
        if time_per_unit_minutes <= 0.0 {
            return Err(FloorError::InvalidConfig(format!(
                "team `{id}`: time_per_unit_minutes must be positive"
            )));
        }
        if !(0.0..=100.0).contains(&initial_utilization) {
            return Err(FloorError::InvalidConfig(format!(
                "team `{id}`: initial utilization {initial_utilization} outside [0, 100]"
            )));
        }
        Ok(Self {
            id,
            name: name.into(),
            daily_capacity,
            utilization: initial_utilization,
            units_in_progress: 0,
            time_per_unit_minutes,
            status: ResourceStatus::classify(initial_utilization),
            trend: UtilizationTrend::Stable,
            next_availability_ms: now_ms,
            last_updated_ms: now_ms,
        })
    }
}

/// Shared store holding one [`CapacityResource`] per registered team.
///
/// Reads take a consistent snapshot; the update engine replaces the whole
/// fleet in one write (crate-private), so readers never observe a tick
/// half-applied.
#[derive(Debug, Default)]
pub struct ResourceStore {
    inner: RwLock<Vec<CapacityResource>>,
}

impl ResourceStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new team's resource.
    ///
    /// # Errors
    /// Returns [`FloorError::InvalidConfig`] when the team id is already
    /// registered.
    pub fn register(&self, resource: CapacityResource) -> Result<(), FloorError> {
        let mut fleet = self.inner.write();
        if fleet.iter().any(|existing| existing.id == resource.id) {
            return Err(FloorError::InvalidConfig(format!(
                "team `{}` already registered",
                resource.id
            )));
        }
        fleet.push(resource);
        Ok(())
    }

    /// Consistent copy of the whole fleet, in registration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CapacityResource> {
        self.inner.read().clone()
    }

    /// Swap in a fully assembled post-tick fleet.
    pub(crate) fn replace_all(&self, next: Vec<CapacityResource>) {
        *self.inner.write() = next;
    }

    /// Whether a team id is registered.
    #[must_use]
    pub fn contains(&self, team_id: &str) -> bool {
        self.inner.read().iter().any(|r| r.id == team_id)
    }

    /// Copy of one team's resource.
    #[must_use]
    pub fn get(&self, team_id: &str) -> Option<CapacityResource> {
        self.inner.read().iter().find(|r| r.id == team_id).cloned()
    }

    /// Number of registered teams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether no team is registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
