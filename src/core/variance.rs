//! Variance sources feeding the capacity update engine.
//!
//! Each tick the engine asks a [`VarianceSource`] for the raw readings it
//! folds into the new resource state. The simulated source stands in for
//! floor telemetry; the scripted source gives tests exact control.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Longest availability delay the simulated source projects: one hour.
pub const MAX_AVAILABILITY_DELAY_MS: u64 = 60 * 60 * 1000;

/// Per-tick readings consumed by the update engine.
///
/// Sources are stateful (`&mut self`) so sequential draws can come from an
/// RNG or a script. Contracts: deltas stay within `[-5, +5]`, unit counts
/// within `[0, daily_capacity]`, delays within `[0, MAX_AVAILABILITY_DELAY_MS]`.
/// The engine clamps out-of-contract readings rather than failing the tick.
pub trait VarianceSource: Send {
    /// Utilization change to apply this tick, in percentage points.
    fn utilization_delta(&mut self) -> f64;
    /// Units currently in production for a team of the given capacity.
    fn units_in_progress(&mut self, daily_capacity: u32) -> u32;
    /// Milliseconds until the team is next free, measured from the tick.
    fn availability_delay_ms(&mut self) -> u64;
}

/// RNG-backed variance standing in for real floor telemetry.
#[derive(Debug)]
pub struct SimulatedVariance {
    rng: StdRng,
}

impl SimulatedVariance {
    /// Source seeded from the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Deterministic source for reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SimulatedVariance {
    fn default() -> Self {
        Self::new()
    }
}

impl VarianceSource for SimulatedVariance {
    fn utilization_delta(&mut self) -> f64 {
        self.rng.random_range(-5.0..=5.0)
    }

    fn units_in_progress(&mut self, daily_capacity: u32) -> u32 {
        let upper = daily_capacity / 2;
        if upper == 0 {
            0
        } else {
            self.rng.random_range(1..=upper)
        }
    }

    fn availability_delay_ms(&mut self) -> u64 {
        self.rng.random_range(0..=MAX_AVAILABILITY_DELAY_MS)
    }
}

/// Queue-driven variance for tests that need exact tick outcomes.
///
/// Deltas are consumed front-to-back and fall back to `0.0` when exhausted;
/// unit counts and delays are fixed readings.
#[derive(Debug, Clone)]
pub struct ScriptedVariance {
    deltas: VecDeque<f64>,
    units: u32,
    delay_ms: u64,
}

impl ScriptedVariance {
    /// Source replaying the given utilization deltas in order.
    #[must_use]
    pub fn new(deltas: impl IntoIterator<Item = f64>) -> Self {
        Self {
            deltas: deltas.into_iter().collect(),
            units: 1,
            delay_ms: 0,
        }
    }

    /// Fix the in-progress reading returned for every team.
    #[must_use]
    pub const fn with_units(mut self, units: u32) -> Self {
        self.units = units;
        self
    }

    /// Fix the availability delay returned for every team.
    #[must_use]
    pub const fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

impl VarianceSource for ScriptedVariance {
    fn utilization_delta(&mut self) -> f64 {
        self.deltas.pop_front().unwrap_or(0.0)
    }

    fn units_in_progress(&mut self, daily_capacity: u32) -> u32 {
        self.units.min(daily_capacity)
    }

    fn availability_delay_ms(&mut self) -> u64 {
        self.delay_ms
    }
}
