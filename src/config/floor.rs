//! Floor and team configuration structures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::FloorError;

const fn default_refresh_interval_secs() -> u64 {
    5
}

/// Per-team configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamConfig {
    /// Human-readable team name.
    pub name: String,
    /// Maximum units the team can produce per day.
    pub daily_capacity: u32,
    /// Minutes of work per unit.
    pub time_per_unit_minutes: f64,
    /// Utilization percentage the team starts at; defaults to 0.
    #[serde(default)]
    pub initial_utilization: f64,
}

/// Root floor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorConfig {
    /// Seconds between refresh cycles; defaults to 5.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    /// Map of team id to configuration.
    pub teams: HashMap<String, TeamConfig>,
}

impl TeamConfig {
    /// Validate team configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.daily_capacity == 0 {
            return Err("daily_capacity must be greater than 0".into());
        }
        if self.time_per_unit_minutes <= 0.0 {
            return Err("time_per_unit_minutes must be greater than 0".into());
        }
        if !(0.0..=100.0).contains(&self.initial_utilization) {
            return Err("initial_utilization must be within [0, 100]".into());
        }
        Ok(())
    }
}

impl FloorConfig {
    /// Validate all teams and ensure at least one team exists.
    ///
    /// # Errors
    /// Returns [`FloorError::InvalidConfig`] naming the offending field and
    /// team.
    pub fn validate(&self) -> Result<(), FloorError> {
        if self.refresh_interval_secs == 0 {
            return Err(FloorError::InvalidConfig(
                "refresh_interval_secs must be greater than 0".into(),
            ));
        }
        if self.teams.is_empty() {
            return Err(FloorError::InvalidConfig(
                "at least one team must be defined".into(),
            ));
        }
        for (id, team) in &self.teams {
            if id.trim().is_empty() {
                return Err(FloorError::InvalidConfig(
                    "team id must not be empty".into(),
                ));
            }
            team.validate()
                .map_err(|e| FloorError::InvalidConfig(format!("team `{id}` invalid: {e}")))?;
        }
        Ok(())
    }

    /// Parse floor configuration from a JSON string and validate.
    ///
    /// # Errors
    /// Returns [`FloorError::InvalidConfig`] on malformed JSON or failed
    /// validation.
    pub fn from_json_str(input: &str) -> Result<Self, FloorError> {
        let cfg: Self = serde_json::from_str(input)
            .map_err(|e| FloorError::InvalidConfig(format!("parse error: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
