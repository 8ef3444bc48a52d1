//! Tests for the floor builder

use std::collections::HashMap;
use std::sync::Arc;

use shopfloor::builders::build_floor;
use shopfloor::config::{FloorConfig, TeamConfig};
use shopfloor::core::{ResourceStatus, TeamMember, UtilizationTrend};
use shopfloor::infra::InMemoryOrderDirectory;

fn config_with(teams: &[(&str, &str, u32, f64)]) -> FloorConfig {
    let teams = teams
        .iter()
        .map(|(id, name, daily_capacity, initial_utilization)| {
            (
                (*id).to_string(),
                TeamConfig {
                    name: (*name).to_string(),
                    daily_capacity: *daily_capacity,
                    time_per_unit_minutes: 16.0,
                    initial_utilization: *initial_utilization,
                },
            )
        })
        .collect();
    FloorConfig {
        refresh_interval_secs: 5,
        teams,
    }
}

#[test]
fn test_build_floor_seeds_stores_in_id_order() {
    let config = config_with(&[
        ("paint", "Paint & Finish", 20, 75.0),
        ("assembly-a", "Assembly Line A", 30, 85.0),
    ]);
    let floor = build_floor(config, Arc::new(InMemoryOrderDirectory::new())).unwrap();

    let fleet = floor.resources().snapshot();
    let ids: Vec<_> = fleet.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, ["assembly-a", "paint"]);

    // resources start consistent with their configured utilization
    assert_eq!(fleet[0].status, ResourceStatus::Normal);
    assert_eq!(fleet[0].trend, UtilizationTrend::Stable);
    assert_eq!(fleet[0].units_in_progress, 0);

    // every team also gets an empty roster
    let rosters = floor.roster().teams();
    assert_eq!(rosters.len(), 2);
    assert_eq!(rosters[0].id, "assembly-a");
    assert!(rosters[0].members.is_empty());

    assert!(floor.tasks().is_empty());
    assert_eq!(floor.config().refresh_interval_secs, 5);
}

#[test]
fn test_build_floor_rejects_invalid_config_before_seeding() {
    let config = FloorConfig {
        refresh_interval_secs: 5,
        teams: HashMap::new(),
    };
    let err = build_floor(config, Arc::new(InMemoryOrderDirectory::new())).unwrap_err();
    assert_eq!(err.kind(), "invalid_config");
}

#[test]
fn test_build_floor_rejects_invalid_team_values() {
    let config = config_with(&[("assembly-a", "Assembly Line A", 0, 10.0)]);
    assert!(build_floor(config, Arc::new(InMemoryOrderDirectory::new())).is_err());

    let config = config_with(&[("assembly-a", "Assembly Line A", 30, 120.0)]);
    assert!(build_floor(config, Arc::new(InMemoryOrderDirectory::new())).is_err());
}

#[test]
fn test_floor_add_member_updates_roster() {
    let config = config_with(&[("paint", "Paint & Finish", 20, 75.0)]);
    let floor = build_floor(config, Arc::new(InMemoryOrderDirectory::new())).unwrap();

    let team = floor
        .add_member("paint", TeamMember::new("Ada", "ada@example.com"))
        .unwrap();
    assert_eq!(team.members.len(), 1);
    assert_eq!(team.members[0].name, "Ada");
    assert_eq!(floor.roster().team("paint").unwrap().members.len(), 1);

    let err = floor
        .add_member("ghost", TeamMember::new("Ada", "ada@example.com"))
        .unwrap_err();
    assert_eq!(err.kind(), "not_found");
}
