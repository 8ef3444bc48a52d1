//! Tests for configuration validation

use std::collections::HashMap;

use shopfloor::config::{FloorConfig, TeamConfig};

fn team_config() -> TeamConfig {
    TeamConfig {
        name: "Assembly Line A".to_string(),
        daily_capacity: 30,
        time_per_unit_minutes: 16.0,
        initial_utilization: 85.0,
    }
}

fn floor_config() -> FloorConfig {
    let mut teams = HashMap::new();
    teams.insert("assembly-a".to_string(), team_config());
    FloorConfig {
        refresh_interval_secs: 5,
        teams,
    }
}

#[test]
fn test_valid_config_passes() {
    assert!(floor_config().validate().is_ok());
}

#[test]
fn test_zero_refresh_interval_is_rejected() {
    let mut config = floor_config();
    config.refresh_interval_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_empty_team_map_is_rejected() {
    let config = FloorConfig {
        refresh_interval_secs: 5,
        teams: HashMap::new(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_blank_team_id_is_rejected() {
    let mut config = floor_config();
    config.teams.insert("  ".to_string(), team_config());
    assert!(config.validate().is_err());
}

#[test]
fn test_team_zero_capacity_is_rejected() {
    let mut team = team_config();
    team.daily_capacity = 0;
    assert!(team.validate().is_err());
}

#[test]
fn test_team_non_positive_unit_time_is_rejected() {
    let mut team = team_config();
    team.time_per_unit_minutes = 0.0;
    assert!(team.validate().is_err());
}

#[test]
fn test_team_out_of_range_utilization_is_rejected() {
    let mut team = team_config();
    team.initial_utilization = 100.5;
    assert!(team.validate().is_err());
    team.initial_utilization = -1.0;
    assert!(team.validate().is_err());
}

#[test]
fn test_invalid_team_error_names_the_team() {
    let mut config = floor_config();
    config
        .teams
        .get_mut("assembly-a")
        .unwrap()
        .daily_capacity = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("assembly-a"));
    assert!(err.to_string().contains("daily_capacity"));
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "refresh_interval_secs": 10,
        "teams": {
            "assembly-a": {
                "name": "Assembly Line A",
                "daily_capacity": 30,
                "time_per_unit_minutes": 16.0,
                "initial_utilization": 85.0
            },
            "paint": {
                "name": "Paint & Finish",
                "daily_capacity": 20,
                "time_per_unit_minutes": 24.0
            }
        }
    }"#;

    let config = FloorConfig::from_json_str(json).unwrap();
    assert_eq!(config.refresh_interval_secs, 10);
    assert_eq!(config.teams.len(), 2);
    // initial utilization defaults to 0 when omitted
    assert!(config.teams["paint"].initial_utilization.abs() < f64::EPSILON);
}

#[test]
fn test_config_from_json_defaults_interval() {
    let json = r#"{
        "teams": {
            "paint": {
                "name": "Paint & Finish",
                "daily_capacity": 20,
                "time_per_unit_minutes": 24.0
            }
        }
    }"#;

    let config = FloorConfig::from_json_str(json).unwrap();
    assert_eq!(config.refresh_interval_secs, 5);
}

#[test]
fn test_config_from_malformed_json_is_rejected() {
    let err = FloorConfig::from_json_str("{not json").unwrap_err();
    assert_eq!(err.kind(), "invalid_config");
    assert!(err.to_string().contains("parse error"));
}

#[test]
fn test_config_from_json_still_validates() {
    let json = r#"{
        "refresh_interval_secs": 0,
        "teams": {
            "paint": {
                "name": "Paint & Finish",
                "daily_capacity": 20,
                "time_per_unit_minutes": 24.0
            }
        }
    }"#;

    assert!(FloorConfig::from_json_str(json).is_err());
}
