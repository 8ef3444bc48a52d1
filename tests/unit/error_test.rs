//! Tests for error types

use shopfloor::core::{Entity, FloorError, TaskStatus};

#[test]
fn test_not_found_error() {
    let err = FloorError::NotFound {
        entity: Entity::Team,
        id: "assembly-a".to_string(),
    };
    assert_eq!(format!("{}", err), "team `assembly-a` not found");
    assert_eq!(err.kind(), "not_found");
}

#[test]
fn test_task_not_found_error() {
    let err = FloorError::NotFound {
        entity: Entity::Task,
        id: "7f0c".to_string(),
    };
    assert_eq!(format!("{}", err), "task `7f0c` not found");
}

#[test]
fn test_invalid_transition_error() {
    let err = FloorError::InvalidTransition {
        from: TaskStatus::Completed,
        to: TaskStatus::Pending,
    };
    assert_eq!(
        format!("{}", err),
        "invalid transition from `completed` to `pending`"
    );
    assert_eq!(err.kind(), "invalid_transition");
}

#[test]
fn test_terminal_task_error() {
    let err = FloorError::TerminalTask {
        id: "7f0c".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "task `7f0c` is completed and can no longer be modified"
    );
    // terminal-task rejections report under the transition kind
    assert_eq!(err.kind(), "invalid_transition");
}

#[test]
fn test_duplicate_member_error() {
    let err = FloorError::DuplicateMember {
        team_id: "paint".to_string(),
        email: "ada@example.com".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "team `paint` already has a member with email `ada@example.com`"
    );
    assert_eq!(err.kind(), "duplicate_member");
}

#[test]
fn test_empty_fleet_error() {
    let err = FloorError::EmptyFleet;
    assert_eq!(format!("{}", err), "no capacity resources registered");
    assert_eq!(err.kind(), "empty_fleet");
}

#[test]
fn test_tick_failure_error() {
    let err = FloorError::TickFailure("no capacity resources registered".to_string());
    assert_eq!(
        format!("{}", err),
        "tick failed: no capacity resources registered"
    );
    assert_eq!(err.kind(), "tick_failure");
}

#[test]
fn test_invalid_config_error() {
    let err = FloorError::InvalidConfig("at least one team must be defined".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid config: at least one team must be defined"
    );
    assert_eq!(err.kind(), "invalid_config");
}
