//! Tests for wire encodings of core records

use shopfloor::core::{
    CapacityResource, ResourceStatus, Task, TaskPriority, TaskStatus, UtilizationTrend,
};
use shopfloor::runtime::CreateTaskRequest;
use uuid::Uuid;

#[test]
fn test_task_status_encodes_snake_case() {
    assert_eq!(
        serde_json::to_string(&TaskStatus::InProgress).unwrap(),
        r#""in_progress""#
    );
    let status: TaskStatus = serde_json::from_str(r#""completed""#).unwrap();
    assert_eq!(status, TaskStatus::Completed);
}

#[test]
fn test_status_and_trend_encode_their_names() {
    assert_eq!(
        serde_json::to_string(&ResourceStatus::Attention).unwrap(),
        r#""attention""#
    );
    assert_eq!(
        serde_json::to_string(&UtilizationTrend::Rising).unwrap(),
        r#""rising""#
    );
    // the Display names match the wire names
    assert_eq!(ResourceStatus::Critical.to_string(), "critical");
    assert_eq!(UtilizationTrend::Falling.to_string(), "falling");
}

#[test]
fn test_priority_encodes_snake_case() {
    assert_eq!(
        serde_json::to_string(&TaskPriority::Urgent).unwrap(),
        r#""urgent""#
    );
    let priority: TaskPriority = serde_json::from_str(r#""low""#).unwrap();
    assert_eq!(priority, TaskPriority::Low);
}

#[test]
fn test_task_wire_shape() {
    let task = Task {
        id: Uuid::new_v4(),
        team_id: "assembly-a".to_string(),
        order_id: "ORD-002".to_string(),
        cpu_type: "workstation".to_string(),
        components: vec!["psu-650".to_string()],
        priority: TaskPriority::High,
        status: TaskStatus::Pending,
        assigned_member: None,
        estimated_hours: 6.0,
        notes: Some("rush".to_string()),
        created_at_ms: 1_700_000_000_000,
    };

    let value = serde_json::to_value(&task).unwrap();
    assert_eq!(value["team_id"], "assembly-a");
    assert_eq!(value["status"], "pending");
    assert_eq!(value["priority"], "high");
    assert!(value["assigned_member"].is_null());
    assert_eq!(value["created_at_ms"], 1_700_000_000_000_u64);

    let back: Task = serde_json::from_value(value).unwrap();
    assert_eq!(back.id, task.id);
    assert_eq!(back.components, task.components);
}

#[test]
fn test_capacity_resource_wire_shape() {
    let resource = CapacityResource::new("paint", "Paint & Finish", 20, 24.0, 96.0, 9_000).unwrap();

    let value = serde_json::to_value(&resource).unwrap();
    assert_eq!(value["id"], "paint");
    assert_eq!(value["daily_capacity"], 20);
    assert_eq!(value["status"], "critical");
    assert_eq!(value["trend"], "stable");
    assert_eq!(value["next_availability_ms"], 9_000);
}

#[test]
fn test_create_task_request_fills_defaults() {
    let json = r#"{
        "team_id": "assembly-a",
        "priority": "medium",
        "estimated_hours": 4.5
    }"#;

    let req: CreateTaskRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.team_id, "assembly-a");
    assert!(req.order_id.is_empty());
    assert!(req.notes.is_none());
    assert_eq!(req.priority, TaskPriority::Medium);
}
