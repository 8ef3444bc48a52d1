//! Tests for the floor event trail

use std::sync::Arc;

use parking_lot::Mutex;
use shopfloor::core::{
    EventSink, FloorEventKind, InMemoryEventSink, SharedEventSink, build_event,
};

#[test]
fn test_event_kind_names() {
    assert_eq!(FloorEventKind::TaskCreated.as_str(), "task_created");
    assert_eq!(FloorEventKind::TaskTransitioned.as_str(), "task_transitioned");
    assert_eq!(FloorEventKind::TaskAssigned.as_str(), "task_assigned");
    assert_eq!(FloorEventKind::OrderLinkCleared.as_str(), "order_link_cleared");
    assert_eq!(FloorEventKind::MemberAdded.as_str(), "member_added");
    assert_eq!(FloorEventKind::TickCompleted.as_str(), "tick_completed");
    assert_eq!(FloorEventKind::TickFailed.as_str(), "tick_failed");
}

#[test]
fn test_build_event_stamps_and_carries_context() {
    let event = build_event(
        FloorEventKind::TaskAssigned,
        Some("paint".to_string()),
        None,
        Some("Ada".to_string()),
    );
    assert_eq!(event.kind, FloorEventKind::TaskAssigned);
    assert_eq!(event.team_id.as_deref(), Some("paint"));
    assert!(event.task_id.is_none());
    assert_eq!(event.detail.as_deref(), Some("Ada"));
    assert!(event.recorded_at_ms > 0);
}

#[test]
fn test_recording_through_a_shared_boxed_sink() {
    // the shape every recorder in the crate holds
    let sink = InMemoryEventSink::new(8);
    let shared: SharedEventSink = Arc::new(Mutex::new(Box::new(sink.clone())));

    shared
        .lock()
        .record(build_event(FloorEventKind::TickCompleted, None, None, None));
    shared.lock().record(build_event(
        FloorEventKind::TickFailed,
        None,
        None,
        Some("tick failed: no capacity resources registered".to_string()),
    ));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, FloorEventKind::TickCompleted);
    assert_eq!(events[1].kind, FloorEventKind::TickFailed);
    assert!(events[1].detail.as_deref().unwrap().contains("tick failed"));
}

#[test]
fn test_ring_keeps_only_the_newest_events() {
    let mut sink = InMemoryEventSink::new(3);
    for i in 0..5 {
        sink.record(build_event(
            FloorEventKind::TaskCreated,
            None,
            None,
            Some(i.to_string()),
        ));
    }
    let details: Vec<_> = sink
        .events()
        .into_iter()
        .map(|event| event.detail.unwrap())
        .collect();
    assert_eq!(details, ["2", "3", "4"]);
}
