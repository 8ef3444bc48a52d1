//! Tests for the in-memory order directory

use shopfloor::core::{CpuProfile, OrderDirectory, OrderRecord};
use shopfloor::infra::InMemoryOrderDirectory;

#[test]
fn test_orders_resolve_through_the_trait() {
    let directory = InMemoryOrderDirectory::new();
    directory.insert_order(
        "ORD-002",
        OrderRecord {
            cpu_type: "workstation".to_string(),
            components: vec!["psu-650".to_string()],
        },
    );

    // the floor only ever reads through the trait object
    let reader: &dyn OrderDirectory = &directory;
    let record = reader.resolve_order("ORD-002").unwrap();
    assert_eq!(record.cpu_type, "workstation");
    assert!(reader.resolve_order("ORD-404").is_none());
    assert_eq!(directory.order_count(), 1);
}

#[test]
fn test_insert_order_replaces_existing() {
    let directory = InMemoryOrderDirectory::new();
    directory.insert_order(
        "ORD-002",
        OrderRecord {
            cpu_type: "workstation".to_string(),
            components: Vec::new(),
        },
    );
    directory.insert_order(
        "ORD-002",
        OrderRecord {
            cpu_type: "office".to_string(),
            components: vec!["psu-450".to_string()],
        },
    );

    assert_eq!(directory.order_count(), 1);
    let record = directory.resolve_order("ORD-002").unwrap();
    assert_eq!(record.cpu_type, "office");
    assert_eq!(record.components.len(), 1);
}

#[test]
fn test_cpu_profiles_are_keyed_by_type() {
    let directory = InMemoryOrderDirectory::new();
    directory.insert_cpu_profile(
        "office",
        CpuProfile {
            name: "Office 450".to_string(),
            price: 649.0,
        },
    );

    let profile = directory.cpu_profile("office").unwrap();
    assert_eq!(profile.name, "Office 450");
    assert!((profile.price - 649.0).abs() < f64::EPSILON);
    assert!(directory.cpu_profile("workstation").is_none());
}
