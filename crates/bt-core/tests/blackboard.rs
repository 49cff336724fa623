use std::cell::RefCell;
use std::rc::Rc;

use bt_core::{Blackboard, PointBody, Vec2};
use serde_json::{json, Map};

#[test]
fn parameter_tables_roundtrip_and_default_empty() {
    let mut bb = Blackboard::new();
    assert!(!bb.contains("patrol"));
    assert!(bb.parameters("patrol").is_empty());
    assert_eq!(bb.parameter("patrol", "maxLoop"), None);

    let mut params = Map::new();
    params.insert("maxLoop".to_string(), json!(3));
    bb.set_parameters("patrol", params);
    bb.set_properties("patrol", Map::new());

    assert!(bb.contains("patrol"));
    assert_eq!(bb.parameter("patrol", "maxLoop"), Some(&json!(3)));
    // Fields the author omitted fall back to "absent", not an error.
    assert_eq!(bb.parameter("patrol", "maxTime"), None);
}

#[test]
fn node_authored_properties_accumulate_per_id() {
    let mut bb = Blackboard::new();
    assert!(bb.properties("scout").is_empty());

    bb.set_property("scout", "lastSeenAt", json!([4.0, 2.0]));
    bb.set_property("scout", "alerted", json!(true));

    let props = bb.properties("scout");
    assert_eq!(props.get("lastSeenAt"), Some(&json!([4.0, 2.0])));
    assert_eq!(props.get("alerted"), Some(&json!(true)));
}

#[test]
fn agent_and_target_slots_share_host_bodies() {
    let agent = Rc::new(RefCell::new(PointBody::new(Vec2::new(1.0, 2.0))));
    let target = Rc::new(RefCell::new(PointBody::new(Vec2::ZERO)));

    let mut bb = Blackboard::new();
    assert!(bb.agent.is_none());
    bb.agent = Some(agent.clone());
    bb.target = Some(target);

    // The host keeps its own handle; moves made through the blackboard are
    // visible on it.
    bb.agent
        .as_ref()
        .unwrap()
        .borrow_mut()
        .set_position(Vec2::new(5.0, 2.0));
    assert_eq!(agent.borrow().position, Vec2::new(5.0, 2.0));
}

#[test]
fn vec2_follow_step_math() {
    let agent = Vec2::new(0.0, 0.0);
    let target = Vec2::new(30.0, 40.0);

    assert_eq!(agent.distance(target), 50.0);
    let step = (target - agent).normalized() * 5.0;
    assert!((step.x - 3.0).abs() < 1e-5);
    assert!((step.y - 4.0).abs() < 1e-5);
    assert!(Vec2::ZERO.normalized().length() == 0.0);
}
