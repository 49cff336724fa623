use std::cell::RefCell;
use std::rc::Rc;

use bt_agents::{register_agent_nodes, FOLLOW_STEP};
use bt_core::{Body, PointBody, Status, Vec2};
use bt_engine::{BehaviorTree, NodeRegistry};

const CHASE_TREE: &str = r#"{
    "root": "brain",
    "nodes": {
        "brain":    { "name": "Priority", "children": ["engage", "idle"] },
        "engage":   { "name": "Sequence", "children": ["see", "approach"] },
        "see":      { "name": "SeePlayer" },
        "approach": { "name": "Follow" },
        "idle":     { "name": "Wander" }
    }
}"#;

fn registry() -> NodeRegistry {
    let mut registry = NodeRegistry::with_builtins();
    register_agent_nodes(&mut registry);
    registry
}

#[test]
fn agent_chases_a_visible_target() {
    let mut tree = BehaviorTree::from_json(CHASE_TREE, &registry()).unwrap();

    let agent = Rc::new(RefCell::new(PointBody::new(Vec2::ZERO)));
    let target = Rc::new(RefCell::new(PointBody::new(Vec2::new(100.0, 0.0))));
    tree.blackboard_mut().agent = Some(agent.clone());
    tree.blackboard_mut().target = Some(target);

    // Target within sight: the engage branch runs and the agent steps
    // toward it.
    assert_eq!(tree.tick(), Status::Success);
    assert_eq!(agent.borrow().position, Vec2::new(FOLLOW_STEP, 0.0));

    assert_eq!(tree.tick(), Status::Success);
    assert_eq!(agent.borrow().position, Vec2::new(2.0 * FOLLOW_STEP, 0.0));
}

#[test]
fn agent_wanders_when_the_target_is_out_of_sight() {
    let mut tree = BehaviorTree::from_json(CHASE_TREE, &registry()).unwrap();

    let agent = Rc::new(RefCell::new(PointBody::new(Vec2::ZERO)));
    let target = Rc::new(RefCell::new(PointBody::new(Vec2::new(1000.0, 0.0))));
    tree.blackboard_mut().agent = Some(agent.clone());
    tree.blackboard_mut().target = Some(target);

    // SeePlayer fails, the priority falls through to the wander branch, and
    // the agent does not move.
    assert_eq!(tree.tick(), Status::Success);
    assert_eq!(agent.borrow().position, Vec2::ZERO);
}

#[test]
fn unset_target_surfaces_as_an_error_at_the_root() {
    let mut tree = BehaviorTree::from_json(CHASE_TREE, &registry()).unwrap();
    tree.blackboard_mut().agent = Some(Rc::new(RefCell::new(PointBody::default())));
    // Target never set by the host: the condition reports Error, and every
    // ancestor passes it through instead of falling back to the idle branch.
    assert_eq!(tree.tick(), Status::Error);
}

#[test]
fn player_in_range_gates_the_attack_branch() {
    let source = r#"{
        "root": "fight",
        "nodes": {
            "fight":  { "name": "MemSequence", "children": ["close", "strike"] },
            "close":  { "name": "PlayerInRange" },
            "strike": { "name": "Attack" }
        }
    }"#;

    let mut tree = BehaviorTree::from_json(source, &registry()).unwrap();
    let agent = Rc::new(RefCell::new(PointBody::new(Vec2::ZERO)));
    let target = Rc::new(RefCell::new(PointBody::new(Vec2::new(30.0, 0.0))));
    tree.blackboard_mut().agent = Some(agent);
    tree.blackboard_mut().target = Some(target.clone());

    // 30 units apart: out of engagement range.
    assert_eq!(tree.tick(), Status::Failure);

    // Target steps closer; the next tick engages.
    target.borrow_mut().set_position(Vec2::new(10.0, 0.0));
    assert_eq!(tree.tick(), Status::Success);
}
