use bt_core::{Blackboard, Node, Status, Vec2};
use bt_engine::{Arity, NodeRegistry};
use tracing::debug;

/// Sight radius of [`SeePlayer`], in world units.
pub const SIGHT_RANGE: f32 = 150.0;
/// Engagement radius of [`PlayerInRange`].
pub const ATTACK_RANGE: f32 = 25.0;
/// Distance [`Follow`] covers per tick.
pub const FOLLOW_STEP: f32 = 5.0;

/// Both positions, or `None` when the host has not set the slots yet.
fn positions(blackboard: &Blackboard) -> Option<(Vec2, Vec2)> {
    let agent = blackboard.agent.as_ref()?.borrow().position();
    let target = blackboard.target.as_ref()?.borrow().position();
    Some((agent, target))
}

/// Succeeds while the target is within [`SIGHT_RANGE`] of the agent.
///
/// Returns `Error` when `agent`/`target` are unset: a tree exercising this
/// condition before the host wired the blackboard is a defect worth
/// surfacing at the root, not a silent failure.
pub struct SeePlayer;

impl Node for SeePlayer {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status {
        let Some((agent, target)) = positions(blackboard) else {
            return Status::Error;
        };
        if agent.distance(target) < SIGHT_RANGE {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// Succeeds while the target is within [`ATTACK_RANGE`] of the agent.
pub struct PlayerInRange;

impl Node for PlayerInRange {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status {
        let Some((agent, target)) = positions(blackboard) else {
            return Status::Error;
        };
        if agent.distance(target) < ATTACK_RANGE {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// Steps the agent [`FOLLOW_STEP`] units toward the target and succeeds.
pub struct Follow;

impl Node for Follow {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status {
        let (Some(agent), Some(target)) = (blackboard.agent.as_ref(), blackboard.target.as_ref())
        else {
            return Status::Error;
        };
        let target_pos = target.borrow().position();

        let mut agent = agent.borrow_mut();
        let step = (target_pos - agent.position()).normalized() * FOLLOW_STEP;
        let next = agent.position() + step;
        agent.set_position(next);

        debug!(x = next.x, y = next.y, "follow");
        Status::Success
    }
}

/// Stub roaming action; logs and succeeds.
pub struct Wander;

impl Node for Wander {
    fn tick(&mut self, _blackboard: &mut Blackboard) -> Status {
        debug!("wander");
        Status::Success
    }
}

/// Stub attack action; logs and succeeds.
pub struct Attack;

impl Node for Attack {
    fn tick(&mut self, _blackboard: &mut Blackboard) -> Status {
        debug!("attack");
        Status::Success
    }
}

/// Registers every agent node kind. Call before building any document that
/// names them.
pub fn register_agent_nodes(registry: &mut NodeRegistry) {
    registry.register("SeePlayer", Arity::Leaf, |_| Box::new(SeePlayer));
    registry.register("PlayerInRange", Arity::Leaf, |_| Box::new(PlayerInRange));
    registry.register("Follow", Arity::Leaf, |_| Box::new(Follow));
    registry.register("Wander", Arity::Leaf, |_| Box::new(Wander));
    registry.register("Attack", Arity::Leaf, |_| Box::new(Attack));
}
