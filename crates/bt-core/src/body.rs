use crate::math::Vec2;

/// Position-bearing handle into the host's world.
///
/// The core crate intentionally does not prescribe a scene graph; hosts
/// implement this for whatever entity their agents and targets live in, and
/// leaf behaviors reach it through the blackboard's `agent`/`target` slots.
pub trait Body {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
}

/// A free-standing point body for hosts (and tests) without a scene graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointBody {
    pub position: Vec2,
}

impl PointBody {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }
}

impl Body for PointBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}
