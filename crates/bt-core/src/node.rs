use crate::{Blackboard, Status};

/// A behavior tree node.
///
/// `tick` is synchronous and re-entrant: a node may be invoked many times
/// across many top-level ticks, and must carry any progress it needs to
/// remember across `Running` returns in its own fields. Internal state is
/// never reset from outside; each kind clears its own state exactly where its
/// semantics say so (a memory composite when the remembered child completes,
/// a timed decorator when it reports failure, and so on).
///
/// Ownership is a strict tree: a parent exclusively owns its children as
/// `Box<dyn Node>`, and dropping the tree instance drops the whole graph.
pub trait Node {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status;
}
