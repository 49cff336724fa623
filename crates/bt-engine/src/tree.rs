//! The owning aggregate: one constructed root plus its blackboard.

use bt_core::{Blackboard, Node, Status};

use crate::builder::TreeBuilder;
use crate::document::TreeDocument;
use crate::error::BuildError;
use crate::registry::NodeRegistry;

/// A built behavior tree instance.
///
/// Each instance exclusively owns its node graph and blackboard; a host
/// driving many agents builds one tree per agent (rebuilding the same
/// document yields fully independent instances). After construction the host
/// sets `agent`/`target` on the blackboard, then calls [`Self::tick`] at
/// whatever cadence it chooses.
pub struct BehaviorTree {
    root: Box<dyn Node>,
    blackboard: Blackboard,
}

impl BehaviorTree {
    /// Builds from JSON source. Parse failures and structural defects are
    /// recoverable [`BuildError`]s; an unregistered node type name panics
    /// (registry contract).
    pub fn from_json(source: &str, registry: &NodeRegistry) -> Result<Self, BuildError> {
        Self::from_document(&TreeDocument::from_json(source)?, registry)
    }

    pub fn from_document(
        document: &TreeDocument,
        registry: &NodeRegistry,
    ) -> Result<Self, BuildError> {
        let mut blackboard = Blackboard::new();
        let root = TreeBuilder::new(registry).build(document, &mut blackboard)?;
        Ok(Self { root, blackboard })
    }

    /// One complete, non-preemptible depth-first evaluation of the tree.
    ///
    /// The returned status is informational; hosts are free to ignore it.
    /// An `Error` return means some leaf reported an abnormal outcome and it
    /// propagated to the root untouched.
    pub fn tick(&mut self) -> Status {
        self.root.tick(&mut self.blackboard)
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut Blackboard {
        &mut self.blackboard
    }
}

impl std::fmt::Debug for BehaviorTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviorTree").finish_non_exhaustive()
    }
}
