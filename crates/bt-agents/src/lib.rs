//! Host-style agent conditions and actions for `bt-engine`.
//!
//! These leaves read the blackboard's `agent`/`target` body handles: sight
//! and engagement checks, a follow action that steps the agent toward its
//! target, and stub wander/attack actions. They are registered through the
//! same extension interface any host uses for its own node kinds, so this
//! crate doubles as the reference integration.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod nodes;

pub use nodes::{
    register_agent_nodes, Attack, Follow, PlayerInRange, SeePlayer, Wander, ATTACK_RANGE,
    FOLLOW_STEP, SIGHT_RANGE,
};
