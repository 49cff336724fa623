//! Engine-agnostic behavior tree primitives.
//!
//! This crate holds the pieces every behavior tree shares regardless of which
//! host drives it: the [`Status`] outcome set, the [`Node`] execution trait,
//! the per-tree [`Blackboard`], and the [`Body`] capability through which leaf
//! behaviors reach the host's spatial world. The runtime that interprets tree
//! documents lives in `bt-engine`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blackboard;
pub mod body;
pub mod math;
pub mod node;
pub mod status;

pub use blackboard::{Blackboard, BodyHandle, JsonObject};
pub use body::{Body, PointBody};
pub use math::Vec2;
pub use node::Node;
pub use status::Status;
