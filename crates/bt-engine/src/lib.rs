//! Data-driven behavior tree runtime built on `bt-core`.
//!
//! A [`TreeDocument`] (JSON, authored in a behavior tree editor) names a root
//! id and a table of node records. [`TreeBuilder`] resolves each record's type
//! name through a [`NodeRegistry`], copies its parameters into the blackboard,
//! and wires the graph; [`BehaviorTree`] owns the result and re-evaluates it
//! once per host tick.
//!
//! Control-flow kinds:
//! - Composites: [`Sequence`], [`MemSequence`], [`Priority`], [`MemPriority`]
//! - Decorators: [`Repeater`], [`RepeatUntilFailure`], [`RepeatUntilSuccess`],
//!   [`MaxTime`], [`Inverter`], [`Limiter`]
//! - Stock leaves: [`Succeeder`], [`Failer`], [`Runner`], [`ErrorLeaf`],
//!   [`Wait`]
//!
//! Hosts add their own conditions and actions through
//! [`NodeRegistry::register`] before building any document that names them.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod builder;
pub mod composite;
pub mod decorator;
pub mod document;
pub mod error;
pub mod leaf;
pub mod registry;
pub mod tree;

pub use builder::TreeBuilder;
pub use composite::{MemPriority, MemSequence, Priority, Sequence};
pub use decorator::{
    Inverter, Limiter, MaxTime, RepeatUntilFailure, RepeatUntilSuccess, Repeater, Root,
};
pub use document::{NodeRecord, TreeDocument};
pub use error::BuildError;
pub use leaf::{ErrorLeaf, Failer, Runner, Succeeder, Wait};
pub use registry::{Arity, NodeArgs, NodeRegistry, Params};
pub use tree::BehaviorTree;
