//! Name-to-factory registry the builder resolves node type names through.
//!
//! The registry is an explicitly constructed value, not a process-wide
//! singleton: hosts build one, finish registering their own kinds, and hand
//! it to every [`crate::TreeBuilder`]/[`crate::BehaviorTree`] call. Tests can
//! construct a fresh registry holding only the kinds under test.

use std::collections::HashMap;

use bt_core::{JsonObject, Node};
use serde_json::Value;

use crate::composite::{MemPriority, MemSequence, Priority, Sequence};
use crate::decorator::{
    Inverter, Limiter, MaxTime, RepeatUntilFailure, RepeatUntilSuccess, Repeater, Root,
};
use crate::leaf::{ErrorLeaf, Failer, Runner, Succeeder, Wait};

/// Child linkage a node kind expects; the builder enforces it against the
/// record's `children`/`child` fields before constructing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Leaf,
    Decorator,
    Composite,
}

/// Typed read-only view over one record's `parameters` object.
///
/// Defaulting rule for every accessor: a field that is missing, or whose
/// JSON value does not fit the requested type, reads as 0.
#[derive(Clone, Copy)]
pub struct Params<'a> {
    raw: &'a JsonObject,
}

impl<'a> Params<'a> {
    pub fn new(raw: &'a JsonObject) -> Self {
        Self { raw }
    }

    pub fn u32(&self, field: &str) -> u32 {
        self.raw
            .get(field)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0)
    }

    pub fn u64(&self, field: &str) -> u64 {
        self.raw.get(field).and_then(Value::as_u64).unwrap_or(0)
    }
}

/// Everything a factory gets to construct one node: the record's id, its
/// typed parameters, and its already-built children in document order.
pub struct NodeArgs<'a> {
    pub id: &'a str,
    pub params: Params<'a>,
    pub children: Vec<Box<dyn Node>>,
}

impl NodeArgs<'_> {
    /// Takes the single child of a decorator record.
    ///
    /// The builder has already enforced [`Arity::Decorator`] by the time a
    /// factory runs, so exactly one child is present.
    pub fn child(mut self) -> Box<dyn Node> {
        self.children
            .pop()
            .expect("builder attaches exactly one child before a decorator factory runs")
    }
}

type NodeFactory = Box<dyn Fn(NodeArgs<'_>) -> Box<dyn Node>>;

struct Entry {
    arity: Arity,
    build: NodeFactory,
}

/// Mapping from a node type name to the factory producing fresh instances of
/// that kind. Every `create` call returns an independently allocated node, so
/// internal counter/memory state is never shared between siblings or trees.
pub struct NodeRegistry {
    entries: HashMap<String, Entry>,
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeRegistry {
    /// An empty registry, for hosts and tests that want full control over
    /// which kinds exist.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// A registry with every built-in kind pre-registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register("Root", Arity::Decorator, |args| Box::new(Root::new(args.child())));

        // Composites.
        registry.register("Sequence", Arity::Composite, |args| {
            Box::new(Sequence::new(args.children))
        });
        registry.register("MemSequence", Arity::Composite, |args| {
            Box::new(MemSequence::new(args.children))
        });
        registry.register("Priority", Arity::Composite, |args| {
            Box::new(Priority::new(args.children))
        });
        registry.register("MemPriority", Arity::Composite, |args| {
            Box::new(MemPriority::new(args.children))
        });

        // Decorators.
        registry.register("Repeater", Arity::Decorator, |args| {
            let max_loop = args.params.u32("maxLoop");
            Box::new(Repeater::new(max_loop, args.child()))
        });
        registry.register("RepeatUntilFailure", Arity::Decorator, |args| {
            let max_loop = args.params.u32("maxLoop");
            Box::new(RepeatUntilFailure::new(max_loop, args.child()))
        });
        registry.register("RepeatUntilSuccess", Arity::Decorator, |args| {
            let max_loop = args.params.u32("maxLoop");
            Box::new(RepeatUntilSuccess::new(max_loop, args.child()))
        });
        registry.register("MaxTime", Arity::Decorator, |args| {
            let max_time_ms = args.params.u64("maxTime");
            Box::new(MaxTime::new(max_time_ms, args.child()))
        });
        registry.register("Inverter", Arity::Decorator, |args| {
            Box::new(Inverter::new(args.child()))
        });
        registry.register("Limiter", Arity::Decorator, |args| {
            let max_loop = args.params.u32("maxLoop");
            Box::new(Limiter::new(max_loop, args.child()))
        });

        // Stock leaves.
        registry.register("Succeeder", Arity::Leaf, |_| Box::new(Succeeder));
        registry.register("Failer", Arity::Leaf, |_| Box::new(Failer));
        registry.register("Runner", Arity::Leaf, |_| Box::new(Runner));
        registry.register("Error", Arity::Leaf, |_| Box::new(ErrorLeaf));
        registry.register("Wait", Arity::Leaf, |args| {
            Box::new(Wait::new(args.params.u64("milliseconds")))
        });

        registry
    }

    /// Stores (or overwrites) the factory for `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        arity: Arity,
        factory: impl Fn(NodeArgs<'_>) -> Box<dyn Node> + 'static,
    ) {
        self.entries.insert(
            name.into(),
            Entry {
                arity,
                build: Box::new(factory),
            },
        );
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// # Panics
    ///
    /// Panics if `name` is unregistered. A document referencing an unknown
    /// node type is an authoring or integration defect, not a runtime
    /// condition to recover from.
    pub fn arity(&self, name: &str) -> Arity {
        self.entry(name).arity
    }

    /// Instantiates a fresh node of the named kind.
    ///
    /// # Panics
    ///
    /// Panics if `name` is unregistered, same contract as [`Self::arity`].
    pub fn create(&self, name: &str, args: NodeArgs<'_>) -> Box<dyn Node> {
        (self.entry(name).build)(args)
    }

    fn entry(&self, name: &str) -> &Entry {
        self.entries
            .get(name)
            .unwrap_or_else(|| panic!("node type `{name}` is not registered"))
    }
}
