use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::OnceLock;

use serde_json::{Map, Value};

use crate::body::Body;

/// A JSON object, the shape of one node's `parameters`/`properties` record.
pub type JsonObject = Map<String, Value>;

/// Shared handle to a host entity. One tree instance runs on one logical
/// thread of control, so shared ownership is `Rc`, not `Arc`.
pub type BodyHandle = Rc<RefCell<dyn Body>>;

fn empty_object() -> &'static JsonObject {
    static EMPTY: OnceLock<JsonObject> = OnceLock::new();
    EMPTY.get_or_init(JsonObject::new)
}

/// Per-tree-instance mutable context shared by all nodes of one tree.
///
/// Three logical tables:
/// - `parameters[node_id]`: configuration copied verbatim from the tree
///   document at build time; read-only by convention after that.
/// - `properties[node_id]`: node-authored runtime metadata.
/// - `agent`/`target`: opaque handles into the host's world, set by the host
///   after construction and read by leaf behaviors.
///
/// Lookups for a node id (or field) the document never mentioned return an
/// empty object rather than failing.
#[derive(Default)]
pub struct Blackboard {
    parameters: HashMap<String, JsonObject>,
    properties: HashMap<String, JsonObject>,
    pub agent: Option<BodyHandle>,
    pub target: Option<BodyHandle>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given node id has been registered (the builder registers
    /// every node it constructs, even when the document supplied no values).
    pub fn contains(&self, node_id: &str) -> bool {
        self.parameters.contains_key(node_id)
    }

    pub fn parameters(&self, node_id: &str) -> &JsonObject {
        self.parameters.get(node_id).unwrap_or(empty_object())
    }

    pub fn parameter(&self, node_id: &str, field: &str) -> Option<&Value> {
        self.parameters.get(node_id)?.get(field)
    }

    pub fn set_parameters(&mut self, node_id: impl Into<String>, parameters: JsonObject) {
        self.parameters.insert(node_id.into(), parameters);
    }

    pub fn properties(&self, node_id: &str) -> &JsonObject {
        self.properties.get(node_id).unwrap_or(empty_object())
    }

    pub fn set_properties(&mut self, node_id: impl Into<String>, properties: JsonObject) {
        self.properties.insert(node_id.into(), properties);
    }

    /// Record one runtime metadata field under a node's id.
    pub fn set_property(&mut self, node_id: &str, field: impl Into<String>, value: Value) {
        self.properties
            .entry(node_id.to_string())
            .or_default()
            .insert(field.into(), value);
    }
}
