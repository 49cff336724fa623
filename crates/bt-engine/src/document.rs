//! The external tree document, as produced by a behavior tree editor.

use std::collections::HashMap;

use bt_core::JsonObject;
use serde::Deserialize;

use crate::error::BuildError;

/// A parsed tree definition: a designated root id plus a table of node
/// records keyed by id. Ids are unique within one document and meaningful
/// only as blackboard keys, never across trees.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeDocument {
    pub root: String,
    pub nodes: HashMap<String, NodeRecord>,
}

impl TreeDocument {
    /// Parse failure is recoverable: the host may retry with another source.
    pub fn from_json(source: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(source)?)
    }
}

/// One node record. `parameters` and `properties` default to empty when the
/// author omitted them; child linkage uses `children` (composites) or
/// `child` (decorators), and leaves carry neither. Extra fields an editor
/// emits are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeRecord {
    pub name: String,
    #[serde(default)]
    pub parameters: JsonObject,
    #[serde(default)]
    pub properties: JsonObject,
    #[serde(default)]
    pub children: Option<Vec<String>>,
    #[serde(default)]
    pub child: Option<String>,
}
