//! Recursive document-to-graph construction.

use std::collections::HashSet;

use bt_core::{Blackboard, Node};
use tracing::debug;

use crate::decorator::Root;
use crate::document::{NodeRecord, TreeDocument};
use crate::error::BuildError;
use crate::registry::{Arity, NodeArgs, NodeRegistry, Params};

/// Builds a node graph from a [`TreeDocument`], resolving type names through
/// a borrowed [`NodeRegistry`] and copying each record's parameters and
/// properties into the blackboard under its id.
pub struct TreeBuilder<'r> {
    registry: &'r NodeRegistry,
}

impl<'r> TreeBuilder<'r> {
    pub fn new(registry: &'r NodeRegistry) -> Self {
        Self { registry }
    }

    /// Resolves the document's declared root and wraps it in a synthetic
    /// [`Root`] node so the tree has a fixed single entry point.
    pub fn build(
        &self,
        document: &TreeDocument,
        blackboard: &mut Blackboard,
    ) -> Result<Box<dyn Node>, BuildError> {
        let mut attached = HashSet::new();
        let declared_root = self.resolve(document, &document.root, blackboard, &mut attached)?;
        Ok(Box::new(Root::new(declared_root)))
    }

    fn resolve(
        &self,
        document: &TreeDocument,
        id: &str,
        blackboard: &mut Blackboard,
        attached: &mut HashSet<String>,
    ) -> Result<Box<dyn Node>, BuildError> {
        if !attached.insert(id.to_string()) {
            return Err(BuildError::DuplicateReference(id.to_string()));
        }

        let record = document
            .nodes
            .get(id)
            .ok_or_else(|| BuildError::UnknownNode(id.to_string()))?;

        // Panics on an unregistered type name, per the registry contract.
        let arity = self.registry.arity(&record.name);
        check_arity(id, record, arity)?;

        blackboard.set_parameters(id, record.parameters.clone());
        blackboard.set_properties(id, record.properties.clone());
        debug!(id, name = record.name.as_str(), "building node");

        // Children in document order; composite execution order is
        // significant.
        let mut children: Vec<Box<dyn Node>> = Vec::new();
        if let Some(child_ids) = &record.children {
            for child_id in child_ids {
                children.push(self.resolve(document, child_id, blackboard, attached)?);
            }
        }
        if let Some(child_id) = &record.child {
            children.push(self.resolve(document, child_id, blackboard, attached)?);
        }

        let args = NodeArgs {
            id,
            params: Params::new(&record.parameters),
            children,
        };
        Ok(self.registry.create(&record.name, args))
    }
}

fn check_arity(id: &str, record: &NodeRecord, arity: Arity) -> Result<(), BuildError> {
    let violation = match arity {
        Arity::Composite if record.child.is_some() => {
            Some("composite kinds take a `children` list, not a singular `child`")
        }
        Arity::Decorator if record.children.is_some() => {
            Some("decorator kinds take a singular `child`, not a `children` list")
        }
        Arity::Decorator if record.child.is_none() => Some("decorator kinds require a `child`"),
        Arity::Leaf if record.child.is_some() || record.children.is_some() => {
            Some("leaf kinds take no children")
        }
        _ => None,
    };

    match violation {
        Some(detail) => Err(BuildError::ChildArity {
            id: id.to_string(),
            name: record.name.clone(),
            detail,
        }),
        None => Ok(()),
    }
}
