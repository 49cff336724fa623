use thiserror::Error;

/// Recoverable build-time failures.
///
/// An unregistered node type name is deliberately not represented here: that
/// is an authoring/integration defect and the registry panics on it (see
/// [`crate::registry::NodeRegistry`]).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to parse tree document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document's root id, or some `child`/`children` reference, names an
    /// id missing from the node table.
    #[error("document references node id `{0}` but the node table has no such entry")]
    UnknownNode(String),

    /// The record's child linkage does not match the registered kind:
    /// composites take a `children` list, decorators exactly one `child`,
    /// leaves neither.
    #[error("node `{id}` ({name}): {detail}")]
    ChildArity {
        id: String,
        name: String,
        detail: &'static str,
    },

    /// A node id was attached more than once (shared child or reference
    /// cycle); every node must have exactly one parent.
    #[error("node id `{0}` is attached more than once; the graph must be a tree")]
    DuplicateReference(String),
}
