use thiserror::Error;

use crate::graph::NodeId;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge or a path query refers to a node that is not in the graph
    #[error("invalid node reference: {0}")]
    InvalidReference(NodeId),

    /// A mutation targets a node or edge that does not exist
    #[error("not found: {0}")]
    NotFound(String),

    #[error("identifier already in use: {0}")]
    DuplicateId(String),

    /// Edge weights must be non-negative numbers
    #[error("invalid edge weight: {0}")]
    InvalidWeight(f64),

    #[error("hit test failed: {0}")]
    HitTest(String),
}


impl From<kdtree::ErrorKind> for GraphError {
    fn from(error: kdtree::ErrorKind) -> Self {
        GraphError::HitTest(error.to_string())
    }
}
