use crate::collections::FxIndexMap;
use crate::graph::NodeId;


/// Outcome of a single shortest path query
/// Unreachable nodes carry an infinite label and no predecessor
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    pub(crate) source: NodeId,
    pub(crate) target: Option<NodeId>,
    pub(crate) distances: FxIndexMap<NodeId, f64>,
    pub(crate) predecessors: FxIndexMap<NodeId, NodeId>,
    pub(crate) settled: Vec<NodeId>,
    pub(crate) path: Vec<NodeId>,
}

impl PathResult {

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Distance label of every node of the graph, f64::INFINITY when unreached
    /// After an early stop on the target, labels of unsettled nodes are upper bounds
    pub fn distances(&self) -> &FxIndexMap<NodeId, f64> {
        &self.distances
    }

    /// Final shortest distance to `id`
    /// None if unreachable, unknown, or not settled before the search stopped
    pub fn distance(&self, id: &str) -> Option<f64> {
        if !self.is_settled(id) {
            return None;
        }
        self.distances.get(id).copied().filter(|d| d.is_finite())
    }

    pub fn predecessors(&self) -> &FxIndexMap<NodeId, NodeId> {
        &self.predecessors
    }

    pub fn predecessor(&self, id: &str) -> Option<&str> {
        self.predecessors.get(id).map(String::as_str)
    }

    /// Nodes in the order their labels became final
    pub fn settled(&self) -> &[NodeId] {
        &self.settled
    }

    pub fn is_settled(&self, id: &str) -> bool {
        self.settled.iter().any(|s| s == id)
    }

    /// Ordered node ids from source to target, empty if no target or unreachable
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Length of the reconstructed path
    pub fn total(&self) -> Option<f64> {
        self.target.as_deref().and_then(|t| self.distance(t))
    }

    /// True if `a` and `b` are consecutive on the path, in either order
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.path
            .windows(2)
            .any(|w| (w[0] == a && w[1] == b) || (w[0] == b && w[1] == a))
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.path.iter().any(|n| n == id)
    }
}
