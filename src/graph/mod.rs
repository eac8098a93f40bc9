pub mod ids;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::collections::FxIndexMap;
use crate::errors::{GraphError, Result};
use crate::geometry::Point;
use ids::{IdGenerator, SequentialIds};


pub type NodeId = String;
pub type EdgeId = String;

/// Node on the canvas
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
}

/// Weighted connection between two nodes
/// `from`/`to` keep the order the user drew them in, path finding ignores it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

impl Edge {
    /// True if the edge joins `a` and `b`, in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}


/// User authored graph
/// Invariants:
/// - every edge endpoint is a node of the graph
/// - node ids and edge ids are unique
/// Parallel edges and self loops are allowed
#[derive(Clone, Debug)]
pub struct Graph<I = SequentialIds> {
    nodes: FxIndexMap<NodeId, Node>,
    edges: Vec<Edge>,
    ids: I,
}

impl<I: IdGenerator + Default> Default for Graph<I> {
    fn default() -> Self {
        Self::with_ids(I::default())
    }
}

impl Graph<SequentialIds> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: IdGenerator> Graph<I> {

    /// Create an empty graph drawing identifiers from `ids`
    pub fn with_ids(ids: I) -> Self {
        Self {
            nodes: FxIndexMap::default(),
            edges: Vec::new(),
            ids,
        }
    }

    /// Add a node with a generated id
    pub fn add_node(&mut self, position: Point) -> NodeId {
        let id = loop {
            let candidate = self.ids.node_id();
            if !self.nodes.contains_key(&candidate) {
                break candidate;
            }
        };
        debug!("add node {id} at ({}, {})", position.x, position.y);
        self.nodes.insert(id.clone(), Node { id: id.clone(), position });
        id
    }

    /// Add a node under a caller chosen id
    pub fn insert_node(&mut self, id: impl Into<NodeId>, position: Point) -> Result<()> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateId(id));
        }
        debug!("insert node {id} at ({}, {})", position.x, position.y);
        self.nodes.insert(id.clone(), Node { id, position });
        Ok(())
    }

    /// Connect two existing nodes
    /// The graph is left untouched on error
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<EdgeId> {
        for end in [from, to] {
            if !self.nodes.contains_key(end) {
                return Err(GraphError::InvalidReference(end.to_string()));
            }
        }
        check_weight(weight)?;

        let id = loop {
            let candidate = self.ids.edge_id();
            if !self.edges.iter().any(|e| e.id == candidate) {
                break candidate;
            }
        };
        debug!("add edge {id}: {from} - {to} ({weight})");
        self.edges.push(Edge {
            id: id.clone(),
            from: from.to_string(),
            to: to.to_string(),
            weight,
        });
        Ok(id)
    }

    /// Move a node, edges follow since they only store endpoint ids
    pub fn move_node(&mut self, id: &str, position: Point) -> Result<()> {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.position = position;
                Ok(())
            }
            None => Err(GraphError::NotFound(id.to_string())),
        }
    }

    pub fn set_edge_weight(&mut self, id: &str, weight: f64) -> Result<()> {
        check_weight(weight)?;
        match self.edges.iter_mut().find(|e| e.id == id) {
            Some(edge) => {
                debug!("edge {id} weight {} -> {weight}", edge.weight);
                edge.weight = weight;
                Ok(())
            }
            None => Err(GraphError::NotFound(id.to_string())),
        }
    }

    /// Remove every node and edge
    pub fn clear(&mut self) {
        debug!("clear graph ({} nodes, {} edges)", self.nodes.len(), self.edges.len());
        self.nodes.clear();
        self.edges.clear();
    }
}

impl<I> Graph<I> {

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}


fn check_weight(weight: f64) -> Result<()> {
    if weight.is_nan() || weight < 0.0 {
        return Err(GraphError::InvalidWeight(weight));
    }
    Ok(())
}
