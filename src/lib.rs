//! Core of an interactive Dijkstra playground
//!
//! - [`graph`]: user authored nodes and weighted edges
//! - [`graph_algos`]: single source shortest paths over a graph snapshot
//! - [`editor`]: tool mode state machine turning pointer input into graph edits
//! - [`campus_map`]: fixed map running the same engine
//!
//! Rendering is left to the host, which reads nodes, edges and [`PathResult`]s.

pub mod campus_map;
pub mod collections;
pub mod editor;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;

pub use campus_map::{CampusMap, MapConfig};
pub use editor::{Editor, EditorConfig, EditorEvent, Outcome, Tool};
pub use errors::{GraphError, Result};
pub use geometry::Point;
pub use graph::{Edge, EdgeId, Graph, Node, NodeId};
pub use graph_algos::{PathResult, shortest_paths};
