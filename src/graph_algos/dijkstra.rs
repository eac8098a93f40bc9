use crate::collections::FxIndexSet;
use crate::errors::{GraphError, Result};
use crate::graph::{Graph, NodeId};
use super::path_result::PathResult;
use super::shortest_path::{shortest_path, NO_PARENT};

use std::{collections::BinaryHeap, cmp::Ordering};
use log::{debug, trace};



/// Identify shortest paths from `source` using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Edges are walked in both directions regardless of how they were drawn
/// With a target the search stops as soon as the target is settled, otherwise
/// it runs until every reachable node is settled
/// The graph is only borrowed for the duration of the call
pub fn shortest_paths<I>(graph: &Graph<I>, source: &str, target: Option<&str>) -> Result<PathResult> {

    // index every node, iteration order follows insertion order
    let index: FxIndexSet<&str> = graph.nodes().map(|n| n.id.as_str()).collect();

    let source_index = index
        .get_index_of(source)
        .ok_or_else(|| GraphError::InvalidReference(source.to_string()))?;
    let target_index = match target {
        Some(t) => Some(
            index
                .get_index_of(t)
                .ok_or_else(|| GraphError::InvalidReference(t.to_string()))?,
        ),
        None => None,
    };

    let adjacency = build_adjacency(graph, &index);
    let state = search(&adjacency, source_index, target_index);

    // reachable targets get a path, anything else stays empty
    let path = match target_index {
        Some(t) if state.labels[t].is_finite() => shortest_path(&state.parents, t),
        _ => Vec::new(),
    };

    let name = |i: usize| -> NodeId {
        index.get_index(i).map(|id| id.to_string()).unwrap_or_default()
    };

    let distances = state
        .labels
        .iter()
        .enumerate()
        .map(|(i, &label)| (name(i), label))
        .collect();
    let predecessors = state
        .parents
        .iter()
        .enumerate()
        .filter(|&(_, &p)| p != NO_PARENT)
        .map(|(i, &p)| (name(i), name(p)))
        .collect();

    debug!(
        "shortest paths from {source}: {} settled, path {:?}",
        state.settled.len(),
        path.iter().map(|&i| name(i)).collect::<Vec<_>>()
    );

    Ok(PathResult {
        source: source.to_string(),
        target: target.map(str::to_string),
        distances,
        predecessors,
        settled: state.settled.into_iter().map(name).collect(),
        path: path.into_iter().map(name).collect(),
    })
}


/// Neighbor list per node index: (neighbor index, edge weight)
/// Each edge is inserted in both directions
fn build_adjacency<I>(graph: &Graph<I>, index: &FxIndexSet<&str>) -> Vec<Vec<(usize, f64)>> {
    let mut adjacency = vec![Vec::new(); index.len()];

    for edge in graph.edges() {
        // endpoints always exist, the graph refuses dangling edges
        if let (Some(u), Some(v)) = (index.get_index_of(edge.from.as_str()), index.get_index_of(edge.to.as_str())) {
            adjacency[u].push((v, edge.weight));
            adjacency[v].push((u, edge.weight));
        }
    }

    adjacency
}


/// Raw search state indexed by node position
struct Search {
    labels: Vec<f64>,
    parents: Vec<usize>,
    settled: Vec<usize>,
}

/// Label setting loop
/// Returns the labels, predecessor indices and the settle order
fn search(adjacency: &[Vec<(usize, f64)>], source: usize, target: Option<usize>) -> Search {

    let n = adjacency.len();
    let mut labels = vec![f64::INFINITY; n];
    let mut parents = vec![NO_PARENT; n];
    let mut is_settled = vec![false; n];
    let mut settled = Vec::new();

    // Nodes to visit - binary heap sorts Biggest to Smallest, QueueEntry flips it
    // Stale entries are skipped when popped instead of being removed
    let mut nodes_to_visit: BinaryHeap<QueueEntry> = BinaryHeap::new();
    labels[source] = 0.0;
    nodes_to_visit.push(QueueEntry { index: source, cost: 0.0 });

    // Loop over each node to visit, removing the smallest node
    while let Some(QueueEntry { index, cost }) = nodes_to_visit.pop() {

        // already final, or a better label was found after this entry was queued
        if is_settled[index] || cost > labels[index] {
            continue;
        }

        is_settled[index] = true;
        settled.push(index);
        trace!("settled {index} at {cost}");

        // Check if we've reached the target
        if target == Some(index) {
            break;
        }

        // relax neighbors that are still open
        for &(neighbor, weight) in &adjacency[index] {
            if is_settled[neighbor] {
                continue;
            }

            let new_cost = cost + weight;
            if new_cost < labels[neighbor] {
                trace!("relax {neighbor}: {} -> {new_cost} via {index}", labels[neighbor]);
                labels[neighbor] = new_cost;
                parents[neighbor] = index;
                nodes_to_visit.push(QueueEntry { index: neighbor, cost: new_cost });
            }
        }
    }

    Search { labels, parents, settled }
}


/// Priority queue entry
/// - ordering only looks at the cost, reversed so the heap pops the minimum
/// - ties are broken by whatever order the heap yields
#[derive(Debug)]
struct QueueEntry {
    index: usize,
    cost: f64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}
impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for QueueEntry {}
