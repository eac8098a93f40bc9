/// Marks a node without predecessor (the source, or anything not yet reached)
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered node indices from start to goal
/// parents: predecessor index per node, NO_PARENT for the start
/// goal_index: index of the goal node in parents
pub(crate) fn shortest_path(parents: &[usize], goal_index: usize) -> Vec<usize> {

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    // A chain never exceeds the node count, the guard stops a corrupt cycle
    while current_index != NO_PARENT && path.len() <= parents.len() {
        path.push(current_index);
        current_index = parents[current_index];
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}
