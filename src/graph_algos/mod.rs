pub mod dijkstra;
mod path_result;
mod shortest_path;

pub use dijkstra::shortest_paths;
pub use path_result::PathResult;
