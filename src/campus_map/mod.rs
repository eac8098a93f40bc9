//! Fixed campus graph feeding the same shortest path engine as the editor

use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::editor::{RunState, RunTicket};
use crate::errors::{GraphError, Result};
use crate::geometry::Point;
use crate::graph::{Graph, NodeId};
use crate::graph_algos::{PathResult, shortest_paths};


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: NodeId,
    pub name: String,
    pub position: Point,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

/// Immutable description of a map
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub buildings: Vec<Building>,
    pub roads: Vec<Road>,
    #[serde(default = "default_run_duration_ms")]
    pub run_duration_ms: u64,
}

fn default_run_duration_ms() -> u64 {
    600
}

impl MapConfig {

    /// The campus: five buildings, six roads
    pub fn campus() -> Self {
        let building = |id: &str, name: &str, x: f64, y: f64| Building {
            id: id.to_string(),
            name: name.to_string(),
            position: Point::new(x, y),
        };
        let road = |from: &str, to: &str, weight: f64| Road {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        };

        Self {
            buildings: vec![
                building("A", "Admin", 80.0, 120.0),
                building("L", "Library", 220.0, 80.0),
                building("E", "Engineering", 360.0, 140.0),
                building("S", "Science", 260.0, 240.0),
                building("H", "Hostel", 120.0, 220.0),
            ],
            roads: vec![
                road("A", "L", 2.0),
                road("L", "E", 3.0),
                road("A", "H", 4.0),
                road("H", "S", 2.0),
                road("S", "E", 2.0),
                road("L", "S", 3.0),
            ],
            run_duration_ms: default_run_duration_ms(),
        }
    }
}


/// Shortest path page over a fixed map
/// Keeps the selected endpoints and the last computed path for highlighting
pub struct CampusMap {
    config: MapConfig,
    graph: Graph,
    start: NodeId,
    destination: NodeId,
    result: Option<PathResult>,
    run: RunState,
    ticket: Option<RunTicket>,
}

impl CampusMap {

    /// Build the graph of `config`
    /// Duplicate building ids and roads to unknown buildings are rejected
    pub fn new(config: MapConfig) -> Result<Self> {
        let mut graph = Graph::new();
        for b in &config.buildings {
            graph.insert_node(b.id.clone(), b.position)?;
        }
        for r in &config.roads {
            graph.add_edge(&r.from, &r.to, r.weight)?;
        }

        // first and last building are the initial selection
        let start = config.buildings.first().map(|b| b.id.clone()).unwrap_or_default();
        let destination = config.buildings.last().map(|b| b.id.clone()).unwrap_or_default();
        debug!("map with {} buildings, {} roads", graph.node_count(), graph.edge_count());

        Ok(Self {
            config,
            graph,
            start,
            destination,
            result: None,
            run: RunState::default(),
            ticket: None,
        })
    }

    pub fn campus() -> Result<Self> {
        let mut map = Self::new(MapConfig::campus())?;
        map.set_start("A")?;
        map.set_destination("E")?;
        Ok(map)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn buildings(&self) -> &[Building] {
        &self.config.buildings
    }

    /// Display name of a building
    pub fn name(&self, id: &str) -> Option<&str> {
        self.config.buildings.iter().find(|b| b.id == id).map(|b| b.name.as_str())
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn set_start(&mut self, id: &str) -> Result<()> {
        self.start = self.building(id)?;
        Ok(())
    }

    pub fn set_destination(&mut self, id: &str) -> Result<()> {
        self.destination = self.building(id)?;
        Ok(())
    }

    /// Shortest path between two buildings
    /// The result is kept for highlighting and the running flag is raised
    pub fn find_path(&mut self, source: &str, destination: &str) -> Result<&PathResult> {
        let result = shortest_paths(&self.graph, source, Some(destination))?;
        debug!("{source} -> {destination}: {:?} ({:?})", result.path(), result.total());

        self.ticket = Some(self.run.start(Duration::from_millis(self.config.run_duration_ms)));
        Ok(self.result.insert(result))
    }

    /// find_path between the selected start and destination
    pub fn find_selected(&mut self) -> Result<&PathResult> {
        let (start, destination) = (self.start.clone(), self.destination.clone());
        self.find_path(&start, &destination)
    }

    /// Last computed path, empty before the first query
    pub fn path(&self) -> &[NodeId] {
        self.result.as_ref().map(|r| r.path()).unwrap_or(&[])
    }

    pub fn result(&self) -> Option<&PathResult> {
        self.result.as_ref()
    }

    pub fn is_node_highlighted(&self, id: &str) -> bool {
        self.result.as_ref().is_some_and(|r| r.contains_node(id))
    }

    pub fn is_road_highlighted(&self, from: &str, to: &str) -> bool {
        self.result.as_ref().is_some_and(|r| r.contains_edge(from, to))
    }

    pub fn is_running(&self) -> bool {
        self.run.is_running()
    }

    /// Ticket of the current run, for the host to schedule its timer
    pub fn run_ticket(&self) -> Option<RunTicket> {
        self.ticket
    }

    pub fn finish_run(&mut self, ticket: RunTicket) -> bool {
        self.run.finish(ticket)
    }

    fn building(&self, id: &str) -> Result<NodeId> {
        if self.graph.contains_node(id) {
            Ok(id.to_string())
        } else {
            Err(GraphError::InvalidReference(id.to_string()))
        }
    }
}
