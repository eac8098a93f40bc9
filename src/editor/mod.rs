//! Interaction controller for the graph editor
//! Pointer and toolbar input goes through [`Editor::handle`], a (tool, event) table

mod config;
mod run;
mod tool;
mod zoom;

pub use config::EditorConfig;
pub use run::{RunState, RunTicket};
pub use tool::{EditorEvent, Outcome, Tool};
pub use zoom::Zoom;

use log::{debug, trace};

use crate::errors::{GraphError, Result};
use crate::geometry::{Point, nearest_within};
use crate::graph::ids::{IdGenerator, SequentialIds};
use crate::graph::{Graph, NodeId};
use crate::graph_algos::{PathResult, shortest_paths};


/// Active drag of a single node
#[derive(Clone, Debug, PartialEq)]
struct Drag {
    node: NodeId,
    start: Point,  // pointer position at pointer-down, canvas coordinates
    origin: Point, // node position at pointer-down
}


pub struct Editor<I = SequentialIds> {
    graph: Graph<I>,
    config: EditorConfig,
    tool: Tool,
    zoom: Zoom,
    pending_edge: Option<NodeId>,
    drag: Option<Drag>,
    run: RunState,
}

impl Editor<SequentialIds> {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_graph(Graph::new(), config)
    }
}

impl<I: IdGenerator> Editor<I> {

    /// Wrap an existing graph, useful for injecting another id generator
    pub fn with_graph(graph: Graph<I>, config: EditorConfig) -> Self {
        Self {
            graph,
            zoom: Zoom::new(&config),
            config,
            tool: Tool::default(),
            pending_edge: None,
            drag: None,
            run: RunState::default(),
        }
    }

    pub fn graph(&self) -> &Graph<I> {
        &self.graph
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn scale(&self) -> f64 {
        self.zoom.scale()
    }

    /// Source node of an edge waiting for its second endpoint
    pub fn pending_edge(&self) -> Option<&str> {
        self.pending_edge.as_deref()
    }

    /// Node being dragged, if any
    pub fn dragging(&self) -> Option<&str> {
        self.drag.as_ref().map(|d| d.node.as_str())
    }

    pub fn is_running(&self) -> bool {
        self.run.is_running()
    }

    /// Node under a canvas relative pointer position
    pub fn node_at(&self, screen: Point) -> Result<Option<NodeId>> {
        let at = self.zoom.to_canvas(screen);
        nearest_within(
            self.graph.nodes().map(|n| (&n.id, &n.position)),
            &at,
            self.config.hit_radius,
        )
    }

    /// Run the engine on the current graph
    pub fn shortest_paths(&self, source: &str, target: Option<&str>) -> Result<PathResult> {
        shortest_paths(&self.graph, source, target)
    }

    /// Apply one event
    /// Ids that are not in the graph are errors, input with no effect in the
    /// current mode comes back as Outcome::Ignored
    pub fn handle(&mut self, event: EditorEvent) -> Result<Outcome> {
        use EditorEvent as E;

        let outcome = match (self.tool, event) {
            (_, E::SelectTool(tool)) => {
                self.select_tool(tool);
                Outcome::ToolChanged(tool)
            }

            (Tool::AddNode, E::CanvasClick(screen)) => {
                let id = self.graph.add_node(self.zoom.to_canvas(screen));
                Outcome::NodeAdded(id)
            }

            (Tool::AddEdge, E::NodePointerDown { node, .. }) => {
                self.require(&node)?;
                if self.pending_edge.is_some() {
                    Outcome::Ignored
                } else {
                    self.pending_edge = Some(node.clone());
                    Outcome::EdgePending(node)
                }
            }
            (Tool::AddEdge, E::NodeClick(node)) => match self.pending_edge.take() {
                Some(from) if from != node => {
                    let id = self.graph.add_edge(&from, &node, self.config.default_weight)?;
                    Outcome::EdgeAdded(id)
                }
                // same node again, keep waiting for a second endpoint
                pending => {
                    self.pending_edge = pending;
                    Outcome::Ignored
                }
            },

            (Tool::Select, E::NodePointerDown { node, at }) => {
                if self.drag.is_some() {
                    Outcome::Ignored
                } else {
                    let origin = self
                        .graph
                        .node(&node)
                        .map(|n| n.position)
                        .ok_or_else(|| GraphError::NotFound(node.clone()))?;
                    self.drag = Some(Drag {
                        node: node.clone(),
                        start: self.zoom.to_canvas(at),
                        origin,
                    });
                    Outcome::DragStarted(node)
                }
            }
            (Tool::Select, E::PointerMove(screen)) => match &self.drag {
                Some(drag) => {
                    let delta = self.zoom.to_canvas(screen) - drag.start;
                    let node = drag.node.clone();
                    self.graph.move_node(&node, drag.origin + delta)?;
                    Outcome::NodeMoved(node)
                }
                None => Outcome::Ignored,
            },
            (Tool::Select, E::PointerUp) => match self.drag.take() {
                Some(drag) => Outcome::DragEnded(drag.node),
                None => Outcome::Ignored,
            },

            (_, E::ZoomIn) => Outcome::Zoomed(self.zoom.zoom_in()),
            (_, E::ZoomOut) => Outcome::Zoomed(self.zoom.zoom_out()),

            (_, E::Run) => {
                if self.graph.is_empty() {
                    Outcome::Ignored
                } else {
                    Outcome::RunStarted(self.run.start(self.config.run_duration()))
                }
            }
            (_, E::RunElapsed(ticket)) => {
                if self.run.finish(ticket) {
                    Outcome::RunFinished
                } else {
                    Outcome::Ignored
                }
            }

            (_, E::Delete) => {
                self.clear_canvas();
                Outcome::Cleared
            }
            (_, E::Reset) => {
                self.clear_canvas();
                self.run.cancel();
                Outcome::Cleared
            }

            // everything else, including all pointer input in Edit mode
            (tool, event) => {
                trace!("{event:?} ignored in {tool:?}");
                Outcome::Ignored
            }
        };

        Ok(outcome)
    }

    /// Switch tool, dropping any pending edge or drag
    pub fn select_tool(&mut self, tool: Tool) {
        self.pending_edge = None;
        self.drag = None;
        self.tool = tool;
        debug!("tool {tool:?}");
    }

    fn require(&self, node: &str) -> Result<()> {
        if self.graph.contains_node(node) {
            Ok(())
        } else {
            Err(GraphError::NotFound(node.to_string()))
        }
    }

    fn clear_canvas(&mut self) {
        self.graph.clear();
        self.pending_edge = None;
        self.drag = None;
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn editor() -> Editor {
        Editor::new(EditorConfig::default())
    }

    fn add_node(editor: &mut Editor, x: f64, y: f64) -> NodeId {
        editor.select_tool(Tool::AddNode);
        match editor.handle(EditorEvent::CanvasClick(Point::new(x, y))).unwrap() {
            Outcome::NodeAdded(id) => id,
            other => panic!("expected a node, got {other:?}"),
        }
    }

    fn down(node: &str, x: f64, y: f64) -> EditorEvent {
        EditorEvent::NodePointerDown { node: node.to_string(), at: Point::new(x, y) }
    }

    #[test]
    fn test_add_node_uses_canvas_coordinates() {
        let mut editor = editor();
        editor.handle(EditorEvent::ZoomIn).unwrap();
        for _ in 0..9 {
            editor.handle(EditorEvent::ZoomIn).unwrap();
        }
        assert_eq!(editor.scale(), 2.0);

        let id = add_node(&mut editor, 200.0, 100.0);
        assert_eq!(editor.graph().node(&id).unwrap().position, Point::new(100.0, 50.0));
    }

    #[test]
    fn test_canvas_click_outside_add_node_is_ignored() {
        let mut editor = editor();
        for tool in [Tool::Select, Tool::AddEdge, Tool::Edit] {
            editor.select_tool(tool);
            let outcome = editor.handle(EditorEvent::CanvasClick(Point::new(1.0, 1.0))).unwrap();
            assert_eq!(outcome, Outcome::Ignored);
        }
        assert!(editor.graph().is_empty());
    }

    #[test]
    fn test_add_edge_gesture() {
        let mut editor = editor();
        let a = add_node(&mut editor, 10.0, 10.0);
        let b = add_node(&mut editor, 100.0, 10.0);
        editor.select_tool(Tool::AddEdge);

        assert_eq!(editor.handle(down(&a, 10.0, 10.0)).unwrap(), Outcome::EdgePending(a.clone()));
        // the click that follows the same pointer-down does nothing
        assert_eq!(editor.handle(EditorEvent::NodeClick(a.clone())).unwrap(), Outcome::Ignored);
        assert_eq!(editor.pending_edge(), Some(a.as_str()));

        // a second pointer-down does not replace the pending source
        assert_eq!(editor.handle(down(&b, 100.0, 10.0)).unwrap(), Outcome::Ignored);

        let outcome = editor.handle(EditorEvent::NodeClick(b.clone())).unwrap();
        assert!(matches!(outcome, Outcome::EdgeAdded(_)));
        assert_eq!(editor.pending_edge(), None);

        let edge = &editor.graph().edges()[0];
        assert_eq!((edge.from.as_str(), edge.to.as_str()), (a.as_str(), b.as_str()));
        assert_eq!(edge.weight, 1.0);
    }

    #[test]
    fn test_click_without_pending_edge_is_ignored() {
        let mut editor = editor();
        let a = add_node(&mut editor, 10.0, 10.0);
        editor.select_tool(Tool::AddEdge);
        assert_eq!(editor.handle(EditorEvent::NodeClick(a)).unwrap(), Outcome::Ignored);
        assert_eq!(editor.graph().edge_count(), 0);
    }

    #[test]
    fn test_switching_tool_drops_pending_edge() {
        let mut editor = editor();
        let a = add_node(&mut editor, 10.0, 10.0);
        editor.select_tool(Tool::AddEdge);
        editor.handle(down(&a, 10.0, 10.0)).unwrap();
        editor.select_tool(Tool::Select);
        assert_eq!(editor.pending_edge(), None);
    }

    #[test]
    fn test_switching_tool_ends_drag() {
        let mut editor = editor();
        let a = add_node(&mut editor, 10.0, 10.0);
        editor.select_tool(Tool::Select);
        editor.handle(down(&a, 10.0, 10.0)).unwrap();
        assert_eq!(editor.dragging(), Some(a.as_str()));

        let outcome = editor.handle(EditorEvent::SelectTool(Tool::AddEdge)).unwrap();
        assert_eq!(outcome, Outcome::ToolChanged(Tool::AddEdge));
        assert_eq!(editor.tool(), Tool::AddEdge);
        assert_eq!(editor.dragging(), None);
    }

    #[test]
    fn test_pointer_down_on_unknown_node() {
        let mut editor = editor();
        editor.select_tool(Tool::AddEdge);
        assert_eq!(
            editor.handle(down("ghost", 0.0, 0.0)),
            Err(GraphError::NotFound("ghost".to_string()))
        );
        editor.select_tool(Tool::Select);
        assert!(editor.handle(down("ghost", 0.0, 0.0)).is_err());
        assert_eq!(editor.dragging(), None);
    }

    #[test]
    fn test_drag_moves_by_canvas_delta() {
        for zoom_steps in [0, 5, -5] {
            let mut editor = editor();
            for _ in 0..zoom_steps.max(0) {
                editor.handle(EditorEvent::ZoomIn).unwrap();
            }
            for _ in 0..(-zoom_steps).max(0) {
                editor.handle(EditorEvent::ZoomOut).unwrap();
            }
            let scale = editor.scale();

            let a = add_node(&mut editor, 50.0 * scale, 60.0 * scale);
            let before = editor.graph().node(&a).unwrap().position;
            editor.select_tool(Tool::Select);

            editor.handle(down(&a, 50.0 * scale, 60.0 * scale)).unwrap();
            editor.handle(EditorEvent::PointerMove(Point::new(55.0 * scale, 62.0 * scale))).unwrap();
            editor.handle(EditorEvent::PointerMove(Point::new(80.0 * scale, 40.0 * scale))).unwrap();
            assert_eq!(editor.handle(EditorEvent::PointerUp).unwrap(), Outcome::DragEnded(a.clone()));

            // total canvas displacement is (30, -20) whatever the scale
            let after = editor.graph().node(&a).unwrap().position;
            assert!((after.x - (before.x + 30.0)).abs() < 1e-9, "scale {scale}");
            assert!((after.y - (before.y - 20.0)).abs() < 1e-9, "scale {scale}");
        }
    }

    #[test]
    fn test_only_one_drag_at_a_time() {
        let mut editor = editor();
        let a = add_node(&mut editor, 10.0, 10.0);
        let b = add_node(&mut editor, 100.0, 10.0);
        editor.select_tool(Tool::Select);

        assert_eq!(editor.handle(down(&a, 10.0, 10.0)).unwrap(), Outcome::DragStarted(a.clone()));
        assert_eq!(editor.handle(down(&b, 100.0, 10.0)).unwrap(), Outcome::Ignored);
        assert_eq!(editor.dragging(), Some(a.as_str()));

        editor.handle(EditorEvent::PointerMove(Point::new(20.0, 20.0))).unwrap();
        assert_eq!(editor.graph().node(&b).unwrap().position, Point::new(100.0, 10.0));
    }

    #[test]
    fn test_pointer_move_without_drag() {
        let mut editor = editor();
        add_node(&mut editor, 10.0, 10.0);
        editor.select_tool(Tool::Select);
        assert_eq!(editor.handle(EditorEvent::PointerMove(Point::new(5.0, 5.0))).unwrap(), Outcome::Ignored);
        assert_eq!(editor.handle(EditorEvent::PointerUp).unwrap(), Outcome::Ignored);
    }

    #[test]
    fn test_drag_keeps_edges() {
        let mut editor = editor();
        let a = add_node(&mut editor, 10.0, 10.0);
        let b = add_node(&mut editor, 100.0, 10.0);
        editor.select_tool(Tool::AddEdge);
        editor.handle(down(&a, 10.0, 10.0)).unwrap();
        editor.handle(EditorEvent::NodeClick(b.clone())).unwrap();

        editor.select_tool(Tool::Select);
        editor.handle(down(&b, 100.0, 10.0)).unwrap();
        editor.handle(EditorEvent::PointerMove(Point::new(100.0, 90.0))).unwrap();
        editor.handle(EditorEvent::PointerUp).unwrap();

        assert_eq!(editor.graph().edge_count(), 1);
        assert!(editor.graph().edges()[0].connects(&a, &b));
    }

    #[test]
    fn test_edit_mode_ignores_pointer_input() {
        let mut editor = editor();
        let a = add_node(&mut editor, 10.0, 10.0);
        editor.select_tool(Tool::Edit);
        assert_eq!(editor.handle(down(&a, 10.0, 10.0)).unwrap(), Outcome::Ignored);
        assert_eq!(editor.handle(EditorEvent::NodeClick(a.clone())).unwrap(), Outcome::Ignored);
        assert_eq!(editor.handle(EditorEvent::PointerMove(Point::new(1.0, 1.0))).unwrap(), Outcome::Ignored);
        assert_eq!(editor.graph().node(&a).unwrap().position, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_run_on_empty_graph_is_ignored() {
        let mut editor = editor();
        assert_eq!(editor.handle(EditorEvent::Run).unwrap(), Outcome::Ignored);
        assert!(!editor.is_running());
    }

    #[test]
    fn test_run_and_elapse() {
        let mut editor = editor();
        add_node(&mut editor, 10.0, 10.0);

        let ticket = match editor.handle(EditorEvent::Run).unwrap() {
            Outcome::RunStarted(ticket) => ticket,
            other => panic!("expected a run, got {other:?}"),
        };
        assert_eq!(ticket.duration, Duration::from_millis(800));
        assert!(editor.is_running());

        assert_eq!(editor.handle(EditorEvent::RunElapsed(ticket)).unwrap(), Outcome::RunFinished);
        assert!(!editor.is_running());
    }

    #[test]
    fn test_stale_timer_does_not_clear_new_run() {
        let mut editor = editor();
        add_node(&mut editor, 10.0, 10.0);

        let Outcome::RunStarted(stale) = editor.handle(EditorEvent::Run).unwrap() else {
            panic!("run did not start");
        };
        editor.handle(EditorEvent::Reset).unwrap();
        add_node(&mut editor, 10.0, 10.0);
        let Outcome::RunStarted(fresh) = editor.handle(EditorEvent::Run).unwrap() else {
            panic!("run did not start");
        };

        assert_eq!(editor.handle(EditorEvent::RunElapsed(stale)).unwrap(), Outcome::Ignored);
        assert!(editor.is_running());
        assert_eq!(editor.handle(EditorEvent::RunElapsed(fresh)).unwrap(), Outcome::RunFinished);
    }

    #[test]
    fn test_reset_and_delete() {
        let mut editor = editor();
        let a = add_node(&mut editor, 10.0, 10.0);
        let b = add_node(&mut editor, 50.0, 10.0);
        editor.select_tool(Tool::AddEdge);
        editor.handle(down(&a, 10.0, 10.0)).unwrap();
        editor.handle(EditorEvent::NodeClick(b)).unwrap();

        editor.handle(EditorEvent::Run).unwrap();
        assert_eq!(editor.handle(EditorEvent::Delete).unwrap(), Outcome::Cleared);
        assert!(editor.graph().is_empty());
        assert_eq!(editor.graph().edge_count(), 0);
        // delete leaves the highlight running
        assert!(editor.is_running());

        add_node(&mut editor, 10.0, 10.0);
        editor.handle(EditorEvent::Reset).unwrap();
        assert!(editor.graph().is_empty());
        assert!(!editor.is_running());
    }

    #[test]
    fn test_node_at() {
        let mut editor = editor();
        let a = add_node(&mut editor, 100.0, 100.0);
        assert_eq!(editor.node_at(Point::new(105.0, 98.0)).unwrap(), Some(a.clone()));
        assert_eq!(editor.node_at(Point::new(300.0, 300.0)).unwrap(), None);

        // at 2x the node appears at (200, 200) on screen
        for _ in 0..10 {
            editor.handle(EditorEvent::ZoomIn).unwrap();
        }
        assert_eq!(editor.node_at(Point::new(200.0, 200.0)).unwrap(), Some(a));
    }

    #[test]
    fn test_editor_shortest_paths() {
        let mut editor = editor();
        let a = add_node(&mut editor, 0.0, 0.0);
        let b = add_node(&mut editor, 50.0, 0.0);
        let c = add_node(&mut editor, 100.0, 0.0);
        editor.select_tool(Tool::AddEdge);
        for (from, to) in [(&a, &b), (&b, &c)] {
            editor.handle(down(from, 0.0, 0.0)).unwrap();
            editor.handle(EditorEvent::NodeClick(to.clone())).unwrap();
        }

        let result = editor.shortest_paths(&a, Some(c.as_str())).unwrap();
        assert_eq!(result.path(), [a, b, c].as_slice());
        assert_eq!(result.total(), Some(2.0));
    }
}
