use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::graph::{EdgeId, NodeId};
use super::run::RunTicket;


/// Editor tool mode, exactly one is active
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    #[default]
    Select,
    AddNode,
    AddEdge,
    /// Reserved for weight editing, pointer input does nothing here
    Edit,
}


/// Input delivered by the host page
/// Pointer positions are relative to the canvas element, before zoom is undone
#[derive(Clone, Debug, PartialEq)]
pub enum EditorEvent {
    SelectTool(Tool),
    CanvasClick(Point),
    NodePointerDown { node: NodeId, at: Point },
    NodeClick(NodeId),
    PointerMove(Point),
    PointerUp,
    ZoomIn,
    ZoomOut,
    Run,
    RunElapsed(RunTicket),
    /// Clear the canvas, leaves a running highlight alone
    Delete,
    /// Clear the canvas and stop any run
    Reset,
}


/// What handling an event did, for the renderer to react to
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    ToolChanged(Tool),
    NodeAdded(NodeId),
    EdgePending(NodeId),
    EdgeAdded(EdgeId),
    DragStarted(NodeId),
    NodeMoved(NodeId),
    DragEnded(NodeId),
    Zoomed(f64),
    RunStarted(RunTicket),
    RunFinished,
    Cleared,
    /// Legitimate input with nothing to do in the current state
    Ignored,
}
