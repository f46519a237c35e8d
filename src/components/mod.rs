mod context;
mod editor;
mod graph_canvas;

pub use context::SessionContext;
pub use editor::EditorPanel;
pub use graph_canvas::GraphCanvas;
