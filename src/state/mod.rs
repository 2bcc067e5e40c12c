mod editor_state;
pub mod context;
mod tool_state;

pub use context::Editor;
pub use editor_state::StrokeState;
pub use tool_state::ToolState;
