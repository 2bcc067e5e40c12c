#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod flood_fill;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod shortcuts;
pub mod state;
pub mod symmetry;
pub mod tools;

pub use app::PaintApp;
pub use color::Color;
pub use config::EditorConfig;
pub use error::{ColorParseError, ConfigError, EditorError, EditorResult, GridError, GridResult};
pub use event::{EditorEvent, EventBus, EventHandler};
pub use flood_fill::flood_fill;
pub use grid::{Coord, Grid};
pub use input::{InputEvent, route_event};
pub use renderer::CanvasRenderer;
pub use state::{Editor, StrokeState, ToolState};
pub use symmetry::{SymmetryMode, SymmetrySettings, mirror};
pub use tools::{Tool, ToolKind};
