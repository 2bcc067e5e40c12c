//! The editor context: owns the grid and the tool state and turns each
//! inbound [`InputEvent`] into grid mutations plus the notifications that
//! describe them.
//!
//! Every event is handled to completion before `handle` returns. When an
//! event is rejected (a coordinate off the grid, an invalid grid size) the
//! grid, tool state and stroke state are left exactly as they were.
//!
//! # Example
//!
//! ```rust
//! use pixel_paint::{Coord, Editor, InputEvent};
//!
//! let mut editor = Editor::default();
//! let events = editor.handle(&InputEvent::PointerPress(Coord::new(2, 3))).unwrap();
//! assert!(!events.is_empty());
//! editor.handle(&InputEvent::PointerRelease).unwrap();
//! ```

use super::{StrokeState, ToolState};
use crate::color::Color;
use crate::config::EditorConfig;
use crate::error::{EditorResult, GridResult};
use crate::event::EditorEvent;
use crate::grid::{Coord, Grid};
use crate::input::InputEvent;
use crate::symmetry::SymmetrySettings;
use crate::tools::{ToolContext, ToolKind};

#[derive(Debug, Clone)]
pub struct Editor {
    grid: Grid,
    tools: ToolState,
    stroke: StrokeState,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            tools: ToolState::default(),
            stroke: StrokeState::Idle,
        }
    }
}

impl Editor {
    /// Creates an editor with a blank grid and the configured tool choices
    pub fn new(config: &EditorConfig) -> GridResult<Self> {
        Ok(Self {
            grid: Grid::new(config.grid_size, config.background)?,
            tools: ToolState::from_config(config),
            stroke: StrokeState::Idle,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tools
    }

    pub fn active_tool(&self) -> ToolKind {
        self.tools.active_tool
    }

    pub fn paint_color(&self) -> Color {
        self.tools.paint_color
    }

    pub fn stroke(&self) -> StrokeState {
        self.stroke
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_drawing()
    }

    /// Applies one inbound event and returns the resulting notifications
    pub fn handle(&mut self, event: &InputEvent) -> EditorResult<Vec<EditorEvent>> {
        log::debug!("Handling {event:?}");
        let mut events = Vec::new();
        match *event {
            InputEvent::PointerPress(coord) => self.pointer_press(coord, &mut events)?,
            InputEvent::PointerDrag(coord) => self.pointer_drag(coord, &mut events)?,
            InputEvent::PointerRelease => self.end_stroke(&mut events),
            InputEvent::ToolSelected(tool) => self.select_tool(tool, &mut events),
            InputEvent::ColorPicked(color) => self.pick_color(color, &mut events),
            InputEvent::SymmetryToggled(enabled) => {
                let symmetry = SymmetrySettings {
                    enabled,
                    ..self.tools.symmetry
                };
                self.set_symmetry(symmetry, &mut events);
            }
            InputEvent::SymmetryModeChanged(mode) => {
                let symmetry = SymmetrySettings {
                    mode,
                    ..self.tools.symmetry
                };
                self.set_symmetry(symmetry, &mut events);
            }
            InputEvent::ResizeRequested(size) => self.resize(size, &mut events)?,
            InputEvent::ClearRequested => self.clear(&mut events),
        }
        Ok(events)
    }

    fn pointer_press(&mut self, coord: Coord, events: &mut Vec<EditorEvent>) -> EditorResult<()> {
        let kind = self.tools.active_tool;
        let tool = kind.tool();

        // Run the tool first so a rejected press leaves the stroke state alone
        let mut tool_events = Vec::new();
        let mut ctx = ToolContext {
            grid: &mut self.grid,
            state: &mut self.tools,
            events: &mut tool_events,
        };
        if let Err(err) = tool.on_pointer_press(coord, &mut ctx) {
            log::warn!("{} press at ({}, {}) rejected: {err}", kind, coord.row, coord.col);
            return Err(err);
        }

        self.end_stroke(events);
        self.transition_to(StrokeState::Drawing { tool: kind });
        events.push(EditorEvent::StrokeStarted { tool: kind });
        events.append(&mut tool_events);
        Ok(())
    }

    fn pointer_drag(&mut self, coord: Coord, events: &mut Vec<EditorEvent>) -> EditorResult<()> {
        if self.stroke.is_idle() {
            log::trace!("Ignoring drag at ({}, {}) with no active stroke", coord.row, coord.col);
            return Ok(());
        }

        // Drags follow whichever tool is active now, not the one that pressed
        let kind = self.tools.active_tool;
        let mut ctx = ToolContext {
            grid: &mut self.grid,
            state: &mut self.tools,
            events,
        };
        kind.tool().on_pointer_drag(coord, &mut ctx)
    }

    fn end_stroke(&mut self, events: &mut Vec<EditorEvent>) {
        if let Some(tool) = self.stroke.current_tool() {
            self.transition_to(StrokeState::Idle);
            events.push(EditorEvent::StrokeEnded { tool });
        }
    }

    fn transition_to(&mut self, new_state: StrokeState) {
        debug_assert!(
            self.stroke.can_transition_to(&new_state),
            "invalid stroke transition {:?} -> {new_state:?}",
            self.stroke
        );
        self.stroke = new_state;
    }

    fn select_tool(&mut self, tool: ToolKind, events: &mut Vec<EditorEvent>) {
        let mut ctx = ToolContext {
            grid: &mut self.grid,
            state: &mut self.tools,
            events,
        };
        ctx.select_tool(tool);
        log::info!("Tool: {}", tool.name().to_uppercase());
    }

    /// A color chosen from the picker or a palette always hands over to the pen
    fn pick_color(&mut self, color: Color, events: &mut Vec<EditorEvent>) {
        if self.tools.paint_color != color {
            self.tools.paint_color = color;
            events.push(EditorEvent::PaintColorChanged(color));
        }
        if self.tools.active_tool != ToolKind::Pen {
            self.select_tool(ToolKind::Pen, events);
        }
    }

    fn set_symmetry(&mut self, symmetry: SymmetrySettings, events: &mut Vec<EditorEvent>) {
        if self.tools.symmetry != symmetry {
            self.tools.symmetry = symmetry;
            events.push(EditorEvent::SymmetryChanged(symmetry));
            log::info!(
                "Symmetry {} ({})",
                if symmetry.enabled { "on" } else { "off" },
                symmetry.mode
            );
        }
    }

    fn resize(&mut self, size: usize, events: &mut Vec<EditorEvent>) -> EditorResult<()> {
        if let Err(err) = self.grid.resize(size) {
            log::warn!("Resize rejected: {err}");
            return Err(err.into());
        }
        self.end_stroke(events);
        log::info!("Created {size}x{size} canvas");
        events.push(self.rebuilt_event());
        Ok(())
    }

    fn clear(&mut self, events: &mut Vec<EditorEvent>) {
        self.end_stroke(events);
        self.grid.clear();
        log::info!("Canvas cleared");
        events.push(self.rebuilt_event());
    }

    fn rebuilt_event(&self) -> EditorEvent {
        EditorEvent::GridRebuilt {
            size: self.grid.size(),
            background: self.grid.background(),
        }
    }
}
