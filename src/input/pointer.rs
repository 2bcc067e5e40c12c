use eframe::egui::{self, Rect};

use super::InputEvent;
use crate::geometry::cell_at;
use crate::grid::Coord;

/// Primary-button state for one frame, reduced to the cell under the pointer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerSample {
    /// The button went down this frame
    pub pressed: bool,
    /// The button is currently held
    pub down: bool,
    /// The button went up this frame
    pub released: bool,
    /// Cell under the pointer, `None` when off the canvas
    pub cell: Option<Coord>,
}

impl PointerSample {
    /// Reads the primary button from egui and maps the pointer onto the canvas
    pub fn from_egui(ctx: &egui::Context, canvas: Rect, grid_size: usize) -> Self {
        ctx.input(|input| {
            let pointer = &input.pointer;
            Self {
                pressed: pointer.primary_pressed(),
                down: pointer.primary_down(),
                released: pointer.primary_released(),
                cell: pointer
                    .interact_pos()
                    .and_then(|pos| cell_at(canvas, pos, grid_size)),
            }
        })
    }
}

/// Turns per-frame pointer samples into press/drag/release events.
///
/// A drag is reported once per cell entered, never for the cell the pointer
/// is already on. A release is reported wherever the button goes up, as long
/// as the press landed on the canvas.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    tracking: bool,
    last_cell: Option<Coord>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn update(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if sample.pressed {
            if let Some(cell) = sample.cell {
                self.tracking = true;
                self.last_cell = Some(cell);
                events.push(InputEvent::PointerPress(cell));
            }
        } else if self.tracking && sample.down {
            if let Some(cell) = sample.cell.filter(|cell| self.last_cell != Some(*cell)) {
                self.last_cell = Some(cell);
                events.push(InputEvent::PointerDrag(cell));
            }
        }

        if self.tracking && (sample.released || !sample.down) {
            self.tracking = false;
            self.last_cell = None;
            events.push(InputEvent::PointerRelease);
        }

        events
    }
}
