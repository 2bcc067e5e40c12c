use eframe::egui::{self, Color32, ColorImage, Rect, Stroke, TextureHandle, TextureOptions, pos2};

use crate::event::{EditorEvent, EventHandler};
use crate::geometry::cell_rect;
use crate::grid::{Coord, Grid};

/// Color of the lines drawn between cells
pub const GRID_LINE_COLOR: Color32 = Color32::from_rgb(0x2d, 0x34, 0x36);

/// Outline drawn around the cell under the pointer
pub const HOVER_COLOR: Color32 = Color32::from_rgb(0x00, 0xf5, 0xff);

/// Screen-side copy of the canvas.
///
/// Kept up to date purely from editor notifications and drawn as a single
/// nearest-filtered texture, so cells stay crisp at any zoom.
#[derive(Default)]
pub struct CanvasRenderer {
    size: usize,
    pixels: Vec<Color32>,
    texture: Option<TextureHandle>,
    dirty: bool,
}

impl std::fmt::Debug for CanvasRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasRenderer")
            .field("size", &self.size)
            .field("dirty", &self.dirty)
            .field("has_texture", &self.texture.is_some())
            .finish()
    }
}

impl CanvasRenderer {
    /// Creates a renderer showing the current contents of `grid`
    pub fn new(grid: &Grid) -> Self {
        let mut renderer = Self::default();
        renderer.sync_from_grid(grid);
        renderer
    }

    /// Replaces the pixel buffer with the grid's cells
    pub fn sync_from_grid(&mut self, grid: &Grid) {
        self.size = grid.size();
        self.pixels = grid.cells().iter().map(|&color| color.into()).collect();
        self.dirty = true;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The displayed color of one cell
    pub fn pixel(&self, row: usize, col: usize) -> Option<Color32> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.pixels.get(row * self.size + col).copied()
    }

    /// True when the texture needs uploading before the next draw
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Draws the canvas into `rect`, optionally with lines between cells
    pub fn render(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: Rect, show_grid_lines: bool) {
        if self.size == 0 {
            return;
        }

        if self.dirty || self.texture.is_none() {
            let mut image = ColorImage::new([self.size, self.size], Color32::WHITE);
            image.pixels.copy_from_slice(&self.pixels);
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture("pixel_canvas", image, TextureOptions::NEAREST));
                }
            }
            self.dirty = false;
        }

        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }

        if show_grid_lines {
            self.paint_grid_lines(painter, rect);
        }
    }

    /// Outlines `coord` so the user can see which cell a press would hit.
    /// Returns the outlined rectangle, or `None` when `coord` is off the canvas.
    pub fn paint_hover(&self, painter: &egui::Painter, rect: Rect, coord: Coord) -> Option<Rect> {
        let (Ok(row), Ok(col)) = (usize::try_from(coord.row), usize::try_from(coord.col)) else {
            return None;
        };
        if row >= self.size || col >= self.size {
            return None;
        }
        let cell = cell_rect(rect, coord, self.size);
        painter.rect_stroke(cell, 0.0, Stroke::new(2.0, HOVER_COLOR));
        Some(cell)
    }

    fn paint_grid_lines(&self, painter: &egui::Painter, rect: Rect) {
        let stroke = Stroke::new(1.0, GRID_LINE_COLOR);
        let step = rect.width() / self.size as f32;
        for i in 0..=self.size {
            let offset = i as f32 * step;
            painter.line_segment(
                [pos2(rect.min.x + offset, rect.min.y), pos2(rect.min.x + offset, rect.max.y)],
                stroke,
            );
            painter.line_segment(
                [pos2(rect.min.x, rect.min.y + offset), pos2(rect.max.x, rect.min.y + offset)],
                stroke,
            );
        }
    }
}

impl EventHandler for CanvasRenderer {
    fn handle_event(&mut self, event: &EditorEvent) {
        match *event {
            EditorEvent::CellChanged { row, col, color } => {
                let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
                    return;
                };
                if row < self.size && col < self.size {
                    self.pixels[row * self.size + col] = color.into();
                    self.dirty = true;
                }
            }
            EditorEvent::GridRebuilt { size, background } => {
                self.size = size;
                self.pixels = vec![background.into(); size * size];
                self.dirty = true;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_renderer_starts_from_grid() {
        let grid = Grid::new(4, Color::WHITE).unwrap();
        let renderer = CanvasRenderer::new(&grid);
        assert_eq!(renderer.size(), 4);
        assert!(renderer.is_dirty());
        assert_eq!(renderer.pixel(3, 3), Some(Color32::WHITE));
        assert_eq!(renderer.pixel(4, 0), None);
    }

    #[test]
    fn test_cell_changed_updates_pixel() {
        let mut renderer = CanvasRenderer::new(&Grid::new(4, Color::WHITE).unwrap());
        renderer.handle_event(&EditorEvent::CellChanged {
            row: 1,
            col: 2,
            color: Color::rgb(255, 0, 0),
        });
        assert_eq!(renderer.pixel(1, 2), Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(renderer.pixel(2, 1), Some(Color32::WHITE));

        // Off-canvas notifications are ignored
        renderer.handle_event(&EditorEvent::CellChanged {
            row: -1,
            col: 9,
            color: Color::BLACK,
        });
    }

    #[test]
    fn test_grid_rebuilt_resets_buffer() {
        let mut renderer = CanvasRenderer::new(&Grid::new(4, Color::WHITE).unwrap());
        renderer.handle_event(&EditorEvent::GridRebuilt {
            size: 8,
            background: Color::BLACK,
        });
        assert_eq!(renderer.size(), 8);
        assert_eq!(renderer.pixel(7, 7), Some(Color32::BLACK));
    }

    #[test]
    fn test_render_uploads_texture() {
        let ctx = egui::Context::default();
        let mut renderer = CanvasRenderer::new(&Grid::new(4, Color::WHITE).unwrap());
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = egui::Painter::new(ctx.clone(), egui::LayerId::background(), rect);

        renderer.render(&ctx, &painter, rect, true);
        assert!(!renderer.is_dirty());
    }

    #[test]
    fn test_hover_outlines_one_cell() {
        let ctx = egui::Context::default();
        let renderer = CanvasRenderer::new(&Grid::new(4, Color::WHITE).unwrap());
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = egui::Painter::new(ctx.clone(), egui::LayerId::background(), rect);

        let outline = renderer.paint_hover(&painter, rect, Coord::new(1, 2));
        assert_eq!(outline, Some(Rect::from_min_size(pos2(50.0, 25.0), egui::vec2(25.0, 25.0))));
        assert_eq!(renderer.paint_hover(&painter, rect, Coord::new(4, 0)), None);
        assert_eq!(renderer.paint_hover(&painter, rect, Coord::new(0, -1)), None);
    }
}
