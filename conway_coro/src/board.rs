// board.rs - The clickable grid, drawn as an egui widget

use conway::SharedGrid;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};
use log::{debug, warn};

pub struct Board<'a> {
    pub grid: &'a SharedGrid,
    pub cell_size: f32,
    pub spacing: f32,
    pub live_color: Color32,
    pub dead_color: Color32,
}

pub fn cell_rect(origin: Pos2, x: usize, y: usize, cell_size: f32, spacing: f32) -> Rect {
    let pitch = cell_size + spacing;
    Rect::from_min_size(
        origin + Vec2::new(x as f32 * pitch, y as f32 * pitch),
        Vec2::splat(cell_size),
    )
}

/// Map a pointer position to the cell under it. Clicks on the spacing between
/// cells or outside the board hit nothing.
pub fn cell_at(
    origin: Pos2,
    pos: Pos2,
    cell_size: f32,
    spacing: f32,
    rows: usize,
    cols: usize,
) -> Option<(usize, usize)> {
    let rel = pos - origin;
    if rel.x < 0.0 || rel.y < 0.0 {
        return None;
    }
    let pitch = cell_size + spacing;
    let (x, y) = ((rel.x / pitch) as usize, (rel.y / pitch) as usize);
    let inside = rel.x - x as f32 * pitch <= cell_size && rel.y - y as f32 * pitch <= cell_size;
    (inside && x < cols && y < rows).then_some((x, y))
}

impl egui::Widget for Board<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let (rows, cols) = self.grid.dimensions();
        let pitch = self.cell_size + self.spacing;
        let size = Vec2::new(pitch * cols as f32 - self.spacing, pitch * rows as f32 - self.spacing);

        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let origin = response.rect.min;

        // Edits go straight to the grid; the mutex orders them against the driver.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some((x, y)) = cell_at(origin, pos, self.cell_size, self.spacing, rows, cols) {
                    match self.grid.toggle(x, y) {
                        Ok(())   => debug!("toggled ({x}, {y})"),
                        Err(err) => warn!("toggle failed: {err}"),
                    }
                }
            }
        }

        painter.rect_filled(response.rect, 0.0, Color32::BLACK);
        self.grid.read(|grid| {
            for (x, y, cell) in grid.cells() {
                let rect = cell_rect(origin, x, y, self.cell_size, self.spacing);
                let color = if cell.is_alive() { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        });

        response
    }
}
