// canvas.rs - Frame cache the egui painter draws from

use conway_core::{Grid, Renderer};

/// Holds the last grid the session rendered. The UI paints this copy, not
/// the live grid, so what is on screen is exactly what the session drew.
pub struct Canvas {
    frame: Grid,
    frames_drawn: u64,
}

impl Canvas {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            frame: Grid::new(rows, cols),
            frames_drawn: 0,
        }
    }

    pub fn frame(&self) -> &Grid {
        &self.frame
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl Renderer for Canvas {
    fn render(&mut self, grid: &Grid) {
        self.frame.clone_from(grid);
        self.frames_drawn += 1;
    }
}
