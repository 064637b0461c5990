// render.rs - Seam between the engine and whatever draws the grid

use crate::grid::Grid;

/// Draws (or otherwise consumes) the grid after every state-affecting
/// operation. Receives a borrow only; keeping the frame means cloning it.
pub trait Renderer {
    fn render(&mut self, grid: &Grid);
}

/// Discards frames.
impl Renderer for () {
    fn render(&mut self, _grid: &Grid) {}
}

/// Keeps every frame in order. Handy for replay and assertions.
impl Renderer for Vec<Grid> {
    fn render(&mut self, grid: &Grid) {
        self.push(grid.clone());
    }
}
