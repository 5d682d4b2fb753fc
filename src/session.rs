use crate::algorithms::search::SearchEngine;
use crate::config::SearchConfig;
use crate::grid::{Grid, GridError, Position};
use crate::render::RenderPort;
use crate::statistics::SearchReport;

/// One painting surface plus the engine that searches it.
///
/// `trigger_search` borrows the session mutably for the whole search, so
/// no grid mutation can interleave with a running search.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    engine: SearchEngine,
}

impl Session {
    pub fn new(size: usize) -> Self {
        Self::from_grid(Grid::new(size))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Session {
            grid,
            engine: SearchEngine::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    pub fn set_start(&mut self, pos: Position) -> Result<(), GridError> {
        self.grid.set_start(pos)
    }

    pub fn set_end(&mut self, pos: Position) -> Result<(), GridError> {
        self.grid.set_end(pos)
    }

    pub fn toggle_obstacle(&mut self, pos: Position) -> Result<(), GridError> {
        self.grid.toggle_obstacle(pos)
    }

    pub fn paint(&mut self, pos: Position) -> Result<(), GridError> {
        self.grid.paint(pos)
    }

    pub fn clear(&mut self, pos: Position) -> Result<(), GridError> {
        self.grid.clear(pos)
    }

    pub fn reset_all(&mut self) {
        self.grid.reset_all();
    }

    pub fn clear_search_marks(&mut self) {
        self.grid.clear_search_marks();
    }

    pub fn trigger_search<R>(&mut self, config: SearchConfig, renderer: &mut R) -> SearchReport
    where
        R: RenderPort + ?Sized,
    {
        self.engine.run(&mut self.grid, config, renderer)
    }
}
