//! Independent shortest-path answers used to check the engine.

use crate::algorithms::common::DIRECTIONS;
use crate::grid::{Grid, Position};
use pathfinding::prelude::bfs;

/// Fewest moves between the grid's start and end on the 8-connected grid,
/// computed with the `pathfinding` crate. `None` when either endpoint is unset
/// or the end is unreachable.
pub fn minimum_moves(grid: &Grid) -> Option<usize> {
    let start = grid.start()?;
    let end = grid.end()?;
    bfs(&start, |p| successors(grid, *p), |p| *p == end).map(|path| path.len() - 1)
}

fn successors(grid: &Grid, pos: Position) -> Vec<Position> {
    DIRECTIONS
        .iter()
        .filter_map(|&(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            Some(Position { row, col })
        })
        .filter(|&next| grid.in_bounds(next) && !grid.is_obstacle(next))
        .collect()
}
