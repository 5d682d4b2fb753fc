use crate::grid::{CellState, Grid, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTrace {
    /// Number of moves from start to goal.
    pub length: usize,
    /// Cells from start to goal, inclusive.
    pub positions: Vec<Position>,
}

/// Walks predecessor links back from `goal`, marking every cell between the
/// endpoints as `Path`.
///
/// The walk stops at the first cell without a predecessor, which is the
/// start. It is bounded by the number of grid cells, so a corrupt link table
/// cannot loop forever.
pub fn reconstruct_path<F>(grid: &mut Grid, goal: Position, predecessor: F) -> PathTrace
where
    F: Fn(Position) -> Option<Position>,
{
    let limit = grid.size() * grid.size();
    let mut positions = vec![goal];
    let mut current = goal;

    while let Some(previous) = predecessor(current) {
        if positions.len() > limit {
            break;
        }
        if predecessor(previous).is_some() {
            grid.mark(previous, CellState::Path);
        }
        positions.push(previous);
        current = previous;
    }

    positions.reverse();
    PathTrace {
        length: positions.len() - 1,
        positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn marks_intermediate_cells_only() {
        let mut grid = Grid::new(3);
        let start = Position::new(0, 0);
        let goal = Position::new(2, 2);
        grid.set_start(start).unwrap();
        grid.set_end(goal).unwrap();

        let links: HashMap<_, _> = [
            (Position::new(1, 1), start),
            (goal, Position::new(1, 1)),
        ]
        .into_iter()
        .collect();

        let trace = reconstruct_path(&mut grid, goal, |p| links.get(&p).copied());

        assert_eq!(trace.length, 2);
        assert_eq!(trace.positions, vec![start, Position::new(1, 1), goal]);
        assert_eq!(grid.state(start), Some(CellState::Start));
        assert_eq!(grid.state(goal), Some(CellState::End));
        assert_eq!(grid.state(Position::new(1, 1)), Some(CellState::Path));
        assert_eq!(grid.count(CellState::Path), 1);
    }

    #[test]
    fn adjacent_endpoints_have_length_one() {
        let mut grid = Grid::new(2);
        let start = Position::new(0, 0);
        let goal = Position::new(0, 1);

        let trace = reconstruct_path(&mut grid, goal, |p| (p == goal).then_some(start));

        assert_eq!(trace.length, 1);
        assert_eq!(grid.count(CellState::Path), 0);
    }

    #[test]
    fn cyclic_links_terminate() {
        let mut grid = Grid::new(2);
        let a = Position::new(0, 0);
        let b = Position::new(1, 1);

        let trace = reconstruct_path(&mut grid, a, |p| Some(if p == a { b } else { a }));

        assert!(trace.length <= 4);
    }
}
