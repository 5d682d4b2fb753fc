use crate::config::{AlgorithmVariant, CostPolicy};
use crate::grid::Position;
use std::f64::consts::SQRT_2;

/// Row/column offsets of the eight adjacent cells, orthogonal first.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Straight-line distance between grid coordinates.
pub fn euclidean(a: Position, b: Position) -> f64 {
    let dr = a.row as f64 - b.row as f64;
    let dc = a.col as f64 - b.col as f64;
    (dr * dr + dc * dc).sqrt()
}

impl CostPolicy {
    /// Cost of one move along `(dr, dc)`.
    pub fn step_cost(self, dr: isize, dc: isize) -> f64 {
        match self {
            CostPolicy::Octile if dr != 0 && dc != 0 => SQRT_2,
            CostPolicy::Octile | CostPolicy::Uniform => 1.0,
        }
    }
}

impl AlgorithmVariant {
    /// Remaining-cost estimate; Dijkstra is A* with a zero heuristic.
    pub fn estimate(self, from: Position, goal: Position) -> f64 {
        match self {
            AlgorithmVariant::AStar => euclidean(from, goal),
            AlgorithmVariant::Dijkstra => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_matches_pythagoras() {
        assert_eq!(euclidean(Position::new(0, 0), Position::new(3, 4)), 5.0);
        assert_eq!(euclidean(Position::new(2, 2), Position::new(2, 2)), 0.0);
    }

    #[test]
    fn octile_charges_diagonals_more() {
        assert_eq!(CostPolicy::Octile.step_cost(0, 1), 1.0);
        assert_eq!(CostPolicy::Octile.step_cost(-1, 1), SQRT_2);
        assert_eq!(CostPolicy::Uniform.step_cost(-1, 1), 1.0);
    }

    #[test]
    fn dijkstra_has_no_heuristic() {
        let (a, b) = (Position::new(0, 0), Position::new(4, 4));
        assert_eq!(AlgorithmVariant::Dijkstra.estimate(a, b), 0.0);
        assert!(AlgorithmVariant::AStar.estimate(a, b) > 5.6);
    }
}
