use crate::algorithms::common::DIRECTIONS;
use crate::config::{CostPolicy, NeighborMode};
use crate::grid::{CellState, Grid, Position};

/// A traversable move to an adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborEdge {
    pub target: Position,
    pub cost: f64,
}

/// Source of neighbor edges for the search engine.
///
/// `Precomputed` snapshots the obstacle layout for every cell before the
/// search. `Dynamic` derives the edges of one cell at a time from the live
/// grid and also leaves out cells that are already closed.
#[derive(Debug, Clone)]
pub enum NeighborGraph {
    Precomputed {
        size: usize,
        adjacency: Vec<Vec<NeighborEdge>>,
    },
    Dynamic {
        cost_policy: CostPolicy,
    },
}

impl NeighborGraph {
    pub fn build(grid: &Grid, mode: NeighborMode, cost_policy: CostPolicy) -> Self {
        match mode {
            NeighborMode::Precomputed => {
                let adjacency = grid
                    .positions()
                    .map(|pos| {
                        let mut edges = Vec::with_capacity(8);
                        collect_edges(grid, pos, cost_policy, false, &mut edges);
                        edges
                    })
                    .collect();
                NeighborGraph::Precomputed {
                    size: grid.size(),
                    adjacency,
                }
            }
            NeighborMode::Dynamic => NeighborGraph::Dynamic { cost_policy },
        }
    }

    /// Append the edges leaving `pos` into `buf`. The caller clears `buf`.
    pub fn neighbors(&self, grid: &Grid, pos: Position, buf: &mut Vec<NeighborEdge>) {
        match self {
            NeighborGraph::Precomputed { size, adjacency } => {
                if let Some(edges) = adjacency.get(pos.row * size + pos.col) {
                    buf.extend_from_slice(edges);
                }
            }
            NeighborGraph::Dynamic { cost_policy } => {
                collect_edges(grid, pos, *cost_policy, true, buf);
            }
        }
    }
}

fn collect_edges(
    grid: &Grid,
    pos: Position,
    cost_policy: CostPolicy,
    skip_closed: bool,
    buf: &mut Vec<NeighborEdge>,
) {
    for (dr, dc) in DIRECTIONS {
        let (Some(row), Some(col)) = (
            pos.row.checked_add_signed(dr),
            pos.col.checked_add_signed(dc),
        ) else {
            continue;
        };
        let target = Position { row, col };
        match grid.state(target) {
            None | Some(CellState::Obstacle) => continue,
            Some(CellState::Closed) if skip_closed => continue,
            Some(_) => buf.push(NeighborEdge {
                target,
                cost: cost_policy.step_cost(dr, dc),
            }),
        }
    }
}
