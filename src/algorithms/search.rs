use crate::algorithms::frontier::PriorityFrontier;
use crate::algorithms::neighbors::{NeighborEdge, NeighborGraph};
use crate::algorithms::path::reconstruct_path;
use crate::config::SearchConfig;
use crate::grid::{CellState, Grid, Position};
use crate::render::RenderPort;
use crate::statistics::{MetricsRecorder, SearchReport};
use tracing::{debug, trace, warn};

/// Best-known distances for one cell during a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRecord {
    pub g: f64,
    pub f: f64,
    pub predecessor: Option<Position>,
}

impl Default for SearchRecord {
    fn default() -> Self {
        SearchRecord {
            g: f64::INFINITY,
            f: f64::INFINITY,
            predecessor: None,
        }
    }
}

/// Best-first grid search shared by the Dijkstra and A* variants.
///
/// The engine keeps its record table and neighbor buffer between calls so
/// repeated searches on the same grid size do not reallocate.
#[derive(Debug, Default)]
pub struct SearchEngine {
    records: Vec<SearchRecord>,
    nbuf: Vec<NeighborEdge>,
    expansions: usize,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node expansions performed by the last search.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Record of `pos` from the last search. Empty after an aborted or
    /// rejected search.
    pub fn record(&self, grid: &Grid, pos: Position) -> Option<SearchRecord> {
        if !grid.in_bounds(pos) {
            return None;
        }
        self.records.get(pos.row * grid.size() + pos.col).copied()
    }

    pub fn run<R>(&mut self, grid: &mut Grid, config: SearchConfig, renderer: &mut R) -> SearchReport
    where
        R: RenderPort + ?Sized,
    {
        let metrics = MetricsRecorder::start();
        self.expansions = 0;
        self.records.clear();

        let (Some(start), Some(goal)) = (grid.start(), grid.end()) else {
            warn!(
                start = ?grid.start(),
                end = ?grid.end(),
                "search requested without both endpoints"
            );
            return metrics.invalid_request();
        };
        let mut metrics = metrics.with_origin(start);

        debug!(%config, %start, %goal, size = grid.size(), "starting search");

        grid.clear_search_marks();
        let size = grid.size();
        let idx = |p: Position| p.row * size + p.col;

        self.records.resize(size * size, SearchRecord::default());

        let graph = NeighborGraph::build(grid, config.neighbor_mode, config.cost_policy);
        let mut frontier = PriorityFrontier::new();

        let start_priority = config.algorithm.estimate(start, goal);
        self.records[idx(start)] = SearchRecord {
            g: 0.0,
            f: start_priority,
            predecessor: None,
        };
        frontier.push(start_priority, start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let report = 'search: loop {
            let Some(entry) = frontier.pop_min() else {
                break 'search metrics.no_path();
            };
            let current = entry.position;

            // Stale entry for a cell finalized through a cheaper one.
            if grid.state(current) == Some(CellState::Closed) {
                continue;
            }

            if current == goal {
                let records = &self.records;
                let trace = reconstruct_path(grid, goal, |p| records[idx(p)].predecessor);
                let cost = self.records[idx(goal)].g;
                // The search is complete; a stop request here changes nothing.
                let _ = renderer.render_frame(grid);
                break 'search metrics.success(trace.positions, trace.length, cost);
            }

            self.expansions += 1;
            let current_g = self.records[idx(current)].g;

            nbuf.clear();
            graph.neighbors(grid, current, &mut nbuf);

            for edge in nbuf.iter() {
                let tentative_g = current_g + edge.cost;
                let record = &mut self.records[idx(edge.target)];
                if tentative_g >= record.g {
                    continue;
                }

                record.g = tentative_g;
                record.f = tentative_g + config.algorithm.estimate(edge.target, goal);
                record.predecessor = Some(current);
                frontier.push(record.f, edge.target);
                metrics.discover(edge.target);

                // A closed cell reached more cheaply is reopened and expanded again.
                if matches!(
                    grid.state(edge.target),
                    Some(CellState::Empty | CellState::Closed)
                ) {
                    grid.mark(edge.target, CellState::Open);
                }
            }

            if current != start {
                grid.mark(current, CellState::Closed);
            }
            trace!(%current, g = current_g, frontier = frontier.len(), "expanded");

            if renderer.render_frame(grid).is_break() {
                self.records.clear();
                break 'search metrics.aborted();
            }
        };

        self.nbuf = nbuf;

        debug!(
            outcome = %report.outcome,
            analyzed = report.analyzed,
            path_length = report.path_length,
            expansions = self.expansions,
            elapsed = ?report.elapsed,
            "search finished"
        );
        report
    }
}
