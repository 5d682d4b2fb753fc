use crate::grid::Position;
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::{Duration, Instant};

/// How a search call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    Success,
    NoPath,
    /// Start or end was not set; nothing was touched.
    InvalidRequest,
    /// The render port asked to stop.
    Aborted,
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SearchOutcome::Success => "path found",
            SearchOutcome::NoPath => "no path",
            SearchOutcome::InvalidRequest => "invalid request",
            SearchOutcome::Aborted => "aborted",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub elapsed: Duration,
    /// Distinct cells pushed into the frontier, start excluded.
    pub analyzed: usize,
    /// Moves on the reconstructed path; 0 unless the search succeeded.
    pub path_length: usize,
    /// Accumulated edge cost of the path.
    pub cost: Option<f64>,
    /// Cells from start to goal, inclusive; empty unless the search succeeded.
    pub path: Vec<Position>,
}

impl SearchReport {
    pub fn is_success(&self) -> bool {
        self.outcome == SearchOutcome::Success
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Outcome: {}", self.outcome)?;
        writeln!(f, "Time: {:.4} seconds", self.elapsed.as_secs_f64())?;
        writeln!(f, "Nodes analyzed: {}", self.analyzed)?;
        writeln!(f, "Path length: {} moves", self.path_length)?;
        if let Some(cost) = self.cost {
            writeln!(f, "Path cost: {:.3}", cost)?;
        }
        Ok(())
    }
}

/// Collects timing and discovery counts for one search call.
#[derive(Debug)]
pub struct MetricsRecorder {
    started: Instant,
    origin: Option<Position>,
    discovered: FxHashSet<Position>,
}

impl MetricsRecorder {
    pub fn start() -> Self {
        MetricsRecorder {
            started: Instant::now(),
            origin: None,
            discovered: FxHashSet::default(),
        }
    }

    /// Cells equal to `origin` are never counted as analyzed.
    pub fn with_origin(mut self, origin: Position) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Records a frontier insertion. Returns `true` on first discovery.
    pub fn discover(&mut self, pos: Position) -> bool {
        if self.origin == Some(pos) {
            return false;
        }
        self.discovered.insert(pos)
    }

    pub fn analyzed(&self) -> usize {
        self.discovered.len()
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn report(&self, outcome: SearchOutcome) -> SearchReport {
        SearchReport {
            outcome,
            elapsed: self.elapsed(),
            analyzed: self.analyzed(),
            path_length: 0,
            cost: None,
            path: Vec::new(),
        }
    }

    pub fn success(&self, path: Vec<Position>, path_length: usize, cost: f64) -> SearchReport {
        SearchReport {
            path_length,
            cost: Some(cost),
            path,
            ..self.report(SearchOutcome::Success)
        }
    }

    pub fn no_path(&self) -> SearchReport {
        self.report(SearchOutcome::NoPath)
    }

    pub fn aborted(&self) -> SearchReport {
        self.report(SearchOutcome::Aborted)
    }

    pub fn invalid_request(&self) -> SearchReport {
        self.report(SearchOutcome::InvalidRequest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_cell_once_and_skips_origin() {
        let origin = Position::new(0, 0);
        let mut metrics = MetricsRecorder::start().with_origin(origin);

        assert!(!metrics.discover(origin));
        assert!(metrics.discover(Position::new(0, 1)));
        assert!(!metrics.discover(Position::new(0, 1)));
        assert!(metrics.discover(Position::new(1, 1)));

        assert_eq!(metrics.analyzed(), 2);
    }

    #[test]
    fn analyzed_never_decreases_across_rediscovery() {
        let mut metrics = MetricsRecorder::start().with_origin(Position::new(0, 0));
        let visits = [(0, 1), (1, 1), (0, 1), (0, 0), (2, 2), (1, 1), (2, 2), (3, 0)];

        let mut counts = Vec::new();
        for (row, col) in visits {
            metrics.discover(Position::new(row, col));
            counts.push(metrics.analyzed());
        }

        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(counts, vec![1, 2, 2, 2, 3, 3, 3, 4]);
    }

    #[test]
    fn failure_reports_carry_no_path() {
        let mut metrics = MetricsRecorder::start();
        metrics.discover(Position::new(3, 3));

        let report = metrics.no_path();
        assert_eq!(report.outcome, SearchOutcome::NoPath);
        assert_eq!(report.analyzed, 1);
        assert_eq!(report.path_length, 0);
        assert!(report.path.is_empty());
        assert_eq!(report.cost, None);
    }

    #[test]
    fn display_lists_metrics() {
        let metrics = MetricsRecorder::start();
        let report = metrics.success(vec![Position::new(0, 0), Position::new(0, 1)], 1, 1.0);
        let text = report.to_string();
        assert!(text.contains("Outcome: path found"));
        assert!(text.contains("Path length: 1 moves"));
        assert!(text.contains("Path cost: 1.000"));
    }
}
