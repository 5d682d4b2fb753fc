use clap::{Parser, ValueEnum};
use std::fmt;

use crate::grid::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum AlgorithmVariant {
    Dijkstra,
    AStar,
}

/// Edge weighting on the 8-connected grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CostPolicy {
    /// 1.0 orthogonal, sqrt(2) diagonal.
    Octile,
    /// 1.0 in all eight directions.
    Uniform,
}

/// When neighbor lists are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum NeighborMode {
    /// Built once for every cell before the search starts.
    Precomputed,
    /// Rebuilt for the expanded cell only, skipping closed cells.
    Dynamic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    pub algorithm: AlgorithmVariant,
    pub cost_policy: CostPolicy,
    pub neighbor_mode: NeighborMode,
}

impl SearchConfig {
    pub fn new(
        algorithm: AlgorithmVariant,
        cost_policy: CostPolicy,
        neighbor_mode: NeighborMode,
    ) -> Self {
        Self {
            algorithm,
            cost_policy,
            neighbor_mode,
        }
    }

    pub fn a_star() -> Self {
        Self::default()
    }

    pub fn dijkstra() -> Self {
        Self {
            algorithm: AlgorithmVariant::Dijkstra,
            ..Self::default()
        }
    }

    pub fn with_cost_policy(mut self, cost_policy: CostPolicy) -> Self {
        self.cost_policy = cost_policy;
        self
    }

    pub fn with_neighbor_mode(mut self, neighbor_mode: NeighborMode) -> Self {
        self.neighbor_mode = neighbor_mode;
        self
    }

    /// Every algorithm / cost / neighbor combination, in a stable order.
    pub fn all() -> Vec<SearchConfig> {
        let mut configs = Vec::new();
        for algorithm in [AlgorithmVariant::AStar, AlgorithmVariant::Dijkstra] {
            for cost_policy in [CostPolicy::Octile, CostPolicy::Uniform] {
                for neighbor_mode in [NeighborMode::Precomputed, NeighborMode::Dynamic] {
                    configs.push(SearchConfig::new(algorithm, cost_policy, neighbor_mode));
                }
            }
        }
        configs
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmVariant::AStar,
            cost_policy: CostPolicy::Octile,
            neighbor_mode: NeighborMode::Precomputed,
        }
    }
}

impl fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let algorithm = match self.algorithm {
            AlgorithmVariant::AStar => "a_star",
            AlgorithmVariant::Dijkstra => "dijkstra",
        };
        let cost = match self.cost_policy {
            CostPolicy::Octile => "octile",
            CostPolicy::Uniform => "uniform",
        };
        let mode = match self.neighbor_mode {
            NeighborMode::Precomputed => "precomputed",
            NeighborMode::Dynamic => "dynamic",
        };
        write!(f, "{}/{}/{}", algorithm, cost, mode)
    }
}

/// Algorithm selection on the command line; `all` runs every combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    AStar,
    Dijkstra,
    All,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 20)]
    pub grid_size: usize,

    /// Random walls placed before the search (ignored cells: start, end)
    #[arg(long, default_value_t = 60)]
    pub num_walls: usize,

    /// Seed for wall placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start cell as `row,col`; defaults to the top-left corner
    #[arg(long, value_parser = parse_position)]
    pub start: Option<Position>,

    /// End cell as `row,col`; defaults to the bottom-right corner
    #[arg(long, value_parser = parse_position)]
    pub end: Option<Position>,

    /// Extra obstacle as `row,col`, may be repeated
    #[arg(long = "obstacle", value_parser = parse_position)]
    pub obstacles: Vec<Position>,

    #[arg(long, value_enum, default_value_t = AlgorithmChoice::AStar)]
    pub algorithm: AlgorithmChoice,

    #[arg(long, value_enum, default_value_t = CostPolicy::Octile)]
    pub cost_policy: CostPolicy,

    #[arg(long, value_enum, default_value_t = NeighborMode::Precomputed)]
    pub neighbor_mode: NeighborMode,

    #[arg(long, default_value_t = 30)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    /// Abort the search after this many rendered frames
    #[arg(long)]
    pub max_frames: Option<usize>,

    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

impl Config {
    /// Search configurations selected by `--algorithm`.
    pub fn search_configs(&self) -> Vec<SearchConfig> {
        let single = |algorithm| SearchConfig::new(algorithm, self.cost_policy, self.neighbor_mode);
        match self.algorithm {
            AlgorithmChoice::AStar => vec![single(AlgorithmVariant::AStar)],
            AlgorithmChoice::Dijkstra => vec![single(AlgorithmVariant::Dijkstra)],
            AlgorithmChoice::All => SearchConfig::all(),
        }
    }
}

pub fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{}`", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row `{}`: {}", row, e))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column `{}`: {}", col, e))?;
    Ok(Position::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positions() {
        assert_eq!(parse_position("3,4"), Ok(Position::new(3, 4)));
        assert_eq!(parse_position(" 0 , 12 "), Ok(Position::new(0, 12)));
        assert!(parse_position("3").is_err());
        assert!(parse_position("a,1").is_err());
    }

    #[test]
    fn cli_defaults() {
        let config = Config::parse_from(["grid_pathfinder"]);
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.search_configs(), vec![SearchConfig::default()]);
    }

    #[test]
    fn cli_all_expands_every_combination() {
        let config = Config::parse_from([
            "grid_pathfinder",
            "--algorithm",
            "all",
            "--obstacle",
            "1,1",
            "--obstacle",
            "2,2",
        ]);
        assert_eq!(config.search_configs().len(), 8);
        assert_eq!(config.obstacles, vec![Position::new(1, 1), Position::new(2, 2)]);
    }

    #[test]
    fn cli_value_enums_use_kebab_case() {
        let config = Config::parse_from([
            "grid_pathfinder",
            "--algorithm",
            "a-star",
            "--cost-policy",
            "uniform",
            "--neighbor-mode",
            "dynamic",
        ]);
        let search = config.search_configs()[0];
        assert_eq!(search.cost_policy, CostPolicy::Uniform);
        assert_eq!(search.neighbor_mode, NeighborMode::Dynamic);
    }

    #[test]
    fn display_names_the_combination() {
        let config = SearchConfig::dijkstra().with_cost_policy(CostPolicy::Uniform);
        assert_eq!(config.to_string(), "dijkstra/uniform/precomputed");
    }
}
