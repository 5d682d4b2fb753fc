use crate::config::{Config, SearchConfig};
use crate::grid::{Grid, Position};
use crate::reference::minimum_moves;
use crate::render::{FrameCounter, TerminalRenderer};
use crate::session::Session;
use crate::statistics::{SearchOutcome, SearchReport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::info;

/// A painted grid layout, reproducible from its seed.
#[derive(Debug, Clone)]
pub struct EnvironmentSetup {
    pub grid_size: usize,
    pub seed: u64,
    pub start: Position,
    pub end: Position,
    pub walls: Vec<Position>,
}

impl EnvironmentSetup {
    /// Place the configured endpoints, explicit obstacles and random walls.
    pub fn generate(config: &Config) -> Result<Self, String> {
        let size = config.grid_size;
        if size < 2 {
            return Err(format!("grid size must be at least 2, got {}", size));
        }

        let start = config.start.unwrap_or(Position::new(0, 0));
        let end = config.end.unwrap_or(Position::new(size - 1, size - 1));
        for (name, pos) in [("start", start), ("end", end)] {
            if pos.row >= size || pos.col >= size {
                return Err(format!("{} {} is outside the {}x{} grid", name, pos, size, size));
            }
        }
        if start == end {
            return Err(format!("start and end must differ, both are {}", start));
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let mut taken: FxHashSet<Position> = FxHashSet::default();
        let mut walls = Vec::new();
        for &pos in &config.obstacles {
            if pos == start || pos == end {
                return Err(format!("obstacle {} overlaps an endpoint", pos));
            }
            if pos.row >= size || pos.col >= size {
                return Err(format!("obstacle {} is outside the grid", pos));
            }
            if taken.insert(pos) {
                walls.push(pos);
            }
        }

        // Every cell except the two endpoints can hold a wall.
        let free_cells = size * size - 2;
        let max_attempts = config.num_walls.saturating_mul(3);
        let mut placed = 0;
        let mut attempts = 0;
        while placed < config.num_walls && attempts < max_attempts && taken.len() < free_cells {
            let pos = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
            if pos != start && pos != end && taken.insert(pos) {
                walls.push(pos);
                placed += 1;
            }
            attempts += 1;
        }

        info!(seed, %start, %end, walls = walls.len(), "generated environment");

        Ok(EnvironmentSetup {
            grid_size: size,
            seed,
            start,
            end,
            walls,
        })
    }

    pub fn create_grid(&self) -> Result<Grid, String> {
        let mut grid = Grid::new(self.grid_size);
        grid.set_start(self.start).map_err(|e| e.to_string())?;
        grid.set_end(self.end).map_err(|e| e.to_string())?;
        for &wall in &self.walls {
            grid.place_obstacle(wall).map_err(|e| e.to_string())?;
        }
        Ok(grid)
    }
}

#[derive(Debug, Clone)]
pub struct RunResult {
    pub search: SearchConfig,
    pub report: SearchReport,
    pub frames: usize,
    pub final_grid: Grid,
}

pub struct Simulation {
    config: Config,
    environment: EnvironmentSetup,
    reference_moves: Option<usize>,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self, String> {
        let environment = EnvironmentSetup::generate(&config)?;
        let reference_moves = minimum_moves(&environment.create_grid()?);
        Ok(Simulation {
            config,
            environment,
            reference_moves,
        })
    }

    pub fn environment(&self) -> &EnvironmentSetup {
        &self.environment
    }

    /// Fewest possible moves ignoring edge costs, from the reference solver.
    pub fn reference_moves(&self) -> Option<usize> {
        self.reference_moves
    }

    /// Runs every selected search on a fresh copy of the environment.
    pub fn run(&self) -> Result<Vec<RunResult>, String> {
        let searches = self.config.search_configs();
        let visualize = !self.config.no_visualization && searches.len() == 1;

        searches
            .into_iter()
            .map(|search| self.run_one(search, visualize))
            .collect()
    }

    fn run_one(&self, search: SearchConfig, visualize: bool) -> Result<RunResult, String> {
        let mut session = Session::from_grid(self.environment.create_grid()?);

        let (report, frames) = if visualize {
            let mut renderer = TerminalRenderer::new(
                format!("PATHFINDING {}", search),
                self.config.delay_ms,
                !self.config.no_color,
            )
            .with_max_frames(self.config.max_frames);
            let report = session.trigger_search(search, &mut renderer);
            (report, renderer.frames())
        } else {
            let mut counter = FrameCounter {
                frames: 0,
                abort_after: self.config.max_frames,
            };
            let report = session.trigger_search(search, &mut counter);
            (report, counter.frames)
        };

        Ok(RunResult {
            search,
            report,
            frames,
            final_grid: session.grid().clone(),
        })
    }

    pub fn print_result(&self, result: &RunResult) {
        println!("---------------------------");
        println!("Search: {}", result.search);
        if result.report.outcome == SearchOutcome::Success && self.config.no_visualization {
            print!("{}", result.final_grid);
        }
        print!("{}", result.report);
        println!("Frames rendered: {}", result.frames);
        match self.reference_moves {
            Some(moves) => println!("Fewest possible moves (reference): {}", moves),
            None => println!("Reference solver found no path"),
        }
    }

    /// Print comparison results in a table, then the best run by each metric.
    pub fn print_comparison_results(results: &[RunResult]) {
        println!("\n=== SEARCH COMPARISON RESULTS ===");
        println!();
        println!(
            "{:<30} {:<16} {:<8} {:<10} {:<10} {:<12}",
            "Search", "Outcome", "Moves", "Cost", "Analyzed", "Time"
        );
        println!("{}", "-".repeat(90));

        for result in results {
            let cost = result
                .report
                .cost
                .map(|c| format!("{:.3}", c))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<30} {:<16} {:<8} {:<10} {:<10} {:<12}",
                result.search.to_string(),
                result.report.outcome.to_string(),
                result.report.path_length,
                cost,
                result.report.analyzed,
                format!("{:.2?}", result.report.elapsed)
            );
        }
        println!();

        let successful: Vec<_> = results.iter().filter(|r| r.report.is_success()).collect();
        if successful.is_empty() {
            println!("No search reached the end cell.");
            return;
        }

        println!("=== PERFORMANCE ANALYSIS ===");
        if let Some(best) = successful
            .iter()
            .min_by(|a, b| cost_of(a).total_cmp(&cost_of(b)))
        {
            println!("Cheapest path: {} ({:.3})", best.search, cost_of(best));
        }
        if let Some(fewest) = successful.iter().min_by_key(|r| r.report.analyzed) {
            println!("Fewest nodes analyzed: {} ({})", fewest.search, fewest.report.analyzed);
        }
        if let Some(fastest) = successful.iter().min_by_key(|r| r.report.elapsed) {
            println!("Fastest: {} ({:.2?})", fastest.search, fastest.report.elapsed);
        }
    }
}

fn cost_of(result: &RunResult) -> f64 {
    result.report.cost.unwrap_or(f64::INFINITY)
}
