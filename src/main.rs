use clap::Parser;

use grid_pathfinder::config::Config;
use grid_pathfinder::simulation::Simulation;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    println!("Starting pathfinding search...");
    println!("Grid size: {}x{}", config.grid_size, config.grid_size);
    println!(
        "Walls: {}, Extra obstacles: {}",
        config.num_walls,
        config.obstacles.len()
    );
    println!(
        "Algorithm: {:?} | Cost policy: {:?} | Neighbors: {:?}",
        config.algorithm, config.cost_policy, config.neighbor_mode
    );

    if config.no_visualization {
        println!("Visualization disabled - running in fast mode");
    } else {
        println!("Visualization enabled with {}ms delay", config.delay_ms);
        println!("Press Ctrl+C to stop the search");
    }
    println!();

    let simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(e) => {
            eprintln!("Failed to set up the grid: {}", e);
            std::process::exit(1);
        }
    };
    println!("Environment seed: {} (for reproducibility)", simulation.environment().seed);

    let results = match simulation.run() {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Search failed: {}", e);
            std::process::exit(1);
        }
    };

    if results.len() > 1 {
        Simulation::print_comparison_results(&results);
    } else {
        println!("\n=== FINAL RESULTS ===");
        for result in &results {
            simulation.print_result(result);
        }
    }
}
