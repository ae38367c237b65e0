// Demonstration: simulate a coverage team under the greedy or DCG planner.
//
// Build/run from this repo root:
//   cargo run --example coverage_demo -- --planner dcg --rounds 5 --agents 5 --seed 42

use std::env;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use coverswarm::algorithms::{CoveragePlanner, DcgPlanner, SequentialGreedy};
use coverswarm::grid::GridAgent;
use coverswarm::simulation::{CoverageSummary, Simulator};
use coverswarm::{PlannerConfig, SimulationConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let planner_name = arg_value(&args, "--planner").unwrap_or("dcg");
    let defaults = SimulationConfig::default();
    let config = SimulationConfig {
        rounds: parsed(&args, "--rounds").unwrap_or(defaults.rounds),
        n_agents: parsed(&args, "--agents").unwrap_or(defaults.n_agents),
        seed: parsed(&args, "--seed").unwrap_or(defaults.seed),
        ..defaults
    };

    let level = if has_flag(&args, "--verbose") {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let planner: Box<dyn CoveragePlanner<GridAgent>> = match planner_name {
        "greedy" => Box::new(SequentialGreedy::new()),
        "dcg" => Box::new(DcgPlanner::new(PlannerConfig {
            iterations: parsed(&args, "--iterations").unwrap_or(10),
            batch_size: parsed(&args, "--batch").unwrap_or(20),
            parallel: has_flag(&args, "--parallel"),
            seed: Some(config.seed),
            ..PlannerConfig::default()
        })),
        other => {
            eprintln!("Unknown --planner '{}'; expected 'greedy' or 'dcg'.", other);
            std::process::exit(2);
        }
    };

    let mut sim = Simulator::spawn(&config, planner);
    println!("Initial coverage: {}", sim.coverage());
    match sim.run(config.rounds) {
        Ok(reports) => {
            println!("Planner: {}", sim.planner().name());
            println!("{}", CoverageSummary::from_reports(&reports));
        }
        Err(e) => {
            eprintln!("Planning failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

fn parsed<T: std::str::FromStr>(args: &[String], key: &str) -> Option<T> {
    arg_value(args, key).and_then(|s| s.parse().ok())
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}
