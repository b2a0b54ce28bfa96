use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use maze_solver::direction::moves_to_string;
use maze_solver::pipeline::{SolveOptions, solve};
use maze_solver::{Strategy, map_file, mapgen, render};

#[derive(Parser, Debug)]
#[command(name = "maze-solver")]
#[command(about = "Discovers a room maze and computes a walk through every room", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Discover a map and walk every room
    Solve {
        /// JSON map file
        map: PathBuf,

        /// Random seed (defaults to MAZE_SEED, then to a fresh random seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Discovery form
        #[arg(long, value_enum, default_value_t = StrategyArg::Recursive)]
        strategy: StrategyArg,

        /// Print an ASCII drawing of the map first
        #[arg(long)]
        print_map: bool,

        /// Print the whole solution as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a random grid maze as a JSON map
    Generate {
        #[arg(long, default_value_t = 10)]
        width: usize,

        #[arg(long, default_value_t = 10)]
        height: usize,

        /// Walls to remove after carving, each one adds a loop
        #[arg(long, default_value_t = 0)]
        extra: usize,

        /// Random seed (defaults to MAZE_SEED, then to a fresh random seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Output JSON path ("-" for stdout)
        #[arg(short, long, default_value = "-")]
        output: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Recursive,
    Stack,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Recursive => Strategy::Recursive,
            StrategyArg::Stack => Strategy::Stack,
        }
    }
}

fn resolve_seed(seed: Option<u64>) -> Result<u64> {
    if let Some(seed) = seed {
        return Ok(seed);
    }
    match std::env::var("MAZE_SEED") {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("MAZE_SEED is not a valid u64: {value:?}")),
        Err(_) => Ok(rand::random()),
    }
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Solve {
            map,
            seed,
            strategy,
            print_map,
            json,
        } => run_solve(map, resolve_seed(seed)?, strategy.into(), print_map, json),
        Commands::Generate {
            width,
            height,
            extra,
            seed,
            output,
        } => {
            run_generate(width, height, extra, resolve_seed(seed)?, &output)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_solve(
    map: PathBuf,
    seed: u64,
    strategy: Strategy,
    print_map: bool,
    json: bool,
) -> Result<ExitCode> {
    let world = map_file::load_world(&map)
        .with_context(|| format!("Failed to load map {}", map.display()))?;

    let options = SolveOptions { seed, strategy };
    let solution = solve(&world, &options).context("Traversal failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        println!("=== Maze Solver ===");
        println!("Map: {}", map.display());
        println!("Rooms: {}", world.room_count());
        println!("Seed: {}", seed);
        println!("Strategy: {:?}", strategy);
        if print_map {
            println!();
            print!("{}", render::render_ascii(&world));
        }
        println!();
        println!("Traversal path: {}", moves_to_string(&solution.path));
        println!("{}", solution.report);
    }

    Ok(if solution.report.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

fn run_generate(width: usize, height: usize, extra: usize, seed: u64, output: &str) -> Result<()> {
    let world = mapgen::grid_maze(width, height, extra, seed)
        .context("Failed to generate maze")?;
    let text = map_file::to_json(&world)?;

    if output == "-" {
        println!("{}", text);
    } else {
        fs::write(output, text).with_context(|| format!("Failed to write map to {}", output))?;
        eprintln!(
            "Wrote {}x{} maze ({} rooms, seed {}) to {}",
            width,
            height,
            world.room_count(),
            seed,
            output
        );
    }
    Ok(())
}
