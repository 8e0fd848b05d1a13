//! Command-line front end for the TrashBoat selection engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tb",
    about = "TrashBoat — weighted dice and self-adjusting draw pools",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a set of dice and print each result with the total
    Roll {
        /// Dice to roll, e.g. 2d6, 3..=8, "{1, 4, 9}", "{1:2, 5:1}", 7
        #[arg(required = true)]
        dice: Vec<String>,

        /// How many times to roll the set
        #[arg(short, long, default_value = "1")]
        times: u32,

        /// RNG seed for reproducible rolls (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Draw repeatedly from a pool defined in a JSON file
    Draw {
        /// Path to the pool definition
        pool: PathBuf,

        /// Number of draws
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// RNG seed for reproducible draws (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Fail instead of drawing uniformly when every weight is zero
        #[arg(long)]
        no_fallback: bool,

        /// Print a per-option summary after drawing
        #[arg(long)]
        stats: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll { dice, times, seed } => commands::roll::run(&dice, times, seed),
        Commands::Draw {
            pool,
            count,
            seed,
            no_fallback,
            stats,
        } => commands::draw::run(&pool, count, seed, no_fallback, stats),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
