//! Array Algorithms - command-line front end
//!
//! Parses integers from the command line, runs one catalog routine and
//! prints the result as a plain line or as JSON.

use anyhow::{bail, Context, Result};
use array_algorithms::config::AlgoConfig;
use array_algorithms::{
    binary_search, is_sorted, majority_candidate, majority_element, max_window_sum,
    min_length_at_least, sorted_binary_search, top_k_frequent, SortAlgorithm,
};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "algo")]
#[command(version)]
#[command(about = "Classic array algorithms over integer sequences", long_about = None)]
struct Cli {
    /// Config file (default: nearest algorithms.toml from the current directory up)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // Commands sorted alphabetically for easier navigation
    /// Boyer-Moore majority vote
    Majority {
        /// Confirm the candidate occupies more than half of the positions
        #[arg(long)]
        verify: bool,

        /// Input values
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Maximum sum over all windows of a fixed size
    MaxWindow {
        /// Window size
        size: usize,

        /// Input values
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Length of the shortest window whose sum reaches a target
    MinWindow {
        /// Target sum
        #[arg(allow_negative_numbers = true)]
        target: i64,

        /// Input values (non-negative)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Binary search for a target
    Search {
        /// Search a sorted copy instead of requiring sorted input
        #[arg(long)]
        sorted_copy: bool,

        /// Value to find
        #[arg(allow_negative_numbers = true)]
        target: i64,

        /// Input values (ascending unless --sorted-copy)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Sort values ascending
    Sort {
        /// Algorithm (default from config, else quick)
        #[arg(short, long, value_enum)]
        algorithm: Option<SortAlgorithm>,

        /// Seed for quicksort pivots
        #[arg(long)]
        seed: Option<u64>,

        /// Quicksort insertion-sort cutoff
        #[arg(long)]
        cutoff: Option<usize>,

        /// Show quicksort statistics
        #[arg(long)]
        stats: bool,

        /// Input values
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// The k most frequent values
    TopK {
        /// Number of values to return
        k: usize,

        /// Input values
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => AlgoConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AlgoConfig::load_from_cwd().context("Failed to load config")?,
    };
    let json = cli.json || config.output.json;

    match cli.command {
        Commands::Majority { verify, values } => cmd_majority(&values, verify, json),
        Commands::MaxWindow { size, values } => cmd_max_window(&values, size, json),
        Commands::MinWindow { target, values } => cmd_min_window(&values, target, json),
        Commands::Search {
            sorted_copy,
            target,
            values,
        } => cmd_search(&values, target, sorted_copy, json),
        Commands::Sort {
            algorithm,
            seed,
            cutoff,
            stats,
            values,
        } => cmd_sort(
            values,
            SortOptions {
                algorithm: algorithm.unwrap_or(config.sort.algorithm),
                seed: seed.or(config.sort.seed),
                cutoff: cutoff.unwrap_or(config.sort.cutoff),
                stats,
            },
            json,
        ),
        Commands::TopK { k, values } => cmd_top_k(&values, k, json),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("array_algorithms={level},algo={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn emit(json: bool, value: serde_json::Value, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

struct SortOptions {
    algorithm: SortAlgorithm,
    seed: Option<u64>,
    cutoff: usize,
    stats: bool,
}

fn cmd_sort(mut values: Vec<i64>, opts: SortOptions, json: bool) -> Result<()> {
    let mut rng = match opts.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let quick = array_algorithms::QuickSort::with_cutoff(opts.cutoff);

    tracing::info!(algorithm = %opts.algorithm, len = values.len(), "sort");
    let stats = opts.algorithm.run(&mut values, quick, &mut rng);
    debug_assert!(is_sorted(&values));

    let shown = if opts.stats { stats } else { None };
    emit(
        json,
        json!({
            "algorithm": opts.algorithm,
            "sorted": values,
            "stats": shown,
        }),
        || match shown {
            Some(s) => format!(
                "{}\ndepth={} partitions={} insertion_runs={}",
                join(&values),
                s.max_depth,
                s.partitions,
                s.insertion_runs
            ),
            None => join(&values),
        },
    )
}

fn cmd_search(values: &[i64], target: i64, sorted_copy: bool, json: bool) -> Result<()> {
    let index = if sorted_copy {
        sorted_binary_search(values, target)
    } else {
        if !is_sorted(values) {
            bail!("values must be sorted ascending; pass --sorted-copy to search a sorted copy");
        }
        binary_search(values, target)
    };

    emit(json, json!({ "target": target, "index": index }), || {
        index.to_string()
    })
}

fn cmd_max_window(values: &[i64], size: usize, json: bool) -> Result<()> {
    let best = max_window_sum(values, size).context("max-window failed")?;
    emit(json, json!({ "window": size, "max_sum": best }), || {
        best.to_string()
    })
}

fn cmd_min_window(values: &[i64], target: i64, json: bool) -> Result<()> {
    let length = min_length_at_least(values, target).context("min-window failed")?;
    emit(json, json!({ "target": target, "length": length }), || {
        length.map_or_else(|| "none".to_string(), |l| l.to_string())
    })
}

fn cmd_majority(values: &[i64], verify: bool, json: bool) -> Result<()> {
    let winner = if verify {
        majority_element(values)
    } else {
        majority_candidate(values)
    };
    emit(json, json!({ "verified": verify, "majority": winner }), || {
        winner.map_or_else(|| "none".to_string(), |v| v.to_string())
    })
}

fn cmd_top_k(values: &[i64], k: usize, json: bool) -> Result<()> {
    let top = top_k_frequent(values, k).context("top-k failed")?;
    emit(json, json!({ "k": k, "values": top }), || join(&top))
}
