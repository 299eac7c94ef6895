//! Stack Pool CLI
//!
//! Command-line driver that exercises the stack pool: the two-stack
//! demonstration and a push/pop throughput benchmark.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use stack_pool::PoolConfig;
use tracing::info;

mod commands;
mod config;

use config::CliError;

#[derive(Parser)]
#[command(name = "stackpool")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Drive the pool-backed stack allocator", long_about = None)]
struct Cli {
    /// TOML file with a [pool] table
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Nodes to reserve up front (overrides the config file)
    #[arg(long, global = true)]
    capacity: Option<usize>,

    /// Reject pop on an empty stack
    #[arg(long, global = true)]
    strict: bool,

    /// Print pool statistics as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build two stacks in one pool, print them and search them
    Demo,

    /// Push and pop many values, reusing the same nodes every round
    Bench {
        /// Pushes (and pops) per round
        #[arg(long, default_value_t = 1_000_000)]
        ops: usize,

        /// Number of rounds
        #[arg(long, default_value_t = 3)]
        rounds: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stackpool=info".parse().expect("static directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = config::resolve(cli.config.as_deref(), cli.capacity, cli.strict)?;
    info!(
        capacity = config.initial_capacity,
        strict_pop = config.strict_pop,
        "pool configured"
    );

    match cli.command {
        Commands::Demo => run_demo(&config, cli.json),
        Commands::Bench { ops, rounds } => run_bench(&config, ops, rounds, cli.json),
    }
}

fn run_demo(config: &PoolConfig, json: bool) -> Result<(), CliError> {
    let report = commands::demo(config)?;

    println!("{}", report.first);
    println!(
        "Time taken to iterate through the stack: {} ns",
        report.iterate.as_nanos()
    );
    println!("{}", report.second);
    if let Some(max) = report.max {
        println!("max of first stack: {}", max);
    }
    if let Some(min) = report.min {
        println!("min of second stack: {}", min);
    }
    print_stats(&report.stats, json)
}

fn run_bench(config: &PoolConfig, ops: usize, rounds: usize, json: bool) -> Result<(), CliError> {
    let report = commands::bench(config, ops, rounds)?;

    for (i, elapsed) in report.rounds.iter().enumerate() {
        println!(
            "round {}: {:?} ({:.2} ns/op)",
            i + 1,
            elapsed,
            report.nanos_per_op(i)
        );
    }
    print_stats(&report.stats, json)
}

fn print_stats(stats: &stack_pool::PoolStats, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        println!("{}", stats);
    }
    Ok(())
}
