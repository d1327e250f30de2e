//! dhtable Benchmark Tool

use clap::Parser;
use dhtable::{HashTable, HashTableBuilder};
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, EnvFilter};

mod metrics;
mod scenarios;

use metrics::Metrics;
use scenarios::Scenario;

#[derive(Parser, Debug, Clone)]
#[command(name = "dhtable-bench")]
#[command(about = "dhtable hash table workload driver")]
struct Args {
    #[arg(short = 'd', long, default_value = "10")]
    duration: u64,

    #[arg(short = 's', long, default_value = "read_heavy")]
    scenario: String,

    /// Table capacity (must be prime)
    #[arg(short = 'c', long, default_value = "1009")]
    capacity: usize,

    /// Size of the key space; must not exceed the capacity
    #[arg(short = 'k', long, default_value = "700")]
    keys: usize,

    #[arg(short = 'w', long, default_value = "0")]
    warmup: u64,

    #[arg(long, default_value = "0")]
    seed: u64,
}

fn run_loop(
    scenario: &mut dyn Scenario,
    table: &mut HashTable,
    rng: &mut rand::rngs::StdRng,
    duration: Duration,
    metrics: &mut Metrics,
) {
    let start_time = Instant::now();

    while start_time.elapsed() < duration {
        let start = Instant::now();
        let result = scenario.execute(table, rng);
        let elapsed = start.elapsed().as_nanos() as u64;

        match result {
            Ok(()) => metrics.record_op(elapsed),
            Err(e) => {
                tracing::debug!("{} iteration failed: {}", scenario.name(), e);
                metrics.record_error();
            }
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).init();

    let args = Args::parse();

    println!("dhtable Benchmark Tool");
    println!("======================");
    println!("Scenario: {}", args.scenario);
    println!("Duration: {}s", args.duration);
    println!("Capacity: {}", args.capacity);
    println!("Keys: {}", args.keys);
    println!();

    if args.keys == 0 || args.keys > args.capacity {
        eprintln!("Keys must be between 1 and the capacity ({})", args.capacity);
        std::process::exit(1);
    }

    let mut scenario: Box<dyn Scenario> = match args.scenario.as_str() {
        "insert" => Box::new(scenarios::Insert::new(args.keys)),
        "read_heavy" => Box::new(scenarios::ReadHeavy::new(args.keys)),
        "update" => Box::new(scenarios::Update::new(args.keys)),
        "churn" => Box::new(scenarios::Churn::new(args.keys)),
        "sliding_window" => Box::new(scenarios::SlidingWindow::new(args.keys)),
        _ => {
            eprintln!("Unknown scenario: {}", args.scenario);
            std::process::exit(1);
        }
    };

    let mut table = match HashTableBuilder::new().capacity(args.capacity).try_build() {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Failed to create table: {}", e);
            std::process::exit(1);
        }
    };

    println!("Initializing...");
    if let Err(e) = scenario.prepare(&mut table) {
        eprintln!("Failed to prepare: {}", e);
        std::process::exit(1);
    }
    println!("Initialization complete.");

    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);

    if args.warmup > 0 {
        println!("Warming up for {}s...", args.warmup);
        let mut discard = Metrics::new();
        run_loop(
            scenario.as_mut(),
            &mut table,
            &mut rng,
            Duration::from_secs(args.warmup),
            &mut discard,
        );
    }

    println!("Running benchmark...");
    let start_time = Instant::now();
    let mut metrics = Metrics::new();
    run_loop(
        scenario.as_mut(),
        &mut table,
        &mut rng,
        Duration::from_secs(args.duration),
        &mut metrics,
    );
    let elapsed = start_time.elapsed();

    let total_ops = metrics.total_ops();
    let ops_per_sec = total_ops as f64 / elapsed.as_secs_f64();
    let max_latency_us = metrics.max_latency_ns() as f64 / 1000.0;
    let stats = table.stats();

    println!();
    println!("Operation statistics:");
    println!("    operations:        {:>12} ({:.1} ops/s)", total_ops, ops_per_sec);
    println!(
        "    latency:           {:6.2} us (avg), {:6.2} us (max)",
        metrics.avg_latency_us(),
        max_latency_us
    );
    println!(
        "    time in table:     {:>12.3} s",
        metrics.total_latency_ns() as f64 / 1e9
    );
    println!("    errors:            {:>12}", metrics.total_errors());
    println!("Table statistics:");
    println!("    size:              {:>12}", stats.size);
    println!("    tombstones:        {:>12}", stats.tombstones);
    println!("    empty slots:       {:>12}", stats.empty);
    println!("    load factor:       {:>12.3}", stats.load_factor());
}
