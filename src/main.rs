//! dhtable demo program entry

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

use dhtable::{HashTable, HashTableConfig, HashTableResult};
use tracing_subscriber::{fmt, EnvFilter};

fn run(config: HashTableConfig) -> HashTableResult<()> {
    let mut table = HashTable::from_config(&config)?;

    for (key, value) in [("a", "1"), ("b", "2"), ("a", "3")] {
        let outcome = table.insert(key, value)?;
        tracing::info!(key, value, ?outcome, "insert");
    }

    for key in ["a", "b", "c"] {
        tracing::info!(key, value = ?table.search(key), "search");
    }

    table.insert("x", "1")?;
    let removed = table.delete("x");
    tracing::info!(key = "x", ?removed, tombstones = table.tombstones(), "delete");

    table.insert("y", "2")?;
    tracing::info!(key = "y", value = ?table.search("y"), tombstones = table.tombstones(), "insert after delete");

    println!("{}", serde_json::to_string_pretty(&table.stats())?);
    Ok(())
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match HashTableConfig::load(&path) {
            Ok(config) => {
                tracing::info!("Loaded configuration from {}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to load configuration {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => HashTableConfig::default(),
    };

    tracing::info!(
        capacity = config.capacity,
        primary_prime = config.primary_prime,
        secondary_prime = config.secondary_prime,
        "dhtable starting"
    );

    if let Err(e) = run(config) {
        tracing::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}
