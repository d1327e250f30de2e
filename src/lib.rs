//! dhtable: fixed-capacity string map with double hashing and tombstones

// Global type definitions
pub mod types;

// Import various modules
pub mod config;
pub mod infrastructure;

// Re-export table items for easier access
pub use config::HashTableConfig;
pub use infrastructure::hash_table::{HashTable, HashTableBuilder, InsertOutcome, TableStats};

// Re-export error items for easier access
pub use types::{HashTableError, HashTableResult};
