use std::fmt;

/// Global type definitions
///
/// Stores constants and the error type shared by the hash table and its configuration

/// Number of slots in a table created with `HashTable::new`
pub const DEFAULT_CAPACITY: usize = 53;

/// Prime multiplier for the primary (start index) hash
pub const HT_PRIME_1: u64 = 151;

/// Prime multiplier for the secondary (step) hash
pub const HT_PRIME_2: u64 = 163;

/// Largest accepted capacity or hash prime
pub const MAX_CAPACITY: usize = u32::MAX as usize;

/// Hash table error type
#[derive(Debug)]
pub enum HashTableError {
    /// Memory allocation error (slot array or entry copy)
    AllocationFailure,
    /// No empty or tombstone slot left for a new key
    Full,
    /// Invalid table parameters
    InvalidConfig(String),
    /// I/O error while reading configuration
    IoError(std::io::Error),
    /// Malformed configuration data
    ParseError(String),
}

impl fmt::Display for HashTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashTableError::AllocationFailure => write!(f, "Memory allocation failed"),
            HashTableError::Full => write!(f, "Hash table is full"),
            HashTableError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            HashTableError::IoError(err) => write!(f, "I/O error: {}", err),
            HashTableError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for HashTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HashTableError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HashTableError {
    fn from(err: std::io::Error) -> Self {
        HashTableError::IoError(err)
    }
}

impl From<std::collections::TryReserveError> for HashTableError {
    fn from(_: std::collections::TryReserveError) -> Self {
        HashTableError::AllocationFailure
    }
}

impl From<serde_json::Error> for HashTableError {
    fn from(err: serde_json::Error) -> Self {
        HashTableError::ParseError(err.to_string())
    }
}

/// Result type for hash table operations
pub type HashTableResult<T> = Result<T, HashTableError>;
