//! HashTableBuilder for fluent table construction
//!
//! Provides a builder pattern for creating tables with:
//! - Capacity selection (must be prime)
//! - Primary and secondary hash primes
//! - Validation before build

use crate::config::HashTableConfig;
use crate::infrastructure::hash_table::HashTable;
use crate::types::HashTableResult;

/// Builder for constructing HashTable instances
///
/// # Example
/// ```
/// use dhtable::infrastructure::hash_table::HashTableBuilder;
///
/// let mut table = HashTableBuilder::new()
///     .capacity(101)
///     .primary_prime(151)
///     .secondary_prime(163)
///     .try_build()
///     .unwrap();
///
/// table.insert("a", "1").unwrap();
/// assert_eq!(table.search("a"), Some("1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HashTableBuilder {
    config: HashTableConfig,
}

impl HashTableBuilder {
    /// Create a builder with the default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: HashTableConfig) -> Self {
        Self { config }
    }

    /// Set the number of slots
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the prime used for the start index
    pub fn primary_prime(mut self, prime: u64) -> Self {
        self.config.primary_prime = prime;
        self
    }

    /// Set the prime used for the probe step
    pub fn secondary_prime(mut self, prime: u64) -> Self {
        self.config.secondary_prime = prime;
        self
    }

    /// Build with validation, returning an error for bad parameters or a failed allocation
    pub fn try_build(self) -> HashTableResult<HashTable> {
        self.config.validate()?;

        HashTable::allocate(
            self.config.capacity,
            self.config.primary_prime,
            self.config.secondary_prime,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HashTableError, DEFAULT_CAPACITY};

    #[test]
    fn test_builder_defaults() {
        let table = HashTableBuilder::new().try_build().unwrap();

        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
        assert_eq!(table.size(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_builder_custom_capacity() {
        let table = HashTableBuilder::new().capacity(97).try_build().unwrap();
        assert_eq!(table.capacity(), 97);
        assert_eq!(table.stats().empty, 97);
    }

    #[test]
    fn test_builder_rejects_bad_capacity() {
        let result = HashTableBuilder::new().capacity(54).try_build();
        assert!(matches!(result, Err(HashTableError::InvalidConfig(_))));

        let result = HashTableBuilder::new().capacity(2).try_build();
        assert!(matches!(result, Err(HashTableError::InvalidConfig(_))));

        let result = HashTableBuilder::new().capacity(0).try_build();
        assert!(matches!(result, Err(HashTableError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_rejects_bad_primes() {
        let result = HashTableBuilder::new()
            .primary_prime(163)
            .secondary_prime(163)
            .try_build();
        assert!(matches!(result, Err(HashTableError::InvalidConfig(_))));

        let result = HashTableBuilder::new().primary_prime(150).try_build();
        assert!(matches!(result, Err(HashTableError::InvalidConfig(_))));

        // A prime equal to the capacity collapses the hash to the last byte
        let result = HashTableBuilder::new()
            .capacity(151)
            .primary_prime(151)
            .try_build();
        assert!(matches!(result, Err(HashTableError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_from_config() {
        let config = HashTableConfig {
            capacity: 11,
            primary_prime: 31,
            secondary_prime: 37,
        };

        let mut table = HashTableBuilder::from_config(config).try_build().unwrap();
        assert_eq!(table.capacity(), 11);

        for i in 0..11 {
            table.insert(&format!("k{}", i), "v").unwrap();
        }
        assert!(table.is_full());
    }
}
