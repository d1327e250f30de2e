//! Hash table configuration
//!
//! Capacity and hash primes can be supplied as JSON, either inline or from a
//! file. Missing fields fall back to the defaults (53 slots, primes 151/163).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::infrastructure::hash::is_prime;
use crate::types::{
    HashTableError, HashTableResult, DEFAULT_CAPACITY, HT_PRIME_1, HT_PRIME_2, MAX_CAPACITY,
};

/// Parameters fixed at table creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HashTableConfig {
    /// Number of slots; must be prime
    pub capacity: usize,
    /// Multiplier for the start-index hash
    pub primary_prime: u64,
    /// Multiplier for the step hash
    pub secondary_prime: u64,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            primary_prime: HT_PRIME_1,
            secondary_prime: HT_PRIME_2,
        }
    }
}

impl HashTableConfig {
    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> HashTableResult<Self> {
        let config: HashTableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> HashTableResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Write the configuration to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> HashTableResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Check that the parameters give a probe sequence covering every slot
    pub fn validate(&self) -> HashTableResult<()> {
        if self.capacity < 3 || self.capacity > MAX_CAPACITY {
            return Err(HashTableError::InvalidConfig(format!(
                "capacity {} out of range [3, {}]",
                self.capacity, MAX_CAPACITY
            )));
        }

        if !is_prime(self.capacity as u64) {
            return Err(HashTableError::InvalidConfig(format!(
                "capacity {} is not prime",
                self.capacity
            )));
        }

        for (name, prime) in [
            ("primary_prime", self.primary_prime),
            ("secondary_prime", self.secondary_prime),
        ] {
            if prime > MAX_CAPACITY as u64 || !is_prime(prime) {
                return Err(HashTableError::InvalidConfig(format!(
                    "{} {} is not a prime no larger than {}",
                    name, prime, MAX_CAPACITY
                )));
            }
            if prime == self.capacity as u64 {
                return Err(HashTableError::InvalidConfig(format!(
                    "{} must differ from capacity {}",
                    name, self.capacity
                )));
            }
        }

        if self.primary_prime == self.secondary_prime {
            return Err(HashTableError::InvalidConfig(format!(
                "primary and secondary primes must differ (both {})",
                self.primary_prime
            )));
        }

        Ok(())
    }
}
