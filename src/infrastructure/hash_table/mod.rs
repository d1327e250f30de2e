// Hash table implementation with open addressing and double hashing

use serde::Serialize;

use crate::config::HashTableConfig;
use crate::infrastructure::hash::ProbeSequence;
use crate::types::{HashTableError, HashTableResult};

pub mod builder;
pub use builder::HashTableBuilder;

/// Owned key-value pair stored in an occupied slot
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: String,
    value: String,
}

impl Entry {
    /// Copy a caller-provided key and value into owned storage
    fn new(key: &str, value: &str) -> HashTableResult<Self> {
        Ok(Entry {
            key: owned_copy(key)?,
            value: owned_copy(value)?,
        })
    }
}

/// Duplicate a string, reporting allocation failure instead of aborting
fn owned_copy(s: &str) -> HashTableResult<String> {
    let mut owned = String::new();
    owned.try_reserve_exact(s.len())?;
    owned.push_str(s);
    Ok(owned)
}

/// State of one bucket
#[derive(Debug, Clone, Default)]
enum Slot {
    /// Never used; terminates a probe
    #[default]
    Empty,
    /// Previously occupied; probes continue past it
    Tombstone,
    Occupied(Entry),
}

/// Where an insert should land
enum Placement {
    /// The key is already stored at this index
    Existing(usize),
    /// Free slot (first tombstone on the path, else the first empty slot)
    Vacant { index: usize, reuses_tombstone: bool },
    /// Every slot was probed without finding the key or a free slot
    Full,
}

/// Result of a successful insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new key was stored; size grew by one
    Inserted,
    /// An existing key had its entry replaced; size unchanged
    Updated,
}

/// Point-in-time occupancy counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub size: usize,
    pub capacity: usize,
    pub tombstones: usize,
    pub empty: usize,
}

impl TableStats {
    /// Ratio of live entries to capacity
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity as f64
    }
}

/// Fixed-capacity string-to-string map
///
/// Collisions are resolved with double hashing. Deleted entries leave a
/// tombstone so that probe chains running through them stay intact; a later
/// insert reuses the first tombstone on its path. The slot array never grows.
#[derive(Debug)]
pub struct HashTable {
    /// Bucket array, length == capacity
    slots: Vec<Slot>,
    /// Number of buckets in the hash table
    capacity: usize,
    /// Number of live entries
    size: usize,
    /// Number of tombstone slots
    tombstones: usize,
    primary_prime: u64,
    secondary_prime: u64,
}

impl HashTable {
    /// Create a table with the default capacity (53) and hash primes
    pub fn new() -> HashTableResult<Self> {
        HashTableBuilder::new().try_build()
    }

    /// Create a table with `capacity` slots and the default hash primes
    ///
    /// `capacity` must be a prime of at least 3.
    pub fn with_capacity(capacity: usize) -> HashTableResult<Self> {
        HashTableBuilder::new().capacity(capacity).try_build()
    }

    /// Create a table from a configuration
    pub fn from_config(config: &HashTableConfig) -> HashTableResult<Self> {
        HashTableBuilder::from_config(config.clone()).try_build()
    }

    /// Allocate the slot array; parameters are validated by the builder
    fn allocate(capacity: usize, primary_prime: u64, secondary_prime: u64) -> HashTableResult<Self> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize_with(capacity, Slot::default);

        tracing::debug!(
            capacity,
            primary_prime,
            secondary_prime,
            "hash table created"
        );

        Ok(HashTable {
            slots,
            capacity,
            size: 0,
            tombstones: 0,
            primary_prime,
            secondary_prime,
        })
    }

    fn probe(&self, key: &str) -> ProbeSequence {
        ProbeSequence::new(
            key,
            self.capacity as u64,
            self.primary_prime,
            self.secondary_prime,
        )
    }

    /// Index of the occupied slot holding `key`
    fn find(&self, key: &str) -> Option<usize> {
        for index in self.probe(key) {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Tombstone => continue,
                Slot::Occupied(entry) if entry.key == key => return Some(index),
                Slot::Occupied(_) => continue,
            }
        }

        None
    }

    fn placement(&self, key: &str) -> Placement {
        let mut first_tombstone = None;

        for index in self.probe(key) {
            match &self.slots[index] {
                Slot::Empty => {
                    return match first_tombstone {
                        Some(tombstone) => Placement::Vacant {
                            index: tombstone,
                            reuses_tombstone: true,
                        },
                        None => Placement::Vacant {
                            index,
                            reuses_tombstone: false,
                        },
                    };
                }
                Slot::Tombstone => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(index);
                    }
                }
                Slot::Occupied(entry) if entry.key == key => return Placement::Existing(index),
                Slot::Occupied(_) => {}
            }
        }

        // Probed every slot without meeting an empty one
        match first_tombstone {
            Some(index) => Placement::Vacant {
                index,
                reuses_tombstone: true,
            },
            None => Placement::Full,
        }
    }

    /// Insert a key-value pair, replacing the entry if the key already exists
    ///
    /// Key and value are copied into storage owned by the table. On any error
    /// the table is left exactly as it was.
    pub fn insert(&mut self, key: &str, value: &str) -> HashTableResult<InsertOutcome> {
        let entry = Entry::new(key, value)?;

        match self.placement(key) {
            Placement::Existing(index) => {
                // Dropping the old slot releases the previous key and value
                self.slots[index] = Slot::Occupied(entry);
                tracing::trace!(key, index, "entry updated");
                Ok(InsertOutcome::Updated)
            }
            Placement::Vacant {
                index,
                reuses_tombstone,
            } => {
                if reuses_tombstone {
                    self.tombstones -= 1;
                }
                self.slots[index] = Slot::Occupied(entry);
                self.size += 1;
                tracing::trace!(key, index, reuses_tombstone, "entry inserted");
                Ok(InsertOutcome::Inserted)
            }
            Placement::Full => {
                tracing::debug!(key, capacity = self.capacity, "insert rejected, table full");
                Err(HashTableError::Full)
            }
        }
    }

    /// Get the value associated with a key
    pub fn search(&self, key: &str) -> Option<&str> {
        let index = self.find(key)?;

        match &self.slots[index] {
            Slot::Occupied(entry) => Some(entry.value.as_str()),
            _ => None,
        }
    }

    /// Check whether a key is stored
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Remove a key, leaving a tombstone in its slot
    ///
    /// Returns the removed value, or `None` if the key was not present.
    pub fn delete(&mut self, key: &str) -> Option<String> {
        let index = self.find(key)?;

        let Slot::Occupied(entry) = &mut self.slots[index] else {
            return None;
        };
        let value = std::mem::take(&mut entry.value);

        // Overwriting the slot releases the stored key
        self.slots[index] = Slot::Tombstone;
        self.size -= 1;
        self.tombstones += 1;
        tracing::trace!(key, index, "entry deleted");
        Some(value)
    }

    /// Get the number of live entries
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as `size`
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the hash table is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// True when no slot is left for a key that is not already stored
    pub fn is_full(&self) -> bool {
        self.size == self.capacity
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity as f64
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            size: self.size,
            capacity: self.capacity,
            tombstones: self.tombstones,
            empty: self.capacity - self.size - self.tombstones,
        }
    }
}
