//! Benchmark scenarios module

use dhtable::HashTable;
use rand::Rng;
use std::error::Error;

/// Scenario trait - defines a benchmark workload
pub trait Scenario {
    /// Prepare scenario (preload keys, etc.)
    fn prepare(&mut self, table: &mut HashTable) -> Result<(), Box<dyn Error>>;

    /// Execute one iteration of the scenario
    fn execute(
        &mut self,
        table: &mut HashTable,
        rng: &mut rand::rngs::StdRng,
    ) -> Result<(), Box<dyn Error>>;

    /// Scenario name as given on the command line
    fn name(&self) -> &str;
}

fn key(id: usize) -> String {
    format!("key{}", id)
}

fn preload(table: &mut HashTable, keys: usize) -> Result<(), Box<dyn Error>> {
    for id in 0..keys {
        table.insert(&key(id), "initial")?;
    }
    Ok(())
}

/// Insert scenario - store random keys from the key space
pub struct Insert {
    keys: usize,
}

impl Insert {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for Insert {
    fn prepare(&mut self, _table: &mut HashTable) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    fn execute(
        &mut self,
        table: &mut HashTable,
        rng: &mut rand::rngs::StdRng,
    ) -> Result<(), Box<dyn Error>> {
        let id = rng.gen_range(0..self.keys);
        table.insert(&key(id), "value")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "insert"
    }
}

/// Read heavy scenario - 90% search, 10% insert
pub struct ReadHeavy {
    keys: usize,
}

impl ReadHeavy {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for ReadHeavy {
    fn prepare(&mut self, table: &mut HashTable) -> Result<(), Box<dyn Error>> {
        preload(table, self.keys)
    }

    fn execute(
        &mut self,
        table: &mut HashTable,
        rng: &mut rand::rngs::StdRng,
    ) -> Result<(), Box<dyn Error>> {
        let id = rng.gen_range(0..self.keys);
        if rng.gen_range(0..10) == 0 {
            table.insert(&key(id), "updated")?;
        } else if table.search(&key(id)).is_none() {
            return Err(format!("{} missing", key(id)).into());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "read_heavy"
    }
}

/// Update scenario - overwrite values of preloaded keys
pub struct Update {
    keys: usize,
    counter: u64,
}

impl Update {
    pub fn new(keys: usize) -> Self {
        Self { keys, counter: 0 }
    }
}

impl Scenario for Update {
    fn prepare(&mut self, table: &mut HashTable) -> Result<(), Box<dyn Error>> {
        preload(table, self.keys)
    }

    fn execute(
        &mut self,
        table: &mut HashTable,
        rng: &mut rand::rngs::StdRng,
    ) -> Result<(), Box<dyn Error>> {
        let id = rng.gen_range(0..self.keys);
        self.counter += 1;
        table.insert(&key(id), &self.counter.to_string())?;
        Ok(())
    }

    fn name(&self) -> &str {
        "update"
    }
}

/// Churn scenario - delete one random key and insert another
pub struct Churn {
    keys: usize,
}

impl Churn {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for Churn {
    fn prepare(&mut self, table: &mut HashTable) -> Result<(), Box<dyn Error>> {
        preload(table, self.keys)
    }

    fn execute(
        &mut self,
        table: &mut HashTable,
        rng: &mut rand::rngs::StdRng,
    ) -> Result<(), Box<dyn Error>> {
        table.delete(&key(rng.gen_range(0..self.keys)));
        table.insert(&key(rng.gen_range(0..self.keys)), "churned")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "churn"
    }
}

/// Sliding window scenario - insert ever-new keys, deleting the oldest
///
/// The live set stays at `keys` entries while every slot eventually turns
/// into a tombstone, so probes grow long.
pub struct SlidingWindow {
    keys: usize,
    next_id: usize,
}

impl SlidingWindow {
    pub fn new(keys: usize) -> Self {
        Self { keys, next_id: 0 }
    }
}

impl Scenario for SlidingWindow {
    fn prepare(&mut self, table: &mut HashTable) -> Result<(), Box<dyn Error>> {
        preload(table, self.keys)?;
        self.next_id = self.keys;
        Ok(())
    }

    fn execute(
        &mut self,
        table: &mut HashTable,
        _rng: &mut rand::rngs::StdRng,
    ) -> Result<(), Box<dyn Error>> {
        table.delete(&key(self.next_id - self.keys));
        table.insert(&key(self.next_id), "window")?;
        self.next_id += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "sliding_window"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn run(scenario: &mut dyn Scenario, iterations: usize) -> HashTable {
        let mut table = HashTable::with_capacity(53).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        scenario.prepare(&mut table).unwrap();
        for _ in 0..iterations {
            scenario.execute(&mut table, &mut rng).unwrap();
        }
        table
    }

    #[test]
    fn test_read_heavy_keeps_every_key() {
        let table = run(&mut ReadHeavy::new(40), 1_000);
        assert_eq!(table.size(), 40);
    }

    #[test]
    fn test_churn_bounded() {
        let table = run(&mut Churn::new(40), 1_000);
        assert!(table.size() <= 40);
    }

    #[test]
    fn test_sliding_window_keeps_live_set() {
        let table = run(&mut SlidingWindow::new(20), 500);
        assert_eq!(table.size(), 20);
        assert!(table.search("key519").is_some());
        assert!(table.search("key499").is_none());
    }
}
