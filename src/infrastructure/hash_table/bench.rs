use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;

use dhtable::infrastructure::hash_table::HashTable;

// Test configuration
const CAPACITY: usize = 1_009;
const OPERATIONS: usize = 800;

fn keys() -> Vec<String> {
    (0..OPERATIONS).map(|i| format!("key-{}", i)).collect()
}

// Insert, read back and delete every key
pub fn bench_single_threaded(c: &mut Criterion) {
    let keys = keys();
    let mut group = c.benchmark_group("SingleThreaded");

    group.bench_function("HashTable", |b| {
        b.iter(|| {
            let mut table = HashTable::with_capacity(CAPACITY).unwrap();

            for key in &keys {
                table.insert(key, "test_value").unwrap();
            }

            for key in &keys {
                assert!(table.search(key).is_some());
            }

            for key in &keys {
                table.delete(key);
            }
        });
    });

    group.bench_function("StdHashMap", |b| {
        b.iter(|| {
            let mut map: HashMap<String, String> = HashMap::with_capacity(CAPACITY);

            for key in &keys {
                map.insert(key.clone(), "test_value".to_string());
            }

            for key in &keys {
                assert!(map.get(key).is_some());
            }

            for key in &keys {
                map.remove(key);
            }
        });
    });

    group.finish();
}

// Perform read-heavy operations (90% reads, 10% writes)
pub fn bench_read_heavy(c: &mut Criterion) {
    let keys = keys();
    let mut group = c.benchmark_group("ReadHeavy");

    let mut table = HashTable::with_capacity(CAPACITY).unwrap();
    for key in &keys {
        table.insert(key, "test_value").unwrap();
    }

    group.bench_function("HashTable", |b| {
        b.iter(|| {
            for (i, key) in keys.iter().enumerate() {
                if i % 10 == 0 {
                    table.insert(key, "updated_value").unwrap();
                } else {
                    black_box(table.search(key));
                }
            }
        });
    });

    group.finish();
}

// Delete and re-insert keys so that probes keep crossing tombstones
pub fn bench_tombstone_churn(c: &mut Criterion) {
    let keys = keys();
    let mut group = c.benchmark_group("TombstoneChurn");

    let mut table = HashTable::with_capacity(CAPACITY).unwrap();
    for key in &keys {
        table.insert(key, "test_value").unwrap();
    }

    group.bench_function("HashTable", |b| {
        b.iter(|| {
            for key in keys.iter().step_by(3) {
                table.delete(key);
            }
            for key in keys.iter().step_by(3) {
                table.insert(key, "test_value").unwrap();
            }
        });
    });

    group.finish();
}

// Export the benchmark group for criterion
criterion_group!(benches, bench_single_threaded, bench_read_heavy, bench_tombstone_churn);

// Only run the benchmark group when this file is executed directly
criterion_main!(benches);
