use super::*;
use std::collections::HashSet;

#[test]
fn test_polynomial_hash_consistency() {
    // Test that the same input always produces the same hash
    let s = "hello world";
    let hash1 = polynomial_hash(s, 151, 53);
    let hash2 = polynomial_hash(s, 151, 53);
    let hash3 = polynomial_hash(s, 151, 53);

    assert_eq!(hash1, hash2);
    assert_eq!(hash2, hash3);
}

#[test]
fn test_polynomial_hash_known_values() {
    // Empty string hashes to zero
    assert_eq!(polynomial_hash("", 151, 53), 0);

    // Single byte: 'a' = 97, 97 mod 53 = 44
    assert_eq!(polynomial_hash("a", 151, 53), 44);

    // "ab": ((97 mod 53) * 151 + 98) mod 53 = (44 * 151 + 98) mod 53 = 6742 mod 53 = 11
    assert_eq!(polynomial_hash("ab", 151, 53), 11);
}

#[test]
fn test_polynomial_hash_in_range() {
    let keys = ["", "a", "key", "another key", "日本語", "x".repeat(1000).as_str()]
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    for m in [1u64, 2, 53, 97, 65_521, u32::MAX as u64] {
        for key in &keys {
            assert!(polynomial_hash(key, 151, m) < m);
            assert!(polynomial_hash(key, 163, m) < m);
        }
    }
}

#[test]
fn test_polynomial_hash_high_bytes_unsigned() {
    // Non-ASCII bytes must not produce a negative intermediate
    let s = "\u{00ff}\u{00fe}";
    let hash = polynomial_hash(s, 151, 53);
    assert!(hash < 53);

    let mut expected = 0u64;
    for byte in s.as_bytes() {
        expected = (expected * 151 + *byte as u64) % 53;
    }
    assert_eq!(hash, expected);
}

#[test]
fn test_polynomial_hash_primes_decorrelate() {
    // The two primes should not give identical hashes for every key
    let differing = (0..100)
        .map(|i| format!("key-{}", i))
        .filter(|k| polynomial_hash(k, 151, 53) != polynomial_hash(k, 163, 53))
        .count();

    assert!(differing > 50);
}

#[test]
fn test_is_prime() {
    let primes = [2u64, 3, 5, 7, 11, 13, 53, 97, 151, 163, 65_521];
    let composites = [0u64, 1, 4, 9, 15, 25, 49, 51, 54, 100, 65_535];

    for p in primes {
        assert!(is_prime(p), "{} should be prime", p);
    }
    for c in composites {
        assert!(!is_prime(c), "{} should not be prime", c);
    }
}

#[test]
fn test_probe_sequence_covers_every_slot() {
    for i in 0..500 {
        let key = format!("probe-{}", i);
        let seen: HashSet<usize> = ProbeSequence::new(&key, 53, 151, 163).collect();
        assert_eq!(seen.len(), 53, "key {} did not visit every slot", key);
    }
}

#[test]
fn test_probe_sequence_length() {
    let seq = ProbeSequence::new("a", 53, 151, 163);
    assert_eq!(seq.len(), 53);
    assert_eq!(seq.count(), 53);
}

#[test]
fn test_probe_sequence_matches_formula() {
    for key in ["a", "b", "hello", "world", "tombstone"] {
        let h1 = polynomial_hash(key, 151, 53);
        let h2 = polynomial_hash(key, 163, 53);
        let seq = ProbeSequence::new(key, 53, 151, 163);

        assert_eq!(seq.start(), h1);

        for (attempt, index) in seq.clone().enumerate() {
            let expected = if h2 + 1 == 53 {
                (h1 + attempt as u64) % 53
            } else {
                (h1 + attempt as u64 * (h2 + 1)) % 53
            };
            assert_eq!(index as u64, expected);
            assert_eq!(seq.index_at(attempt as u64), expected);
        }
    }
}

#[test]
fn test_probe_sequence_zero_step_substituted() {
    // Find a key whose secondary hash is capacity - 1
    let key = (0..10_000)
        .map(|i| format!("k{}", i))
        .find(|k| polynomial_hash(k, 163, 53) == 52)
        .expect("some key should hash to 52");

    let seq = ProbeSequence::new(&key, 53, 151, 163);
    assert_eq!(seq.step(), 1);

    let seen: HashSet<usize> = seq.collect();
    assert_eq!(seen.len(), 53);
}

#[test]
fn test_polynomial_hash_large_multiplier() {
    // Multipliers above u32::MAX reduce to the same residue as a mod m
    let a = u64::MAX / 2;
    let hash = polynomial_hash("ab", a, 53);
    assert!(hash < 53);
    assert_eq!(hash, polynomial_hash("ab", a % 53, 53));

    assert!(polynomial_hash("hello world", u64::MAX, u64::MAX) < u64::MAX);
}

#[test]
fn test_polynomial_hash_zero_modulus() {
    assert_eq!(polynomial_hash("anything", 151, 0), 0);
    assert_eq!(polynomial_hash("", 151, 0), 0);
}

#[test]
fn test_is_prime_large_inputs() {
    assert!(!is_prime(u64::MAX));
    assert!(!is_prime(u64::MAX - 1));

    // Largest prime below 2^32 times a mid-sized prime
    assert!(is_prime(4_294_967_291));
    assert!(!is_prime(4_294_967_291 * 65_537));
}

#[test]
fn test_probe_sequence_degenerate_capacity() {
    let mut seq = ProbeSequence::new("key", 0, 151, 163);
    assert_eq!(seq.len(), 0);
    assert_eq!(seq.next(), None);
    assert_eq!(seq.index_at(5), 0);

    let seq = ProbeSequence::new("key", 1, 151, 163);
    assert_eq!(seq.collect::<Vec<_>>(), vec![0]);
}
