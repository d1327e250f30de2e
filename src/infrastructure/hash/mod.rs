// Hash functions and probe sequencing for the open-addressed table

/// Polynomial rolling hash of a string
///
/// Computes `hash = (hash * a + byte) mod m` over the bytes of `s`, starting from 0.
/// Bytes are treated as unsigned. The result is always in `[0, m)`; a zero
/// modulus has no such range and yields 0.
pub fn polynomial_hash(s: &str, a: u64, m: u64) -> u64 {
    if m == 0 {
        return 0;
    }

    // hash < m and a < 2^64, so the product fits in u128
    let a = a as u128;
    let m = m as u128;
    let mut hash = 0u128;

    for byte in s.as_bytes() {
        hash = (hash * a + *byte as u128) % m;
    }

    hash as u64
}

/// Trial-division primality check
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5u64;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }

    true
}

/// Double-hashing probe sequence for one key
///
/// Yields `index(attempt) = (h1 + attempt * (h2 + 1)) mod capacity` for
/// `attempt = 0..capacity`, so every slot of a prime-sized table is visited
/// exactly once before the iterator ends.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    capacity: u64,
    start: u64,
    step: u64,
    current: u64,
    attempt: u64,
}

impl ProbeSequence {
    /// Build the probe sequence of `key` for a table of `capacity` slots
    pub fn new(key: &str, capacity: u64, primary_prime: u64, secondary_prime: u64) -> Self {
        let start = polynomial_hash(key, primary_prime, capacity);
        let h2 = polynomial_hash(key, secondary_prime, capacity);

        // h2 + 1 == capacity would make every probe land on `start`
        let step = match capacity {
            0 => 0,
            _ => match (h2 + 1) % capacity {
                0 => 1,
                step => step,
            },
        };

        ProbeSequence {
            capacity,
            start,
            step,
            current: start,
            attempt: 0,
        }
    }

    /// First index probed (attempt 0)
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Distance between consecutive probes
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Index probed at `attempt`, computed directly from the formula
    pub fn index_at(&self, attempt: u64) -> u64 {
        if self.capacity == 0 {
            return 0;
        }

        let capacity = self.capacity as u128;
        let offset = (attempt as u128 % capacity) * self.step as u128 % capacity;
        ((self.start as u128 + offset) % capacity) as u64
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.attempt >= self.capacity {
            return None;
        }

        let index = self.current;
        self.current = ((self.current as u128 + self.step as u128) % self.capacity as u128) as u64;
        self.attempt += 1;

        Some(index as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.capacity - self.attempt) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}
