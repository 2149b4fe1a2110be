//! Rotating pool of API credentials with usage-based failover.

/// Rotating credential pool.
///
/// Each credential carries a usage counter; a pool-wide ceiling bounds how many
/// acquisitions a single credential may serve. Counters only ever increase —
/// an exhausted pool stays exhausted until the process restarts.
#[derive(Debug, Clone)]
pub struct KeyPool {
    keys: Vec<String>,
    usage: Vec<u32>,
    cursor: usize,
    ceiling: u32,
}

impl KeyPool {
    /// Builds a pool over `keys` with a per-credential acquisition ceiling.
    pub fn new(keys: Vec<String>, ceiling: u32) -> Self {
        let usage = vec![0; keys.len()];
        Self {
            keys,
            usage,
            cursor: 0,
            ceiling,
        }
    }

    /// Number of credentials in the pool.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when the pool holds no credentials at all.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Total acquisitions still available across all credentials.
    pub fn remaining(&self) -> u64 {
        self.usage
            .iter()
            .map(|&used| u64::from(self.ceiling.saturating_sub(used)))
            .sum()
    }

    /// Selects the next usable credential and charges one use against it.
    ///
    /// Scans at most `len()` slots starting at the cursor, wrapping circularly;
    /// the first slot still under the ceiling wins and the cursor parks on it.
    /// Because the cursor does not advance past the winner, a slot is reused
    /// until it reaches the ceiling before rotation moves on. Returns `None`
    /// once every slot has hit the ceiling.
    pub fn acquire(&mut self) -> Option<&str> {
        for offset in 0..self.keys.len() {
            let slot = (self.cursor + offset) % self.keys.len();
            if self.usage[slot] < self.ceiling {
                self.cursor = slot;
                self.usage[slot] += 1;
                return Some(&self.keys[slot]);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(n: usize, ceiling: u32) -> KeyPool {
        KeyPool::new((0..n).map(|i| format!("key-{i}")).collect(), ceiling)
    }

    #[test]
    fn yields_exactly_len_times_ceiling_acquisitions() {
        for (n, ceiling) in [(1, 1), (1, 3), (3, 1), (4, 25)] {
            let mut pool = pool(n, ceiling);
            for i in 0..(n as u32 * ceiling) {
                assert!(pool.acquire().is_some(), "acquisition {i} of {n}x{ceiling}");
            }
            assert_eq!(pool.acquire(), None, "pool {n}x{ceiling} should be spent");
            assert_eq!(pool.remaining(), 0);
        }
    }

    #[test]
    fn reuses_current_slot_until_ceiling_then_rotates() {
        let mut pool = pool(2, 2);
        assert_eq!(pool.acquire(), Some("key-0"));
        assert_eq!(pool.acquire(), Some("key-0"));
        assert_eq!(pool.acquire(), Some("key-1"));
        assert_eq!(pool.acquire(), Some("key-1"));
        assert_eq!(pool.acquire(), None);
    }

    #[test]
    fn empty_pool_never_yields() {
        let mut pool = KeyPool::new(Vec::new(), 100);
        assert_eq!(pool.acquire(), None);
        assert!(pool.is_empty());
    }

    #[test]
    fn exhaustion_is_permanent() {
        let mut pool = pool(2, 1);
        while pool.acquire().is_some() {}
        for _ in 0..5 {
            assert_eq!(pool.acquire(), None);
        }
    }
}
