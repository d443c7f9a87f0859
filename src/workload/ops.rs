/*!
 * Workload Operations
 * Reader and writer passes over the shared map
 */

use super::map::SharedMap;
use super::spin::spin_work;
use std::sync::atomic::{AtomicU64, Ordering};

/// Per-operation workload parameters, fixed for a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadProfile {
    /// Keys are drawn from [0, key_space)
    pub key_space: u32,
    /// Spin units per read operation
    pub read_payload: u32,
    /// Spin units per write operation
    pub write_payload: u32,
}

/// Process-wide monotonic tick counter
static TICK: AtomicU64 = AtomicU64::new(0);

/// Fast, non-blocking, monotonically advancing counter
///
/// Stands in for a wall-clock tick source. The exact value is
/// inconsequential; only its effect of scattering keys across the
/// domain matters.
#[inline]
pub fn next_tick() -> u64 {
    TICK.fetch_add(1, Ordering::Relaxed)
}

/// Draw the next key from [0, key_space)
#[inline]
pub fn scatter_key(key_space: u32) -> u32 {
    debug_assert!(key_space > 0, "key space must be non-empty");
    (next_tick() % u64::from(key_space)) as u32
}

/// One reader pass: look up a scattered key, then do synthetic work
///
/// A miss is expected early in a run; the value is discarded either
/// way. No side effects beyond the delay.
#[inline]
pub fn read_pass(map: &SharedMap, profile: &WorkloadProfile) {
    let key = scatter_key(profile.key_space);
    let _ = map.lookup(key);
    spin_work(profile.read_payload);
}

/// One writer pass: synthetic work, then insert/overwrite the scattered key
#[inline]
pub fn write_pass(map: &mut SharedMap, profile: &WorkloadProfile) {
    let key = scatter_key(profile.key_space);
    spin_work(profile.write_payload);
    map.store(key, key.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(key_space: u32) -> WorkloadProfile {
        WorkloadProfile {
            key_space,
            read_payload: 10,
            write_payload: 10,
        }
    }

    #[test]
    fn ticks_advance_monotonically() {
        let a = next_tick();
        let b = next_tick();
        assert!(b > a);
    }

    #[test]
    fn scattered_keys_stay_in_domain() {
        for _ in 0..10_000 {
            assert!(scatter_key(97) < 97);
        }
    }

    #[test]
    fn scattered_keys_vary_across_draws() {
        // Other tests share the tick counter, so exact coverage is not
        // guaranteed; the keys must still spread beyond a single value.
        let mut seen = [false; 8];
        for _ in 0..1_000 {
            seen[scatter_key(8) as usize] = true;
        }
        assert!(seen.iter().filter(|&&hit| hit).count() >= 2);
    }

    #[test]
    fn read_pass_leaves_map_untouched() {
        let map = SharedMap::new();
        read_pass(&map, &profile(100));
        assert!(map.is_empty());
    }

    #[test]
    fn write_pass_stores_stringified_key() {
        let mut map = SharedMap::new();
        for _ in 0..50 {
            write_pass(&mut map, &profile(4));
        }
        assert!(!map.is_empty());
        assert!(map.len() <= 4);
        for key in 0..4 {
            if let Some(value) = map.lookup(key) {
                assert_eq!(value, key.to_string());
            }
        }
    }
}
