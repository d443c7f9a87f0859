/*!
 * Synthetic Delay
 * Busy-wait stand-in for critical-section work
 */

use std::hint;

/// Spin for `units` iterations without yielding to the scheduler
///
/// One unit is one pass through the loop with a `spin_loop` hint; the
/// absolute cost is machine-dependent and only needs to be stable
/// within a run. The accumulator flows through `black_box` so the
/// optimizer cannot collapse the loop.
#[inline]
pub fn spin_work(units: u32) {
    let mut acc = 0u64;
    for i in 0..units {
        acc = acc.wrapping_add(u64::from(i));
        hint::spin_loop();
    }
    hint::black_box(acc);
}
