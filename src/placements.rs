//! Placement counter: the place-value system for multiset rank/unrank.
//!
//! `placement_count(n, k)` counts the ways to drop `k` indistinguishable
//! copies of one tile into `n` ordered insertion slots, where a slot may
//! receive any number of copies. It is defined by the recurrence
//!
//! ```text
//! placement_count(n, 1) = n
//! placement_count(1, k) = 1
//! placement_count(n, k) = Σ_{i=1..n} placement_count(i, k-1)
//! ```
//!
//! conditioning on the highest slot used by the remaining copies. This is
//! NOT the binomial coefficient C(n, k): slots here can stack copies, so the
//! counts follow C(n+k-1, k) instead (verified against the factorial ratio
//! in the test suite, but the recurrence stays authoritative — every index
//! ever issued was ranked under it).
//!
//! Results are memoized in a process-wide map keyed by the `(n, k)` value
//! pair. The map is append-only and never evicted; a `Mutex` makes it safe
//! for concurrent rank/unrank callers.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

static MEMO: OnceLock<Mutex<HashMap<(u32, u32), u64>>> = OnceLock::new();

/// Number of ways to place `k` indistinguishable copies into `n` ordered
/// insertion slots. `k = 0` counts the single empty placement.
///
/// Panics if `n == 0`: an insertion always has at least one slot.
pub fn placement_count(n: u32, k: u32) -> u64 {
    assert!(n >= 1, "placement_count: no insertion slots (n = 0)");
    if k == 0 {
        return 1;
    }
    if k == 1 {
        return n as u64;
    }
    if n == 1 {
        return 1;
    }

    let memo = MEMO.get_or_init(|| Mutex::new(HashMap::new()));
    if let Some(&cached) = memo.lock().unwrap().get(&(n, k)) {
        return cached;
    }

    // Lock released above; recurse without holding it.
    let mut sum = 0u64;
    for i in 1..=n {
        sum += placement_count(i, k - 1);
    }
    memo.lock().unwrap().insert((n, k), sum);
    sum
}
