//! Lazy index over the distinct permutations of a multiset.
//!
//! [`MultisetPermutations`] is a bijection between the dense integer range
//! `[0, len)` and the `len = (Σcount)! / Π(count!)` distinct orderings of a
//! multiset definition, computed without ever materializing them:
//!
//! - [`MultisetPermutations::at`] unranks an index into a permutation,
//! - [`MultisetPermutations::index_of`] ranks a permutation back to its index,
//! - [`MultisetPermutations::len`] is O(1) in the number of permutations.
//!
//! Both directions walk the sorted `(key, count)` pairs as one mixed-radix
//! number whose place value per key is the [`placement_count`] of dropping
//! that key's copies into the sequence built from the keys after it. The
//! digit for one key selects a non-decreasing multiset of insertion slots —
//! a combinatorial number system, with placement counts instead of powers of
//! a base.
//!
//! The two directions deliberately traverse the pairs in opposite orders
//! (`at` last-to-first, `index_of` first-to-last): unranking inserts a key
//! into the sequence formed by the keys sorted after it, so ranking must
//! strip keys from the front to see that same intermediate sequence. The
//! key sort order is part of the contract — it fixes which permutation is
//! index 0 (all copies in ascending key order).

use num_bigint::BigUint;

use crate::factorials::{factorial, MAX_TABLE_N};
use crate::placements::placement_count;

/// Index over the distinct permutations of a multiset, generic over any
/// totally ordered key type.
///
/// Construction normalizes the definition: entries sorted ascending by key,
/// zero counts dropped. The total item count is capped at
/// [`MAX_TABLE_N`](crate::factorials::MAX_TABLE_N) so every index fits `u64`
/// exactly.
#[derive(Clone, Debug)]
pub struct MultisetPermutations<K> {
    /// Normalized definition: ascending by key, all counts ≥ 1.
    pairs: Vec<(K, u32)>,
    /// Σ count over `pairs`.
    total: u32,
}

impl<K: Ord + Clone> MultisetPermutations<K> {
    /// Build the index from a multiset definition (key → copy count).
    ///
    /// Panics if a key appears twice or if the total count exceeds the
    /// factorial table bound of 18 items.
    pub fn new<I>(definition: I) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
    {
        let mut pairs: Vec<(K, u32)> = definition.into_iter().filter(|&(_, c)| c > 0).collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        for pair in pairs.windows(2) {
            assert!(
                pair[0].0 != pair[1].0,
                "multiset definition lists the same key twice"
            );
        }
        let total: u32 = pairs.iter().map(|&(_, c)| c).sum();
        assert!(
            total <= MAX_TABLE_N,
            "multiset holds {} items, factorial table covers at most {}",
            total,
            MAX_TABLE_N
        );
        Self { pairs, total }
    }

    /// Number of distinct permutations: `(Σcount)! / Π(count!)`.
    ///
    /// Recomputed from the definition on every call — never stored, so it
    /// can never drift from the pairs.
    pub fn len(&self) -> u64 {
        let mut denominator = BigUint::from(1u32);
        for &(_, count) in &self.pairs {
            denominator *= factorial(count);
        }
        let count = factorial(self.total) / denominator;
        // total ≤ 18 keeps the multinomial below 18! < 2^63.
        u64::try_from(count).expect("permutation count exceeds u64")
    }

    /// Always false: even the empty multiset has one permutation (the empty
    /// sequence).
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of items in each permutation.
    pub fn item_count(&self) -> u32 {
        self.total
    }

    /// Unrank: the permutation at `index`, as a sequence of keys.
    ///
    /// Panics if `index` is outside `[0, len)`.
    pub fn at(&self, index: u64) -> Vec<K> {
        let len = self.len();
        assert!(
            index < len,
            "permutation index {} out of range (len {})",
            index,
            len
        );

        let mut out: Vec<K> = Vec::with_capacity(self.total as usize);
        let mut rem = index;
        for (key, count) in self.pairs.iter().rev() {
            let avail = out.len() as u32 + 1;
            let slots = placement_count(avail, *count);
            let digit = rem % slots;
            rem /= slots;

            // Insert highest slot first so the lower slots still point into
            // the sequence as it stood before this key.
            let chosen = unrank_slots(digit, avail, *count);
            for &slot in chosen.iter().rev() {
                out.insert(slot as usize, key.clone());
            }
        }
        debug_assert_eq!(rem, 0, "index digits left over after the first key");
        out
    }

    /// Rank: the index of `permutation`. Exact inverse of [`at`](Self::at).
    ///
    /// Panics if the permutation does not consist of exactly the declared
    /// keys with exactly the declared counts.
    pub fn index_of(&self, permutation: &[K]) -> u64 {
        assert_eq!(
            permutation.len(),
            self.total as usize,
            "permutation holds {} items, the multiset defines {}",
            permutation.len(),
            self.total
        );

        let mut remaining: Vec<&K> = permutation.iter().collect();
        let mut digits: Vec<(u64, u64)> = Vec::with_capacity(self.pairs.len());
        for (key, count) in &self.pairs {
            // Removing copies one at a time shifts the later copies left,
            // which recovers the insertion-slot multiset directly: the j-th
            // removal index equals the j-th slot the unrank step chose.
            let mut slots_chosen: Vec<u32> = Vec::with_capacity(*count as usize);
            for _ in 0..*count {
                let pos = remaining
                    .iter()
                    .position(|k| *k == key)
                    .unwrap_or_else(|| panic!("permutation is missing copies of a declared key"));
                remaining.remove(pos);
                slots_chosen.push(pos as u32);
            }
            let avail = remaining.len() as u32 + 1;
            let rank = rank_slots(&slots_chosen, avail, *count);
            digits.push((rank, placement_count(avail, *count)));
        }
        // Length check + per-key removals account for every item, so any
        // foreign key has already tripped the missing-copies panic.
        debug_assert!(remaining.is_empty());

        let mut acc = 0u64;
        for &(rank, slots) in digits.iter().rev() {
            acc = acc * slots + rank;
        }
        acc
    }
}

/// Decode one mixed-radix digit into the non-decreasing multiset of `copies`
/// insertion slots it names, out of `avail` candidates.
///
/// Most-significant choice first: for each copy, advance the candidate slot
/// while the placements of the remaining copies still fit inside the budget,
/// spending the budget per skipped slot.
fn unrank_slots(digit: u64, avail: u32, copies: u32) -> Vec<u32> {
    let mut chosen = Vec::with_capacity(copies as usize);
    let mut budget = digit;
    let mut slot = 0u32;
    for copy in 0..copies {
        let remaining = copies - copy - 1;
        loop {
            let ways = placement_count(avail - slot, remaining);
            if budget >= ways {
                budget -= ways;
                slot += 1;
            } else {
                break;
            }
        }
        chosen.push(slot);
    }
    debug_assert_eq!(budget, 0, "slot budget left over");
    chosen
}

/// Rank a non-decreasing multiset of insertion slots among all
/// `placement_count(avail, copies)` possible ones. Inverse of
/// [`unrank_slots`]: a running sum of placements over the candidate slots
/// below each chosen one.
fn rank_slots(chosen: &[u32], avail: u32, copies: u32) -> u64 {
    let mut rank = 0u64;
    let mut floor = 0u32;
    for (copy, &slot) in chosen.iter().enumerate() {
        let remaining = copies - copy as u32 - 1;
        for skipped in floor..slot {
            rank += placement_count(avail - skipped, remaining);
        }
        floor = slot;
    }
    rank
}
