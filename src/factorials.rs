//! Exact integer factorials.
//!
//! `0!` through `18!` come from a precomputed `u64` table — 18! is the
//! largest factorial inside the 2^53 safe-integer range, so every table
//! entry also survives any double-precision consumer of these values.
//! Larger inputs extend the table's top entry with an arbitrary-precision
//! product, so `factorial` is exact for any `n`.

use num_bigint::BigUint;

/// Largest `n` covered by [`FACTORIALS_U64`]. Also the cap on the total item
/// count of an indexable multiset (see [`crate::permutations`]).
pub const MAX_TABLE_N: u32 = 18;

/// `FACTORIALS_U64[n] == n!` for `n` in `0..=18`.
pub const FACTORIALS_U64: [u64; MAX_TABLE_N as usize + 1] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5_040,
    40_320,
    362_880,
    3_628_800,
    39_916_800,
    479_001_600,
    6_227_020_800,
    87_178_291_200,
    1_307_674_368_000,
    20_922_789_888_000,
    355_687_428_096_000,
    6_402_373_705_728_000,
];

/// Exact `n!` for any `n ≥ 0`.
///
/// Table lookup through `n = 18`; beyond that, multiplies `18!` by the
/// remaining terms in `BigUint`.
pub fn factorial(n: u32) -> BigUint {
    if n <= MAX_TABLE_N {
        return BigUint::from(FACTORIALS_U64[n as usize]);
    }
    let mut acc = BigUint::from(FACTORIALS_U64[MAX_TABLE_N as usize]);
    for term in (MAX_TABLE_N + 1)..=n {
        acc *= term;
    }
    acc
}
