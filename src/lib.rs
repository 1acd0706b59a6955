//! # Tabula — compact, reversible board-game setup hashes
//!
//! Picks one random outcome of a combinatorial setup step ("which resource
//! tile goes on which city", "what order are market cards revealed in") and
//! stores that single outcome as a short, shareable, reversible string —
//! never the full structure.
//!
//! ## Engine overview
//!
//! | Layer | Module | Description |
//! |-------|--------|-------------|
//! | Factorials | [`factorials`] | Exact `n!`: `u64` table through 18!, `BigUint` beyond |
//! | Place values | [`placements`] | Memoized placement counter — the digit weights of the index number system |
//! | Index | [`permutations`] | Lazy bijection `[0, N) ↔` distinct multiset permutations (rank/unrank) |
//! | Codec | [`hash_codec`] | base-32 / base-64 index ↔ string |
//! | Randomness | [`index_source`] | The injectable random-index seam |
//! | Encoders | [`games`] | Per-game setup facts composed from index + codec |
//! | API | [`server`] | Stateless axum endpoints for the setup UI |
//!
//! A domain encoder draws an index in `[0, len)` through [`index_source`],
//! encodes it with [`hash_codec`] (`random_hash`), and the caller shares the
//! string; `decode` runs the same pipeline backwards and maps the resulting
//! permutation onto named game entities. The permutation space is never
//! enumerated — `len` is O(1) and `at`/`index_of` touch one permutation.

pub mod env_config;
pub mod factorials;
pub mod games;
pub mod hash_codec;
pub mod index_source;
pub mod permutations;
pub mod placements;
pub mod server;
