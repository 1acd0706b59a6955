//! Per-game setup encoders. Each game module owns its static multiset
//! definitions and exposes only `random_hash` / `decode` pairs.

pub mod concordia;
