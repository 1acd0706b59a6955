//! Shared environment configuration for the tabula binaries.
//!
//! Consolidates the `TABULA_PORT` and `RAYON_NUM_THREADS` reads used by the
//! server and sweep binaries.

/// Read `TABULA_PORT` (default 8700).
pub fn server_port() -> u16 {
    std::env::var("TABULA_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8700)
}

/// Read `RAYON_NUM_THREADS` (fallback `OMP_NUM_THREADS`, default 8) and
/// build the rayon global pool, tolerating an already-initialized pool.
/// Returns the thread count.
pub fn init_rayon_threads_lenient() -> usize {
    let num_threads = std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok(); // May fail if already initialized
    println!("Rayon threads: {}", num_threads);
    num_threads
}
