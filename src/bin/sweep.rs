//! Exhaustive round-trip verification over the live index spaces.
//!
//! Hashes carry no version field, so any edit to a multiset definition
//! silently invalidates issued hashes. This sweep is the pre-flight check
//! for such edits: for every game space it walks the index range (capped by
//! `--limit` per space, `--full` to remove the cap) and asserts both
//! round-trip laws plus the codec round trip, in parallel.

use std::time::Instant;

use rayon::prelude::*;

use tabula::env_config;
use tabula::games::concordia::castles::leftover_tiles;
use tabula::games::concordia::forum::{CITIZENS, PATRICIANS};
use tabula::games::concordia::map::{zone_tiles, MapId, ZONES};
use tabula::games::concordia::market::DECK;
use tabula::hash_codec::{decode_base32, decode_base64, encode_base32, encode_base64};
use tabula::permutations::MultisetPermutations;

struct Args {
    limit: u64,
    full: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut limit = 100_000u64;
    let mut full = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--limit" => {
                i += 1;
                if i < args.len() {
                    limit = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --limit value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--full" => {
                full = true;
            }
            "--help" => {
                println!("Usage: tabula-sweep [--limit N] [--full]");
                println!("  --limit N   indices checked per space (default 100000)");
                println!("  --full      walk every space end to end");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args { limit, full }
}

/// Walk `[0, cap)` of one space in parallel, asserting
/// `index_of(at(i)) == i` and the codec round trip for every index.
fn sweep_space<K: Ord + Clone + Send + Sync>(
    name: &str,
    index: &MultisetPermutations<K>,
    args: &Args,
) {
    let len = index.len();
    let cap = if args.full { len } else { len.min(args.limit) };
    let start = Instant::now();

    (0..cap).into_par_iter().for_each(|i| {
        let perm = index.at(i);
        assert_eq!(index.index_of(&perm), i, "{}: round trip broke at {}", name, i);
        assert_eq!(decode_base32(&encode_base32(i)), i);
        assert_eq!(decode_base64(&encode_base64(i)), i);
    });

    println!(
        "  {:<24} len {:>12}  checked {:>9}  {:.2}s",
        name,
        len,
        cap,
        start.elapsed().as_secs_f64()
    );
}

fn main() {
    let args = parse_args();
    env_config::init_rayon_threads_lenient();
    println!(
        "Sweeping index spaces ({})...",
        if args.full {
            "full".to_string()
        } else {
            format!("limit {}", args.limit)
        }
    );
    let start = Instant::now();

    for map in [MapId::Italia, MapId::Imperium] {
        for zone in ZONES {
            let index = MultisetPermutations::new(zone_tiles(map, zone).iter().copied());
            sweep_space(&format!("{}/zone-{:?}", map.name(), zone), &index, &args);
        }
        let index = MultisetPermutations::new(leftover_tiles(map));
        sweep_space(&format!("{}/castles", map.name()), &index, &args);
    }

    let market = MultisetPermutations::new(DECK.iter().copied());
    sweep_space("market", &market, &args);

    let patricians = MultisetPermutations::new(PATRICIANS.iter().map(|&t| (t, 1)));
    sweep_space("forum/patricians", &patricians, &args);
    let citizens = MultisetPermutations::new(CITIZENS.iter().map(|&t| (t, 1)));
    sweep_space("forum/citizens", &citizens, &args);

    println!("All spaces verified in {:.2}s", start.elapsed().as_secs_f64());
}
