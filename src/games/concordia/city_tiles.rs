//! City resource tiles: which resource lands on which city.
//!
//! One hash part per tile zone, `-` separated. Each part is the base-32
//! encoding of that zone's arrangement index; the decoded permutation is
//! zipped onto the zone's cities in board order.

use serde::Serialize;

use crate::hash_codec::{decode_base32, encode_base32};
use crate::index_source::IndexSource;
use crate::permutations::MultisetPermutations;

use super::map::{zone_cities, zone_tiles, MapId, Resource, Zone, ZONES};

/// Separator between zone parts.
pub const SEPARATOR: char = '-';

/// One decoded assignment: this city produces this resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CityTile {
    pub province: &'static str,
    pub city: &'static str,
    pub resource: Resource,
}

fn zone_index(map: MapId, zone: Zone) -> MultisetPermutations<Resource> {
    MultisetPermutations::new(zone_tiles(map, zone).iter().copied())
}

/// Draw a fresh arrangement for every zone of `map` and hash it.
pub fn random_hash(map: MapId, src: &mut dyn IndexSource) -> String {
    ZONES
        .iter()
        .map(|&zone| {
            let index = zone_index(map, zone);
            encode_base32(src.next_index(index.len()))
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Decode a city-tile hash against the chosen map.
///
/// `None` map → `None`: the upstream map choice is still pending and the
/// hash cannot be interpreted yet. A hash with the wrong number of parts or
/// foreign symbols panics — this engine never issued it.
pub fn decode(map: Option<MapId>, hash: &str) -> Option<Vec<CityTile>> {
    let map = map?;
    let parts: Vec<&str> = hash.split(SEPARATOR).collect();
    assert_eq!(
        parts.len(),
        ZONES.len(),
        "city tile hash \"{}\" has {} parts, expected {}",
        hash,
        parts.len(),
        ZONES.len()
    );

    let mut tiles = Vec::new();
    for (&zone, part) in ZONES.iter().zip(&parts) {
        let index = zone_index(map, zone);
        let arrangement = index.at(decode_base32(part));
        let cities = zone_cities(map, zone);
        debug_assert_eq!(arrangement.len(), cities.len());
        for ((province, city), resource) in cities.into_iter().zip(arrangement) {
            tiles.push(CityTile {
                province,
                city,
                resource,
            });
        }
    }
    Some(tiles)
}
