//! Castle resource leftovers: the tiles still in the bag after every city
//! is stocked, laid out along the castle track.
//!
//! The indexable multiset is not fixed: it is the bag minus whatever the
//! chosen map's zones consumed, so the index space depends on the map. Both
//! `random_hash` and `decode` re-derive the leftover multiset from the map
//! on every call — the derivation is never cached, so the two paths cannot
//! drift apart.

use crate::hash_codec::{decode_base64, encode_base64};
use crate::index_source::IndexSource;
use crate::permutations::MultisetPermutations;

use super::map::{zone_tiles, MapId, Resource, BAG, ZONES};

/// Tiles left in the bag once every zone of `map` is stocked.
///
/// Panics if the bag cannot cover a zone's stocking — that is a data error
/// in [`BAG`] or the zone tables, not a runtime condition.
pub fn leftover_tiles(map: MapId) -> Vec<(Resource, u32)> {
    let mut left: Vec<(Resource, u32)> = BAG.to_vec();
    for zone in ZONES {
        for &(resource, count) in zone_tiles(map, zone) {
            let slot = left
                .iter_mut()
                .find(|&&mut (r, _)| r == resource)
                .unwrap_or_else(|| panic!("resource {:?} missing from the bag", resource));
            assert!(
                slot.1 >= count,
                "bag holds too few {:?} tiles for {:?}",
                resource,
                map
            );
            slot.1 -= count;
        }
    }
    left
}

fn leftover_index(map: MapId) -> MultisetPermutations<Resource> {
    MultisetPermutations::new(leftover_tiles(map))
}

/// Draw a fresh castle arrangement for `map` and hash it.
pub fn random_hash(map: MapId, src: &mut dyn IndexSource) -> String {
    let index = leftover_index(map);
    encode_base64(src.next_index(index.len()))
}

/// Decode a castle hash against the chosen map: the leftover tiles in
/// castle-track order.
///
/// `None` map → `None`: without the map the leftover multiset is unknown
/// and the hash cannot be interpreted yet.
pub fn decode(map: Option<MapId>, hash: &str) -> Option<Vec<Resource>> {
    let map = map?;
    Some(leftover_index(map).at(decode_base64(hash)))
}
