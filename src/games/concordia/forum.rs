//! Forum tile piles: the draw order of the patrician and citizen piles.
//!
//! Two independent permutations (every tile is unique, so each pile is a
//! plain factorial space), base-32 encoded and joined with `/`.

use serde::Serialize;

use crate::hash_codec::{decode_base32, encode_base32};
use crate::index_source::IndexSource;
use crate::permutations::MultisetPermutations;

/// Separator between the patrician and citizen parts.
pub const SEPARATOR: char = '/';

/// Patrician forum tiles, box order.
pub const PATRICIANS: &[&str] = &[
    "Appivs",
    "Faustvs",
    "Numerivs",
    "Octavivs",
    "Servivs",
    "Spvrivs",
];

/// Citizen forum tiles, box order.
pub const CITIZENS: &[&str] = &[
    "Arcarivs",
    "Calator",
    "Navalis",
    "Pistor",
    "Textor",
    "Vinarivs",
    "Sagarivs",
];

/// Decoded draw orders, top of each pile first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForumPiles {
    pub patricians: Vec<&'static str>,
    pub citizens: Vec<&'static str>,
}

fn pile_index(tiles: &'static [&'static str]) -> MultisetPermutations<&'static str> {
    MultisetPermutations::new(tiles.iter().map(|&tile| (tile, 1)))
}

/// Draw fresh pile orders and hash them.
pub fn random_hash(src: &mut dyn IndexSource) -> String {
    let patricians = pile_index(PATRICIANS);
    let citizens = pile_index(CITIZENS);
    format!(
        "{}{}{}",
        encode_base32(src.next_index(patricians.len())),
        SEPARATOR,
        encode_base32(src.next_index(citizens.len()))
    )
}

/// Decode a forum hash into both pile orders. Panics on a hash this engine
/// never issued.
pub fn decode(hash: &str) -> ForumPiles {
    let parts: Vec<&str> = hash.split(SEPARATOR).collect();
    assert_eq!(
        parts.len(),
        2,
        "forum hash \"{}\" has {} parts, expected 2",
        hash,
        parts.len()
    );
    ForumPiles {
        patricians: pile_index(PATRICIANS).at(decode_base32(parts[0])),
        citizens: pile_index(CITIZENS).at(decode_base32(parts[1])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index_source::FixedIndexSource;

    #[test]
    fn test_pile_spaces_are_factorials() {
        assert_eq!(pile_index(PATRICIANS).len(), 720); // 6!
        assert_eq!(pile_index(CITIZENS).len(), 5_040); // 7!
    }

    #[test]
    fn test_index_zero_is_alphabetical() {
        let piles = decode("0/0");
        let mut sorted = PATRICIANS.to_vec();
        sorted.sort();
        assert_eq!(piles.patricians, sorted);
    }

    #[test]
    fn test_round_trip_through_fixed_indices() {
        let mut src = FixedIndexSource::new(vec![719, 0]);
        let hash = random_hash(&mut src);
        let piles = decode(&hash);
        assert_eq!(pile_index(PATRICIANS).index_of(&piles.patricians), 719);
        assert_eq!(pile_index(CITIZENS).index_of(&piles.citizens), 0);
    }

    #[test]
    #[should_panic(expected = "expected 2")]
    fn test_wrong_part_count_panics() {
        decode("0/0/0");
    }
}
