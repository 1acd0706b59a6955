//! Market card order: the sequence the personality deck is revealed in.
//!
//! A single base-64 part — the deck multiset has 681 million distinct
//! orders, well past base-32 comfort but a five-symbol base-64 hash.

use serde::Serialize;

use crate::hash_codec::{decode_base64, encode_base64};
use crate::index_source::IndexSource;
use crate::permutations::MultisetPermutations;

/// Personality card kinds sold in the market. Declaration order is the key
/// order, so index 0 reveals the deck grouped by kind in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCard {
    Architect,
    Prefect,
    Mercator,
    Diplomat,
    Tribune,
    Colonist,
    Consul,
}

impl MarketCard {
    pub fn name(self) -> &'static str {
        match self {
            MarketCard::Architect => "architect",
            MarketCard::Prefect => "prefect",
            MarketCard::Mercator => "mercator",
            MarketCard::Diplomat => "diplomat",
            MarketCard::Tribune => "tribune",
            MarketCard::Colonist => "colonist",
            MarketCard::Consul => "consul",
        }
    }
}

/// Deck composition: two copies of each kind, 14 cards.
pub const DECK: &[(MarketCard, u32)] = &[
    (MarketCard::Architect, 2),
    (MarketCard::Prefect, 2),
    (MarketCard::Mercator, 2),
    (MarketCard::Diplomat, 2),
    (MarketCard::Tribune, 2),
    (MarketCard::Colonist, 2),
    (MarketCard::Consul, 2),
];

fn deck_index() -> MultisetPermutations<MarketCard> {
    MultisetPermutations::new(DECK.iter().copied())
}

/// Draw a fresh deck order and hash it.
pub fn random_hash(src: &mut dyn IndexSource) -> String {
    let index = deck_index();
    encode_base64(src.next_index(index.len()))
}

/// Decode a market hash into the revealed card order, top of the deck
/// first. Panics on a hash this engine never issued.
pub fn decode(hash: &str) -> Vec<MarketCard> {
    deck_index().at(decode_base64(hash))
}
