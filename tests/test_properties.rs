//! Property-based tests for the indexing engine and codecs.

use proptest::prelude::*;

use num_bigint::BigUint;
use tabula::factorials::factorial;
use tabula::hash_codec::{
    decode_base32, decode_base64, encode_base32, encode_base64, is_valid_base32, is_valid_base64,
};
use tabula::permutations::MultisetPermutations;
use tabula::placements::placement_count;

/// Strategy: a small multiset definition over distinct letter keys.
fn definition_strategy() -> impl Strategy<Value = Vec<(char, u32)>> {
    prop::collection::vec(1u32..=3, 1..=4).prop_map(|counts| {
        counts
            .into_iter()
            .enumerate()
            .map(|(i, c)| ((b'A' + i as u8) as char, c))
            .collect()
    })
}

proptest! {
    // 1. Codec encode/decode are inverses over the whole u64 range.
    #[test]
    fn codec_round_trip(n in any::<u64>()) {
        prop_assert_eq!(decode_base32(&encode_base32(n)), n);
        prop_assert_eq!(decode_base64(&encode_base64(n)), n);
    }

    // 2. Everything the codecs emit passes their own validity checks.
    #[test]
    fn codec_output_is_valid(n in any::<u64>()) {
        prop_assert!(is_valid_base32(&encode_base32(n)));
        prop_assert!(is_valid_base64(&encode_base64(n)));
    }

    // 3. Placement counter base cases.
    #[test]
    fn placement_base_cases(n in 1u32..=15) {
        prop_assert_eq!(placement_count(n, 1), n as u64);
        prop_assert_eq!(placement_count(1, n), 1);
    }

    // 4. Pascal-style consistency of the recurrence.
    #[test]
    fn placement_recurrence(n in 1u32..=12, k in 2u32..=8) {
        let sum: u64 = (1..=n).map(|i| placement_count(i, k - 1)).sum();
        prop_assert_eq!(placement_count(n, k), sum);
    }

    // 5. Closed-form cross-check: the recurrence counts multisets of k slots
    //    out of n, i.e. C(n+k-1, k) — NOT C(n, k). Checked against the
    //    factorial ratio without ever substituting it into the engine.
    #[test]
    fn placement_matches_multichoose(n in 1u32..=12, k in 1u32..=8) {
        let ratio = factorial(n + k - 1) / (factorial(k) * factorial(n - 1));
        prop_assert_eq!(BigUint::from(placement_count(n, k)), ratio);
    }

    // 6. len matches the multinomial coefficient.
    #[test]
    fn length_is_multinomial(def in definition_strategy()) {
        let index = MultisetPermutations::new(def.clone());
        let total: u32 = def.iter().map(|&(_, c)| c).sum();
        let mut denom = BigUint::from(1u32);
        for &(_, c) in &def {
            denom *= factorial(c);
        }
        prop_assert_eq!(BigUint::from(index.len()), factorial(total) / denom);
    }

    // 7. rank ∘ unrank is the identity on indices.
    #[test]
    fn rank_unrank_round_trip(def in definition_strategy(), raw in any::<u64>()) {
        let index = MultisetPermutations::new(def);
        let i = raw % index.len();
        let perm = index.at(i);
        prop_assert_eq!(index.index_of(&perm), i);
    }

    // 8. unrank ∘ rank is the identity on permutations.
    #[test]
    fn unrank_rank_round_trip(def in definition_strategy(), raw in any::<u64>()) {
        let index = MultisetPermutations::new(def);
        let i = raw % index.len();
        let perm = index.at(i);
        prop_assert_eq!(index.at(index.index_of(&perm)), perm);
    }

    // 9. Every unranked permutation honors the multiset composition.
    #[test]
    fn unranked_permutations_match_composition(def in definition_strategy(), raw in any::<u64>()) {
        let index = MultisetPermutations::new(def.clone());
        let perm = index.at(raw % index.len());
        for (key, count) in def {
            let occurrences = perm.iter().filter(|&&k| k == key).count() as u32;
            prop_assert_eq!(occurrences, count);
        }
    }

    // 10. Distinct indices give distinct permutations (injectivity; with 7
    //     it implies the bijection on the full range).
    #[test]
    fn distinct_indices_distinct_permutations(
        def in definition_strategy(),
        a in any::<u64>(),
        b in any::<u64>(),
    ) {
        let index = MultisetPermutations::new(def);
        let (a, b) = (a % index.len(), b % index.len());
        if a != b {
            prop_assert_ne!(index.at(a), index.at(b));
        }
    }
}

// Exhaustive check over one nontrivial space (non-proptest).
#[test]
fn exhaustive_round_trip_small_space() {
    let index = MultisetPermutations::new([('A', 2), ('B', 2), ('C', 2)]);
    let len = index.len();
    assert_eq!(len, 90); // 6!/(2!·2!·2!)
    let mut seen = std::collections::HashSet::new();
    for i in 0..len {
        let perm = index.at(i);
        assert_eq!(index.index_of(&perm), i);
        assert!(seen.insert(perm), "duplicate permutation at {}", i);
    }
}
