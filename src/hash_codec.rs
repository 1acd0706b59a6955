//! Short-string codecs: a setup index in, a shareable hash out.
//!
//! Two positional codecs over restricted alphabets:
//!
//! - **base-32** for the small per-zone index spaces. The alphabet drops
//!   I, L, O and U so no emitted symbol is a look-alike of a digit — the
//!   substitution is baked into the alphabet itself, so encode and decode
//!   share one table and stay exact inverses.
//! - **base-64** for the wide single-group spaces (market order, castle
//!   leftovers). Covers the full `u64` index range with plain 64-bit
//!   div/mod positional encoding.
//!
//! Neither alphabet contains `-` or `/`, the two separators compound hashes
//! are joined with. Hashes are case-sensitive. There is no version field or
//! checksum: a hash is only as durable as the multiset definition it was
//! issued under.

use std::sync::OnceLock;

/// Base-32 alphabet, digit-confusable letters removed.
pub const BASE32_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Base-64 alphabet. `.` and `_` round it out past the alphanumerics; both
/// survive URLs unescaped and neither collides with a separator.
pub const BASE64_ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz._";

/// Longest base-32 hash a `u64` can produce: ceil(64 / 5) symbols.
const MAX_BASE32_LEN: usize = 13;

/// Longest base-64 hash a `u64` can produce: ceil(64 / 6) symbols.
const MAX_BASE64_LEN: usize = 11;

/// Encode an index as a base-32 hash. `encode_base32(0) == "0"`.
pub fn encode_base32(value: u64) -> String {
    encode(value, BASE32_ALPHABET)
}

/// Decode a base-32 hash back to its index.
///
/// Panics on an empty string or a symbol outside the alphabet.
pub fn decode_base32(hash: &str) -> u64 {
    decode(hash, 32, |c| {
        BASE32_ALPHABET.iter().position(|&s| s as char == c)
    })
}

/// Encode an index as a base-64 hash. `encode_base64(0) == "0"`.
pub fn encode_base64(value: u64) -> String {
    encode(value, BASE64_ALPHABET)
}

/// Decode a base-64 hash back to its index: `value = value·64 + digit`
/// over the symbols left to right.
///
/// Panics on an empty string or a symbol outside the alphabet.
pub fn decode_base64(hash: &str) -> u64 {
    let table = base64_values();
    decode(hash, 64, |c| {
        let b = c as usize;
        if b < 128 && table[b] >= 0 {
            Some(table[b] as usize)
        } else {
            None
        }
    })
}

/// True if `hash` is a syntactically valid base-32 hash: non-empty, short
/// enough to fit a `u64`, every symbol in the alphabet.
pub fn is_valid_base32(hash: &str) -> bool {
    !hash.is_empty()
        && hash.len() <= MAX_BASE32_LEN
        && hash
            .chars()
            .all(|c| BASE32_ALPHABET.iter().any(|&s| s as char == c))
}

/// True if `hash` is a syntactically valid base-64 hash.
pub fn is_valid_base64(hash: &str) -> bool {
    let table = base64_values();
    !hash.is_empty()
        && hash.len() <= MAX_BASE64_LEN
        && hash.chars().all(|c| (c as usize) < 128 && table[c as usize] >= 0)
}

fn encode(mut value: u64, alphabet: &[u8]) -> String {
    let base = alphabet.len() as u64;
    if value == 0 {
        return (alphabet[0] as char).to_string();
    }
    let mut symbols = Vec::new();
    while value > 0 {
        symbols.push(alphabet[(value % base) as usize]);
        value /= base;
    }
    symbols.iter().rev().map(|&s| s as char).collect()
}

fn decode(hash: &str, base: u64, symbol_value: impl Fn(char) -> Option<usize>) -> u64 {
    assert!(!hash.is_empty(), "empty hash");
    let mut value: u64 = 0;
    for c in hash.chars() {
        let digit = symbol_value(c)
            .unwrap_or_else(|| panic!("unknown symbol '{}' in hash \"{}\"", c, hash));
        value = value
            .checked_mul(base)
            .and_then(|v| v.checked_add(digit as u64))
            .unwrap_or_else(|| panic!("hash \"{}\" does not fit a 64-bit index", hash));
    }
    value
}

/// Symbol → value table for base-64 decoding, built once on first use and
/// kept for the life of the process. `-1` marks symbols outside the
/// alphabet.
fn base64_values() -> &'static [i8; 128] {
    static TABLE: OnceLock<[i8; 128]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [-1i8; 128];
        for (value, &symbol) in BASE64_ALPHABET.iter().enumerate() {
            table[symbol as usize] = value as i8;
        }
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_single_symbol() {
        assert_eq!(encode_base32(0), "0");
        assert_eq!(encode_base64(0), "0");
    }

    #[test]
    fn test_known_values() {
        assert_eq!(encode_base32(31), "Z");
        assert_eq!(encode_base32(32), "10");
        assert_eq!(encode_base64(63), "_");
        assert_eq!(encode_base64(64), "10");
        assert_eq!(decode_base32("10"), 32);
        assert_eq!(decode_base64("10"), 64);
    }

    #[test]
    fn test_round_trip_spot_checks() {
        for n in [0u64, 1, 5, 31, 32, 1_000, 1_000_000, u64::MAX] {
            assert_eq!(decode_base32(&encode_base32(n)), n, "base32 n={}", n);
            assert_eq!(decode_base64(&encode_base64(n)), n, "base64 n={}", n);
        }
    }

    #[test]
    fn test_no_confusable_symbols_in_base32() {
        for banned in ['I', 'L', 'O', 'U'] {
            assert!(!BASE32_ALPHABET.iter().any(|&s| s as char == banned));
        }
    }

    #[test]
    fn test_alphabets_avoid_separators() {
        for sep in ['-', '/'] {
            assert!(!BASE32_ALPHABET.iter().any(|&s| s as char == sep));
            assert!(!BASE64_ALPHABET.iter().any(|&s| s as char == sep));
        }
    }

    #[test]
    fn test_validity_checks() {
        assert!(is_valid_base32("0AZ"));
        assert!(!is_valid_base32(""));
        assert!(!is_valid_base32("ABI")); // I excluded from the alphabet
        assert!(!is_valid_base32("lowercase"));
        assert!(is_valid_base64("aZ9._"));
        assert!(!is_valid_base64("a-b"));
        assert!(!is_valid_base64("000000000000")); // 12 symbols can overflow
    }

    #[test]
    #[should_panic(expected = "unknown symbol")]
    fn test_decode_rejects_foreign_symbol() {
        decode_base32("AB!");
    }

    #[test]
    #[should_panic(expected = "empty hash")]
    fn test_decode_rejects_empty() {
        decode_base64("");
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_decode_rejects_overflow() {
        // 13 max-value base-64 symbols: far past u64.
        decode_base64("_____________");
    }
}
