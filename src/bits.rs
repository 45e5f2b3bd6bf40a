//! Word-parallel SWAR predicates used on the hot path of insert and lookup.
//!
//! Each fingerprint width gets its own pair of functions (`has_zero_wN` /
//! `has_value_wN`) operating on the narrowest machine word that holds exactly
//! `bucket_slots` fingerprints for that width: a 32-bit word for width 1, and
//! 64-bit words for widths 2 and 4. These are fast-path shortcuts only — a
//! `true` result still requires a linear scan of the bucket to find *which*
//! slot matched.

/// `has_zero` for 1-byte fingerprints packed 4-to-a-word (32 bits).
#[inline]
pub(crate) fn has_zero_w1(word: u32) -> bool {
    const ONES: u32 = 0x0101_0101;
    const HIGH: u32 = 0x8080_8080;
    word.wrapping_sub(ONES) & !word & HIGH != 0
}

/// `has_value` for 1-byte fingerprints.
#[inline]
pub(crate) fn has_value_w1(word: u32, n: u8) -> bool {
    let broadcast = u32::from_ne_bytes([n, n, n, n]);
    has_zero_w1(word ^ broadcast)
}

/// `has_zero` for 2-byte fingerprints packed 4-to-a-word (64 bits).
#[inline]
pub(crate) fn has_zero_w2(word: u64) -> bool {
    const ONES: u64 = 0x0100_0100_0100_0100;
    const HIGH: u64 = 0x8000_8000_8000_8000;
    word.wrapping_sub(ONES) & !word & HIGH != 0
}

/// `has_value` for 2-byte fingerprints.
#[inline]
pub(crate) fn has_value_w2(word: u64, n: u16) -> bool {
    let lane = n.to_ne_bytes();
    let broadcast = u64::from_ne_bytes([lane[0], lane[1], lane[0], lane[1], lane[0], lane[1], lane[0], lane[1]]);
    has_zero_w2(word ^ broadcast)
}

/// `has_zero` for 4-byte fingerprints packed 2-to-a-word (64 bits).
#[inline]
pub(crate) fn has_zero_w4(word: u64) -> bool {
    const ONES: u64 = 0x0100_0000_0100_0000;
    const HIGH: u64 = 0x8000_0000_8000_0000;
    word.wrapping_sub(ONES) & !word & HIGH != 0
}

/// `has_value` for 4-byte fingerprints.
#[inline]
pub(crate) fn has_value_w4(word: u64, n: u32) -> bool {
    let lane = n.to_ne_bytes();
    let broadcast = u64::from_ne_bytes([lane[0], lane[1], lane[2], lane[3], lane[0], lane[1], lane[2], lane[3]]);
    has_zero_w4(word ^ broadcast)
}
