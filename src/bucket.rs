//! Bucket geometry: the per-width table that derives `bucket_slots` from
//! `fp_width`, and the byte-range arithmetic used to address a slot or a
//! whole bucket inside the filter's flat `storage` buffer.

use crate::errors::CuckooError;
use std::ops::Range;

/// Fingerprint width, in bytes. The only three shapes this engine knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FpWidth {
    One = 1,
    Two = 2,
    Four = 4,
}

impl FpWidth {
    pub fn from_u8(value: u8) -> Result<Self, CuckooError> {
        match value {
            1 => Ok(FpWidth::One),
            2 => Ok(FpWidth::Two),
            4 => Ok(FpWidth::Four),
            _ => Err(CuckooError::BadFpWidth),
        }
    }

    pub fn from_u64(value: u64) -> Result<Self, CuckooError> {
        u8::try_from(value)
            .map_err(|_| CuckooError::BadFpWidth)
            .and_then(Self::from_u8)
    }

    /// Fingerprint width in bytes.
    #[inline]
    pub fn bytes(self) -> usize {
        self as usize
    }

    /// Number of fingerprint slots per bucket: { 1 -> 4, 2 -> 4, 4 -> 2 }.
    #[inline]
    pub fn bucket_slots(self) -> usize {
        match self {
            FpWidth::One | FpWidth::Two => 4,
            FpWidth::Four => 2,
        }
    }

    /// Bucket size in bytes: `bucket_slots * fp_width`.
    #[inline]
    pub fn bucket_bytes(self) -> usize {
        self.bucket_slots() * self.bytes()
    }
}

/// Byte range of bucket `bucket` within `storage`.
#[inline]
pub(crate) fn bucket_range(fp_width: FpWidth, bucket: u64) -> Range<usize> {
    let bucket_bytes = fp_width.bucket_bytes();
    let start = bucket as usize * bucket_bytes;
    start..(start + bucket_bytes)
}

/// Byte range of slot `slot` inside bucket `bucket`.
#[inline]
pub(crate) fn slot_range(fp_width: FpWidth, bucket: u64, slot: usize) -> Range<usize> {
    let bucket_bytes = fp_width.bucket_bytes();
    let fp_bytes = fp_width.bytes();
    let start = bucket as usize * bucket_bytes + slot * fp_bytes;
    start..(start + fp_bytes)
}

/// Reads the fingerprint stored in `slot` of `bucket`, zero-extended into a `u32`.
#[inline]
pub(crate) fn read_slot(storage: &[u8], fp_width: FpWidth, bucket: u64, slot: usize) -> u32 {
    let range = slot_range(fp_width, bucket, slot);
    let mut buf = [0u8; 4];
    buf[..range.len()].copy_from_slice(&storage[range]);
    u32::from_ne_bytes(buf)
}

/// Writes `value`'s low `fp_width` bytes into `slot` of `bucket`.
#[inline]
pub(crate) fn write_slot(storage: &mut [u8], fp_width: FpWidth, bucket: u64, slot: usize, value: u32) {
    let range = slot_range(fp_width, bucket, slot);
    let bytes = value.to_ne_bytes();
    storage[range.clone()].copy_from_slice(&bytes[..range.len()]);
}

/// Reads bucket `bucket` as the 32-bit word width-1 predicates operate on.
#[inline]
pub(crate) fn bucket_word_w1(storage: &[u8], bucket: u64) -> u32 {
    let range = bucket_range(FpWidth::One, bucket);
    u32::from_ne_bytes(storage[range].try_into().unwrap())
}

/// Reads bucket `bucket` as the 64-bit word width-2 predicates operate on.
#[inline]
pub(crate) fn bucket_word_w2(storage: &[u8], bucket: u64) -> u64 {
    let range = bucket_range(FpWidth::Two, bucket);
    u64::from_ne_bytes(storage[range].try_into().unwrap())
}

/// Reads bucket `bucket` as the 64-bit word width-4 predicates operate on.
#[inline]
pub(crate) fn bucket_word_w4(storage: &[u8], bucket: u64) -> u64 {
    let range = bucket_range(FpWidth::Four, bucket);
    u64::from_ne_bytes(storage[range].try_into().unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits;

    #[test]
    fn geometry_table_matches_spec() {
        assert_eq!(FpWidth::One.bucket_slots(), 4);
        assert_eq!(FpWidth::Two.bucket_slots(), 4);
        assert_eq!(FpWidth::Four.bucket_slots(), 2);
        assert_eq!(FpWidth::One.bucket_bytes(), 4);
        assert_eq!(FpWidth::Two.bucket_bytes(), 8);
        assert_eq!(FpWidth::Four.bucket_bytes(), 8);
    }

    #[test]
    fn from_u8_rejects_unsupported_widths() {
        assert!(FpWidth::from_u8(3).is_err());
        assert!(FpWidth::from_u8(0).is_err());
        assert!(FpWidth::from_u8(8).is_err());
    }

    #[test]
    fn slot_roundtrip_width2() {
        let mut storage = vec![0u8; FpWidth::Two.bucket_bytes() * 2];
        write_slot(&mut storage, FpWidth::Two, 1, 2, 0xBEEF);
        assert_eq!(read_slot(&storage, FpWidth::Two, 1, 2), 0xBEEF);
        assert_eq!(read_slot(&storage, FpWidth::Two, 1, 0), 0);
        assert_eq!(read_slot(&storage, FpWidth::Two, 0, 2), 0);
    }

    #[test]
    fn bucket_word_reflects_written_slots() {
        let mut storage = vec![0u8; FpWidth::One.bucket_bytes()];
        assert!(bits::has_zero_w1(bucket_word_w1(&storage, 0)));
        write_slot(&mut storage, FpWidth::One, 0, 0, 1);
        write_slot(&mut storage, FpWidth::One, 0, 1, 2);
        write_slot(&mut storage, FpWidth::One, 0, 2, 3);
        write_slot(&mut storage, FpWidth::One, 0, 3, 4);
        assert!(!bits::has_zero_w1(bucket_word_w1(&storage, 0)));
    }
}
