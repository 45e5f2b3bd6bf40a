//! The alternative-bucket hash: FNV-1a over the fingerprint's bytes,
//! XORed into the starting bucket index and masked to the table size.
//!
//! `fnv::FnvHasher` implements exactly the FNV-1a byte fold the spec calls
//! for (64-bit offset basis `14695981039346656037`, prime `1099511628211`,
//! one `(hash ^ byte) * prime` step per byte), so the fold itself is just
//! that hasher fed the fingerprint's little-endian (least-significant-byte-
//! first) bytes.

use crate::bucket::FpWidth;
use fnv::FnvHasher;
use std::hash::Hasher;

/// Folds the low `fp_width` bytes of `fp` through FNV-1a, LSB-first.
#[inline]
pub(crate) fn fold_fingerprint(fp: u32, fp_width: FpWidth) -> u64 {
    let mut hasher = FnvHasher::default();
    let bytes = fp.to_le_bytes();
    hasher.write(&bytes[..fp_width.bytes()]);
    hasher.finish()
}

/// `alt(bucket, fp) = (bucket XOR fnv1a(fp)) AND (num_buckets - 1)`.
///
/// `num_buckets` must be a power of two (an `init`-time invariant the
/// engine assumes rather than re-validates on every call); the AND form is
/// only equivalent to `% num_buckets` under that assumption.
#[inline]
pub(crate) fn alt_bucket(bucket: u64, fp: u32, fp_width: FpWidth, num_buckets: u64) -> u64 {
    (bucket ^ fold_fingerprint(fp, fp_width)) & (num_buckets - 1)
}
