//! Filter operations: insert, lookup, delete over a single filter's raw
//! buckets, including the bounded random-kick eviction loop. Every method
//! here takes an already-normalized bucket index (reduced mod
//! `num_buckets`) and an already-nonzero fingerprint; normalization is the
//! façade's job (`crate::facade`).

use crate::bits;
use crate::bucket::{self, FpWidth};
use crate::errors::CuckooError;
use rand::Rng;

/// The raw bucket-array engine. Not part of the public API on its own —
/// wrapped by `crate::facade::CuckooFilter`, which is what a host embeds.
#[derive(Debug, Clone)]
pub(crate) struct FilterCore {
    pub(crate) fp_width: FpWidth,
    pub(crate) num_buckets: u64,
    pub(crate) storage: Vec<u8>,
}

impl FilterCore {
    pub(crate) fn new(fp_width: FpWidth, num_buckets: u64) -> Self {
        let storage = vec![0u8; num_buckets as usize * fp_width.bucket_bytes()];
        FilterCore {
            fp_width,
            num_buckets,
            storage,
        }
    }

    #[inline]
    fn has_zero(&self, bucket: u64) -> bool {
        match self.fp_width {
            FpWidth::One => bits::has_zero_w1(bucket::bucket_word_w1(&self.storage, bucket)),
            FpWidth::Two => bits::has_zero_w2(bucket::bucket_word_w2(&self.storage, bucket)),
            FpWidth::Four => bits::has_zero_w4(bucket::bucket_word_w4(&self.storage, bucket)),
        }
    }

    #[inline]
    fn has_value(&self, bucket: u64, fp: u32) -> bool {
        match self.fp_width {
            FpWidth::One => bits::has_value_w1(bucket::bucket_word_w1(&self.storage, bucket), fp as u8),
            FpWidth::Two => bits::has_value_w2(bucket::bucket_word_w2(&self.storage, bucket), fp as u16),
            FpWidth::Four => bits::has_value_w4(bucket::bucket_word_w4(&self.storage, bucket), fp),
        }
    }

    /// Tries to place `fp` into the first empty slot of `bucket`. The
    /// `has_zero` word check is the fast-path shortcut (§4.1); the scan
    /// that follows is what actually finds the slot index.
    fn try_place(&mut self, bucket: u64, fp: u32) -> bool {
        if !self.has_zero(bucket) {
            return false;
        }
        for slot in 0..self.fp_width.bucket_slots() {
            if bucket::read_slot(&self.storage, self.fp_width, bucket, slot) == 0 {
                bucket::write_slot(&mut self.storage, self.fp_width, bucket, slot, fp);
                return true;
            }
        }
        // has_zero said a lane was empty; unreachable unless the word
        // computed from storage disagrees with the byte-by-byte scan.
        unreachable!("has_zero predicate found no matching empty slot")
    }

    /// Swaps `fp` into `slot` of `bucket`, returning what used to be there.
    /// The new value is written *before* the caller gets to inspect what it
    /// displaced — this ordering is deliberate, see `insert_raw`.
    fn swap_slot(&mut self, bucket: u64, slot: usize, fp: u32) -> u32 {
        let displaced = bucket::read_slot(&self.storage, self.fp_width, bucket, slot);
        bucket::write_slot(&mut self.storage, self.fp_width, bucket, slot, fp);
        displaced
    }

    fn clear_first_match(&mut self, bucket: u64, fp: u32) -> bool {
        for slot in 0..self.fp_width.bucket_slots() {
            if bucket::read_slot(&self.storage, self.fp_width, bucket, slot) == fp {
                bucket::write_slot(&mut self.storage, self.fp_width, bucket, slot, 0);
                return true;
            }
        }
        false
    }

    #[inline]
    pub(crate) fn alt_bucket(&self, bucket: u64, fp: u32) -> u64 {
        crate::hash::alt_bucket(bucket, fp, self.fp_width, self.num_buckets)
    }

    /// Insert, with the bounded random-kick eviction loop described in
    /// §4.4. `fp` must be nonzero; the façade guarantees this via its
    /// zero-substitution rule before ever calling here.
    pub(crate) fn insert_raw(
        &mut self,
        h: u64,
        fp: u32,
        eviction_budget: u32,
        rng: &mut impl Rng,
    ) -> Result<(), CuckooError> {
        debug_assert_ne!(fp, 0, "normalized fingerprint must never be zero");

        if self.try_place(h, fp) {
            return Ok(());
        }
        let h2 = self.alt_bucket(h, fp);
        if self.try_place(h2, fp) {
            return Ok(());
        }

        let slots = self.fp_width.bucket_slots() as u64;
        let mut bucket = h2;
        let mut carried = fp;
        for _ in 0..eviction_budget {
            let slot = rng.gen_range(0..slots) as usize;
            // The carried fingerprint is written before we know whether the
            // slot it displaced was empty. On the iteration that happens to
            // land on an empty slot, the insert has therefore already taken
            // place by the time we notice success.
            let displaced = self.swap_slot(bucket, slot, carried);
            if displaced == 0 {
                return Ok(());
            }
            carried = displaced;
            bucket = self.alt_bucket(bucket, carried);
        }

        // The loop already wrote `carried` into some slot on its last
        // iteration; that slot's previous occupant is gone. This is the
        // accepted cuckoo-filter failure mode — no rollback is attempted.
        Err(CuckooError::TooFull)
    }

    pub(crate) fn lookup_raw(&self, h: u64, fp: u32) -> bool {
        if self.has_value(h, fp) {
            return true;
        }
        let h2 = self.alt_bucket(h, fp);
        self.has_value(h2, fp)
    }

    pub(crate) fn delete_raw(&mut self, h: u64, fp: u32) -> bool {
        if self.clear_first_match(h, fp) {
            return true;
        }
        let h2 = self.alt_bucket(h, fp);
        self.clear_first_match(h2, fp)
    }

    /// Number of slots whose bytes are not all zero. Derived rather than
    /// tracked incrementally: eviction relocates fingerprints without
    /// changing total occupancy, so a running counter would need as much
    /// special-casing around `E_TOO_FULL` as just scanning does, for no
    /// benefit on a buffer this small.
    pub(crate) fn occupied_slots(&self) -> usize {
        self.storage
            .chunks(self.fp_width.bytes())
            .filter(|slot| slot.iter().any(|&b| b != 0))
            .count()
    }
}
