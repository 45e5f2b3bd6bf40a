//! The host-facing operation surface: `init`, `add`, `check`, `remove`,
//! `dump`, `free`, plus the `save`/`load` persistence pair. This is the
//! only module a host embedding the engine needs to know about; everything
//! else in the crate is an implementation detail reached through here.

use crate::bucket::FpWidth;
use crate::errors::CuckooError;
use crate::filter::FilterCore;
use rand::Rng;

/// The 500-iteration eviction budget from the original cuckoo-filter
/// design. Configurable per filter (see `with_eviction_budget`), but this
/// is the default every `init` gets, matching the compile-time constant a
/// reloaded filter would fall back to (the on-disk format does not store
/// it, §9).
pub const DEFAULT_EVICTION_BUDGET: u32 = 500;

/// A single cuckoo filter: fixed fingerprint width, fixed bucket count,
/// normalized host-facing operations. Owning one of these *is* the "opaque
/// handle" the spec describes — a host's key table (out of scope for this
/// crate) is what would map an external key name to an owned value of
/// this type.
#[derive(Debug, Clone)]
pub struct CuckooFilter {
    core: FilterCore,
    is_multi: bool,
    eviction_budget: u32,
}

impl CuckooFilter {
    /// Allocates and zeroes a new filter. `byte_size` must be a multiple of
    /// `bucket_slots * fp_width` for the given width, and the resulting
    /// `num_buckets` must be a power of two.
    pub fn init(byte_size: u64, fp_width: u8) -> Result<Self, CuckooError> {
        let fp_width = FpWidth::from_u8(fp_width)?;
        let bucket_bytes = fp_width.bucket_bytes() as u64;

        if byte_size == 0 || byte_size % bucket_bytes != 0 {
            return Err(CuckooError::BadSize);
        }
        let num_buckets = byte_size / bucket_bytes;
        if !num_buckets.is_power_of_two() {
            return Err(CuckooError::BadSize);
        }

        Ok(CuckooFilter {
            core: FilterCore::new(fp_width, num_buckets),
            is_multi: false,
            eviction_budget: DEFAULT_EVICTION_BUDGET,
        })
    }

    /// Overrides the eviction budget used by subsequent `add` calls.
    /// Defaults to `DEFAULT_EVICTION_BUDGET` (500).
    pub fn with_eviction_budget(mut self, budget: u32) -> Self {
        self.eviction_budget = budget;
        self
    }

    /// Total fingerprint slots: `num_buckets * bucket_slots`.
    pub fn capacity(&self) -> u64 {
        self.core.num_buckets * self.core.fp_width.bucket_slots() as u64
    }

    pub fn fp_width(&self) -> FpWidth {
        self.core.fp_width
    }

    pub fn num_buckets(&self) -> u64 {
        self.core.num_buckets
    }

    /// Number of occupied slots, scanned from storage (§8: occupancy is a
    /// derived property, not a maintained counter).
    pub fn len(&self) -> usize {
        self.core.occupied_slots()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Occupied slots divided by capacity.
    pub fn density(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Bytes the filter's storage occupies; does not include the struct's
    /// own stack footprint.
    pub fn memory_usage(&self) -> usize {
        self.core.storage.len()
    }

    /// Reduces `raw_hash` into `[0, num_buckets)` and truncates `raw_fp` to
    /// the low `fp_width` bytes, substituting `1` for a truncated-to-zero
    /// fingerprint. `add`, `check`, and `remove` all normalize identically
    /// so that the same raw arguments always refer to the same slot.
    fn normalize(&self, raw_hash: u64, raw_fp: u64) -> (u64, u32) {
        let h = raw_hash & (self.core.num_buckets - 1);
        let width_bits = self.core.fp_width.bytes() * 8;
        let mask: u64 = if width_bits >= 64 { u64::MAX } else { (1u64 << width_bits) - 1 };
        let mut fp = raw_fp & mask;
        if fp == 0 {
            fp = 1;
        }
        (h, fp as u32)
    }

    /// Inserts `(raw_hash, raw_fp)` using the thread-local RNG. See
    /// `add_with_rng` for a deterministic variant.
    pub fn add(&mut self, raw_hash: u64, raw_fp: u64) -> Result<(), CuckooError> {
        self.add_with_rng(raw_hash, raw_fp, &mut rand::thread_rng())
    }

    /// Inserts `(raw_hash, raw_fp)` using the supplied RNG for eviction
    /// kicks, so a host can seed `StdRng` for reproducible tests.
    pub fn add_with_rng(&mut self, raw_hash: u64, raw_fp: u64, rng: &mut impl Rng) -> Result<(), CuckooError> {
        let (h, fp) = self.normalize(raw_hash, raw_fp);
        self.core.insert_raw(h, fp, self.eviction_budget, rng)
    }

    /// Membership query. Never false-negative unless a prior `add` on this
    /// filter returned `E_TOO_FULL`.
    pub fn check(&self, raw_hash: u64, raw_fp: u64) -> bool {
        let (h, fp) = self.normalize(raw_hash, raw_fp);
        self.core.lookup_raw(h, fp)
    }

    /// Removes one matching fingerprint. `Err(CuckooError::NotFound)` is a
    /// diagnosable condition worth the host logging, not necessarily a bug:
    /// it can legitimately mean the item was evicted by an earlier overflow.
    pub fn remove(&mut self, raw_hash: u64, raw_fp: u64) -> Result<(), CuckooError> {
        let (h, fp) = self.normalize(raw_hash, raw_fp);
        if self.core.delete_raw(h, fp) {
            Ok(())
        } else {
            Err(CuckooError::NotFound)
        }
    }

    /// A read-only view of the raw bucket storage — the §4.7 `dump`
    /// operation, distinct from the `save`/`load` persistence pair below.
    pub fn dump(&self) -> &[u8] {
        &self.core.storage
    }

    /// Consumes the filter. Equivalent to dropping it; exists so a host
    /// that wants to mirror its own `free(handle)` contract explicitly can
    /// do so without relying on scope exit.
    pub fn free(self) {
        drop(self)
    }

    pub(crate) fn is_multi(&self) -> bool {
        self.is_multi
    }

    pub(crate) fn storage(&self) -> &[u8] {
        &self.core.storage
    }

    pub(crate) fn from_parts(fp_width: FpWidth, num_buckets: u64, storage: Vec<u8>, is_multi: bool) -> Self {
        CuckooFilter {
            core: FilterCore {
                fp_width,
                num_buckets,
                storage,
            },
            is_multi,
            eviction_budget: DEFAULT_EVICTION_BUDGET,
        }
    }
}
