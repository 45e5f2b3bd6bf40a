//! The closed error taxonomy the engine surfaces to its host. Every
//! fallible engine-level operation returns `Result<_, CuckooError>`; there
//! is no other error type in the public API.

use thiserror::Error;

/// A textually distinct, exhaustive error code. See the persistence and
/// error-handling sections of the spec this crate implements for the
/// recovery policy attached to each variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CuckooError {
    /// The handle a host looked up does not refer to a cuckoo filter.
    /// The engine itself never raises this (it has no key table of its
    /// own, §1); it is part of the shared taxonomy a host dispatches
    /// against.
    #[error("WRONGTYPE handle does not refer to a cuckoo filter")]
    WrongType,

    /// `byte_size` is not a multiple of `bucket_slots * fp_width`.
    #[error("ERR byte_size is not expressible for the given fingerprint width")]
    BadSize,

    /// `fp_width` was not one of {1, 2, 4}.
    #[error("ERR unsupported fingerprint width")]
    BadFpWidth,

    /// `init` was called on a key that already holds a filter.
    #[error("ERR key already exists")]
    Exists,

    /// Insert exhausted its eviction budget; state has already mutated.
    #[error("ERR too full")]
    TooFull,

    /// Delete found no matching fingerprint in either candidate bucket.
    #[error("ERR tried to delete non-existing item, the filter might be degraded")]
    NotFound,

    /// `load` saw a persistence format version this engine doesn't understand.
    #[error("ERR unsupported cuckoo filter encoding version")]
    BadEncoding,
}
