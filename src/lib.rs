//! A width-parameterized cuckoo filter engine, built to sit behind a
//! key-value host's own command dispatch and key table.
//!
//! The engine stores no keys of its own: a host maps its own key names to
//! owned [`CuckooFilter`] values, and feeds every operation a pre-hashed
//! bucket index together with a fingerprint it has already derived from the
//! item being added, checked, or removed. What lives here is the part that
//! doesn't vary with the host's hashing scheme: bucket layout, the bounded
//! eviction loop, the alternative-bucket hash, and a self-describing binary
//! persistence format.
//!
//! ```rust
//! use cuckoofilter_engine::CuckooFilter;
//!
//! let mut cf = CuckooFilter::init(64, 1).unwrap();
//! cf.add(0, 7).unwrap();
//! assert!(cf.check(0, 7));
//! cf.remove(0, 7).unwrap();
//! assert!(!cf.check(0, 7));
//! ```
//!
//! Three fingerprint widths are supported — 1, 2, and 4 bytes — chosen at
//! `init` time per filter rather than at compile time, so a host can pick
//! the width/false-positive-rate tradeoff per key.

mod bits;
mod bucket;
mod capacity;
mod errors;
mod facade;
mod filter;
mod hash;
mod serialize;

pub use bucket::FpWidth;
pub use capacity::{byte_size_for, tokens as capacity_tokens};
pub use errors::CuckooError;
pub use facade::{CuckooFilter, DEFAULT_EVICTION_BUDGET};
pub use serialize::ENCODING_VERSION;
