//! Host convenience: a table mapping the familiar `"64K"`-style capacity
//! tokens from the original Redis command surface to byte counts accepted
//! by `CuckooFilter::init`. Nothing in the core engine depends on this
//! module; a host is free to pass any aligned `byte_size` directly.

use crate::errors::CuckooError;

const TOKENS: &[(&str, u64)] = &[
    ("1K", 1 << 10),
    ("2K", 1 << 11),
    ("4K", 1 << 12),
    ("8K", 1 << 13),
    ("16K", 1 << 14),
    ("32K", 1 << 15),
    ("64K", 1 << 16),
    ("128K", 1 << 17),
    ("256K", 1 << 18),
    ("512K", 1 << 19),
    ("1M", 1 << 20),
    ("2M", 1 << 21),
    ("4M", 1 << 22),
    ("8M", 1 << 23),
    ("16M", 1 << 24),
    ("32M", 1 << 25),
    ("64M", 1 << 26),
    ("128M", 1 << 27),
    ("256M", 1 << 28),
    ("512M", 1 << 29),
    ("1G", 1 << 30),
    ("2G", 1 << 31),
    ("4G", 1 << 32),
    ("8G", 1 << 33),
];

/// Looks up a capacity token (e.g. `"64K"`) and returns its byte count.
/// Matching is case-insensitive; `CuckooError::BadSize` covers any token
/// not in the table, since an unrecognized size request is the same class
/// of host error as an unaligned `byte_size` passed directly to `init`.
pub fn byte_size_for(token: &str) -> Result<u64, CuckooError> {
    TOKENS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|(_, size)| *size)
        .ok_or(CuckooError::BadSize)
}

/// All recognized tokens, smallest first, for a host that wants to present
/// the menu (e.g. in a help string) rather than hardcode it.
pub fn tokens() -> impl Iterator<Item = &'static str> {
    TOKENS.iter().map(|(name, _)| *name)
}
