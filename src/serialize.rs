//! Little-endian, self-describing persistence: `save`/`load` a filter as a
//! length-prefixed byte blob. Distinct from the façade's `dump()`, which
//! returns a raw view of `storage` with no header at all (§4.7 vs §6).

use crate::bucket::FpWidth;
use crate::errors::CuckooError;
use crate::facade::CuckooFilter;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Cursor, Read};

/// Bumped only if the on-wire field layout changes.
pub const ENCODING_VERSION: u64 = 2;

impl CuckooFilter {
    /// Serializes the filter as: version (u64 LE) · is_multi (u64 LE) ·
    /// fp_width (u64 LE) · storage length (u64 LE) · storage bytes.
    pub fn save(&self) -> Vec<u8> {
        let storage = self.storage();
        let mut buf = Vec::with_capacity(32 + storage.len());
        buf.write_u64::<LittleEndian>(ENCODING_VERSION).unwrap();
        buf.write_u64::<LittleEndian>(self.is_multi() as u64).unwrap();
        buf.write_u64::<LittleEndian>(self.fp_width().bytes() as u64).unwrap();
        buf.write_u64::<LittleEndian>(storage.len() as u64).unwrap();
        buf.extend_from_slice(storage);
        buf
    }

    /// Reconstructs a filter from a `save()` blob. Rejects any encoding
    /// version other than `ENCODING_VERSION`.
    pub fn load(data: &[u8]) -> Result<Self, CuckooError> {
        let mut cursor = Cursor::new(data);

        let version = read_u64(&mut cursor)?;
        if version != ENCODING_VERSION {
            return Err(CuckooError::BadEncoding);
        }

        let is_multi = read_u64(&mut cursor)? != 0;
        if is_multi {
            // Reserved for a multiset variant this engine doesn't implement;
            // its bucket geometry wouldn't match the non-multi table below.
            return Err(CuckooError::BadEncoding);
        }
        let fp_width = FpWidth::from_u64(read_u64(&mut cursor)?)?;
        let len = read_u64(&mut cursor)? as usize;

        let mut storage = vec![0u8; len];
        cursor.read_exact(&mut storage).map_err(|_| CuckooError::BadEncoding)?;

        let bucket_bytes = fp_width.bucket_bytes();
        if bucket_bytes == 0 || len % bucket_bytes != 0 {
            return Err(CuckooError::BadEncoding);
        }
        let num_buckets = (len / bucket_bytes) as u64;

        Ok(CuckooFilter::from_parts(fp_width, num_buckets, storage, is_multi))
    }
}

fn read_u64(cursor: &mut Cursor<&[u8]>) -> Result<u64, CuckooError> {
    cursor.read_u64::<LittleEndian>().map_err(map_eof)
}

fn map_eof(_: io::Error) -> CuckooError {
    CuckooError::BadEncoding
}
