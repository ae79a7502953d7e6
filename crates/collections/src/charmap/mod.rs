use std::fmt;

use thiserror::Error;

mod table;

pub use table::CharStringMap;

/// Bucket count of every map built with [`CharStringMap::new`]
pub const TABLE_SIZE: usize = 20;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// Every key needs a bucket to hash into
    #[error("Cannot build a hash table without buckets")]
    ZeroBuckets,
}

/// Outcome of [`CharStringMap::insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The key was absent, a new entry was appended to its chain
    Inserted,
    /// The key was present, its value was overwritten in place
    Updated,
}

/// Outcome of [`CharStringMap::remove`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    NotFound,
}

impl fmt::Display for Insertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insertion::Inserted => f.write_str("Insertion successful."),
            Insertion::Updated => f.write_str("Key already exists. Value updated."),
        }
    }
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Removal::Removed => f.write_str("Deletion successful."),
            Removal::NotFound => f.write_str("Item not found. No deletion occurred."),
        }
    }
}

/// Maps a character code onto `[0, buckets)`.
///
/// Uses the euclidean remainder, so codes coming from a signed character type
/// (e.g. `0xC3u8 as i8 == -61`) still land in a valid bucket.
///
/// # Panics
///
/// Panics if `buckets` is zero.
pub fn hash_code(code: i64, buckets: usize) -> usize {
    let modulus = i64::try_from(buckets).unwrap_or(i64::MAX);
    // rem_euclid is never negative and always below `modulus`
    code.rem_euclid(modulus) as usize
}

/// Bucket index of `key` in a table of [`TABLE_SIZE`] buckets,
/// what [`CharStringMap::bucket_index`] returns for a map built with [`CharStringMap::new`].
///
/// The raw code modulo the table size is not uniform over the whole character range,
/// printable ASCII spreads over all 20 buckets though.
pub fn hash(key: char) -> usize {
    hash_in(key, TABLE_SIZE)
}

pub(crate) fn hash_in(key: char, buckets: usize) -> usize {
    hash_code(i64::from(u32::from(key)), buckets)
}
