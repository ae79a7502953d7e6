use log::trace;

use super::{Insertion, Removal, TABLE_SIZE, TableError, hash_in};
use crate::chain::Chain;

/// Separate-chaining hash table from `char` to `String`.
///
/// The bucket count is chosen at construction and never changes,
/// long chains are the price for colliding keys.
#[derive(Debug)]
pub struct CharStringMap {
    buckets: Vec<Chain>,
    items: usize,
}

impl Default for CharStringMap {
    fn default() -> Self {
        Self::new()
    }
}

impl CharStringMap {
    /// Creates an empty map with [`TABLE_SIZE`] buckets
    pub fn new() -> Self {
        Self::new_with_buckets(TABLE_SIZE)
    }

    /// Creates an empty map with `count` many buckets
    pub fn with_buckets(count: usize) -> Result<Self, TableError> {
        if count == 0 {
            return Err(TableError::ZeroBuckets);
        }
        Ok(Self::new_with_buckets(count))
    }

    fn new_with_buckets(count: usize) -> Self {
        Self {
            buckets: (0..count).map(|_| Chain::new()).collect(),
            items: 0,
        }
    }

    /// Returns the number of entries in the map
    pub fn len(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Returns the number of buckets, or "slots" of the map
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the chain in bucket `index`, `None` past the last bucket
    pub fn chain_len(&self, index: usize) -> Option<usize> {
        self.buckets.get(index).map(Chain::len)
    }

    /// Index of the bucket `key` hashes into
    pub fn bucket_index(&self, key: char) -> usize {
        hash_in(key, self.bucket_count())
    }

    /// Inserts `value` under `key`, overwriting the value of an existing entry.
    /// New keys are appended at the tail of their bucket's chain.
    pub fn insert<S: Into<String>>(&mut self, key: char, value: S) -> Insertion {
        let i = self.bucket_index(key);
        let bucket = &mut self.buckets[i];

        match bucket.find_mut(key) {
            Some(node) => {
                node.set_value(value);
                trace!(target: "insert", "updated {key:?} in bucket {i}");
                Insertion::Updated
            }
            None => {
                bucket.push_back(key, value);
                self.items += 1;
                trace!(target: "insert", "appended {key:?} to bucket {i}, chain length {}", bucket.len());
                Insertion::Inserted
            }
        }
    }

    /// Returns a copy of the value stored under `key`
    pub fn get(&self, key: char) -> Option<String> {
        let i = self.bucket_index(key);
        let found = self.buckets[i].find(key).map(|node| node.value().to_owned());
        trace!(target: "get", "{key:?} in bucket {i}: {}", if found.is_some() { "hit" } else { "miss" });
        found
    }

    pub fn contains_key(&self, key: char) -> bool {
        let i = self.bucket_index(key);
        self.buckets[i].find(key).is_some()
    }

    /// Unlinks and drops the entry stored under `key`
    pub fn remove(&mut self, key: char) -> Removal {
        let i = self.bucket_index(key);
        match self.buckets[i].remove(key) {
            Some(_) => {
                self.items -= 1;
                trace!(target: "remove", "removed {key:?} from bucket {i}");
                Removal::Removed
            }
            None => {
                trace!(target: "remove", "{key:?} not in bucket {i}");
                Removal::NotFound
            }
        }
    }

    // [adapters]

    /// Visits every entry, bucket by bucket, each chain front to back
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.buckets
            .iter()
            .flat_map(Chain::iter)
            .map(|node| (node.key(), node.value()))
    }
}
