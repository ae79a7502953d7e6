//! Fixed-size separate-chaining hash table mapping single characters to strings.
//!
//! ```
//! use collections::{CharStringMap, Insertion, Removal};
//!
//! let mut map = CharStringMap::new();
//! assert_eq!(map.insert('R', "Rom"), Insertion::Inserted);
//! assert_eq!(map.insert('R', "Rammy overwrote Rom"), Insertion::Updated);
//! assert_eq!(map.get('R').as_deref(), Some("Rammy overwrote Rom"));
//! assert_eq!(map.remove('Z'), Removal::NotFound);
//! ```

mod macros;

pub mod chain;
pub mod charmap;

pub use chain::{Chain, Node};
pub use charmap::{CharStringMap, Insertion, Removal, TABLE_SIZE, TableError, hash, hash_code};
