//! `rb-step-map` is a total map from an ordered key domain to values, based on red-black tree.
//!
//! An `IntervalMap<K, V>` maps *every* key of `K` to a value. It only stores the keys where
//! the mapped value changes, so the map `'A'` everywhere except `'B'` on `[3, 5)` is kept as
//! the three entries `(i32::MIN, 'A')`, `(3, 'B')`, `(5, 'A')`. The representation is always
//! canonical: the first entry sits at the lowest key of the domain and no two neighboring
//! entries hold equal values, whatever sequence of assignments produced the map.
//!
//! Like `interval_map`, the entries are kept in a red-black tree whose parent-child
//! references are indices into an array of nodes instead of pointers. Lookups cost
//! O(logN), and an assignment costs O(logN) per boundary it touches. The map is `Send` and
//! `Unpin`, and cloning it is a plain deep copy.
//!
//! # Example
//!
//! ```rust
//! use rb_step_map::IntervalMap;
//!
//! let mut map = IntervalMap::<i32, char>::new('A');
//! map.assign(3, 5, 'B');
//! assert_eq!(map[&2], 'A');
//! assert_eq!(map[&3], 'B');
//! assert_eq!(map[&5], 'A');
//!
//! // Empty and inverted ranges are ignored
//! map.assign(50, 0, 'C');
//! assert_eq!(map.len(), 3);
//!
//! // The range excludes its end, so the highest key keeps its value
//! map.assign(i32::MIN, i32::MAX, 'C');
//! assert_eq!(map[&i32::MIN], 'C');
//! assert_eq!(map[&i32::MAX], 'A');
//! ```
//!

mod bound;
mod index;
mod intervalmap;
mod iter;
mod node;


pub use bound::Bounded;
pub use index::{DefaultIx, IndexType};
pub use intervalmap::IntervalMap;
pub use iter::{IntoIter, Iter};
