//! An ordered map and set keyed by strings, based on a ternary search tree.
//!
//! Each node of the tree holds a single character and three children: the subtree of keys whose
//! character at this position is smaller, the subtree of keys that continue past this character,
//! and the subtree of keys whose character at this position is larger. Besides the usual map
//! operations this supports iteration over the keys sharing a prefix, fixed-length wildcard
//! matching and longest-prefix queries.
//!
//! ```
//! let mut map = tst::Map::new();
//!
//! map.insert("cat", 1);
//! map.insert("car", 2);
//! map.insert("dog", 3);
//!
//! assert_eq!(map.get("car"), Some(&2));
//! assert_eq!(map.prefix_iter("ca").collect::<Vec<_>>(),
//!            [("car".to_string(), &2), ("cat".to_string(), &1)]);
//! assert_eq!(map.longest_prefix("caterpillar"), "cat");
//! assert_eq!(map.wildcard_iter("d.g").count(), 1);
//! ```

#![warn(missing_docs)]

pub use map::Map;
pub use set::Set;

use std::fmt;

mod node;
#[cfg(feature = "ordered_iter")]
mod ordered_iter;
#[cfg(feature = "quickcheck")]
mod quickcheck;

pub mod map;
pub mod set;

/// Errors returned by the non-panicking variants of the insertion methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// The key is the empty string, which cannot be stored in the tree.
    EmptyKey,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::EmptyKey => write!(f, "empty key"),
        }
    }
}

impl std::error::Error for Error {}

/// Creates a `Map` containing the given entries.
///
/// # Examples
///
/// ```
/// #[macro_use] extern crate tst;
///
/// # fn main() {
/// let map = tstmap!{
///     "b" => 2,
///     "a" => -1,
///     "c" => 3,
/// };
///
/// assert_eq!(map.len(), 3);
/// assert_eq!(map["a"], -1);
/// assert_eq!(map["b"], 2);
/// assert_eq!(map["c"], 3);
/// # }
/// ```
#[macro_export]
macro_rules! tstmap {
    () => { $crate::Map::new() };
    ($($key:expr => $value:expr,)+) => { tstmap!($($key => $value),+) };
    ($($key:expr => $value:expr),*) => {{
        let mut map = $crate::Map::new();
        $( map.insert($key, $value); )*
        map
    }};
}

/// Creates a `Set` containing the given keys.
///
/// # Examples
///
/// ```
/// #[macro_use] extern crate tst;
///
/// # fn main() {
/// let set = tstset!{"b", "a", "c", "a"};
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
/// # }
/// ```
#[macro_export]
macro_rules! tstset {
    () => { $crate::Set::new() };
    ($($key:expr,)+) => { tstset!($($key),+) };
    ($($key:expr),*) => {{
        let mut set = $crate::Set::new();
        $( set.insert($key); )*
        set
    }};
}
