//! An ordered map keyed by strings, based on a ternary search tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::cmp::Ordering::*;
use std::default::Default;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter::{self, IntoIterator};
use std::ops;
use super::Error;
use super::node::{self, Node};

pub use super::node::{OccupiedEntry, VacantEntry};

/// The pattern character that matches any single character in
/// [`Map::wildcard_iter`](struct.Map.html#method.wildcard_iter).
pub const WILDCARD: char = '.';

/// An ordered map keyed by strings, based on a ternary search tree.
///
/// The empty string cannot be used as a key.
///
/// Keys are ordered character by character according to the map's comparator, which for
/// `Natural<char>` is the usual lexicographic order of strings.
///
/// Equality and ordering between maps compare keys with the comparator, while `Hash` hashes the
/// stored key text. The two agree only for comparators that never report distinct characters as
/// equal, such as `Natural<char>` and its reverse.
pub struct Map<V, C = Natural<char>> where C: Compare<char> {
    root: node::Link<V>,
    len: usize,
    cmp: C,
}

impl<V> Map<V> {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// map.insert("c", 3);
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some(("a".to_string(), &1)));
    /// assert_eq!(it.next(), Some(("b".to_string(), &2)));
    /// assert_eq!(it.next(), Some(("c".to_string(), &3)));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Map::with_cmp(::compare::natural()) }
}

impl<V, C> Map<V, C> where C: Compare<char> {
    /// Creates an empty map whose keys are ordered character by character according to the given
    /// comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// # extern crate compare;
    /// # extern crate tst;
    /// # fn main() {
    /// use compare::{Compare, natural};
    ///
    /// let mut map = tst::Map::with_cmp(natural().rev());
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// map.insert("ab", 3);
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some(("b".to_string(), &2)));
    /// assert_eq!(it.next(), Some(("a".to_string(), &1)));
    /// assert_eq!(it.next(), Some(("ab".to_string(), &3)));
    /// assert_eq!(it.next(), None);
    /// # }
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Map { root: None, len: 0, cmp: cmp }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert("b", 2);
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert("b", 2);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// # extern crate compare;
    /// # extern crate tst;
    /// # fn main() {
    /// use compare::{Compare, natural};
    ///
    /// let map: tst::Map<i32> = tst::Map::new();
    /// assert!(map.cmp().compares_lt(&'a', &'b'));
    ///
    /// let map: tst::Map<i32, _> = tst::Map::with_cmp(natural().rev());
    /// assert!(map.cmp().compares_gt(&'a', &'b'));
    /// # }
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    ///
    /// assert_eq!(map.len(), 2);
    ///
    /// map.clear();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        node::clear(&mut self.root);
        self.len = 0;
    }

    /// Inserts an entry into the map, returning the previous value, if any, associated with the
    /// key.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty. See [`try_insert`](#method.try_insert) for a non-panicking
    /// variant.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    /// assert_eq!(map.insert("a", 1), None);
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.insert("a", 2), Some(1));
    /// assert_eq!(map.get("a"), Some(&2));
    /// ```
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        match self.try_insert(key, value) {
            Ok(old_value) => old_value,
            Err(_) => panic!("empty key"),
        }
    }

    /// Inserts an entry into the map, returning the previous value, if any, associated with the
    /// key, or an error if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    /// assert_eq!(map.try_insert("a", 1), Ok(None));
    /// assert_eq!(map.try_insert("a", 2), Ok(Some(1)));
    /// assert_eq!(map.try_insert("", 3), Err(tst::Error::EmptyKey));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn try_insert(&mut self, key: &str, value: V) -> Result<Option<V>, Error> {
        Ok(match self.try_entry(key)? {
            Entry::Occupied(mut e) => Some(e.insert(value)),
            Entry::Vacant(e) => { e.insert(value); None }
        })
    }

    /// Removes the entry with the given key and returns its value, returning `None` if the map
    /// does not contain the key.
    ///
    /// The nodes no other key passes through are removed with it.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    ///
    /// assert_eq!(map.remove("a"), Some(1));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get("a"), None);
    /// assert_eq!(map.remove("a"), None);
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let value = node::descend(&mut self.root, &self.cmp, key).and_then(node::Descent::remove);
        if value.is_some() { self.len -= 1; }
        value
    }

    /// Returns the map's entry corresponding to the given key.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty. See [`try_entry`](#method.try_entry) for a non-panicking
    /// variant.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut counts = tst::Map::new();
    ///
    /// for s in "the quick brown fox jumps over the lazy dog".split(' ') {
    ///     *counts.entry(s).or_insert(0) += 1;
    /// }
    ///
    /// assert_eq!(counts["the"], 2);
    /// assert_eq!(counts["fox"], 1);
    /// assert_eq!(counts.get("cat"), None);
    /// ```
    pub fn entry(&mut self, key: &str) -> Entry<'_, V> {
        match self.try_entry(key) {
            Ok(e) => e,
            Err(_) => panic!("empty key"),
        }
    }

    /// Returns the map's entry corresponding to the given key, or an error if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tst::map::Entry;
    ///
    /// let mut map = tst::Map::new();
    /// map.insert("a", 1);
    ///
    /// match map.try_entry("a") {
    ///     Ok(Entry::Occupied(e)) => assert_eq!(e.remove(), 1),
    ///     _ => unreachable!(),
    /// }
    ///
    /// assert!(map.is_empty());
    /// assert!(map.try_entry("").is_err());
    /// ```
    pub fn try_entry(&mut self, key: &str) -> Result<Entry<'_, V>, Error> {
        match node::descend(&mut self.root, &self.cmp, key) {
            None => Err(Error::EmptyKey),
            Some(descent) => Ok(descent.into_entry(key, &mut self.len)),
        }
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    /// assert!(!map.contains_key("car"));
    ///
    /// map.insert("cart", 1);
    /// assert!(!map.contains_key("car"));
    ///
    /// map.insert("car", 2);
    /// assert!(map.contains_key("car"));
    /// ```
    pub fn contains_key(&self, key: &str) -> bool { self.get(key).is_some() }

    /// Returns a reference to the value associated with the given key, or `None` if the map does
    /// not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    /// assert_eq!(map.get("a"), None);
    ///
    /// map.insert("a", 1);
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get(""), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        node::get(&self.root, &self.cmp, key).and_then(Node::value)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    /// assert_eq!(map.get("a"), None);
    ///
    /// map.insert("a", 1);
    ///
    /// {
    ///     let value = map.get_mut("a").unwrap();
    ///     assert_eq!(*value, 1);
    ///     *value = 5;
    /// }
    ///
    /// assert_eq!(map.get("a"), Some(&5));
    /// ```
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        node::get_mut(&mut self.root, &self.cmp, key).and_then(Node::value_mut)
    }

    /// Returns the longest key in the map that is a prefix of `query`, or the empty string if
    /// there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    ///
    /// map.insert("cat", 1);
    /// map.insert("cats", 2);
    ///
    /// assert_eq!(map.longest_prefix("caterpillar"), "cat");
    /// assert_eq!(map.longest_prefix("catsup"), "cats");
    /// assert_eq!(map.longest_prefix("ca"), "");
    /// ```
    pub fn longest_prefix<'q>(&self, query: &'q str) -> &'q str {
        node::longest_prefix(&self.root, &self.cmp, query)
    }

    /// Returns an iterator that consumes the map.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// map.insert("c", 3);
    ///
    /// let mut it = map.into_iter();
    /// assert_eq!(it.next(), Some(("a".to_string(), 1)));
    /// assert_eq!(it.next(), Some(("b".to_string(), 2)));
    /// assert_eq!(it.next(), Some(("c".to_string(), 3)));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn into_iter(mut self) -> IntoIter<V> {
        IntoIter(node::Iter::new(self.root.take(), self.len))
    }

    /// Returns an iterator over the map's entries with immutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// map.insert("c", 3);
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some(("a".to_string(), &1)));
    /// assert_eq!(it.next(), Some(("b".to_string(), &2)));
    /// assert_eq!(it.next(), Some(("c".to_string(), &3)));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter(node::Iter::new(self.root.as_deref(), self.len))
    }

    /// Returns an iterator over the map's entries with mutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    ///
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    /// map.insert("c", 3);
    ///
    /// let mut i = 1;
    ///
    /// for (_, value) in map.iter_mut() {
    ///     assert_eq!(i, *value);
    ///     *value *= 2;
    ///     i += 1;
    /// }
    ///
    /// assert_eq!(map["a"], 2);
    /// assert_eq!(map["b"], 4);
    /// assert_eq!(map["c"], 6);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut(node::Iter::new(self.root.as_deref_mut(), self.len))
    }

    /// Returns an iterator over the map's keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let map = tst::tstmap!{"b" => 2, "a" => 1};
    /// assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b"]);
    /// ```
    pub fn keys(&self) -> Keys<'_, V> { Keys(self.iter()) }

    /// Returns an iterator over the map's values in ascending order of their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let map = tst::tstmap!{"b" => 2, "a" => 1};
    /// assert_eq!(map.values().collect::<Vec<_>>(), [&1, &2]);
    /// ```
    pub fn values(&self) -> Values<'_, V> { Values(self.iter()) }

    /// Returns an iterator over mutable references to the map's values in ascending order of
    /// their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::tstmap!{"b" => 2, "a" => 1};
    /// for value in map.values_mut() { *value += 10; }
    /// assert_eq!(map.values().collect::<Vec<_>>(), [&11, &12]);
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> { ValuesMut(self.iter_mut()) }

    /// Returns an iterator over the map's entries whose keys start with `prefix`, with immutable
    /// references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator. An
    /// empty prefix yields every entry.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    ///
    /// map.insert("cat", 1);
    /// map.insert("car", 2);
    /// map.insert("dog", 3);
    /// map.insert("ca", 4);
    ///
    /// assert_eq!(map.prefix_iter("ca").collect::<Vec<_>>(),
    ///     [("ca".to_string(), &4), ("car".to_string(), &2), ("cat".to_string(), &1)]);
    /// assert_eq!(map.prefix_iter("cow").next(), None);
    /// ```
    pub fn prefix_iter(&self, prefix: &str) -> Prefix<'_, V> {
        Prefix(if prefix.is_empty() {
            node::Iter::new(self.root.as_deref(), self.len)
        } else {
            node::Iter::prefix(node::get(&self.root, &self.cmp, prefix), prefix, self.len)
        })
    }

    /// Returns an iterator over the map's entries whose keys start with `prefix`, with mutable
    /// references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator. An
    /// empty prefix yields every entry.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    ///
    /// map.insert("cat", 1);
    /// map.insert("car", 2);
    /// map.insert("dog", 3);
    ///
    /// for (_, value) in map.prefix_iter_mut("ca") { *value *= 10; }
    ///
    /// assert_eq!(map["cat"], 10);
    /// assert_eq!(map["car"], 20);
    /// assert_eq!(map["dog"], 3);
    /// ```
    pub fn prefix_iter_mut(&mut self, prefix: &str) -> PrefixMut<'_, V> {
        let len = self.len;

        PrefixMut(if prefix.is_empty() {
            node::Iter::new(self.root.as_deref_mut(), len)
        } else {
            node::Iter::prefix(node::get_mut(&mut self.root, &self.cmp, prefix), prefix, len)
        })
    }

    /// Returns an iterator over the map's entries whose keys match `pattern`, with immutable
    /// references to the values.
    ///
    /// Each [`WILDCARD`](constant.WILDCARD.html) (`'.'`) in the pattern matches any single
    /// character and every other character matches itself, so only keys with as many characters
    /// as the pattern can match. An empty pattern matches nothing. The iterator yields the entries
    /// in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    ///
    /// map.insert("cat", 1);
    /// map.insert("cot", 2);
    /// map.insert("cart", 3);
    /// map.insert("cut", 4);
    /// map.insert("dot", 5);
    ///
    /// assert_eq!(map.wildcard_iter("c.t").collect::<Vec<_>>(),
    ///     [("cat".to_string(), &1), ("cot".to_string(), &2), ("cut".to_string(), &4)]);
    /// assert_eq!(map.wildcard_iter("..t").count(), 4);
    /// ```
    pub fn wildcard_iter<'a>(&'a self, pattern: &str) -> Wildcard<'a, V, C> {
        let cmp = node::Borrowed(&self.cmp);
        Wildcard(node::Wildcard::new(self.root.as_deref(), cmp, pattern, WILDCARD, self.len))
    }

    /// Returns an iterator over the map's entries whose keys match `pattern`, with mutable
    /// references to the values.
    ///
    /// See [`wildcard_iter`](#method.wildcard_iter) for the pattern syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tst::Map::new();
    ///
    /// map.insert("cat", 1);
    /// map.insert("cut", 2);
    /// map.insert("cart", 3);
    ///
    /// for (_, value) in map.wildcard_iter_mut("c.t") { *value = 0; }
    ///
    /// assert_eq!(map.values().collect::<Vec<_>>(), [&3, &0, &0]);
    /// ```
    pub fn wildcard_iter_mut<'a>(&'a mut self, pattern: &str) -> WildcardMut<'a, V, C> {
        let len = self.len;
        let cmp = node::Borrowed(&self.cmp);
        WildcardMut(node::Wildcard::new(self.root.as_deref_mut(), cmp, pattern, WILDCARD, len))
    }

    /// Returns an iterator that consumes the map, yielding only those entries whose keys start
    /// with `prefix`.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator. An
    /// empty prefix yields every entry.
    ///
    /// # Examples
    ///
    /// ```
    /// let map = tst::tstmap!{"cat" => 1, "car" => 2, "dog" => 3};
    ///
    /// assert_eq!(map.into_prefix_iter("ca").collect::<Vec<_>>(),
    ///     [("car".to_string(), 2), ("cat".to_string(), 1)]);
    /// ```
    pub fn into_prefix_iter(mut self, prefix: &str) -> IntoPrefix<V> {
        let len = self.len;

        IntoPrefix(if prefix.is_empty() {
            node::Iter::new(self.root.take(), len)
        } else {
            let subtree = node::descend(&mut self.root, &self.cmp, prefix)
                .and_then(node::Descent::take);
            node::Iter::prefix(subtree, prefix, len)
        })
    }

    /// Returns an iterator that consumes the map, yielding only those entries whose keys match
    /// `pattern`.
    ///
    /// See [`wildcard_iter`](#method.wildcard_iter) for the pattern syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// let map = tst::tstmap!{"cat" => 1, "cot" => 2, "cart" => 3};
    ///
    /// assert_eq!(map.into_wildcard_iter("c.t").collect::<Vec<_>>(),
    ///     [("cat".to_string(), 1), ("cot".to_string(), 2)]);
    /// ```
    pub fn into_wildcard_iter(mut self, pattern: &str) -> IntoWildcard<V, C> where C: Clone {
        let cmp = self.cmp.clone();
        IntoWildcard(node::Wildcard::new(self.root.take(), cmp, pattern, WILDCARD, self.len))
    }

    /// Compares two keys character by character according to the map's comparator.
    fn compare_keys(&self, l: &str, r: &str) -> Ordering {
        let mut l = l.chars();
        let mut r = r.chars();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Equal,
                (None, Some(_)) => return Less,
                (Some(_), None) => return Greater,
                (Some(l), Some(r)) => match self.cmp.compare(&l, &r) {
                    Equal => {}
                    non_eq => return non_eq,
                },
            }
        }
    }

    #[cfg(test)]
    pub fn root(&self) -> &node::Link<V> { &self.root }
}

impl<V, C> Clone for Map<V, C> where V: Clone, C: Clone + Compare<char> {
    fn clone(&self) -> Self {
        Map { root: node::clone(&self.root), len: self.len, cmp: self.cmp.clone() }
    }
}

impl<V, C> Drop for Map<V, C> where C: Compare<char> {
    fn drop(&mut self) { node::clear(&mut self.root); }
}

impl<V, C> Debug for Map<V, C> where V: Debug, C: Compare<char> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter();

        if let Some((k, v)) = it.next() {
            write!(f, "{:?}: {:?}", k, v)?;
            for (k, v) in it { write!(f, ", {:?}: {:?}", k, v)?; }
        }

        write!(f, "}}")
    }
}

impl<V, C> Default for Map<V, C> where C: Compare<char> + Default {
    fn default() -> Self { Map::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<V, C> where K: AsRef<str>, C: Compare<char> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k.as_ref(), v); }
    }
}

impl<K, V, C> iter::FromIterator<(K, V)> for Map<V, C>
    where K: AsRef<str>, C: Compare<char> + Default {

    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map: Self = Default::default();
        map.extend(it);
        map
    }
}

/// Hashes the entries in order, using each key as stored.
///
/// Consistent with `Eq` only when the comparator never reports distinct characters as equal.
impl<V, C> Hash for Map<V, C> where V: Hash, C: Compare<char> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for e in self.iter() { e.hash(h); }
    }
}

impl<'a, V, C> ops::Index<&'a str> for Map<V, C> where C: Compare<char> {
    type Output = V;
    fn index(&self, key: &str) -> &V { self.get(key).expect("key not found") }
}

impl<'a, V, C> ops::IndexMut<&'a str> for Map<V, C> where C: Compare<char> {
    fn index_mut(&mut self, key: &str) -> &mut V { self.get_mut(key).expect("key not found") }
}

impl<'a, V, C> IntoIterator for &'a Map<V, C> where C: Compare<char> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Iter<'a, V> { self.iter() }
}

impl<'a, V, C> IntoIterator for &'a mut Map<V, C> where C: Compare<char> {
    type Item = (String, &'a mut V);
    type IntoIter = IterMut<'a, V>;
    fn into_iter(self) -> IterMut<'a, V> { self.iter_mut() }
}

impl<V, C> IntoIterator for Map<V, C> where C: Compare<char> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;
    fn into_iter(self) -> IntoIter<V> { self.into_iter() }
}

impl<V, C> PartialEq for Map<V, C> where V: PartialEq, C: Compare<char> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| {
            self.compare_keys(&l.0, &r.0) == Equal && l.1 == r.1
        })
    }
}

impl<V, C> Eq for Map<V, C> where V: Eq, C: Compare<char> {}

impl<V, C> PartialOrd for Map<V, C> where V: PartialOrd, C: Compare<char> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Some(Equal),
                (None, Some(_)) => return Some(Less),
                (Some(_), None) => return Some(Greater),
                (Some(l), Some(r)) => match self.compare_keys(&l.0, &r.0) {
                    Equal => match l.1.partial_cmp(&r.1) {
                        Some(Equal) => {}
                        non_eq => return non_eq,
                    },
                    non_eq => return Some(non_eq),
                },
            }
        }
    }
}

impl<V, C> Ord for Map<V, C> where V: Ord, C: Compare<char> {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Equal,
                (None, Some(_)) => return Less,
                (Some(_), None) => return Greater,
                (Some(l), Some(r)) => match self.compare_keys(&l.0, &r.0) {
                    Equal => match l.1.cmp(&r.1) {
                        Equal => {}
                        non_eq => return non_eq,
                    },
                    non_eq => return non_eq,
                },
            }
        }
    }
}

/// An iterator that consumes the map.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through [`Map::into_iter`](struct.Map.html#method.into_iter) or the
/// `IntoIterator` trait:
///
/// ```
/// let mut map = tst::Map::new();
///
/// map.insert("b", 2);
/// map.insert("a", 1);
/// map.insert("c", 3);
///
/// for (key, value) in map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct IntoIter<V>(node::Iter<Box<Node<V>>>);

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);
    fn next(&mut self) -> Option<(String, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> Drop for IntoIter<V> {
    fn drop(&mut self) { self.0.clear(); }
}

/// An iterator over the map's entries with immutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through [`Map::iter`](struct.Map.html#method.iter) or the `IntoIterator` trait:
///
/// ```
/// let mut map = tst::Map::new();
///
/// map.insert("b", 2);
/// map.insert("a", 1);
/// map.insert("c", 3);
///
/// for (key, value) in &map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct Iter<'a, V: 'a>(node::Iter<&'a Node<V>>);

impl<'a, V> Clone for Iter<'a, V> {
    fn clone(&self) -> Iter<'a, V> { Iter(self.0.clone()) }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);
    fn next(&mut self) -> Option<(String, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {}

/// An iterator over the map's entries with mutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through [`Map::iter_mut`](struct.Map.html#method.iter_mut) or the
/// `IntoIterator` trait:
///
/// ```
/// let mut map = tst::Map::new();
///
/// map.insert("b", 2);
/// map.insert("a", 1);
/// map.insert("c", 3);
///
/// for (key, value) in &mut map {
///     *value += key.len();
/// }
/// ```
pub struct IterMut<'a, V: 'a>(node::Iter<&'a mut Node<V>>);

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (String, &'a mut V);
    fn next(&mut self) -> Option<(String, &'a mut V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, V> ExactSizeIterator for IterMut<'a, V> {}

/// An iterator over the map's keys.
///
/// Acquire through [`Map::keys`](struct.Map.html#method.keys).
pub struct Keys<'a, V: 'a>(Iter<'a, V>);

impl<'a, V> Clone for Keys<'a, V> {
    fn clone(&self) -> Keys<'a, V> { Keys(self.0.clone()) }
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = String;
    fn next(&mut self) -> Option<String> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, V> ExactSizeIterator for Keys<'a, V> {}

/// An iterator over the map's values.
///
/// Acquire through [`Map::values`](struct.Map.html#method.values).
pub struct Values<'a, V: 'a>(Iter<'a, V>);

impl<'a, V> Clone for Values<'a, V> {
    fn clone(&self) -> Values<'a, V> { Values(self.0.clone()) }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> { self.0.next().map(|e| e.1) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, V> ExactSizeIterator for Values<'a, V> {}

/// An iterator over mutable references to the map's values.
///
/// Acquire through [`Map::values_mut`](struct.Map.html#method.values_mut).
pub struct ValuesMut<'a, V: 'a>(IterMut<'a, V>);

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;
    fn next(&mut self) -> Option<&'a mut V> { self.0.next().map(|e| e.1) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, V> ExactSizeIterator for ValuesMut<'a, V> {}

/// An iterator that consumes the map, yielding only those entries whose keys start with a given
/// prefix.
///
/// Acquire through [`Map::into_prefix_iter`](struct.Map.html#method.into_prefix_iter).
pub struct IntoPrefix<V>(node::Iter<Box<Node<V>>>);

impl<V> Iterator for IntoPrefix<V> {
    type Item = (String, V);
    fn next(&mut self) -> Option<(String, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { (0, self.0.size_hint().1) }
}

impl<V> Drop for IntoPrefix<V> {
    fn drop(&mut self) { self.0.clear(); }
}

/// An iterator over the map's entries whose keys start with a given prefix, with immutable
/// references to the values.
///
/// Acquire through [`Map::prefix_iter`](struct.Map.html#method.prefix_iter).
pub struct Prefix<'a, V: 'a>(node::Iter<&'a Node<V>>);

impl<'a, V> Clone for Prefix<'a, V> {
    fn clone(&self) -> Prefix<'a, V> { Prefix(self.0.clone()) }
}

impl<'a, V> Iterator for Prefix<'a, V> {
    type Item = (String, &'a V);
    fn next(&mut self) -> Option<(String, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { (0, self.0.size_hint().1) }
}

/// An iterator over the map's entries whose keys start with a given prefix, with mutable
/// references to the values.
///
/// Acquire through [`Map::prefix_iter_mut`](struct.Map.html#method.prefix_iter_mut).
pub struct PrefixMut<'a, V: 'a>(node::Iter<&'a mut Node<V>>);

impl<'a, V> Iterator for PrefixMut<'a, V> {
    type Item = (String, &'a mut V);
    fn next(&mut self) -> Option<(String, &'a mut V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { (0, self.0.size_hint().1) }
}

/// An iterator over the map's entries whose keys match a wildcard pattern, with immutable
/// references to the values.
///
/// Acquire through [`Map::wildcard_iter`](struct.Map.html#method.wildcard_iter).
pub struct Wildcard<'a, V: 'a, C: 'a>(node::Wildcard<&'a Node<V>, node::Borrowed<'a, C>>);

impl<'a, V, C> Clone for Wildcard<'a, V, C> {
    fn clone(&self) -> Wildcard<'a, V, C> { Wildcard(self.0.clone()) }
}

impl<'a, V, C> Iterator for Wildcard<'a, V, C> where C: Compare<char> {
    type Item = (String, &'a V);
    fn next(&mut self) -> Option<(String, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

/// An iterator over the map's entries whose keys match a wildcard pattern, with mutable
/// references to the values.
///
/// Acquire through [`Map::wildcard_iter_mut`](struct.Map.html#method.wildcard_iter_mut).
pub struct WildcardMut<'a, V: 'a, C: 'a>(node::Wildcard<&'a mut Node<V>, node::Borrowed<'a, C>>);

impl<'a, V, C> Iterator for WildcardMut<'a, V, C> where C: Compare<char> {
    type Item = (String, &'a mut V);
    fn next(&mut self) -> Option<(String, &'a mut V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

/// An iterator that consumes the map, yielding only those entries whose keys match a wildcard
/// pattern.
///
/// Acquire through [`Map::into_wildcard_iter`](struct.Map.html#method.into_wildcard_iter).
pub struct IntoWildcard<V, C>(node::Wildcard<Box<Node<V>>, C>);

impl<V, C> Iterator for IntoWildcard<V, C> where C: Compare<char> {
    type Item = (String, V);
    fn next(&mut self) -> Option<(String, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<V, C> Drop for IntoWildcard<V, C> {
    fn drop(&mut self) { self.0.clear(); }
}

/// An entry in the map.
///
/// See [`Map::entry`](struct.Map.html#method.entry) for an example.
pub enum Entry<'a, V: 'a> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, V>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Returns the entry's key.
    pub fn key(&self) -> &str {
        match *self {
            Entry::Occupied(ref e) => e.key(),
            Entry::Vacant(ref e) => e.key(),
        }
    }

    /// Returns the entry's value, inserting the given default if the entry is vacant.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default),
        }
    }

    /// Returns the entry's value, inserting the given function's result if the entry is vacant.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V where F: FnOnce() -> V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default()),
        }
    }
}
