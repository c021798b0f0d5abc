//! An ordered set of strings based on a ternary search tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use super::Error;
use super::map::{self, Map};

/// An ordered set of strings based on a ternary search tree.
///
/// The empty string cannot be stored in the set.
#[derive(Clone)]
pub struct Set<C = Natural<char>> where C: Compare<char> {
    map: Map<(), C>,
}

impl Set {
    /// Creates an empty set ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tst::Set::new();
    ///
    /// set.insert("b");
    /// set.insert("a");
    /// set.insert("c");
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some("a".to_string()));
    /// assert_eq!(it.next(), Some("b".to_string()));
    /// assert_eq!(it.next(), Some("c".to_string()));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Set { map: Map::new() } }
}

impl<C> Set<C> where C: Compare<char> {
    /// Creates an empty set whose keys are ordered character by character according to the given
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
    /// let mut set = tst::Set::with_cmp(natural().rev());
    ///
    /// set.insert("b");
    /// set.insert("a");
    /// set.insert("c");
    ///
    /// assert_eq!(set.iter().collect::<Vec<_>>(), ["c", "b", "a"]);
    /// # }
    /// ```
    pub fn with_cmp(cmp: C) -> Self { Set { map: Map::with_cmp(cmp) } }

    /// Checks if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tst::Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert("b");
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tst::Set::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert("b");
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.map.len() }

    /// Returns a reference to the set's comparator.
    pub fn cmp(&self) -> &C { self.map.cmp() }

    /// Removes all keys from the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tst::Set::new();
    ///
    /// set.insert("b");
    /// set.insert("a");
    ///
    /// set.clear();
    ///
    /// assert!(set.is_empty());
    /// assert_eq!(set.iter().next(), None);
    /// ```
    pub fn clear(&mut self) { self.map.clear(); }

    /// Inserts a key into the set, returning `true` if the set did not already contain it.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tst::Set::new();
    /// assert!(set.insert("a"));
    /// assert!(set.contains("a"));
    /// assert!(!set.insert("a"));
    /// ```
    pub fn insert(&mut self, key: &str) -> bool { self.map.insert(key, ()).is_none() }

    /// Inserts a key into the set, returning `true` if the set did not already contain it, or an
    /// error if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tst::Set::new();
    /// assert_eq!(set.try_insert("a"), Ok(true));
    /// assert_eq!(set.try_insert("a"), Ok(false));
    /// assert_eq!(set.try_insert(""), Err(tst::Error::EmptyKey));
    /// ```
    pub fn try_insert(&mut self, key: &str) -> Result<bool, Error> {
        self.map.try_insert(key, ()).map(|old| old.is_none())
    }

    /// Removes the given key from the set, returning `true` if the set contained it.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tst::Set::new();
    ///
    /// set.insert("a");
    /// assert!(set.remove("a"));
    /// assert!(!set.contains("a"));
    /// assert!(!set.remove("a"));
    /// ```
    pub fn remove(&mut self, key: &str) -> bool { self.map.remove(key).is_some() }

    /// Checks if the set contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tst::Set::new();
    /// assert!(!set.contains("a"));
    ///
    /// set.insert("ab");
    /// assert!(!set.contains("a"));
    /// assert!(set.contains("ab"));
    /// ```
    pub fn contains(&self, key: &str) -> bool { self.map.contains_key(key) }

    /// Returns the longest key in the set that is a prefix of `query`, or the empty string if
    /// there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// let set = tst::tstset!{"cat", "category"};
    /// assert_eq!(set.longest_prefix("caterpillar"), "cat");
    /// assert_eq!(set.longest_prefix("dog"), "");
    /// ```
    pub fn longest_prefix<'q>(&self, query: &'q str) -> &'q str { self.map.longest_prefix(query) }

    /// Returns an iterator over the set's keys.
    ///
    /// The iterator yields the keys in ascending order according to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let set = tst::tstset!{"b", "a", "c"};
    /// assert_eq!(set.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    /// ```
    pub fn iter(&self) -> Iter<'_> { Iter(self.map.keys()) }

    /// Returns an iterator that consumes the set.
    ///
    /// The iterator yields the keys in ascending order according to the set's comparator.
    pub fn into_iter(self) -> IntoIter { IntoIter(self.map.into_iter()) }

    /// Returns an iterator over the set's keys that start with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// let set = tst::tstset!{"cat", "car", "dog"};
    /// assert_eq!(set.prefix_iter("ca").collect::<Vec<_>>(), ["car", "cat"]);
    /// ```
    pub fn prefix_iter(&self, prefix: &str) -> Prefix<'_> { Prefix(self.map.prefix_iter(prefix)) }

    /// Returns an iterator over the set's keys that match `pattern`, in which `'.'` matches any
    /// single character.
    ///
    /// # Examples
    ///
    /// ```
    /// let set = tst::tstset!{"cat", "cot", "cart"};
    /// assert_eq!(set.wildcard_iter("c.t").collect::<Vec<_>>(), ["cat", "cot"]);
    /// ```
    pub fn wildcard_iter<'a>(&'a self, pattern: &str) -> Wildcard<'a, C> {
        Wildcard(self.map.wildcard_iter(pattern))
    }
}

impl<C> Debug for Set<C> where C: Compare<char> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter();

        if let Some(key) = it.next() {
            write!(f, "{:?}", key)?;
            for key in it { write!(f, ", {:?}", key)?; }
        }

        write!(f, "}}")
    }
}

impl<C> Default for Set<C> where C: Compare<char> + Default {
    fn default() -> Self { Set { map: Default::default() } }
}

impl<K, C> Extend<K> for Set<C> where K: AsRef<str>, C: Compare<char> {
    fn extend<I: IntoIterator<Item=K>>(&mut self, it: I) {
        for key in it { self.insert(key.as_ref()); }
    }
}

impl<K, C> iter::FromIterator<K> for Set<C> where K: AsRef<str>, C: Compare<char> + Default {
    fn from_iter<I: IntoIterator<Item=K>>(it: I) -> Self {
        let mut set: Self = Default::default();
        set.extend(it);
        set
    }
}

impl<C> Hash for Set<C> where C: Compare<char> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) { self.map.hash(h); }
}

impl<'a, C> IntoIterator for &'a Set<C> where C: Compare<char> {
    type Item = String;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> { self.iter() }
}

impl<C> IntoIterator for Set<C> where C: Compare<char> {
    type Item = String;
    type IntoIter = IntoIter;
    fn into_iter(self) -> IntoIter { self.into_iter() }
}

impl<C> PartialEq for Set<C> where C: Compare<char> {
    fn eq(&self, other: &Self) -> bool { self.map == other.map }
}

impl<C> Eq for Set<C> where C: Compare<char> {}

impl<C> PartialOrd for Set<C> where C: Compare<char> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { self.map.partial_cmp(&other.map) }
}

impl<C> Ord for Set<C> where C: Compare<char> {
    fn cmp(&self, other: &Self) -> Ordering { Ord::cmp(&self.map, &other.map) }
}

/// An iterator that consumes the set.
///
/// Acquire through [`Set::into_iter`](struct.Set.html#method.into_iter) or the `IntoIterator`
/// trait:
///
/// ```
/// let set = tst::tstset!{"b", "a"};
///
/// for key in set {
///     println!("{}", key);
/// }
/// ```
pub struct IntoIter(map::IntoIter<()>);

impl Iterator for IntoIter {
    type Item = String;
    fn next(&mut self) -> Option<String> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl ExactSizeIterator for IntoIter {}

/// An iterator over the set's keys.
///
/// Acquire through [`Set::iter`](struct.Set.html#method.iter) or the `IntoIterator` trait.
#[derive(Clone)]
pub struct Iter<'a>(map::Keys<'a, ()>);

impl<'a> Iterator for Iter<'a> {
    type Item = String;
    fn next(&mut self) -> Option<String> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

/// An iterator over the set's keys that start with a given prefix.
///
/// Acquire through [`Set::prefix_iter`](struct.Set.html#method.prefix_iter).
#[derive(Clone)]
pub struct Prefix<'a>(map::Prefix<'a, ()>);

impl<'a> Iterator for Prefix<'a> {
    type Item = String;
    fn next(&mut self) -> Option<String> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

/// An iterator over the set's keys that match a wildcard pattern.
///
/// Acquire through [`Set::wildcard_iter`](struct.Set.html#method.wildcard_iter).
pub struct Wildcard<'a, C: 'a>(map::Wildcard<'a, (), C>);

impl<'a, C> Clone for Wildcard<'a, C> {
    fn clone(&self) -> Wildcard<'a, C> { Wildcard(self.0.clone()) }
}

impl<'a, C> Iterator for Wildcard<'a, C> where C: Compare<char> {
    type Item = String;
    fn next(&mut self) -> Option<String> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}
