mod iter;


use compare::Compare;
use std::cmp::Ordering::*;
use std::marker::PhantomData;
use std::mem::replace;
use super::map::Entry;

pub use self::iter::{Borrowed, Iter, Wildcard};

pub type Link<V> = Option<Box<Node<V>>>;

pub struct Node<V> {
    left: Link<V>,
    mid: Link<V>,
    right: Link<V>,
    value: Option<V>,
    ch: char,
}

impl<V> Node<V> {
    fn new(ch: char) -> Self {
        Node { left: None, mid: None, right: None, value: None, ch: ch }
    }

    pub fn value(&self) -> Option<&V> { self.value.as_ref() }

    pub fn value_mut(&mut self) -> Option<&mut V> { self.value.as_mut() }

    fn is_dead(&self) -> bool {
        self.value.is_none() && self.left.is_none() && self.mid.is_none() && self.right.is_none()
    }
}

/// Returns the node holding the last character of `key`, whether or not it holds a value.
pub fn get<'a, V, C>(mut link: &'a Link<V>, cmp: &C, key: &str) -> Option<&'a Node<V>>
    where C: Compare<char> {

    let mut chars = key.chars();
    let mut ch = chars.next()?;

    while let Some(ref node) = *link {
        match cmp.compare(&ch, &node.ch) {
            Less => link = &node.left,
            Greater => link = &node.right,
            Equal => match chars.next() {
                None => return Some(&**node),
                Some(next) => { ch = next; link = &node.mid; }
            },
        }
    }

    None
}

pub fn get_mut<'a, V, C>(mut link: &'a mut Link<V>, cmp: &C, key: &str)
    -> Option<&'a mut Node<V>> where C: Compare<char> {

    let mut chars = key.chars();
    let mut ch = chars.next()?;

    while let Some(ref mut node) = *link {
        match cmp.compare(&ch, &node.ch) {
            Less => link = &mut node.left,
            Greater => link = &mut node.right,
            Equal => match chars.next() {
                None => return Some(&mut **node),
                Some(next) => { ch = next; link = &mut node.mid; }
            },
        }
    }

    None
}

pub fn longest_prefix<'q, V, C>(mut link: &Link<V>, cmp: &C, query: &'q str) -> &'q str
    where C: Compare<char> {

    let mut len = 0;
    let mut chars = query.char_indices();
    let mut next = chars.next();

    while let (Some((i, ch)), Some(node)) = (next, link.as_ref()) {
        match cmp.compare(&ch, &node.ch) {
            Less => link = &node.left,
            Greater => link = &node.right,
            Equal => {
                if node.value.is_some() { len = i + ch.len_utf8(); }
                link = &node.mid;
                next = chars.next();
            }
        }
    }

    &query[..len]
}

/// Creates the nodes for `first` and `rest` below `link`, reusing the node already at `link` if
/// it holds `first`, and returns the node for the last character.
fn graft<'a, V, I>(link: &'a mut Link<V>, first: char, rest: I) -> &'a mut Node<V>
    where I: IntoIterator<Item=char> {

    let mut node = &mut **link.get_or_insert_with(|| Box::new(Node::new(first)));

    for ch in rest {
        node = &mut **node.mid.get_or_insert_with(|| Box::new(Node::new(ch)));
    }

    node
}

/// Copies the tree below `link` without recursing, preserving its shape.
pub fn clone<V>(link: &Link<V>) -> Link<V> where V: Clone {
    let mut root = None;

    {
        let mut pending = vec![(link, &mut root)];

        while let Some((src, dst)) = pending.pop() {
            if let Some(ref src) = *src {
                let node = dst.get_or_insert_with(|| Box::new(Node {
                    left: None,
                    mid: None,
                    right: None,
                    value: src.value.clone(),
                    ch: src.ch,
                }));

                let Node { ref mut left, ref mut mid, ref mut right, .. } = **node;
                pending.push((&src.left, left));
                pending.push((&src.mid, mid));
                pending.push((&src.right, right));
            }
        }
    }

    root
}

/// Drops the tree below `link` without recursing, leaving `link` empty.
pub fn clear<V>(link: &mut Link<V>) {
    let mut nodes: Vec<Box<Node<V>>> = link.take().into_iter().collect();

    while let Some(mut node) = nodes.pop() {
        nodes.extend(node.left.take());
        nodes.extend(node.mid.take());
        nodes.extend(node.right.take());
    }
}

// Clears the links whose nodes were left dead by a removal, deepest first, stopping at the first
// live node.
//
// Safety: the links must be valid and ordered from the root down, each one reached through the
// one before it, with no other references into the tree alive.
unsafe fn prune<V>(path: Vec<*mut Link<V>>) {
    for link in path.into_iter().rev() {
        if !(*link).as_ref().map_or(false, |node| node.is_dead()) { break; }
        *link = None;
    }
}

#[derive(Clone, Copy)]
enum Stop {
    /// The last link holds the node for the key's last character.
    Found(char),
    /// The last link is empty; the key is missing from the given character, which starts at the
    /// given byte offset, onward.
    Missing(usize, char),
}

/// The links visited while descending toward a key, from the root to the link where the descent
/// stopped.
pub struct Descent<'a, V: 'a> {
    path: Vec<*mut Link<V>>,
    stop: Stop,
    _marker: PhantomData<&'a mut Link<V>>,
}

/// Descends toward `key`, recording every link visited. Returns `None` if `key` is empty.
pub fn descend<'a, V, C>(root: &'a mut Link<V>, cmp: &C, key: &str) -> Option<Descent<'a, V>>
    where C: Compare<char> {

    let mut chars = key.char_indices();
    let (mut at, mut ch) = chars.next()?;
    let mut link = root as *mut Link<V>;
    let mut path = vec![];

    loop {
        path.push(link);

        // Every pointer in `path` is derived from `root`, which stays exclusively borrowed for
        // `'a`, and only the most recent one is dereferenced here.
        let node = match unsafe { (*link).as_mut() } {
            None => return Some(Descent::new(path, Stop::Missing(at, ch))),
            Some(node) => node,
        };

        let next = match cmp.compare(&ch, &node.ch) {
            Less => &mut node.left,
            Greater => &mut node.right,
            Equal => match chars.next() {
                None => return Some(Descent::new(path, Stop::Found(ch))),
                Some((i, c)) => { at = i; ch = c; &mut node.mid }
            },
        };

        link = next as *mut Link<V>;
    }
}

impl<'a, V> Descent<'a, V> {
    fn new(path: Vec<*mut Link<V>>, stop: Stop) -> Self {
        Descent { path: path, stop: stop, _marker: PhantomData }
    }

    fn last(&self) -> *mut Link<V> { self.path[self.path.len() - 1] }

    /// Detaches the subtree rooted at the node for the key's last character, leaving the rest of
    /// the tree without it.
    pub fn take(self) -> Link<V> {
        match self.stop {
            Stop::Missing(..) => None,
            Stop::Found(_) => unsafe { (*self.last()).take() },
        }
    }

    /// Removes the value stored under the key, if any, pruning the nodes left dead.
    pub fn remove(self) -> Option<V> {
        if let Stop::Missing(..) = self.stop { return None; }

        let value = unsafe { (*self.last()).as_mut() }.and_then(|node| node.value.take());
        if value.is_some() { unsafe { prune(self.path); } }
        value
    }

    pub fn into_entry(self, key: &str, len: &'a mut usize) -> Entry<'a, V> {
        let link = self.last();

        let (at, ch) = match self.stop {
            Stop::Missing(at, ch) => (at, ch),
            Stop::Found(ch) => {
                let value = unsafe { (*link).as_mut() }
                    .and_then(|node| node.value.as_mut())
                    .map(|value| value as *mut V);

                if let Some(value) = value {
                    return Entry::Occupied(OccupiedEntry {
                        key: key.to_string(),
                        path: self.path,
                        value: value,
                        len: len,
                        _marker: PhantomData,
                    });
                }

                (key.len() - ch.len_utf8(), ch)
            }
        };

        Entry::Vacant(VacantEntry {
            key: key.to_string(),
            at: at,
            ch: ch,
            link: unsafe { &mut *link },
            len: len,
        })
    }
}

/// An occupied entry.
///
/// See [`Map::entry`](struct.Map.html#method.entry) for an example.
pub struct OccupiedEntry<'a, V: 'a> {
    key: String,
    path: Vec<*mut Link<V>>,
    // Points into the node behind the last link in `path`. Only reborrowed for as long as the
    // entry is borrowed.
    value: *mut V,
    len: &'a mut usize,
    _marker: PhantomData<&'a mut V>,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Returns the entry's key.
    pub fn key(&self) -> &str { &self.key }

    /// Returns a reference to the entry's value.
    pub fn get(&self) -> &V { unsafe { &*self.value } }

    /// Returns a mutable reference to the entry's value.
    pub fn get_mut(&mut self) -> &mut V { unsafe { &mut *self.value } }

    /// Returns a mutable reference to the entry's value with the same lifetime as the map.
    pub fn into_mut(self) -> &'a mut V { unsafe { &mut *self.value } }

    /// Replaces the entry's value with the given value, returning the old one.
    pub fn insert(&mut self, value: V) -> V { replace(self.get_mut(), value) }

    /// Removes the entry from the map and returns its value.
    ///
    /// The nodes that no other key passes through are removed along with it.
    pub fn remove(self) -> V {
        let OccupiedEntry { path, len, .. } = self;
        *len -= 1;

        let link = path[path.len() - 1];
        let value = unsafe { (*link).as_mut() }.and_then(|node| node.value.take())
            .expect("occupied entry without a value");
        unsafe { prune(path); }
        value
    }
}

unsafe impl<'a, V> Send for OccupiedEntry<'a, V> where V: Send {}
unsafe impl<'a, V> Sync for OccupiedEntry<'a, V> where V: Sync {}

/// A vacant entry.
///
/// See [`Map::entry`](struct.Map.html#method.entry) for an example.
pub struct VacantEntry<'a, V: 'a> {
    key: String,
    at: usize,
    ch: char,
    link: &'a mut Link<V>,
    len: &'a mut usize,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Returns the entry's key.
    pub fn key(&self) -> &str { &self.key }

    /// Inserts the entry into the map with the given value, returning a mutable reference to the
    /// value with the same lifetime as the map.
    pub fn insert(self, value: V) -> &'a mut V {
        let VacantEntry { key, at, ch, link, len } = self;
        *len += 1;

        let node = graft(link, ch, key[at + ch.len_utf8()..].chars());
        node.value.get_or_insert(value)
    }
}
