use compare::Compare;
use std::cmp::Ordering;
use std::cmp::Ordering::*;
use super::Node;

/// A way of reaching a node that can be taken apart into its character, value and children:
/// by shared reference, by mutable reference, or by owning it outright.
pub trait NodeRef: Sized {
    type Value;
    fn ch(&self) -> char;
    fn split(self) -> Parts<Self>;

    /// Disposes of a subtree the traversal will not visit.
    fn release(self) {}
}

fn release<N>(node: Option<N>) where N: NodeRef {
    if let Some(node) = node { node.release(); }
}

pub struct Parts<N> where N: NodeRef {
    left: Option<N>,
    mid: Option<N>,
    right: Option<N>,
    value: Option<N::Value>,
    ch: char,
}

impl<'a, V> NodeRef for &'a Node<V> {
    type Value = &'a V;

    fn ch(&self) -> char { self.ch }

    fn split(self) -> Parts<Self> {
        Parts {
            left: self.left.as_deref(),
            mid: self.mid.as_deref(),
            right: self.right.as_deref(),
            value: self.value.as_ref(),
            ch: self.ch,
        }
    }
}

impl<'a, V> NodeRef for &'a mut Node<V> {
    type Value = &'a mut V;

    fn ch(&self) -> char { self.ch }

    fn split(self) -> Parts<Self> {
        let Node { ref mut left, ref mut mid, ref mut right, ref mut value, ch } = *self;

        Parts {
            left: left.as_deref_mut(),
            mid: mid.as_deref_mut(),
            right: right.as_deref_mut(),
            value: value.as_mut(),
            ch: ch,
        }
    }
}

impl<V> NodeRef for Box<Node<V>> {
    type Value = V;

    fn ch(&self) -> char { self.ch }

    fn split(self) -> Parts<Self> {
        let node = *self;
        Parts { left: node.left, mid: node.mid, right: node.right, value: node.value, ch: node.ch }
    }

    fn release(self) { super::clear(&mut Some(self)); }
}

/// A comparator borrowed from the map it orders.
pub struct Borrowed<'c, C: 'c>(pub &'c C);

impl<'c, C> Clone for Borrowed<'c, C> {
    fn clone(&self) -> Self { Borrowed(self.0) }
}

impl<'c, C> Compare<char> for Borrowed<'c, C> where C: Compare<char> {
    fn compare(&self, l: &char, r: &char) -> Ordering { self.0.compare(l, r) }
}

/// The key of the entry being visited, rebuilt in place as the traversal moves through the tree.
///
/// Every pending visit records how many bytes of the key it shares with its parent and which
/// character, if any, it appends, so one buffer serves the whole traversal.
#[derive(Clone, Default)]
struct Key(String);

impl Key {
    fn enter(&mut self, at: usize, ch: Option<char>) -> usize {
        self.0.truncate(at);
        self.0.extend(ch);
        self.0.len()
    }

    fn yield_with(&mut self, at: usize, ch: char) -> String {
        self.enter(at, Some(ch));
        self.0.clone()
    }
}

enum Visit<N> where N: NodeRef {
    Node(N, usize, Option<char>),
    Value(N::Value, usize, char),
}

impl<N> Clone for Visit<N> where N: NodeRef + Clone, N::Value: Clone {
    fn clone(&self) -> Self {
        match *self {
            Visit::Node(ref node, at, ch) => Visit::Node(node.clone(), at, ch),
            Visit::Value(ref value, at, ch) => Visit::Value(value.clone(), at, ch),
        }
    }
}

/// An in-order traversal of a subtree: for each node its left subtree, its value, its middle
/// subtree and then its right subtree, which visits the keys in ascending order.
pub struct Iter<N> where N: NodeRef {
    visits: Vec<Visit<N>>,
    key: Key,
    size: usize,
}

impl<N> Clone for Iter<N> where N: NodeRef + Clone, N::Value: Clone {
    fn clone(&self) -> Self {
        Iter { visits: self.visits.clone(), key: self.key.clone(), size: self.size }
    }
}

impl<N> Iter<N> where N: NodeRef {
    /// Traverses the tree below `root`, which holds `size` values.
    pub fn new(root: Option<N>, size: usize) -> Iter<N> {
        Iter {
            visits: root.into_iter().map(|node| Visit::Node(node, 0, None)).collect(),
            key: Key::default(),
            size: size,
        }
    }

    /// Traverses the value of `node` and its middle subtree, the entries whose keys start with
    /// `prefix`. `node` must be the node reached by `prefix`'s last character, and `size` an
    /// upper bound on the number of values below it.
    pub fn prefix(node: Option<N>, prefix: &str, size: usize) -> Iter<N> {
        let mut it = Iter { visits: vec![], key: Key(prefix.to_string()), size: size };

        if let Some(node) = node {
            let Parts { left, mid, right, value, ch } = node.split();
            release(left);
            release(right);

            let at = prefix.len() - ch.len_utf8();
            it.visits.extend(mid.map(|mid| Visit::Node(mid, prefix.len(), None)));
            it.visits.extend(value.map(|value| Visit::Value(value, at, ch)));
        }

        it
    }
}

impl<N> Iterator for Iter<N> where N: NodeRef {
    type Item = (String, N::Value);

    fn next(&mut self) -> Option<(String, N::Value)> {
        while let Some(visit) = self.visits.pop() {
            match visit {
                Visit::Value(value, at, ch) => {
                    self.size -= 1;
                    return Some((self.key.yield_with(at, ch), value));
                }
                Visit::Node(node, at, ch) => {
                    let at = self.key.enter(at, ch);
                    let Parts { left, mid, right, value, ch } = node.split();

                    self.visits.extend(right.map(|right| Visit::Node(right, at, None)));
                    self.visits.extend(mid.map(|mid| Visit::Node(mid, at, Some(ch))));
                    self.visits.extend(value.map(|value| Visit::Value(value, at, ch)));
                    self.visits.extend(left.map(|left| Visit::Node(left, at, None)));
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<V> Iter<Box<Node<V>>> {
    /// Drops the entries not yet visited without recursing into the subtrees.
    pub fn clear(&mut self) {
        for visit in self.visits.drain(..) {
            if let Visit::Node(node, _, _) = visit { node.release(); }
        }

        self.size = 0;
    }
}

enum Probe<N> where N: NodeRef {
    Node(N, usize, Option<char>, usize),
    Value(N::Value, usize, char),
}

impl<N> Clone for Probe<N> where N: NodeRef + Clone, N::Value: Clone {
    fn clone(&self) -> Self {
        match *self {
            Probe::Node(ref node, at, ch, pos) => Probe::Node(node.clone(), at, ch, pos),
            Probe::Value(ref value, at, ch) => Probe::Value(value.clone(), at, ch),
        }
    }
}

/// A traversal of the keys matching a fixed-length pattern in which `None` matches any
/// character.
///
/// Literal positions steer the search by comparison as a lookup would; wildcard positions fan out
/// into all three children. Matches are visited in ascending order.
pub struct Wildcard<N, C> where N: NodeRef {
    probes: Vec<Probe<N>>,
    key: Key,
    pattern: Vec<Option<char>>,
    cmp: C,
    size: usize,
}

impl<N, C> Clone for Wildcard<N, C> where N: NodeRef + Clone, N::Value: Clone, C: Clone {
    fn clone(&self) -> Self {
        Wildcard {
            probes: self.probes.clone(),
            key: self.key.clone(),
            pattern: self.pattern.clone(),
            cmp: self.cmp.clone(),
            size: self.size,
        }
    }
}

impl<N, C> Wildcard<N, C> where N: NodeRef, C: Compare<char> {
    /// Searches the tree below `root` for keys matching `pattern`, in which `wildcard` matches
    /// any character. `size` is the number of values below `root`.
    pub fn new(root: Option<N>, cmp: C, pattern: &str, wildcard: char, size: usize)
        -> Wildcard<N, C> {

        let pattern: Vec<_> =
            pattern.chars().map(|ch| if ch == wildcard { None } else { Some(ch) }).collect();

        let probes = if pattern.is_empty() {
            release(root);
            vec![]
        } else {
            root.into_iter().map(|node| Probe::Node(node, 0, None, 0)).collect()
        };

        Wildcard { probes: probes, key: Key::default(), pattern: pattern, cmp: cmp, size: size }
    }
}

impl<N, C> Iterator for Wildcard<N, C> where N: NodeRef, C: Compare<char> {
    type Item = (String, N::Value);

    fn next(&mut self) -> Option<(String, N::Value)> {
        while let Some(probe) = self.probes.pop() {
            match probe {
                Probe::Value(value, at, ch) => {
                    self.size -= 1;
                    return Some((self.key.yield_with(at, ch), value));
                }
                Probe::Node(node, at, ch, pos) => {
                    let at = self.key.enter(at, ch);
                    let order = self.pattern[pos].map(|p| self.cmp.compare(&p, &node.ch()));
                    let last = pos + 1 == self.pattern.len();
                    let Parts { left, mid, right, value, ch } = node.split();

                    let (go_left, go_mid, go_right) = match order {
                        None => (true, true, true),
                        Some(Less) => (true, false, false),
                        Some(Equal) => (false, true, false),
                        Some(Greater) => (false, false, true),
                    };

                    if go_right {
                        self.probes.extend(right.map(|right| Probe::Node(right, at, None, pos)));
                    } else {
                        release(right);
                    }

                    if go_mid && last {
                        self.probes.extend(value.map(|value| Probe::Value(value, at, ch)));
                        release(mid);
                    } else if go_mid {
                        self.probes.extend(mid.map(|mid| Probe::Node(mid, at, Some(ch), pos + 1)));
                    } else {
                        release(mid);
                    }

                    if go_left {
                        self.probes.extend(left.map(|left| Probe::Node(left, at, None, pos)));
                    } else {
                        release(left);
                    }
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (0, Some(self.size)) }
}

impl<V, C> Wildcard<Box<Node<V>>, C> {
    /// Drops the candidates not yet visited without recursing into the subtrees.
    pub fn clear(&mut self) {
        for probe in self.probes.drain(..) {
            if let Probe::Node(node, _, _, _) = probe { node.release(); }
        }

        self.size = 0;
    }
}
