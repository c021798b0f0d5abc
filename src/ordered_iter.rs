extern crate ordered_iter;

use compare::Compare;
use self::ordered_iter::{OrderedMapIterator, OrderedSetIterator};
use super::{map, set};

impl<V> OrderedMapIterator for map::IntoIter<V> {
    type Key = String;
    type Val = V;
}

impl<'a, V> OrderedMapIterator for map::Iter<'a, V> {
    type Key = String;
    type Val = &'a V;
}

impl<'a, V> OrderedMapIterator for map::IterMut<'a, V> {
    type Key = String;
    type Val = &'a mut V;
}

impl<'a, V> OrderedMapIterator for map::Prefix<'a, V> {
    type Key = String;
    type Val = &'a V;
}

impl<'a, V> OrderedMapIterator for map::PrefixMut<'a, V> {
    type Key = String;
    type Val = &'a mut V;
}

impl<V> OrderedMapIterator for map::IntoPrefix<V> {
    type Key = String;
    type Val = V;
}

impl<'a, V, C> OrderedMapIterator for map::Wildcard<'a, V, C> where C: Compare<char> {
    type Key = String;
    type Val = &'a V;
}

impl<'a, V, C> OrderedMapIterator for map::WildcardMut<'a, V, C> where C: Compare<char> {
    type Key = String;
    type Val = &'a mut V;
}

impl<V, C> OrderedMapIterator for map::IntoWildcard<V, C> where C: Compare<char> {
    type Key = String;
    type Val = V;
}

impl<'a, V> OrderedSetIterator for map::Keys<'a, V> {}

impl OrderedSetIterator for set::IntoIter {}

impl<'a> OrderedSetIterator for set::Iter<'a> {}

impl<'a> OrderedSetIterator for set::Prefix<'a> {}

impl<'a, C> OrderedSetIterator for set::Wildcard<'a, C> where C: Compare<char> {}
