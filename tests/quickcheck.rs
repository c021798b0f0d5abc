extern crate compare;
extern crate quickcheck;
#[macro_use] extern crate quickcheck_macros;
extern crate tst;

use quickcheck::{Arbitrary, Gen, TestResult};
use tst::map::{Entry, Map};

/// A non-empty key over a small alphabet, so that generated keys often share prefixes with the
/// keys of a generated map.
#[derive(Clone, Debug)]
struct Key(String);

impl Arbitrary for Key {
    fn arbitrary(gen: &mut Gen) -> Self {
        let len = usize::arbitrary(gen) % 6 + 1;
        Key((0..len).map(|_| *gen.choose(&['a', 'b', 'c', 'ß']).unwrap_or(&'a')).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let key = self.0.clone();
        Box::new((1..key.chars().count()).map(move |n| Key(key.chars().take(n).collect())))
    }
}

/// A map whose keys are drawn from the same small alphabet as `Key`.
#[derive(Clone, Debug)]
struct Dense(Map<u16>);

impl Arbitrary for Dense {
    fn arbitrary(gen: &mut Gen) -> Self {
        let entries = Vec::<(Key, u16)>::arbitrary(gen);
        Dense(entries.into_iter().map(|(key, value)| (key.0, value)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        Box::new(self.0.shrink().map(Dense))
    }
}

/// A pattern of the given key's length with some positions replaced by the wildcard.
fn pattern(key: &str, mask: u32) -> String {
    key.chars().enumerate()
        .map(|(i, ch)| if mask & (1 << (i % 32)) != 0 { tst::map::WILDCARD } else { ch })
        .collect()
}

fn matches(key: &str, pattern: &str) -> bool {
    key.chars().count() == pattern.chars().count() &&
        key.chars().zip(pattern.chars()).all(|(k, p)| p == tst::map::WILDCARD || k == p)
}

mod insert {
    use super::{Dense, Key};
    use tst::map::{Entry, Map};

    #[quickcheck]
    fn inserts_key(map: Dense, key: Key, value: u16) -> bool {
        let mut map = map.0;
        map.insert(&key.0, value);

        map.contains_key(&key.0) &&
        map.get(&key.0) == Some(&value) &&
        map.iter().filter(|e| e.0 == key.0).collect::<Vec<_>>() == [(key.0.clone(), &value)]
    }

    #[quickcheck]
    fn sets_len(map: Dense, key: Key, value: u16) -> bool {
        let mut map = map.0;
        let old_len = map.len();

        if map.insert(&key.0, value).is_some() {
            map.len() == old_len
        } else {
            map.len() == old_len + 1
        }
    }

    #[quickcheck]
    fn returns_old_value(map: Dense, key: Key, value: u16) -> bool {
        let mut map = map.0;
        map.get(&key.0).cloned() == map.insert(&key.0, value)
    }

    #[quickcheck]
    fn affects_no_others(map: Dense, key: Key, value: u16) -> bool {
        let mut map = map.0;
        let old_map = map.clone();
        map.insert(&key.0, value);

        map.iter().filter(|e| e.0 != key.0).collect::<Vec<_>>() ==
            old_map.iter().filter(|e| e.0 != key.0).collect::<Vec<_>>()
    }

    #[quickcheck]
    fn through_entry_agrees(map: Dense, key: Key, value: u16) -> bool {
        let mut by_insert = map.0.clone();
        let mut by_entry: Map<u16> = map.0;

        let old_value = by_insert.insert(&key.0, value);

        let entry_old_value = match by_entry.entry(&key.0) {
            Entry::Occupied(mut e) => Some(e.insert(value)),
            Entry::Vacant(e) => { e.insert(value); None }
        };

        old_value == entry_old_value && by_insert == by_entry
    }
}

mod remove {
    use super::{Dense, Key};
    use tst::map::Entry;

    #[quickcheck]
    fn removes_key(map: Dense, key: Key) -> bool {
        let mut map = map.0;
        let old_value = map.get(&key.0).cloned();

        map.remove(&key.0) == old_value &&
        !map.contains_key(&key.0) &&
        map.iter().find(|e| e.0 == key.0).is_none()
    }

    #[quickcheck]
    fn sets_len(map: Dense, key: Key) -> bool {
        let mut map = map.0;
        let old_len = map.len();

        match map.remove(&key.0) {
            None => map.len() == old_len,
            Some(_) => map.len() == old_len - 1,
        }
    }

    #[quickcheck]
    fn affects_no_others(map: Dense, key: Key) -> bool {
        let mut map = map.0;
        let old_map = map.clone();
        map.remove(&key.0);

        map.iter().collect::<Vec<_>>() ==
            old_map.iter().filter(|e| e.0 != key.0).collect::<Vec<_>>()
    }

    #[quickcheck]
    fn through_entry_agrees(map: Dense, key: Key) -> bool {
        let mut by_remove = map.0.clone();
        let mut by_entry = map.0;

        let value = by_remove.remove(&key.0);

        let entry_value = match by_entry.entry(&key.0) {
            Entry::Occupied(e) => Some(e.remove()),
            Entry::Vacant(_) => None,
        };

        value == entry_value && by_remove == by_entry
    }

    #[quickcheck]
    fn all_leaves_empty(map: Dense) -> bool {
        let mut map = map.0;
        let keys: Vec<_> = map.keys().collect();
        for key in &keys { map.remove(key); }
        map.is_empty() && map.iter().next().is_none()
    }
}

#[quickcheck]
fn entry_agrees_with_get(map: Dense, key: Key) -> bool {
    let mut map = map.0;
    let value = map.get(&key.0).cloned();

    match map.entry(&key.0) {
        Entry::Occupied(e) => value == Some(*e.get()),
        Entry::Vacant(_) => value.is_none(),
    }
}

#[quickcheck]
fn len_matches_iter(map: Map<u16>) -> bool {
    map.len() == map.iter().count() && map.iter().len() == map.len()
}

#[quickcheck]
fn iter_is_sorted(map: Dense) -> bool {
    let keys: Vec<_> = map.0.keys().collect();
    keys.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn iter_mut_agrees_with_iter(map: Dense) -> bool {
    let mut map = map.0;
    let expected: Vec<_> = map.iter().map(|(k, v)| (k, *v)).collect();
    map.iter_mut().map(|(k, v)| (k, *v)).collect::<Vec<_>>() == expected
}

#[quickcheck]
fn into_iter_agrees_with_iter(map: Dense) -> bool {
    let expected: Vec<_> = map.0.iter().map(|(k, v)| (k, *v)).collect();
    map.0.into_iter().collect::<Vec<_>>() == expected
}

#[quickcheck]
fn rev_cmp_reverses_chars(entries: Vec<(Key, u16)>) -> bool {
    use compare::{Compare, natural};

    let mut rev = Map::with_cmp(natural().rev());
    for &(ref key, value) in &entries { rev.insert(&key.0, value); }

    let keys: Vec<_> = rev.keys().collect();
    keys.windows(2).all(|w| {
        let l: Vec<_> = w[0].chars().map(|c| std::cmp::Reverse(c)).collect();
        let r: Vec<_> = w[1].chars().map(|c| std::cmp::Reverse(c)).collect();
        l < r
    })
}

#[quickcheck]
fn prefix_iter_yields_keys_with_prefix(map: Dense, prefix: Key, len: usize) -> bool {
    let prefix: String = prefix.0.chars().take(len % 4).collect();

    let expected: Vec<_> = map.0.iter().filter(|e| e.0.starts_with(&prefix)).collect();
    map.0.prefix_iter(&prefix).collect::<Vec<_>>() == expected
}

#[quickcheck]
fn prefix_iter_mut_agrees(map: Dense, prefix: Key) -> bool {
    let mut map = map.0;
    let expected: Vec<_> =
        map.prefix_iter(&prefix.0).map(|(k, v)| (k, *v)).collect();
    map.prefix_iter_mut(&prefix.0).map(|(k, v)| (k, *v)).collect::<Vec<_>>() == expected
}

#[quickcheck]
fn wildcard_iter_yields_matching_keys(map: Dense, key: Key, mask: u32) -> bool {
    let pattern = pattern(&key.0, mask);

    let expected: Vec<_> = map.0.iter().filter(|e| matches(&e.0, &pattern)).collect();
    map.0.wildcard_iter(&pattern).collect::<Vec<_>>() == expected
}

#[quickcheck]
fn wildcard_iter_finds_stored_key(map: Dense, index: usize, mask: u32) -> TestResult {
    if map.0.is_empty() { return TestResult::discard(); }

    let key = map.0.keys().nth(index % map.0.len()).unwrap();
    let pattern = pattern(&key, mask);

    TestResult::from_bool(map.0.wildcard_iter(&pattern).any(|e| e.0 == key))
}

#[quickcheck]
fn wildcard_iter_mut_agrees(map: Dense, key: Key, mask: u32) -> bool {
    let mut map = map.0;
    let pattern = pattern(&key.0, mask);
    let expected: Vec<_> = map.wildcard_iter(&pattern).map(|(k, v)| (k, *v)).collect();
    map.wildcard_iter_mut(&pattern).map(|(k, v)| (k, *v)).collect::<Vec<_>>() == expected
}

#[quickcheck]
fn longest_prefix_is_longest_stored_prefix(map: Dense, query: Key) -> bool {
    let expected = map.0.keys()
        .filter(|key| query.0.starts_with(key.as_str()))
        .max_by_key(|key| key.len())
        .unwrap_or_default();

    map.0.longest_prefix(&query.0) == expected
}

#[quickcheck]
fn eq_ignores_insertion_order(entries: Vec<(Key, u16)>) -> bool {
    let forward: Map<u16> = entries.iter().map(|e| (&e.0 .0, e.1)).collect();
    let backward: Map<u16> = entries.iter().rev().map(|e| (&e.0 .0, e.1)).collect();

    let mut last = Map::new();
    for &(ref key, value) in entries.iter().rev() { last.entry(&key.0).or_insert(value); }

    forward.keys().collect::<Vec<_>>() == backward.keys().collect::<Vec<_>>() && forward == last
}

#[quickcheck]
fn cmp_agrees_with_entry_vecs(l: Dense, r: Dense) -> bool {
    let lv: Vec<_> = l.0.iter().collect();
    let rv: Vec<_> = r.0.iter().collect();
    Ord::cmp(&l.0, &r.0) == lv.cmp(&rv) && (l.0 == r.0) == (lv == rv)
}

#[quickcheck]
fn set_agrees_with_map_keys(map: Dense) -> bool {
    let set: tst::Set = map.0.keys().collect();
    set.len() == map.0.len() && set.iter().eq(map.0.keys())
}
