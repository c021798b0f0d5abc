extern crate quickcheck;

use compare::Compare;
use self::quickcheck::{Arbitrary, Gen};
use std::default::Default;
use super::{Map, Set};

fn non_empty<V>(entry: &(String, V)) -> bool { !entry.0.is_empty() }

impl<V, C> Arbitrary for Map<V, C>
    where V: Arbitrary, C: 'static + Clone + Compare<char> + Default + Send {

    fn arbitrary(gen: &mut Gen) -> Self {
        Vec::<(String, V)>::arbitrary(gen).into_iter().filter(non_empty).collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let vec: Vec<(String, V)> = self.clone().into_iter().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().filter(non_empty).collect()))
    }
}

impl<C> Arbitrary for Set<C> where C: 'static + Clone + Compare<char> + Default + Send {
    fn arbitrary(gen: &mut Gen) -> Self {
        Vec::<String>::arbitrary(gen).into_iter().filter(|key| !key.is_empty()).collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let vec: Vec<String> = self.clone().into_iter().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().filter(|key| !key.is_empty()).collect()))
    }
}
