use std::collections::{BTreeMap, HashMap};
use std::collections::{btree_map, hash_map};
use std::hash::{BuildHasher, Hash};
use log::trace;

// Traversal order is whatever the underlying container gives
pub trait Mapping {
  type Key;
  type Value;
  type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)> where Self: 'a;

  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  fn entries(&self) -> Self::Iter<'_>;

  // Same hasher, room for self.len() entries
  fn empty_like(&self) -> Self;

  fn insert(&mut self, key: Self::Key, value: Self::Value);
}

impl<K, V, S> Mapping for HashMap<K, V, S>
  where K: Eq + Hash, S: BuildHasher + Clone, {
  type Key = K;
  type Value = V;
  type Iter<'a> = hash_map::Iter<'a, K, V> where Self: 'a;

  fn len(&self) -> usize {
    HashMap::len(self)
  }

  fn entries(&self) -> Self::Iter<'_> {
    HashMap::iter(self)
  }

  fn empty_like(&self) -> Self {
    HashMap::with_capacity_and_hasher(HashMap::len(self), self.hasher().clone())
  }

  fn insert(&mut self, key: K, value: V) {
    HashMap::insert(self, key, value);
  }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
  type Key = K;
  type Value = V;
  type Iter<'a> = btree_map::Iter<'a, K, V> where Self: 'a;

  fn len(&self) -> usize {
    BTreeMap::len(self)
  }

  fn entries(&self) -> Self::Iter<'_> {
    BTreeMap::iter(self)
  }

  // Trees don't preallocate
  fn empty_like(&self) -> Self {
    BTreeMap::new()
  }

  fn insert(&mut self, key: K, value: V) {
    BTreeMap::insert(self, key, value);
  }
}

// Absent and empty both come back as None
pub(crate) fn populated<'a, M: Mapping>(map: Option<&'a M>) -> Option<&'a M> {
  match map {
    None => {
      trace!("Absent container, treating as empty");
      None
    },
    Some(map) if map.is_empty() => None,
    Some(map) => Some(map)
  }
}
