use log::trace;

use crate::mapping::{Mapping, populated};

pub fn keys_into<'a, M, P>(provide: P, key_buf: &mut Vec<M::Key>) -> usize
  where M: Mapping + 'a, M::Key: Clone, P: Into<Option<&'a M>>, {
  key_buf.clear();
  if let Some(map) = populated(provide.into()) {
    key_buf.reserve(map.len());
    key_buf.extend(map.entries().map(|(key, _)| key.clone()));
  }
  trace!("keys_into: buffered {} keys", key_buf.len());
  key_buf.len()
}

pub fn values_into<'a, M, P>(provide: P, value_buf: &mut Vec<M::Value>) -> usize
  where M: Mapping + 'a, M::Value: Clone, P: Into<Option<&'a M>>, {
  value_buf.clear();
  if let Some(map) = populated(provide.into()) {
    value_buf.reserve(map.len());
    value_buf.extend(map.entries().map(|(_, value)| value.clone()));
  }
  trace!("values_into: buffered {} values", value_buf.len());
  value_buf.len()
}

// Iterates a snapshot held in key_buf, so the map may be mutated mid-iteration
pub fn keys_iter<'b, K, M>(map: &M, key_buf: &'b mut Vec<K>) -> impl Iterator<Item=K> + 'b
  where M: Mapping<Key=K>, K: Clone, {
  keys_into(map, key_buf);
  key_buf.iter().cloned()
}
