use log::trace;

use crate::mapping::{Mapping, populated};

pub fn keys<'a, M, P>(provide: P) -> Vec<M::Key>
  where M: Mapping + 'a, M::Key: Clone, P: Into<Option<&'a M>>, {
  let map = match populated(provide.into()) {
    Some(map) => map,
    None => return Vec::new()
  };

  let mut keys = Vec::with_capacity(map.len());
  keys.extend(map.entries().map(|(key, _)| key.clone()));
  trace!("keys: extracted {} keys", keys.len());
  keys
}

// Duplicate values are kept
pub fn values<'a, M, P>(provide: P) -> Vec<M::Value>
  where M: Mapping + 'a, M::Value: Clone, P: Into<Option<&'a M>>, {
  let map = match populated(provide.into()) {
    Some(map) => map,
    None => return Vec::new()
  };

  let mut values = Vec::with_capacity(map.len());
  values.extend(map.entries().map(|(_, value)| value.clone()));
  trace!("values: extracted {} values", values.len());
  values
}
