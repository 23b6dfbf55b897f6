use log::trace;

use crate::mapping::Mapping;

// Shallow: shared handles (Rc, Arc, references) are copied as handles
pub fn copy<'a, M, P>(provide: P) -> M
  where M: Mapping + Default + 'a, M::Key: Clone, M::Value: Clone, P: Into<Option<&'a M>>, {
  // Present maps, empty or not, seed the copy so hash maps keep their hasher
  let map = match provide.into() {
    Some(map) => map,
    None => {
      trace!("Absent container, treating as empty");
      return M::default();
    }
  };

  let mut copied = map.empty_like();
  for (key, value) in map.entries() {
    copied.insert(key.clone(), value.clone());
  }

  trace!("copy: copied {} entries", copied.len());
  copied
}
