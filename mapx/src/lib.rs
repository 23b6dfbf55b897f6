mod buffered;
mod copy;
mod extract;
mod mapping;

pub use buffered::{keys_into, values_into, keys_iter};
pub use copy::copy;
pub use extract::{keys, values};
pub use mapping::Mapping;
