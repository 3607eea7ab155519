mod hash;
mod id;

pub use hash::{
    FastHashMap,
    FastHashSet,
};
pub use id::{
    Id,
    Identifiable,
};
