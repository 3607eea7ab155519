mod counter;
mod culling;
mod move_lists;
mod moveset;

pub use counter::{
    MoveCounter,
    MoveTag,
    TypeAdjustment,
    effective_type,
};
pub use culling::{
    MoveGroup,
    cull_move_pool,
    incompatible_moves,
    remove_from_pool,
};
pub use move_lists::*;
pub use moveset::MovesetBuilder;
