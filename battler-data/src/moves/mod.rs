mod accuracy;
mod move_category;
mod move_data;
mod move_flag;
mod multihit_type;

pub use accuracy::Accuracy;
pub use move_category::MoveCategory;
pub use move_data::{
    MoveData,
    SecondaryEffectData,
};
pub use move_flag::MoveFlag;
pub use multihit_type::MultihitType;
