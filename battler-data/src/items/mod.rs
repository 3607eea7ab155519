mod item_data;
mod item_flag;

pub use item_data::ItemData;
pub use item_flag::ItemFlag;
