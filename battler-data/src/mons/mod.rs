mod gender;
mod nature;
mod species_data;
mod stat;
mod tier;
mod r#type;

pub use gender::Gender;
pub use nature::Nature;
pub use species_data::SpeciesData;
pub use stat::{
    PartialStatTable,
    Stat,
    StatTable,
};
pub use tier::Tier;
pub use r#type::{
    Type,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};
