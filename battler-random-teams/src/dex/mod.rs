mod common;
mod dex;

pub use common::{
    AbilityDex,
    AbilityLookup,
    ItemDex,
    ItemLookup,
    MoveDex,
    MoveLookup,
    ResourceDex,
    ResourceLookup,
    SpeciesDex,
    SpeciesLookup,
};
pub use dex::Dex;
