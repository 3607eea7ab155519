mod factory_set;
mod random_set;
mod repository;
mod role;

pub use factory_set::{
    FactorySet,
    FactorySpecies,
    OneOrMany,
};
pub use random_set::{
    RandomSetData,
    RandomSpeciesSets,
};
pub use repository::{
    FactoryTierSets,
    SetCatalog,
    SetRepository,
    SpeciesSetTable,
};
pub use role::Role;
