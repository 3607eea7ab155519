use anyhow::Result;

use crate::{
    AbilityData,
    Id,
    ItemData,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// Collection of tables for all resource data.
///
/// This trait can be implemented for different data sources, such as an external database or disk.
///
/// This collection is used for "raw lookup" of resources by ID. ID enumeration must be returned in
/// sorted order, so that callers consuming random numbers over the result stay deterministic.
pub trait DataStore: Send + Sync {
    /// Gets all species IDs, applying the given filter on the underlying data.
    fn all_species_ids(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Vec<Id>>;
    /// Gets all move IDs, applying the given filter on the underlying data.
    fn all_move_ids(&self, filter: &dyn Fn(&MoveData) -> bool) -> Result<Vec<Id>>;
    /// Gets all ability IDs, applying the given filter on the underlying data.
    fn all_ability_ids(&self, filter: &dyn Fn(&AbilityData) -> bool) -> Result<Vec<Id>>;
    /// Gets all item IDs, applying the given filter on the underlying data.
    fn all_item_ids(&self, filter: &dyn Fn(&ItemData) -> bool) -> Result<Vec<Id>>;

    /// Gets the type chart.
    fn get_type_chart(&self) -> Result<TypeChart>;

    /// Gets an ability by ID.
    fn get_ability(&self, id: &Id) -> Result<Option<AbilityData>>;
    /// Gets an item by ID.
    fn get_item(&self, id: &Id) -> Result<Option<ItemData>>;
    /// Gets a move by ID.
    fn get_move(&self, id: &Id) -> Result<Option<MoveData>>;
    /// Gets a species by ID.
    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>>;
}

/// An extension of [`DataStore`] for looking up resources by name.
pub trait DataStoreByName: DataStore {
    /// Gets an ability by name.
    fn get_ability_by_name(&self, name: &str) -> Result<Option<AbilityData>> {
        self.get_ability(&Id::from(name))
    }
    /// Gets an item by name.
    fn get_item_by_name(&self, name: &str) -> Result<Option<ItemData>> {
        self.get_item(&Id::from(name))
    }
    /// Gets a move by name.
    fn get_move_by_name(&self, name: &str) -> Result<Option<MoveData>> {
        self.get_move(&Id::from(name))
    }
    /// Gets a species by name.
    fn get_species_by_name(&self, name: &str) -> Result<Option<SpeciesData>> {
        self.get_species(&Id::from(name))
    }
}

impl<T> DataStoreByName for T where T: DataStore + ?Sized {}
