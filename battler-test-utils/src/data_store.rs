use std::sync::LazyLock;

use ahash::{
    HashMap,
    HashMapExt,
};
use anyhow::Result;
use battler_data::{
    AbilityData,
    DataStore,
    Id,
    Identifiable,
    ItemData,
    LocalDataStore,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// Directory of the data fixtures shared by tests across the workspace.
pub fn test_data_dir() -> String {
    format!("{}/data", env!("CARGO_MANIFEST_DIR"))
}

/// Directory of the set catalog fixtures shared by tests across the workspace.
pub fn test_sets_dir() -> String {
    format!("{}/data/sets", env!("CARGO_MANIFEST_DIR"))
}

/// A [`LocalDataStore`] over the shared test fixtures, loaded once per test binary.
pub fn static_local_data_store() -> &'static LocalDataStore {
    static DATA: LazyLock<LocalDataStore> = LazyLock::new(|| {
        LocalDataStore::new(test_data_dir()).expect("failed to load test data fixtures")
    });
    &DATA
}

/// Wrapper around a [`LocalDataStore`] for testing.
///
/// Allows fake values to be inserted exclusively for the test. Fake values shadow local data with
/// the same ID.
pub struct TestDataStore {
    local: LocalDataStore,
    fake_moves: HashMap<Id, MoveData>,
    fake_species: HashMap<Id, SpeciesData>,
}

impl TestDataStore {
    /// Creates a data store over the shared test fixtures.
    pub fn new() -> Result<Self> {
        Ok(Self {
            local: LocalDataStore::new(test_data_dir())?,
            fake_moves: HashMap::new(),
            fake_species: HashMap::new(),
        })
    }

    pub fn add_fake_move(&mut self, move_data: MoveData) {
        self.fake_moves.insert(move_data.id(), move_data);
    }

    pub fn add_fake_species(&mut self, species: SpeciesData) {
        self.fake_species.insert(species.id(), species);
    }

    fn merged_ids<T>(
        mut ids: Vec<Id>,
        fakes: &HashMap<Id, T>,
        filter: &dyn Fn(&T) -> bool,
    ) -> Vec<Id> {
        ids.retain(|id| !fakes.contains_key(id));
        ids.extend(
            fakes
                .iter()
                .filter(|(_, data)| filter(data))
                .map(|(id, _)| id.clone()),
        );
        ids.sort();
        ids
    }
}

impl DataStore for TestDataStore {
    fn all_species_ids(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Vec<Id>> {
        Ok(Self::merged_ids(
            self.local.all_species_ids(filter)?,
            &self.fake_species,
            filter,
        ))
    }

    fn all_move_ids(&self, filter: &dyn Fn(&MoveData) -> bool) -> Result<Vec<Id>> {
        Ok(Self::merged_ids(
            self.local.all_move_ids(filter)?,
            &self.fake_moves,
            filter,
        ))
    }

    fn all_ability_ids(&self, filter: &dyn Fn(&AbilityData) -> bool) -> Result<Vec<Id>> {
        self.local.all_ability_ids(filter)
    }

    fn all_item_ids(&self, filter: &dyn Fn(&ItemData) -> bool) -> Result<Vec<Id>> {
        self.local.all_item_ids(filter)
    }

    fn get_type_chart(&self) -> Result<TypeChart> {
        self.local.get_type_chart()
    }

    fn get_ability(&self, id: &Id) -> Result<Option<AbilityData>> {
        self.local.get_ability(id)
    }

    fn get_item(&self, id: &Id) -> Result<Option<ItemData>> {
        self.local.get_item(id)
    }

    fn get_move(&self, id: &Id) -> Result<Option<MoveData>> {
        match self.fake_moves.get(id) {
            Some(move_data) => Ok(Some(move_data.clone())),
            None => self.local.get_move(id),
        }
    }

    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>> {
        match self.fake_species.get(id) {
            Some(species) => Ok(Some(species.clone())),
            None => self.local.get_species(id),
        }
    }
}
