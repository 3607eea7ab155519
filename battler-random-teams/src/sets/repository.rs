use std::{
    env,
    fs::File,
    path::Path,
};

use anyhow::{
    Context,
    Result,
};
use battler_data::{
    Id,
    Tier,
};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use crate::{
    error::general_error,
    sets::{
        FactorySet,
        FactorySpecies,
        RandomSpeciesSets,
    },
};

/// Random set templates, keyed by species.
pub type SpeciesSetTable = IndexMap<Id, RandomSpeciesSets>;

/// Curated sets for a single pool, keyed by species.
pub type FactoryTierSets = IndexMap<Id, FactorySpecies>;

/// Read-only source of set templates.
///
/// Every table preserves the order it was authored in, which keeps species draws deterministic.
pub trait SetRepository {
    /// Random set templates for singles or doubles.
    fn random_sets(&self, doubles: bool) -> &SpeciesSetTable;

    /// Battle Factory sets for a tier, if the tier has any.
    fn factory_sets(&self, tier: Tier) -> Option<&FactoryTierSets>;

    /// Battle Stadium Singles factory sets.
    fn bss_factory_sets(&self) -> &FactoryTierSets;

    /// Preset sets, keyed by species.
    fn preset_sets(&self) -> &IndexMap<Id, Vec<FactorySet>>;
}

/// An implementation of [`SetRepository`] that reads all sets from JSON files on disk.
///
/// Missing files produce empty tables. Doubles sets fall back to singles sets.
#[derive(Debug, Default, Clone)]
pub struct SetCatalog {
    pub random_sets: SpeciesSetTable,
    pub random_doubles_sets: Option<SpeciesSetTable>,
    pub factory_sets: IndexMap<Tier, FactoryTierSets>,
    pub bss_factory_sets: FactoryTierSets,
    pub preset_sets: IndexMap<Id, Vec<FactorySet>>,
}

impl SetCatalog {
    /// Singles random sets file name.
    pub const RANDOM_SETS_FILE: &str = "random-sets.json";
    /// Doubles random sets file name.
    pub const RANDOM_DOUBLES_SETS_FILE: &str = "random-doubles-sets.json";
    /// Battle Factory sets file name.
    pub const FACTORY_SETS_FILE: &str = "factory-sets.json";
    /// BSS Factory sets file name.
    pub const BSS_FACTORY_SETS_FILE: &str = "bss-factory-sets.json";
    /// Preset sets file name.
    pub const PRESET_SETS_FILE: &str = "preset-sets.json";

    /// Creates a new catalog that reads from the given root directory.
    pub fn new(root: String) -> Result<Self> {
        let root = Path::new(&root);
        if !root.is_dir() {
            return Err(general_error(format!(
                "Root directory for SetCatalog ({}) does not exist",
                root.display()
            )));
        }
        Ok(Self {
            random_sets: Self::read_file(root, Self::RANDOM_SETS_FILE)?.unwrap_or_default(),
            random_doubles_sets: Self::read_file(root, Self::RANDOM_DOUBLES_SETS_FILE)?,
            factory_sets: Self::read_file(root, Self::FACTORY_SETS_FILE)?.unwrap_or_default(),
            bss_factory_sets: Self::read_file(root, Self::BSS_FACTORY_SETS_FILE)?
                .unwrap_or_default(),
            preset_sets: Self::read_file(root, Self::PRESET_SETS_FILE)?.unwrap_or_default(),
        })
    }

    /// Creates a new catalog that reads from the root directory at the given environment
    /// variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    fn read_file<T: DeserializeOwned>(root: &Path, file: &str) -> Result<Option<T>> {
        let path = root.join(file);
        if !path.is_file() {
            return Ok(None);
        }
        let data = serde_json::from_reader(
            File::open(&path).context(format!("{} could not be opened", path.display()))?,
        )
        .context(format!("failed to parse sets from {}", path.display()))?;
        Ok(Some(data))
    }
}

impl SetRepository for SetCatalog {
    fn random_sets(&self, doubles: bool) -> &SpeciesSetTable {
        match (doubles, &self.random_doubles_sets) {
            (true, Some(sets)) => sets,
            _ => &self.random_sets,
        }
    }

    fn factory_sets(&self, tier: Tier) -> Option<&FactoryTierSets> {
        self.factory_sets.get(&tier)
    }

    fn bss_factory_sets(&self) -> &FactoryTierSets {
        &self.bss_factory_sets
    }

    fn preset_sets(&self) -> &IndexMap<Id, Vec<FactorySet>> {
        &self.preset_sets
    }
}
