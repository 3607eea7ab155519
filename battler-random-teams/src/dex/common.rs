use std::{
    cell::RefCell,
    marker::PhantomData,
    rc::Rc,
};

use anyhow::Result;
use battler_data::{
    AbilityData,
    DataStore,
    FastHashMap,
    Id,
    ItemData,
    MoveData,
    SpeciesData,
};

use crate::error::{
    WrapOptionError,
    WrapResultError,
};

/// Trait for looking up a single kind of resource by ID.
///
/// Lookup methods are only called once for a given ID. Afterwards, the result (including a miss) is
/// cached for future lookups.
pub trait ResourceLookup<T> {
    /// Name of the resource kind, used in error messages.
    const KIND: &'static str;

    /// Looks up a resource by ID.
    fn lookup(data: &dyn DataStore, id: &Id) -> Result<Option<T>>;
}

/// A collection of resources indexed by ID.
pub struct ResourceDex<'d, T, L> {
    data: &'d dyn DataStore,
    cache: RefCell<FastHashMap<Id, Option<Rc<T>>>>,
    phantom: PhantomData<L>,
}

impl<'d, T, L> ResourceDex<'d, T, L>
where
    L: ResourceLookup<T>,
{
    /// Creates a new collection of resources.
    pub fn new(data: &'d dyn DataStore) -> Self {
        Self {
            data,
            cache: RefCell::new(FastHashMap::default()),
            phantom: PhantomData,
        }
    }

    /// Retrieves a resource by name, failing if it does not exist.
    pub fn get(&self, name: &str) -> Result<Rc<T>> {
        self.get_by_id(&Id::from(name))
    }

    /// Retrieves a resource by ID, failing if it does not exist.
    pub fn get_by_id(&self, id: &Id) -> Result<Rc<T>> {
        self.try_get_by_id(id)?
            .wrap_not_found_error(format_args!("{} {id}", L::KIND))
    }

    /// Retrieves a resource by name, if it exists.
    pub fn try_get(&self, name: &str) -> Result<Option<Rc<T>>> {
        self.try_get_by_id(&Id::from(name))
    }

    /// Retrieves a resource by ID, if it exists.
    pub fn try_get_by_id(&self, id: &Id) -> Result<Option<Rc<T>>> {
        if let Some(cached) = self.cache.borrow().get(id) {
            return Ok(cached.clone());
        }
        let resource = L::lookup(self.data, id)
            .wrap_error_with_format(format_args!("failed to look up {} {id}", L::KIND))?
            .map(Rc::new);
        self.cache.borrow_mut().insert(id.clone(), resource.clone());
        Ok(resource)
    }
}

/// Lookup for species.
pub struct SpeciesLookup;

impl ResourceLookup<SpeciesData> for SpeciesLookup {
    const KIND: &'static str = "species";
    fn lookup(data: &dyn DataStore, id: &Id) -> Result<Option<SpeciesData>> {
        data.get_species(id)
    }
}

/// Lookup for moves.
pub struct MoveLookup;

impl ResourceLookup<MoveData> for MoveLookup {
    const KIND: &'static str = "move";
    fn lookup(data: &dyn DataStore, id: &Id) -> Result<Option<MoveData>> {
        data.get_move(id)
    }
}

/// Lookup for abilities.
pub struct AbilityLookup;

impl ResourceLookup<AbilityData> for AbilityLookup {
    const KIND: &'static str = "ability";
    fn lookup(data: &dyn DataStore, id: &Id) -> Result<Option<AbilityData>> {
        data.get_ability(id)
    }
}

/// Lookup for items.
pub struct ItemLookup;

impl ResourceLookup<ItemData> for ItemLookup {
    const KIND: &'static str = "item";
    fn lookup(data: &dyn DataStore, id: &Id) -> Result<Option<ItemData>> {
        data.get_item(id)
    }
}

pub type SpeciesDex<'d> = ResourceDex<'d, SpeciesData, SpeciesLookup>;
pub type MoveDex<'d> = ResourceDex<'d, MoveData, MoveLookup>;
pub type AbilityDex<'d> = ResourceDex<'d, AbilityData, AbilityLookup>;
pub type ItemDex<'d> = ResourceDex<'d, ItemData, ItemLookup>;
