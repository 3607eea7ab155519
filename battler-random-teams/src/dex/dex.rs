use std::cell::OnceCell;

use anyhow::Result;
use battler_data::{
    DataStore,
    Id,
    MoveCategory,
    Type,
    TypeChart,
};

use crate::dex::{
    AbilityDex,
    ItemDex,
    MoveDex,
    SpeciesDex,
};

/// Collection of all resources used for generating teams.
///
/// Resources are cached after their first lookup, so a single [`Dex`] should be reused for every
/// team generated from the same data.
pub struct Dex<'d> {
    data: &'d dyn DataStore,
    type_chart: TypeChart,
    status_moves: OnceCell<Vec<Id>>,

    pub species: SpeciesDex<'d>,
    pub moves: MoveDex<'d>,
    pub abilities: AbilityDex<'d>,
    pub items: ItemDex<'d>,
}

impl<'d> Dex<'d> {
    /// Creates a new dex over the data store.
    pub fn new(data: &'d dyn DataStore) -> Result<Self> {
        let type_chart = data.get_type_chart()?;
        Ok(Self {
            data,
            type_chart,
            status_moves: OnceCell::new(),
            species: SpeciesDex::new(data),
            moves: MoveDex::new(data),
            abilities: AbilityDex::new(data),
            items: ItemDex::new(data),
        })
    }

    /// The underlying data store.
    pub fn data(&self) -> &'d dyn DataStore {
        self.data
    }

    /// The type chart.
    pub fn type_chart(&self) -> &TypeChart {
        &self.type_chart
    }

    /// Combined effectiveness of an attacking type against defending types.
    pub fn effectiveness(&self, attacking: Type, defending: &[Type]) -> i8 {
        self.type_chart.effectiveness(attacking, defending)
    }

    /// Checks if the defending types are immune to the attacking type.
    pub fn immune(&self, attacking: Type, defending: &[Type]) -> bool {
        self.type_chart.immune(attacking, defending)
    }

    /// Sorted IDs of every standard status move.
    pub fn status_moves(&self) -> Result<&[Id]> {
        if let Some(ids) = self.status_moves.get() {
            return Ok(ids);
        }
        let ids = self.data.all_move_ids(&|data| {
            data.category == MoveCategory::Status && data.nonstandard.is_none()
        })?;
        Ok(self.status_moves.get_or_init(|| ids))
    }
}
