mod doubles;
mod priority;
mod singles;

use anyhow::Result;
use battler_data::{
    Id,
    MoveCategory,
    Type,
};
use battler_prng::PseudoRandomNumberGenerator;
use indexmap::IndexSet;
use log::trace;

use crate::{
    dex::Dex,
    moves::MoveCounter,
    teams::BuildContext,
};

/// The outcome of an item rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelection {
    /// Hold the named item.
    Item(String),
    /// Deliberately hold nothing.
    Nothing,
}

impl ItemSelection {
    fn item<S>(name: S) -> Option<Self>
    where
        S: Into<String>,
    {
        Some(Self::Item(name.into()))
    }

    /// The held item, if any.
    pub fn into_item(self) -> Option<String> {
        match self {
            Self::Item(item) => Some(item),
            Self::Nothing => None,
        }
    }
}

/// Everything an item rule can look at.
pub struct ItemCheck<'a, 'd> {
    pub dex: &'a Dex<'d>,
    pub moves: &'a IndexSet<Id>,
    pub counter: &'a MoveCounter,
    pub context: &'a BuildContext<'a>,
    pub ability: &'a str,
}

impl ItemCheck<'_, '_> {
    fn has_move(&self, id: &str) -> bool {
        self.moves.contains(id)
    }

    fn has_any_move(&self, ids: &[&str]) -> bool {
        ids.iter().any(|id| self.has_move(id))
    }

    fn physical(&self) -> usize {
        self.counter.category(MoveCategory::Physical)
    }

    fn special(&self) -> usize {
        self.counter.category(MoveCategory::Special)
    }

    fn damaging(&self) -> usize {
        self.counter.damaging_moves.len()
    }

    fn effectiveness(&self, typ: Type) -> i8 {
        self.dex.effectiveness(typ, &self.context.types)
    }

    fn speed_between(&self, min: u16, max: u16) -> bool {
        let speed = self.context.species.base_stats.spe;
        speed >= min && speed <= max
    }

    fn defensive_total(&self) -> u16 {
        let stats = &self.context.species.base_stats;
        stats.hp + stats.def + stats.spd
    }
}

/// Selects a held item for a random set.
///
/// Rules run in priority order. Doubles rules only run in doubles formats. The first rule that
/// matches decides the item.
pub fn select_item(
    prng: &mut dyn PseudoRandomNumberGenerator,
    check: &ItemCheck,
) -> Result<Option<String>> {
    let mut selection = priority::priority_item(prng, check);
    if selection.is_none() && check.context.doubles {
        selection = doubles::doubles_item(prng, check);
    }
    if selection.is_none() {
        selection = singles::singles_item(prng, check);
    }
    let selection = selection.unwrap_or_else(|| {
        ItemSelection::Item(
            if check.context.doubles {
                "Sitrus Berry"
            } else {
                "Leftovers"
            }
            .to_owned(),
        )
    });

    let item = match selection.into_item() {
        Some(item)
            if item == "Leftovers"
                && check.context.has_type(Type::Poison)
                && check.context.tera_type == Type::Poison =>
        {
            Some("Black Sludge".to_owned())
        }
        item => item,
    };
    trace!(
        "{} holds {}",
        check.context.species.name,
        item.as_deref().unwrap_or("nothing")
    );
    Ok(item)
}
