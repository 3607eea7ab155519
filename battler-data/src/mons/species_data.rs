use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Gender,
    Id,
    Identifiable,
    StatTable,
    Tier,
    Type,
};

fn default_gender_ratio() -> u8 {
    127
}

/// Data about a particular species.
///
/// Species data is common to all Mons of a given species. Data about a specific Mon (such as its
/// nature, stats, or moves) does not belong here.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SpeciesData {
    /// The name of the species plus any forme name.
    ///
    /// Should be equal to [base_species][`SpeciesData::base_species`] +
    /// [forme][`SpeciesData::forme`].
    pub name: String,
    /// The base species name, which excludes any forme name.
    pub base_species: String,
    /// The forme name, if it exists.
    pub forme: Option<String>,
    /// National dex number.
    pub num: u16,
    /// The generation the species was introduced in.
    #[serde(default)]
    pub generation: u8,
    /// The primary type of the species.
    pub primary_type: Type,
    /// The secondary type of the species, if it exists.
    pub secondary_type: Option<Type>,
    /// Abilities.
    pub abilities: Vec<String>,
    /// Hidden ability, if it exists.
    pub hidden_ability: Option<String>,
    /// Is the hidden ability unobtainable?
    #[serde(default)]
    pub unreleased_hidden: bool,
    /// Gender ratio.
    ///
    /// 0 is male only, 254 is female only, 255 is genderless, and anything else is mixed.
    #[serde(default = "default_gender_ratio")]
    pub gender_ratio: u8,
    /// Base stats.
    pub base_stats: StatTable,
    /// Competitive tier.
    #[serde(default)]
    pub tier: Tier,
    /// Moves this species can learn.
    #[serde(default)]
    pub learnset: Vec<String>,

    /// Evolutions.
    #[serde(default)]
    pub evos: Vec<String>,
    /// Cosmetic formes, which have no impact on species data.
    #[serde(default)]
    pub cosmetic_formes: Vec<String>,
    /// Is this forme available only in battles?
    #[serde(default)]
    pub battle_only_forme: bool,
    /// Items required for transforming into this forme.
    #[serde(default)]
    pub required_items: Vec<String>,
    /// Move required for transforming into this forme.
    pub required_move: Option<String>,
    /// The species and forme name this forme transforms from.
    pub changes_from: Option<String>,
    /// Marks species that are not part of the standard game, such as "Past" or "CAP".
    pub nonstandard: Option<String>,
}

impl SpeciesData {
    /// The species types, primary first.
    pub fn types(&self) -> Vec<Type> {
        match self.secondary_type {
            Some(secondary) => vec![self.primary_type, secondary],
            None => vec![self.primary_type],
        }
    }

    /// Checks if the species has the given type.
    pub fn has_type(&self, typ: Type) -> bool {
        self.primary_type == typ || self.secondary_type == Some(typ)
    }

    /// All abilities the species can legally have, in slot order.
    ///
    /// An unreleased hidden ability is excluded.
    pub fn legal_abilities(&self) -> Vec<String> {
        let mut abilities = self.abilities.clone();
        if let Some(hidden) = &self.hidden_ability {
            if !self.unreleased_hidden && !abilities.contains(hidden) {
                abilities.push(hidden.clone());
            }
        }
        abilities
    }

    /// Checks if the species is not fully evolved.
    pub fn not_fully_evolved(&self) -> bool {
        !self.evos.is_empty()
    }

    /// The gender every Mon of this species has, if fixed.
    pub fn fixed_gender(&self) -> Option<Gender> {
        Gender::fixed_by_ratio(self.gender_ratio)
    }

    /// Type combination key, with types sorted by name so dual types share a key in either order.
    pub fn type_combination(&self) -> String {
        let mut types = self
            .types()
            .into_iter()
            .map(|typ| typ.to_string())
            .collect::<Vec<_>>();
        types.sort();
        types.join(",")
    }
}

impl Identifiable for SpeciesData {
    fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }
}
