use battler_data::{
    Id,
    SpeciesData,
    Type,
};

use crate::{
    sets::Role,
    teams::TeamDetails,
};

/// Everything known about a Mon while its set is being built.
///
/// Shared by move, ability, and item selection.
#[derive(Debug, Clone)]
pub struct BuildContext<'a> {
    pub species: &'a SpeciesData,
    pub species_id: Id,
    pub types: Vec<Type>,
    /// Abilities the Mon may end up with, in slot order.
    pub abilities: Vec<String>,
    pub team_details: &'a TeamDetails,
    pub is_lead: bool,
    pub doubles: bool,
    pub tera_type: Type,
    pub role: Role,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        species: &'a SpeciesData,
        team_details: &'a TeamDetails,
        is_lead: bool,
        doubles: bool,
        tera_type: Type,
        role: Role,
    ) -> Self {
        Self {
            species,
            species_id: Id::from(species.name.as_str()),
            types: species.types(),
            abilities: species.legal_abilities(),
            team_details,
            is_lead,
            doubles,
            tera_type,
            role,
        }
    }

    /// Checks if the Mon may have the ability.
    pub fn has_ability(&self, name: &str) -> bool {
        self.abilities.iter().any(|ability| ability == name)
    }

    /// Checks if the Mon has the type.
    pub fn has_type(&self, typ: Type) -> bool {
        self.types.contains(&typ)
    }

    /// Checks if the Mon is the given species.
    pub fn is(&self, species_id: &str) -> bool {
        self.species_id == species_id
    }
}
