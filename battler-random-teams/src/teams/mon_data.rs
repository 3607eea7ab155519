use battler_data::{
    Gender,
    Nature,
    StatTable,
    Type,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::sets::Role;

/// A single generated Mon, ready to be validated and brought into a battle.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonData {
    /// Nickname.
    pub name: String,
    /// Species and forme.
    pub species: String,
    /// Gender, if fixed at generation time.
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub shiny: bool,
    pub level: u8,
    /// Moves, in the order they were chosen.
    pub moves: Vec<String>,
    pub ability: String,
    /// Held item, if any.
    #[serde(default)]
    pub item: Option<String>,
    pub evs: StatTable,
    pub ivs: StatTable,
    #[serde(default)]
    pub nature: Option<Nature>,
    #[serde(default)]
    pub happiness: Option<u8>,
    #[serde(default)]
    pub tera_type: Option<Type>,
    /// The role the Mon was built for, if it was procedurally built.
    #[serde(default)]
    pub role: Option<Role>,
}

/// A generated team.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamData {
    pub members: Vec<MonData>,
}
