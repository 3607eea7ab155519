use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Id,
    Identifiable,
};

/// Data about a particular ability.
///
/// Every Mon has one ability. The rating estimates how useful the ability is in general, from
/// harmful (negative) to extremely useful (5).
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AbilityData {
    /// Name of the ability.
    pub name: String,
    /// General usefulness rating.
    #[serde(default)]
    pub rating: f32,
    /// The generation the ability was introduced in.
    #[serde(default)]
    pub generation: u8,
    /// Marks abilities that are not part of the standard game.
    pub nonstandard: Option<String>,
}

impl Identifiable for AbilityData {
    fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }
}
