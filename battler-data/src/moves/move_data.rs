use ahash::HashSet;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Accuracy,
    Id,
    Identifiable,
    MoveCategory,
    MoveFlag,
    MultihitType,
    Type,
};

/// Data about a secondary effect that occurs after a move is used.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryEffectData {
    /// Percent chance of the effect occurring.
    pub chance: Option<u8>,
}

/// Data about a particular move.
///
/// Only the properties that affect how a move is judged for a moveset are tracked here.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move category.
    pub category: MoveCategory,
    /// Move type.
    pub primary_type: Type,
    /// Base power.
    #[serde(default)]
    pub base_power: u32,
    /// Base accuracy.
    #[serde(default)]
    pub accuracy: Accuracy,
    /// Move priority.
    #[serde(default)]
    pub priority: i8,
    /// Move flags.
    #[serde(default)]
    pub flags: HashSet<MoveFlag>,

    /// Static damage dealt.
    pub damage: Option<u16>,
    /// Damage is calculated dynamically, such as from the user's level or the target's HP.
    #[serde(default)]
    pub variable_damage: bool,
    /// Base power is calculated dynamically.
    #[serde(default)]
    pub variable_power: bool,
    /// Number of hits.
    pub multihit: Option<MultihitType>,
    /// The percentage of damage dealt for recoil.
    pub recoil_percent: Option<u8>,
    /// The percentage of damage dealt that heals the user.
    pub drain_percent: Option<u8>,
    /// Secondary effects.
    #[serde(default)]
    pub secondary_effects: Vec<SecondaryEffectData>,
    /// Has a side effect that Sheer Force removes, even without a listed secondary effect.
    #[serde(default)]
    pub has_sheer_force: bool,

    /// The generation the move was introduced in.
    #[serde(default)]
    pub generation: u8,
    /// Marks moves that are not part of the standard game.
    pub nonstandard: Option<String>,
}

impl MoveData {
    /// Checks if the move deals a fixed amount of damage, regardless of attacking stats.
    pub fn fixed_damage(&self) -> bool {
        self.damage.is_some() || self.variable_damage
    }

    /// Checks if the move is strong enough to be considered an attack in a moveset.
    pub fn damaging(&self) -> bool {
        self.base_power > 30 || self.multihit.is_some() || self.variable_power
    }

    /// The chance of the first secondary effect, if any.
    pub fn secondary_chance(&self) -> Option<u8> {
        self.secondary_effects.first().and_then(|effect| effect.chance)
    }

    /// Checks if the move is a Z-Move or Max Move.
    pub fn special_battle_move(&self) -> bool {
        self.flags.contains(&MoveFlag::Z) || self.flags.contains(&MoveFlag::Max)
    }
}

impl Identifiable for MoveData {
    fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }
}
