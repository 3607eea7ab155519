use battler_data::Type;
use serde::{
    Deserialize,
    Serialize,
};

use crate::sets::Role;

/// A template for a procedurally built set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomSetData {
    /// The role the set plays.
    pub role: Role,
    /// Moves the set may pick from.
    pub movepool: Vec<String>,
    /// Tera types the set may pick from.
    #[serde(default)]
    pub tera_types: Vec<Type>,
}

/// All random set templates for a species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomSpeciesSets {
    /// Level every set of the species uses, overriding the tier-based level.
    pub level: Option<u8>,
    pub sets: Vec<RandomSetData>,
}

#[cfg(test)]
mod random_set_test {
    use battler_data::Type;

    use crate::sets::{
        RandomSpeciesSets,
        Role,
    };

    #[test]
    fn deserializes_species_sets() {
        let sets: RandomSpeciesSets = serde_json::from_str(
            r#"{
                "level": 77,
                "sets": [
                    {
                        "role": "Fast Support",
                        "movepool": ["Earthquake", "Stealth Rock"],
                        "tera_types": ["Ground", "Steel"]
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(sets.level, Some(77));
        assert_eq!(sets.sets[0].role, Role::FastSupport);
        assert_eq!(sets.sets[0].tera_types, vec![Type::Ground, Type::Steel]);
    }
}
