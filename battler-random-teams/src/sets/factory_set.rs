use battler_data::{
    Gender,
    Nature,
    PartialStatTable,
};
use battler_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use serde::{
    Deserialize,
    Serialize,
};

/// A value that is either fixed or chosen at random from alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// All possible values.
    pub fn values(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    /// Picks a value, consuming randomness only if there are alternatives to pick from.
    pub fn sample(&self, prng: &mut dyn PseudoRandomNumberGenerator) -> Option<&T> {
        match self {
            Self::One(value) => Some(value),
            Self::Many(values) => rand_util::sample_slice(prng, values),
        }
    }
}

/// A complete, curated set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorySet {
    /// Display name, defaulting to the base species.
    pub name: Option<String>,
    pub nickname: Option<String>,
    /// Species and forme.
    pub species: String,
    pub item: Option<OneOrMany<String>>,
    pub ability: Option<OneOrMany<String>>,
    pub nature: Option<OneOrMany<Nature>>,
    /// Move slots, each with one or more variants.
    pub moves: Vec<OneOrMany<String>>,
    #[serde(default)]
    pub evs: PartialStatTable,
    #[serde(default)]
    pub ivs: PartialStatTable,
    pub level: Option<u8>,
    pub gender: Option<Gender>,
    pub shiny: Option<bool>,
    pub happiness: Option<u8>,
}

/// Curated sets for a single species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorySpecies {
    /// Usage weight, used for weighted species draws.
    #[serde(default)]
    pub usage: u32,
    pub sets: Vec<FactorySet>,
}

#[cfg(test)]
mod factory_set_test {
    use assert_matches::assert_matches;
    use battler_data::Nature;
    use battler_test_utils::ControlledRandomNumberGenerator;

    use crate::sets::{
        FactorySet,
        OneOrMany,
    };

    #[test]
    fn deserializes_single_and_multiple_values() {
        let set: FactorySet = serde_json::from_str(
            r#"{
                "species": "Gliscor",
                "item": "Toxic Orb",
                "ability": ["Poison Heal"],
                "nature": ["Impish", "Careful"],
                "moves": [["Spikes", "Stealth Rock"], "Earthquake", "Protect", "Toxic"],
                "evs": {"hp": 244, "def": 248}
            }"#,
        )
        .unwrap();
        assert_matches!(set.item, Some(OneOrMany::One(item)) => assert_eq!(item, "Toxic Orb"));
        assert_matches!(set.nature, Some(OneOrMany::Many(natures)) => {
            assert_eq!(natures, vec![Nature::Impish, Nature::Careful]);
        });
        assert_eq!(set.moves[0].values().len(), 2);
        assert_eq!(set.moves[1].values(), ["Earthquake".to_owned()]);
        assert_eq!(set.evs.hp, Some(244));
        assert_eq!(set.evs.spe, None);
    }

    #[test]
    fn samples_only_between_alternatives() {
        let mut prng = ControlledRandomNumberGenerator::default();
        let single = OneOrMany::One(5);
        assert_eq!(single.sample(&mut prng), Some(&5));
        let many = OneOrMany::Many(vec![1, 2, 3]);
        assert!(many.sample(&mut prng).is_some_and(|value| [1, 2, 3].contains(value)));
        let none = OneOrMany::<u8>::Many(Vec::new());
        assert_eq!(none.sample(&mut prng), None);
    }
}
