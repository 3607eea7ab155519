use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    config::{
        RuleTable,
        SerializedRuleSet,
        TeamCompositionPolicy,
    },
    error::unsupported_format_error,
};

/// The type of battle a team is generated for.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum GameType {
    /// One Mon from one player battles at a time.
    #[string = "Singles"]
    #[default]
    Singles,
    /// Two Mons from one player battle at a time.
    #[string = "Doubles"]
    Doubles,
    /// Three Mons from one player battle at a time.
    #[string = "Triples"]
    Triples,
    /// One Mon from each of two players on the same side battles at a time.
    #[string = "Multi"]
    Multi,
    /// Every player battles against every other player.
    #[string = "Free For All"]
    #[alias = "FreeForAll"]
    FreeForAll,
}

impl GameType {
    /// Checks if more than one Mon per side is active at once.
    pub fn doubles(&self) -> bool {
        !matches!(self, Self::Singles)
    }

    /// Checks if a player's partner fights on the same field, which makes ally-targeting moves
    /// risky.
    pub fn shared_field(&self) -> bool {
        matches!(self, Self::Multi | Self::FreeForAll)
    }
}

/// The strategy used to generate a team.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum TeamGenerator {
    /// Random species with procedurally built sets.
    #[string = "Random"]
    #[default]
    Random,
    /// Curated sets drawn from a single tier.
    #[string = "Factory"]
    Factory,
    /// Curated sets drawn by usage, for Battle Stadium Singles.
    #[string = "BSS Factory"]
    #[alias = "BssFactory"]
    BssFactory,
    /// Random species with completely random legal sets.
    #[string = "Challenge Cup"]
    #[alias = "ChallengeCup"]
    ChallengeCup,
    /// Random species with items, abilities, and moves drawn from the whole game.
    #[string = "Hackmons"]
    Hackmons,
    /// Whole preset sets drawn from a catalog.
    #[string = "Preset"]
    Preset,
}

fn default_generation() -> u8 {
    9
}

/// Data for a format, which describes how teams are generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatData {
    /// Name of the format, used in error messages.
    pub name: String,
    /// Generation the format is played in.
    #[serde(default = "default_generation")]
    pub generation: u8,
    /// The type of battle that will take place.
    #[serde(default)]
    pub game_type: GameType,
    /// How teams are generated.
    #[serde(default)]
    pub team_generator: TeamGenerator,
    /// Rules inherited by the format.
    #[serde(default)]
    pub rules: SerializedRuleSet,
    /// Rules added on top of the format, in their raw form.
    #[serde(default)]
    pub custom_rules: Vec<String>,
    /// Team composition limits.
    #[serde(default)]
    pub composition: TeamCompositionPolicy,
}

/// A format, which describes how teams are generated.
#[derive(Debug, Clone)]
pub struct Format {
    pub name: String,
    pub generation: u8,
    pub game_type: GameType,
    pub team_generator: TeamGenerator,
    pub rules: RuleTable,
    pub composition: TeamCompositionPolicy,
}

impl Format {
    /// Creates a new format.
    pub fn new(data: FormatData) -> Result<Self> {
        if data.generation == 0 || data.generation > 9 {
            return Err(unsupported_format_error(format!(
                "{} has an unsupported generation: {}",
                data.name, data.generation
            )));
        }
        let rules = RuleTable::new(&data.rules, &data.custom_rules)?;
        Ok(Self {
            name: data.name,
            generation: data.generation,
            game_type: data.game_type,
            team_generator: data.team_generator,
            rules,
            composition: data.composition,
        })
    }

    /// Checks if the format is played with more than one active Mon per side.
    pub fn doubles(&self) -> bool {
        self.game_type.doubles()
    }

    /// Checks if every Mon on a team must share a type.
    pub fn monotype(&self) -> bool {
        self.rules.force_monotype.is_some() || self.rules.has("sametypeclause")
    }

    /// Fails if the format edits its banlist directly, which procedurally built sets cannot
    /// respect.
    pub fn enforce_no_direct_custom_bans(&self) -> Result<()> {
        if self.rules.has_direct_custom_bans() {
            return Err(unsupported_format_error(format!(
                "Custom bans are not currently supported in {}.",
                self.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod format_test {
    use assert_matches::assert_matches;
    use battler_data::Type;

    use crate::{
        config::{
            Format,
            FormatData,
            GameType,
            TeamGenerator,
        },
        error::UnsupportedFormatError,
    };

    fn format_data(json: &str) -> FormatData {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn deserializes_with_defaults() {
        let format = Format::new(format_data(r#"{"name": "Random Battle"}"#)).unwrap();
        assert_eq!(format.generation, 9);
        assert_eq!(format.game_type, GameType::Singles);
        assert_eq!(format.team_generator, TeamGenerator::Random);
        assert_eq!(format.rules.max_team_size, 6);
        assert!(!format.doubles());
        assert!(!format.monotype());
    }

    #[test]
    fn reads_generator_and_rules() {
        let format = Format::new(format_data(
            r#"{
                "name": "Monotype Random Doubles",
                "game_type": "Doubles",
                "team_generator": "BSS Factory",
                "rules": ["Force Monotype = Fire", "Max Team Size = 4"]
            }"#,
        ))
        .unwrap();
        assert_eq!(format.team_generator, TeamGenerator::BssFactory);
        assert!(format.doubles());
        assert!(format.monotype());
        assert_eq!(format.rules.force_monotype, Some(Type::Fire));
        assert_eq!(format.rules.max_team_size, 4);
    }

    #[test]
    fn same_type_clause_is_monotype() {
        let format = Format::new(format_data(
            r#"{"name": "Mono", "rules": ["Same Type Clause"]}"#,
        ))
        .unwrap();
        assert!(format.monotype());
        assert_eq!(format.rules.force_monotype, None);
    }

    #[test]
    fn rejects_direct_custom_bans() {
        let format = Format::new(format_data(
            r#"{"name": "Random Battle", "custom_rules": ["-Leftovers"]}"#,
        ))
        .unwrap();
        assert_matches!(format.enforce_no_direct_custom_bans(), Err(error) => {
            assert!(error.is::<UnsupportedFormatError>());
            assert_eq!(error.to_string(), "Custom bans are not currently supported in Random Battle.");
        });
    }

    #[test]
    fn rejects_unknown_generation() {
        assert!(Format::new(format_data(r#"{"name": "Gen 10", "generation": 10}"#)).is_err());
    }

    #[test]
    fn free_for_all_shares_field() {
        assert!(GameType::FreeForAll.shared_field());
        assert!(GameType::FreeForAll.doubles());
        assert!(!GameType::Doubles.shared_field());
    }
}
