mod challenge_cup;
mod factory;
mod hackmons;
mod level;
mod preset;
mod random_set;
mod random_team;

use std::rc::Rc;

use anyhow::Result;
use battler_data::{
    DataStore,
    SpeciesData,
    Tier,
};
use battler_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};
use log::debug;

use crate::{
    config::{
        Format,
        TeamGenerator,
    },
    dex::Dex,
    sets::SetRepository,
    teams::TeamData,
};

pub use level::{
    balanced_level,
    tier_level,
};

/// Generates random teams for a single format.
///
/// All randomness comes from one generator, so a seed always reproduces the same sequence of
/// teams for the same data.
pub struct RandomTeamGenerator<'d> {
    format: Format,
    dex: Dex<'d>,
    sets: &'d dyn SetRepository,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    factory_tier: Option<Tier>,
    pokemon_of_the_day: Option<Rc<SpeciesData>>,
}

impl<'d> RandomTeamGenerator<'d> {
    /// Creates a new generator with a real random number generator.
    pub fn new(
        format: Format,
        data: &'d dyn DataStore,
        sets: &'d dyn SetRepository,
        seed: Option<u64>,
    ) -> Result<Self> {
        Self::with_prng(
            format,
            data,
            sets,
            Box::new(RealPseudoRandomNumberGenerator::new(seed)),
        )
    }

    /// Creates a new generator that draws from the given random number generator.
    pub fn with_prng(
        format: Format,
        data: &'d dyn DataStore,
        sets: &'d dyn SetRepository,
        prng: Box<dyn PseudoRandomNumberGenerator>,
    ) -> Result<Self> {
        Ok(Self {
            format,
            dex: Dex::new(data)?,
            sets,
            prng,
            factory_tier: None,
            pokemon_of_the_day: None,
        })
    }

    /// Sets the Pokémon of the Day, which takes the second slot of random teams in formats with
    /// the `potd` rule.
    pub fn with_pokemon_of_the_day(mut self, species: &str) -> Result<Self> {
        self.pokemon_of_the_day = Some(self.dex.species.get(species)?);
        Ok(self)
    }

    /// The format teams are generated for.
    pub fn format(&self) -> &Format {
        &self.format
    }

    /// The dex used for lookups.
    pub fn dex(&self) -> &Dex<'d> {
        &self.dex
    }

    /// The seed the random number generator started from.
    pub fn seed(&self) -> u64 {
        self.prng.initial_seed()
    }

    /// Reseeds the random number generator.
    ///
    /// The Battle Factory tier is kept, so both players of a battle draw from the same tier.
    pub fn set_seed(&mut self, seed: u64) {
        self.prng.reseed(seed);
    }

    /// The random number generator, for inspection in tests.
    pub fn prng(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    /// The Battle Factory tier, once the first factory team has been generated.
    pub fn factory_tier(&self) -> Option<Tier> {
        self.factory_tier
    }

    /// Generates a team with the format's team generator.
    pub fn get_team(&mut self) -> Result<TeamData> {
        debug!(
            "Generating {} team for {} (seed={})",
            self.format.team_generator,
            self.format.name,
            self.seed()
        );
        let members = match self.format.team_generator {
            TeamGenerator::Random => self.random_team()?,
            TeamGenerator::Factory => self.factory_team()?,
            TeamGenerator::BssFactory => self.bss_factory_team()?,
            TeamGenerator::ChallengeCup => self.challenge_cup_team()?,
            TeamGenerator::Hackmons => self.hackmons_team()?,
            TeamGenerator::Preset => self.preset_team()?,
        };
        Ok(TeamData { members })
    }
}
