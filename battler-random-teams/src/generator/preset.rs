use anyhow::Result;
use battler_data::Nature;
use battler_prng::rand_util;
use log::trace;

use crate::{
    generator::RandomTeamGenerator,
    sets::SetRepository,
    teams::MonData,
};

impl<'d> RandomTeamGenerator<'d> {
    /// Generates a team of whole preset sets, one per species.
    pub fn preset_team(&mut self) -> Result<Vec<MonData>> {
        let sets: &'d dyn SetRepository = self.sets;
        let catalog = sets.preset_sets();
        let max_team_size = self.format.rules.max_team_size;
        let force_monotype = self.format.rules.force_monotype;
        let adjust_level = self.format.rules.adjust_level;

        let mut pool = catalog.iter().collect::<Vec<_>>();
        let mut team = Vec::with_capacity(max_team_size);
        while team.len() < max_team_size {
            let (id, species_sets) =
                match rand_util::sample_no_replace(self.prng.as_mut(), &mut pool) {
                    Some(entry) => entry,
                    None => break,
                };
            let species = match self.dex.species.try_get_by_id(id)? {
                Some(species) => species,
                None => {
                    trace!("Skipping preset sets for unknown species {id}");
                    continue;
                }
            };
            if force_monotype.is_some_and(|typ| !species.has_type(typ)) {
                continue;
            }

            let prng = self.prng.as_mut();
            let set = match rand_util::sample_slice(prng, species_sets) {
                Some(set) => set,
                None => continue,
            };
            let item = set
                .item
                .as_ref()
                .and_then(|item| item.sample(prng))
                .filter(|item| !item.is_empty())
                .cloned();
            let ability = set
                .ability
                .as_ref()
                .and_then(|ability| ability.sample(prng))
                .or_else(|| species.abilities.first())
                .cloned()
                .unwrap_or_default();
            let moves = set
                .moves
                .iter()
                .filter_map(|slot| slot.sample(prng).cloned())
                .collect();
            let nature = set
                .nature
                .as_ref()
                .and_then(|nature| nature.sample(prng))
                .copied()
                .unwrap_or(Nature::Serious);
            let shiny = match set.shiny {
                Some(shiny) => shiny,
                None => rand_util::chance(prng, 1, 1024),
            };

            team.push(MonData {
                name: set
                    .name
                    .clone()
                    .unwrap_or_else(|| species.base_species.clone()),
                species: set.species.clone(),
                gender: set.gender.or_else(|| species.fixed_gender()),
                shiny,
                level: adjust_level.or(set.level).unwrap_or(100),
                moves,
                ability,
                item,
                evs: set.evs.complete(0),
                ivs: set.ivs.complete(31),
                nature: Some(nature),
                happiness: set.happiness,
                tera_type: None,
                role: None,
            });
        }
        Ok(team)
    }
}
