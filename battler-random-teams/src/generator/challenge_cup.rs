use std::rc::Rc;

use anyhow::Result;
use battler_data::{
    Id,
    ItemData,
    Nature,
    SpeciesData,
    Stat,
    StatTable,
    Type,
};
use battler_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use log::trace;

use crate::{
    error::{
        WrapOptionError,
        insufficient_pool_error,
    },
    generator::{
        RandomTeamGenerator,
        balanced_level,
    },
    teams::MonData,
};

/// The last national dex number introduced in each generation.
const LAST_DEX_NUMBER: [u16; 10] = [0, 151, 251, 386, 493, 649, 721, 807, 898, 1010];

/// Total EVs a Mon may have.
const EV_BUDGET: u16 = 510;

/// Checks if the resource belongs to the standard game.
pub(crate) fn standard(nonstandard: &Option<String>) -> bool {
    nonstandard
        .as_deref()
        .is_none_or(|nonstandard| nonstandard == "Unobtainable")
}

/// Random EVs that spend the full budget, with no stat over 255.
pub(crate) fn budgeted_evs(prng: &mut dyn PseudoRandomNumberGenerator) -> StatTable {
    let mut evs = StatTable::default();
    let mut pool = EV_BUDGET;
    while pool > 0 {
        let stat = match rand_util::sample_slice(prng, &Stat::ALL) {
            Some(stat) => *stat,
            None => break,
        };
        let current = evs.get(stat);
        let max = (256 - current).min(pool + 1);
        let value = rand_util::range(prng, 0, max as u64) as u16;
        evs.set(stat, current + value);
        pool -= value;
    }
    evs
}

/// Random IVs, uniform in `[0, 32)`.
pub(crate) fn random_ivs(prng: &mut dyn PseudoRandomNumberGenerator) -> StatTable {
    let mut ivs = StatTable::default();
    for stat in Stat::ALL {
        ivs.set(stat, rand_util::range(prng, 0, 32) as u16);
    }
    ivs
}

/// Random Tera Type, only for generations that have Terastallization.
pub(crate) fn random_tera_type(
    prng: &mut dyn PseudoRandomNumberGenerator,
    generation: u8,
) -> Option<Type> {
    if generation == 9 {
        rand_util::sample_slice(prng, &Type::ALL).copied()
    } else {
        None
    }
}

impl<'d> RandomTeamGenerator<'d> {
    /// Picks `n` random species with distinct dex numbers, each as a random forme.
    ///
    /// Only standard species from the format's generation are considered, minus banned species.
    pub fn random_n_species(
        &mut self,
        n: usize,
        required_type: Option<Type>,
        require_moves: bool,
    ) -> Result<Vec<String>> {
        let generation = self.format.generation;
        let last = LAST_DEX_NUMBER
            .get(generation as usize)
            .copied()
            .unwrap_or(LAST_DEX_NUMBER[LAST_DEX_NUMBER.len() - 1]);
        if n == 0 || n > last as usize {
            return Err(insufficient_pool_error(
                "Pokemon",
                "Max Team Size",
                last as usize,
                n,
            ));
        }

        let rules = &self.format.rules;
        let ids = self.dex.data().all_species_ids(&|species| {
            standard(&species.nonstandard)
                && !rules.banned(&Id::from(species.name.as_str()))
                && species.num > 0
                && species.num <= last
                && (!require_moves || !species.learnset.is_empty())
                && required_type.is_none_or(|typ| species.has_type(typ))
        })?;
        let mut species_list = Vec::with_capacity(ids.len());
        let mut pool = Vec::new();
        for id in &ids {
            let species = self.dex.species.get_by_id(id)?;
            if !pool.contains(&species.num) {
                pool.push(species.num);
            }
            species_list.push(species);
        }

        let picks = rand_util::sample_many_no_replace(self.prng.as_mut(), &mut pool, n);
        let mut formes = vec![Vec::new(); picks.len()];
        for species in &species_list {
            if species.generation > generation {
                continue;
            }
            if let Some(index) = picks.iter().position(|num| *num == species.num) {
                formes[index].push(species.name.clone());
            }
        }

        let available = formes.iter().filter(|formes| !formes.is_empty()).count();
        if available < n {
            return Err(insufficient_pool_error(
                "Pokemon forme",
                "Max Team Size",
                available,
                n,
            ));
        }
        formes
            .iter()
            .map(|formes| {
                rand_util::sample_slice(self.prng.as_mut(), formes)
                    .cloned()
                    .wrap_expectation("no formes for dex number")
            })
            .collect()
    }

    /// Items legal in the format's generation.
    pub(crate) fn legal_items(&self) -> Result<Vec<Rc<ItemData>>> {
        let generation = self.format.generation;
        self.dex
            .data()
            .all_item_ids(&|item| item.generation <= generation && item.nonstandard.is_none())?
            .iter()
            .map(|id| self.dex.items.get_by_id(id))
            .collect()
    }

    /// Generates a Challenge Cup team: random species with random legal items, abilities, moves,
    /// and spreads.
    pub fn challenge_cup_team(&mut self) -> Result<Vec<MonData>> {
        self.format.enforce_no_direct_custom_bans()?;
        let generation = self.format.generation;
        let adjust_level = self.format.rules.adjust_level;
        let max_move_count = self.format.rules.max_move_count;
        let items = self.legal_items()?;

        let formes = self.random_n_species(
            self.format.rules.max_team_size,
            self.format.rules.force_monotype,
            true,
        )?;
        let mut team = Vec::with_capacity(formes.len());
        for forme in formes {
            let mut species = self.dex.species.get(&forme)?;
            if !standard(&species.nonstandard) {
                species = self.dex.species.get(&species.base_species)?;
            }

            // Poké Balls and TRs would otherwise dominate.
            let mut item = None;
            if generation >= 2 {
                loop {
                    let candidate = match rand_util::sample_slice(self.prng.as_mut(), &items) {
                        Some(candidate) => candidate,
                        None => break,
                    };
                    if candidate.filler() && rand_util::chance(self.prng.as_mut(), 19, 20) {
                        continue;
                    }
                    item = Some(candidate.clone());
                    break;
                }
            }

            // Battle-only formes and formes that need an item the Mon is not holding revert.
            if species.battle_only_forme {
                if let Some(changes_from) = &species.changes_from {
                    species = self.dex.species.get(changes_from)?;
                }
            } else if !species.required_items.is_empty()
                && !species.required_items.iter().any(|required| {
                    item.as_ref()
                        .is_some_and(|item| Id::from(required.as_str()) == Id::from(item.name.as_str()))
                })
            {
                let changes_from = species
                    .changes_from
                    .as_deref()
                    .wrap_expectation(format!("{} has no forme to change from", species.name))?;
                species = self.dex.species.get(changes_from)?;
            }

            // A base forme must not hold an item that forces a different forme.
            if item
                .as_ref()
                .map(|item| self.forces_other_forme(item, &species))
                .transpose()?
                .unwrap_or(false)
            {
                let mut allowed = Vec::with_capacity(items.len());
                for candidate in &items {
                    if !self.forces_other_forme(candidate, &species)? {
                        allowed.push(candidate.clone());
                    }
                }
                item = rand_util::sample_slice(self.prng.as_mut(), &allowed).cloned();
            }

            let mut abilities = Vec::new();
            for ability in species.legal_abilities() {
                if self
                    .dex
                    .abilities
                    .try_get(&ability)?
                    .is_some_and(|ability| ability.generation <= generation)
                {
                    abilities.push(ability);
                }
            }
            let ability = if generation <= 2 {
                "No Ability".to_owned()
            } else {
                rand_util::sample_slice(self.prng.as_mut(), &abilities)
                    .cloned()
                    .unwrap_or_default()
            };

            let mut pool = self.learnable_moves(&species)?;
            if pool.is_empty() {
                pool.push(Id::from_known("struggle"));
            }
            let moves = rand_util::sample_many_no_replace(self.prng.as_mut(), &mut pool, max_move_count)
                .into_iter()
                .map(|id| id.to_string())
                .collect();

            let prng = self.prng.as_mut();
            let evs = budgeted_evs(prng);
            let ivs = random_ivs(prng);
            let nature = rand_util::sample_slice(prng, &Nature::ALL).copied();
            let level = match adjust_level {
                Some(level) => level,
                None => balanced_level(&self.level_stats(&species)?),
            };
            let prng = self.prng.as_mut();
            let happiness = rand_util::range(prng, 0, 256) as u8;
            let shiny = rand_util::chance(prng, 1, 1024);
            let tera_type = random_tera_type(prng, generation);

            trace!("Challenge Cup member: {}", species.name);
            team.push(MonData {
                name: species.base_species.clone(),
                species: species.name.clone(),
                gender: species.fixed_gender(),
                shiny,
                level,
                moves,
                ability,
                item: item.map(|item| item.name.clone()),
                evs,
                ivs,
                nature,
                happiness: Some(happiness),
                tera_type,
                role: None,
            });
        }
        Ok(team)
    }

    fn forces_other_forme(&self, item: &ItemData, species: &SpeciesData) -> Result<bool> {
        let forced = match &item.force_forme {
            Some(forced) => forced,
            None => return Ok(false),
        };
        Ok(self
            .dex
            .species
            .try_get(forced)?
            .is_some_and(|forced| forced.base_species == species.name))
    }

    /// Every move the species can learn, including moves of the forme it changes from.
    fn learnable_moves(&self, species: &SpeciesData) -> Result<Vec<Id>> {
        let mut learnset = species.learnset.clone();
        if learnset.is_empty() && species.forme.is_some() {
            if let Some(base) = self.dex.species.try_get(&species.base_species)? {
                learnset = base.learnset.clone();
            }
        }
        if let Some(changes_from) = &species.changes_from {
            if let Some(base) = self.dex.species.try_get(changes_from)? {
                learnset.extend(base.learnset.iter().cloned());
            }
        }
        let mut pool = Vec::with_capacity(learnset.len());
        for name in learnset {
            let id = Id::from(name);
            if !pool.contains(&id) {
                pool.push(id);
            }
        }
        Ok(pool)
    }

    /// Stats used for level balancing.
    ///
    /// Wishiwashi is balanced by its School Form.
    fn level_stats(&self, species: &SpeciesData) -> Result<StatTable> {
        if species.base_species == "Wishiwashi" {
            if let Some(school) = self.dex.species.try_get("Wishiwashi-School")? {
                return Ok(school.base_stats.clone());
            }
        }
        Ok(species.base_stats.clone())
    }
}
