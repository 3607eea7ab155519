use anyhow::Result;
use battler_data::{
    Id,
    Nature,
    Stat,
    StatTable,
};
use battler_prng::rand_util;
use log::debug;

use crate::{
    config::RuleTable,
    error::{
        insufficient_pool_error,
        unsupported_format_error,
    },
    generator::{
        RandomTeamGenerator,
        balanced_level,
        challenge_cup::{
            budgeted_evs,
            random_ivs,
            random_tera_type,
        },
    },
    teams::MonData,
};

/// Checks if the rules ban leaving a slot empty, in which case the pool must cover every member.
fn bans_empty_slot(rules: &RuleTable, kind: &str, empty: &str) -> bool {
    rules.banned(&Id::from(empty)) || rules.banned(&Id::from(format!("{kind}:{empty}")))
}

impl<'d> RandomTeamGenerator<'d> {
    /// Generates a Hackmons Cup team: random species with items, abilities, and moves drawn
    /// without replacement from everything legal in the format.
    pub fn hackmons_team(&mut self) -> Result<Vec<MonData>> {
        let generation = self.format.generation;
        let max_team_size = self.format.rules.max_team_size;
        let max_move_count = self.format.rules.max_move_count;
        let adjust_level = self.format.rules.adjust_level;
        let has_custom_bans = self.format.rules.has_direct_custom_bans();
        if has_custom_bans && self.format.rules.has_complex_bans() {
            return Err(unsupported_format_error(format!(
                "Complex bans are not currently supported in {}.",
                self.format.name
            )));
        }

        let data = self.dex.data();
        let rules = &self.format.rules;
        let allowed = |id: &Id, generation_added: u8, nonstandard: &Option<String>| {
            generation_added <= generation && nonstandard.is_none() && !rules.banned(id)
        };
        let mut item_pool = if generation >= 2 {
            data.all_item_ids(&|item| {
                allowed(&Id::from(item.name.as_str()), item.generation, &item.nonstandard)
            })?
        } else {
            Vec::new()
        };
        let mut ability_pool = if generation >= 3 {
            data.all_ability_ids(&|ability| {
                allowed(
                    &Id::from(ability.name.as_str()),
                    ability.generation,
                    &ability.nonstandard,
                )
            })?
        } else {
            Vec::new()
        };
        let mut move_pool = data.all_move_ids(&|data| {
            allowed(&Id::from(data.name.as_str()), data.generation, &data.nonstandard)
        })?;

        if has_custom_bans {
            if generation >= 2
                && bans_empty_slot(rules, "item", "noitem")
                && item_pool.len() < max_team_size
            {
                return Err(insufficient_pool_error(
                    "item",
                    "Max Team Size",
                    item_pool.len(),
                    max_team_size,
                ));
            }
            if generation >= 3
                && bans_empty_slot(rules, "ability", "noability")
                && ability_pool.len() < max_team_size
            {
                return Err(insufficient_pool_error(
                    "ability",
                    "Max Team Size",
                    ability_pool.len(),
                    max_team_size,
                ));
            }
            let needed_moves = max_team_size * max_move_count;
            if move_pool.len() < needed_moves {
                return Err(insufficient_pool_error(
                    "move",
                    "Max Team Size * Max Move Count",
                    move_pool.len(),
                    needed_moves,
                ));
            }
        }
        debug!(
            "Hackmons pools: {} items, {} abilities, {} moves",
            item_pool.len(),
            ability_pool.len(),
            move_pool.len()
        );

        let formes = self.random_n_species(max_team_size, self.format.rules.force_monotype, false)?;
        let mut team = Vec::with_capacity(formes.len());
        for forme in formes {
            let species = self.dex.species.get(&forme)?;

            // Poké Balls and TRs would otherwise dominate.
            let mut item = None;
            while let Some(id) = rand_util::sample_no_replace(self.prng.as_mut(), &mut item_pool) {
                let data = self.dex.items.get_by_id(&id)?;
                if data.filler()
                    && rand_util::chance(self.prng.as_mut(), 19, 20)
                    && item_pool.len() > max_team_size
                {
                    continue;
                }
                item = Some(data.name.clone());
                break;
            }

            let ability = match rand_util::sample_no_replace(self.prng.as_mut(), &mut ability_pool) {
                Some(id) => self.dex.abilities.get_by_id(&id)?.name.clone(),
                None => "No Ability".to_owned(),
            };

            let moves = rand_util::sample_many_no_replace(
                self.prng.as_mut(),
                &mut move_pool,
                max_move_count,
            )
            .into_iter()
            .map(|id| id.to_string())
            .collect();

            let prng = self.prng.as_mut();
            let evs = if generation == 6 {
                budgeted_evs(prng)
            } else {
                let mut evs = StatTable::default();
                for stat in Stat::ALL {
                    evs.set(stat, rand_util::range(prng, 0, 256) as u16);
                }
                evs
            };
            let ivs = random_ivs(prng);
            let nature = if generation >= 3 {
                rand_util::sample_slice(prng, &Nature::ALL).copied()
            } else {
                None
            };
            let level = adjust_level.unwrap_or_else(|| balanced_level(&species.base_stats));
            let happiness = rand_util::range(prng, 0, 256) as u8;
            let shiny = rand_util::chance(prng, 1, 1024);
            let tera_type = random_tera_type(prng, generation);

            team.push(MonData {
                name: species.base_species.clone(),
                species: species.name.clone(),
                gender: species.fixed_gender(),
                shiny,
                level,
                moves,
                ability,
                item,
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
}
