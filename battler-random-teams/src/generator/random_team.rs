use std::{
    hash::Hash,
    rc::Rc,
};

use anyhow::Result;
use battler_data::{
    FastHashMap,
    SpeciesData,
    Tier,
    Type,
};
use battler_prng::rand_util;
use indexmap::IndexSet;
use log::{
    debug,
    trace,
};

use crate::{
    config::TeamCompositionPolicy,
    error::{
        WrapOptionError,
        generation_exhausted_error,
    },
    generator::{
        RandomTeamGenerator,
        random_set::random_set_level,
    },
    sets::SetRepository,
    teams::{
        MonData,
        TeamDetails,
    },
};

/// Largest team that must always be filled completely.
const MAX_GUARANTEED_TEAM_SIZE: usize = 12;

/// Team-wide counters used to keep a random team diverse.
#[derive(Default)]
struct TeamComposition {
    tiers: FastHashMap<Tier, usize>,
    types: FastHashMap<Type, usize>,
    type_combos: FastHashMap<String, usize>,
    weaknesses: FastHashMap<Type, usize>,
}

/// Scaled limits for a single team, where `None` is unlimited.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CompositionLimits {
    type_limit: Option<usize>,
    weakness_limit: Option<usize>,
    type_combo_limit: Option<usize>,
}

impl CompositionLimits {
    /// Type and weakness limits only apply outside of monotype formats. Type combinations are
    /// unlimited when the type is forced.
    fn new(
        policy: &TeamCompositionPolicy,
        team_size: usize,
        monotype: bool,
        forced_monotype: bool,
    ) -> Self {
        let limit_factor = policy.limit_factor(team_size);
        let type_combo_limit = if monotype {
            policy.monotype_type_combo_limit
        } else {
            policy.type_combo_limit
        };
        Self {
            type_limit: (!monotype).then_some(policy.type_limit * limit_factor),
            weakness_limit: (!monotype).then_some(policy.weakness_limit * limit_factor),
            type_combo_limit: (!forced_monotype).then_some(type_combo_limit * limit_factor),
        }
    }
}

impl TeamComposition {
    fn count<K>(map: &FastHashMap<K, usize>, key: &K) -> usize
    where
        K: Eq + Hash,
    {
        map.get(key).copied().unwrap_or(0)
    }

    /// Names the limit a species with the given types and weaknesses would break, if any.
    fn limit_exceeded(
        &self,
        types: &[Type],
        weaknesses: &[Type],
        type_combo: &str,
        limits: &CompositionLimits,
    ) -> Option<&'static str> {
        if let Some(type_limit) = limits.type_limit {
            if types
                .iter()
                .any(|typ| Self::count(&self.types, typ) >= type_limit)
            {
                return Some("type limit");
            }
        }
        if let Some(weakness_limit) = limits.weakness_limit {
            if weaknesses
                .iter()
                .any(|typ| Self::count(&self.weaknesses, typ) >= weakness_limit)
            {
                return Some("weakness limit");
            }
        }
        if let Some(type_combo_limit) = limits.type_combo_limit {
            if self.type_combos.get(type_combo).copied().unwrap_or(0) >= type_combo_limit {
                return Some("type combination limit");
            }
        }
        None
    }

    fn record(&mut self, tier: Tier, types: &[Type], weaknesses: &[Type], type_combo: String) {
        *self.tiers.entry(tier).or_default() += 1;
        for typ in types {
            *self.types.entry(*typ).or_default() += 1;
        }
        *self.type_combos.entry(type_combo).or_default() += 1;
        for typ in weaknesses {
            *self.weaknesses.entry(*typ).or_default() += 1;
        }
    }
}

impl<'d> RandomTeamGenerator<'d> {
    /// Species a random team may draw from, with their base species in first-seen order.
    fn random_species_pool(
        &self,
        doubles: bool,
        monotype: Option<Type>,
    ) -> Result<(Vec<Rc<SpeciesData>>, Vec<String>)> {
        let sets: &'d dyn SetRepository = self.sets;
        let mut pool = Vec::new();
        let mut base_species = IndexSet::new();
        for id in sets.random_sets(doubles).keys() {
            let species = match self.dex.species.try_get_by_id(id)? {
                Some(species) => species,
                None => {
                    trace!("Skipping unknown species {id} in random sets");
                    continue;
                }
            };
            if species.generation > self.format.generation {
                continue;
            }
            if monotype.is_some_and(|typ| !species.has_type(typ)) {
                continue;
            }
            base_species.insert(species.base_species.clone());
            pool.push(species);
        }
        Ok((pool, base_species.into_iter().collect()))
    }

    /// Generates a team of procedurally built random sets.
    pub fn random_team(&mut self) -> Result<Vec<MonData>> {
        self.format.enforce_no_direct_custom_bans()?;

        let seed = self.prng.initial_seed();
        let max_team_size = self.format.rules.max_team_size;
        let adjust_level = self.format.rules.adjust_level;
        let force_monotype = self.format.rules.force_monotype;
        let monotype = self.format.monotype();
        let doubles = self.format.doubles();
        let policy = self.format.composition.clone();
        let limit_factor = policy.limit_factor(max_team_size);
        let limits =
            CompositionLimits::new(&policy, max_team_size, monotype, force_monotype.is_some());

        let typ = match force_monotype {
            Some(typ) => typ,
            None => *rand_util::sample_slice(self.prng.as_mut(), &Type::ALL)
                .wrap_expectation("type list is empty")?,
        };
        let pokemon_of_the_day = self
            .pokemon_of_the_day
            .clone()
            .filter(|_| self.format.rules.has("potd"));

        let (pool, mut base_species_pool) =
            self.random_species_pool(doubles, monotype.then_some(typ))?;
        let sets: &'d dyn SetRepository = self.sets;
        let set_table = sets.random_sets(doubles);

        let mut team: Vec<MonData> = Vec::with_capacity(max_team_size);
        let mut team_details = TeamDetails::default();
        let mut composition = TeamComposition::default();

        while team.len() < max_team_size {
            let base_species =
                match rand_util::sample_no_replace(self.prng.as_mut(), &mut base_species_pool) {
                    Some(base_species) => base_species,
                    None => break,
                };
            let candidates = pool
                .iter()
                .filter(|species| species.base_species == base_species)
                .cloned()
                .collect::<Vec<_>>();
            let mut species = match rand_util::sample_slice(self.prng.as_mut(), &candidates) {
                Some(species) => species.clone(),
                None => continue,
            };

            // Illusion should not be on the last slot.
            if species.base_species == "Zoroark" && team.len() >= max_team_size - 1 {
                continue;
            }
            // Illusion should not disguise itself as a low level Mon.
            if team.iter().any(|mon| mon.name == "Zoroark")
                && team.len() >= max_team_size - 1
                && random_set_level(adjust_level, set_table, &species) < 72
                && adjust_level.is_none()
            {
                continue;
            }
            // Last Respects users should not lead.
            if ["Basculegion", "Houndstone"].contains(&species.base_species.as_str())
                && team.is_empty()
            {
                continue;
            }

            let types = species.types();
            let type_combo = species.type_combination();

            if let Some(tier_limit) = policy.tier_limit {
                let count = TeamComposition::count(&composition.tiers, &species.tier);
                let limit = tier_limit * if monotype { 2 } else { 1 } * limit_factor;
                if count >= limit
                    && !rand_util::chance(self.prng.as_mut(), 1, 5u64.pow(count as u32))
                {
                    trace!("Rejecting {}: tier {} is full", species.name, species.tier);
                    continue;
                }
            }

            let weaknesses = Type::ALL
                .into_iter()
                .filter(|attacking| self.dex.effectiveness(*attacking, &types) > 0)
                .collect::<Vec<_>>();
            if let Some(limit) =
                composition.limit_exceeded(&types, &weaknesses, &type_combo, &limits)
            {
                trace!("Rejecting {}: {limit}", species.name);
                continue;
            }

            if let Some(pokemon_of_the_day) = &pokemon_of_the_day {
                if team.len() == 1 || max_team_size == 1 {
                    species = pokemon_of_the_day.clone();
                }
            }

            let set = self.random_set(&species, &team_details, team.is_empty(), doubles)?;
            debug!("Accepted {} into slot {}", set.species, team.len() + 1);
            team.push(set);

            if team.len() == max_team_size {
                // The last member is not tracked, but Illusion takes on its level.
                if let Some(illusion) = team_details.illusion {
                    let level = team[max_team_size - 1].level;
                    if let Some(mon) = team.get_mut(illusion - 1) {
                        mon.level = level;
                    }
                }
                break;
            }

            composition.record(species.tier, &types, &weaknesses, type_combo);
            if let Some(set) = team.last() {
                team_details.record(set, team.len());
            }
        }

        if team.len() < max_team_size && team.len() < MAX_GUARANTEED_TEAM_SIZE {
            return Err(generation_exhausted_error(&self.format.name, seed));
        }
        Ok(team)
    }
}

#[cfg(test)]
mod team_composition_test {
    use battler_data::{
        Tier,
        Type,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        config::TeamCompositionPolicy,
        generator::random_team::{
            CompositionLimits,
            TeamComposition,
        },
    };

    fn record(composition: &mut TeamComposition, types: &[Type], weaknesses: &[Type]) {
        let mut combo = types.iter().map(|typ| typ.to_string()).collect::<Vec<_>>();
        combo.sort();
        composition.record(Tier::OU, types, weaknesses, combo.join(","));
    }

    fn limits(team_size: usize, monotype: bool, forced_monotype: bool) -> CompositionLimits {
        CompositionLimits::new(
            &TeamCompositionPolicy::default(),
            team_size,
            monotype,
            forced_monotype,
        )
    }

    #[test]
    fn scales_limits_with_team_size() {
        assert_eq!(
            limits(6, false, false),
            CompositionLimits {
                type_limit: Some(2),
                weakness_limit: Some(3),
                type_combo_limit: Some(1),
            }
        );
        assert_eq!(
            limits(12, false, false),
            CompositionLimits {
                type_limit: Some(4),
                weakness_limit: Some(6),
                type_combo_limit: Some(2),
            }
        );
        assert_eq!(
            limits(6, true, false),
            CompositionLimits {
                type_limit: None,
                weakness_limit: None,
                type_combo_limit: Some(2),
            }
        );
        assert_eq!(
            limits(6, true, true),
            CompositionLimits {
                type_limit: None,
                weakness_limit: None,
                type_combo_limit: None,
            }
        );
    }

    #[test]
    fn rejects_third_member_of_a_type() {
        let limits = limits(6, false, false);
        let mut composition = TeamComposition::default();
        record(&mut composition, &[Type::Water], &[]);
        assert_eq!(
            composition.limit_exceeded(&[Type::Water, Type::Ground], &[], "Ground,Water", &limits),
            None
        );
        record(&mut composition, &[Type::Water, Type::Ground], &[]);
        assert_eq!(
            composition.limit_exceeded(&[Type::Water, Type::Fairy], &[], "Fairy,Water", &limits),
            Some("type limit")
        );
        assert_eq!(
            composition.limit_exceeded(&[Type::Fire], &[], "Fire", &limits),
            None
        );
    }

    #[test]
    fn rejects_fourth_member_weak_to_a_type() {
        let limits = limits(6, false, false);
        let mut composition = TeamComposition::default();
        record(&mut composition, &[Type::Fire], &[Type::Water]);
        record(&mut composition, &[Type::Rock], &[Type::Water, Type::Grass]);
        assert_eq!(
            composition.limit_exceeded(&[Type::Ground], &[Type::Water], "Ground", &limits),
            None
        );
        record(&mut composition, &[Type::Ground], &[Type::Water]);
        assert_eq!(
            composition.limit_exceeded(&[Type::Ice], &[Type::Fire, Type::Water], "Ice", &limits),
            Some("weakness limit")
        );
        assert_eq!(
            composition.limit_exceeded(&[Type::Ice], &[Type::Grass], "Ice", &limits),
            None
        );
    }

    #[test]
    fn monotype_allows_two_of_a_type_combination() {
        let mut composition = TeamComposition::default();
        record(&mut composition, &[Type::Fire], &[]);
        assert_eq!(
            composition.limit_exceeded(&[Type::Fire], &[], "Fire", &limits(6, false, false)),
            Some("type combination limit")
        );
        assert_eq!(
            composition.limit_exceeded(&[Type::Fire], &[], "Fire", &limits(6, true, false)),
            None
        );
        record(&mut composition, &[Type::Fire], &[]);
        assert_eq!(
            composition.limit_exceeded(&[Type::Fire], &[], "Fire", &limits(6, true, false)),
            Some("type combination limit")
        );
        assert_eq!(
            composition.limit_exceeded(&[Type::Fire], &[], "Fire", &limits(6, true, true)),
            None
        );
    }

    #[test]
    fn monotype_ignores_type_and_weakness_limits() {
        let mut composition = TeamComposition::default();
        for _ in 0..3 {
            record(&mut composition, &[Type::Steel], &[Type::Fire]);
        }
        assert_eq!(
            composition.limit_exceeded(
                &[Type::Steel, Type::Flying],
                &[Type::Fire],
                "Flying,Steel",
                &limits(6, true, false),
            ),
            None
        );
    }
}
