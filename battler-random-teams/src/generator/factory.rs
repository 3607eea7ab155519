use anyhow::Result;
use battler_data::{
    Gender,
    Id,
    Nature,
    SpeciesData,
    Tier,
    Type,
};
use battler_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use log::{
    debug,
    trace,
    warn,
};

use crate::{
    error::{
        WrapOptionError,
        generation_exhausted_error,
    },
    generator::RandomTeamGenerator,
    sets::{
        FactorySet,
        SetRepository,
    },
    teams::{
        FactoryTeamDetails,
        MonData,
    },
};

/// Tiers a Battle Factory may be played in.
pub const FACTORY_TIERS: [Tier; 7] = [
    Tier::Uber,
    Tier::OU,
    Tier::UU,
    Tier::RU,
    Tier::NU,
    Tier::PU,
    Tier::LC,
];

/// Relative strength of a tier, for keeping stronger species out of weaker factory tiers.
fn tier_value(tier: Tier) -> Option<u8> {
    match tier {
        Tier::Uber => Some(5),
        Tier::OU | Tier::UUBL => Some(4),
        Tier::UU | Tier::RUBL => Some(3),
        Tier::RU | Tier::NUBL => Some(2),
        Tier::NU | Tier::PUBL => Some(1),
        Tier::PU => Some(0),
        _ => None,
    }
}

/// Weather-setting abilities and the weather they set.
const WEATHER_ABILITIES: &[(&str, &str)] = &[
    ("drizzle", "raindance"),
    ("drought", "sunnyday"),
    ("snowwarning", "hail"),
    ("sandstream", "sandstorm"),
];

/// Team constraints for a curated set generator.
struct CuratedRules {
    /// Items limited team-wide.
    items_max: &'static [(&'static str, usize)],
    /// Moves limited team-wide.
    moves_max: &'static [(&'static str, usize)],
    /// Moves that provide a move family the team needs.
    required_moves: &'static [(&'static str, &'static str)],
    /// Move families every team must have.
    required_families: &'static [&'static str],
    /// Abilities that cover a weakness like a resistance would.
    resistance_abilities: &'static [(&'static str, &'static [Type])],
}

const FACTORY_RULES: CuratedRules = CuratedRules {
    items_max: &[("choicespecs", 1), ("choiceband", 1), ("choicescarf", 1)],
    moves_max: &[
        ("rapidspin", 1),
        ("batonpass", 1),
        ("stealthrock", 1),
        ("defog", 1),
        ("spikes", 1),
        ("toxicspikes", 1),
    ],
    required_moves: &[
        ("stealthrock", "hazardSet"),
        ("rapidspin", "hazardClear"),
        ("defog", "hazardClear"),
    ],
    required_families: &["hazardSet", "hazardClear"],
    resistance_abilities: &[
        ("dryskin", &[Type::Water]),
        ("waterabsorb", &[Type::Water]),
        ("stormdrain", &[Type::Water]),
        ("flashfire", &[Type::Fire]),
        ("heatproof", &[Type::Fire]),
        ("lightningrod", &[Type::Electric]),
        ("motordrive", &[Type::Electric]),
        ("voltabsorb", &[Type::Electric]),
        ("sapsipper", &[Type::Grass]),
        ("thickfat", &[Type::Ice, Type::Fire]),
        ("levitate", &[Type::Ground]),
    ],
};

const BSS_FACTORY_RULES: CuratedRules = CuratedRules {
    items_max: &[],
    moves_max: &[
        ("batonpass", 1),
        ("stealthrock", 1),
        ("toxicspikes", 1),
        ("trickroom", 1),
        ("auroraveil", 1),
    ],
    required_moves: &[],
    required_families: &[],
    resistance_abilities: &[
        ("waterabsorb", &[Type::Water]),
        ("flashfire", &[Type::Fire]),
        ("lightningrod", &[Type::Electric]),
        ("voltabsorb", &[Type::Electric]),
        ("thickfat", &[Type::Ice, Type::Fire]),
        ("levitate", &[Type::Ground]),
    ],
};

fn lookup<T: Copy>(table: &[(&str, T)], id: &Id) -> Option<T> {
    table
        .iter()
        .find(|(key, _)| *id == *key)
        .map(|(_, value)| *value)
}

impl CuratedRules {
    fn capped(table: &[(&str, usize)], details: &FactoryTeamDetails, id: &Id) -> bool {
        lookup(table, id).is_some_and(|max| details.has(id.as_str()) >= max)
    }

    fn item_capped(&self, details: &FactoryTeamDetails, id: &Id) -> bool {
        Self::capped(self.items_max, details, id)
    }

    fn move_capped(&self, details: &FactoryTeamDetails, id: &Id) -> bool {
        Self::capped(self.moves_max, details, id)
    }

    fn fills_missing_family(&self, details: &FactoryTeamDetails, id: &Id) -> bool {
        lookup(self.required_moves, id).is_some_and(|family| details.has(family) == 0)
    }
}

/// The two curated set generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CuratedVariant {
    Factory(Tier),
    Bss,
}

impl CuratedVariant {
    fn rules(&self) -> &'static CuratedRules {
        match self {
            Self::Factory(_) => &FACTORY_RULES,
            Self::Bss => &BSS_FACTORY_RULES,
        }
    }
}

/// A set that passed the team's constraints, with the move variants rolled while checking it.
struct CuratedCandidate<'s> {
    set: &'s FactorySet,
    move_variants: Option<Vec<usize>>,
}

/// Picks the type combination key for a member, where Drought and Drizzle count as their own
/// combination.
fn type_combo_key(species: &SpeciesData, ability: &str) -> String {
    if ability == "Drought" || ability == "Drizzle" {
        ability.to_owned()
    } else {
        species.type_combination()
    }
}

impl<'d> RandomTeamGenerator<'d> {
    /// Locks the Battle Factory tier instead of rolling it with the first team.
    pub fn with_factory_tier(mut self, tier: Tier) -> Self {
        self.factory_tier = Some(tier);
        self
    }

    /// Generates a Battle Factory team from curated sets of a single tier.
    pub fn factory_team(&mut self) -> Result<Vec<MonData>> {
        self.format.enforce_no_direct_custom_bans()?;
        let tier = match self.factory_tier {
            Some(tier) => tier,
            None => {
                let sets: &'d dyn SetRepository = self.sets;
                let tiers = FACTORY_TIERS
                    .into_iter()
                    .filter(|tier| sets.factory_sets(*tier).is_some())
                    .collect::<Vec<_>>();
                let tier = *rand_util::sample_slice(self.prng.as_mut(), &tiers)
                    .wrap_not_found_error("factory sets for any tier")?;
                debug!("Battle Factory tier is {tier}");
                self.factory_tier = Some(tier);
                tier
            }
        };
        let max_depth = self.format.composition.factory_max_depth;
        self.curated_team(CuratedVariant::Factory(tier), max_depth)
    }

    /// Generates a Battle Stadium Singles team from curated sets, weighted by usage.
    pub fn bss_factory_team(&mut self) -> Result<Vec<MonData>> {
        self.format.enforce_no_direct_custom_bans()?;
        let max_depth = self.format.composition.bss_factory_max_depth;
        self.curated_team(CuratedVariant::Bss, max_depth)
    }

    /// Regenerates whole teams until one passes the quality checks.
    ///
    /// From `max_depth` on, checks are skipped and the first complete team is accepted. Unlike an
    /// unbounded regeneration, attempts stop at [`TeamCompositionPolicy::attempt_ceiling`], so a
    /// catalog that can never fill a team fails with a generation-exhausted error instead of
    /// looping forever.
    ///
    /// [`TeamCompositionPolicy::attempt_ceiling`]: crate::config::TeamCompositionPolicy::attempt_ceiling
    fn curated_team(&mut self, variant: CuratedVariant, max_depth: u32) -> Result<Vec<MonData>> {
        let ceiling = self.format.composition.attempt_ceiling(max_depth);
        let mut depth = 0;
        while depth < ceiling {
            let force_result = depth >= max_depth;
            if force_result && depth == max_depth {
                warn!(
                    "{} reached depth {max_depth} without a balanced team, accepting the next complete team",
                    self.format.name
                );
            }
            let team = match variant {
                CuratedVariant::Factory(tier) => self.factory_team_attempt(tier, force_result)?,
                CuratedVariant::Bss => self.bss_factory_team_attempt(force_result)?,
            };
            match team {
                Some(team) => return Ok(team),
                None => {
                    depth += 1;
                    debug!("Regenerating {} team (depth={depth})", self.format.name);
                }
            }
        }
        Err(generation_exhausted_error(
            &self.format.name,
            self.prng.initial_seed(),
        ))
    }

    fn factory_team_attempt(
        &mut self,
        tier: Tier,
        force_result: bool,
    ) -> Result<Option<Vec<MonData>>> {
        let variant = CuratedVariant::Factory(tier);
        let rules = variant.rules();
        let sets: &'d dyn SetRepository = self.sets;
        let catalog = sets
            .factory_sets(tier)
            .wrap_not_found_error(format_args!("factory sets for tier {tier}"))?;
        let max_team_size = self.format.rules.max_team_size;
        let policy = &self.format.composition;
        let limit_factor = policy.limit_factor(max_team_size);
        let type_limit = policy.type_limit * limit_factor;
        let type_combo_limit = policy.type_combo_limit * limit_factor;
        let weakness_threshold = policy.factory_weakness_threshold;

        let mut pool = catalog.iter().collect::<Vec<_>>();
        let mut details = FactoryTeamDetails::new(force_result);
        let mut team = Vec::with_capacity(max_team_size);
        while team.len() < max_team_size {
            let (id, factory_species) =
                match rand_util::sample_no_replace(self.prng.as_mut(), &mut pool) {
                    Some(entry) => entry,
                    None => break,
                };
            let species = match self.dex.species.try_get_by_id(id)? {
                Some(species) => species,
                None => continue,
            };
            if tier_value(tier)
                .zip(tier_value(species.tier))
                .is_some_and(|(tier, species_tier)| species_tier > tier)
            {
                continue;
            }
            if details.base_formes.contains(&species.base_species) {
                continue;
            }

            let set = match self.curated_set(&species, &factory_species.sets, &details, variant)? {
                Some(set) => set,
                None => continue,
            };

            let types = species.types();
            let mut skip = false;
            for typ in &types {
                if details.type_count(*typ) >= type_limit
                    && rand_util::chance(self.prng.as_mut(), 4, 5)
                {
                    skip = true;
                    break;
                }
            }
            if skip {
                trace!("Rejecting {}: type limit", species.name);
                continue;
            }
            if details.type_combo_count(&type_combo_key(&species, &set.ability))
                >= type_combo_limit
            {
                trace!("Rejecting {}: type combination limit", species.name);
                continue;
            }

            *details
                .type_combo_count
                .entry(species.type_combination())
                .or_default() += 1;
            self.record_curated_member(&mut details, rules, &species, &set);
            debug!("Accepted {} into slot {}", set.species, team.len() + 1);
            team.push(set);
        }

        if team.len() < max_team_size {
            return Ok(None);
        }
        if !details.force_result {
            if let Some(family) = rules
                .required_families
                .iter()
                .find(|family| details.has(family) == 0)
            {
                trace!("Team is missing {family}");
                return Ok(None);
            }
            if details.has_weakness_of_at_least(weakness_threshold) {
                trace!("Team has an uncovered weakness");
                return Ok(None);
            }
        }
        Ok(Some(team))
    }

    fn bss_factory_team_attempt(&mut self, force_result: bool) -> Result<Option<Vec<MonData>>> {
        let variant = CuratedVariant::Bss;
        let rules = variant.rules();
        let sets: &'d dyn SetRepository = self.sets;
        let catalog = sets.bss_factory_sets();
        let max_team_size = self.format.rules.max_team_size;
        let force_monotype = self.format.rules.force_monotype;
        let type_limit = self.format.composition.type_limit;
        let weakness_threshold = self.format.composition.factory_weakness_threshold;
        // The pool never shrinks, so bound the number of draws.
        let max_draws = catalog.len().max(1) * max_team_size.max(1);

        let mut details = FactoryTeamDetails::new(force_result);
        let mut team = Vec::with_capacity(max_team_size);
        let mut draws = 0;
        while team.len() < max_team_size && draws < max_draws {
            draws += 1;

            let mut cumulative = Vec::with_capacity(catalog.len());
            let mut max_usage = 0u64;
            for (id, factory_species) in catalog {
                let species = match self.dex.species.try_get_by_id(id)? {
                    Some(species) => species,
                    None => continue,
                };
                if details.base_formes.contains(&species.base_species) {
                    continue;
                }
                max_usage += u64::from(factory_species.usage);
                cumulative.push((species, factory_species, max_usage));
            }
            let usage = rand_util::range(self.prng.as_mut(), 1, max_usage);
            let mut last = 0;
            let mut drawn = None;
            for (species, factory_species, total) in cumulative {
                if usage > last && usage <= total {
                    drawn = Some((species, factory_species));
                    break;
                }
                last = total;
            }
            let (species, factory_species) = match drawn {
                Some(drawn) => drawn,
                None => continue,
            };

            if force_monotype.is_some_and(|typ| !species.has_type(typ)) {
                continue;
            }
            if details.base_formes.contains(&species.base_species) {
                continue;
            }
            let types = species.types();
            let mut skip = false;
            for typ in &types {
                if details.type_count(*typ) >= type_limit
                    && rand_util::chance(self.prng.as_mut(), 4, 5)
                {
                    skip = true;
                    break;
                }
            }
            if skip {
                trace!("Rejecting {}: type limit", species.name);
                continue;
            }

            let set = match self.curated_set(&species, &factory_species.sets, &details, variant)? {
                Some(set) => set,
                None => continue,
            };
            let type_combo = type_combo_key(&species, &set.ability);
            if details.type_combo_count(&type_combo) > 0 {
                trace!("Rejecting {}: type combination limit", species.name);
                continue;
            }
            // Item Clause.
            if set
                .item
                .as_ref()
                .is_some_and(|item| details.has(Id::from(item.as_str()).as_str()) > 0)
            {
                trace!("Rejecting {}: item clause", species.name);
                continue;
            }

            details.type_combo_count.insert(type_combo, 1);
            self.record_curated_member(&mut details, rules, &species, &set);
            debug!("Accepted {} into slot {}", set.species, team.len() + 1);
            team.push(set);
        }

        if team.len() < max_team_size {
            return Ok(None);
        }
        if !details.force_result && details.has_weakness_of_at_least(weakness_threshold) {
            trace!("Team has an uncovered weakness");
            return Ok(None);
        }
        Ok(Some(team))
    }

    /// Picks one curated set for the species that fits the team.
    ///
    /// Sets that add a move family the team is missing are preferred. When no set fits, a set is
    /// only forced onto the team once quality checks are off.
    fn curated_set(
        &mut self,
        species: &SpeciesData,
        set_list: &[FactorySet],
        details: &FactoryTeamDetails,
        variant: CuratedVariant,
    ) -> Result<Option<MonData>> {
        let rules = variant.rules();
        let adjust_level = self.format.rules.adjust_level;
        let prng = self.prng.as_mut();

        let mut pool = Vec::new();
        let mut priority_pool = Vec::new();
        for set in set_list {
            if let CuratedVariant::Factory(_) = variant {
                if let Some(items) = &set.item {
                    let items = items.values();
                    if !items.is_empty()
                        && items
                            .iter()
                            .all(|item| rules.item_capped(details, &Id::from(item.as_str())))
                    {
                        continue;
                    }
                }
                // One weather setter per team.
                if details.weather.is_some() {
                    if let Some(abilities) = &set.ability {
                        let abilities = abilities.values();
                        if !abilities.is_empty()
                            && abilities.iter().all(|ability| {
                                lookup(WEATHER_ABILITIES, &Id::from(ability.as_str())).is_some()
                            })
                        {
                            continue;
                        }
                    }
                }
            }

            let mut reject = false;
            let mut fills_missing_family = false;
            let mut move_variants = Vec::with_capacity(set.moves.len());
            for slot in &set.moves {
                let variants = slot.values();
                let index = rand_util::range(prng, 0, variants.len() as u64) as usize;
                if let Some(name) = variants.get(index) {
                    let id = Id::from(name.as_str());
                    if rules.move_capped(details, &id) {
                        reject = true;
                        break;
                    }
                    if rules.fills_missing_family(details, &id) {
                        fills_missing_family = true;
                    }
                }
                move_variants.push(index);
            }
            if reject {
                continue;
            }
            if fills_missing_family {
                priority_pool.push(CuratedCandidate {
                    set,
                    move_variants: Some(move_variants.clone()),
                });
            }
            pool.push(CuratedCandidate {
                set,
                move_variants: Some(move_variants),
            });
        }
        if !priority_pool.is_empty() {
            pool = priority_pool;
        }
        if pool.is_empty() {
            if !details.force_result {
                return Ok(None);
            }
            pool = set_list
                .iter()
                .map(|set| CuratedCandidate {
                    set,
                    move_variants: None,
                })
                .collect();
        }

        let candidate = match rand_util::sample_slice(prng, &pool) {
            Some(candidate) => candidate,
            None => return Ok(None),
        };
        let set = candidate.set;
        let mut moves = Vec::with_capacity(set.moves.len());
        for (i, slot) in set.moves.iter().enumerate() {
            let name = match &candidate.move_variants {
                Some(variants) => variants.get(i).and_then(|index| slot.values().get(*index)),
                None => slot.sample(prng),
            };
            if let Some(name) = name {
                moves.push(name.clone());
            }
        }

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
        let nature = set
            .nature
            .as_ref()
            .and_then(|nature| nature.sample(prng))
            .copied()
            .unwrap_or(Nature::Serious);
        let gender = set
            .gender
            .or_else(|| species.fixed_gender())
            .unwrap_or_else(|| random_gender(prng));
        let shiny = match set.shiny {
            Some(shiny) => shiny,
            None => rand_util::chance(prng, 1, 1024),
        };
        let (name, level) = match variant {
            CuratedVariant::Factory(tier) => (
                set.name.clone(),
                adjust_level
                    .or(set.level)
                    .unwrap_or(if tier == Tier::LC { 5 } else { 100 }),
            ),
            CuratedVariant::Bss => (
                set.nickname.clone().or_else(|| set.name.clone()),
                set.level.unwrap_or(50),
            ),
        };

        Ok(Some(MonData {
            name: name.unwrap_or_else(|| species.base_species.clone()),
            species: set.species.clone(),
            gender: Some(gender),
            shiny,
            level,
            moves,
            ability,
            item,
            evs: set.evs.complete(0),
            ivs: set.ivs.complete(31),
            nature: Some(nature),
            happiness: Some(set.happiness.unwrap_or(255)),
            tera_type: None,
            role: None,
        }))
    }

    /// Updates team state with a newly accepted member.
    fn record_curated_member(
        &self,
        details: &mut FactoryTeamDetails,
        rules: &CuratedRules,
        species: &SpeciesData,
        set: &MonData,
    ) {
        let types = species.types();
        for typ in &types {
            *details.type_count.entry(*typ).or_default() += 1;
        }
        details.base_formes.insert(species.base_species.clone());
        if let Some(item) = &set.item {
            *details.has.entry(Id::from(item.as_str())).or_default() += 1;
        }

        let ability = Id::from(set.ability.as_str());
        if let Some(weather) = lookup(WEATHER_ABILITIES, &ability) {
            details.weather = Some(Id::from(weather));
        }

        for name in &set.moves {
            let id = Id::from(name.as_str());
            if let Some(family) = lookup(rules.required_moves, &id) {
                details.has.insert(Id::from_known(family), 1);
            }
            *details.has.entry(id).or_default() += 1;
        }

        // Every weakness should be covered by at least one resistance.
        let resisted_by_ability = lookup(rules.resistance_abilities, &ability).unwrap_or_default();
        for typ in Type::ALL {
            if details.resistances.get(&typ).is_some_and(|count| *count >= 1) {
                continue;
            }
            let resists = resisted_by_ability.contains(&typ)
                || self.dex.immune(typ, &types)
                || self.dex.effectiveness(typ, &types) < 0;
            if resists {
                *details.resistances.entry(typ).or_default() += 1;
                details.weaknesses.insert(typ, 0);
            } else if self.dex.effectiveness(typ, &types) > 0 {
                *details.weaknesses.entry(typ).or_default() += 1;
            }
        }
    }
}

fn random_gender(prng: &mut dyn PseudoRandomNumberGenerator) -> Gender {
    if rand_util::chance(prng, 1, 2) {
        Gender::Male
    } else {
        Gender::Female
    }
}

#[cfg(test)]
mod factory_test {
    use assert_matches::assert_matches;
    use battler_data::Tier;
    use battler_test_utils::{
        static_local_data_store,
        test_sets_dir,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        Format,
        RandomTeamGenerator,
        SetCatalog,
        error::GenerationExhaustedError,
        generator::factory::{
            FACTORY_RULES,
            tier_value,
        },
    };

    /// A Battle Factory whose quality gate rejects every complete team.
    fn unbalanced_factory(attempt_ceiling_factor: u32) -> Format {
        Format::new(
            serde_json::from_str(&format!(
                r#"{{
                    "name": "Battle Factory",
                    "team_generator": "Factory",
                    "composition": {{
                        "factory_weakness_threshold": 0,
                        "factory_max_depth": 2,
                        "attempt_ceiling_factor": {attempt_ceiling_factor}
                    }}
                }}"#
            ))
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn stronger_tiers_have_higher_values() {
        assert!(tier_value(Tier::Uber) > tier_value(Tier::OU));
        assert_eq!(tier_value(Tier::OU), tier_value(Tier::UUBL));
        assert_eq!(tier_value(Tier::PU), Some(0));
        assert_eq!(tier_value(Tier::LC), None);
    }

    #[test]
    fn hazard_moves_fill_required_families() {
        let families = FACTORY_RULES
            .required_moves
            .iter()
            .map(|(_, family)| *family)
            .collect::<Vec<_>>();
        for family in FACTORY_RULES.required_families {
            assert!(families.contains(family));
        }
    }

    #[test]
    fn fails_when_quality_gate_never_passes_before_max_depth() {
        let sets = SetCatalog::new(test_sets_dir()).unwrap();
        // The ceiling equals the max depth, so no attempt skips the quality gate.
        let mut generator =
            RandomTeamGenerator::new(unbalanced_factory(1), static_local_data_store(), &sets, Some(3))
                .unwrap()
                .with_factory_tier(Tier::OU);
        assert_matches!(generator.get_team(), Err(error) => {
            assert_matches!(error.downcast_ref::<GenerationExhaustedError>(), Some(error) => {
                assert_eq!(error.seed, 3);
            });
        });
    }

    #[test]
    fn accepts_unbalanced_team_from_max_depth() {
        let sets = SetCatalog::new(test_sets_dir()).unwrap();
        for seed in 0..5 {
            let mut generator = RandomTeamGenerator::new(
                unbalanced_factory(10),
                static_local_data_store(),
                &sets,
                Some(seed),
            )
            .unwrap()
            .with_factory_tier(Tier::OU);
            let team = generator.get_team().unwrap();
            assert_eq!(team.members.len(), 6, "seed {seed}");
        }
    }
}
