use anyhow::Result;
use battler_data::{
    Id,
    MoveCategory,
    SpeciesData,
    Stat,
    StatTable,
    Type,
};
use battler_prng::rand_util;
use indexmap::IndexSet;
use log::trace;

use crate::{
    abilities::{
        AbilityCheck,
        select_ability,
    },
    dex::Dex,
    error::{
        WrapOptionError,
        general_error,
    },
    generator::{
        RandomTeamGenerator,
        tier_level,
    },
    items::{
        ItemCheck,
        select_item,
    },
    moves::{
        MoveCounter,
        MovesetBuilder,
        remove_from_pool,
    },
    sets::{
        Role,
        SpeciesSetTable,
    },
    teams::{
        BuildContext,
        MonData,
        TeamDetails,
    },
};

const PIKACHU_CAPS: &[&str] = &[
    "", "-Original", "-Hoenn", "-Sinnoh", "-Unova", "-Kalos", "-Alola", "-Partner", "-World",
];

/// Level for a random set: the format's level, then the set table's level, then the tier's.
pub(crate) fn random_set_level(
    adjust_level: Option<u8>,
    table: &SpeciesSetTable,
    species: &SpeciesData,
) -> u8 {
    adjust_level
        .or_else(|| {
            table
                .get(&Id::from(species.name.as_str()))
                .and_then(|sets| sets.level)
        })
        .unwrap_or_else(|| tier_level(species.tier))
}

/// Calculates a Mon's maximum HP.
fn hp_stat(base: u16, iv: u16, ev: u16, level: u8) -> u32 {
    let base = u32::from(base) * 2 + u32::from(iv) + u32::from(ev) / 4 + 100;
    base * u32::from(level) / 100 + 10
}

/// Ally Switch fails when allies are controlled by different players.
fn replace_ally_switch(pool: &mut Vec<Id>, max_move_count: usize) {
    if let Some(index) = pool.iter().position(|id| *id == "allyswitch") {
        if pool.len() > max_move_count {
            remove_from_pool(pool, "allyswitch");
        } else {
            pool[index] = Id::from_known("sleeptalk");
        }
    }
}

/// HP EVs that maximize Stealth Rock switch-ins, or land on a HP value that activates berries.
///
/// `rock_effectiveness` is the effectiveness of Rock against the Mon's types.
fn hp_evs(
    base_hp: u16,
    level: u8,
    moves: &IndexSet<Id>,
    item: Option<&str>,
    ability: &str,
    rock_effectiveness: i8,
) -> u16 {
    let item_is = |name: &str| item == Some(name);
    let stealth_rock_weakness = if ability == "Magic Guard" || item_is("Heavy-Duty Boots") {
        0
    } else {
        rock_effectiveness
    };
    let mut evs = 85;
    while evs > 1 {
        let hp = hp_stat(base_hp, 31, evs, level);
        if moves.contains("substitute") && (item_is("Sitrus Berry") || item_is("Salac Berry")) {
            if hp % 4 == 0 {
                break;
            }
        } else if (moves.contains("bellydrum") || moves.contains("filletaway"))
            && (item_is("Sitrus Berry") || ability == "Gluttony")
        {
            if hp % 2 == 0 {
                break;
            }
        } else if stealth_rock_weakness <= 0
            || hp % (4 / stealth_rock_weakness as u32) > 0
            || item_is("Leftovers")
            || item_is("Life Orb")
        {
            break;
        }
        evs -= 4;
    }
    evs
}

/// Zeroes Attack when no move uses it, which minimizes confusion and Foul Play damage, and
/// zeroes Speed for Gyro Ball and Trick Room.
fn minimize_unused_stats(
    dex: &Dex,
    moves: &IndexSet<Id>,
    evs: &mut StatTable,
    ivs: &mut StatTable,
) -> Result<()> {
    let mut uses_attack = moves.contains("transform");
    for id in moves {
        if uses_attack {
            break;
        }
        if let Some(data) = dex.moves.try_get_by_id(id)? {
            uses_attack = !data.fixed_damage()
                && data.category == MoveCategory::Physical
                && *id != "bodypress"
                && *id != "foulplay";
        }
    }
    if !uses_attack {
        evs.set(Stat::Atk, 0);
        ivs.set(Stat::Atk, 0);
    }

    if moves.contains("gyroball") || moves.contains("trickroom") {
        evs.set(Stat::Spe, 0);
        ivs.set(Stat::Spe, 0);
    }
    Ok(())
}

impl<'d> RandomTeamGenerator<'d> {
    /// Procedurally builds a random set for the species.
    ///
    /// The set is built in order: moves, ability, item, level, then stats. Team state is only
    /// read here, never written.
    pub fn random_set(
        &mut self,
        species: &SpeciesData,
        team_details: &TeamDetails,
        is_lead: bool,
        doubles: bool,
    ) -> Result<MonData> {
        let sets = self.sets;
        let table = sets.random_sets(doubles);
        let level = random_set_level(self.format.rules.adjust_level, table, species);
        let max_move_count = self.format.rules.max_move_count;
        let shared_field = self.format.game_type.shared_field();
        let dex = &self.dex;
        let prng = self.prng.as_mut();

        let mut forme = species.name.clone();
        if species.battle_only_forme {
            if let Some(changes_from) = &species.changes_from {
                forme = changes_from.clone();
            }
        }
        if !species.cosmetic_formes.is_empty() {
            let formes = [species.name.clone()]
                .into_iter()
                .chain(species.cosmetic_formes.iter().cloned())
                .collect::<Vec<_>>();
            if let Some(cosmetic) = rand_util::sample_slice(prng, &formes) {
                forme = cosmetic.clone();
            }
        }

        let species_sets = table
            .get(&Id::from(species.name.as_str()))
            .wrap_not_found_error(format_args!("random sets for {}", species.name))?;
        let possible_sets = species_sets
            .sets
            .iter()
            .filter(|set| !(team_details.tera_blast && set.role == Role::TeraBlastUser))
            .collect::<Vec<_>>();
        let set = rand_util::sample_slice(prng, &possible_sets).ok_or_else(|| {
            general_error(format!("{} has no usable random sets", species.name))
        })?;
        let role = set.role;
        let mut pool = set
            .movepool
            .iter()
            .map(|name| Id::from(name.as_str()))
            .collect::<Vec<_>>();
        let tera_type = rand_util::sample_slice(prng, &set.tera_types)
            .copied()
            .unwrap_or(species.primary_type);

        if shared_field {
            replace_ally_switch(&mut pool, max_move_count);
        }

        let mut evs = StatTable::uniform(85);
        let mut ivs = StatTable::uniform(31);

        let context = BuildContext::new(species, team_details, is_lead, doubles, tera_type, role);
        let moves = MovesetBuilder::new(dex, &context, pool, max_move_count).build(prng)?;
        let counter = MoveCounter::query(dex, &moves, &context)?;

        let ability = select_ability(
            prng,
            &AbilityCheck {
                dex,
                moves: &moves,
                counter: &counter,
                context: &context,
            },
        )?;
        let item = select_item(
            prng,
            &ItemCheck {
                dex,
                moves: &moves,
                counter: &counter,
                context: &context,
                ability: &ability,
            },
        )?;

        if species.base_species == "Pikachu" {
            let cap = rand_util::sample_slice(prng, PIKACHU_CAPS).copied().unwrap_or_default();
            forme = format!("Pikachu{cap}");
        }

        evs.hp = hp_evs(
            species.base_stats.hp,
            level,
            &moves,
            item.as_deref(),
            &ability,
            dex.effectiveness(Type::Rock, &context.types),
        );
        minimize_unused_stats(dex, &moves, &mut evs, &mut ivs)?;

        let shiny = rand_util::chance(prng, 1, 1024);
        trace!(
            "Built {} ({role}) with {ability} and {}",
            forme,
            item.as_deref().unwrap_or("no item")
        );
        Ok(MonData {
            name: species.base_species.clone(),
            species: forme,
            gender: species.fixed_gender(),
            shiny,
            level,
            moves: moves.iter().map(|id| id.to_string()).collect(),
            ability,
            item,
            evs,
            ivs,
            nature: None,
            happiness: None,
            tera_type: Some(tera_type),
            role: Some(role),
        })
    }
}
