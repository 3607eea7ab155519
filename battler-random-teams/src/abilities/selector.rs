use std::{
    cmp::Ordering,
    rc::Rc,
};

use anyhow::Result;
use battler_data::AbilityData;
use battler_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use log::trace;

use crate::{
    abilities::{
        AbilityCheck,
        rules::{
            ability_override,
            should_cull_ability,
        },
    },
    error::WrapOptionError,
};

/// Abilities rated below this are only picked when nothing else is left.
const MIN_USEFUL_RATING: f32 = 1.0;

fn by_rating(a: &Rc<AbilityData>, b: &Rc<AbilityData>) -> Ordering {
    b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
}

/// Selects an ability for a random set.
///
/// Abilities are ranked by rating. Ones that do not fit the moveset or team are culled, and the
/// top few remaining abilities may swap places when their ratings are close.
pub fn select_ability(
    prng: &mut dyn PseudoRandomNumberGenerator,
    check: &AbilityCheck,
) -> Result<String> {
    let mut abilities = check
        .context
        .abilities
        .iter()
        .map(|ability| check.dex.abilities.get(ability))
        .collect::<Result<Vec<_>>>()?;
    abilities.sort_by(by_rating);

    if abilities.len() <= 1 {
        return abilities
            .first()
            .map(|ability| ability.name.clone())
            .wrap_expectation(format!("{} has no abilities", check.context.species.name));
    }

    if let Some(ability) = ability_override(check) {
        trace!("{} is forced to have {ability}", check.context.species.name);
        return Ok(ability.to_owned());
    }

    let mut allowed = abilities
        .iter()
        .filter(|ability| {
            ability.rating >= MIN_USEFUL_RATING && !should_cull_ability(&ability.name, check)
        })
        .cloned()
        .collect::<Vec<_>>();
    if allowed.is_empty() {
        allowed = abilities;
    }
    if allowed.len() == 1 {
        return Ok(allowed[0].name.clone());
    }

    let rating = |allowed: &[Rc<AbilityData>], index: usize| allowed[index].rating;
    if allowed.len() >= 3 && rating(&allowed, 0) - 0.5 <= rating(&allowed, 2) {
        let swap_second_and_third = if rating(&allowed, 1) <= rating(&allowed, 2) {
            rand_util::chance(prng, 1, 2)
        } else {
            rand_util::chance(prng, 1, 3)
        };
        if swap_second_and_third {
            allowed.swap(1, 2);
        }
        let swap_first_and_second = if rating(&allowed, 0) <= rating(&allowed, 1) {
            rand_util::chance(prng, 2, 3)
        } else {
            rand_util::chance(prng, 1, 2)
        };
        if swap_first_and_second {
            allowed.swap(0, 1);
        }
    } else if rating(&allowed, 0) <= rating(&allowed, 1) {
        if rand_util::chance(prng, 1, 2) {
            allowed.swap(0, 1);
        }
    } else if rating(&allowed, 0) - 0.5 <= rating(&allowed, 1) {
        if rand_util::chance(prng, 1, 3) {
            allowed.swap(0, 1);
        }
    }

    Ok(allowed[0].name.clone())
}
