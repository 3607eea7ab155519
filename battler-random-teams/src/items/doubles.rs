use battler_data::Type;
use battler_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    items::{
        ItemCheck,
        ItemSelection,
    },
    moves::MoveTag,
};

/// Items that only make sense with two Mons on the field.
pub(crate) fn doubles_item(
    prng: &mut dyn PseudoRandomNumberGenerator,
    check: &ItemCheck,
) -> Option<ItemSelection> {
    let ability = check.ability;
    let defensive_total = check.defensive_total();
    let choice_typed = [Type::Dragon, Type::Fighting, Type::Rock]
        .into_iter()
        .any(|typ| check.context.has_type(typ));

    if check.has_any_move(&["dragonenergy", "eruption", "waterspout"]) && check.damaging() >= 4 {
        return ItemSelection::item("Choice Scarf");
    }
    if check.has_move("blizzard")
        && ability != "Snow Warning"
        && !check.context.team_details.snow
    {
        return ItemSelection::item("Blunder Policy");
    }
    if check.effectiveness(Type::Rock) >= 2 && !check.context.has_type(Type::Flying) {
        return ItemSelection::item("Heavy-Duty Boots");
    }
    if check.physical() >= 4
        && !check.has_any_move(&["fakeout", "feint", "rapidspin", "suckerpunch"])
        && (choice_typed || check.has_any_move(&["flipturn", "uturn"]))
    {
        let scarf = !check.counter.has(MoveTag::Priority)
            && ability != "Speed Boost"
            && check.speed_between(60, 100)
            && rand_util::chance(prng, 1, 2);
        return if scarf {
            ItemSelection::item("Choice Scarf")
        } else {
            ItemSelection::item("Choice Band")
        };
    }
    if (check.special() >= 4 && (choice_typed || check.has_move("voltswitch")))
        || (check.special() >= 3
            && check.has_any_move(&["flipturn", "uturn"])
            && !check.has_any_move(&["acidspray", "electroweb"]))
    {
        let scarf = check.speed_between(60, 100) && rand_util::chance(prng, 1, 2);
        return if scarf {
            ItemSelection::item("Choice Scarf")
        } else {
            ItemSelection::item("Choice Specs")
        };
    }
    // Below the choice items on purpose.
    if (defensive_total < 250 && ability == "Regenerator") || check.context.is("pheromosa") {
        return ItemSelection::item("Life Orb");
    }
    if check.damaging() >= 4 && defensive_total >= 275 {
        return ItemSelection::item("Assault Vest");
    }
    if check.damaging() >= 3
        && check.context.species.base_stats.spe >= 60
        && ability != "Multiscale"
        && ability != "Sturdy"
        && !check.has_any_move(&[
            "acidspray",
            "clearsmog",
            "electroweb",
            "fakeout",
            "feint",
            "icywind",
            "incinerate",
            "naturesmadness",
            "rapidspin",
            "snarl",
            "uturn",
        ])
    {
        return if ability == "Defeatist" || defensive_total >= 275 {
            ItemSelection::item("Sitrus Berry")
        } else {
            ItemSelection::item("Life Orb")
        };
    }
    None
}
