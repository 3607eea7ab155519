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
    sets::Role,
};

/// General item rules, ending in a default for every role.
pub(crate) fn singles_item(
    prng: &mut dyn PseudoRandomNumberGenerator,
    check: &ItemCheck,
) -> Option<ItemSelection> {
    let species = check.context.species;
    let stats = &species.base_stats;
    let role = check.context.role;
    let ability = check.ability;

    if check.physical() >= 4
        && !check.has_any_move(&[
            "fakeout",
            "firstimpression",
            "flamecharge",
            "rapidspin",
            "ruination",
            "superfang",
        ])
    {
        let scarf_requirements = role != Role::Wallbreaker
            && (stats.atk >= 100 || ability == "Huge Power" || ability == "Pure Power")
            && check.speed_between(60, 108)
            && ability != "Speed Boost"
            && !check.counter.has(MoveTag::Priority)
            && !check.has_move("aquastep");
        return if scarf_requirements && rand_util::chance(prng, 1, 2) {
            ItemSelection::item("Choice Scarf")
        } else {
            ItemSelection::item("Choice Band")
        };
    }
    if check.physical() == 3 && check.has_move("shedtail") {
        return ItemSelection::item("Choice Scarf");
    }
    if check.special() >= 4
        || (check.special() >= 3 && check.has_any_move(&["flipturn", "partingshot", "uturn"]))
    {
        let scarf_requirements = role != Role::Wallbreaker
            && stats.spa >= 100
            && check.speed_between(60, 108)
            && ability != "Speed Boost"
            && ability != "Tinted Lens"
            && check.physical() == 0;
        return if scarf_requirements && rand_util::chance(prng, 1, 2) {
            ItemSelection::item("Choice Scarf")
        } else {
            ItemSelection::item("Choice Specs")
        };
    }
    if check.damaging() >= 4 && role != Role::FastAttacker && role != Role::Wallbreaker {
        return ItemSelection::item("Assault Vest");
    }
    if check.counter.has(MoveTag::SpeedSetup) && check.effectiveness(Type::Ground) < 1 {
        return ItemSelection::item("Weakness Policy");
    }
    if check.context.is("urshifurapidstrike") {
        return ItemSelection::item("Punching Glove");
    }
    if check.context.is("lokix") && role == Role::Wallbreaker {
        return ItemSelection::item("Life Orb");
    }
    if check.context.is("toxtricity") && check.has_move("shiftgear") {
        return ItemSelection::item("Throat Spray");
    }
    if check.has_move("substitute") || ability == "Moody" {
        return ItemSelection::item("Leftovers");
    }
    let team_details = check.context.team_details;
    if !team_details.defog && !team_details.rapid_spin && check.effectiveness(Type::Rock) >= 1 {
        return ItemSelection::item("Heavy-Duty Boots");
    }
    if role == Role::FastSupport
        && check.has_any_move(&["defog", "rapidspin", "uturn", "voltswitch"])
        && !check.context.has_type(Type::Flying)
        && ability != "Levitate"
    {
        return ItemSelection::item("Heavy-Duty Boots");
    }

    // Low priority.
    if check.has_move("outrage") {
        return ItemSelection::item("Lum Berry");
    }
    if role != Role::FastAttacker
        && role != Role::TeraBlastUser
        && check.effectiveness(Type::Ground) >= 2
    {
        return ItemSelection::item("Air Balloon");
    }
    if (check.context.is("garchomp") && role == Role::FastSupport)
        || (ability == "Regenerator"
            && check.context.has_type(Type::Water)
            && stats.def >= 110
            && rand_util::chance(prng, 1, 3))
    {
        return ItemSelection::item("Rocky Helmet");
    }
    if role == Role::FastSupport
        && check.context.is_lead
        && !check.counter.has(MoveTag::Recovery)
        && !check.counter.has(MoveTag::Recoil)
        && check.defensive_total() < 300
    {
        return ItemSelection::item("Focus Sash");
    }
    match role {
        Role::BulkyAttacker | Role::BulkySupport | Role::BulkySetup => {
            ItemSelection::item("Leftovers")
        }
        Role::FastSupport | Role::FastBulkySetup => {
            if check.damaging() >= 3 {
                ItemSelection::item("Life Orb")
            } else {
                ItemSelection::item("Leftovers")
            }
        }
        Role::FastAttacker | Role::SetupSweeper | Role::TeraBlastUser | Role::Wallbreaker => {
            ItemSelection::item("Life Orb")
        }
        _ if check.context.doubles => ItemSelection::item("Sitrus Berry"),
        _ => ItemSelection::item("Leftovers"),
    }
}
