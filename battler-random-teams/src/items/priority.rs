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

/// Items that are decided by the species, role, or a signature move.
pub(crate) fn priority_item(
    prng: &mut dyn PseudoRandomNumberGenerator,
    check: &ItemCheck,
) -> Option<ItemSelection> {
    let species = check.context.species;
    let role = check.context.role;
    let ability = check.ability;

    if !species.required_items.is_empty() {
        // Arceus always holds its plate.
        let item = if species.base_species == "Arceus" {
            species.required_items.first()
        } else {
            rand_util::sample_slice(prng, &species.required_items)
        };
        return item.cloned().map(ItemSelection::Item);
    }
    if role == Role::AvPivot {
        return ItemSelection::item("Assault Vest");
    }
    if role == Role::BulkySetup && (ability == "Quark Drive" || ability == "Protosynthesis") {
        return ItemSelection::item("Booster Energy");
    }
    if check.context.is("pikachu") {
        return ItemSelection::item("Light Ball");
    }
    if check.context.is("regieleki") {
        return ItemSelection::item("Magnet");
    }
    if ability == "Imposter" || (check.context.is("magnezone") && check.has_move("bodypress")) {
        return ItemSelection::item("Choice Scarf");
    }
    if check.has_move("bellydrum") && check.has_move("substitute") {
        return ItemSelection::item("Salac Berry");
    }
    if ["Cheek Pouch", "Cud Chew", "Harvest"].contains(&ability)
        || check.has_any_move(&["bellydrum", "filletaway"])
    {
        return ItemSelection::item("Sitrus Berry");
    }
    if check.has_any_move(&["healingwish", "switcheroo", "trick"]) {
        if check.speed_between(60, 108) && role != Role::Wallbreaker {
            return ItemSelection::item("Choice Scarf");
        }
        return if check.physical() > check.special() {
            ItemSelection::item("Choice Band")
        } else {
            ItemSelection::item("Choice Specs")
        };
    }
    if (ability == "Guts" || check.has_move("facade")) && !check.has_move("sleeptalk") {
        return if check.context.has_type(Type::Fire) || ability == "Toxic Boost" {
            ItemSelection::item("Toxic Orb")
        } else {
            ItemSelection::item("Flame Orb")
        };
    }
    if (ability == "Magic Guard" && check.damaging() > 1)
        || (ability == "Sheer Force" && check.counter.has(MoveTag::SheerForce))
    {
        return ItemSelection::item("Life Orb");
    }
    if check.has_move("shellsmash") {
        return ItemSelection::item("White Herb");
    }
    if check.has_move("populationbomb") {
        return ItemSelection::item("Wide Lens");
    }
    if check.has_move("stuffcheeks") {
        return ItemSelection::item("Salac Berry");
    }
    if ability == "Unburden" {
        return if check.has_move("closecombat") {
            ItemSelection::item("White Herb")
        } else {
            ItemSelection::item("Sitrus Berry")
        };
    }
    if check.has_move("acrobatics") {
        return if ability == "Grassy Surge" {
            ItemSelection::item("Grassy Seed")
        } else {
            Some(ItemSelection::Nothing)
        };
    }
    if check.has_move("auroraveil") || (check.has_move("lightscreen") && check.has_move("reflect"))
    {
        return ItemSelection::item("Light Clay");
    }
    if check.has_move("rest")
        && !check.has_move("sleeptalk")
        && ability != "Natural Cure"
        && ability != "Shed Skin"
    {
        return ItemSelection::item("Chesto Berry");
    }
    if check.context.is("scyther") {
        return if check.context.is_lead {
            ItemSelection::item("Eviolite")
        } else {
            ItemSelection::item("Heavy-Duty Boots")
        };
    }
    if species.not_fully_evolved() {
        return ItemSelection::item("Eviolite");
    }
    if check.effectiveness(Type::Rock) >= 2 {
        return ItemSelection::item("Heavy-Duty Boots");
    }
    None
}
