use battler_data::{
    Id,
    MoveCategory,
    Type,
};
use indexmap::IndexSet;

use crate::{
    dex::Dex,
    moves::{
        MoveCounter,
        MoveTag,
    },
    sets::Role,
    teams::BuildContext,
};

/// Everything an ability rule can look at.
pub struct AbilityCheck<'a, 'd> {
    pub dex: &'a Dex<'d>,
    pub moves: &'a IndexSet<Id>,
    pub counter: &'a MoveCounter,
    pub context: &'a BuildContext<'a>,
}

impl AbilityCheck<'_, '_> {
    fn has_move(&self, id: &str) -> bool {
        self.moves.contains(id)
    }

    fn has_ability(&self, name: &str) -> bool {
        self.context.has_ability(name)
    }

    fn is(&self, species: &str) -> bool {
        self.context.is(species)
    }

    fn physical(&self) -> usize {
        self.counter.category(MoveCategory::Physical)
    }

    fn effectiveness(&self, typ: Type) -> i8 {
        self.dex.effectiveness(typ, &self.context.types)
    }
}

type Predicate = fn(&AbilityCheck) -> bool;

/// Abilities that are never worth picking when an alternative exists.
pub(crate) const ALWAYS_CULLED: &[&str] = &[
    "Flare Boost",
    "Gluttony",
    "Hydration",
    "Ice Body",
    "Immunity",
    "Insomnia",
    "Own Tempo",
    "Quick Feet",
    "Rain Dish",
    "Snow Cloak",
    "Steadfast",
    "Steam Engine",
];

/// Abilities that are culled when their predicate holds.
pub(crate) const CULL_RULES: &[(&str, Predicate)] = &[
    ("Contrary", |c| !c.counter.has(MoveTag::Contrary)),
    ("Serene Grace", |c| !c.counter.has(MoveTag::SereneGrace)),
    ("Skill Link", |c| !c.counter.has(MoveTag::SkillLink)),
    ("Strong Jaw", |c| !c.counter.has(MoveTag::StrongJaw)),
    ("Chlorophyll", |c| {
        c.has_ability("Harvest")
            || (!c.has_move("sunnyday") && !c.context.team_details.sun && !c.is("lilligant"))
    }),
    ("Cloud Nine", |c| !c.is("golduck")),
    ("Competitive", |c| c.is("kilowattrel")),
    ("Compound Eyes", |c| !c.counter.has(MoveTag::Inaccurate)),
    ("No Guard", |c| !c.counter.has(MoveTag::Inaccurate)),
    ("Cursed Body", |c| c.has_ability("Infiltrator")),
    ("Defiant", |c| {
        c.physical() == 0
            || (c.has_ability("Prankster") && (c.has_move("thunderwave") || c.has_move("taunt")))
    }),
    ("Flash Fire", |c| {
        !c.is("houndoom") && c.effectiveness(Type::Fire) >= 1
    }),
    ("Guts", |c| !c.has_move("facade") && !c.has_move("sleeptalk")),
    ("Harvest", |c| !c.has_move("substitute")),
    ("Hustle", |c| c.physical() < 2),
    ("Inner Focus", |c| c.physical() < 2),
    ("Infiltrator", |c| {
        (c.has_move("rest") && c.has_move("sleeptalk"))
            || (c.context.doubles && c.has_ability("Clear Body"))
    }),
    ("Intimidate", |c| {
        c.has_ability("Hustle")
            || (c.has_ability("Sheer Force") && c.counter.has(MoveTag::SheerForce))
            || c.has_ability("Stakeout")
            || c.has_move("substitute")
    }),
    ("Iron Fist", |c| c.counter.iron_fist == 0),
    ("Justified", |c| c.physical() == 0),
    ("Mold Breaker", |c| c.has_ability("Sharpness")),
    ("Moxie", |c| c.physical() == 0 || c.has_move("stealthrock")),
    ("Overgrow", |c| c.counter.type_count(Type::Grass) == 0),
    ("Prankster", |c| c.counter.category(MoveCategory::Status) == 0),
    ("Pressure", |c| {
        c.counter.has(MoveTag::Setup)
            || c.counter.category(MoveCategory::Status) < 2
            || c.context.doubles
    }),
    ("Reckless", |c| !c.counter.has(MoveTag::Recoil)),
    ("Rock Head", |c| !c.counter.has(MoveTag::Recoil)),
    ("Sand Force", |c| !c.context.team_details.sand),
    ("Sand Veil", |c| !c.context.team_details.sand),
    ("Sand Rush", |c| !c.context.team_details.sand),
    ("Sap Sipper", |c| c.is("wyrdeer")),
    ("Seed Sower", |c| c.context.role == Role::BulkySupport),
    ("Shed Skin", |c| c.is("seviper")),
    ("Sheer Force", |c| {
        (c.is("braviaryhisui") && c.context.role == Role::Wallbreaker)
            || !c.counter.has(MoveTag::SheerForce)
            || ["Guts", "Sharpness", "Slush Rush"]
                .iter()
                .any(|ability| c.has_ability(ability))
    }),
    ("Slush Rush", |c| !c.context.team_details.snow),
    ("Solar Power", |c| !c.context.team_details.sun),
    ("Stakeout", |c| c.counter.damaging_moves.is_empty()),
    ("Sturdy", |c| c.counter.has(MoveTag::Recoil)),
    ("Swarm", |c| {
        c.counter.type_count(Type::Bug) == 0 || c.counter.has(MoveTag::Recovery)
    }),
    ("Sweet Veil", |c| c.context.has_type(Type::Grass)),
    ("Swift Swim", |c| {
        !c.has_move("raindance") && !c.context.team_details.rain
    }),
    ("Synchronize", |c| !c.is("umbreon") && !c.is("rabsca")),
    ("Technician", |c| {
        !c.counter.has(MoveTag::Technician) || c.has_ability("Punk Rock")
    }),
    ("Tinted Lens", |c| {
        c.is("braviaryhisui") && c.context.role == Role::FastSupport
    }),
    ("Unburden", |c| {
        c.has_ability("Prankster") || !c.counter.has(MoveTag::Setup)
    }),
    ("Volt Absorb", |c| {
        (c.has_ability("Iron Fist") && c.counter.iron_fist >= 2)
            || c.effectiveness(Type::Electric) < -1
    }),
    ("Water Absorb", |c| c.is("quagsire")),
    ("Weak Armor", |c| c.has_move("shellsmash")),
];

/// Abilities that are picked outright when their predicate holds, checked in order.
pub(crate) const OVERRIDES: &[(&str, Predicate)] = &[
    ("Rock Head", |c| c.is("arcaninehisui")),
    ("Reckless", |c| c.is("staraptor")),
    ("Cute Charm", |c| c.is("enamorus") && c.has_move("calmmind")),
    ("Corrosion", |c| c.has_ability("Corrosion") && c.has_move("toxic")),
    ("Guts", |c| {
        c.has_ability("Guts") && (c.has_move("facade") || c.has_move("sleeptalk"))
    }),
    ("Serene Grace", |c| {
        c.has_ability("Serene Grace") && c.has_move("headbutt")
    }),
    ("Technician", |c| {
        c.has_ability("Technician") && c.counter.has(MoveTag::Technician)
    }),
    ("Own Tempo", |c| c.has_ability("Own Tempo") && c.has_move("petaldance")),
    ("Slush Rush", |c| c.has_ability("Slush Rush") && c.has_move("snowscape")),
];

/// Checks if the ability is not worth picking for the set.
pub fn should_cull_ability(ability: &str, check: &AbilityCheck) -> bool {
    if ALWAYS_CULLED.contains(&ability) {
        return true;
    }
    CULL_RULES
        .iter()
        .find(|(name, _)| *name == ability)
        .is_some_and(|(_, predicate)| predicate(check))
}

/// The ability the set is forced to have, if any.
pub fn ability_override(check: &AbilityCheck) -> Option<&'static str> {
    OVERRIDES
        .iter()
        .find(|(_, predicate)| predicate(check))
        .map(|(ability, _)| *ability)
}
