//! Move groups that shape how movesets are built.

/// Moves that restore HP.
pub const RECOVERY_MOVES: &[&str] = &[
    "healorder",
    "milkdrink",
    "moonlight",
    "morningsun",
    "recover",
    "roost",
    "shoreup",
    "slackoff",
    "softboiled",
    "strengthsap",
    "synthesis",
];

/// Moves that drop the user's stats.
pub const CONTRARY_MOVES: &[&str] = &[
    "armorcannon",
    "closecombat",
    "leafstorm",
    "makeitrain",
    "overheat",
    "spinout",
    "superpower",
    "vcreate",
];

/// Moves that boost Attack.
pub const PHYSICAL_SETUP: &[&str] = &[
    "bellydrum",
    "bulkup",
    "coil",
    "curse",
    "dragondance",
    "honeclaws",
    "howl",
    "meditate",
    "poweruppunch",
    "swordsdance",
    "tidyup",
];

/// Moves that boost Special Attack.
pub const SPECIAL_SETUP: &[&str] = &[
    "calmmind",
    "chargebeam",
    "geomancy",
    "nastyplot",
    "quiverdance",
    "tailglow",
    "torchsong",
];

/// Moves that boost both Attack and Special Attack.
pub const MIXED_SETUP: &[&str] = &[
    "clangoroussoul",
    "growth",
    "happyhour",
    "holdhands",
    "noretreat",
    "shellsmash",
    "workup",
];

/// Moves that only boost Speed.
pub const SPEED_SETUP: &[&str] = &["agility", "autotomize", "rockpolish"];

/// Every setup move.
pub const SETUP: &[&str] = &[
    "acidarmor",
    "agility",
    "autotomize",
    "bellydrum",
    "bulkup",
    "calmmind",
    "coil",
    "curse",
    "dragondance",
    "flamecharge",
    "growth",
    "honeclaws",
    "howl",
    "irondefense",
    "meditate",
    "nastyplot",
    "noretreat",
    "poweruppunch",
    "quiverdance",
    "rockpolish",
    "shellsmash",
    "shiftgear",
    "swordsdance",
    "tailglow",
    "tidyup",
    "trailblaze",
    "workup",
];

/// Attacks that should never be a Mon's only STAB move.
pub const NO_STAB: &[&str] = &[
    "accelerock",
    "aquajet",
    "beakblast",
    "bounce",
    "breakingswipe",
    "chatter",
    "chloroblast",
    "clearsmog",
    "dragontail",
    "eruption",
    "explosion",
    "fakeout",
    "flamecharge",
    "flipturn",
    "iceshard",
    "icywind",
    "incinerate",
    "machpunch",
    "meteorbeam",
    "mortalspin",
    "pluck",
    "pursuit",
    "quickattack",
    "reversal",
    "saltcure",
    "selfdestruct",
    "shadowsneak",
    "skydrop",
    "snarl",
    "steelbeam",
    "suckerpunch",
    "uturn",
    "watershuriken",
    "vacuumwave",
    "voltswitch",
    "waterspout",
];

/// Entry hazards.
pub const HAZARDS: &[&str] = &["spikes", "stealthrock", "stickyweb", "toxicspikes"];

/// Moves that switch the user out.
pub const PIVOTING_MOVES: &[&str] = &[
    "chillyreception",
    "flipturn",
    "partingshot",
    "shedtail",
    "teleport",
    "uturn",
    "voltswitch",
];

/// Moves that should be chosen together or not at all.
pub const MOVE_PAIRS: &[(&str, &str)] = &[
    ("lightscreen", "reflect"),
    ("sleeptalk", "rest"),
    ("protect", "wish"),
];

/// Checks if the move is in the list.
pub fn in_list(list: &[&str], id: &str) -> bool {
    list.contains(&id)
}
