use battler_data::{
    FastHashMap,
    FastHashSet,
    Id,
    Type,
};

use crate::{
    sets::Role,
    teams::MonData,
};

/// Facts about a procedurally built team that influence later members.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TeamDetails {
    pub rain: bool,
    pub sun: bool,
    pub sand: bool,
    pub snow: bool,
    pub spikes: u8,
    pub stealth_rock: bool,
    pub sticky_web: bool,
    pub toxic_spikes: bool,
    pub defog: bool,
    pub rapid_spin: bool,
    pub screens: bool,
    pub tera_blast: bool,
    /// One-based team position of the Mon with Illusion.
    pub illusion: Option<usize>,
}

impl TeamDetails {
    /// Checks if the team can remove hazards.
    pub fn hazard_removal(&self) -> bool {
        self.defog || self.rapid_spin
    }

    /// Records a new member, placed at the given one-based team position.
    pub fn record(&mut self, mon: &MonData, position: usize) {
        let has_move = |id: &str| mon.moves.iter().any(|move_id| Id::from(move_id.as_str()) == id);
        let ability = Id::from(mon.ability.as_str());
        if ability == "drizzle" || has_move("raindance") {
            self.rain = true;
        }
        if ability == "drought" || has_move("sunnyday") {
            self.sun = true;
        }
        if ability == "sandstream" {
            self.sand = true;
        }
        if ability == "snowwarning" || has_move("snowscape") || has_move("chillyreception") {
            self.snow = true;
        }
        if has_move("spikes") {
            self.spikes += 1;
        }
        if has_move("stealthrock") {
            self.stealth_rock = true;
        }
        if has_move("stickyweb") {
            self.sticky_web = true;
        }
        if has_move("toxicspikes") {
            self.toxic_spikes = true;
        }
        if has_move("defog") {
            self.defog = true;
        }
        if has_move("rapidspin") || has_move("mortalspin") || has_move("tidyup") {
            self.rapid_spin = true;
        }
        if has_move("auroraveil") || (has_move("reflect") && has_move("lightscreen")) {
            self.screens = true;
        }
        if mon.role == Some(Role::TeraBlastUser) {
            self.tera_blast = true;
        }
        if ability == "illusion" {
            self.illusion = Some(position);
        }
    }
}

/// Team state tracked while drawing curated sets.
#[derive(Debug, Default, Clone)]
pub struct FactoryTeamDetails {
    pub type_count: FastHashMap<Type, usize>,
    pub type_combo_count: FastHashMap<String, usize>,
    pub base_formes: FastHashSet<String>,
    /// Counts of items, moves, and move families on the team.
    pub has: FastHashMap<Id, usize>,
    /// Accept whatever team comes out, skipping quality checks.
    pub force_result: bool,
    pub weaknesses: FastHashMap<Type, usize>,
    pub resistances: FastHashMap<Type, usize>,
    /// Weather set by a member's ability.
    pub weather: Option<Id>,
}

impl FactoryTeamDetails {
    pub fn new(force_result: bool) -> Self {
        Self {
            force_result,
            ..Default::default()
        }
    }

    /// Number of team members with the item, move, or move family.
    pub fn has(&self, id: &str) -> usize {
        self.has.get(id).copied().unwrap_or(0)
    }

    /// Number of team members with the type.
    pub fn type_count(&self, typ: Type) -> usize {
        self.type_count.get(&typ).copied().unwrap_or(0)
    }

    /// Number of team members with the type combination.
    pub fn type_combo_count(&self, combo: &str) -> usize {
        self.type_combo_count.get(combo).copied().unwrap_or(0)
    }

    /// Checks if any type hits this many members super effectively without a resist on the team.
    pub fn has_weakness_of_at_least(&self, threshold: usize) -> bool {
        self.weaknesses.values().any(|count| *count >= threshold)
    }
}
