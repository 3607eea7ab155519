use anyhow::Result;
use battler_data::{
    Accuracy,
    FastHashMap,
    Id,
    MoveCategory,
    MoveData,
    MoveFlag,
    Type,
};
use indexmap::IndexSet;

use crate::{
    dex::Dex,
    moves::move_lists::{
        CONTRARY_MOVES,
        HAZARDS,
        MIXED_SETUP,
        NO_STAB,
        PHYSICAL_SETUP,
        RECOVERY_MOVES,
        SETUP,
        SPECIAL_SETUP,
        SPEED_SETUP,
        in_list,
    },
    teams::BuildContext,
};

/// A property of a chosen move that other selections care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTag {
    /// Deals fixed or level-based damage.
    Damage,
    Technician,
    SkillLink,
    Recoil,
    Drain,
    /// Attack that matches the Tera type.
    StabTera,
    StrongJaw,
    Sound,
    Priority,
    SheerForce,
    SereneGrace,
    Inaccurate,
    Recovery,
    Contrary,
    PhysicalSetup,
    SpecialSetup,
    MixedSetup,
    SpeedSetup,
    Setup,
    Hazards,
}

/// Which type-changing effects apply when deciding what type a move really is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeAdjustment {
    /// Type-matching moves, -ate abilities, and Tera Blast.
    Full,
    /// Type-matching moves and -ate abilities.
    NoTeraBlast,
    /// Only type-matching moves.
    JudgmentOnly,
    /// Only -ate abilities.
    AteOnly,
}

const ATE_ABILITIES: [(&str, Type); 4] = [
    ("Aerilate", Type::Flying),
    ("Galvanize", Type::Electric),
    ("Pixilate", Type::Fairy),
    ("Refrigerate", Type::Ice),
];

/// The type a move will have when used by the Mon being built.
pub fn effective_type(
    id: &Id,
    data: &MoveData,
    context: &BuildContext,
    adjustment: TypeAdjustment,
) -> Type {
    let mut typ = data.primary_type;
    if adjustment != TypeAdjustment::AteOnly && (id == "judgment" || id == "revelationdance") {
        typ = context.species.primary_type;
    }
    if adjustment != TypeAdjustment::JudgmentOnly && typ == Type::Normal {
        for (ability, ate_type) in ATE_ABILITIES {
            if context.has_ability(ability) {
                typ = ate_type;
            }
        }
    }
    if adjustment == TypeAdjustment::Full && id == "terablast" {
        typ = context.tera_type;
    }
    typ
}

/// Aggregate properties of a candidate moveset.
///
/// Rebuilt from scratch every time a move is added.
#[derive(Debug, Default, Clone)]
pub struct MoveCounter {
    tags: FastHashMap<MoveTag, usize>,
    types: FastHashMap<Type, usize>,
    physical: usize,
    special: usize,
    status: usize,
    /// Moves that deal meaningful damage, in the order they were chosen.
    pub damaging_moves: IndexSet<Id>,
    /// Number of damaging moves that share a type with the Mon.
    pub stab_counter: usize,
    /// Number of punching moves.
    pub iron_fist: usize,
}

impl MoveCounter {
    /// Classifies every move in the moveset.
    ///
    /// Moves missing from the dex contribute nothing.
    pub fn query(dex: &Dex, moves: &IndexSet<Id>, context: &BuildContext) -> Result<Self> {
        let mut counter = Self::default();
        for id in moves {
            if let Some(data) = dex.moves.try_get_by_id(id)? {
                counter.classify(id, &data, context);
            }
        }
        Ok(counter)
    }

    fn classify(&mut self, id: &Id, data: &MoveData, context: &BuildContext) {
        let move_type = effective_type(id, data, context, TypeAdjustment::Full);
        let name = id.as_str();

        if data.fixed_damage() {
            self.add(MoveTag::Damage);
            self.damaging_moves.insert(id.clone());
        } else {
            match data.category {
                MoveCategory::Physical => self.physical += 1,
                MoveCategory::Special => self.special += 1,
                MoveCategory::Status => self.status += 1,
            }
        }

        if name == "lowkick" || (data.base_power > 0 && data.base_power <= 60 && name != "rapidspin") {
            self.add(MoveTag::Technician);
        }
        if data.multihit.is_some_and(|multihit| multihit.is_range() && multihit.max() == 5) {
            self.add(MoveTag::SkillLink);
        }
        if data.recoil_percent.is_some() || data.flags.contains(&MoveFlag::CrashDamage) {
            self.add(MoveTag::Recoil);
        }
        if data.drain_percent.is_some() {
            self.add(MoveTag::Drain);
        }

        if data.damaging() {
            if !in_list(NO_STAB, name) {
                *self.types.entry(move_type).or_default() += 1;
                if context.has_type(move_type) {
                    self.stab_counter += 1;
                }
                if context.tera_type == move_type {
                    self.add(MoveTag::StabTera);
                }
            }
            if data.flags.contains(&MoveFlag::Bite) {
                self.add(MoveTag::StrongJaw);
            }
            if data.flags.contains(&MoveFlag::Punch) {
                self.iron_fist += 1;
            }
            if data.flags.contains(&MoveFlag::Sound) {
                self.add(MoveTag::Sound);
            }
            if data.priority != 0 || (name == "grassyglide" && context.has_ability("Grassy Surge")) {
                self.add(MoveTag::Priority);
            }
            self.damaging_moves.insert(id.clone());
        }

        if !data.secondary_effects.is_empty() || data.has_sheer_force {
            self.add(MoveTag::SheerForce);
            if data
                .secondary_chance()
                .is_some_and(|chance| chance >= 20 && chance < 100)
            {
                self.add(MoveTag::SereneGrace);
            }
        }
        if let Accuracy::Chance(accuracy) = data.accuracy {
            if accuracy > 0 && accuracy < 90 {
                self.add(MoveTag::Inaccurate);
            }
        }

        for (list, tag) in [
            (RECOVERY_MOVES, MoveTag::Recovery),
            (CONTRARY_MOVES, MoveTag::Contrary),
            (PHYSICAL_SETUP, MoveTag::PhysicalSetup),
            (SPECIAL_SETUP, MoveTag::SpecialSetup),
            (MIXED_SETUP, MoveTag::MixedSetup),
            (SPEED_SETUP, MoveTag::SpeedSetup),
            (SETUP, MoveTag::Setup),
            (HAZARDS, MoveTag::Hazards),
        ] {
            if in_list(list, name) {
                self.add(tag);
            }
        }
    }

    fn add(&mut self, tag: MoveTag) {
        *self.tags.entry(tag).or_default() += 1;
    }

    /// Number of moves with the tag.
    pub fn get(&self, tag: MoveTag) -> usize {
        self.tags.get(&tag).copied().unwrap_or(0)
    }

    /// Checks if any move has the tag.
    pub fn has(&self, tag: MoveTag) -> bool {
        self.get(tag) > 0
    }

    /// Number of damaging moves of the type.
    pub fn type_count(&self, typ: Type) -> usize {
        self.types.get(&typ).copied().unwrap_or(0)
    }

    /// Number of moves in the category, excluding fixed-damage moves.
    pub fn category(&self, category: MoveCategory) -> usize {
        match category {
            MoveCategory::Physical => self.physical,
            MoveCategory::Special => self.special,
            MoveCategory::Status => self.status,
        }
    }
}
