use std::rc::Rc;

use anyhow::Result;
use battler_data::{
    Id,
    MoveCategory,
    MoveData,
    Type,
};
use battler_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use indexmap::IndexSet;
use log::trace;

use crate::{
    dex::Dex,
    moves::{
        MoveCounter,
        MoveTag,
        TypeAdjustment,
        cull_move_pool,
        effective_type,
        move_lists::{
            MOVE_PAIRS,
            NO_STAB,
            RECOVERY_MOVES,
            SETUP,
            SPEED_SETUP,
            in_list,
        },
        remove_from_pool,
    },
    sets::Role,
    teams::BuildContext,
};

/// Builds a moveset out of a move pool.
///
/// Moves the set really wants (STAB, recovery, setup, coverage) are enforced first. The remaining
/// slots are filled at random. After every addition, the pool is culled of moves that no longer fit.
pub struct MovesetBuilder<'b, 'd> {
    dex: &'b Dex<'d>,
    context: &'b BuildContext<'b>,
    max_move_count: usize,
    moves: IndexSet<Id>,
    pool: Vec<Id>,
    counter: MoveCounter,
}

impl<'b, 'd> MovesetBuilder<'b, 'd> {
    pub fn new(
        dex: &'b Dex<'d>,
        context: &'b BuildContext<'b>,
        pool: Vec<Id>,
        max_move_count: usize,
    ) -> Self {
        Self {
            dex,
            context,
            max_move_count,
            moves: IndexSet::new(),
            pool,
            counter: MoveCounter::default(),
        }
    }

    /// Builds the moveset.
    pub fn build(mut self, prng: &mut dyn PseudoRandomNumberGenerator) -> Result<IndexSet<Id>> {
        self.cull()?;

        if self.pool.len() <= self.max_move_count {
            self.moves.extend(self.pool.drain(..));
            return Ok(self.moves);
        }

        if self.context.role == Role::TeraBlastUser {
            self.add_move(Id::from("terablast"))?;
        }
        if let Some(required_move) = &self.context.species.required_move {
            self.add_move(Id::from(required_move.as_str()))?;
        }

        self.enforce_stab(prng)?;
        self.enforce_hardcoded_moves()?;
        self.enforce_recovery(prng)?;
        self.enforce_setup(prng)?;
        self.enforce_coverage(prng)?;
        self.enforce_priority(prng)?;
        self.fill(prng)?;
        Ok(self.moves)
    }

    fn add_move(&mut self, id: Id) -> Result<()> {
        remove_from_pool(&mut self.pool, id.as_str());
        self.moves.insert(id);
        self.counter = MoveCounter::query(self.dex, &self.moves, self.context)?;
        self.cull()
    }

    fn cull(&mut self) -> Result<()> {
        cull_move_pool(
            self.dex,
            &self.moves,
            &mut self.pool,
            self.context,
            self.max_move_count,
        )
    }

    fn pool_has(&self, id: &str) -> bool {
        self.pool.iter().any(|pool_id| *pool_id == id)
    }

    /// Pool moves matching the predicate, in pool order.
    fn candidates<F>(&self, predicate: F) -> Result<Vec<Id>>
    where
        F: Fn(&Id, &MoveData) -> bool,
    {
        let mut candidates = Vec::new();
        for id in &self.pool {
            let data: Option<Rc<MoveData>> = self.dex.moves.try_get_by_id(id)?;
            if data.is_some_and(|data| predicate(id, data.as_ref())) {
                candidates.push(id.clone());
            }
        }
        Ok(candidates)
    }

    fn add_one_of(
        &mut self,
        prng: &mut dyn PseudoRandomNumberGenerator,
        candidates: Vec<Id>,
    ) -> Result<()> {
        if let Some(id) = rand_util::sample_slice(prng, &candidates).cloned() {
            trace!("enforcing {id} for {}", self.context.species.name);
            self.add_move(id)?;
        }
        Ok(())
    }

    fn stab_attack(&self, id: &Id, data: &MoveData) -> bool {
        !in_list(NO_STAB, id.as_str()) && data.damaging()
    }

    /// Checks if a STAB attack of the type should be forced into the moveset.
    fn should_enforce_type(&self, typ: Type) -> bool {
        let context = self.context;
        let missing = self.counter.type_count(typ) == 0;
        let attack = context.species.base_stats.atk;
        match typ {
            Type::Bug => self.pool_has("megahorn"),
            Type::Dragon => missing && !self.pool_has("dualwingbeat"),
            Type::Grass => {
                self.pool_has("leafstorm")
                    || (missing
                        && (attack >= 100
                            || context.has_type(Type::Electric)
                            || context.has_ability("Seed Sower")))
            }
            Type::Normal => self.pool_has("boomburst"),
            Type::Poison => !context.has_type(Type::Ground) && missing,
            Type::Psychic => {
                missing
                    && (self.pool_has("calmmind")
                        || self.pool_has("psychicfangs")
                        || self.pool_has("psychocut")
                        || context.has_ability("Psychic Surge")
                        || context.has_type(Type::Fire))
            }
            Type::Rock => missing && attack >= 80,
            Type::Steel => attack >= 95 && missing,
            Type::Water => !context.is("quagsire") && missing,
            _ => missing,
        }
    }

    fn enforce_stab(&mut self, prng: &mut dyn PseudoRandomNumberGenerator) -> Result<()> {
        let context = self.context;
        for typ in context.types.clone() {
            if !self.should_enforce_type(typ) {
                continue;
            }
            let candidates = self.candidates(|id, data| {
                self.stab_attack(id, data)
                    && effective_type(id, data, context, TypeAdjustment::Full) == typ
            })?;
            self.add_one_of(prng, candidates)?;
        }

        if self.counter.stab_counter == 0 {
            let candidates = self.candidates(|id, data| {
                self.stab_attack(id, data)
                    && context.has_type(effective_type(id, data, context, TypeAdjustment::Full))
            })?;
            self.add_one_of(prng, candidates)?;
        }

        if !self.counter.has(MoveTag::StabTera) && context.role != Role::BulkySupport {
            let candidates = self.candidates(|id, data| {
                self.stab_attack(id, data)
                    && effective_type(id, data, context, TypeAdjustment::JudgmentOnly)
                        == context.tera_type
            })?;
            self.add_one_of(prng, candidates)?;
        }
        Ok(())
    }

    fn enforce_hardcoded_moves(&mut self) -> Result<()> {
        if self.pool_has("facade") && self.context.has_ability("Guts") {
            self.add_move(Id::from("facade"))?;
        }
        if self.pool_has("stickyweb") {
            self.add_move(Id::from("stickyweb"))?;
        }
        if self.pool_has("revivalblessing") {
            self.add_move(Id::from("revivalblessing"))?;
        }
        if self.pool_has("toxic") && self.context.is("grafaiai") {
            self.add_move(Id::from("toxic"))?;
        }
        Ok(())
    }

    fn enforce_recovery(&mut self, prng: &mut dyn PseudoRandomNumberGenerator) -> Result<()> {
        if !matches!(
            self.context.role,
            Role::BulkySupport | Role::BulkyAttacker | Role::BulkySetup
        ) {
            return Ok(());
        }
        let candidates = self.pool_filtered(|id| in_list(RECOVERY_MOVES, id));
        self.add_one_of(prng, candidates)
    }

    fn enforce_setup(&mut self, prng: &mut dyn PseudoRandomNumberGenerator) -> Result<()> {
        if !self.context.role.is_setup() && self.context.role != Role::TeraBlastUser {
            return Ok(());
        }
        let non_speed = self.pool_filtered(|id| in_list(SETUP, id) && !in_list(SPEED_SETUP, id));
        if !non_speed.is_empty() {
            return self.add_one_of(prng, non_speed);
        }
        let any_setup = self.pool_filtered(|id| in_list(SETUP, id));
        self.add_one_of(prng, any_setup)
    }

    fn enforce_coverage(&mut self, prng: &mut dyn PseudoRandomNumberGenerator) -> Result<()> {
        let context = self.context;
        if matches!(
            context.role,
            Role::AvPivot | Role::FastSupport | Role::BulkySupport
        ) || self.counter.damaging_moves.len() > 1
        {
            return Ok(());
        }
        // The type of the last chosen attack, as written.
        let mut current_attack_type = None;
        for id in &self.moves {
            if let Some(data) = self.dex.moves.try_get_by_id(id)? {
                if data.damaging() {
                    current_attack_type = Some(data.primary_type);
                }
            }
        }
        let candidates = self.candidates(|id, data| {
            self.stab_attack(id, data)
                && current_attack_type
                    != Some(effective_type(
                        id,
                        data,
                        context,
                        TypeAdjustment::NoTeraBlast,
                    ))
        })?;
        self.add_one_of(prng, candidates)
    }

    fn enforce_priority(&mut self, prng: &mut dyn PseudoRandomNumberGenerator) -> Result<()> {
        let context = self.context;
        if !matches!(context.role, Role::BulkyAttacker | Role::BulkySetup) {
            return Ok(());
        }
        let candidates = self.candidates(|id, data| {
            context.has_type(effective_type(id, data, context, TypeAdjustment::AteOnly))
                && data.priority > 0
                && data.category != MoveCategory::Status
        })?;
        self.add_one_of(prng, candidates)
    }

    fn fill(&mut self, prng: &mut dyn PseudoRandomNumberGenerator) -> Result<()> {
        while self.moves.len() < self.max_move_count && !self.pool.is_empty() {
            if self.moves.len() + self.pool.len() <= self.max_move_count {
                self.moves.extend(self.pool.drain(..));
                break;
            }
            let id = match rand_util::sample_slice(prng, &self.pool) {
                Some(id) => id.clone(),
                None => break,
            };
            self.add_move(id.clone())?;
            for (first, second) in MOVE_PAIRS {
                let partner = if id == *first {
                    second
                } else if id == *second {
                    first
                } else {
                    continue;
                };
                if self.moves.len() < self.max_move_count && self.pool_has(partner) {
                    self.add_move(Id::from(*partner))?;
                }
            }
        }
        Ok(())
    }

    fn pool_filtered<F>(&self, predicate: F) -> Vec<Id>
    where
        F: Fn(&str) -> bool,
    {
        self.pool
            .iter()
            .filter(|id| predicate(id.as_str()))
            .cloned()
            .collect()
    }
}
