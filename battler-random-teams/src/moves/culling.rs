use anyhow::Result;
use battler_data::Id;
use indexmap::IndexSet;
use log::trace;

use crate::{
    dex::Dex,
    moves::move_lists::{
        HAZARDS,
        MOVE_PAIRS,
        PHYSICAL_SETUP,
        PIVOTING_MOVES,
        SETUP,
        SPECIAL_SETUP,
        SPEED_SETUP,
    },
    teams::BuildContext,
};

/// A group of moves referenced by an incompatibility rule.
#[derive(Debug, Clone, Copy)]
pub enum MoveGroup<'a> {
    /// A fixed list of move IDs.
    List(&'a [&'a str]),
    /// A list of resolved move IDs.
    Ids(&'a [Id]),
}

impl<'a> MoveGroup<'a> {
    fn contains(&self, id: &Id) -> bool {
        match self {
            Self::List(list) => list.contains(&id.as_str()),
            Self::Ids(ids) => ids.contains(id),
        }
    }

    fn names(&self) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match *self {
            Self::List(list) => Box::new(list.iter().copied()),
            Self::Ids(ids) => Box::new(ids.iter().map(|id| id.as_str())),
        }
    }
}

/// Removes a move from the pool, swapping the last move into its place.
///
/// Returns whether the move was in the pool.
pub fn remove_from_pool(pool: &mut Vec<Id>, id: &str) -> bool {
    match pool.iter().position(|pool_id| *pool_id == id) {
        Some(index) => {
            pool.swap_remove(index);
            true
        }
        None => false,
    }
}

fn pool_contains(pool: &[Id], id: &str) -> bool {
    pool.iter().any(|pool_id| *pool_id == id)
}

fn settled(moves: &IndexSet<Id>, pool: &[Id], max_move_count: usize) -> bool {
    moves.len() + pool.len() <= max_move_count
}

/// Removes moves from the pool that conflict with moves already chosen.
///
/// For every chosen move in one group, moves of the other group are removed from the pool in group
/// order. Stops as soon as the chosen moves and the pool fit in the moveset.
pub fn incompatible_moves(
    moves: &IndexSet<Id>,
    pool: &mut Vec<Id>,
    first: MoveGroup,
    second: MoveGroup,
    max_move_count: usize,
) {
    if settled(moves, pool, max_move_count) {
        return;
    }
    for chosen in moves {
        for (owner, other) in [(second, first), (first, second)] {
            if !owner.contains(chosen) {
                continue;
            }
            for candidate in other.names() {
                if chosen != candidate && remove_from_pool(pool, candidate) {
                    trace!("{candidate} is incompatible with {chosen}");
                    if settled(moves, pool, max_move_count) {
                        return;
                    }
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
enum RuleGroup {
    /// Every status move.
    Status,
    Moves(&'static [&'static str]),
}

struct IncompatibilityRule {
    first: RuleGroup,
    second: RuleGroup,
    /// Species the rule does not apply to.
    exempt: &'static [&'static str],
}

const fn rule(first: &'static [&'static str], second: &'static [&'static str]) -> IncompatibilityRule {
    IncompatibilityRule {
        first: RuleGroup::Moves(first),
        second: RuleGroup::Moves(second),
        exempt: &[],
    }
}

const MAGNEZONE_MOVES: &[&str] = &["bodypress", "mirrorcoat", "steelbeam"];

const INCOMPATIBILITY_RULES: &[IncompatibilityRule] = &[
    // Sets that do not mesh.
    IncompatibilityRule {
        first: RuleGroup::Status,
        second: RuleGroup::Moves(&["healingwish", "memento", "switcheroo", "trick"]),
        exempt: &["spidops"],
    },
    IncompatibilityRule {
        first: RuleGroup::Moves(SETUP),
        second: RuleGroup::Moves(PIVOTING_MOVES),
        exempt: &["scyther", "scizor"],
    },
    rule(SETUP, HAZARDS),
    rule(SETUP, &["defog", "nuzzle", "toxic", "waterspout", "yawn"]),
    rule(PHYSICAL_SETUP, PHYSICAL_SETUP),
    rule(SPECIAL_SETUP, &["thunderwave"]),
    rule(&["substitute"], PIVOTING_MOVES),
    rule(SPEED_SETUP, &["aquajet", "rest", "trickroom"]),
    rule(&["curse"], &["rapidspin"]),
    rule(&["dragondance"], &["dracometeor"]),
    // Redundant attacks.
    rule(&["psychic"], &["psyshock"]),
    rule(&["surf"], &["hydropump"]),
    rule(&["wavecrash"], &["liquidation"]),
    rule(&["freezedry"], &["icebeam"]),
    rule(
        &["airslash", "bravebird", "hurricane"],
        &["airslash", "bravebird", "hurricane"],
    ),
    rule(&["knockoff"], &["foulplay"]),
    rule(&["doubleedge"], &["headbutt"]),
    rule(&["fireblast"], &["fierydance", "flamethrower"]),
    rule(&["lavaplume"], &["magmastorm"]),
    rule(&["thunderpunch"], &["wildcharge"]),
    rule(&["gunkshot"], &["direclaw", "poisonjab"]),
    rule(&["aurasphere"], &["focusblast"]),
    rule(&["closecombat"], &["drainpunch"]),
    rule(&["bugbite"], &["pounce"]),
    rule(&["bittermalice"], &["shadowball"]),
    rule(&["dragonpulse", "spacialrend"], &["dracometeor"]),
    // Redundant status moves.
    rule(&["taunt", "strengthsap"], &["encore"]),
    rule(&["toxic"], &["willowisp"]),
    rule(&["thunderwave", "toxic", "willowisp"], &["toxicspikes"]),
    // Species-specific conflicts.
    rule(&["nastyplot"], &["rockslide"]),
    rule(&["switcheroo"], &["fakeout", "suckerpunch"]),
    rule(&["snowscape"], &["swordsdance"]),
];

fn resolve<'a>(group: RuleGroup, status_moves: &'a [Id]) -> MoveGroup<'a> {
    match group {
        RuleGroup::Status => MoveGroup::Ids(status_moves),
        RuleGroup::Moves(list) => MoveGroup::List(list),
    }
}

/// Removes moves from the pool that should not be chosen alongside the current moveset.
pub fn cull_move_pool(
    dex: &Dex,
    moves: &IndexSet<Id>,
    pool: &mut Vec<Id>,
    context: &BuildContext,
    max_move_count: usize,
) -> Result<()> {
    if settled(moves, pool, max_move_count) {
        return Ok(());
    }

    // With two open slots and a single unpaired move, the unpaired move would force a pair apart.
    if moves.len() + 2 == max_move_count {
        let mut unpaired = pool.clone();
        for (first, second) in MOVE_PAIRS {
            if pool_contains(pool, first) && pool_contains(pool, second) {
                remove_from_pool(&mut unpaired, first);
                remove_from_pool(&mut unpaired, second);
            }
        }
        if let [only] = unpaired.as_slice() {
            remove_from_pool(pool, only.as_str());
        }
    }

    // With one open slot, pairs cannot fit.
    if moves.len() + 1 == max_move_count {
        for (first, second) in MOVE_PAIRS {
            if pool_contains(pool, first) && pool_contains(pool, second) {
                remove_from_pool(pool, first);
                remove_from_pool(pool, second);
            }
        }
    }

    let details = context.team_details;
    if details.stealth_rock {
        remove_from_pool(pool, "stealthrock");
    }
    if settled(moves, pool, max_move_count) {
        return Ok(());
    }
    if details.hazard_removal() {
        remove_from_pool(pool, "defog");
        remove_from_pool(pool, "rapidspin");
    }
    if details.sticky_web {
        remove_from_pool(pool, "stickyweb");
    }

    let status_moves = dex.status_moves()?;
    for rule in INCOMPATIBILITY_RULES {
        if rule.exempt.iter().any(|species| context.is(species)) {
            continue;
        }
        incompatible_moves(
            moves,
            pool,
            resolve(rule.first, status_moves),
            resolve(rule.second, status_moves),
            max_move_count,
        );
    }

    if !details.hazard_removal() && context.is("cryogonal") {
        remove_from_pool(pool, "haze");
    }

    incompatible_moves(
        moves,
        pool,
        MoveGroup::List(MAGNEZONE_MOVES),
        MoveGroup::List(MAGNEZONE_MOVES),
        max_move_count,
    );
    Ok(())
}
