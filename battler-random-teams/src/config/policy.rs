use serde::{
    Deserialize,
    Serialize,
};

/// Maximum number of Battle Factory regenerations before the quality gate is skipped.
pub const FACTORY_MAX_DEPTH: u32 = 12;
/// Maximum number of BSS Factory regenerations before the quality gate is skipped.
pub const BSS_FACTORY_MAX_DEPTH: u32 = 4;

/// Limits on team composition, enforced while species are sampled.
///
/// Limits are expressed for a team of six and scaled by [`TeamCompositionPolicy::limit_factor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamCompositionPolicy {
    /// Team size the limits are expressed for.
    pub reference_team_size: usize,
    /// Maximum number of Mons sharing a type.
    pub type_limit: usize,
    /// Maximum number of Mons weak to a single type.
    pub weakness_limit: usize,
    /// Maximum number of Mons sharing an exact type combination.
    pub type_combo_limit: usize,
    /// Maximum number of Mons sharing an exact type combination when every Mon shares a type.
    pub monotype_type_combo_limit: usize,
    /// Maximum number of Mons from the same tier, if limited.
    pub tier_limit: Option<usize>,
    /// A factory team with this many Mons weak to a type is regenerated.
    pub factory_weakness_threshold: usize,
    /// Regeneration depth at which factory teams are accepted as is.
    pub factory_max_depth: u32,
    /// Regeneration depth at which BSS factory teams are accepted as is.
    pub bss_factory_max_depth: u32,
    /// Attempts allowed per depth level before generation gives up entirely.
    pub attempt_ceiling_factor: u32,
}

impl Default for TeamCompositionPolicy {
    fn default() -> Self {
        Self {
            reference_team_size: 6,
            type_limit: 2,
            weakness_limit: 3,
            type_combo_limit: 1,
            monotype_type_combo_limit: 2,
            tier_limit: None,
            factory_weakness_threshold: 3,
            factory_max_depth: FACTORY_MAX_DEPTH,
            bss_factory_max_depth: BSS_FACTORY_MAX_DEPTH,
            attempt_ceiling_factor: 4,
        }
    }
}

impl TeamCompositionPolicy {
    /// Scale applied to every limit for the given team size.
    ///
    /// Rounds half up and never drops below 1.
    pub fn limit_factor(&self, team_size: usize) -> usize {
        let reference = self.reference_team_size.max(1);
        ((team_size + reference / 2) / reference).max(1)
    }

    /// Total number of attempts allowed for a generator with the given maximum depth.
    pub fn attempt_ceiling(&self, max_depth: u32) -> u32 {
        max_depth.max(1) * self.attempt_ceiling_factor.max(1)
    }
}
