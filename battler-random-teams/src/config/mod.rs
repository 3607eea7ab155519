mod format;
mod policy;
mod rule;

pub use format::{
    Format,
    FormatData,
    GameType,
    TeamGenerator,
};
pub use policy::{
    BSS_FACTORY_MAX_DEPTH,
    FACTORY_MAX_DEPTH,
    TeamCompositionPolicy,
};
pub use rule::{
    Rule,
    RuleTable,
    SerializedRuleSet,
};
