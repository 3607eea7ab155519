mod rules;
mod selector;

pub use rules::AbilityCheck;
pub use selector::select_ability;
