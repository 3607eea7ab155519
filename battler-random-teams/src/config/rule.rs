use std::{
    fmt,
    fmt::Display,
    hash,
    hash::Hash,
    str::FromStr,
};

use anyhow::{
    Error,
    Result,
};
use battler_data::{
    FastHashMap,
    FastHashSet,
    Id,
    Type,
};
use hashbrown::HashSet;
use serde_string_enum::{
    DeserializeStringEnum,
    SerializeStringEnum,
};

use crate::error::{
    WrapResultError,
    general_error,
};

/// A single rule attached to a format.
#[derive(Debug, Clone, Eq, SerializeStringEnum, DeserializeStringEnum)]
pub enum Rule {
    /// Bans something, such as a species, item, move, or ability. Serialized as `- ID`.
    Ban(Id),
    /// Unbans something. Serialized as `+ ID`.
    Unban(Id),
    /// Restricts something. Serialized as `* ID`.
    Restrict(Id),
    /// Some other rule attached to a value. Serialized as `name = value`.
    ///
    /// If `value` is empty, then the rule is simply serialized as `name`.
    Value { name: Id, value: String },
    /// Repeals a previously established rule. Serialized as `! name`.
    Repeal(Id),
}

impl Rule {
    /// Constructs a new named rule without a value.
    pub fn value_name(name: &str) -> Rule {
        Rule::Value {
            name: Id::from(name),
            value: String::new(),
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ban(id) => write!(f, "-{id}"),
            Self::Unban(id) => write!(f, "+{id}"),
            Self::Restrict(id) => write!(f, "*{id}"),
            Self::Value { name, value } => {
                if value.is_empty() {
                    write!(f, "{name}")
                } else {
                    write!(f, "{name}={value}")
                }
            }
            Self::Repeal(id) => write!(f, "!{id}"),
        }
    }
}

impl FromStr for Rule {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix('-') {
            return Ok(Self::Ban(Id::from(rest.trim())));
        }
        if let Some(rest) = s.strip_prefix('+') {
            return Ok(Self::Unban(Id::from(rest.trim())));
        }
        if let Some(rest) = s.strip_prefix('*') {
            return Ok(Self::Restrict(Id::from(rest.trim())));
        }
        if let Some(rest) = s.strip_prefix('!') {
            return Ok(Self::Repeal(Id::from(rest.trim())));
        }
        if s.is_empty() {
            return Err(general_error("rule cannot be empty"));
        }
        match s.split_once('=') {
            None => Ok(Self::Value {
                name: Id::from(s),
                value: String::new(),
            }),
            Some((name, value)) => Ok(Self::Value {
                name: Id::from(name.trim()),
                value: value.trim().to_owned(),
            }),
        }
    }
}

impl Hash for Rule {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Ban(id) | Self::Unban(id) | Self::Restrict(id) | Self::Repeal(id) => {
                id.hash(state)
            }
            Self::Value { name, .. } => name.hash(state),
        }
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Ban(a), Self::Ban(b)) => a == b,
            (Self::Unban(a), Self::Unban(b)) => a == b,
            (Self::Restrict(a), Self::Restrict(b)) => a == b,
            (Self::Value { name: a, .. }, Self::Value { name: b, .. }) => a == b,
            (Self::Repeal(a), Self::Repeal(b)) => a == b,
            _ => false,
        }
    }
}

/// A user-defined set of rules.
pub type SerializedRuleSet = HashSet<Rule>;

/// The resolved rules of a format, as consumed by team generators.
#[derive(Debug, Clone)]
pub struct RuleTable {
    values: FastHashMap<Id, String>,
    bans: FastHashSet<Id>,
    unbans: FastHashSet<Id>,
    custom_rules: Vec<String>,

    /// Number of Mons on a team.
    pub max_team_size: usize,
    /// Number of moves per Mon.
    pub max_move_count: usize,
    /// Level every Mon is forced to, if any.
    pub adjust_level: Option<u8>,
    /// Type every Mon must have, if any.
    pub force_monotype: Option<Type>,
}

impl RuleTable {
    /// Default team size.
    pub const DEFAULT_MAX_TEAM_SIZE: usize = 6;
    /// Default move count.
    pub const DEFAULT_MAX_MOVE_COUNT: usize = 4;

    /// Resolves the base rules of a format, followed by rules added on top of it.
    ///
    /// Custom rules are kept in their raw form as well, since generators treat direct banlist
    /// edits differently from bans inherited through the format.
    pub fn new(rules: &SerializedRuleSet, custom_rules: &[String]) -> Result<Self> {
        let mut table = Self {
            values: FastHashMap::default(),
            bans: FastHashSet::default(),
            unbans: FastHashSet::default(),
            custom_rules: custom_rules.to_vec(),
            max_team_size: Self::DEFAULT_MAX_TEAM_SIZE,
            max_move_count: Self::DEFAULT_MAX_MOVE_COUNT,
            adjust_level: None,
            force_monotype: None,
        };
        for rule in rules {
            table.apply(rule.clone());
        }
        for rule in custom_rules {
            let rule = Rule::from_str(rule)
                .wrap_error_with_format(format_args!("invalid custom rule: {rule}"))?;
            table.apply(rule);
        }
        table.resolve_numeric_rules()?;
        Ok(table)
    }

    fn apply(&mut self, rule: Rule) {
        match rule {
            Rule::Ban(id) | Rule::Restrict(id) => {
                self.unbans.remove(&id);
                self.bans.insert(id);
            }
            Rule::Unban(id) => {
                self.bans.remove(&id);
                self.unbans.insert(id);
            }
            Rule::Value { name, value } => {
                self.values.insert(name, value);
            }
            Rule::Repeal(id) => {
                self.values.remove(&id);
            }
        }
    }

    fn resolve_numeric_rules(&mut self) -> Result<()> {
        if let Some(value) = self.value("maxteamsize") {
            self.max_team_size = value
                .parse()
                .wrap_error_with_format(format_args!("invalid max team size: {value}"))?;
        }
        if let Some(value) = self.value("maxmovecount") {
            self.max_move_count = value
                .parse()
                .wrap_error_with_format(format_args!("invalid max move count: {value}"))?;
        }
        if let Some(value) = self.value("adjustlevel") {
            self.adjust_level = Some(
                value
                    .parse()
                    .wrap_error_with_format(format_args!("invalid adjust level: {value}"))?,
            );
        }
        // Unknown types are ignored rather than rejected.
        self.force_monotype = self
            .value("forcemonotype")
            .and_then(|value| Type::from_str(value).ok());
        Ok(())
    }

    /// Checks if the named rule is active.
    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(&Id::from(name))
    }

    /// Returns the value of the named rule.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(&Id::from(name)).map(|value| value.as_str())
    }

    /// Checks if the resource is banned.
    pub fn banned(&self, id: &Id) -> bool {
        self.bans.contains(id) && !self.unbans.contains(id)
    }

    /// Checks if the format edits its banlist directly.
    pub fn has_direct_custom_bans(&self) -> bool {
        self.custom_rules
            .iter()
            .map(|rule| rule.trim())
            .any(|rule| rule.starts_with(['-', '+', '*']))
    }

    /// Checks if the format uses a complex ban, which bans a combination of resources.
    pub fn has_complex_bans(&self) -> bool {
        self.custom_rules
            .iter()
            .map(|rule| rule.trim())
            .any(|rule| rule.contains('+') && !rule.starts_with('+'))
    }
}

#[cfg(test)]
mod rule_test {
    use std::str::FromStr;

    use assert_matches::assert_matches;
    use battler_data::Id;

    use crate::config::Rule;

    #[test]
    fn parses_banlist_operators() {
        assert_eq!(Rule::from_str("- Pikachu").unwrap(), Rule::Ban(Id::from("pikachu")));
        assert_eq!(Rule::from_str("+Porygon-Z").unwrap(), Rule::Unban(Id::from("porygonz")));
        assert_eq!(Rule::from_str("*Trick").unwrap(), Rule::Restrict(Id::from("trick")));
        assert_eq!(
            Rule::from_str("!Same Type Clause").unwrap(),
            Rule::Repeal(Id::from("sametypeclause"))
        );
    }

    #[test]
    fn parses_value_rules() {
        assert_matches!(Rule::from_str("Max Team Size = 3"), Ok(Rule::Value { name, value }) => {
            assert_eq!(name, Id::from("maxteamsize"));
            assert_eq!(value, "3");
        });
        assert_matches!(Rule::from_str("Same Type Clause"), Ok(Rule::Value { value, .. }) => {
            assert!(value.is_empty());
        });
        assert!(Rule::from_str("  ").is_err());
    }

    #[test]
    fn displays_in_parseable_form() {
        assert_eq!(Rule::Ban(Id::from("Knock Off")).to_string(), "-knockoff");
        assert_eq!(
            Rule::Value {
                name: Id::from("Adjust Level"),
                value: "50".to_owned(),
            }
            .to_string(),
            "adjustlevel=50"
        );
    }
}
