use serde::{
    Deserialize,
    Serialize,
};

/// The number of hits a multi-hit move makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MultihitType {
    /// Always hits the same number of times.
    Static(u8),
    /// Hits a random number of times in the inclusive range.
    Range(u8, u8),
}

impl MultihitType {
    /// The largest number of hits possible.
    pub fn max(&self) -> u8 {
        match self {
            Self::Static(n) => *n,
            Self::Range(_, max) => *max,
        }
    }

    /// Checks if the number of hits is randomized.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(..))
    }
}
