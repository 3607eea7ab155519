use ahash::HashSet;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Id,
    Identifiable,
    ItemFlag,
};

/// Data about a particular item.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ItemData {
    /// Name of the item.
    pub name: String,
    /// Item flags.
    #[serde(default)]
    pub flags: HashSet<ItemFlag>,
    /// The species forme that holding this item forces.
    pub force_forme: Option<String>,
    /// The generation the item was introduced in.
    #[serde(default)]
    pub generation: u8,
    /// Marks items that are not part of the standard game.
    pub nonstandard: Option<String>,
}

impl ItemData {
    /// Checks if the item is a technical record or a ball, which are rarely worth holding.
    pub fn filler(&self) -> bool {
        self.flags.contains(&ItemFlag::TechnicalRecord) || self.flags.contains(&ItemFlag::Ball)
    }
}

impl Identifiable for ItemData {
    fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }
}

#[cfg(test)]
mod item_data_test {
    use crate::{
        ItemData,
        ItemFlag,
    };

    #[test]
    fn balls_and_records_are_filler() {
        let data: ItemData = serde_json::from_str(
            r#"{
                "name": "Poke Ball",
                "flags": ["Ball"],
                "generation": 1
            }"#,
        )
        .unwrap();
        assert!(data.filler());

        let data: ItemData = serde_json::from_str(
            r#"{
                "name": "Leftovers",
                "generation": 2
            }"#,
        )
        .unwrap();
        assert!(!data.filler());
        assert!(!data.flags.contains(&ItemFlag::Berry));
    }
}
