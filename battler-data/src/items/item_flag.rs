use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Item flags, which categorize items for generation rules.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum ItemFlag {
    /// A ball.
    #[string = "Ball"]
    Ball,
    /// A berry.
    #[string = "Berry"]
    Berry,
    /// Locks the holder's move choice.
    #[string = "ChoiceLocking"]
    ChoiceLocking,
    /// A gem.
    #[string = "Gem"]
    Gem,
    /// A technical record.
    #[string = "TechnicalRecord"]
    #[alias = "TR"]
    TechnicalRecord,
    /// A Z-Crystal.
    #[string = "ZCrystal"]
    ZCrystal,
    /// A Mega Stone.
    #[string = "MegaStone"]
    MegaStone,
}
